use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE, request::Parts},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, error::Category};
use tracing::error;

use bluebot_core::AppError;

/// JSON request body decoded into `T`.
///
/// Unlike `axum::Json` a request without a `Content-Type` header is still
/// read as JSON. Every client-side problem is a 400; only a body that could
/// not be read off the wire is a 500.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

fn declares_non_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(CONTENT_TYPE) else {
        return false;
    };

    let Ok(content_type) = content_type.to_str() else {
        return true;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    !(essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json")))
}

fn describe(err: &serde_json::Error) -> &'static str {
    match err.classify() {
        Category::Data => "Invalid field type in request",
        Category::Syntax | Category::Eof | Category::Io => "Invalid request body",
    }
}

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if declares_non_json(req.headers()) {
            return Err(AppError::bad_request(
                "Expected 'Content-Type: application/json' header",
            ));
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                return AppError::new(
                    StatusCode::PAYLOAD_TOO_LARGE,
                    anyhow::anyhow!("Request body too large"),
                );
            }
            error!(error = %rejection.body_text(), "Failed to read request body");
            AppError::internal_error("Error fetching request body")
        })?;

        let value = serde_json::from_slice(&bytes)
            .map_err(|err| AppError::bad_request(describe(&err)))?;

        Ok(JsonBody(value))
    }
}

/// Query string decoded into `T`, keeping the first value of a repeated key.
///
/// `T` is built from string values only, so its fields should be `String`s.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstValueQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for FirstValueQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

        let mut fields = Map::new();
        for (key, value) in pairs {
            fields.entry(key).or_insert(Value::String(value));
        }

        let value = serde_json::from_value(Value::Object(fields))
            .map_err(|err| AppError::bad_request(describe(&err)))?;

        Ok(FirstValueQuery(value))
    }
}
