//! The common contract behind every credential gate.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use bluebot_core::AppError;

/// Decides whether a request may reach the handlers behind it.
///
/// A successful check yields a principal which [`enforce`] stores in the
/// request extensions, so handlers read it with `Extension<G::Principal>`
/// instead of re-parsing headers.
pub trait Gate: Clone + Send + Sync + 'static {
    type Principal: Clone + Send + Sync + 'static;

    /// Short label used in rejection logs.
    const NAME: &'static str;

    fn check(&self, headers: &HeaderMap) -> Result<Self::Principal, AppError>;
}

/// Runs `G` in front of the next service; use with
/// `axum::middleware::from_fn_with_state(gate, enforce::<G>)`.
pub async fn enforce<G: Gate>(State(gate): State<G>, mut req: Request, next: Next) -> Response {
    match gate.check(req.headers()) {
        Ok(principal) => {
            req.extensions_mut().insert(principal);
            next.run(req).await
        }
        Err(err) => {
            warn!(
                gate = G::NAME,
                method = %req.method(),
                path = %req.uri().path(),
                status = %err.status.as_u16(),
                reason = %err.message(),
                "Request rejected"
            );
            err.into_response()
        }
    }
}
