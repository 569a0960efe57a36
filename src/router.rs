use std::convert::Infallible;

use axum::{
    Router,
    extract::Request,
    http::{HeaderValue, header::SERVER},
    middleware,
    response::IntoResponse,
    routing::Route,
};
use tower::{Layer, Service};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::warn;

use bluebot_config::server::DEFAULT_SERVER_HEADER;

use crate::logging::logging_middleware;
use crate::middleware::{BasicAuthGate, BearerTokenGate, Gate, SessionCookieGate, enforce};
use crate::modules::auth::router::init_auth_router;
use crate::modules::health::router::init_health_router;
use crate::modules::pets::router::init_pets_router;
use crate::modules::protected::router::{
    init_admin_router, init_cookies_router, init_secret_router,
};
use crate::state::AppState;

type Interceptor<S> = Box<dyn FnOnce(Router<S>) -> Router<S>>;

/// Routes sharing a path prefix and an ordered list of interceptors.
///
/// Interceptors run in the order they were added: the first one added sees
/// the request first and the response last. They only run for requests that
/// matched one of the group's routes.
pub struct RouteGroup<S> {
    prefix: &'static str,
    router: Router<S>,
    interceptors: Vec<Interceptor<S>>,
}

impl<S> RouteGroup<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new(prefix: &'static str, router: Router<S>) -> Self {
        Self {
            prefix,
            router,
            interceptors: Vec::new(),
        }
    }

    pub fn layer<L>(mut self, layer: L) -> Self
    where
        L: Layer<Route> + Clone + Send + Sync + 'static,
        L::Service: Service<Request> + Clone + Send + Sync + 'static,
        <L::Service as Service<Request>>::Response: IntoResponse + 'static,
        <L::Service as Service<Request>>::Error: Into<Infallible> + 'static,
        <L::Service as Service<Request>>::Future: Send + 'static,
    {
        self.interceptors
            .push(Box::new(move |router| router.route_layer(layer)));
        self
    }

    pub fn gate<G: Gate>(self, gate: G) -> Self {
        self.layer(middleware::from_fn_with_state(gate, enforce::<G>))
    }

    /// Nests the group under its prefix in `parent`.
    pub fn mount(self, parent: Router<S>) -> Router<S> {
        // route_layer wraps outside-in, so the first interceptor is applied last
        let router = self
            .interceptors
            .into_iter()
            .rev()
            .fold(self.router, |router, apply| apply(router));

        parent.nest(self.prefix, router)
    }
}

fn server_header(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| {
        warn!(value, "Invalid Server header configured, using default");
        HeaderValue::from_static(DEFAULT_SERVER_HEADER)
    })
}

pub fn init_router(state: AppState) -> Router {
    let admin = RouteGroup::new("/admin", init_admin_router())
        .layer(middleware::from_fn(logging_middleware))
        .gate(BasicAuthGate::new(state.credentials.clone()));

    let cookies = RouteGroup::new("/cookies", init_cookies_router())
        .gate(SessionCookieGate::new(state.session_config.clone()));

    let secret = RouteGroup::new("/jwt", init_secret_router())
        .gate(BearerTokenGate::new(state.jwt_config.clone()));

    let router = Router::new()
        .merge(init_health_router())
        .merge(init_pets_router())
        .merge(init_auth_router());
    let router = admin.mount(router);
    let router = cookies.mount(router);
    let router = secret.mount(router);

    router
        .with_state(state.clone())
        .layer(SetResponseHeaderLayer::overriding(
            SERVER,
            server_header(&state.server_config.server_header),
        ))
}
