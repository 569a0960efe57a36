use axum::Extension;
use tracing::{debug, info};

use bluebot_auth::{BasicPrincipal, TokenClaims};

pub async fn admin_main(Extension(principal): Extension<BasicPrincipal>) -> &'static str {
    debug!(username = %principal.username, "Admin page served");
    "You found an grouped link"
}

pub async fn cookies_page() -> &'static str {
    "Cookies page"
}

pub async fn secret_page(Extension(claims): Extension<TokenClaims>) -> &'static str {
    info!(name = %claims.name, id = %claims.id, "Token accepted");
    "You are on the secret page"
}
