pub const ALIVE_MESSAGE: &str = "I am alive!";

/// Liveness probe. Always 200 with the same body.
pub async fn alive() -> &'static str {
    ALIVE_MESSAGE
}
