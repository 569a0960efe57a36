mod common;

use axum::http::{HeaderMap, StatusCode};
use axum_extra::headers::{Authorization, HeaderMapExt};
use axum_extra::extract::cookie::Cookie;
use bluebot::bluebot_auth::{TokenClaims, sign_claims, verify_token};
use bluebot::bluebot_config::JwtConfig;
use chrono::Utc;
use common::{TestResponse, get, get_with_header};

async fn login(username: &str, password: &str) -> TestResponse {
    get(&format!("/login?username={username}&password={password}")).await
}

fn basic(username: &str, password: &str) -> String {
    let mut headers = HeaderMap::new();
    headers.typed_insert(Authorization::basic(username, password));
    headers["authorization"].to_str().unwrap().to_string()
}

#[test]
fn test_basic_header_encoding() {
    assert_eq!(basic("jack", "1234"), "Basic amFjazoxMjM0");
}

#[tokio::test]
async fn test_login_success_sets_cookie_and_token() {
    let response = login("jack", "1234").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["message"], "You are logged in!");

    let token = body["token"].as_str().unwrap();
    let claims = verify_token(token, &JwtConfig::default()).unwrap();
    assert_eq!(claims.name, "jack");
    assert_eq!(claims.id, "main_user_id");

    let set_cookie = response.headers["set-cookie"].to_str().unwrap();
    let cookie = Cookie::parse(set_cookie.to_string()).unwrap();
    assert_eq!(cookie.name(), "sessionID");
    assert_eq!(cookie.value(), "some_string");
}

#[tokio::test]
async fn test_login_cookie_outlives_token_by_one_day() {
    let response = login("jack", "1234").await;

    let claims = verify_token(
        response.json()["token"].as_str().unwrap(),
        &JwtConfig::default(),
    )
    .unwrap();
    assert_eq!(claims.exp - claims.iat, 24 * 3600);

    let set_cookie = response.headers["set-cookie"].to_str().unwrap();
    let cookie = Cookie::parse(set_cookie.to_string()).unwrap();
    let cookie_expiry = cookie.expires_datetime().unwrap().unix_timestamp();

    assert_eq!(cookie_expiry - claims.iat as i64, 48 * 3600);
}

#[tokio::test]
async fn test_login_wrong_credentials() {
    for (username, password) in [("jack", "4321"), ("jill", "1234"), ("", "")] {
        let response = login(username, password).await;

        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body, "Wrong username or password");
        assert!(!response.headers.contains_key("set-cookie"));
    }
}

#[tokio::test]
async fn test_login_repeated_keys_use_first_value() {
    let response = get("/login?username=jack&username=jack&password=1234").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.headers.contains_key("set-cookie"));

    let response = get("/login?username=jack&password=1234&username=jill").await;
    assert_eq!(response.status, StatusCode::OK);

    let response = get("/login?username=jill&username=jack&password=1234").await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_with_valid_basic_auth() {
    let response = get_with_header("/admin/main", "authorization", &basic("jack", "1234")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "You found an grouped link");
}

#[tokio::test]
async fn test_admin_with_wrong_basic_auth_is_forbidden() {
    for (username, password) in [("jack", "123"), ("root", "1234"), ("jack", "")] {
        let response =
            get_with_header("/admin/main", "authorization", &basic(username, password)).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN);
    }
}

#[tokio::test]
async fn test_admin_without_credentials_is_challenged() {
    let response = get("/admin/main").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.headers["www-authenticate"], "Basic realm=\"Restricted\"");
}

#[tokio::test]
async fn test_cookies_page_without_cookie() {
    let response = get("/cookies").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, "Needed cookie not present");
}

#[tokio::test]
async fn test_cookies_page_with_wrong_cookie() {
    let response = get_with_header("/cookies", "cookie", "sessionID=nope").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, "You don't have the right cookie");
}

#[tokio::test]
async fn test_cookies_page_with_login_cookie() {
    let login_response = login("jack", "1234").await;
    let set_cookie = login_response.headers["set-cookie"].to_str().unwrap();
    let cookie = Cookie::parse(set_cookie.to_string()).unwrap();

    let response =
        get_with_header("/cookies", "cookie", &cookie.stripped().to_string()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "Cookies page");
}

#[tokio::test]
async fn test_basic_auth_does_not_open_cookie_group() {
    let response = get_with_header("/cookies", "authorization", &basic("jack", "1234")).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, "Needed cookie not present");
}

#[tokio::test]
async fn test_jwt_page_with_login_token() {
    let login_response = login("jack", "1234").await;
    let token = login_response.json()["token"].as_str().unwrap().to_string();

    let response =
        get_with_header("/jwt", "authorization", &format!("Bearer {token}")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "You are on the secret page");
}

#[tokio::test]
async fn test_jwt_page_without_token() {
    let response = get("/jwt").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["error"], "Missing authorization header");
}

#[tokio::test]
async fn test_jwt_page_with_expired_token() {
    let now = Utc::now().timestamp() as usize;
    let claims = TokenClaims {
        name: "jack".to_string(),
        id: "main_user_id".to_string(),
        exp: now - 60,
        iat: now - 86_460,
    };
    let token = sign_claims(&claims, &JwtConfig::default()).unwrap();

    let response =
        get_with_header("/jwt", "authorization", &format!("Bearer {token}")).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_jwt_page_with_foreign_signature() {
    let now = Utc::now().timestamp() as usize;
    let claims = TokenClaims {
        name: "jack".to_string(),
        id: "main_user_id".to_string(),
        exp: now + 3600,
        iat: now,
    };
    let foreign = JwtConfig {
        secret: "not-our-secret".to_string(),
        ..JwtConfig::default()
    };
    let token = sign_claims(&claims, &foreign).unwrap();

    let response =
        get_with_header("/jwt", "authorization", &format!("Bearer {token}")).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_session_cookie_does_not_open_jwt_group() {
    let response = get_with_header("/jwt", "cookie", "sessionID=some_string").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
