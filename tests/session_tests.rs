use axum::{
    extract::FromRequestParts,
    http::{Request, header},
};
use axum_extra::extract::CookieJar;
use bookera_gate::{AppConfig, AppState, gate::Role, session::SessionCookies};

// --- Helpers ---

fn jar_with(cookie_header: &str) -> CookieJar {
    let request = Request::builder()
        .header(header::COOKIE, cookie_header)
        .body(())
        .unwrap();
    CookieJar::from_headers(request.headers())
}

async fn extract(cookie_header: Option<&str>, state: &AppState) -> SessionCookies {
    let mut builder = Request::builder().uri("/admin");
    if let Some(value) = cookie_header {
        builder = builder.header(header::COOKIE, value);
    }
    let (mut parts, _) = builder.body(()).unwrap().into_parts();
    SessionCookies::from_request_parts(&mut parts, state)
        .await
        .unwrap()
}

// --- Tests ---

#[test]
fn test_reads_token_and_role_with_default_names() {
    let config = AppConfig::default();
    let session = SessionCookies::from_jar(&jar_with("token=abc123; role=officer:catalog"), &config);

    assert_eq!(session.token.as_deref(), Some("abc123"));
    assert_eq!(session.role, Some(Role::CatalogOfficer));
    assert!(session.is_authenticated());
    assert_eq!(session.role_label().as_deref(), Some("officer:catalog"));
}

#[test]
fn test_percent_encoded_role_is_decoded() {
    let config = AppConfig::default();
    let session =
        SessionCookies::from_jar(&jar_with("token=abc; role=officer%3Amanagement"), &config);

    assert_eq!(session.role, Some(Role::ManagementOfficer));
}

#[test]
fn test_empty_token_counts_as_absent() {
    let config = AppConfig::default();
    let session = SessionCookies::from_jar(&jar_with("token=; role=admin"), &config);

    assert_eq!(session.token, None);
    assert!(!session.is_authenticated());
    assert_eq!(session.role, Some(Role::Admin));
}

#[test]
fn test_unknown_role_is_dropped() {
    let config = AppConfig::default();
    let session = SessionCookies::from_jar(&jar_with("token=abc; role=superuser"), &config);

    assert_eq!(session.role, None);
    assert_eq!(session.role_label(), None);
}

#[test]
fn test_configured_cookie_names_are_used() {
    let config = AppConfig {
        session_cookie: "bookera_session".to_string(),
        role_cookie: "bookera_role".to_string(),
        ..AppConfig::default()
    };
    let session = SessionCookies::from_jar(
        &jar_with("token=ignored; role=admin; bookera_session=s1; bookera_role=user"),
        &config,
    );

    assert_eq!(session.token.as_deref(), Some("s1"));
    assert_eq!(session.role, Some(Role::User));
}

#[tokio::test]
async fn test_extractor_without_cookies_is_anonymous() {
    let state = AppState::default();
    let session = extract(None, &state).await;

    assert_eq!(session, SessionCookies::default());
}

#[tokio::test]
async fn test_extractor_reads_cookie_header() {
    let state = AppState::default();
    let session = extract(Some("role=user; token=t"), &state).await;

    assert_eq!(session.token.as_deref(), Some("t"));
    assert_eq!(session.role, Some(Role::User));
}
