use bookera_gate::{AppState, create_router, models::PageView};
use reqwest::{StatusCode, header};
use tokio::net::TcpListener;

#[derive(Debug)]
pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

async fn spawn_app() -> TestApp {
    let router = create_router(AppState::default());

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    // Redirects are the thing under test, so they must not be followed.
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp { address, client }
}

#[tokio::test]
async fn test_health_check() {
    let app = spawn_app().await;
    let response = app
        .client
        .get(format!("{}/health", app.address))
        .send()
        .await
        .expect("req fail");
    assert!(response.status().is_success());
}

#[tokio::test]
async fn test_admin_navigation_lifecycle() {
    let app = spawn_app().await;

    // Anonymous visitor is sent to sign in.
    let resp = app
        .client
        .get(format!("{}/admin/fines", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()[header::LOCATION], "/login");

    // After login the auth page sends the officer to the back office.
    let resp = app
        .client
        .get(format!("{}/login", app.address))
        .header(header::COOKIE, "token=t; role=officer:management")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()[header::LOCATION], "/admin");

    // Own section renders.
    let resp = app
        .client
        .get(format!("{}/admin/fines", app.address))
        .header(header::COOKIE, "token=t; role=officer:management")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageView = resp.json().await.unwrap();
    assert_eq!(page.title, "Fines");

    // The catalog side is off limits.
    let resp = app
        .client
        .get(format!("{}/admin/categories", app.address))
        .header(header::COOKIE, "token=t; role=officer:management")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()[header::LOCATION], "/forbidden");
}

#[tokio::test]
async fn test_swagger_document_lists_access_endpoints() {
    let app = spawn_app().await;
    let doc: serde_json::Value = app
        .client
        .get(format!("{}/api-docs/openapi.json", app.address))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(doc["paths"]["/api/access"].is_object());
    assert!(doc["paths"]["/api/access/routes"].is_object());
}
