use axum::{
    Router,
    extract::{FromRef, Request},
    http::HeaderName,
    middleware::{self, Next},
    response::{IntoResponse, Redirect, Response},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

pub mod config;
pub mod gate;
pub mod handlers;
pub mod models;
pub mod session;

// Page shell grouped by audience, plus the JSON API.
pub mod routes;
use gate::Verdict;
use routes::{admin, api, authenticated, public};
use session::SessionCookies;

// --- Public Re-exports ---

pub use config::AppConfig;

/// ApiDoc
///
/// OpenAPI document for the JSON endpoints, served at `/api-docs/openapi.json`.
/// Page routes are navigations, not API calls, and are left out.
#[derive(OpenApi)]
#[openapi(
    paths(handlers::check_access, handlers::get_route_table),
    components(schemas(models::AccessDecision, models::RouteTable)),
    tags(
        (name = "bookera-gate", description = "Bookera route access gate")
    )
)]
struct ApiDoc;

/// AppState
///
/// The single immutable container shared by every request. The gate itself is
/// stateless, so configuration is all there is.
#[derive(Clone, Default)]
pub struct AppState {
    pub config: AppConfig,
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// access_gate
///
/// Middleware run in front of every page route. Reads the session cookies, asks the
/// gate about the request path and either forwards the request or answers with a
/// 307 to the verdict's destination.
async fn access_gate(session: SessionCookies, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();

    match gate::decide(&path, session.token.as_deref(), session.role.as_ref()) {
        Verdict::Continue => next.run(request).await,
        Verdict::RedirectTo(destination) => {
            tracing::debug!(
                path = %path,
                role = ?session.role_label(),
                authenticated = session.is_authenticated(),
                location = destination.path(),
                "access gate redirect"
            );
            Redirect::temporary(destination.path()).into_response()
        }
    }
}

/// create_router
///
/// Assembles the page shell behind the access gate, the JSON API beside it, and the
/// observability stack around both.
pub fn create_router(state: AppState) -> Router {
    // 1. CORS Configuration
    // Production pins a single origin; local development accepts any.
    let cors = match state.config.cors_allowed_origin.clone() {
        Some(origin) => CorsLayer::new()
            .allow_methods(Any)
            .allow_origin(origin)
            .allow_headers(Any),
        None => CorsLayer::new()
            .allow_methods(Any)
            .allow_origin(Any)
            .allow_headers(Any),
    };

    let x_request_id = HeaderName::from_static("x-request-id");

    // 2. Page Shell: every navigation goes through the gate.
    let pages = Router::new()
        .merge(public::public_routes())
        .merge(authenticated::authenticated_routes())
        .merge(admin::admin_routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), access_gate));

    // 3. Base Router Assembly
    let base_router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api::api_routes())
        .merge(pages)
        .with_state(state);

    // 4. Observability and Correlation Layers
    base_router
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        .layer(cors)
}

/// trace_span_logger
///
/// Opens the per-request span with method, URI and the generated `x-request-id`, so
/// every log line of one navigation, gate decision included, correlates.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
