use std::time::Duration;

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::warn;

use crate::handlers::{company, event, health, revision, user};
use crate::state::AppState;

const NGROK_SKIP_BROWSER_WARNING: HeaderName =
    HeaderName::from_static("ngrok-skip-browser-warning");

pub fn build_router(state: AppState, cors_allowed_origins: &[String]) -> Router {
    let company_routes = Router::new()
        .route("/company/health", get(health::company_health))
        .route("/company/create", post(company::create_company))
        .route("/company/list", get(company::list_companies))
        .route("/company/list/{officer}", get(company::list_companies_by_officer))
        .route("/company/delete/{id}", delete(company::delete_company))
        .route("/company/update/{id}", put(company::update_company));

    let revision_routes = Router::new()
        .route("/company/temp/update", post(revision::submit_revision))
        .route(
            "/company/temp/update/{id}",
            post(revision::submit_revision_for_company),
        )
        .route("/company/temp/list", get(revision::list_revisions))
        .route("/company/temp/{id}", get(revision::get_revision))
        .route("/company/temp/status/{id}", put(revision::set_revision_status))
        .route("/company/temp/approve/{id}", put(revision::approve_revision));

    let event_routes = Router::new()
        .route("/event/create", post(event::create_event))
        .route("/event/list", get(event::list_events));

    let user_routes = Router::new()
        .route("/user/health", get(health::user_health))
        .route("/user/login", post(user::login))
        .route("/user/create", post(user::create_user))
        .route("/user/list", get(user::list_users))
        .route("/user/delete/{id}", delete(user::delete_user));

    Router::new()
        .merge(company_routes)
        .merge(revision_routes)
        .merge(event_routes)
        .merge(user_routes)
        .with_state(state)
        .layer(cors_layer(cors_allowed_origins))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

/// Credentials are allowed, so a `*` entry mirrors the request origin
/// instead of answering with a literal wildcard.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o.trim() == "*") {
        AllowOrigin::mirror_request()
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o.trim()) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", o);
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
            NGROK_SKIP_BROWSER_WARNING,
        ])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
