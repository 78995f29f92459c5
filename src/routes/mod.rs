pub mod datetime;
pub mod health;
pub mod info;
pub mod ping;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::common::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        ping::ping,
        datetime::current_datetime,
        info::get_info,
    ),
    components(
        schemas(
            health::HealthStatus,
            ping::PingReply,
            datetime::DatetimeReply,
            info::AppInfo,
            info::EndpointInfo,
        )
    ),
    tags(
        (name = "health", description = "Liveness and connectivity checks"),
        (name = "time", description = "Server clock"),
        (name = "info", description = "Application metadata"),
    ),
    info(
        title = "Demo API",
        description = "Simple API for testing Kubernetes and ArgoCD deployments",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/ping", get(ping::ping))
        .route("/datetime", post(datetime::current_datetime))
        .route("/info", get(info::get_info));

    // OpenAPI documentation
    let docs_routes = Router::new()
        .route("/openapi.json", get(openapi_json))
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    Router::new()
        .merge(api_routes)
        .merge(docs_routes)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
