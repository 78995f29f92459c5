use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::common::AppState;

pub const APP_NAME: &str = "demo-api";
pub const APP_VERSION: &str = "0.1.0";
pub const ENVIRONMENT: &str = "kubernetes";

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EndpointInfo {
    pub method: String,
    pub path: String,
    pub description: String,
}

impl EndpointInfo {
    fn new(method: &str, path: &str, description: &str) -> Self {
        Self {
            method: method.to_string(),
            path: path.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AppInfo {
    pub app: String,
    pub version: String,
    pub environment: String,
    pub endpoints: Vec<EndpointInfo>,
}

impl AppInfo {
    /// Metadata for this build, listing the public routes in registration order.
    #[must_use]
    pub fn current() -> Self {
        Self {
            app: APP_NAME.to_string(),
            version: APP_VERSION.to_string(),
            environment: ENVIRONMENT.to_string(),
            endpoints: vec![
                EndpointInfo::new("GET", "/health", "Health check"),
                EndpointInfo::new("GET", "/ping", "Ping pong"),
                EndpointInfo::new("POST", "/datetime", "Get UTC datetime"),
                EndpointInfo::new("GET", "/info", "Application info"),
            ],
        }
    }
}

/// Get application information
#[utoipa::path(
    get,
    path = "/info",
    responses(
        (status = 200, description = "Application metadata", body = AppInfo),
    ),
    tag = "info"
)]
pub async fn get_info(State(state): State<AppState>) -> Json<AppInfo> {
    Json(state.app_info.as_ref().clone())
}
