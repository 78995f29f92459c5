use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct PingReply {
    pub message: String,
}

/// Simple ping endpoint
#[utoipa::path(
    get,
    path = "/ping",
    responses(
        (status = 200, description = "Pong", body = PingReply),
    ),
    tag = "health"
)]
pub async fn ping() -> Json<PingReply> {
    Json(PingReply {
        message: "pong".to_string(),
    })
}
