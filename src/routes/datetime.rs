use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

use crate::common::clock;

#[derive(Debug, Serialize, ToSchema)]
pub struct DatetimeReply {
    /// ISO-8601, always `+00:00`
    pub utc_datetime: String,
}

/// Return the current UTC datetime
///
/// Any request body is ignored.
#[utoipa::path(
    post,
    path = "/datetime",
    responses(
        (status = 200, description = "Current UTC datetime", body = DatetimeReply),
    ),
    tag = "time"
)]
pub async fn current_datetime() -> Json<DatetimeReply> {
    Json(DatetimeReply {
        utc_datetime: clock::now_iso(),
    })
}
