//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "longUrl": "https://example.com/a" }
/// ```
///
/// # Response
///
/// **201 Created**
///
/// ```json
/// {
///   "code": "Xk9pQ2w",
///   "longUrl": "https://example.com/a",
///   "shortUrlRendered": "https://s.example.com/s/Xk9pQ2w"
/// }
/// ```
///
/// Submitting the same URL twice creates two links with distinct codes.
///
/// # Errors
///
/// - **400 Bad Request**: empty or invalid URL
/// - **500 Internal Server Error**: no unique code found within the attempt limit
/// - **503 Service Unavailable**: the store could not be reached
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let link = state.shorten_service.shorten(&payload.long_url).await?;
    let short_url_rendered = state.short_url(&link.code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            code: link.code,
            long_url: link.long_url,
            short_url_rendered,
        }),
    ))
}
