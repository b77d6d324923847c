//! Handler for the lookup-style redirect API.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::resolve::ResolveResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a short code without redirecting.
///
/// # Endpoint
///
/// `GET /api/resolve/{code}`
///
/// # Response
///
/// ```json
/// { "code": "Xk9pQ2w", "longUrl": "https://example.com/a" }
/// ```
///
/// # Errors
///
/// - **404 Not Found**: malformed or unknown code (identical bodies)
/// - **503 Service Unavailable**: the store could not be queried
pub async fn resolve_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ResolveResponse>, AppError> {
    let long_url = state.redirect_resolver.resolve(&code).await?;

    Ok(Json(ResolveResponse { code, long_url }))
}
