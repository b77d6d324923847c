//! Handler for short URL redirect.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::domain::errors::ResolveError;
use crate::state::AppState;

/// The single page shown for every failed redirect.
#[derive(Template, WebTemplate)]
#[template(path = "unknown_destination.html")]
pub struct UnknownDestinationTemplate {
    pub message: &'static str,
}

const UNKNOWN_DESTINATION: &str = "Unknown destination.";

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /s/{code}`
///
/// # Responses
///
/// - **307 Temporary Redirect**: `Location` is the stored URL, unchanged.
///   Mappings never change after creation, so the response is marked
///   `Cache-Control: public, max-age=<REDIRECT_CACHE_MAX_AGE>`.
/// - **404 Not Found**: malformed or unknown code
/// - **503 Service Unavailable**: the store could not be queried
///
/// Every failure renders the same "Unknown destination." page with
/// `Cache-Control: no-store`; the distinct cause is only logged.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Response {
    redirect_to(&state, &code).await
}

/// `GET /s` with the code segment missing.
pub async fn missing_code_handler(State(state): State<AppState>) -> Response {
    redirect_to(&state, "").await
}

async fn redirect_to(state: &AppState, code: &str) -> Response {
    let long_url = match state.redirect_resolver.resolve(code).await {
        Ok(long_url) => long_url,
        Err(ResolveError::StoreUnavailable(_)) => {
            return unknown_destination(StatusCode::SERVICE_UNAVAILABLE);
        }
        Err(_) => return unknown_destination(StatusCode::NOT_FOUND),
    };

    let Ok(location) = HeaderValue::from_str(&long_url) else {
        tracing::error!(code, "Stored URL is not a valid Location header");
        return unknown_destination(StatusCode::SERVICE_UNAVAILABLE);
    };

    (
        StatusCode::TEMPORARY_REDIRECT,
        [(header::LOCATION, location)],
        [(
            header::CACHE_CONTROL,
            format!("public, max-age={}", state.redirect_cache_max_age),
        )],
    )
        .into_response()
}

fn unknown_destination(status: StatusCode) -> Response {
    (
        status,
        [(header::CACHE_CONTROL, "no-store")],
        UnknownDestinationTemplate {
            message: UNKNOWN_DESTINATION,
        },
    )
        .into_response()
}
