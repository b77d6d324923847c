//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    /// The original URL. Stored exactly as sent once it passes validation.
    #[validate(length(min = 1, message = "longUrl must not be empty"))]
    pub long_url: String,
}

/// A created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub code: String,
    pub long_url: String,
    /// `{BASE_URL}/s/{code}`
    pub short_url_rendered: String,
}
