//! DTOs for the lookup endpoint.

use serde::Serialize;

/// A resolved short code.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    pub code: String,
    pub long_url: String,
}
