//! DTOs for the organization lookup endpoint.

use serde::Deserialize;
use validator::Validate;

/// Free-form lookup text: tax ID, company name, director or a registry link.
///
/// A missing or blank query is accepted; the service answers it with a
/// prompt rather than an error.
#[derive(Debug, Deserialize, Validate)]
pub struct OrginfoQueryRequest {
    #[serde(default)]
    #[validate(length(max = 2000, message = "Query is too long"))]
    pub query: String,
}
