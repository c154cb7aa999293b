//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation.

pub mod answer;
pub mod ask;
pub mod health;
pub mod orginfo;
pub mod status;
