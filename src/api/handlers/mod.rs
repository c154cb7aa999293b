//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod ask;
pub mod health;
pub mod orginfo;
pub mod status;

pub use ask::ask_handler;
pub use health::health_handler;
pub use orginfo::orginfo_query_handler;
pub use status::{root_handler, status_handler};
