//! Request-scoped value objects of the resolution pipeline.
//!
//! - [`OrganizationRecord`] - Fields extracted from one registry page
//! - [`CandidateUrl`] - A link proven to have the canonical registry page shape

pub mod candidate_url;
pub mod organization;

pub use candidate_url::CandidateUrl;
pub use organization::OrganizationRecord;
