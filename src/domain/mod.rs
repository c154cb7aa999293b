//! Domain layer: organization records, registry URLs and the pure rules around them.
//!
//! Nothing here performs I/O. Collaborator contracts live in [`clients`] and are
//! implemented by [`crate::infrastructure`].
//!
//! # Modules
//!
//! - [`entities`] - [`entities::OrganizationRecord`] and [`entities::CandidateUrl`]
//! - [`extractor`] - Label-proximity field extraction over a document tree
//! - [`formatter`] - Human-readable rendering of a record
//! - [`weather`] - Weather-code table for the Tashkent weather fact
//! - [`clients`] - Traits for search providers, page source, completion and weather APIs

pub mod clients;
pub mod entities;
pub mod extractor;
pub mod formatter;
pub mod weather;
