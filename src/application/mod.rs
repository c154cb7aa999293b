//! Application layer services implementing the resolution pipeline.
//!
//! Services compose the domain rules with the collaborator traits from
//! [`crate::domain::clients`]. Every service boundary returns a total value:
//! collaborator failures are converted to degraded results here and never
//! reach the HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::RegistryFetcher`] - Page download → extraction → card
//! - [`services::QueryNormalizer`] - Free text → search phrase
//! - [`services::ProviderChain`] - Ordered fallback across search providers
//! - [`services::ResolutionService`] - Organization query orchestration
//! - [`services::AskService`] - Plain question answering

pub mod services;
