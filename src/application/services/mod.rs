//! Business logic services for the application layer.

pub mod ask_service;
pub mod provider_chain;
pub mod query_normalizer;
pub mod registry_fetcher;
pub mod resolution_service;

pub use ask_service::{AnswerMode, AskService};
pub use provider_chain::{ProviderChain, ProviderStatus};
pub use query_normalizer::QueryNormalizer;
pub use registry_fetcher::RegistryFetcher;
pub use resolution_service::ResolutionService;
