//! # Robot Backend
//!
//! HTTP backend for a small desk robot: answers free-form questions and looks
//! up Uzbek legal entities on the public registry site orginfo.uz.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Records, field extraction, formatting and collaborator traits
//! - **Application Layer** ([`application`]) - Resolution pipeline and question answering
//! - **Infrastructure Layer** ([`infrastructure`]) - HTTP clients and HTML parsing
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Resolution Pipeline
//!
//! 1. A registry link in the text is fetched directly
//! 2. Otherwise the text is turned into a search phrase by the completion API
//! 3. Search providers are tried in order until one yields registry pages
//! 4. Every page is downloaded, parsed and rendered as a card
//!
//! Each stage degrades to a fixed fallback instead of failing, so a lookup
//! always produces a readable answer.
//!
//! ## Quick Start
//!
//! ```bash
//! # All keys are optional; missing ones disable the matching capability
//! export OPENAI_API_KEY="sk-..."
//! export SERPAPI_KEY="..."
//!
//! # Start the service
//! cargo run
//!
//! # Or query from the terminal
//! cargo run --bin orginfo -- resolve "ИНН 301234567"
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{
        AnswerMode, AskService, ProviderChain, QueryNormalizer, RegistryFetcher,
        ResolutionService,
    };
    pub use crate::domain::clients::{PageSource, SearchProvider, TextGenerator, WeatherSource};
    pub use crate::domain::entities::{CandidateUrl, OrganizationRecord};
    pub use crate::error::{AppError, ClientError};
    pub use crate::state::AppState;
}
