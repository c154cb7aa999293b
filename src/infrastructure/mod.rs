//! Infrastructure layer: concrete clients for the external collaborators.
//!
//! Implements the traits from [`crate::domain::clients`] on top of `reqwest`,
//! and the HTML document tree on top of `scraper`.
//!
//! # Modules
//!
//! - [`http`] - Shared `reqwest` client construction and status handling
//! - [`markup`] - HTML parsing into a [`crate::domain::extractor::DocumentTree`]
//! - [`registry`] - orginfo.uz page download
//! - [`search`] - SerpAPI and Google Custom Search providers
//! - [`llm`] - OpenAI-compatible chat-completion client
//! - [`weather`] - Open-Meteo client

pub mod http;
pub mod llm;
pub mod markup;
pub mod registry;
pub mod search;
pub mod weather;
