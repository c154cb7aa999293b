//! Collaborator traits for the resolution pipeline.
//!
//! Each trait abstracts one external service. Concrete clients live in
//! `crate::infrastructure`; mock implementations are generated via `mockall`
//! for unit tests.
//!
//! # Available Clients
//!
//! - [`SearchProvider`] - Search backend returning registry links
//! - [`PageSource`] - Registry page download
//! - [`TextGenerator`] - Chat-completion API
//! - [`WeatherSource`] - Current weather lookup

pub mod page_source;
pub mod search_provider;
pub mod text_generator;
pub mod weather_source;

pub use page_source::PageSource;
pub use search_provider::SearchProvider;
pub use text_generator::TextGenerator;
pub use weather_source::WeatherSource;

#[cfg(test)]
pub use page_source::MockPageSource;
#[cfg(test)]
pub use search_provider::MockSearchProvider;
#[cfg(test)]
pub use text_generator::MockTextGenerator;
#[cfg(test)]
pub use weather_source::MockWeatherSource;
