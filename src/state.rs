//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AskService, ResolutionService};

/// Application state cloned into each request.
///
/// Services are stateless between requests, so sharing them through `Arc`
/// needs no locking.
#[derive(Clone)]
pub struct AppState {
    pub resolution_service: Arc<ResolutionService>,
    pub ask_service: Arc<AskService>,
}

impl AppState {
    pub fn new(resolution_service: Arc<ResolutionService>, ask_service: Arc<AskService>) -> Self {
        Self {
            resolution_service,
            ask_service,
        }
    }
}
