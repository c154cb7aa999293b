//! HTTP server initialization and runtime setup.
//!
//! Builds the collaborator clients and services from [`Config`], then runs the
//! Axum server until Ctrl-C or SIGTERM.

use crate::application::services::{
    AskService, ProviderChain, QueryNormalizer, RegistryFetcher, ResolutionService,
};
use crate::config::Config;
use crate::domain::clients::SearchProvider;
use crate::infrastructure::llm::OpenAiClient;
use crate::infrastructure::registry::OrginfoClient;
use crate::infrastructure::search::{GoogleCseProvider, SerpApiProvider};
use crate::infrastructure::weather::OpenMeteoClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Wires every client and service described by `config`.
///
/// Provider order in the chain is fixed: SerpAPI first, Google CSE second.
/// Missing credentials leave a client in place that reports itself as not
/// configured.
///
/// # Errors
///
/// Returns an error if an HTTP client cannot be built.
pub fn build_state(config: &Config) -> Result<AppState> {
    let timeout = config.http_timeout();

    let generator = Arc::new(
        OpenAiClient::new(
            config.openai_api_key.clone(),
            config.openai_model.clone(),
            config.openai_base_url.clone(),
            timeout,
        )
        .context("Failed to build completion API client")?,
    );

    let serpapi = SerpApiProvider::new(config.serpapi_key.clone(), timeout)
        .context("Failed to build SerpAPI client")?;
    let google_cse = GoogleCseProvider::new(
        config.google_api_key.clone(),
        config.google_cse_id.clone(),
        timeout,
    )
    .context("Failed to build Google CSE client")?;
    let providers: Vec<Arc<dyn SearchProvider>> = vec![Arc::new(serpapi), Arc::new(google_cse)];

    let page_source =
        Arc::new(OrginfoClient::new(timeout).context("Failed to build registry client")?);
    let weather = Arc::new(OpenMeteoClient::new(timeout).context("Failed to build weather client")?);

    let fetcher = Arc::new(RegistryFetcher::new(page_source));

    let resolution_service = Arc::new(ResolutionService::new(
        QueryNormalizer::new(generator.clone()),
        ProviderChain::new(providers),
        fetcher.clone(),
        config.fetch_concurrency,
    ));
    let ask_service = Arc::new(AskService::new(generator, fetcher, weather));

    Ok(AppState::new(resolution_service, ask_service))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - A collaborator client cannot be built
/// - The listen address is invalid or bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;

    for provider in state.resolution_service.chain().provider_status() {
        tracing::info!(
            provider = provider.name,
            configured = provider.configured,
            "Search provider registered"
        );
    }

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
