//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::KeyExtractor,
};

/// Creates a rate limiter for the lookup endpoints.
///
/// # Limits
///
/// - **Rate**: 1 request per second
/// - **Burst**: 20 requests
///
/// Every request may fan out to the completion API, a search provider and
/// several page downloads, so the budget is kept small. Requests exceeding
/// the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// The key is chosen by the caller: `PeerIpKeyExtractor` for direct
/// deployments, `SmartIpKeyExtractor` behind a trusted reverse proxy.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/ask", post(ask_handler))
///     .layer(rate_limit::layer(PeerIpKeyExtractor));
/// ```
pub fn layer<K>(key_extractor: K) -> GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>
where
    K: KeyExtractor,
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(key_extractor)
            .per_second(1)
            .burst_size(20)
            .finish()
            .expect("rate limit period and burst are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
