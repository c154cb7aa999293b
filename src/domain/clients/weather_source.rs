//! Weather lookup contract.

use crate::domain::weather::CurrentWeather;
use crate::error::ClientError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Current conditions in Tashkent.
    async fn current_weather(&self) -> Result<CurrentWeather, ClientError>;
}
