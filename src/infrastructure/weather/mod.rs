//! Weather API client.

mod open_meteo;

pub use open_meteo::OpenMeteoClient;
