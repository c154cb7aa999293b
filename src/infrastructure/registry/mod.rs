//! orginfo.uz registry page client.

mod orginfo_client;

pub use orginfo_client::OrginfoClient;
