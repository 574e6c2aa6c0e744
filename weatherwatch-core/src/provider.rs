use crate::{WeatherReading, provider::weatherapi::WeatherApiProvider};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod weatherapi;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for `city`.
    ///
    /// `Ok(None)` means the provider answered with a status other than 200;
    /// transport and decoding failures are errors.
    async fn current(&self, city: &str) -> anyhow::Result<Option<WeatherReading>>;
}

/// Construct the WeatherAPI.com provider for an API key.
pub fn provider_from_key(api_key: &str) -> Box<dyn WeatherProvider> {
    Box::new(WeatherApiProvider::new(api_key.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_from_key_builds_weatherapi_provider() {
        let provider = provider_from_key("KEY");
        let debug = format!("{provider:?}");

        assert!(debug.contains("WeatherApiProvider"));
        assert!(debug.contains("api.weatherapi.com"));
    }
}
