// SPDX-FileCopyrightText: 2025 Tools Hub Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Static capability catalog
//!
//! The table of every tool capability and its ordered provider list. Built
//! once from configuration at server startup — where empty provider lists are
//! rejected — and shared read-only across requests for the life of the
//! process.

use provider_core::{JokeText, LoremText, Quote, WeatherReport};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    exchange, images, ip, joke, links, lorem, quote,
    resolver::{Capability, CatalogError},
    weather,
};

/// Base URLs of every upstream provider, overridable through configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Ordered IP lookup sources, highest priority first
    pub ip_sources: Vec<String>,
    /// official-joke-api random joke endpoint
    pub official_joke_url: String,
    /// jokeapi.dev single-joke endpoint
    pub jokeapi_url: String,
    /// quotable.io random quote endpoint
    pub quotable_url: String,
    /// Open-Meteo geocoding search endpoint
    pub geocoding_url: String,
    /// Open-Meteo forecast endpoint
    pub forecast_url: String,
    /// exchangerate.host latest-rates endpoint
    pub exchangerate_url: String,
    /// TinyURL create endpoint
    pub tinyurl_url: String,
    /// loripsum.net API base
    pub loripsum_url: String,
    /// dog.ceo random image endpoint
    pub dogceo_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            ip_sources: vec![
                "https://ipapi.co/json/".to_string(),
                "https://ipwho.is/".to_string(),
                "https://api.ipify.org?format=json".to_string(),
            ],
            official_joke_url: "https://official-joke-api.appspot.com/random_joke".to_string(),
            jokeapi_url: "https://v2.jokeapi.dev/joke/Any?type=single".to_string(),
            quotable_url: "https://api.quotable.io/random".to_string(),
            geocoding_url: "https://geocoding-api.open-meteo.com/v1/search".to_string(),
            forecast_url: "https://api.open-meteo.com/v1/forecast".to_string(),
            exchangerate_url: "https://api.exchangerate.host/latest".to_string(),
            tinyurl_url: "https://tinyurl.com/api-create.php".to_string(),
            loripsum_url: "https://loripsum.net/api".to_string(),
            dogceo_url: "https://dog.ceo/api/breeds/image/random".to_string(),
        }
    }
}

/// Every configured capability, keyed by field
#[derive(Debug)]
pub struct Catalog {
    /// Public IP lookup with geolocation fallback chain
    pub ip: Capability<(), Value>,
    /// Random joke with two-provider fallback
    pub joke: Capability<(), JokeText>,
    /// Inspirational quote
    pub quote: Capability<(), Quote>,
    /// Current weather via geocode-then-forecast chain; parameter is the city
    pub weather: Capability<String, WeatherReport>,
    /// Latest exchange rates; parameter is the base currency
    pub exchange: Capability<String, Value>,
    /// URL shortening; parameter is the URL to shorten
    pub shorten: Capability<String, String>,
    /// Placeholder text with local fallback; parameter is the paragraph count
    pub lorem: Capability<u8, LoremText>,
    /// Random dog image
    pub dog: Capability<(), Value>,
}

impl Catalog {
    /// Build the full catalog from configuration
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if any capability is configured without
    /// providers; this is the startup validation point.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        Ok(Self {
            ip: ip::capability(&config.ip_sources)?,
            joke: joke::capability(&config.official_joke_url, &config.jokeapi_url)?,
            quote: quote::capability(&config.quotable_url)?,
            weather: weather::capability(&config.geocoding_url, &config.forecast_url)?,
            exchange: exchange::capability(&config.exchangerate_url)?,
            shorten: links::capability(&config.tinyurl_url)?,
            lorem: lorem::capability(&config.loripsum_url)?,
            dog: images::capability(&config.dogceo_url)?,
        })
    }

    /// Names of all configured capabilities
    pub fn capability_names(&self) -> Vec<&'static str> {
        vec![
            self.ip.name(),
            self.joke.name(),
            self.quote.name(),
            self.weather.name(),
            self.exchange.name(),
            self.shorten.name(),
            self.lorem.name(),
            self.dog.name(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds_the_full_catalog() {
        let catalog = Catalog::from_config(&CatalogConfig::default()).unwrap();
        assert_eq!(
            catalog.capability_names(),
            vec![
                "ip", "joke", "quote", "weather", "exchange", "shorten", "lorem", "dog"
            ]
        );
        assert_eq!(catalog.ip.provider_count(), 3);
        assert_eq!(catalog.joke.provider_count(), 2);
        assert_eq!(catalog.lorem.provider_count(), 2);
        assert_eq!(catalog.weather.provider_count(), 1);
    }

    #[test]
    fn empty_ip_sources_are_rejected_at_startup() {
        let config = CatalogConfig {
            ip_sources: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(
            Catalog::from_config(&config),
            Err(CatalogError::NoProviders { name: "ip" })
        ));
    }
}
