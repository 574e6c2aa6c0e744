//! Core library for the `weatherwatch` CLI.
//!
//! This crate defines:
//! - Configuration handling
//! - The weather provider abstraction and its WeatherAPI.com implementation
//! - The in-memory favorites list
//! - Shared domain models and their console rendering

pub mod config;
pub mod favorites;
pub mod model;
pub mod provider;

pub use config::Config;
pub use favorites::{AddOutcome, Favorites, RemoveOutcome};
pub use model::{FETCH_ERROR, WeatherReading, WeatherReport};
pub use provider::{WeatherProvider, provider_from_key};
