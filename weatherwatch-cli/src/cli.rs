use std::{path::PathBuf, time::Duration};

use clap::Parser;
use tracing::warn;
use weatherwatch_core::{Config, provider_from_key};

use crate::app::{Actions, App, Mode};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weatherwatch", version, about = "Weather Checking Application")]
pub struct Cli {
    /// Check weather by city name.
    #[arg(long)]
    pub city: Option<String>,

    /// Add a city to the favorite cities.
    #[arg(long, value_name = "CITY")]
    pub add: Option<String>,

    /// Remove a city from the favorite list.
    #[arg(long, value_name = "CITY")]
    pub remove: Option<String>,

    /// Display the favorite cities.
    #[arg(long)]
    pub list: bool,

    /// API key for weatherapi.com; falls back to `api_key` in the config file.
    #[arg(long = "api", value_name = "KEY")]
    pub api_key: Option<String>,

    /// Keep running and repeat every --interval seconds.
    #[arg(long)]
    pub watch: bool,

    /// Seconds between repeats in watch mode [default: 15].
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,

    /// Read settings from this file instead of the platform config directory.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        let actions = self.actions();
        let provider = self.resolve_api_key(&config).map(provider_from_key);

        if actions.city.is_some() && provider.is_none() {
            warn!("--city needs an API key; pass --api <KEY> or set api_key in the config file");
        }
        if actions == Actions::default() {
            warn!("nothing to do; see --help");
        }

        let mut app = App::new(actions, provider, std::io::stdout());
        app.run(self.mode(&config)).await
    }

    /// Empty strings count as absent.
    fn actions(&self) -> Actions {
        Actions {
            city: non_empty(self.city.as_deref()).map(str::to_owned),
            add: non_empty(self.add.as_deref()).map(str::to_owned),
            remove: non_empty(self.remove.as_deref()).map(str::to_owned),
            list: self.list,
        }
    }

    fn resolve_api_key<'a>(&'a self, config: &'a Config) -> Option<&'a str> {
        non_empty(self.api_key.as_deref()).or_else(|| config.api_key())
    }

    fn mode(&self, config: &Config) -> Mode {
        if !self.watch {
            return Mode::Once;
        }
        let secs = self.interval.unwrap_or(config.poll_interval_secs).max(1);
        Mode::Watch(Duration::from_secs(secs))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
