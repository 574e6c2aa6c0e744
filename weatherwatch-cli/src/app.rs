//! The control loop: one tick per iteration, optionally repeated.

use std::{io::Write, time::Duration};

use anyhow::{Context, Result};
use tracing::{debug, info};
use weatherwatch_core::{FETCH_ERROR, Favorites, WeatherProvider, WeatherReport};

/// What the user asked for on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Actions {
    pub city: Option<String>,
    pub add: Option<String>,
    pub remove: Option<String>,
    pub list: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Once,
    Watch(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

pub struct App<W> {
    actions: Actions,
    provider: Option<Box<dyn WeatherProvider>>,
    favorites: Favorites,
    out: W,
}

impl<W: Write> App<W> {
    pub fn new(actions: Actions, provider: Option<Box<dyn WeatherProvider>>, out: W) -> Self {
        Self { actions, provider, favorites: Favorites::default(), out }
    }

    /// Run one iteration.
    ///
    /// A mutation of the favorites list ends the loop; fetching and listing
    /// don't.
    pub async fn tick(&mut self) -> Result<Flow> {
        if let (Some(provider), Some(city)) = (&self.provider, self.actions.city.as_deref()) {
            match provider.current(city).await? {
                Some(reading) => writeln!(self.out, "{}", WeatherReport::new(city, &reading))?,
                None => writeln!(self.out, "{FETCH_ERROR}")?,
            }
        }

        if let Some(city) = self.actions.add.as_deref() {
            let outcome = self.favorites.add(city);
            writeln!(self.out, "{outcome}")?;
            return Ok(Flow::Stop);
        }

        if let Some(city) = self.actions.remove.as_deref() {
            let outcome = self.favorites.remove(city);
            writeln!(self.out, "{outcome}")?;
            return Ok(Flow::Stop);
        }

        if self.actions.list {
            writeln!(self.out, "{}", self.favorites)?;
        }

        Ok(Flow::Continue)
    }

    pub async fn run(&mut self, mode: Mode) -> Result<()> {
        loop {
            let flow = self.tick().await?;
            self.out.flush().context("Failed to flush output")?;

            let Mode::Watch(interval) = mode else { break };
            if flow == Flow::Stop {
                break;
            }

            debug!(?interval, "sleeping until next tick");
            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                res = tokio::signal::ctrl_c() => {
                    res.context("Failed to listen for Ctrl-C")?;
                    info!("interrupted, exiting");
                    break;
                }
            }
        }

        Ok(())
    }
}
