//! Resolution watcher: the poll → lookup → apply loop
//!
//! The watcher is Idle between ticks and Applying while the DPI command
//! runs. It has no terminal state of its own: `run` only returns when a
//! tick produces a fatal [`WatchError`], and the caller decides how the
//! process ends.

use std::convert::Infallible;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::ResolutionMapping;
use crate::display::DisplayProbe;
use crate::dpi::{ApplyError, DpiApplier};

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("cannot find font DPI value for {resolution} resolution, please add it in {} file", config_path.display())]
    UnmappedResolution {
        resolution: String,
        config_path: PathBuf,
    },
    #[error(transparent)]
    Apply(#[from] ApplyError),
}

/// Result of a single poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Probe reported no primary display
    NoSignal,
    /// Same resolution as the last applied one
    Unchanged,
    Applied { resolution: String, dpi: i32 },
}

pub struct ResolutionWatcher<'a, P, A> {
    mapping: &'a ResolutionMapping,
    config_path: PathBuf,
    probe: P,
    applier: A,
    interval: Duration,
    last_observed: String,
}

impl<'a, P: DisplayProbe, A: DpiApplier> ResolutionWatcher<'a, P, A> {
    pub fn new(
        mapping: &'a ResolutionMapping,
        config_path: impl Into<PathBuf>,
        probe: P,
        applier: A,
        interval: Duration,
    ) -> Self {
        Self {
            mapping,
            config_path: config_path.into(),
            probe,
            applier,
            interval,
            last_observed: String::new(),
        }
    }

    /// Resolution of the last successful apply, empty before the first
    pub fn last_observed(&self) -> &str {
        &self.last_observed
    }

    pub fn tick(&mut self) -> Result<TickOutcome, WatchError> {
        let resolution = match self.probe.primary_resolution() {
            Some(resolution) if !resolution.is_empty() => resolution,
            _ => return Ok(TickOutcome::NoSignal),
        };

        if resolution == self.last_observed {
            return Ok(TickOutcome::Unchanged);
        }

        info!(resolution = %resolution, "Found new resolution");

        let Some(dpi) = self.mapping.lookup(&resolution) else {
            return Err(WatchError::UnmappedResolution {
                resolution,
                config_path: self.config_path.clone(),
            });
        };

        info!(dpi, "Setting font DPI");
        self.applier.apply(dpi)?;

        self.last_observed.clone_from(&resolution);
        Ok(TickOutcome::Applied { resolution, dpi })
    }

    /// Sleep, tick, repeat. Each sleep starts after the previous tick
    /// has finished.
    pub fn run(&mut self) -> Result<Infallible, WatchError> {
        info!(interval = ?self.interval, entries = self.mapping.len(), "Watching primary display resolution");
        loop {
            thread::sleep(self.interval);
            match self.tick()? {
                TickOutcome::Applied { resolution, dpi } => {
                    info!(resolution = %resolution, dpi, "Font DPI applied");
                }
                outcome => debug!(outcome = ?outcome, last = %self.last_observed(), "tick"),
            }
        }
    }
}
