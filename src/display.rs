//! Primary display resolution probe backed by `xrandr`

use std::ffi::OsString;
use std::process::Command;
use tracing::{debug, warn};

use crate::constants::commands;

/// Source of the current primary display resolution.
/// `None` means no signal this tick (no primary output reported, or the
/// query tool is unavailable) and is never an error.
pub trait DisplayProbe {
    fn primary_resolution(&mut self) -> Option<String>;
}

/// Runs the display query tool and parses its standard output
pub struct XrandrProbe {
    program: OsString,
    args: Vec<OsString>,
}

impl Default for XrandrProbe {
    fn default() -> Self {
        Self::with_command(commands::XRANDR, Vec::<OsString>::new())
    }
}

impl XrandrProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different query command that prints xrandr-style output
    pub fn with_command<P, I, A>(program: P, args: I) -> Self
    where
        P: Into<OsString>,
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl DisplayProbe for XrandrProbe {
    fn primary_resolution(&mut self) -> Option<String> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .inspect_err(|e| {
                warn!(program = ?self.program, error = %e, "Cannot run display query tool");
            })
            .ok()?;

        if !output.status.success() {
            warn!(
                program = ?self.program,
                status = %output.status,
                stderr = %String::from_utf8_lossy(&output.stderr).trim(),
                "Display query tool failed"
            );
            return None;
        }

        let resolution = parse_primary_resolution(&String::from_utf8_lossy(&output.stdout));
        if resolution.is_none() {
            debug!("No primary display reported");
        }
        resolution
    }
}

/// Extract `<W>x<H>` from the primary output line, e.g.
/// `Virtual1 connected primary 1366x768+0+0 (normal left inverted right x axis y axis) 0mm x 0mm`
pub fn parse_primary_resolution(output: &str) -> Option<String> {
    let line = output
        .lines()
        .map(str::trim)
        .find(|line| line.contains(commands::PRIMARY_MARKER))?;

    let field = line.split_whitespace().nth(commands::RESOLUTION_FIELD)?;
    let resolution = field.split('+').next()?;

    // A connected but disabled primary prints its rotation list here instead
    is_resolution(resolution).then(|| resolution.to_string())
}

fn is_resolution(token: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    token
        .split_once('x')
        .is_some_and(|(width, height)| all_digits(width) && all_digits(height))
}
