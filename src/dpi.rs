//! Font DPI writer backed by `xfconf-query`

use std::ffi::OsString;
use std::io;
use std::process::Command;
use thiserror::Error;
use tracing::debug;

use crate::constants::commands;

#[derive(Debug, Error)]
pub enum ApplyError {
    #[error("cannot run {program}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("cannot set font DPI (exit code {}), {program}:\n{output}", exit_code(.code))]
    Failed {
        program: String,
        code: Option<i32>,
        output: String,
    },
}

fn exit_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "none".to_string(), |c| c.to_string())
}

/// Sink for the desktop font DPI
pub trait DpiApplier {
    fn apply(&mut self, dpi: i32) -> Result<(), ApplyError>;
}

/// Sets `/Xft/DPI` on the `xsettings` channel
pub struct XfconfApplier {
    program: OsString,
    args: Vec<OsString>,
}

impl Default for XfconfApplier {
    fn default() -> Self {
        Self::with_command(commands::XFCONF_QUERY, Vec::<OsString>::new())
    }
}

impl XfconfApplier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different settings command. `args` go before the
    /// channel/property/value arguments.
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

    fn property_args(dpi: i32) -> [String; 6] {
        [
            "-c".to_string(),
            commands::XSETTINGS_CHANNEL.to_string(),
            "-p".to_string(),
            commands::DPI_PROPERTY.to_string(),
            "-s".to_string(),
            dpi.to_string(),
        ]
    }
}

impl DpiApplier for XfconfApplier {
    fn apply(&mut self, dpi: i32) -> Result<(), ApplyError> {
        let program = self.program.to_string_lossy().into_owned();
        debug!(program = %program, dpi, "running settings command");

        let output = Command::new(&self.program)
            .args(&self.args)
            .args(Self::property_args(dpi))
            .output()
            .map_err(|source| ApplyError::Launch {
                program: program.clone(),
                source,
            })?;

        if output.status.success() {
            return Ok(());
        }

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        Err(ApplyError::Failed {
            program,
            code: output.status.code(),
            output: combined,
        })
    }
}
