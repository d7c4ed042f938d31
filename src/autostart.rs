//! XDG autostart registration
//!
//! Session managers launch every `*.desktop` file found in
//! `$XDG_CONFIG_HOME/autostart` at login. Registration is the presence of
//! our entry in that directory.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::constants::{app, autostart};

#[derive(Debug, Error)]
pub enum AutostartError {
    #[error("App already installed.")]
    AlreadyInstalled,
    #[error("App is not installed.")]
    NotInstalled,
    #[error("cannot determine the user config directory")]
    NoConfigDir,
    #[error("cannot determine the path of the running executable")]
    NoExecutable(#[source] io::Error),
    #[error("cannot update {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Autostart desktop entry for this program
#[derive(Debug, Clone)]
pub struct AutostartEntry {
    path: PathBuf,
    exec: Vec<OsString>,
}

impl AutostartEntry {
    /// Entry in the user autostart directory launching `exec`
    pub fn for_user(exec: Vec<OsString>) -> Result<Self, AutostartError> {
        let dir = dirs::config_dir()
            .ok_or(AutostartError::NoConfigDir)?
            .join(autostart::DIR);
        Ok(Self::in_dir(dir, exec))
    }

    pub fn in_dir(dir: impl AsRef<Path>, exec: Vec<OsString>) -> Self {
        Self {
            path: dir.as_ref().join(autostart::FILENAME),
            exec,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_enabled(&self) -> bool {
        self.path.is_file()
    }

    pub fn enable(&self) -> Result<(), AutostartError> {
        if self.is_enabled() {
            return Err(AutostartError::AlreadyInstalled);
        }
        let io_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source| AutostartError::Io { path, source }
        };

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(io_err(dir))?;
        }
        fs::write(&self.path, self.desktop_entry()).map_err(io_err(&self.path))?;
        info!(path = %self.path.display(), "autostart entry written");
        Ok(())
    }

    pub fn disable(&self) -> Result<(), AutostartError> {
        if !self.is_enabled() {
            return Err(AutostartError::NotInstalled);
        }
        fs::remove_file(&self.path).map_err(|source| AutostartError::Io {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), "autostart entry removed");
        Ok(())
    }

    fn desktop_entry(&self) -> String {
        let name = format!("{} v{}", app::NAME, app::VERSION);
        let exec = self
            .exec
            .iter()
            .map(|arg| quote_exec_arg(&arg.to_string_lossy()))
            .collect::<Vec<_>>()
            .join(" ");

        format!(
            "[Desktop Entry]\n\
             Type=Application\n\
             Name={name}\n\
             Comment={comment}\n\
             Exec={exec}\n\
             Terminal=false\n\
             X-GNOME-Autostart-enabled=true\n",
            comment = autostart::COMMENT,
        )
    }
}

/// Quote an `Exec` argument when it holds characters reserved by the
/// Desktop Entry specification
fn quote_exec_arg(arg: &str) -> String {
    const RESERVED: &[char] = &[
        ' ', '\t', '\n', '"', '\'', '\\', '>', '<', '~', '|', '&', ';', '$', '*', '?', '#', '(',
        ')', '`',
    ];

    let escaped = arg.replace('%', "%%");
    if !escaped.is_empty() && !escaped.contains(RESERVED) {
        return escaped;
    }

    let mut quoted = String::with_capacity(escaped.len() + 2);
    quoted.push('"');
    for c in escaped.chars() {
        if matches!(c, '"' | '`' | '$' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
