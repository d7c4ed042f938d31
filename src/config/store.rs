//! Mapping file on disk: bootstrap and load

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::defaults::DEFAULT_MAPPING_YAML;
use super::{FormatError, ResolutionMapping};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{} has incorrect format, please delete it to create default", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
    #[error("cannot access {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Owner of the mapping file path
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Relative paths are resolved against the working directory
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the default mapping if nothing exists at the path yet.
    /// Returns `true` when the file was created.
    pub fn ensure_exists(&self) -> Result<bool, ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: self.path.clone(),
            source,
        };

        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                debug!(path = %self.path.display(), "mapping file present");
                return Ok(false);
            }
            Err(e) => return Err(io_err(e)),
        };

        info!(path = %self.path.display(), "mapping file does not exist, creating default");
        file.write_all(DEFAULT_MAPPING_YAML.as_bytes())
            .map_err(io_err)?;
        info!(path = %self.path.display(), "mapping file created");
        Ok(true)
    }

    pub fn load(&self) -> Result<ResolutionMapping, ConfigError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;

        let mapping: ResolutionMapping =
            contents.parse().map_err(|source| ConfigError::Format {
                path: self.path.clone(),
                source,
            })?;

        info!(path = %self.path.display(), entries = mapping.len(), "loaded resolution mapping");
        if mapping.is_empty() {
            warn!(path = %self.path.display(), "mapping has no entries, every resolution is unmapped");
        }
        for entry in mapping.entries() {
            debug!(res = %entry.resolution, dpi = entry.dpi, "mapping entry");
        }
        Ok(mapping)
    }
}
