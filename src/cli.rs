use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::constants::config;

const LONG_ABOUT: &str = "\
This app will automatically change font DPI for your current screen
resolution, for the Xfce Desktop Environment.

Font DPI is read from the mapping file (./dpi.yaml by default). It is
created with defaults on first run.

It requires the xrandr and xfconf-query commands.

This app can be run only on Linux.";

#[derive(Debug, Parser)]
#[command(name = "autodpi", version, about = "Automatic font DPI changer for the XFCE", long_about = LONG_ABOUT)]
#[command(group(
    ArgGroup::new("action")
        .required(true)
        .args(["install", "uninstall", "run", "status"]),
))]
pub struct Cli {
    /// Autorun with the system
    #[arg(long)]
    pub install: bool,

    /// Do not autorun with the system
    #[arg(long)]
    pub uninstall: bool,

    /// Just run
    #[arg(long)]
    pub run: bool,

    /// Check if app (autorun) is installed
    #[arg(long)]
    pub status: bool,

    /// Resolution mapping file [default: ./dpi.yaml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Install,
    Uninstall,
    Run,
    Status,
}

impl Cli {
    pub fn action(&self) -> Action {
        if self.install {
            Action::Install
        } else if self.uninstall {
            Action::Uninstall
        } else if self.status {
            Action::Status
        } else {
            Action::Run
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from(config::DEFAULT_PATH))
    }
}
