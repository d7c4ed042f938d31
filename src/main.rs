#![forbid(unsafe_code)]

mod autostart;
mod cli;
mod config;
mod constants;
mod display;
mod dpi;
mod logging;
mod watcher;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info};

use autostart::{AutostartEntry, AutostartError};
use cli::{Action, Cli};
use config::ConfigStore;
use constants::{app, watcher::POLL_INTERVAL};
use display::XrandrProbe;
use dpi::XfconfApplier;
use watcher::ResolutionWatcher;

fn main() -> ExitCode {
    if let Err(err) = logging::init(&logging::log_file_path()) {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    info!("{} v{}", app::NAME, app::VERSION);
    info!("{}", app::DESCRIPTION);

    if !cfg!(target_os = "linux") {
        error!("This app can be used only on Linux.");
        return ExitCode::FAILURE;
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return print_usage(err),
    };

    // Every fatal condition ends up here
    match run_action(&cli) {
        Ok(code) => code,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Help, missing or invalid arguments all exit with status 1
fn print_usage(err: clap::Error) -> ExitCode {
    let _ = err.print();
    match err.kind() {
        ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        ErrorKind::DisplayHelp => ExitCode::FAILURE,
        _ => {
            let _ = Cli::command().print_long_help();
            ExitCode::FAILURE
        }
    }
}

fn run_action(cli: &Cli) -> Result<ExitCode> {
    match cli.action() {
        Action::Install => {
            autostart_entry(cli)?.enable()?;
            info!("App installed.");
            Ok(ExitCode::SUCCESS)
        }
        Action::Uninstall => {
            autostart_entry(cli)?.disable()?;
            info!("App uninstalled.");
            Ok(ExitCode::SUCCESS)
        }
        Action::Status => {
            let entry = autostart_entry(cli)?;
            if entry.is_enabled() {
                info!(path = %entry.path().display(), "App autorun is installed.");
            } else {
                info!(path = %entry.path().display(), "App autorun is not installed.");
            }
            // Both answers exit non-zero
            Ok(ExitCode::FAILURE)
        }
        Action::Run => run_watcher(&cli.config_path()),
    }
}

/// Autostart entry launching this executable with `--run`, forwarding an
/// explicit `--config` as an absolute path
fn autostart_entry(cli: &Cli) -> Result<AutostartEntry, AutostartError> {
    let exe = std::env::current_exe().map_err(AutostartError::NoExecutable)?;
    let mut exec: Vec<OsString> = vec![exe.into_os_string(), "--run".into()];

    if let Some(config) = &cli.config {
        let store = ConfigStore::new(config);
        exec.push("--config".into());
        exec.push(store.path().as_os_str().to_os_string());
    }

    AutostartEntry::for_user(exec)
}

fn run_watcher(config_path: &Path) -> Result<ExitCode> {
    let store = ConfigStore::new(config_path);
    store.ensure_exists()?;
    let mapping = store.load()?;

    let mut watcher = ResolutionWatcher::new(
        &mapping,
        store.path(),
        XrandrProbe::new(),
        XfconfApplier::new(),
        POLL_INTERVAL,
    );

    let Err(err) = watcher.run();
    Err(err.into())
}
