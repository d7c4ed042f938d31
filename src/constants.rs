//! Application-wide constants
//!
//! Single source of truth for tool names, paths and timing values.

/// Application identity
pub mod app {
    /// Name shown in the startup banner and the autostart entry
    pub const NAME: &str = "AUTODPI";

    /// Crate version, reported in the banner
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// One-line description logged after the banner
    pub const DESCRIPTION: &str = "Automatic font DPI changer for the XFCE.";
}

/// Mapping file location
pub mod config {
    /// Default mapping file, relative to the working directory
    pub const DEFAULT_PATH: &str = "./dpi.yaml";
}

/// Resolution watcher timing
pub mod watcher {
    use std::time::Duration;

    /// Delay between two display probes
    pub const POLL_INTERVAL: Duration = Duration::from_secs(3);
}

/// External commands the daemon shells out to
pub mod commands {
    /// Display query tool
    pub const XRANDR: &str = "xrandr";

    /// Marker identifying the primary output in xrandr output
    pub const PRIMARY_MARKER: &str = " connected primary ";

    /// Zero-based field of the primary line holding `<W>x<H>+X+Y`
    pub const RESOLUTION_FIELD: usize = 3;

    /// Xfce settings writer
    pub const XFCONF_QUERY: &str = "xfconf-query";

    /// xfconf channel holding the Xft properties
    pub const XSETTINGS_CHANNEL: &str = "xsettings";

    /// Font DPI property path
    pub const DPI_PROPERTY: &str = "/Xft/DPI";
}

/// XDG autostart registration
pub mod autostart {
    /// Subdirectory of the user config dir scanned by session managers
    pub const DIR: &str = "autostart";

    /// Desktop entry filename
    pub const FILENAME: &str = "autodpi.desktop";

    /// Comment field of the desktop entry
    pub const COMMENT: &str = "Adjust Xfce font DPI to the primary display resolution";
}

/// Log file settings
pub mod logging {
    /// Environment variable selecting the log level
    pub const LEVEL_ENV: &str = "LOG_LEVEL";

    /// Suffix appended to the executable name to build the log filename
    pub const FILE_SUFFIX: &str = ".txt";
}
