//! Bundled mapping written on first run

/// Template written to the mapping path when no file exists yet.
/// Everything defaults to "no custom DPI" except the three high-density
/// resolutions.
pub const DEFAULT_MAPPING_YAML: &str = r#"# 96 font DPI is the Xfce default
# -1 means "no custom font DPI"

# keep the resolution free of spaces
# on either side

resolutions:
  - res: 800x600
    dpi: -1
  - res: 1024x768
    dpi: -1
  - res: 1152x864
    dpi: -1
  - res: 1280x720
    dpi: -1
  - res: 1280x800
    dpi: -1
  - res: 1280x1024
    dpi: -1
  - res: 1366x664
    dpi: -1
  - res: 1360x768
    dpi: -1
  - res: 1366x768
    dpi: -1
  - res: 1600x900
    dpi: -1
  - res: 1600x1200
    dpi: -1
  - res: 1680x1050
    dpi: -1
  - res: 1920x1080
    dpi: -1
  - res: 1920x1200
    dpi: -1
  - res: 2048x1536
    dpi: -1
  - res: 3200x1800
    dpi: 148
  - res: 3840x1620
    dpi: 160
  - res: 3840x2160
    dpi: 160
"#;
