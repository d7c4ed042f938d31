//! Resolution → font DPI mapping table
//!
//! The YAML document is first read into loosely-typed raw records, then
//! validated entry by entry into a [`ResolutionMapping`]. Any violation
//! rejects the whole document.

use serde::Deserialize;
use serde_yaml_ng::Value;
use std::str::FromStr;
use thiserror::Error;

/// Ways a mapping document can be malformed.
/// Entry-level variants carry the zero-based index of the offending entry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("invalid YAML: {0}")]
    Syntax(String),
    #[error("missing top-level `resolutions` list")]
    MissingResolutions,
    #[error("entry {index} is not a mapping")]
    EntryNotMapping { index: usize },
    #[error("entry {index} has no `res` field")]
    MissingRes { index: usize },
    #[error("entry {index} has a `res` field that is not a string")]
    NonStringRes { index: usize },
    #[error("entry {index} has an empty `res` field")]
    EmptyRes { index: usize },
    #[error("entry {index} has no `dpi` field")]
    MissingDpi { index: usize },
    #[error("entry {index} has a `dpi` field that is not an integer")]
    NonIntegerDpi { index: usize },
    #[error("entry {index} has a `dpi` value out of range: {value}")]
    DpiOutOfRange { index: usize, value: i64 },
}

/// One `res`/`dpi` pair. A `dpi` of -1 asks the desktop for its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionEntry {
    pub resolution: String,
    pub dpi: i32,
}

/// Ordered mapping table, immutable once loaded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionMapping {
    entries: Vec<ResolutionEntry>,
}

#[derive(Debug, Deserialize)]
struct RawMapping {
    #[serde(default)]
    resolutions: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    res: Option<Value>,
    #[serde(default)]
    dpi: Option<Value>,
}

impl ResolutionMapping {
    pub fn new(entries: Vec<ResolutionEntry>) -> Self {
        Self { entries }
    }

    /// DPI of the first entry whose resolution is exactly `resolution`
    pub fn lookup(&self, resolution: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|entry| entry.resolution == resolution)
            .map(|entry| entry.dpi)
    }

    pub fn entries(&self) -> &[ResolutionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for ResolutionMapping {
    type Err = FormatError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let blank = text.lines().map(str::trim).all(|line| line.is_empty() || line.starts_with('#'));
        if blank {
            return Err(FormatError::MissingResolutions);
        }

        let root: Value =
            serde_yaml_ng::from_str(text).map_err(|e| FormatError::Syntax(e.to_string()))?;

        // Empty documents and scalar/list roots have no `resolutions` key
        if !root.is_mapping() {
            return Err(FormatError::MissingResolutions);
        }

        let raw: RawMapping =
            serde_yaml_ng::from_value(root).map_err(|e| FormatError::Syntax(e.to_string()))?;
        Self::try_from(raw)
    }
}

impl TryFrom<RawMapping> for ResolutionMapping {
    type Error = FormatError;

    fn try_from(raw: RawMapping) -> Result<Self, Self::Error> {
        let items = raw
            .resolutions
            .as_ref()
            .and_then(Value::as_sequence)
            .ok_or(FormatError::MissingResolutions)?;

        let entries = items
            .iter()
            .enumerate()
            .map(|(index, item)| validate_entry(index, item))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(entries))
    }
}

fn validate_entry(index: usize, item: &Value) -> Result<ResolutionEntry, FormatError> {
    if !item.is_mapping() {
        return Err(FormatError::EntryNotMapping { index });
    }
    let raw: RawEntry = serde_yaml_ng::from_value(item.clone())
        .map_err(|e| FormatError::Syntax(e.to_string()))?;

    let resolution = match raw.res {
        None | Some(Value::Null) => return Err(FormatError::MissingRes { index }),
        Some(Value::String(res)) => res,
        Some(_) => return Err(FormatError::NonStringRes { index }),
    };
    if resolution.trim().is_empty() {
        return Err(FormatError::EmptyRes { index });
    }

    let dpi = match raw.dpi {
        None | Some(Value::Null) => return Err(FormatError::MissingDpi { index }),
        Some(value) => value.as_i64().ok_or(FormatError::NonIntegerDpi { index })?,
    };
    let dpi = i32::try_from(dpi).map_err(|_| FormatError::DpiOutOfRange { index, value: dpi })?;

    Ok(ResolutionEntry { resolution, dpi })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<ResolutionMapping, FormatError> {
        text.parse()
    }

    #[test]
    fn test_parse_valid_mapping_keeps_order() {
        let mapping = parse(
            "resolutions:\n  - res: 1920x1080\n    dpi: -1\n  - res: \"3840x2160\"\n    dpi: 160\n",
        )
        .unwrap();

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.entries()[0].resolution, "1920x1080");
        assert_eq!(mapping.entries()[0].dpi, -1);
        assert_eq!(mapping.entries()[1].resolution, "3840x2160");
        assert_eq!(mapping.entries()[1].dpi, 160);
    }

    #[test]
    fn test_lookup_present_and_absent() {
        let mapping = ResolutionMapping::new(vec![
            ResolutionEntry { resolution: "1366x768".into(), dpi: -1 },
            ResolutionEntry { resolution: "3200x1800".into(), dpi: 148 },
        ]);

        assert_eq!(mapping.lookup("1366x768"), Some(-1));
        assert_eq!(mapping.lookup("3200x1800"), Some(148));
        assert_eq!(mapping.lookup("2560x1440"), None);
        assert_eq!(mapping.lookup(""), None);
    }

    #[test]
    fn test_lookup_first_match_wins() {
        let mapping = parse(
            "resolutions:\n  - res: 1920x1080\n    dpi: 120\n  - res: 1920x1080\n    dpi: 96\n",
        )
        .unwrap();

        assert_eq!(mapping.lookup("1920x1080"), Some(120));
    }

    #[test]
    fn test_lookup_is_exact_match() {
        let mapping = ResolutionMapping::new(vec![ResolutionEntry {
            resolution: "1920x1080".into(),
            dpi: 110,
        }]);

        assert_eq!(mapping.lookup("1920X1080"), None);
        assert_eq!(mapping.lookup(" 1920x1080"), None);
        assert_eq!(mapping.lookup("1920x1080 "), None);
    }

    #[test]
    fn test_resolution_stored_untrimmed() {
        let mapping = parse("resolutions:\n  - res: \" 1920x1080\"\n    dpi: 110\n").unwrap();

        assert_eq!(mapping.lookup(" 1920x1080"), Some(110));
        assert_eq!(mapping.lookup("1920x1080"), None);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let mapping =
            parse("version: 2\nresolutions:\n  - res: 800x600\n    dpi: 96\n    note: old\n")
                .unwrap();

        assert_eq!(mapping.lookup("800x600"), Some(96));
    }

    #[test]
    fn test_empty_resolution_list_is_valid() {
        let mapping = parse("resolutions: []\n").unwrap();
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_missing_resolutions_key() {
        assert_eq!(parse("dpi: 96\n"), Err(FormatError::MissingResolutions));
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(parse(""), Err(FormatError::MissingResolutions));
        assert_eq!(parse("# -1 means no custom DPI\n\n"), Err(FormatError::MissingResolutions));
    }

    #[test]
    fn test_non_mapping_root() {
        assert_eq!(parse("- res: 800x600\n  dpi: 96\n"), Err(FormatError::MissingResolutions));
        assert_eq!(parse("just text\n"), Err(FormatError::MissingResolutions));
    }

    #[test]
    fn test_resolutions_not_a_list() {
        assert_eq!(parse("resolutions: 800x600\n"), Err(FormatError::MissingResolutions));
    }

    #[test]
    fn test_invalid_yaml_syntax() {
        assert!(matches!(
            parse("resolutions: [\n  - res: 800x600"),
            Err(FormatError::Syntax(_))
        ));
    }

    #[test]
    fn test_entry_not_mapping() {
        assert_eq!(
            parse("resolutions:\n  - res: 800x600\n    dpi: 96\n  - 1024x768\n"),
            Err(FormatError::EntryNotMapping { index: 1 })
        );
    }

    #[test]
    fn test_missing_res() {
        assert_eq!(
            parse("resolutions:\n  - dpi: 96\n"),
            Err(FormatError::MissingRes { index: 0 })
        );
    }

    #[test]
    fn test_null_res_counts_as_missing() {
        assert_eq!(
            parse("resolutions:\n  - res: ~\n    dpi: 96\n"),
            Err(FormatError::MissingRes { index: 0 })
        );
    }

    #[test]
    fn test_non_string_res() {
        assert_eq!(
            parse("resolutions:\n  - res: 1080\n    dpi: 96\n"),
            Err(FormatError::NonStringRes { index: 0 })
        );
    }

    #[test]
    fn test_empty_res() {
        assert_eq!(
            parse("resolutions:\n  - res: \"\"\n    dpi: 96\n"),
            Err(FormatError::EmptyRes { index: 0 })
        );
    }

    #[test]
    fn test_whitespace_only_res() {
        assert_eq!(
            parse("resolutions:\n  - res: 800x600\n    dpi: 96\n  - res: \"   \"\n    dpi: 96\n"),
            Err(FormatError::EmptyRes { index: 1 })
        );
    }

    #[test]
    fn test_missing_dpi() {
        assert_eq!(
            parse("resolutions:\n  - res: 800x600\n"),
            Err(FormatError::MissingDpi { index: 0 })
        );
    }

    #[test]
    fn test_non_integer_dpi() {
        for dpi in ["96.5", "\"96\"", "high", "[96]"] {
            let text = format!("resolutions:\n  - res: 800x600\n    dpi: {dpi}\n");
            assert_eq!(
                parse(&text),
                Err(FormatError::NonIntegerDpi { index: 0 }),
                "dpi: {dpi}"
            );
        }
    }

    #[test]
    fn test_dpi_out_of_range() {
        assert_eq!(
            parse("resolutions:\n  - res: 800x600\n    dpi: 4294967296\n"),
            Err(FormatError::DpiOutOfRange { index: 0, value: 4_294_967_296 })
        );
    }

    #[test]
    fn test_error_after_valid_entries_rejects_whole_document() {
        let result = parse(
            "resolutions:\n  - res: 800x600\n    dpi: 96\n  - res: 1024x768\n    dpi: 96\n  - res: 1280x720\n",
        );
        assert_eq!(result, Err(FormatError::MissingDpi { index: 2 }));
    }
}
