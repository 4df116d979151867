//! Output mode control and structured serialization.
//!
//! [`OutputMode`] determines how a [`Report`] is formatted, from terminal
//! styling to structured data. [`OutputDestination`] decides where the
//! rendered text goes.

use std::io::Write;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;

use crate::report::Report;

/// Controls how output is rendered.
///
/// This is the user-facing enum for the `--output` CLI flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Auto-detect: TTY gets Term, pipe gets Text
    #[default]
    Auto,
    /// Always use terminal styling
    Term,
    /// Never use styling (plain text)
    Text,
    /// Serialize the report as JSON
    Json,
    /// Serialize the report as YAML
    Yaml,
    /// Serialize the report as CSV
    Csv,
}

impl OutputMode {
    /// Returns true if this is a structured output mode (JSON, YAML, CSV).
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Json | OutputMode::Yaml | OutputMode::Csv)
    }

    /// Resolves Auto mode to concrete Term or Text based on TTY detection.
    ///
    /// For non-Auto modes, returns self unchanged.
    pub fn resolve_auto(&self) -> OutputMode {
        match self {
            OutputMode::Auto => {
                if atty::is(atty::Stream::Stdout) {
                    OutputMode::Term
                } else {
                    OutputMode::Text
                }
            }
            other => *other,
        }
    }
}

/// Errors that can occur during serialization.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(String),

    #[error("Not a structured output mode")]
    NotStructured,
}

/// Renders a report in the given mode.
pub fn render(report: &Report, mode: OutputMode) -> Result<String, SerializeError> {
    match mode.resolve_auto() {
        OutputMode::Term => Ok(report.render_text(true)),
        OutputMode::Text => Ok(report.render_text(false)),
        structured => serialize_structured(report, structured),
    }
}

/// Serializes data to the specified structured format.
///
/// Returns an error if the output mode is not a structured mode.
pub fn serialize_structured<T: Serialize>(
    data: &T,
    mode: OutputMode,
) -> Result<String, SerializeError> {
    match mode {
        OutputMode::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputMode::Yaml => Ok(serde_yaml::to_string(data)?),
        OutputMode::Csv => serialize_csv(data),
        _ => Err(SerializeError::NotStructured),
    }
}

/// Serializes data to CSV format.
///
/// The data is first converted to JSON. A list of objects becomes one row
/// per object with the first object's keys as headers; nested values are
/// written as compact JSON.
pub fn serialize_csv<T: Serialize>(data: &T) -> Result<String, SerializeError> {
    let json_value = serde_json::to_value(data)?;
    flatten_json_to_csv(&json_value)
}

fn flatten_json_to_csv(value: &serde_json::Value) -> Result<String, SerializeError> {
    use serde_json::Value;

    let mut wtr = csv::Writer::from_writer(vec![]);
    let csv_err = |e: csv::Error| SerializeError::Csv(e.to_string());

    match value {
        Value::Array(arr) if !arr.is_empty() => {
            if let Some(Value::Object(first)) = arr.first() {
                let headers: Vec<&str> = first.keys().map(|s| s.as_str()).collect();
                wtr.write_record(&headers).map_err(csv_err)?;

                for item in arr {
                    if let Value::Object(obj) = item {
                        let row: Vec<String> = headers
                            .iter()
                            .map(|h| obj.get(*h).map(value_to_string).unwrap_or_default())
                            .collect();
                        wtr.write_record(&row).map_err(csv_err)?;
                    }
                }
            } else {
                wtr.write_record(["value"]).map_err(csv_err)?;
                for item in arr {
                    wtr.write_record([value_to_string(item)]).map_err(csv_err)?;
                }
            }
        }
        Value::Object(obj) => {
            wtr.write_record(["key", "value"]).map_err(csv_err)?;
            for (k, v) in obj {
                wtr.write_record([k.as_str(), &value_to_string(v)])
                    .map_err(csv_err)?;
            }
        }
        _ => {
            wtr.write_record(["value"]).map_err(csv_err)?;
            wtr.write_record([value_to_string(value)]).map_err(csv_err)?;
        }
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| SerializeError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| SerializeError::Csv(e.to_string()))
}

fn value_to_string(v: &serde_json::Value) -> String {
    match v {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Destination for rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDestination {
    /// Write to standard output
    Stdout,
    /// Write to a specific file
    File(PathBuf),
}

impl OutputDestination {
    /// Writes text content to this destination.
    pub fn write_text(&self, content: &str) -> std::io::Result<()> {
        match self {
            OutputDestination::Stdout => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                write!(handle, "{}", content)?;
                handle.flush()
            }
            OutputDestination::File(path) => {
                validate_path(path)?;
                log::debug!("writing {} bytes to {}", content.len(), path.display());
                std::fs::write(path, content)
            }
        }
    }
}

/// Validates that a file path's parent directory exists.
fn validate_path(path: &std::path::Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Parent directory does not exist: {}", parent.display()),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demos::Section;
    use serde_json::json;

    fn sample() -> Report {
        let mut report = Report::new();
        report.push(Section::Maps, "max value", json!(4));
        report.push(Section::Maps, "entry by key", json!({"key": "Z", "value": 0}));
        report
    }

    #[test]
    fn output_mode_default_is_auto() {
        assert_eq!(OutputMode::default(), OutputMode::Auto);
    }

    #[test]
    fn output_mode_is_structured() {
        assert!(OutputMode::Json.is_structured());
        assert!(OutputMode::Yaml.is_structured());
        assert!(OutputMode::Csv.is_structured());
        assert!(!OutputMode::Auto.is_structured());
        assert!(!OutputMode::Term.is_structured());
        assert!(!OutputMode::Text.is_structured());
    }

    #[test]
    fn resolve_auto_non_auto_unchanged() {
        assert_eq!(OutputMode::Term.resolve_auto(), OutputMode::Term);
        assert_eq!(OutputMode::Json.resolve_auto(), OutputMode::Json);
        assert_ne!(OutputMode::Auto.resolve_auto(), OutputMode::Auto);
    }

    #[test]
    fn serialize_structured_not_structured() {
        let result = serialize_structured(&json!({"key": "value"}), OutputMode::Term);
        assert!(matches!(result, Err(SerializeError::NotStructured)));
    }

    #[test]
    fn render_json() {
        let out = render(&sample(), OutputMode::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["value"], json!(4));
        assert_eq!(parsed[1]["value"]["key"], json!("Z"));
    }

    #[test]
    fn render_yaml() {
        let out = render(&sample(), OutputMode::Yaml).unwrap();
        assert!(out.contains("label: max value"));
        assert!(out.contains("section: maps"));
    }

    #[test]
    fn render_csv_flattens_nested_values() {
        let out = render(&sample(), OutputMode::Csv).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("label,section,value"));
        assert_eq!(lines.next(), Some("max value,maps,4"));
        assert_eq!(
            lines.next(),
            Some(r#"entry by key,maps,"{""key"":""Z"",""value"":0}""#)
        );
    }

    #[test]
    fn render_text_modes() {
        let plain = render(&sample(), OutputMode::Text).unwrap();
        assert!(plain.starts_with("Maps\n"));
        assert!(!plain.contains('\u{1b}'));

        let styled = render(&sample(), OutputMode::Term).unwrap();
        assert!(styled.contains('\u{1b}'));
    }

    #[test]
    fn csv_scalar_and_object() {
        let out = serialize_csv(&json!(3)).unwrap();
        assert_eq!(out.lines().collect::<Vec<_>>(), vec!["value", "3"]);

        let out = serialize_csv(&json!({"a": null})).unwrap();
        assert_eq!(out.lines().collect::<Vec<_>>(), vec!["key,value", "a,"]);
    }

    #[test]
    fn write_text_to_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("report.txt");
        let dest = OutputDestination::File(file_path.clone());

        dest.write_text("hello").unwrap();

        assert_eq!(std::fs::read_to_string(file_path).unwrap(), "hello");
    }

    #[test]
    fn write_to_missing_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("missing").join("report.txt");
        let dest = OutputDestination::File(file_path);

        let err = dest.write_text("hello").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
