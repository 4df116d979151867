//! Labelled demonstration results and their text rendering.

use console::Style;
use serde::Serialize;

use crate::demos::Section;

/// One labelled result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub section: Section,
    pub label: String,
    pub value: serde_json::Value,
}

/// Ordered collection of demonstration results.
///
/// Serializes as a plain list of entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Report {
    entries: Vec<Entry>,
}

impl Report {
    pub fn new() -> Self {
        Report::default()
    }

    /// Appends a result.
    pub fn push(&mut self, section: Section, label: &str, value: serde_json::Value) {
        self.entries.push(Entry {
            section,
            label: label.to_string(),
            value,
        });
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by section and label.
    pub fn get(&self, section: Section, label: &str) -> Option<&serde_json::Value> {
        self.entries
            .iter()
            .find(|entry| entry.section == section && entry.label == label)
            .map(|entry| &entry.value)
    }

    /// Renders the report as text, one heading per section.
    ///
    /// With `styled`, headings and labels carry terminal styling regardless
    /// of whether stdout is a terminal.
    pub fn render_text(&self, styled: bool) -> String {
        let heading = Style::new().bold().cyan().force_styling(styled);
        let label = Style::new().yellow().force_styling(styled);

        let mut out = String::new();
        let mut current: Option<Section> = None;
        for entry in &self.entries {
            if current != Some(entry.section) {
                if current.is_some() {
                    out.push('\n');
                }
                out.push_str(&heading.apply_to(entry.section.title()).to_string());
                out.push('\n');
                current = Some(entry.section);
            }
            out.push_str(&format!(
                "  {}: {}\n",
                label.apply_to(&entry.label),
                display_value(&entry.value)
            ));
        }
        out
    }
}

/// Text form of a result value: strings unquoted, absence spelled out,
/// everything else as compact JSON.
fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "none".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Report {
        let mut report = Report::new();
        report.push(Section::Arrays, "count", json!(25));
        report.push(Section::Arrays, "dedupe", json!([1, 2, 3]));
        report.push(Section::Maps, "max key", json!("Z"));
        report
    }

    #[test]
    fn lookup_by_section_and_label() {
        let report = sample();
        assert_eq!(report.len(), 3);
        assert_eq!(report.get(Section::Arrays, "count"), Some(&json!(25)));
        assert_eq!(report.get(Section::Maps, "count"), None);
    }

    #[test]
    fn plain_text_groups_by_section() {
        let text = sample().render_text(false);
        assert_eq!(
            text,
            "Arrays\n  count: 25\n  dedupe: [1,2,3]\n\nMaps\n  max key: Z\n"
        );
    }

    #[test]
    fn styled_text_carries_escape_codes() {
        let text = sample().render_text(true);
        assert!(text.contains("\u{1b}["));
        assert!(text.contains("count"));
    }

    #[test]
    fn serializes_as_list() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["section"], json!("arrays"));
        assert_eq!(value[2]["label"], json!("max key"));
    }

    #[test]
    fn null_values_read_as_none() {
        assert_eq!(display_value(&serde_json::Value::Null), "none");
        assert_eq!(display_value(&json!("x")), "x");
    }
}
