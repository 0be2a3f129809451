//! Formatting utilities for the Zeabur CLI client.
//!
//! This module provides functionality for formatting output in various formats
//! including human readable tables and panels, JSON and CSV.

use csv::Writer;
use serde_json::Value;
use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator};

pub const TABLE: &str = "table";
pub const JSON: &str = "json";
pub const CSV: &str = "csv";

/// Error types that can occur during formatting operations
#[derive(Debug, thiserror::Error)]
pub enum FormattingError {
    /// Error when an unsupported output format is requested
    #[error("invalid output format {0}")]
    UnsupportedOutputFormat(String),
    /// Error specific to CSV operations
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    /// Error when converting bytes to UTF-8 string
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    #[error("JSON serialization error: {0}")]
    JsonSerializationError(#[from] serde_json::Error),

    #[error("CSV writer into inner error: {0}")]
    CsvIntoInnerError(#[from] csv::IntoInnerError<csv::Writer<Vec<u8>>>),
}

#[derive(Debug, Clone, Default, PartialEq, PartialOrd)]
pub struct OutputFormatOptions {
    pub with_headers: bool,
    pub pretty: bool,
}

/// Enum representing the supported output formats
#[derive(Debug, Clone, PartialEq, PartialOrd, EnumIter)]
pub enum OutputFormat {
    /// Tables and panels for a terminal
    Table(OutputFormatOptions),
    /// JSON (JavaScript Object Notation) format
    Json(OutputFormatOptions),
    /// CSV (Comma-Separated Values) format
    Csv(OutputFormatOptions),
}

impl OutputFormat {
    /// Returns a vector of all supported format names as strings
    pub fn names() -> Vec<&'static str> {
        OutputFormat::iter().map(|format| format.name()).collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Table(_) => TABLE,
            OutputFormat::Json(_) => JSON,
            OutputFormat::Csv(_) => CSV,
        }
    }

    pub fn options(&self) -> &OutputFormatOptions {
        match self {
            OutputFormat::Table(options) | OutputFormat::Json(options) | OutputFormat::Csv(options) => {
                options
            }
        }
    }

    pub fn from_string_with_options(
        format_str: &str,
        options: OutputFormatOptions,
    ) -> Result<OutputFormat, FormattingError> {
        let normalized_format = format_str.to_lowercase();
        let normalized_format = normalized_format.as_str();
        match normalized_format {
            TABLE => Ok(OutputFormat::Table(options)),
            JSON => Ok(OutputFormat::Json(options)),
            CSV => Ok(OutputFormat::Csv(options)),
            _ => Err(FormattingError::UnsupportedOutputFormat(
                normalized_format.to_string(),
            )),
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Table(OutputFormatOptions::default())
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = FormattingError;

    fn from_str(format_str: &str) -> Result<OutputFormat, FormattingError> {
        Self::from_string_with_options(format_str, OutputFormatOptions::default())
    }
}

pub trait Formattable {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError>;
}

/// Render any JSON value, honouring the `pretty` option
pub fn format_json(value: &Value, options: &OutputFormatOptions) -> Result<String, FormattingError> {
    let json = if options.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.map_err(FormattingError::JsonSerializationError)
}

fn width(text: &str) -> usize {
    text.chars().count()
}

fn pad(text: &str, size: usize) -> String {
    let mut padded = text.to_string();
    padded.extend(std::iter::repeat(' ').take(size.saturating_sub(width(text))));
    padded
}

/// A titled box of `label: value` lines
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    title: String,
    lines: Vec<(String, String)>,
}

impl Panel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn line(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.lines.push((label.into(), value.into()));
        self
    }

    fn render(&self) -> String {
        let body: Vec<String> = self
            .lines
            .iter()
            .map(|(label, value)| {
                if label.is_empty() {
                    value.clone()
                } else {
                    format!("{}: {}", label, value)
                }
            })
            .flat_map(|line| line.lines().map(str::to_string).collect::<Vec<_>>())
            .collect();

        let inner = body
            .iter()
            .map(|line| width(line))
            .chain(std::iter::once(width(&self.title) + 2))
            .max()
            .unwrap_or(0);

        let mut rendered = String::new();
        let title = format!(" {} ", self.title);
        rendered.push_str(&format!("╭{}╮\n", center(&title, inner + 2, '─')));
        for line in &body {
            rendered.push_str(&format!("│ {} │\n", pad(line, inner)));
        }
        rendered.push_str(&format!("╰{}╯", "─".repeat(inner + 2)));
        rendered
    }
}

fn center(text: &str, size: usize, fill: char) -> String {
    let free = size.saturating_sub(width(text));
    let left = free / 2;
    let right = free - left;
    format!(
        "{}{}{}",
        fill.to_string().repeat(left),
        text,
        fill.to_string().repeat(right)
    )
}

impl Formattable for Panel {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError> {
        match f {
            OutputFormat::Table(_) => Ok(self.render()),
            OutputFormat::Csv(options) => {
                let mut wtr = Writer::from_writer(vec![]);
                if options.with_headers {
                    wtr.write_record(self.lines.iter().map(|(label, _)| label.to_uppercase()))?;
                }
                wtr.write_record(self.lines.iter().map(|(_, value)| value.as_str()))?;
                let data = wtr.into_inner()?;
                Ok(String::from_utf8(data)?)
            }
            OutputFormat::Json(_) => Err(FormattingError::UnsupportedOutputFormat(f.to_string())),
        }
    }
}

/// A titled grid of rows under named columns
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    title: String,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(title: impl Into<String>, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn render(&self) -> String {
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(index))
                    .map(|cell| width(cell))
                    .chain(std::iter::once(width(column)))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let render_row = |cells: &[String]| -> String {
            widths
                .iter()
                .enumerate()
                .map(|(index, size)| pad(cells.get(index).map(String::as_str).unwrap_or(""), *size))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut lines = vec![self.title.clone(), render_row(&self.columns)];
        lines.push(
            widths
                .iter()
                .map(|size| "─".repeat(*size))
                .collect::<Vec<_>>()
                .join("  "),
        );
        lines.extend(self.rows.iter().map(|row| render_row(row)));
        lines.join("\n")
    }
}

impl Formattable for Table {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError> {
        match f {
            OutputFormat::Table(_) => Ok(self.render()),
            OutputFormat::Csv(options) => {
                let mut wtr = Writer::from_writer(vec![]);
                if options.with_headers {
                    wtr.write_record(self.columns.iter().map(|column| column.to_uppercase()))?;
                }
                for row in &self.rows {
                    wtr.write_record(row)?;
                }
                let data = wtr.into_inner()?;
                Ok(String::from_utf8(data)?)
            }
            OutputFormat::Json(_) => Err(FormattingError::UnsupportedOutputFormat(f.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table_format() -> OutputFormat {
        OutputFormat::default()
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json(Default::default()));
        assert_eq!(OutputFormat::from_str("CSV").unwrap(), OutputFormat::Csv(Default::default()));
        assert_eq!(OutputFormat::from_str("Table").unwrap(), OutputFormat::Table(Default::default()));
        assert!(matches!(
            OutputFormat::from_str("tree"),
            Err(FormattingError::UnsupportedOutputFormat(name)) if name == "tree"
        ));
    }

    #[test]
    fn test_names_cover_every_format() {
        assert_eq!(OutputFormat::names(), vec!["table", "json", "csv"]);
    }

    #[test]
    fn test_panel_rendering() {
        let panel = Panel::new("Current User")
            .line("Username", "alice")
            .line("ID", "u1");

        let rendered = panel.format(&table_format()).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with('╭') && lines[0].contains(" Current User "));
        assert_eq!(lines[1], "│ Username: alice │");
        assert_eq!(lines[2], "│ ID: u1          │");
        assert!(lines[3].starts_with('╰'));
        // every line of the box has the same width
        assert!(lines.iter().all(|line| line.chars().count() == lines[1].chars().count()));
    }

    #[test]
    fn test_panel_splits_multiline_values() {
        let panel = Panel::new("Output").line("", "one\ntwo");
        let rendered = panel.format(&table_format()).unwrap();
        assert!(rendered.contains("│ one      │"));
        assert!(rendered.contains("│ two      │"));
    }

    #[test]
    fn test_table_rendering_aligns_columns() {
        let mut table = Table::new("Projects", ["ID", "Name"]);
        table.row(vec!["p1".to_string(), "web".to_string()]);
        table.row(vec!["project-2".to_string(), "api".to_string()]);

        let rendered = table.format(&table_format()).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Projects");
        assert_eq!(lines[1], "ID         Name");
        assert_eq!(lines[2], "─────────  ────");
        assert_eq!(lines[3], "p1         web");
        assert_eq!(lines[4], "project-2  api");
    }

    #[test]
    fn test_table_csv_with_headers() {
        let mut table = Table::new("Environments", ["ID", "Name"]);
        table.row(vec!["e1".to_string(), "production".to_string()]);

        let format = OutputFormat::Csv(OutputFormatOptions {
            with_headers: true,
            pretty: false,
        });
        assert_eq!(table.format(&format).unwrap(), "ID,NAME\ne1,production\n");
    }

    #[test]
    fn test_format_json_pretty_and_compact() {
        let value = json!({"me": {"_id": "u1"}});
        let compact = format_json(&value, &OutputFormatOptions::default()).unwrap();
        assert_eq!(compact, r#"{"me":{"_id":"u1"}}"#);

        let pretty = format_json(
            &value,
            &OutputFormatOptions {
                with_headers: false,
                pretty: true,
            },
        )
        .unwrap();
        assert!(pretty.contains('\n'));
    }
}
