//! Editor construction options.
//!
//! Hosts usually build the configuration from a JSON object using the camelCase field names
//! (`useLineNumbers`, `lineNumberStart`, ...). The positional names of the legacy constructor
//! (`lineNumBool`, `syntaxHighlightingBool`, `lineNumStart`, `cellWidth`) are accepted as aliases.

use crate::error::HostError;
use serde::{Deserialize, Serialize};

/// Editor construction options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// Render a line number in each row's first gutter slot.
    #[serde(alias = "lineNumBool")]
    pub use_line_numbers: bool,
    /// When `false`, every content token also receives the `noHighlighting` tag.
    ///
    /// Hover resolution is unaffected; only presentation is suppressed.
    #[serde(alias = "syntaxHighlightingBool")]
    pub use_syntax_highlighting: bool,
    /// The number displayed on the first row.
    #[serde(alias = "lineNumStart")]
    pub line_number_start: i64,
    /// Width hint for the line-number column, in cells. Negative means "fit to content".
    #[serde(alias = "cellWidth")]
    pub first_column_width: f64,
    /// Only allow inserting at / selecting the last row.
    pub restrict_insert_to_end: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            use_line_numbers: true,
            use_syntax_highlighting: true,
            line_number_start: 1,
            first_column_width: -1.0,
            restrict_insert_to_end: false,
        }
    }
}

impl EditorConfig {
    /// Decode a configuration object; missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self, HostError> {
        let config: EditorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that decode fine but cannot be used.
    pub fn validate(&self) -> Result<(), HostError> {
        if !self.first_column_width.is_finite() {
            return Err(HostError::InvalidConfig {
                field: "firstColumnWidth",
                message: format!("expected a finite number, got {}", self.first_column_width),
            });
        }
        Ok(())
    }

    /// Enable or disable line numbers.
    pub fn with_line_numbers(mut self, enabled: bool) -> Self {
        self.use_line_numbers = enabled;
        self
    }

    /// Enable or disable syntax highlighting classes.
    pub fn with_syntax_highlighting(mut self, enabled: bool) -> Self {
        self.use_syntax_highlighting = enabled;
        self
    }

    /// Set the first displayed line number.
    pub fn with_line_number_start(mut self, start: i64) -> Self {
        self.line_number_start = start;
        self
    }

    /// Set the line-number column width hint (negative = fit to content).
    pub fn with_first_column_width(mut self, width: f64) -> Self {
        self.first_column_width = width;
        self
    }

    /// Restrict insertion and selection to the last row.
    pub fn with_restrict_insert_to_end(mut self, restrict: bool) -> Self {
        self.restrict_insert_to_end = restrict;
        self
    }
}
