//! Headless render snapshot.
//!
//! Provides the data a host needs to paint the rows: cell texts with their class names, the
//! selection flag, line numbers, and the resolved width of the line-number column.

use crate::config::EditorConfig;
use crate::document::{Document, LINE_NUMBER_COLUMN};
use unicode_width::UnicodeWidthStr;

/// One rendered cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellSnapshot {
    /// Display text.
    pub text: String,
    /// Class names to apply, in canonical tag order.
    pub classes: Vec<String>,
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowSnapshot {
    /// Row index.
    pub index: usize,
    /// Displayed line number, if enabled.
    pub line_number: Option<i64>,
    /// Whether the row carries the selection indicator.
    pub is_selected: bool,
    /// All cells, gutter slots included.
    pub cells: Vec<CellSnapshot>,
}

/// All rows plus layout hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowsSnapshot {
    /// Rows in order.
    pub rows: Vec<RowSnapshot>,
    /// Index of the selected row.
    pub selected_row: usize,
    /// Width of the line-number column, in terminal cells.
    pub first_column_width: usize,
}

/// Build a snapshot of `document`.
pub fn snapshot(document: &Document, config: &EditorConfig) -> RowsSnapshot {
    let rows = document
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| RowSnapshot {
            index,
            line_number: row.line_number(),
            is_selected: row.is_selected(),
            cells: row
                .tokens()
                .iter()
                .map(|token| CellSnapshot {
                    text: token.text().to_string(),
                    classes: token
                        .tags()
                        .class_names()
                        .into_iter()
                        .map(str::to_string)
                        .collect(),
                })
                .collect(),
        })
        .collect();

    RowsSnapshot {
        rows,
        selected_row: document.selected_row_index(),
        first_column_width: first_column_width(document, config),
    }
}

/// Resolve the line-number column width.
///
/// A non-negative `first_column_width` is used as given (rounded); a negative one fits the widest
/// line-number text.
pub fn first_column_width(document: &Document, config: &EditorConfig) -> usize {
    if config.first_column_width >= 0.0 {
        return config.first_column_width.round() as usize;
    }
    document
        .rows()
        .iter()
        .filter_map(|row| row.token(LINE_NUMBER_COLUMN))
        .map(|slot| UnicodeWidthStr::width(slot.text()))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RowEditor, TokenSpec};

    #[test]
    fn test_fit_to_content_width() {
        let mut editor = RowEditor::new(EditorConfig::default().with_line_number_start(8));
        editor.insert_row(0, &[TokenSpec::new("a")]);
        editor.insert_row(1, &[TokenSpec::new("b")]);
        // Rows are numbered 8, 9, 10.
        assert_eq!(first_column_width(editor.document(), editor.config()), 2);
    }

    #[test]
    fn test_explicit_width() {
        let config = EditorConfig::default().with_first_column_width(3.6);
        let editor = RowEditor::new(config);
        assert_eq!(first_column_width(editor.document(), editor.config()), 4);
    }

    #[test]
    fn test_snapshot_classes() {
        let mut editor = RowEditor::new(EditorConfig::default().with_syntax_highlighting(false));
        editor.insert_row(0, &[TokenSpec::with_kind("{", "openBrack")]);
        let snap = snapshot(editor.document(), editor.config());
        assert_eq!(snap.rows.len(), 2);
        assert_eq!(snap.selected_row, 1);
        assert_eq!(
            snap.rows[0].cells[2].classes,
            vec!["code", "openBracket", "noHighlighting"]
        );
        assert_eq!(snap.rows[0].cells[0].classes, vec!["code", "lineNumber"]);
    }
}
