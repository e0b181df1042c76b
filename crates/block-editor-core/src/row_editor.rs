//! Row Editor: structural edits, the selection indicator and line numbers.
//!
//! All row insertion/deletion and selection changes go through [`RowEditor`]. Invalid requests
//! (out-of-range indices, positions forbidden by `restrict_insert_to_end`) are ignored and
//! reported as `false`; they never fail.
//!
//! Row indices are re-derived from row order on every call. After every structural change the
//! indicator is reasserted so exactly one row is selected, and line numbers are recomputed.

use crate::config::EditorConfig;
use crate::document::{Document, Row, TokenSpec};
use block_editor_lang::Tag;
use tracing::debug;

/// Owner of the [`Document`] and the only component that changes its row structure.
#[derive(Debug, Clone)]
pub struct RowEditor {
    document: Document,
    config: EditorConfig,
}

impl RowEditor {
    /// Create an editor holding the blank program-start row.
    pub fn new(config: EditorConfig) -> Self {
        let mut editor = Self {
            document: Document::new(),
            config,
        };
        editor.refresh_line_numbers();
        editor
    }

    /// The document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub(crate) fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// The configuration this editor was built with.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Index of the selected row.
    pub fn selected_row_index(&self) -> usize {
        self.document.selected_row_index()
    }

    /// Insert a row built from `specs` at `index`.
    ///
    /// Every token receives the `code` tag. The selection advances by one row (clamped to the last
    /// row). Rejected when `index > row_count`, or when `restrict_insert_to_end` is set and `index`
    /// is not the current last-row index.
    pub fn insert_row(&mut self, index: usize, specs: &[TokenSpec]) -> bool {
        let count = self.document.row_count();
        if index > count {
            debug!(index, count, "insert_row ignored: index out of range");
            return false;
        }
        if self.config.restrict_insert_to_end && index != self.document.last_row_index() {
            debug!(index, count, "insert_row ignored: insertion restricted to the last row");
            return false;
        }

        let row = Row::from_specs(specs, self.config.use_syntax_highlighting);
        self.document.rows_mut().insert(index, row);

        let next = (self.document.selected_row_index() + 1).min(self.document.last_row_index());
        self.reassert_indicator(next);
        self.refresh_line_numbers();
        true
    }

    /// Delete the row at `index`.
    ///
    /// Deleting the last row deletes the row before it instead, and the selection moves to the
    /// new last row. The only row of a one-row document is never deleted.
    pub fn delete_row(&mut self, index: usize) -> bool {
        let count = self.document.row_count();
        if index >= count {
            debug!(index, count, "delete_row ignored: index out of range");
            return false;
        }
        if count <= 1 {
            debug!(index, "delete_row ignored: the program-end row cannot be deleted");
            return false;
        }

        let is_last = index == self.document.last_row_index();
        let target = if is_last { index - 1 } else { index };
        self.document.rows_mut().remove(target);

        let last = self.document.last_row_index();
        let selected = if is_last {
            last
        } else {
            self.document.selected_row_index().min(last)
        };
        self.reassert_indicator(selected);
        self.refresh_line_numbers();
        true
    }

    /// Move the selection indicator to `index`.
    pub fn select_row(&mut self, index: usize) -> bool {
        if !self.can_select(index) {
            return false;
        }
        self.reassert_indicator(index);
        true
    }

    /// Like [`select_row`](Self::select_row), and additionally moves the `selected` emphasis from
    /// the previously selected row's tokens to every token of the new row.
    pub fn select_and_highlight_row(&mut self, index: usize) -> bool {
        if !self.can_select(index) {
            return false;
        }

        let previous = self.document.selected_row_index();
        if let Some(row) = self.document.row_mut(previous) {
            for token in row.tokens_mut() {
                token.tags_mut().remove(&Tag::Selected);
            }
        }

        self.reassert_indicator(index);

        if let Some(row) = self.document.row_mut(index) {
            for token in row.tokens_mut() {
                token.tags_mut().insert(Tag::Selected);
            }
        }
        true
    }

    /// Recompute every row's display number as `line_number_start + row_index`.
    ///
    /// With line numbers disabled the slot is left blank.
    pub fn refresh_line_numbers(&mut self) {
        let start = self.config.line_number_start;
        let enabled = self.config.use_line_numbers;
        for (index, row) in self.document.rows_mut().iter_mut().enumerate() {
            let number = enabled.then(|| start.saturating_add(index as i64));
            row.set_line_number(number);
        }
    }

    fn can_select(&self, index: usize) -> bool {
        let count = self.document.row_count();
        if index >= count {
            debug!(index, count, "select ignored: index out of range");
            return false;
        }
        if self.config.restrict_insert_to_end && index != self.document.last_row_index() {
            debug!(index, count, "select ignored: selection restricted to the last row");
            return false;
        }
        true
    }

    fn reassert_indicator(&mut self, index: usize) {
        for (i, row) in self.document.rows_mut().iter_mut().enumerate() {
            if row.is_selected() != (i == index) {
                row.set_selected(i == index);
            }
        }
        self.document.set_selected_index(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selected_rows(editor: &RowEditor) -> Vec<usize> {
        editor
            .document()
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, row)| row.is_selected())
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_insert_advances_selection() {
        let mut editor = RowEditor::new(EditorConfig::default());
        assert!(editor.insert_row(0, &[TokenSpec::new("a")]));
        assert_eq!(editor.document().row_count(), 2);
        assert_eq!(editor.selected_row_index(), 1);
        assert_eq!(selected_rows(&editor), vec![1]);
    }

    #[test]
    fn test_delete_only_row_is_ignored() {
        let mut editor = RowEditor::new(EditorConfig::default());
        assert!(!editor.delete_row(0));
        assert_eq!(editor.document().row_count(), 1);
        assert_eq!(selected_rows(&editor), vec![0]);
    }

    #[test]
    fn test_line_numbers_follow_start() {
        let mut editor = RowEditor::new(EditorConfig::default().with_line_number_start(5));
        editor.insert_row(0, &[TokenSpec::new("a")]);
        let numbers: Vec<_> = editor
            .document()
            .rows()
            .iter()
            .map(|row| row.line_number())
            .collect();
        assert_eq!(numbers, vec![Some(5), Some(6)]);
        assert_eq!(editor.document().row(1).unwrap().tokens()[0].text(), "6");
    }

    #[test]
    fn test_line_numbers_disabled() {
        let mut editor = RowEditor::new(EditorConfig::default().with_line_numbers(false));
        editor.insert_row(0, &[TokenSpec::new("a")]);
        assert!(editor
            .document()
            .rows()
            .iter()
            .all(|row| row.line_number().is_none() && row.tokens()[0].text().is_empty()));
    }
}
