//! Host-facing editor.
//!
//! [`Editor`] bundles the [`RowEditor`], the [`EventFacade`] and change notifications into the
//! API a host page programs against.
//!
//! # Example
//!
//! ```rust
//! use block_editor_core::{Editor, EditorConfig, TokenRef, TokenSpec};
//!
//! let mut editor = Editor::new(EditorConfig::default());
//! editor.insert_row(0, &[
//!     TokenSpec::new("print"),
//!     TokenSpec::with_kind("(", "openParen"),
//!     TokenSpec::new("x"),
//!     TokenSpec::with_kind(")", "closeParen"),
//! ]);
//!
//! assert_eq!(editor.get_row_count(), 2);
//! assert_eq!(editor.get_row_as_string(0).as_deref(), Some("print(x)"));
//!
//! // Hovering the callee highlights the whole call.
//! let set = editor.pointer_enter(TokenRef::content(0, 0));
//! assert_eq!(set.len(), 4);
//! editor.pointer_leave(TokenRef::content(0, 0));
//! ```

use crate::config::EditorConfig;
use crate::document::{Document, TokenRef, TokenSpec};
use crate::error::HostError;
use crate::events::{ClickTarget, Dispatch, EventFacade, PointerEvent};
use crate::resolver::HighlightSet;
use crate::row_editor::RowEditor;
use crate::snapshot::{self, RowsSnapshot};
use block_editor_lang::Tag;
use std::ops::Range;

/// Kind of state change reported to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorChangeKind {
    /// Rows were inserted or deleted (line numbers and selection may also have moved).
    RowsChanged,
    /// The selection indicator (or row emphasis) moved.
    SelectionChanged,
    /// Hover markings were applied or removed.
    HighlightChanged,
}

/// Change record passed to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorChange {
    /// What changed.
    pub kind: EditorChangeKind,
    /// Version before the change.
    pub old_version: u64,
    /// Version after the change.
    pub new_version: u64,
    /// Affected rows, when known.
    pub affected_rows: Option<Range<usize>>,
}

/// Change callback type.
pub type EditorChangeCallback = Box<dyn FnMut(&EditorChange) + Send>;

/// The embeddable editor.
///
/// Every mutating call that changes state bumps [`version`](Self::version) and notifies
/// subscribers. Rejected calls report `false`; they and accepted calls that change nothing (such
/// as re-selecting the selected row) leave the version untouched.
pub struct Editor {
    rows: RowEditor,
    events: EventFacade,
    version: u64,
    callbacks: Vec<EditorChangeCallback>,
}

impl std::fmt::Debug for Editor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Editor")
            .field("rows", &self.rows)
            .field("events", &self.events)
            .field("version", &self.version)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

impl Editor {
    /// Create an editor holding the blank program-start row.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            rows: RowEditor::new(config),
            events: EventFacade::new(),
            version: 0,
            callbacks: Vec::new(),
        }
    }

    /// Create an editor from a JSON configuration object.
    pub fn from_json_config(json: &str) -> Result<Self, HostError> {
        Ok(Self::new(EditorConfig::from_json(json)?))
    }

    /// The configuration.
    pub fn config(&self) -> &EditorConfig {
        self.rows.config()
    }

    /// The document.
    pub fn document(&self) -> &Document {
        self.rows.document()
    }

    /// Current state version.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Content texts of row `index` (gutter slots excluded).
    pub fn get_row_as_token_list(&self, index: usize) -> Option<Vec<String>> {
        let row = self.document().row(index)?;
        Some(row.content().iter().map(|t| t.text().to_string()).collect())
    }

    /// Content texts of row `index`, concatenated.
    pub fn get_row_as_string(&self, index: usize) -> Option<String> {
        let row = self.document().row(index)?;
        Some(row.content().iter().map(|t| t.text()).collect())
    }

    /// Number of rows.
    pub fn get_row_count(&self) -> usize {
        self.document().row_count()
    }

    /// Index of the selected row.
    pub fn get_selected_row_index(&self) -> usize {
        self.rows.selected_row_index()
    }

    /// Install the click listener.
    pub fn set_click_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&ClickTarget) + Send + 'static,
    {
        self.events.set_click_listener(listener);
    }

    /// Subscribe to state changes.
    pub fn subscribe<F>(&mut self, callback: F)
    where
        F: FnMut(&EditorChange) + Send + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    /// See [`RowEditor::select_row`].
    pub fn select_row(&mut self, index: usize) -> bool {
        let previous = self.get_selected_row_index();
        let applied = self.rows.select_row(index);
        if applied && index != previous {
            self.notify(
                EditorChangeKind::SelectionChanged,
                Some(previous.min(index)..previous.max(index) + 1),
            );
        }
        applied
    }

    /// See [`RowEditor::select_and_highlight_row`].
    pub fn select_and_highlight_row(&mut self, index: usize) -> bool {
        let previous = self.get_selected_row_index();
        let already_emphasized = index == previous
            && self
                .document()
                .row(index)
                .is_some_and(|row| row.tokens().iter().all(|t| t.has_tag(&Tag::Selected)));
        let applied = self.rows.select_and_highlight_row(index);
        if applied && !already_emphasized {
            self.notify(
                EditorChangeKind::SelectionChanged,
                Some(previous.min(index)..previous.max(index) + 1),
            );
        }
        applied
    }

    /// See [`RowEditor::insert_row`].
    pub fn insert_row(&mut self, index: usize, specs: &[TokenSpec]) -> bool {
        let applied = self.rows.insert_row(index, specs);
        if applied {
            let end = self.get_row_count();
            self.notify(EditorChangeKind::RowsChanged, Some(index..end));
        }
        applied
    }

    /// Insert a row described by a JSON array of token specs.
    pub fn insert_row_json(&mut self, index: usize, json: &str) -> Result<bool, HostError> {
        let specs = TokenSpec::list_from_json(json)?;
        Ok(self.insert_row(index, &specs))
    }

    /// See [`RowEditor::delete_row`].
    pub fn delete_row(&mut self, index: usize) -> bool {
        let applied = self.rows.delete_row(index);
        if applied {
            let end = self.get_row_count();
            let start = index.saturating_sub(1).min(end);
            self.notify(EditorChangeKind::RowsChanged, Some(start..end));
        }
        applied
    }

    /// Dispatch a pointer signal.
    pub fn handle_event(&mut self, event: PointerEvent) -> Dispatch {
        let dispatch = self.events.dispatch(self.rows.document_mut(), event);
        if let Dispatch::Highlighted(set) | Dispatch::Cleared(set) = &dispatch {
            if let Some(range) = row_span(set) {
                self.notify(EditorChangeKind::HighlightChanged, Some(range));
            }
        }
        dispatch
    }

    /// Pointer entered `at`; returns the highlighted set.
    pub fn pointer_enter(&mut self, at: TokenRef) -> HighlightSet {
        match self.handle_event(PointerEvent::Enter(at)) {
            Dispatch::Highlighted(set) => set,
            _ => HighlightSet::new(),
        }
    }

    /// Pointer left `at`; returns the cleared set.
    pub fn pointer_leave(&mut self, at: TokenRef) -> HighlightSet {
        match self.handle_event(PointerEvent::Leave(at)) {
            Dispatch::Cleared(set) => set,
            _ => HighlightSet::new(),
        }
    }

    /// Primary click on `at`; returns what was forwarded to the listener.
    pub fn click(&mut self, at: TokenRef) -> Option<ClickTarget> {
        match self.handle_event(PointerEvent::Click(at)) {
            Dispatch::Clicked(target) => Some(target),
            _ => None,
        }
    }

    /// Render snapshot of all rows.
    pub fn snapshot(&self) -> RowsSnapshot {
        snapshot::snapshot(self.document(), self.config())
    }

    fn notify(&mut self, kind: EditorChangeKind, affected_rows: Option<Range<usize>>) {
        let old_version = self.version;
        self.version += 1;
        let change = EditorChange {
            kind,
            old_version,
            new_version: self.version,
            affected_rows,
        };
        for callback in &mut self.callbacks {
            callback(&change);
        }
    }
}

fn row_span(set: &HighlightSet) -> Option<Range<usize>> {
    let rows = set.rows();
    let first = *rows.first()?;
    let last = *rows.last()?;
    Some(first..last + 1)
}
