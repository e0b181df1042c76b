#![warn(missing_docs)]
//! Block Editor Core - Headless Kernel for Row-Based Program Construction Editors
//!
//! # Overview
//!
//! `block-editor-core` is the kernel behind a guided, block-based code editor: an external
//! controller supplies whole rows of tagged tokens and reacts to clicks, while the kernel keeps the
//! rows, the single insertion-point indicator and the line numbers consistent, and works out which
//! tokens belong together when the pointer hovers one of them (matching parentheses, brace
//! delimited blocks, whole-line comments).
//!
//! It does not paint anything. Hosts read a [`RowsSnapshot`] (or the [`Document`] directly),
//! apply the class names, and feed pointer signals back in.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Editor (host API + change notifications)   │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Event Façade (enter / leave / click)       │  ← Pointer signals
//! ├──────────────────────┬──────────────────────┤
//! │  Row Editor          │  Relation Resolver   │  ← Behaviour
//! ├──────────────────────┴──────────────────────┤
//! │  Document Model (rows of tagged tokens)     │  ← Data
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use block_editor_core::{Editor, EditorConfig, TokenRef, TokenSpec};
//!
//! let mut editor = Editor::new(EditorConfig::default());
//! editor.insert_row(0, &[TokenSpec::new("while"), TokenSpec::new("x")]);
//! editor.insert_row(1, &[TokenSpec::with_kind("{", "openBracket")]);
//! editor.insert_row(2, &[TokenSpec::new("x--")]);
//! editor.insert_row(3, &[TokenSpec::with_kind("}", "closeBracket")]);
//!
//! // Hovering `while` highlights the header and the whole block.
//! let set = editor.pointer_enter(TokenRef::content(0, 0));
//! assert_eq!(set.rows(), vec![0, 1, 2, 3]);
//! ```
//!
//! # Module Description
//!
//! - [`document`] - rows, tokens and positional token references
//! - [`row_editor`] - insertion, deletion, selection indicator, line numbers
//! - [`resolver`] - hover relation rules and the `related` marking
//! - [`events`] - pointer signal dispatch and click forwarding
//! - [`snapshot`] - headless render data
//! - [`config`] - construction options

pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod events;
pub mod resolver;
pub mod row_editor;
pub mod snapshot;

pub use block_editor_lang::{Tag, TagSet};
pub use config::EditorConfig;
pub use document::{
    Document, FIRST_CONTENT_COLUMN, INDICATOR_ARROW, INDICATOR_BLANK, INDICATOR_COLUMN,
    LINE_NUMBER_COLUMN, Row, Token, TokenRef, TokenSpec,
};
pub use editor::{Editor, EditorChange, EditorChangeCallback, EditorChangeKind};
pub use error::HostError;
pub use events::{ClickListener, ClickTarget, Dispatch, EventFacade, PointerEvent};
pub use resolver::{HighlightSet, mark, resolve, unresolve};
pub use row_editor::RowEditor;
pub use snapshot::{CellSnapshot, RowSnapshot, RowsSnapshot};
