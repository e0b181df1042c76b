//! Document model: rows of tagged tokens.
//!
//! Each row's token sequence mirrors the rendered row. Column [`LINE_NUMBER_COLUMN`] holds the
//! line-number slot, column [`INDICATOR_COLUMN`] holds the selection indicator, and content tokens
//! start at [`FIRST_CONTENT_COLUMN`]. Both gutter slots carry the `code` and `lineNumber` tags.
//!
//! Token identity is positional ([`TokenRef`]) and only valid for the current snapshot: inserting
//! or deleting rows shifts every reference below the change.
//!
//! The document is read-only outside the crate. Row structure and selection change through
//! [`RowEditor`](crate::RowEditor); hover markings change through the
//! [`resolver`](crate::resolver) functions.

use crate::error::HostError;
use block_editor_lang::{Tag, TagSet};
use serde::{Deserialize, Serialize};

/// Column of the line-number gutter slot.
pub const LINE_NUMBER_COLUMN: usize = 0;
/// Column of the selection-indicator gutter slot.
pub const INDICATOR_COLUMN: usize = 1;
/// Column of the first content token.
pub const FIRST_CONTENT_COLUMN: usize = 2;

/// Indicator glyph shown on the selected row.
pub const INDICATOR_ARROW: &str = "\u{2192}";
/// Indicator glyph shown on every other row.
pub const INDICATOR_BLANK: &str = "";

/// Position of a token within the current document snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenRef {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index (gutter slots included).
    pub column: usize,
}

impl TokenRef {
    /// Create a new token reference.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Reference to the `n`-th content token of `row`.
    pub fn content(row: usize, n: usize) -> Self {
        Self::new(row, FIRST_CONTENT_COLUMN + n)
    }
}

/// Host description of one content token: display text plus optional class names.
///
/// `kind` may hold several whitespace-separated class names. The JSON field `type` is accepted
/// as an alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSpec {
    /// Display text.
    pub text: String,
    /// Class names (e.g. `"openParen"`, `"keyword comment"`).
    #[serde(default, alias = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl TokenSpec {
    /// A plain `code` token.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: None,
        }
    }

    /// A token with explicit class names.
    pub fn with_kind(text: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: Some(kind.into()),
        }
    }

    /// Decode a JSON array of `{ "text": ..., "type": ... }` objects.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>, HostError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Tags this spec contributes, always including `code`.
    ///
    /// Editor-owned markings (`selected`, `related`) are never taken from the host.
    pub fn tags(&self) -> TagSet {
        let mut tags: TagSet = self
            .kind
            .as_deref()
            .map(TagSet::parse)
            .unwrap_or_default()
            .iter()
            .filter(|tag| !tag.is_marking())
            .cloned()
            .collect();
        tags.insert(Tag::Code);
        tags
    }
}

/// Smallest tagged unit of displayed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    text: String,
    tags: TagSet,
}

impl Token {
    /// Create a token from text and tags.
    pub fn new(text: impl Into<String>, tags: TagSet) -> Self {
        Self {
            text: text.into(),
            tags,
        }
    }

    fn gutter(text: &str) -> Self {
        Self::new(text, [Tag::Code, Tag::LineNumber].into_iter().collect())
    }

    /// Display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All tags carried by the token.
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Tag membership test.
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    pub(crate) fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub(crate) fn tags_mut(&mut self) -> &mut TagSet {
        &mut self.tags
    }
}

/// One line of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    line_number: Option<i64>,
    tokens: Vec<Token>,
    is_selected: bool,
}

impl Row {
    /// A row with only its two gutter slots.
    pub fn blank() -> Self {
        Self {
            line_number: None,
            tokens: vec![Token::gutter(""), Token::gutter(INDICATOR_BLANK)],
            is_selected: false,
        }
    }

    /// Build a row from host token specs.
    ///
    /// With `syntax_highlighting` off, content tokens also receive `noHighlighting`.
    pub fn from_specs(specs: &[TokenSpec], syntax_highlighting: bool) -> Self {
        let mut row = Self::blank();
        row.tokens.extend(specs.iter().map(|spec| {
            let mut tags = spec.tags();
            if !syntax_highlighting {
                tags.insert(Tag::NoHighlighting);
            }
            Token::new(spec.text.clone(), tags)
        }));
        row
    }

    /// Displayed line number, if line numbers are enabled.
    pub fn line_number(&self) -> Option<i64> {
        self.line_number
    }

    /// Whether this row carries the selection indicator.
    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    /// Every token, gutter slots included.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Content tokens only.
    pub fn content(&self) -> &[Token] {
        self.tokens.get(FIRST_CONTENT_COLUMN..).unwrap_or(&[])
    }

    /// The token inspected for bracket open/close during scope scanning: the row's last token.
    pub fn marker(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// Token at `column`.
    pub fn token(&self, column: usize) -> Option<&Token> {
        self.tokens.get(column)
    }

    pub(crate) fn token_mut(&mut self, column: usize) -> Option<&mut Token> {
        self.tokens.get_mut(column)
    }

    pub(crate) fn tokens_mut(&mut self) -> &mut [Token] {
        &mut self.tokens
    }

    pub(crate) fn set_line_number(&mut self, number: Option<i64>) {
        self.line_number = number;
        let text = number.map(|n| n.to_string()).unwrap_or_default();
        if let Some(slot) = self.token_mut(LINE_NUMBER_COLUMN) {
            slot.set_text(text);
        }
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.is_selected = selected;
        let glyph = if selected {
            INDICATOR_ARROW
        } else {
            INDICATOR_BLANK
        };
        if let Some(slot) = self.token_mut(INDICATOR_COLUMN) {
            slot.set_text(glyph);
        }
    }
}

/// Ordered rows plus the index of the selected row.
///
/// Invariant: the document holds at least one row, `selected_row_index() < row_count()`, and
/// exactly that row reports [`Row::is_selected`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    rows: Vec<Row>,
    selected: usize,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// A document holding the blank program-start row, selected.
    pub fn new() -> Self {
        let mut start = Row::blank();
        start.set_selected(true);
        Self {
            rows: vec![start],
            selected: 0,
        }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of the last row.
    pub fn last_row_index(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// Index of the selected row.
    pub fn selected_row_index(&self) -> usize {
        self.selected
    }

    /// All rows in order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row at `index`.
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Token at `at`.
    pub fn token(&self, at: TokenRef) -> Option<&Token> {
        self.rows.get(at.row).and_then(|row| row.token(at.column))
    }

    /// Returns `true` if the token at `at` exists and carries `tag`.
    pub fn has_tag(&self, at: TokenRef, tag: &Tag) -> bool {
        self.token(at).is_some_and(|token| token.has_tag(tag))
    }

    /// Reference to the marker token of `row`.
    pub fn marker(&self, row: usize) -> Option<TokenRef> {
        let len = self.rows.get(row)?.tokens.len();
        len.checked_sub(1).map(|column| TokenRef::new(row, column))
    }

    /// References to every token of `row` carrying `tag`.
    pub fn tokens_tagged<'a>(
        &'a self,
        row: usize,
        tag: &'a Tag,
    ) -> impl Iterator<Item = TokenRef> + 'a {
        self.rows
            .get(row)
            .map(|r| r.tokens.as_slice())
            .unwrap_or(&[])
            .iter()
            .enumerate()
            .filter(move |(_, token)| token.has_tag(tag))
            .map(move |(column, _)| TokenRef::new(row, column))
    }

    /// References to every token currently carrying `tag`, in document order.
    pub fn find_tagged(&self, tag: &Tag) -> Vec<TokenRef> {
        (0..self.rows.len())
            .flat_map(|row| self.tokens_tagged(row, tag))
            .collect()
    }

    pub(crate) fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Row> {
        &mut self.rows
    }

    pub(crate) fn token_mut(&mut self, at: TokenRef) -> Option<&mut Token> {
        self.rows
            .get_mut(at.row)
            .and_then(|row| row.token_mut(at.column))
    }

    pub(crate) fn set_selected_index(&mut self, index: usize) {
        self.selected = index;
    }
}
