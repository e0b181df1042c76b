//! Token Relation Resolver: from one hovered token, find every token to highlight with it.
//!
//! Rules are tried in order and the first one that applies decides the result:
//!
//! 1. A `comment` or `lineNumber` token highlights every `code` token of its row.
//! 2. A token in the first content column is redirected to the next row's marker token when that
//!    marker is an `openBracket` (a block header such as `if x` followed by a `{` row).
//! 3. An `openBracket` highlights its row, the previous row, and every following row up to the
//!    row whose marker closes the block.
//! 4. A `closeBracket` highlights its row and every preceding row back to the row whose marker
//!    opens the block, plus one more row before that (the block header).
//! 5. A token directly followed by a `(` token is redirected to the `(`.
//! 6. An `openParen` highlights itself, the token before it (the callee), and every following token
//!    of the row up to its matching `closeParen`.
//! 7. A `closeParen` highlights itself and every preceding token of the row back to its matching
//!    `openParen`, plus the token before that.
//! 8. Anything else highlights only itself.
//!
//! Scans stop when the rows (or the row's tokens) run out, so unbalanced input highlights
//! everything visited instead of failing.
//!
//! [`resolve`] is a pure function of the document. [`mark`] and [`unresolve`] apply and remove the
//! `related` marking for a computed set; resolution never looks at that marking, so recomputing
//! the set between the two is stable.

use crate::document::{Document, FIRST_CONTENT_COLUMN, TokenRef};
use block_editor_lang::Tag;
use std::collections::BTreeSet;
use tracing::trace;

/// Tokens highlighted together for one hover gesture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSet {
    tokens: BTreeSet<TokenRef>,
}

impl HighlightSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Membership test.
    pub fn contains(&self, at: TokenRef) -> bool {
        self.tokens.contains(&at)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens in document order.
    pub fn iter(&self) -> impl Iterator<Item = TokenRef> + '_ {
        self.tokens.iter().copied()
    }

    /// Distinct rows touched by the set, ascending.
    pub fn rows(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self.tokens.iter().map(|at| at.row).collect();
        rows.dedup();
        rows
    }

    fn insert(&mut self, at: TokenRef) {
        self.tokens.insert(at);
    }

    fn insert_code_row(&mut self, document: &Document, row: usize) {
        self.tokens.extend(document.tokens_tagged(row, &Tag::Code));
    }
}

/// Compute the highlight set for a hover over `hovered`.
///
/// Returns an empty set if `hovered` does not name a token of `document`.
pub fn resolve(document: &Document, hovered: TokenRef) -> HighlightSet {
    let Some(token) = document.token(hovered) else {
        trace!(?hovered, "resolve: no such token");
        return HighlightSet::new();
    };

    if token.tags().has_whole_line() {
        trace!(?hovered, "resolve: whole-line highlight");
        let mut set = HighlightSet::new();
        set.insert_code_row(document, hovered.row);
        return set;
    }

    let target = redirect_to_block_header(document, hovered);
    if document.has_tag(target, &Tag::OpenBracket) {
        return scope_forward(document, target.row);
    }
    if document.has_tag(target, &Tag::CloseBracket) {
        return scope_backward(document, target.row);
    }

    let target = redirect_to_call(document, target);
    if document.has_tag(target, &Tag::OpenParen) {
        return parens_forward(document, target);
    }
    if document.has_tag(target, &Tag::CloseParen) {
        return parens_backward(document, target);
    }

    let mut set = HighlightSet::new();
    set.insert(target);
    set
}

/// Apply the `related` marking to every token in `set`.
pub fn mark(document: &mut Document, set: &HighlightSet) {
    for at in set.iter() {
        if let Some(token) = document.token_mut(at) {
            token.tags_mut().insert(Tag::Related);
        }
    }
}

/// Remove the `related` marking from every token in `set`. Nothing is recomputed.
pub fn unresolve(document: &mut Document, set: &HighlightSet) {
    for at in set.iter() {
        if let Some(token) = document.token_mut(at) {
            token.tags_mut().remove(&Tag::Related);
        }
    }
}

fn redirect_to_block_header(document: &Document, hovered: TokenRef) -> TokenRef {
    if hovered.column != FIRST_CONTENT_COLUMN {
        return hovered;
    }
    match document.marker(hovered.row + 1) {
        Some(marker) if document.has_tag(marker, &Tag::OpenBracket) => {
            trace!(?hovered, ?marker, "resolve: redirected to next row's open bracket");
            marker
        }
        _ => hovered,
    }
}

fn redirect_to_call(document: &Document, at: TokenRef) -> TokenRef {
    let next = TokenRef::new(at.row, at.column + 1);
    match document.token(next) {
        Some(token) if token.text() == "(" => {
            trace!(?at, "resolve: redirected to following '('");
            next
        }
        _ => at,
    }
}

fn scope_forward(document: &Document, row: usize) -> HighlightSet {
    let mut set = HighlightSet::new();
    set.insert_code_row(document, row);
    if let Some(previous) = row.checked_sub(1) {
        set.insert_code_row(document, previous);
    }

    let mut depth = 1usize;
    let mut current = row + 1;
    while depth > 0 && current < document.row_count() {
        if let Some(marker) = document.marker(current) {
            if document.has_tag(marker, &Tag::OpenBracket) {
                depth += 1;
            } else if document.has_tag(marker, &Tag::CloseBracket) {
                depth -= 1;
            }
        }
        set.insert_code_row(document, current);
        current += 1;
    }

    trace!(row, depth, last_row = current - 1, "resolve: open-bracket scope");
    set
}

fn scope_backward(document: &Document, row: usize) -> HighlightSet {
    let mut set = HighlightSet::new();
    set.insert_code_row(document, row);

    let mut depth = 1usize;
    let mut current = row.checked_sub(1);
    while depth > 0 {
        let Some(index) = current else { break };
        if let Some(marker) = document.marker(index) {
            if document.has_tag(marker, &Tag::CloseBracket) {
                depth += 1;
            } else if document.has_tag(marker, &Tag::OpenBracket) {
                depth -= 1;
            }
        }
        set.insert_code_row(document, index);
        current = index.checked_sub(1);
    }

    // The row above the opening bracket is the block header.
    if let Some(header) = current {
        set.insert_code_row(document, header);
    }

    trace!(row, depth, "resolve: close-bracket scope");
    set
}

fn parens_forward(document: &Document, open: TokenRef) -> HighlightSet {
    let mut set = HighlightSet::new();
    set.insert(open);
    if let Some(column) = open.column.checked_sub(1) {
        set.insert(TokenRef::new(open.row, column));
    }

    let mut depth = 1usize;
    let mut current = TokenRef::new(open.row, open.column + 1);
    while depth > 0 && document.token(current).is_some() {
        if document.has_tag(current, &Tag::OpenParen) {
            depth += 1;
        } else if document.has_tag(current, &Tag::CloseParen) {
            depth -= 1;
        }
        set.insert(current);
        current.column += 1;
    }

    trace!(?open, depth, "resolve: open-paren group");
    set
}

fn parens_backward(document: &Document, close: TokenRef) -> HighlightSet {
    let mut set = HighlightSet::new();
    set.insert(close);

    let mut depth = 1usize;
    let mut current = close.column.checked_sub(1);
    while depth > 0 {
        let Some(column) = current else { break };
        let at = TokenRef::new(close.row, column);
        if document.has_tag(at, &Tag::CloseParen) {
            depth += 1;
        } else if document.has_tag(at, &Tag::OpenParen) {
            depth -= 1;
        }
        set.insert(at);
        current = column.checked_sub(1);
    }

    // The token before the opening paren is the callee.
    if let Some(column) = current {
        set.insert(TokenRef::new(close.row, column));
    }

    trace!(?close, depth, "resolve: close-paren group");
    set
}
