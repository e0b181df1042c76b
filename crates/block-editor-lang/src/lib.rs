#![warn(missing_docs)]
//! `block-editor-lang` - the token tag vocabulary shared by `block-editor-core` and its hosts.
//!
//! This crate intentionally stays dependency-free. It names the semantic tags a token can carry
//! (bracket/paren roles, comments, gutter slots, highlight markings) and converts between them and
//! the class-name strings a host page uses for styling.

use std::collections::BTreeSet;
use std::fmt;

/// A semantic tag attached to a token.
///
/// Tags double as presentation classes: a host renders a token by applying
/// [`Tag::class_name`] for every tag it carries.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tag {
    /// Base tag carried by every displayed cell (content and gutter).
    Code,
    /// Gutter slot (line number or selection indicator).
    LineNumber,
    /// Comment content; hovering highlights the whole row.
    Comment,
    /// Opens a brace-delimited block spanning rows.
    OpenBracket,
    /// Closes a brace-delimited block spanning rows.
    CloseBracket,
    /// Opens a parenthesised group within a row.
    OpenParen,
    /// Closes a parenthesised group within a row.
    CloseParen,
    /// Suppresses color/class styling when syntax highlighting is disabled.
    NoHighlighting,
    /// Strong row emphasis applied by `select_and_highlight_row`.
    Selected,
    /// Transient hover marking for tokens related to the hovered one.
    Related,
    /// Any other host-defined class (e.g. `keyword`, `string`).
    Custom(String),
}

impl Tag {
    /// The canonical class name for this tag.
    pub fn class_name(&self) -> &str {
        match self {
            Tag::Code => "code",
            Tag::LineNumber => "lineNumber",
            Tag::Comment => "comment",
            Tag::OpenBracket => "openBracket",
            Tag::CloseBracket => "closeBracket",
            Tag::OpenParen => "openParen",
            Tag::CloseParen => "closeParen",
            Tag::NoHighlighting => "noHighlighting",
            Tag::Selected => "selected",
            Tag::Related => "related",
            Tag::Custom(name) => name.as_str(),
        }
    }

    /// Map a single class name to a tag.
    ///
    /// The legacy spellings `lineNum`, `openBrack` and `closeBrack` are accepted as aliases.
    /// Unknown names become [`Tag::Custom`].
    pub fn from_class_name(name: &str) -> Self {
        match name {
            "code" => Tag::Code,
            "lineNumber" | "lineNum" => Tag::LineNumber,
            "comment" => Tag::Comment,
            "openBracket" | "openBrack" => Tag::OpenBracket,
            "closeBracket" | "closeBrack" => Tag::CloseBracket,
            "openParen" => Tag::OpenParen,
            "closeParen" => Tag::CloseParen,
            "noHighlighting" => Tag::NoHighlighting,
            "selected" => Tag::Selected,
            "related" => Tag::Related,
            other => Tag::Custom(other.to_string()),
        }
    }

    /// Returns `true` for tags whose hover highlights the entire row.
    pub fn is_whole_line(&self) -> bool {
        matches!(self, Tag::Comment | Tag::LineNumber)
    }

    /// Returns `true` for the markings the editor applies itself (never supplied by a host).
    pub fn is_marking(&self) -> bool {
        matches!(self, Tag::Selected | Tag::Related)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Tag::from_class_name(name)
    }
}

/// An ordered, duplicate-free set of tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: BTreeSet<Tag>,
}

impl TagSet {
    /// Create an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whitespace-separated class list (e.g. `"keyword openParen"`).
    pub fn parse(classes: &str) -> Self {
        classes.split_whitespace().map(Tag::from_class_name).collect()
    }

    /// Add a tag. Returns `true` if it was not already present.
    pub fn insert(&mut self, tag: Tag) -> bool {
        self.tags.insert(tag)
    }

    /// Remove a tag. Returns `true` if it was present.
    pub fn remove(&mut self, tag: &Tag) -> bool {
        self.tags.remove(tag)
    }

    /// Tag membership test.
    pub fn contains(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }

    /// Returns `true` if any tag in the set highlights the whole row on hover.
    pub fn has_whole_line(&self) -> bool {
        self.tags.iter().any(Tag::is_whole_line)
    }

    /// Number of tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Iterate tags in their canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    /// Class names of every tag, in canonical order.
    pub fn class_names(&self) -> Vec<&str> {
        self.tags.iter().map(Tag::class_name).collect()
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self {
            tags: iter.into_iter().collect(),
        }
    }
}

impl Extend<Tag> for TagSet {
    fn extend<I: IntoIterator<Item = Tag>>(&mut self, iter: I) {
        self.tags.extend(iter);
    }
}
