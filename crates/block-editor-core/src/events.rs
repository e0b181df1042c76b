//! Event Façade: pointer signals on tokens in, highlight changes and click notifications out.
//!
//! The façade holds no document state. Each [`EventFacade::dispatch`] call receives the document
//! explicitly, so handlers share nothing but what is passed to them. A leave signal recomputes
//! the highlight set instead of remembering the one computed on enter; rows may have changed in
//! between.

use crate::document::{Document, TokenRef};
use crate::resolver::{self, HighlightSet};
use block_editor_lang::TagSet;
use tracing::{debug, trace};

/// A pointer signal targeting one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// The pointer entered the token.
    Enter(TokenRef),
    /// The pointer left the token.
    Leave(TokenRef),
    /// Primary click on the token.
    Click(TokenRef),
}

/// What a click listener receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickTarget {
    /// Position of the clicked token.
    pub token: TokenRef,
    /// Its display text.
    pub text: String,
    /// Its tags at the time of the click.
    pub tags: TagSet,
}

/// Click callback type.
pub type ClickListener = Box<dyn FnMut(&ClickTarget) + Send>;

/// Outcome of dispatching one [`PointerEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The set was resolved and marked `related`.
    Highlighted(HighlightSet),
    /// The set was resolved and its `related` marking removed.
    Cleared(HighlightSet),
    /// The click was forwarded (to the listener, if one is set).
    Clicked(ClickTarget),
    /// The event named a token that does not exist.
    Ignored,
}

/// Translates pointer signals into resolver calls and click notifications.
#[derive(Default)]
pub struct EventFacade {
    click_listener: Option<ClickListener>,
}

impl std::fmt::Debug for EventFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventFacade")
            .field("has_click_listener", &self.click_listener.is_some())
            .finish()
    }
}

impl EventFacade {
    /// Create a façade without a click listener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the click listener, replacing any previous one.
    pub fn set_click_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&ClickTarget) + Send + 'static,
    {
        self.click_listener = Some(Box::new(listener));
    }

    /// Remove the click listener; clicks are then dropped.
    pub fn clear_click_listener(&mut self) {
        self.click_listener = None;
    }

    /// Handle one pointer signal against `document`.
    ///
    /// Clicks never change the document.
    pub fn dispatch(&mut self, document: &mut Document, event: PointerEvent) -> Dispatch {
        match event {
            PointerEvent::Enter(at) => {
                if document.token(at).is_none() {
                    debug!(?at, "pointer enter ignored: no such token");
                    return Dispatch::Ignored;
                }
                let set = resolver::resolve(document, at);
                resolver::mark(document, &set);
                trace!(?at, count = set.len(), "highlighted related tokens");
                Dispatch::Highlighted(set)
            }
            PointerEvent::Leave(at) => {
                if document.token(at).is_none() {
                    debug!(?at, "pointer leave ignored: no such token");
                    return Dispatch::Ignored;
                }
                let set = resolver::resolve(document, at);
                resolver::unresolve(document, &set);
                trace!(?at, count = set.len(), "cleared related tokens");
                Dispatch::Cleared(set)
            }
            PointerEvent::Click(at) => {
                let Some(token) = document.token(at) else {
                    debug!(?at, "click ignored: no such token");
                    return Dispatch::Ignored;
                };
                let target = ClickTarget {
                    token: at,
                    text: token.text().to_string(),
                    tags: token.tags().clone(),
                };
                if let Some(listener) = self.click_listener.as_mut() {
                    listener(&target);
                }
                Dispatch::Clicked(target)
            }
        }
    }
}
