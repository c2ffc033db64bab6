//! Handler storage: two insertion-ordered maps, one per category.
//!
//! Every map and handler set preserves registration order, and removal
//! uses `shift_remove` so surviving entries never change position. A type
//! key exists only while its handler set is non-empty; the set is pruned
//! the moment its last handler is removed.
//!
//! The registry hands out owned snapshots of its keys and handler sets.
//! Dispatch iterates those snapshots, never the live maps, which is what
//! makes reentrant registration and removal from inside a handler
//! well-defined.

use emitly_core::{Category, EventType, Handler, Pattern, Token};
use indexmap::{IndexMap, IndexSet};

/// A key in the literal category: an exact name or a unique token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum LiteralKey {
    Name(String),
    Token(Token),
}

/// An event type resolved to its category's key type.
pub(crate) enum TypeKey {
    Literal(LiteralKey),
    Pattern(Pattern),
}

impl From<EventType> for TypeKey {
    fn from(ty: EventType) -> Self {
        match ty {
            EventType::Name(name) => TypeKey::Literal(LiteralKey::Name(name)),
            EventType::Token(token) => TypeKey::Literal(LiteralKey::Token(token)),
            EventType::Pattern(pattern) => TypeKey::Pattern(pattern),
        }
    }
}

#[derive(Default)]
pub(crate) struct Registry {
    literal: IndexMap<LiteralKey, IndexSet<Handler>>,
    pattern: IndexMap<Pattern, IndexSet<Handler>>,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Create the entry for `ty` if absent and return its handler set.
    fn ensure(&mut self, ty: EventType) -> &mut IndexSet<Handler> {
        match TypeKey::from(ty) {
            TypeKey::Literal(key) => self.literal.entry(key).or_default(),
            TypeKey::Pattern(pattern) => self.pattern.entry(pattern).or_default(),
        }
    }

    /// Insert handlers under `ty`, creating the entry if needed.
    ///
    /// Duplicates (by handler identity) collapse and keep their original
    /// position.
    pub(crate) fn add(&mut self, ty: EventType, handlers: impl IntoIterator<Item = Handler>) {
        self.ensure(ty).extend(handlers);
    }

    /// Remove handlers from `ty`'s set, pruning the entry once empty.
    ///
    /// Best-effort and idempotent: an unknown type or handler is a no-op.
    pub(crate) fn remove(&mut self, ty: EventType, handlers: impl IntoIterator<Item = Handler>) {
        match TypeKey::from(ty) {
            TypeKey::Literal(key) => {
                if let Some(set) = self.literal.get_mut(&key) {
                    for handler in handlers {
                        set.shift_remove(&handler);
                    }
                    if set.is_empty() {
                        self.literal.shift_remove(&key);
                    }
                }
            }
            TypeKey::Pattern(pattern) => {
                if let Some(set) = self.pattern.get_mut(&pattern) {
                    for handler in handlers {
                        set.shift_remove(&handler);
                    }
                    if set.is_empty() {
                        self.pattern.shift_remove(&pattern);
                    }
                }
            }
        }
    }

    /// Drop `ty`'s entry and all its handlers, if present.
    pub(crate) fn clear_type(&mut self, ty: EventType) {
        match TypeKey::from(ty) {
            TypeKey::Literal(key) => {
                self.literal.shift_remove(&key);
            }
            TypeKey::Pattern(pattern) => {
                self.pattern.shift_remove(&pattern);
            }
        }
    }

    /// Reset one category's map to empty.
    pub(crate) fn clear_category(&mut self, category: Category) {
        match category {
            Category::Literal => self.literal.clear(),
            Category::Pattern => self.pattern.clear(),
        }
    }

    /// Reset both categories to empty.
    pub(crate) fn clear_all(&mut self) {
        self.literal.clear();
        self.pattern.clear();
    }

    /// Snapshot the handlers registered under an exact literal key.
    pub(crate) fn literal_handlers(&self, key: &LiteralKey) -> Vec<Handler> {
        self.literal
            .get(key)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Snapshot every literal entry in registration order.
    pub(crate) fn literal_entries(&self) -> Vec<(LiteralKey, Vec<Handler>)> {
        self.literal
            .iter()
            .map(|(key, set)| (key.clone(), set.iter().cloned().collect()))
            .collect()
    }

    /// Snapshot every pattern entry in registration order.
    pub(crate) fn pattern_entries(&self) -> Vec<(Pattern, Vec<Handler>)> {
        self.pattern
            .iter()
            .map(|(pattern, set)| (pattern.clone(), set.iter().cloned().collect()))
            .collect()
    }

    /// Total number of registered handlers across both categories.
    pub(crate) fn handler_count(&self) -> usize {
        self.literal
            .values()
            .chain(self.pattern.values())
            .map(IndexSet::len)
            .sum()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.literal.is_empty() && self.pattern.is_empty()
    }
}
