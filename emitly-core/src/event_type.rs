//! The event-type model.
//!
//! An event type is a closed sum: an exact textual [`Name`], a unique opaque
//! [`Token`], or a [`Pattern`] that matches arbitrary names. Classification
//! into the [`Category`] partition is a match on the variant tag, so a name
//! that merely *looks* like pattern syntax (`"price.*"` as a plain string)
//! is still a literal key — kind decides, never content.
//!
//! [`Name`]: EventType::Name
//! [`Token`]: crate::Token
//! [`Pattern`]: crate::Pattern

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::str::FromStr;

use regex::Regex;

use crate::error::EmitlyError;

/// The partition an event type belongs to.
///
/// Literal keys (names and tokens) are matched exactly; pattern keys are
/// matched by testing emitted names against them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Exact keys: textual names and tokens.
    Literal,
    /// Matcher keys: patterns tested against emitted names.
    Pattern,
}

impl FromStr for Category {
    type Err = EmitlyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "literal" => Ok(Category::Literal),
            "pattern" => Ok(Category::Pattern),
            other => Err(EmitlyError::UnknownCategory(other.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Literal => f.write_str("literal"),
            Category::Pattern => f.write_str("pattern"),
        }
    }
}

/// A wildcard-style event matcher backed by a compiled regular expression.
///
/// Patterns are compared by allocation identity, never by pattern text:
/// two structurally identical patterns compiled separately are distinct
/// registry keys. Cloning a `Pattern` preserves its identity, so a clone
/// addresses the same registration.
#[derive(Clone)]
pub struct Pattern {
    regex: Rc<Regex>,
}

impl Pattern {
    /// Wrap an already-compiled regex as a pattern key.
    pub fn new(regex: Regex) -> Self {
        Self {
            regex: Rc::new(regex),
        }
    }

    /// Compile a pattern from its textual source.
    pub fn compile(source: &str) -> Result<Self, EmitlyError> {
        Ok(Self::new(Regex::new(source)?))
    }

    /// A pattern that matches every possible literal name.
    pub fn match_all() -> Self {
        Self::new(Regex::new("(?s).*").expect("match-all pattern is valid"))
    }

    /// Test whether this pattern matches a literal name.
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// The textual source this pattern was compiled from.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    fn addr(&self) -> usize {
        Rc::as_ptr(&self.regex) as usize
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for Pattern {}

impl Hash for Pattern {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.as_str()).finish()
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self::new(regex)
    }
}

struct TokenInner {
    label: Option<String>,
}

/// A unique opaque event key.
///
/// Every `Token::new`/`Token::named` call produces a key equal only to
/// itself and its clones; the optional label is purely descriptive and
/// plays no part in equality. Tokens live in the literal category but are
/// never tested against patterns.
#[derive(Clone)]
pub struct Token {
    inner: Rc<TokenInner>,
}

impl Token {
    /// Create a fresh anonymous token.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(TokenInner { label: None }),
        }
    }

    /// Create a fresh token carrying a descriptive label.
    pub fn named(label: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(TokenInner {
                label: Some(label.into()),
            }),
        }
    }

    /// The descriptive label, if one was given.
    pub fn label(&self) -> Option<&str> {
        self.inner.label.as_deref()
    }

    fn addr(&self) -> usize {
        Rc::as_ptr(&self.inner) as usize
    }
}

impl Default for Token {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => f.debug_tuple("Token").field(&label).finish(),
            None => f.write_str("Token(..)"),
        }
    }
}

/// An event type: the key a handler is registered under or an emission
/// is resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventType {
    /// An exact textual name.
    Name(String),
    /// A unique opaque token.
    Token(Token),
    /// A matcher tested against registered or emitted names.
    Pattern(Pattern),
}

impl EventType {
    /// The category this type routes to.
    pub fn category(&self) -> Category {
        match self {
            EventType::Name(_) | EventType::Token(_) => Category::Literal,
            EventType::Pattern(_) => Category::Pattern,
        }
    }

    /// Whether this type is a pattern rather than an exact key.
    pub fn is_pattern(&self) -> bool {
        self.category() == Category::Pattern
    }

    /// Canonicalize this type under the given case policy.
    ///
    /// Only textual names are affected, and only when the policy is
    /// case-insensitive; tokens and patterns pass through untouched.
    /// Pure: depends on nothing but its inputs.
    pub fn normalize(self, case_sensitive: bool) -> Self {
        match self {
            EventType::Name(name) if !case_sensitive => EventType::Name(name.to_lowercase()),
            other => other,
        }
    }
}

impl From<&str> for EventType {
    fn from(name: &str) -> Self {
        EventType::Name(name.to_string())
    }
}

impl From<String> for EventType {
    fn from(name: String) -> Self {
        EventType::Name(name)
    }
}

impl From<Token> for EventType {
    fn from(token: Token) -> Self {
        EventType::Token(token)
    }
}

impl From<Pattern> for EventType {
    fn from(pattern: Pattern) -> Self {
        EventType::Pattern(pattern)
    }
}

impl From<Regex> for EventType {
    fn from(regex: Regex) -> Self {
        EventType::Pattern(Pattern::new(regex))
    }
}
