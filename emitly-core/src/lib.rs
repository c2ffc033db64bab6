//! # emitly-core
//!
//! Core types for the Emitly in-process publish/subscribe dispatcher.
//!
//! This crate has minimal dependencies and holds the vocabulary shared by
//! the `emitly` facade and anything that wants to construct handlers or
//! event-type keys without pulling in the dispatch engine:
//!
//! - [`EventType`] - the closed sum of key kinds: exact name, unique
//!   token, or pattern
//! - [`Category`] - the `{literal, pattern}` partition a key routes to
//! - [`Pattern`] / [`Token`] - identity-compared key types
//! - [`Handler`] - the invocable subscriber unit, with its opaque
//!   argument representation ([`Arg`], [`arg`])
//! - [`EmitlyError`] / [`BoxError`] - the error taxonomy
//!
//! Dispatch semantics (matching, ordering, snapshots) live in `emitly`.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod event_type;
mod handler;

pub use error::{BoxError, EmitlyError};
pub use event_type::{Category, EventType, Pattern, Token};
pub use handler::{Arg, Handler, arg};

pub use regex::Regex;
