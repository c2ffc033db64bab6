//! The public emitter facade.
//!
//! [`Emitly`] wires the event-type model, the handler registry, and the
//! dispatch engine behind the registration and emission operations. It is
//! a cheaply clonable handle: clones share one registry, which is how a
//! handler captures the emitter to register, remove, or emit reentrantly
//! from inside a dispatch pass.
//!
//! One instance is single-threaded by design. All dispatch work happens
//! inline on the calling stack, no operation suspends or blocks, and no
//! locking is provided; sharing an instance across threads is not a
//! supported contract.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use emitly_core::{Arg, BoxError, Category, EventType, Handler, Pattern};

use crate::dispatcher;
use crate::registry::Registry;

struct Inner {
    case_sensitive: bool,
    /// The per-instance "match everything" pattern behind `on_all` and
    /// `emit_all`. Held once so repeated `on_all` calls share a single
    /// registration key.
    match_all: Pattern,
    registry: RefCell<Registry>,
}

/// A synchronous in-process publish/subscribe dispatcher.
///
/// Handlers register against an exact name, a unique [`Token`], or a
/// [`Pattern`]; emitting a type invokes every matching handler in
/// registration order before `emit` returns.
///
/// # Example
///
/// ```
/// use emitly::{Emitly, Handler, arg};
///
/// let emitter = Emitly::new();
/// emitter.on(
///     "user.created",
///     Handler::new(|args| {
///         let name = args[0].downcast_ref::<String>().unwrap();
///         println!("welcome, {name}");
///     }),
/// );
/// emitter.emit("user.created", &[arg("ada".to_string())]).unwrap();
/// ```
///
/// [`Token`]: emitly_core::Token
#[derive(Clone)]
pub struct Emitly {
    inner: Rc<Inner>,
}

impl Emitly {
    /// Create an emitter with the default policy (case-sensitive names).
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start building an emitter with a non-default configuration.
    pub fn builder() -> EmitlyBuilder {
        EmitlyBuilder::new()
    }

    /// Whether literal names are compared as given.
    ///
    /// When `false`, names are lower-cased before storage and lookup.
    /// Tokens and patterns are never recased.
    pub fn case_sensitive(&self) -> bool {
        self.inner.case_sensitive
    }

    /// Register handlers for an event type.
    ///
    /// Accepts one [`Handler`] or any collection of them. Registration has
    /// set semantics: re-registering a handler (or a clone of it) under
    /// the same type collapses to the existing entry.
    pub fn on(&self, ty: impl Into<EventType>, handlers: impl IntoIterator<Item = Handler>) {
        let ty = self.normalize(ty);
        self.inner.registry.borrow_mut().add(ty, handlers);
    }

    /// Register handlers for every textual event type, present and future.
    pub fn on_all(&self, handlers: impl IntoIterator<Item = Handler>) {
        self.on(self.inner.match_all.clone(), handlers);
    }

    /// Remove handlers from an event type.
    ///
    /// Best-effort and idempotent: an unknown type or handler is a no-op.
    /// Once a type's last handler is removed its entry is gone entirely.
    pub fn off(&self, ty: impl Into<EventType>, handlers: impl IntoIterator<Item = Handler>) {
        let ty = self.normalize(ty);
        self.inner.registry.borrow_mut().remove(ty, handlers);
    }

    /// Drop one event type and all its handlers, if registered.
    pub fn clear(&self, ty: impl Into<EventType>) {
        let ty = self.normalize(ty);
        self.inner.registry.borrow_mut().clear_type(ty);
    }

    /// Drop every registration in one category.
    pub fn clear_category(&self, category: Category) {
        self.inner.registry.borrow_mut().clear_category(category);
    }

    /// Drop every registration in both categories.
    pub fn clear_all(&self) {
        self.inner.registry.borrow_mut().clear_all();
    }

    /// Emit an event, delivering `args` to every matching handler inline.
    ///
    /// A literal emission fires its exact entry, then every matching
    /// pattern entry with the emitted name prepended as `args[0]`. A
    /// pattern emission fires the entries of every literal name it
    /// matches, with `args` unchanged. Emitting a type nobody listens to
    /// is a silent no-op.
    ///
    /// # Errors
    ///
    /// The first error a handler raises is returned unwrapped; handlers
    /// scheduled after it in the same pass are skipped.
    pub fn emit(&self, ty: impl Into<EventType>, args: &[Arg]) -> Result<(), BoxError> {
        dispatcher::dispatch(
            &self.inner.registry,
            self.inner.case_sensitive,
            ty.into(),
            args,
        )
    }

    /// Emit to every handler registered under a textual name.
    pub fn emit_all(&self, args: &[Arg]) -> Result<(), BoxError> {
        self.emit(self.inner.match_all.clone(), args)
    }

    /// Total number of registered handlers across both categories.
    pub fn handler_count(&self) -> usize {
        self.inner.registry.borrow().handler_count()
    }

    /// Whether no handler is currently registered.
    pub fn is_empty(&self) -> bool {
        self.inner.registry.borrow().is_empty()
    }

    fn normalize(&self, ty: impl Into<EventType>) -> EventType {
        ty.into().normalize(self.inner.case_sensitive)
    }
}

impl Default for Emitly {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Emitly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitly")
            .field("case_sensitive", &self.inner.case_sensitive)
            .field("handlers", &self.handler_count())
            .finish()
    }
}

/// Builder for [`Emitly`].
///
/// # Example
///
/// ```
/// use emitly::Emitly;
///
/// let emitter = Emitly::builder().case_sensitive(false).build();
/// assert!(!emitter.case_sensitive());
/// ```
#[derive(Debug, Clone)]
pub struct EmitlyBuilder {
    case_sensitive: bool,
}

impl EmitlyBuilder {
    /// Create a builder with the default policy (case-sensitive names).
    pub fn new() -> Self {
        Self {
            case_sensitive: true,
        }
    }

    /// Set whether literal names are compared as given.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Build the emitter with an empty registry.
    pub fn build(self) -> Emitly {
        Emitly {
            inner: Rc::new(Inner {
                case_sensitive: self.case_sensitive,
                match_all: Pattern::match_all(),
                registry: RefCell::new(Registry::new()),
            }),
        }
    }
}

impl Default for EmitlyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
