//! The handler unit: an invocable subscriber bound to one type key.
//!
//! Handlers are compared by the identity of their closure allocation, not
//! by behavior: registering the same `Handler` (or a clone of it) twice
//! under one type collapses to a single entry, while two separately
//! constructed handlers with identical bodies are independent entries.
//!
//! Arguments flow through dispatch opaquely as [`Arg`] values; the
//! dispatcher never inspects them.

use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::error::BoxError;

/// One opaque dispatch argument.
pub type Arg = Rc<dyn Any>;

/// Box a value as a dispatch argument.
///
/// # Example
///
/// ```
/// use emitly_core::arg;
///
/// let a = arg("payload".to_string());
/// assert_eq!(a.downcast_ref::<String>().map(String::as_str), Some("payload"));
/// ```
pub fn arg<T: 'static>(value: T) -> Arg {
    Rc::new(value)
}

/// An invocable subscriber.
///
/// A handler receives the emission's argument list and either succeeds or
/// raises an error that aborts the remaining deliveries of that dispatch
/// pass. Cloning is cheap and preserves identity: a clone addresses the
/// same registration, which is how a handler can be removed later.
#[derive(Clone)]
pub struct Handler {
    f: Rc<dyn Fn(&[Arg]) -> Result<(), BoxError>>,
}

impl Handler {
    /// Wrap an infallible closure.
    pub fn new(f: impl Fn(&[Arg]) + 'static) -> Self {
        Self::fallible(move |args| {
            f(args);
            Ok(())
        })
    }

    /// Wrap a closure that may raise an error.
    ///
    /// The error is propagated to the `emit` caller unwrapped and skips
    /// every handler scheduled after this one in the same pass.
    pub fn fallible(f: impl Fn(&[Arg]) -> Result<(), BoxError> + 'static) -> Self {
        Self { f: Rc::new(f) }
    }

    /// Invoke the handler with the given arguments.
    pub fn call(&self, args: &[Arg]) -> Result<(), BoxError> {
        (self.f)(args)
    }

    fn addr(&self) -> usize {
        Rc::as_ptr(&self.f) as *const () as usize
    }
}

impl PartialEq for Handler {
    fn eq(&self, other: &Self) -> bool {
        self.addr() == other.addr()
    }
}

impl Eq for Handler {}

impl Hash for Handler {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.addr().hash(state);
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler({:#x})", self.addr())
    }
}

// A lone handler iterates as a one-element sequence, so registration and
// removal accept either a single `Handler` or any collection of them.
impl IntoIterator for Handler {
    type Item = Handler;
    type IntoIter = std::iter::Once<Handler>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self)
    }
}
