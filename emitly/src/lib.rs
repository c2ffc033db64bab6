//! # emitly - Synchronous In-Process Publish/Subscribe
//!
//! `emitly` dispatches events inside one process, on the calling stack:
//! callers register handlers against an event type — an exact name, a
//! unique token, or a pattern — and emitting a type invokes every matching
//! handler in registration order before `emit` returns.
//!
//! ## Quick Start
//!
//! ```
//! use emitly::{Emitly, Handler, Pattern, arg};
//!
//! let emitter = Emitly::new();
//!
//! // Exact subscription
//! emitter.on(
//!     "order.placed",
//!     Handler::new(|args| {
//!         let id = args[0].downcast_ref::<u64>().unwrap();
//!         println!("order {id}");
//!     }),
//! );
//!
//! // Pattern subscription: receives the concrete name as args[0]
//! emitter.on(
//!     Pattern::compile("^order\\.").unwrap(),
//!     Handler::new(|args| {
//!         let name = args[0].downcast_ref::<String>().unwrap();
//!         println!("audit: {name}");
//!     }),
//! );
//!
//! emitter.emit("order.placed", &[arg(42u64)]).unwrap();
//! ```
//!
//! ## Matching Rule
//!
//! Emission is asymmetric. Emitting a **name** fires its exact entry and
//! every matching pattern entry (pattern handlers get the name prepended).
//! Emitting a **pattern** fires the entries of every registered name it
//! matches, arguments unchanged. Either direction, handlers fire in
//! registration order from a snapshot taken before the first invocation,
//! so handlers may register, remove, or emit reentrantly.
//!
//! ## Scope
//!
//! Single process, single thread, no persistence: an [`Emitly`] instance
//! is an `Rc`-backed handle whose clones share one registry. Delivery is
//! fully synchronous; there is no queue, no priority, and no isolation
//! between handlers — the first handler error aborts the pass.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod dispatcher;
mod emitter;
mod registry;

pub use emitter::{Emitly, EmitlyBuilder};

pub use emitly_core::{
    // Arguments
    Arg,
    // Errors
    BoxError,
    // Event-type model
    Category,
    EmitlyError,
    EventType,
    // Handlers
    Handler,
    Pattern,
    Regex,
    Token,
    arg,
};
