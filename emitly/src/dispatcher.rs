//! The dispatch engine: resolves an emitted type against the registry and
//! invokes every matching handler, synchronously and in registration order.
//!
//! The matching rule is asymmetric:
//!
//! - a **literal** emission fires its exact entry first, then every
//!   pattern entry whose pattern matches the emitted name; pattern
//!   handlers receive the normalized name prepended as `args[0]`, since
//!   they were registered generically and do not otherwise know which
//!   name triggered them
//! - a **pattern** emission fires the entries of every literal name the
//!   pattern matches, with `args` unchanged; those handlers were bound to
//!   a concrete name at registration and no prefix is added
//!
//! The entire invocation plan is snapshotted from the registry before the
//! first handler runs. Handlers that register, remove, or emit reentrantly
//! therefore see their changes take effect on the next pass, and removal
//! mid-pass cannot skip an already-snapshotted peer.
//!
//! An error from one handler aborts the remaining deliveries of the pass
//! and propagates to the caller unwrapped. Emitting a type nobody listens
//! to is a silent no-op.

use std::cell::RefCell;

use emitly_core::{Arg, BoxError, EventType, Handler, Pattern, arg};

use crate::registry::{LiteralKey, Registry, TypeKey};

/// Resolve `ty` under the given case policy and deliver `args` to every
/// matching handler.
pub(crate) fn dispatch(
    registry: &RefCell<Registry>,
    case_sensitive: bool,
    ty: EventType,
    args: &[Arg],
) -> Result<(), BoxError> {
    match TypeKey::from(ty.normalize(case_sensitive)) {
        TypeKey::Pattern(pattern) => dispatch_pattern(registry, &pattern, args),
        TypeKey::Literal(key) => dispatch_literal(registry, &key, args),
    }
}

/// Pattern emission: fan out to every literal entry the pattern matches.
fn dispatch_pattern(
    registry: &RefCell<Registry>,
    pattern: &Pattern,
    args: &[Arg],
) -> Result<(), BoxError> {
    // Snapshot before invoking anything; the borrow must not be held
    // across handler calls.
    let plan: Vec<Vec<Handler>> = registry
        .borrow()
        .literal_entries()
        .into_iter()
        .filter_map(|(key, handlers)| match key {
            LiteralKey::Name(name) if pattern.matches(&name) => Some(handlers),
            // Tokens are exact-only keys; patterns match textual names.
            _ => None,
        })
        .collect();

    #[cfg(feature = "tracing")]
    tracing::trace!(
        pattern = pattern.as_str(),
        matched_types = plan.len(),
        "pattern emission"
    );

    for handler in plan.iter().flatten() {
        handler.call(args)?;
    }
    Ok(())
}

/// Literal emission: the exact entry first, then matching pattern entries
/// with the emitted name prepended.
fn dispatch_literal(
    registry: &RefCell<Registry>,
    key: &LiteralKey,
    args: &[Arg],
) -> Result<(), BoxError> {
    let (exact, by_pattern) = {
        let registry = registry.borrow();
        let exact = registry.literal_handlers(key);
        let by_pattern: Vec<Vec<Handler>> = match key {
            LiteralKey::Name(name) => registry
                .pattern_entries()
                .into_iter()
                .filter_map(|(pattern, handlers)| pattern.matches(name).then_some(handlers))
                .collect(),
            LiteralKey::Token(_) => Vec::new(),
        };
        (exact, by_pattern)
    };

    #[cfg(feature = "tracing")]
    tracing::trace!(
        key = ?key,
        exact = exact.len(),
        matched_patterns = by_pattern.len(),
        "literal emission"
    );

    for handler in &exact {
        handler.call(args)?;
    }

    if by_pattern.is_empty() {
        return Ok(());
    }

    // Pattern handlers were registered without a concrete name, so they
    // receive the one that triggered them as the leading argument.
    if let LiteralKey::Name(name) = key {
        let mut prefixed: Vec<Arg> = Vec::with_capacity(args.len() + 1);
        prefixed.push(arg(name.clone()));
        prefixed.extend(args.iter().cloned());
        for handler in by_pattern.iter().flatten() {
            handler.call(&prefixed)?;
        }
    }
    Ok(())
}
