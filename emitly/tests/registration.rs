//! Registration lifecycle: set semantics, removal, and the clear
//! operations.

use emitly::{Category, Emitly, EmitlyError, Handler, Pattern};

mod common;
use common::{counter, counting, log, recording};

#[test]
fn on_accepts_one_handler_or_a_batch() {
    let emitter = Emitly::new();
    let order = log();

    emitter.on("event", recording(&order, "h1"));
    emitter.on(
        "event",
        vec![recording(&order, "h2"), recording(&order, "h3")],
    );
    emitter.emit("event", &[]).unwrap();

    assert_eq!(*order.borrow(), vec!["h1", "h2", "h3"]);
}

#[test]
fn off_removes_a_handler_and_keeps_the_rest() {
    let emitter = Emitly::new();
    let order = log();

    let h1 = recording(&order, "h1");
    let h2 = recording(&order, "h2");
    emitter.on("event", vec![h1.clone(), h2]);
    emitter.off("event", h1);
    emitter.emit("event", &[]).unwrap();

    assert_eq!(*order.borrow(), vec!["h2"]);
}

#[test]
fn off_accepts_a_clone_of_the_registered_handler() {
    let emitter = Emitly::new();
    let count = counter();
    let handler = counting(&count);

    emitter.on("event", handler.clone());
    emitter.off("event", handler.clone());
    emitter.emit("event", &[]).unwrap();

    assert_eq!(count.get(), 0);
    assert!(emitter.is_empty());
}

#[test]
fn off_is_a_no_op_for_unknown_types_and_handlers() {
    let emitter = Emitly::new();
    let count = counter();

    emitter.off("never-registered", Handler::new(|_| {}));

    emitter.on("event", counting(&count));
    emitter.off("event", Handler::new(|_| {}));
    emitter.emit("event", &[]).unwrap();

    assert_eq!(count.get(), 1);
}

#[test]
fn removing_the_last_handler_prunes_the_type() {
    let emitter = Emitly::new();
    let handler = Handler::new(|_| {});

    emitter.on("event", handler.clone());
    assert_eq!(emitter.handler_count(), 1);

    emitter.off("event", handler);
    assert!(emitter.is_empty());
}

#[test]
fn off_respects_the_case_policy() {
    let emitter = Emitly::builder().case_sensitive(false).build();
    let count = counter();
    let handler = counting(&count);

    emitter.on("Event", handler.clone());
    emitter.off("EVENT", handler);
    emitter.emit("event", &[]).unwrap();

    assert_eq!(count.get(), 0);
}

#[test]
fn case_insensitive_registrations_share_one_key() {
    let emitter = Emitly::builder().case_sensitive(false).build();
    let count = counter();
    let handler = counting(&count);

    emitter.on("Event", handler.clone());
    emitter.on("event", handler);
    assert_eq!(emitter.handler_count(), 1);
}

#[test]
fn clear_drops_one_type_only() {
    let emitter = Emitly::new();
    let count = counter();

    emitter.on("a", counting(&count));
    emitter.on("b", counting(&count));
    emitter.clear("a");

    emitter.emit("a", &[]).unwrap();
    emitter.emit("b", &[]).unwrap();
    assert_eq!(count.get(), 1);
}

#[test]
fn clear_category_leaves_the_other_category_intact() {
    let emitter = Emitly::new();
    let literal_count = counter();
    let pattern_count = counter();

    emitter.on("event", counting(&literal_count));
    emitter.on(Pattern::compile("^eve").unwrap(), counting(&pattern_count));

    emitter.clear_category(Category::Pattern);
    emitter.emit("event", &[]).unwrap();

    assert_eq!(literal_count.get(), 1);
    assert_eq!(pattern_count.get(), 0);
}

#[test]
fn clear_all_silences_every_subsequent_emission() {
    let emitter = Emitly::new();
    let count = counter();

    emitter.on("event", counting(&count));
    emitter.on(Pattern::compile("^eve").unwrap(), counting(&count));
    emitter.on_all(counting(&count));
    emitter.clear_all();

    emitter.emit("event", &[]).unwrap();
    emitter.emit_all(&[]).unwrap();

    assert_eq!(count.get(), 0);
    assert!(emitter.is_empty());
}

#[test]
fn repeated_on_all_calls_share_one_registration_key() {
    let emitter = Emitly::new();
    let count = counter();
    let handler = counting(&count);

    emitter.on_all(handler.clone());
    emitter.on_all(handler);
    emitter.on("event", Handler::new(|_| {}));
    emitter.emit("event", &[]).unwrap();

    assert_eq!(count.get(), 1);
}

#[test]
fn category_names_from_configuration_are_validated() {
    assert!(matches!(
        "literal".parse::<Category>(),
        Ok(Category::Literal)
    ));
    assert!(matches!(
        "pattern".parse::<Category>(),
        Ok(Category::Pattern)
    ));
    assert!(matches!(
        "normal".parse::<Category>(),
        Err(EmitlyError::UnknownCategory(name)) if name == "normal"
    ));
}
