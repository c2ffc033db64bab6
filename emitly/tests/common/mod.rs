//! Shared test helpers: recording and counting handlers.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use emitly::Handler;

/// A shared, ordered record of handler invocations.
pub type Log = Rc<RefCell<Vec<String>>>;

pub fn log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// A handler that appends `tag` to the log on every invocation.
pub fn recording(log: &Log, tag: &str) -> Handler {
    let log = log.clone();
    let tag = tag.to_string();
    Handler::new(move |_| log.borrow_mut().push(tag.clone()))
}

/// A handler that records `tag` followed by every `String` argument.
pub fn recording_args(log: &Log, tag: &str) -> Handler {
    let log = log.clone();
    let tag = tag.to_string();
    Handler::new(move |args| {
        let mut line = tag.clone();
        for arg in args {
            if let Some(s) = arg.downcast_ref::<String>() {
                line.push(':');
                line.push_str(s);
            }
        }
        log.borrow_mut().push(line);
    })
}

pub fn counter() -> Rc<Cell<usize>> {
    Rc::new(Cell::new(0))
}

/// A handler that bumps the counter on every invocation.
pub fn counting(count: &Rc<Cell<usize>>) -> Handler {
    let count = count.clone();
    Handler::new(move |_| count.set(count.get() + 1))
}
