use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::Value;
use tracing::warn;

use super::{Masker, Predicate};

/// Gate stage: evaluates the rule predicate against the whole event as
/// passed into this stage and short-circuits masking when it returns false.
/// The predicate runs before any mutation, so it can reference fields that
/// target narrowing would otherwise hide.
pub struct PredicateGate {
    predicate: Box<Predicate>,
    inner: Box<dyn Masker>,
    warned: AtomicBool,
}

impl PredicateGate {
    pub fn new(predicate: Box<Predicate>, inner: Box<dyn Masker>) -> Self {
        Self {
            predicate,
            inner,
            warned: AtomicBool::new(false),
        }
    }
}

impl Masker for PredicateGate {
    fn mask(&self, event: &mut Value) {
        // A panicking predicate is treated as "rule does not match" so one
        // bad rule cannot take down the event pipeline. Warned once per gate.
        match panic::catch_unwind(AssertUnwindSafe(|| (self.predicate)(&*event))) {
            Ok(true) => self.inner.mask(event),
            Ok(false) => {}
            Err(_) => {
                if !self.warned.swap(true, Ordering::Relaxed) {
                    warn!(
                        masker = self.inner.name(),
                        "mask predicate panicked; treating rule as not matching"
                    );
                }
            }
        }
    }

    fn name(&self) -> &str {
        "predicate-gate"
    }
}
