use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use log::debug;
use quickcheck::Testable;

use crate::models::outcome::Outcome;

/// Text used when a check panics with a payload that carries no message
const UNKNOWN_FAULT: &str = "unexpected runtime fault";

type Check = Box<dyn FnOnce()>;

/// A value that can be evaluated into an [`Outcome`].
///
/// Closed set of verification mechanisms: a plain boolean, an imperative
/// assertion-style check, a QuickCheck property, or a pending marker. Each
/// variant has its own evaluation rule in [`evaluate`]; adding a mechanism
/// means adding a variant and one match arm, with no change to `describe`,
/// `it`, or the reporter.
pub enum Verifier {
    /// A boolean expression, already reduced by the caller
    Bool(bool),
    /// An imperative check that signals failure by panicking
    Case(Check),
    /// A randomized property, run to a verdict by QuickCheck
    Property(Check),
    /// A placeholder for a behaviour not specified yet; never executed
    Pending(String),
}

impl Verifier {
    /// Wrap an assertion-based test case. Any panic raised while the check
    /// runs, from `assert!` macros or from arbitrary runtime faults, is
    /// reported as a failure of this one spec.
    pub fn case<F>(check: F) -> Verifier
    where
        F: FnOnce() + 'static,
    {
        Verifier::Case(Box::new(check))
    }

    /// Wrap a QuickCheck property, e.g. a `fn(Vec<u8>) -> bool`.
    pub fn property<P>(prop: P) -> Verifier
    where
        P: Testable + 'static,
    {
        Verifier::Property(Box::new(move || quickcheck::quickcheck(prop)))
    }

    /// Mark a behaviour as pending with an explanatory message.
    pub fn pending(message: impl Into<String>) -> Verifier {
        Verifier::Pending(message.into())
    }
}

impl From<bool> for Verifier {
    fn from(value: bool) -> Self {
        Verifier::Bool(value)
    }
}

/// Evaluate one verifier to its outcome.
///
/// This is the fault containment boundary: a panic inside a `Case` or
/// `Property` check is caught here and converted into `Outcome::Fail`, so a
/// broken spec never aborts the rest of the run. Nothing outside the check
/// itself runs under the catch.
pub fn evaluate(verifier: Verifier) -> Outcome {
    match verifier {
        Verifier::Bool(true) => Outcome::Success,
        // A bare boolean carries no explanation
        Verifier::Bool(false) => Outcome::Fail(String::new()),
        Verifier::Case(check) => match panic::catch_unwind(AssertUnwindSafe(check)) {
            Ok(()) => Outcome::Success,
            Err(payload) => {
                let detail = panic_message(payload);
                debug!("assertion case failed: {}", detail);
                Outcome::Fail(detail)
            }
        },
        Verifier::Property(check) => match panic::catch_unwind(AssertUnwindSafe(check)) {
            Ok(()) => Outcome::Success,
            // Counterexample or exhausted generator; QuickCheck's own
            // diagnostic is deliberately not surfaced in the report.
            Err(_) => Outcome::Fail(String::new()),
        },
        Verifier::Pending(message) => Outcome::Pending(message),
    }
}

/// Extract the human-readable message from a panic payload.
///
/// `assert!`-family macros and explicit `panic!` calls carry a `String` or
/// `&str`; runtime faults such as out-of-bounds indexing carry their own
/// description the same way.
fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        UNKNOWN_FAULT.to_string()
    }
}
