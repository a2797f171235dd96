use std::fmt;

/// Outcome of evaluating one verifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success, // The check held
    Fail(String), // The check did not hold, with optional detail
    Pending(String), // Explicitly deferred, with optional message
}

impl Outcome {
    /// True only for `Fail`; pending specs never count as failures.
    pub fn is_fail(&self) -> bool {
        matches!(self, Outcome::Fail(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Outcome::Pending(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => write!(f, "Success"),
            Outcome::Fail(detail) => {
                if detail.is_empty() {
                    write!(f, "Fail")
                } else {
                    write!(f, "Fail: {}", detail)
                }
            }
            Outcome::Pending(message) => {
                if message.is_empty() {
                    write!(f, "Pending")
                } else {
                    write!(f, "Pending: {}", message)
                }
            }
        }
    }
}
