use crate::models::outcome::Outcome;

/// One executed specification: the enclosing group label, the requirement
/// text, and the outcome its verifier produced.
///
/// A `Spec` is immutable evidence of a completed check, never a pending
/// computation: the verifier has already run by the time one is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spec {
    group: String,
    requirement: String,
    outcome: Outcome,
}

impl Spec {
    pub fn new(
        group: impl Into<String>,
        requirement: impl Into<String>,
        outcome: Outcome,
    ) -> Self {
        Self {
            group: group.into(),
            requirement: requirement.into(),
            outcome,
        }
    }

    /// The `describe` phrase this spec belongs to
    pub fn name(&self) -> &str {
        &self.group
    }

    /// The `it` phrase describing the individual behaviour
    pub fn requirement(&self) -> &str {
        &self.requirement
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}
