use log::debug;

use crate::models::outcome::Outcome;
use crate::models::spec::Spec;
use crate::verifier::{evaluate, Verifier};

/// Evaluate one requirement against its verifier.
///
/// Accepts any of the four verifier shapes inline: a literal boolean, a
/// wrapped test case, a wrapped property, or a pending marker. Never fails
/// itself; every failure mode is absorbed into the returned [`Outcome`].
pub fn it<V>(requirement: &str, verifier: V) -> (String, Outcome)
where
    V: Into<Verifier>,
{
    debug!("evaluating: {}", requirement);
    (requirement.to_string(), evaluate(verifier.into()))
}

/// Group a list of evaluated requirements under one label.
///
/// Input order is preserved; concatenating the output of several `describe`
/// calls in declaration order yields the flat spec sequence a full run
/// reports on.
pub fn describe(group: &str, behaviors: Vec<(String, Outcome)>) -> Vec<Spec> {
    debug!("described group '{}' with {} specs", group, behaviors.len());
    behaviors
        .into_iter()
        .map(|(requirement, outcome)| Spec::new(group, requirement, outcome))
        .collect()
}
