pub mod errors;
pub mod models;
pub mod report;
pub mod runner;
pub mod verifier;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use errors::{MinispecError, MinispecResult};
pub use models::{
    outcome::Outcome,
    spec::Spec,
};
pub use report::{
    document_group,
    document_spec,
    quantify,
    report_lines,
    run_and_report,
    write_documentation,
    DOC_FILENAME,
};
pub use runner::{describe, it};
pub use verifier::{evaluate, Verifier};
