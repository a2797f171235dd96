pub mod outcome;
pub mod spec;

// Re-export common model types
pub use outcome::Outcome;
pub use spec::Spec;
