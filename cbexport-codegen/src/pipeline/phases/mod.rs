//! Built-in export phases.

mod aggregate;
mod classify;
mod folders;
mod validate;

pub use aggregate::AggregatePhase;
pub use classify::ClassifyPhase;
pub use folders::FoldersPhase;
pub use validate::ValidatePhase;
