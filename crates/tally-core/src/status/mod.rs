//! Project status derivation.
//!
//! [`compute_status`] derives `live`, `unreported` or `done` for a project
//! from its own tasks and, recursively, its sub-projects. [`display_status`]
//! layers the manual `finished` flag on top; it is the status every view
//! shows. Both are pure over a snapshot and a [`Clock`](crate::schedule::Clock).

pub mod engine;
pub mod groups;
pub mod stats;

pub use engine::{compute_status, display_status, StatusEngine, StatusMap};
pub use groups::ProjectGroups;
pub use stats::Overview;
