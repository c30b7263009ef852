//! Markdown formatting for models, views and operation results.
//!
//! Domain types implement [`std::fmt::Display`] directly (see [`models`] and
//! [`calendar`]); the wrappers in this module add context such as "Created
//! task with ID: 4" or render collections with empty-state messages. The CLI
//! pipes the output through termimad and the MCP server returns it verbatim,
//! so both interfaces show the same text.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │ (Task, Project) │───▶│ Display impls   │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: `ProjectSummaries`, `Tasks` and the project overview
//! - [`results`]: `CreateResult`, `UpdateResult`, `DeleteResult`
//! - [`status`]: `OperationStatus`
//! - [`datetime`]: timestamp and deadline formatting
//! - [`calendar`]: day and multi-day boards

pub mod calendar;
pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{ProjectSummaries, Tasks};
pub use datetime::{Deadline, LocalDateTime};
pub use results::{CreateResult, DeleteResult, Resource, UpdateResult};
pub use status::OperationStatus;
