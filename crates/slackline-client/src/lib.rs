//! Typed client for a chat platform's workspace directory.
//!
//! Two cooperating layers over one trait seam:
//!
//! - [`resolver::Resolver`] -- maps human-readable names to the opaque
//!   identifiers the service requires, by fetching the full collection
//!   and scanning it (no dedicated lookup endpoint exists).
//! - [`workspace::Workspace`] -- the command dispatcher: validates
//!   targets, resolves names, issues exactly one outbound call per
//!   operation, and maps the response envelope to a result.
//!
//! # Architecture
//!
//! ```text
//! Workspace ──validate Target──> Resolver ──scan──> id
//!     │                              │
//!     └──────── Arc<dyn DirectoryApi> ────────> SlackApiClient ──HTTP──> service
//! ```
//!
//! # Error handling
//!
//! Every operation returns
//! [`DirectoryError`](slackline_types::error::DirectoryError) from the
//! `slackline-types` crate. This crate re-exports it for convenience.

pub mod api;
pub mod resolver;
pub mod traits;
pub mod wire;
pub mod workspace;

pub use api::SlackApiClient;
pub use resolver::Resolver;
pub use traits::DirectoryApi;
pub use workspace::Workspace;

// Re-export the canonical error type so callers do not need to depend
// on slackline-types directly for error matching.
pub use slackline_types::error::DirectoryError;
