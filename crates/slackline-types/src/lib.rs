//! Core types for the slackline workspace-directory client.
//!
//! This crate holds everything the client and CLI crates share:
//!
//! - [`error`] -- the [`DirectoryError`](error::DirectoryError) taxonomy
//! - [`target`] -- id-or-name references with exactly-one validation
//! - [`directory`] -- channel and user records
//! - [`config`] -- configuration schema with env-var token fallback
//! - [`secret`] -- redacting token wrapper

pub mod config;
pub mod directory;
pub mod error;
pub mod secret;
pub mod target;

pub use config::{CacheConfig, WorkspaceConfig};
pub use directory::{Channel, User};
pub use error::{DirectoryError, Result, TargetKind};
pub use secret::SecretString;
pub use target::Target;
