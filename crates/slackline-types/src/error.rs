//! Error types for the slackline client.
//!
//! Provides [`DirectoryError`] as the single error type shared by the
//! resolver, the dispatcher, and the HTTP layer. The enum is
//! non-exhaustive to allow future extension without breaking downstream.

use std::fmt;

use thiserror::Error;

/// Which kind of logical target an input error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// A conversation / channel in the workspace.
    Channel,
    /// A workspace member.
    User,
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetKind::Channel => write!(f, "channel"),
            TargetKind::User => write!(f, "user"),
        }
    }
}

/// Error type for every directory operation.
///
/// The first three variants are usage errors detected before any request
/// leaves the process; the last two wrap failures of the outbound call
/// itself. No variant is ever logged-and-swallowed -- callers always get
/// the structured value back.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DirectoryError {
    /// Neither an id nor a name was supplied for a required target.
    #[error("no id or name supplied for {kind}")]
    MissingInput {
        /// The target the caller failed to specify.
        kind: TargetKind,
    },

    /// Both an id and a name were supplied for the same target.
    #[error("both id and name supplied for {kind}")]
    AmbiguousInput {
        /// The doubly-specified target.
        kind: TargetKind,
    },

    /// A name-form target matched nothing in the remote directory.
    #[error("{kind} not found: {name}")]
    UnresolvedName {
        /// The kind of lookup that failed.
        kind: TargetKind,
        /// The name that could not be resolved.
        name: String,
    },

    /// The outbound request failed at the transport level
    /// (connect, timeout, or body decode).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The remote service answered with `ok: false`. Carries the
    /// service's `error` code verbatim.
    #[error("remote rejected request: {0}")]
    RemoteRejected(String),
}

impl DirectoryError {
    /// The remote error code, when this is a [`RemoteRejected`](Self::RemoteRejected).
    pub fn remote_code(&self) -> Option<&str> {
        match self {
            DirectoryError::RemoteRejected(code) => Some(code),
            _ => None,
        }
    }
}

/// A convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, DirectoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_kind_display() {
        assert_eq!(TargetKind::Channel.to_string(), "channel");
        assert_eq!(TargetKind::User.to_string(), "user");
    }

    #[test]
    fn missing_input_display() {
        let err = DirectoryError::MissingInput {
            kind: TargetKind::Channel,
        };
        assert_eq!(err.to_string(), "no id or name supplied for channel");
    }

    #[test]
    fn ambiguous_input_display() {
        let err = DirectoryError::AmbiguousInput {
            kind: TargetKind::User,
        };
        assert_eq!(err.to_string(), "both id and name supplied for user");
    }

    #[test]
    fn unresolved_name_carries_the_name() {
        let err = DirectoryError::UnresolvedName {
            kind: TargetKind::Channel,
            name: "random".into(),
        };
        assert_eq!(err.to_string(), "channel not found: random");
    }

    #[test]
    fn remote_rejected_surfaces_code_verbatim() {
        let err = DirectoryError::RemoteRejected("channel_not_found".into());
        assert_eq!(err.remote_code(), Some("channel_not_found"));
        assert!(err.to_string().contains("channel_not_found"));
    }

    #[test]
    fn remote_code_is_none_for_other_variants() {
        let err = DirectoryError::Transport("connection refused".into());
        assert!(err.remote_code().is_none());
    }
}
