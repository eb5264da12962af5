//! Directory records.
//!
//! [`Channel`] and [`User`] mirror the fields of the remote service's
//! conversation and member objects that the client actually reads.
//! Unknown fields are ignored for forward compatibility. Both records
//! are owned by the remote service; the client never mutates them
//! locally.

use serde::{Deserialize, Serialize};

/// A conversation in the workspace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Channel {
    /// Opaque, stable identifier assigned by the service.
    pub id: String,

    /// Display name. Mutable server-side; unique at a point in time.
    #[serde(default)]
    pub name: String,

    /// Whether the channel has been archived. Monotonic: once archived,
    /// this client never un-archives.
    #[serde(default)]
    pub is_archived: bool,

    /// Member count, when the service includes it.
    #[serde(default)]
    pub num_members: Option<u64>,
}

/// A workspace member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Opaque, stable identifier assigned by the service.
    pub id: String,

    /// Username (the short handle).
    #[serde(default)]
    pub name: String,

    /// Real (display) name, when set on the profile.
    #[serde(default)]
    pub real_name: Option<String>,

    /// Whether the account has been deactivated.
    #[serde(default)]
    pub deleted: bool,
}

impl User {
    /// True when `needle` equals either the username or the real name.
    ///
    /// Name resolution treats the two interchangeably, so a lookup for
    /// `"Alice Smith"` and a lookup for `"alice"` can land on the same
    /// record.
    pub fn matches(&self, needle: &str) -> bool {
        self.name == needle || self.real_name.as_deref() == Some(needle)
    }

    /// The name an inverse lookup reports: the real name when present,
    /// the username otherwise.
    pub fn display_name(&self) -> &str {
        self.real_name.as_deref().unwrap_or(&self.name)
    }
}
