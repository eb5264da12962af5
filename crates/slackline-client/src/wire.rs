//! Wire types for the remote directory service.
//!
//! Every endpoint answers with a JSON envelope carrying a boolean `ok`
//! flag; on failure an `error` string is present and must reach the
//! caller verbatim. [`accept`] is the single place that branch lives.

use serde::Deserialize;

use slackline_types::error::{DirectoryError, Result};
use slackline_types::{Channel, User};

/// An envelope with the service's `ok` / `error` pair.
pub(crate) trait Reply {
    /// The success flag.
    fn is_ok(&self) -> bool;
    /// The error code, when `ok` is false.
    fn error(&self) -> Option<&str>;
}

/// Map an envelope to a result: `ok: false` becomes
/// [`RemoteRejected`](DirectoryError::RemoteRejected) carrying the
/// service's error code verbatim.
pub(crate) fn accept<T: Reply>(reply: T) -> Result<T> {
    if reply.is_ok() {
        Ok(reply)
    } else {
        let code = reply.error().unwrap_or("unknown error").to_owned();
        Err(DirectoryError::RemoteRejected(code))
    }
}

macro_rules! impl_reply {
    ($($ty:ty),+ $(,)?) => {
        $(impl Reply for $ty {
            fn is_ok(&self) -> bool {
                self.ok
            }
            fn error(&self) -> Option<&str> {
                self.error.as_deref()
            }
        })+
    };
}

/// Response from the list-conversations endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ListChannelsResponse {
    /// Whether the call succeeded.
    pub ok: bool,
    /// The channel collection, in service enumeration order.
    #[serde(default)]
    pub channels: Vec<Channel>,
    /// Error code if `ok` is false.
    pub error: Option<String>,
}

/// Response from the create-conversation and rename-conversation endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelResponse {
    /// Whether the call succeeded.
    pub ok: bool,
    /// The created or updated channel record.
    pub channel: Option<Channel>,
    /// Error code if `ok` is false.
    pub error: Option<String>,
}

/// Response from the post-message endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PostMessageResponse {
    /// Whether the call succeeded.
    pub ok: bool,
    /// Timestamp of the posted message.
    pub ts: Option<String>,
    /// Channel the message landed in.
    pub channel: Option<String>,
    /// Error code if `ok` is false.
    pub error: Option<String>,
}

/// Response from the list-conversation-members endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct MembersResponse {
    /// Whether the call succeeded.
    pub ok: bool,
    /// Member user ids, in service enumeration order.
    #[serde(default)]
    pub members: Vec<String>,
    /// Error code if `ok` is false.
    pub error: Option<String>,
}

/// Response from the list-users endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ListUsersResponse {
    /// Whether the call succeeded.
    pub ok: bool,
    /// The user collection, in service enumeration order.
    #[serde(default)]
    pub members: Vec<User>,
    /// Error code if `ok` is false.
    pub error: Option<String>,
}

/// Bare acknowledgement envelope (archive, invite, kick, set-manager).
#[derive(Debug, Clone, Deserialize)]
pub struct AckResponse {
    /// Whether the call succeeded.
    pub ok: bool,
    /// Error code if `ok` is false.
    pub error: Option<String>,
}

impl_reply!(
    ListChannelsResponse,
    ChannelResponse,
    PostMessageResponse,
    MembersResponse,
    ListUsersResponse,
    AckResponse,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_list_channels() {
        let json = r#"{
            "ok": true,
            "channels": [
                {"id": "C1", "name": "general", "is_archived": false},
                {"id": "C2", "name": "random", "is_archived": false}
            ]
        }"#;
        let resp: ListChannelsResponse = serde_json::from_str(json).unwrap();
        assert!(resp.ok);
        assert_eq!(resp.channels.len(), 2);
        assert_eq!(resp.channels[0].id, "C1");
        assert!(resp.error.is_none());
    }

    #[test]
    fn deserialize_create_channel() {
        let json = r#"{
            "ok": true,
            "channel": {"id": "C9", "name": "new-room"}
        }"#;
        let resp: ChannelResponse = serde_json::from_str(json).unwrap();
        assert!(resp.ok);
        assert_eq!(resp.channel.unwrap().name, "new-room");
    }

    #[test]
    fn deserialize_post_message() {
        let json = r#"{"ok": true, "channel": "C1", "ts": "1700000000.000100"}"#;
        let resp: PostMessageResponse = serde_json::from_str(json).unwrap();
        assert!(resp.ok);
        assert_eq!(resp.ts.as_deref(), Some("1700000000.000100"));
    }

    #[test]
    fn deserialize_members() {
        let json = r#"{"ok": true, "members": ["U1", "U2", "U3"]}"#;
        let resp: MembersResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.members, vec!["U1", "U2", "U3"]);
    }

    #[test]
    fn deserialize_users() {
        let json = r#"{
            "ok": true,
            "members": [
                {"id": "U1", "name": "alice", "real_name": "Alice Smith"},
                {"id": "U2", "name": "bob"}
            ]
        }"#;
        let resp: ListUsersResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.members.len(), 2);
        assert_eq!(resp.members[1].real_name, None);
    }

    #[test]
    fn accept_passes_ok_through() {
        let resp = AckResponse {
            ok: true,
            error: None,
        };
        assert!(accept(resp).is_ok());
    }

    #[test]
    fn accept_maps_error_code_verbatim() {
        let resp: AckResponse =
            serde_json::from_str(r#"{"ok": false, "error": "channel_not_found"}"#).unwrap();
        let err = accept(resp).unwrap_err();
        assert_eq!(err.remote_code(), Some("channel_not_found"));
    }

    #[test]
    fn accept_maps_every_envelope_shape() {
        let body = r#"{"ok": false, "error": "channel_not_found"}"#;

        let err = accept(serde_json::from_str::<ListChannelsResponse>(body).unwrap()).unwrap_err();
        assert_eq!(err.remote_code(), Some("channel_not_found"));

        let err = accept(serde_json::from_str::<ChannelResponse>(body).unwrap()).unwrap_err();
        assert_eq!(err.remote_code(), Some("channel_not_found"));

        let err = accept(serde_json::from_str::<PostMessageResponse>(body).unwrap()).unwrap_err();
        assert_eq!(err.remote_code(), Some("channel_not_found"));

        let err = accept(serde_json::from_str::<MembersResponse>(body).unwrap()).unwrap_err();
        assert_eq!(err.remote_code(), Some("channel_not_found"));

        let err = accept(serde_json::from_str::<ListUsersResponse>(body).unwrap()).unwrap_err();
        assert_eq!(err.remote_code(), Some("channel_not_found"));
    }

    #[test]
    fn accept_without_error_field_uses_placeholder() {
        let resp: AckResponse = serde_json::from_str(r#"{"ok": false}"#).unwrap();
        let err = accept(resp).unwrap_err();
        assert_eq!(err.remote_code(), Some("unknown error"));
    }
}
