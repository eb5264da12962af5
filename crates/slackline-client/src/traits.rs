//! The outbound-call seam.
//!
//! [`DirectoryApi`] is the trait between the resolver/dispatcher layers
//! and the HTTP transport. The production implementation is
//! [`SlackApiClient`](crate::api::SlackApiClient); tests substitute an
//! in-memory mock. Every method issues exactly one outbound call.

use async_trait::async_trait;

use slackline_types::error::Result;
use slackline_types::{Channel, User};

/// Typed operations against the remote directory service.
///
/// All identifiers passed in are already resolved; implementations never
/// translate names. No method retries, paginates, or caches.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    /// Fetch the full channel collection.
    async fn list_channels(&self) -> Result<Vec<Channel>>;

    /// Fetch the full user collection.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Create a channel with the given name; returns the new record.
    async fn create_channel(&self, name: &str) -> Result<Channel>;

    /// Archive a channel by id.
    async fn archive_channel(&self, channel_id: &str) -> Result<()>;

    /// Rename a channel by id; returns the updated record.
    async fn rename_channel(&self, channel_id: &str, name: &str) -> Result<Channel>;

    /// Post a message; returns the message timestamp.
    async fn post_message(&self, channel_id: &str, text: &str) -> Result<String>;

    /// Invite a batch of users to a channel in one call.
    async fn invite_members(&self, channel_id: &str, user_ids: &[String]) -> Result<()>;

    /// Remove one user from a channel.
    async fn remove_member(&self, channel_id: &str, user_id: &str) -> Result<()>;

    /// Fetch the member ids of a channel.
    async fn member_ids(&self, channel_id: &str) -> Result<Vec<String>>;

    /// Set a channel manager via the vendor-extension endpoint.
    ///
    /// The endpoint is not part of the documented API surface; in
    /// deployments without it, this call fails with a remote rejection
    /// like any other refused request.
    async fn set_channel_manager(&self, channel_id: &str, user_id: &str) -> Result<()>;
}
