//! High-level workspace operations.
//!
//! [`Workspace`] is the command dispatcher: every public operation
//! validates its targets, resolves name-form targets through the
//! [`Resolver`], issues exactly one outbound call through the
//! [`DirectoryApi`] seam, and returns the structured result. Errors are
//! always returned to the caller -- nothing is logged and swallowed.

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::try_join_all;
use tracing::debug;

use slackline_types::error::Result;
use slackline_types::{Channel, SecretString, Target, User, WorkspaceConfig};

use crate::api::SlackApiClient;
use crate::resolver::Resolver;
use crate::traits::DirectoryApi;

/// A connected workspace: dispatcher plus resolver over one API seam.
pub struct Workspace {
    api: Arc<dyn DirectoryApi>,
    resolver: Resolver,
}

impl Workspace {
    /// Wrap an API implementation with an uncached resolver.
    pub fn new(api: Arc<dyn DirectoryApi>) -> Self {
        let resolver = Resolver::new(Arc::clone(&api));
        Self { api, resolver }
    }

    /// Wrap an API implementation with a time-bounded resolver cache.
    pub fn with_cached_resolver(api: Arc<dyn DirectoryApi>, ttl: Duration) -> Self {
        let resolver = Resolver::with_cache(Arc::clone(&api), ttl);
        Self { api, resolver }
    }

    /// Build a workspace over HTTP from configuration and a token.
    pub fn connect(config: &WorkspaceConfig, token: SecretString) -> Result<Self> {
        let api: Arc<dyn DirectoryApi> = Arc::new(SlackApiClient::new(config, token)?);
        if config.cache.enabled {
            Ok(Self::with_cached_resolver(
                api,
                Duration::from_secs(config.cache.ttl_secs),
            ))
        } else {
            Ok(Self::new(api))
        }
    }

    // ── Target resolution ────────────────────────────────────────────

    /// Id of a channel target: id-form passes through untouched.
    async fn channel_id_of(&self, target: &Target) -> Result<String> {
        match target {
            Target::Id(id) => Ok(id.clone()),
            Target::Name(name) => self.resolver.channel_id(name).await,
        }
    }

    /// Id of a user target: id-form passes through untouched.
    async fn user_id_of(&self, target: &Target) -> Result<String> {
        match target {
            Target::Id(id) => Ok(id.clone()),
            Target::Name(name) => self.resolver.user_id(name).await,
        }
    }

    // ── Channel operations ───────────────────────────────────────────

    /// List all channels, archived ones included.
    pub async fn list_channels(&self) -> Result<Vec<Channel>> {
        self.api.list_channels().await
    }

    /// Create a channel.
    pub async fn create_channel(&self, name: &str) -> Result<Channel> {
        debug!(name = %name, "creating channel");
        self.api.create_channel(name).await
    }

    /// Archive a channel.
    pub async fn archive_channel(&self, channel: &Target) -> Result<()> {
        let id = self.channel_id_of(channel).await?;
        debug!(channel = %id, "archiving channel");
        self.api.archive_channel(&id).await
    }

    /// Rename a channel; returns the updated record.
    pub async fn rename_channel(&self, channel: &Target, new_name: &str) -> Result<Channel> {
        let id = self.channel_id_of(channel).await?;
        debug!(channel = %id, new_name = %new_name, "renaming channel");
        self.api.rename_channel(&id, new_name).await
    }

    // ── Messaging ────────────────────────────────────────────────────

    /// Post a message; returns its timestamp.
    pub async fn send_message(&self, channel: &Target, text: &str) -> Result<String> {
        let id = self.channel_id_of(channel).await?;
        debug!(channel = %id, "posting message");
        self.api.post_message(&id, text).await
    }

    // ── Membership ───────────────────────────────────────────────────

    /// Invite a batch of users to a channel in one call.
    ///
    /// All user targets are resolved first; if any name fails to
    /// resolve, the whole call fails before any invite is issued.
    pub async fn add_members(&self, channel: &Target, users: &[Target]) -> Result<()> {
        let channel_id = self.channel_id_of(channel).await?;

        let mut user_ids = Vec::with_capacity(users.len());
        for user in users {
            user_ids.push(self.user_id_of(user).await?);
        }

        debug!(channel = %channel_id, count = user_ids.len(), "inviting members");
        self.api.invite_members(&channel_id, &user_ids).await
    }

    /// Remove one user from a channel.
    pub async fn remove_member(&self, channel: &Target, user: &Target) -> Result<()> {
        let channel_id = self.channel_id_of(channel).await?;
        let user_id = self.user_id_of(user).await?;
        debug!(channel = %channel_id, user = %user_id, "removing member");
        self.api.remove_member(&channel_id, &user_id).await
    }

    /// Member ids of a channel; with `resolve_names`, each id is
    /// resolved to the member's real name.
    ///
    /// The per-member resolutions are independent read-only lookups and
    /// run concurrently. With an uncached resolver each one re-fetches
    /// the user collection; enable the resolver cache to share a single
    /// fetch across the fan-out.
    pub async fn list_members(&self, channel: &Target, resolve_names: bool) -> Result<Vec<String>> {
        let channel_id = self.channel_id_of(channel).await?;
        let ids = self.api.member_ids(&channel_id).await?;

        if !resolve_names {
            return Ok(ids);
        }

        try_join_all(ids.iter().map(|id| self.resolver.user_name(id))).await
    }

    /// Set a channel manager via the vendor-extension endpoint.
    pub async fn set_manager(&self, channel: &Target, user: &Target) -> Result<()> {
        let channel_id = self.channel_id_of(channel).await?;
        let user_id = self.user_id_of(user).await?;
        debug!(channel = %channel_id, user = %user_id, "setting channel manager");
        self.api.set_channel_manager(&channel_id, &user_id).await
    }

    // ── Users ────────────────────────────────────────────────────────

    /// List all workspace users.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.api.list_users().await
    }

    // ── Resolver pass-throughs ───────────────────────────────────────

    /// Resolve a channel display name to its id.
    pub async fn channel_id(&self, name: &str) -> Result<String> {
        self.resolver.channel_id(name).await
    }

    /// Resolve a channel id to its display name.
    pub async fn channel_name(&self, id: &str) -> Result<String> {
        self.resolver.channel_name(id).await
    }

    /// Resolve a username or real name to the user's id.
    pub async fn user_id(&self, name: &str) -> Result<String> {
        self.resolver.user_id(name).await
    }

    /// Resolve a user id to the real name.
    pub async fn user_name(&self, id: &str) -> Result<String> {
        self.resolver.user_name(id).await
    }
}
