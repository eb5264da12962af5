//! HTTP client for the remote directory service.
//!
//! [`SlackApiClient`] wraps a [`reqwest::Client`] and the bearer token
//! to provide the typed methods of [`DirectoryApi`]. The base URL and
//! the vendor-extension manager path come from configuration and can be
//! overridden for testing.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use slackline_types::error::{DirectoryError, Result};
use slackline_types::{Channel, SecretString, User, WorkspaceConfig};

use crate::traits::DirectoryApi;
use crate::wire::{
    accept, AckResponse, ChannelResponse, ListChannelsResponse, ListUsersResponse,
    MembersResponse, PostMessageResponse, Reply,
};

/// Collection page size requested from the list endpoints.
///
/// Pagination is out of scope; one page of this size is all the client
/// ever reads.
const LIST_LIMIT: u32 = 1000;

fn transport(e: reqwest::Error) -> DirectoryError {
    DirectoryError::Transport(e.to_string())
}

/// HTTP client for the directory service's REST endpoints.
///
/// Every request carries `Authorization: Bearer <token>`; bodies are
/// JSON. Transport failures (connect, per-request timeout, body decode)
/// surface as [`DirectoryError::Transport`]; `ok: false` envelopes as
/// [`DirectoryError::RemoteRejected`].
pub struct SlackApiClient {
    /// Shared HTTP client, carries the configured timeout.
    http: Client,
    /// Bearer token for the workspace.
    token: SecretString,
    /// Base URL for API calls.
    base_url: String,
    /// Path of the set-channel-manager vendor extension.
    manager_path: String,
}

impl SlackApiClient {
    /// Create a client from configuration and a resolved token.
    pub fn new(config: &WorkspaceConfig, token: SecretString) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(transport)?;

        Ok(Self {
            http,
            token,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            manager_path: config.manager_path.clone(),
        })
    }

    /// Return the base URL used for API requests.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET an endpoint and decode its envelope.
    async fn get<T: DeserializeOwned + Reply>(&self, path_and_query: &str) -> Result<T> {
        let url = format!("{}/{path_and_query}", self.base_url);
        debug!(path = %path_and_query, "directory GET");

        let resp = self
            .http
            .get(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.token.expose()),
            )
            .send()
            .await
            .map_err(transport)?;

        let body: T = resp.json().await.map_err(transport)?;
        accept(body)
    }

    /// POST a JSON body to an endpoint and decode its envelope.
    async fn post<T: DeserializeOwned + Reply>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T> {
        let url = format!("{}/{path}", self.base_url);
        debug!(path = %path, "directory POST");

        let resp = self
            .http
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.token.expose()),
            )
            .header("Content-Type", "application/json; charset=utf-8")
            .json(body)
            .send()
            .await
            .map_err(transport)?;

        let body: T = resp.json().await.map_err(transport)?;
        accept(body)
    }
}

#[async_trait]
impl DirectoryApi for SlackApiClient {
    async fn list_channels(&self) -> Result<Vec<Channel>> {
        let resp: ListChannelsResponse = self
            .get(&format!("conversations.list?limit={LIST_LIMIT}"))
            .await?;
        debug!(count = resp.channels.len(), "listed channels");
        Ok(resp.channels)
    }

    async fn list_users(&self) -> Result<Vec<User>> {
        let resp: ListUsersResponse = self.get(&format!("users.list?limit={LIST_LIMIT}")).await?;
        debug!(count = resp.members.len(), "listed users");
        Ok(resp.members)
    }

    async fn create_channel(&self, name: &str) -> Result<Channel> {
        let body = serde_json::json!({ "name": name });
        let resp: ChannelResponse = self.post("conversations.create", &body).await?;
        resp.channel.ok_or_else(|| {
            DirectoryError::Transport("create returned ok but no channel".into())
        })
    }

    async fn archive_channel(&self, channel_id: &str) -> Result<()> {
        let body = serde_json::json!({ "channel": channel_id });
        let _: AckResponse = self.post("conversations.archive", &body).await?;
        Ok(())
    }

    async fn rename_channel(&self, channel_id: &str, name: &str) -> Result<Channel> {
        let body = serde_json::json!({ "channel": channel_id, "name": name });
        let resp: ChannelResponse = self.post("conversations.rename", &body).await?;
        resp.channel.ok_or_else(|| {
            DirectoryError::Transport("rename returned ok but no channel".into())
        })
    }

    async fn post_message(&self, channel_id: &str, text: &str) -> Result<String> {
        let body = serde_json::json!({ "channel": channel_id, "text": text });
        let resp: PostMessageResponse = self.post("chat.postMessage", &body).await?;
        resp.ts
            .ok_or_else(|| DirectoryError::Transport("post returned ok but no ts".into()))
    }

    async fn invite_members(&self, channel_id: &str, user_ids: &[String]) -> Result<()> {
        // The endpoint takes the whole batch as one comma-joined field.
        let body = serde_json::json!({
            "channel": channel_id,
            "users": user_ids.join(","),
        });
        let _: AckResponse = self.post("conversations.invite", &body).await?;
        Ok(())
    }

    async fn remove_member(&self, channel_id: &str, user_id: &str) -> Result<()> {
        let body = serde_json::json!({ "channel": channel_id, "user": user_id });
        let _: AckResponse = self.post("conversations.kick", &body).await?;
        Ok(())
    }

    async fn member_ids(&self, channel_id: &str) -> Result<Vec<String>> {
        let resp: MembersResponse = self
            .get(&format!(
                "conversations.members?channel={channel_id}&limit={LIST_LIMIT}"
            ))
            .await?;
        Ok(resp.members)
    }

    async fn set_channel_manager(&self, channel_id: &str, user_id: &str) -> Result<()> {
        let body = serde_json::json!({ "channel": channel_id, "user": user_id });
        let _: AckResponse = self.post(&self.manager_path, &body).await?;
        Ok(())
    }
}
