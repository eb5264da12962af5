//! Name / identifier resolution against the remote directory.
//!
//! The service has no dedicated lookup endpoint, so every resolution
//! fetches the full collection and scans it. Matching is case-sensitive
//! and exact; when several records share a name, the first one in the
//! order the service enumerates the collection wins.
//!
//! By default nothing is cached: each lookup reflects current server
//! state. [`Resolver::with_cache`] opts in to reusing fetched
//! collections for a bounded time.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use tracing::debug;

use slackline_types::error::{DirectoryError, Result, TargetKind};
use slackline_types::{Channel, User};

use crate::traits::DirectoryApi;

// ── Scan policy ──────────────────────────────────────────────────────────

/// First channel whose display name equals `name` exactly.
pub fn find_channel_by_name<'a>(channels: &'a [Channel], name: &str) -> Option<&'a Channel> {
    channels.iter().find(|c| c.name == name)
}

/// First channel with the given id.
pub fn find_channel_by_id<'a>(channels: &'a [Channel], id: &str) -> Option<&'a Channel> {
    channels.iter().find(|c| c.id == id)
}

/// First user whose username or real name equals `name` exactly.
pub fn find_user_by_name<'a>(users: &'a [User], name: &str) -> Option<&'a User> {
    users.iter().find(|u| u.matches(name))
}

/// First user with the given id.
pub fn find_user_by_id<'a>(users: &'a [User], id: &str) -> Option<&'a User> {
    users.iter().find(|u| u.id == id)
}

// ── Cache ────────────────────────────────────────────────────────────────

/// One cached collection with its fetch time.
struct Cached<T> {
    fetched_at: Instant,
    items: Arc<Vec<T>>,
}

/// Time-bounded cache over the two directory collections.
struct DirectoryCache {
    ttl: Duration,
    channels: Mutex<Option<Cached<Channel>>>,
    users: Mutex<Option<Cached<User>>>,
}

impl DirectoryCache {
    fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            channels: Mutex::new(None),
            users: Mutex::new(None),
        }
    }
}

// ── Resolver ─────────────────────────────────────────────────────────────

/// Resolves names to identifiers and back.
pub struct Resolver {
    api: Arc<dyn DirectoryApi>,
    cache: Option<DirectoryCache>,
}

impl Resolver {
    /// Uncached resolver: every lookup re-fetches the collection.
    pub fn new(api: Arc<dyn DirectoryApi>) -> Self {
        Self { api, cache: None }
    }

    /// Resolver that reuses fetched collections for up to `ttl`.
    ///
    /// Within the window, lookups may return results that are stale with
    /// respect to the server. This is never enabled implicitly.
    pub fn with_cache(api: Arc<dyn DirectoryApi>, ttl: Duration) -> Self {
        Self {
            api,
            cache: Some(DirectoryCache::new(ttl)),
        }
    }

    /// The channel collection, from cache when fresh enough.
    async fn channels(&self) -> Result<Arc<Vec<Channel>>> {
        let Some(cache) = &self.cache else {
            return Ok(Arc::new(self.api.list_channels().await?));
        };

        let mut slot = cache.channels.lock().await;
        if let Some(cached) = slot.as_ref() {
            if cached.fetched_at.elapsed() < cache.ttl {
                debug!("channel collection served from cache");
                return Ok(Arc::clone(&cached.items));
            }
        }

        let items = Arc::new(self.api.list_channels().await?);
        *slot = Some(Cached {
            fetched_at: Instant::now(),
            items: Arc::clone(&items),
        });
        Ok(items)
    }

    /// The user collection, from cache when fresh enough.
    async fn users(&self) -> Result<Arc<Vec<User>>> {
        let Some(cache) = &self.cache else {
            return Ok(Arc::new(self.api.list_users().await?));
        };

        let mut slot = cache.users.lock().await;
        if let Some(cached) = slot.as_ref() {
            if cached.fetched_at.elapsed() < cache.ttl {
                debug!("user collection served from cache");
                return Ok(Arc::clone(&cached.items));
            }
        }

        let items = Arc::new(self.api.list_users().await?);
        *slot = Some(Cached {
            fetched_at: Instant::now(),
            items: Arc::clone(&items),
        });
        Ok(items)
    }

    /// Resolve a channel display name to its id.
    pub async fn channel_id(&self, name: &str) -> Result<String> {
        let channels = self.channels().await?;
        find_channel_by_name(&channels, name)
            .map(|c| c.id.clone())
            .ok_or_else(|| DirectoryError::UnresolvedName {
                kind: TargetKind::Channel,
                name: name.to_owned(),
            })
    }

    /// Resolve a channel id to its display name.
    pub async fn channel_name(&self, id: &str) -> Result<String> {
        let channels = self.channels().await?;
        find_channel_by_id(&channels, id)
            .map(|c| c.name.clone())
            .ok_or_else(|| DirectoryError::UnresolvedName {
                kind: TargetKind::Channel,
                name: id.to_owned(),
            })
    }

    /// Resolve a username or real name to the user's id.
    pub async fn user_id(&self, name: &str) -> Result<String> {
        let users = self.users().await?;
        find_user_by_name(&users, name)
            .map(|u| u.id.clone())
            .ok_or_else(|| DirectoryError::UnresolvedName {
                kind: TargetKind::User,
                name: name.to_owned(),
            })
    }

    /// Resolve a user id to the real name (username when none is set).
    pub async fn user_name(&self, id: &str) -> Result<String> {
        let users = self.users().await?;
        find_user_by_id(&users, id)
            .map(|u| u.display_name().to_owned())
            .ok_or_else(|| DirectoryError::UnresolvedName {
                kind: TargetKind::User,
                name: id.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channels() -> Vec<Channel> {
        vec![
            Channel {
                id: "C1".into(),
                name: "general".into(),
                is_archived: false,
                num_members: None,
            },
            Channel {
                id: "C2".into(),
                name: "dev".into(),
                is_archived: false,
                num_members: None,
            },
            // Duplicate display name: the scan must keep returning C2.
            Channel {
                id: "C3".into(),
                name: "dev".into(),
                is_archived: false,
                num_members: None,
            },
        ]
    }

    fn users() -> Vec<User> {
        vec![
            User {
                id: "U1".into(),
                name: "alice".into(),
                real_name: Some("Alice Smith".into()),
                deleted: false,
            },
            User {
                id: "U2".into(),
                name: "bob".into(),
                real_name: None,
                deleted: false,
            },
        ]
    }

    #[test]
    fn channel_scan_is_exact_and_case_sensitive() {
        let set = channels();
        assert_eq!(find_channel_by_name(&set, "general").unwrap().id, "C1");
        assert!(find_channel_by_name(&set, "General").is_none());
        assert!(find_channel_by_name(&set, "gener").is_none());
    }

    #[test]
    fn duplicate_names_resolve_to_first_in_enumeration_order() {
        let set = channels();
        assert_eq!(find_channel_by_name(&set, "dev").unwrap().id, "C2");
    }

    #[test]
    fn channel_id_scan() {
        let set = channels();
        assert_eq!(find_channel_by_id(&set, "C3").unwrap().name, "dev");
        assert!(find_channel_by_id(&set, "C9").is_none());
    }

    #[test]
    fn user_scan_matches_username_or_real_name() {
        let set = users();
        assert_eq!(find_user_by_name(&set, "alice").unwrap().id, "U1");
        assert_eq!(find_user_by_name(&set, "Alice Smith").unwrap().id, "U1");
        assert!(find_user_by_name(&set, "carol").is_none());
    }

    #[test]
    fn user_id_scan() {
        let set = users();
        assert_eq!(find_user_by_id(&set, "U2").unwrap().name, "bob");
        assert!(find_user_by_id(&set, "U9").is_none());
    }
}
