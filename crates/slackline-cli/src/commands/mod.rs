//! Command implementations and shared CLI plumbing.

pub mod channels;
pub mod members;
pub mod message;
pub mod resolve;
pub mod users;

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use slackline_client::Workspace;
use slackline_types::error::TargetKind;
use slackline_types::{SecretString, Target, WorkspaceConfig};

/// A channel addressed by exactly one of `--channel` / `--channel-id`.
///
/// The exactly-one rule is enforced by the library, not by clap, so the
/// error comes back in the same taxonomy as every other usage error.
#[derive(Debug, clap::Args)]
pub struct ChannelArg {
    /// Channel display name.
    #[arg(long)]
    pub channel: Option<String>,

    /// Channel id.
    #[arg(long)]
    pub channel_id: Option<String>,
}

impl ChannelArg {
    /// Validate into a [`Target`].
    pub fn target(&self) -> slackline_types::error::Result<Target> {
        Target::from_parts(
            TargetKind::Channel,
            self.channel_id.as_deref(),
            self.channel.as_deref(),
        )
    }
}

/// A user addressed by exactly one of `--user` / `--user-id`.
#[derive(Debug, clap::Args)]
pub struct UserArg {
    /// Username or real name.
    #[arg(long)]
    pub user: Option<String>,

    /// User id.
    #[arg(long)]
    pub user_id: Option<String>,
}

impl UserArg {
    /// Validate into a [`Target`].
    pub fn target(&self) -> slackline_types::error::Result<Target> {
        Target::from_parts(
            TargetKind::User,
            self.user_id.as_deref(),
            self.user.as_deref(),
        )
    }
}

/// Default config location: `~/.config/slackline/config.toml`.
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("slackline").join("config.toml"))
}

/// Load configuration.
///
/// An explicit `--config` path must exist and parse. Without one, the
/// default location is used when present, and built-in defaults
/// otherwise.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<WorkspaceConfig> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => match default_config_path() {
            Some(p) => (p, false),
            None => return Ok(WorkspaceConfig::default()),
        },
    };

    if !path.exists() {
        if required {
            anyhow::bail!("config file not found: {}", path.display());
        }
        return Ok(WorkspaceConfig::default());
    }

    debug!(path = %path.display(), "loading config");
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config: WorkspaceConfig =
        toml::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(config)
}

/// Build a connected [`Workspace`] from config plus the optional
/// `--token` override.
pub fn connect(config: &WorkspaceConfig, token_flag: Option<&str>) -> anyhow::Result<Workspace> {
    let token = match token_flag {
        Some(t) => SecretString::new(t),
        None => config.resolve_token().context(
            "no token configured; pass --token, set it in the config file, or export SLACK_TOKEN",
        )?,
    };
    Ok(Workspace::connect(config, token)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use slackline_types::DirectoryError;

    #[test]
    fn channel_arg_validates_exactly_one() {
        let arg = ChannelArg {
            channel: Some("general".into()),
            channel_id: None,
        };
        assert_eq!(arg.target().unwrap(), Target::Name("general".into()));

        let arg = ChannelArg {
            channel: Some("general".into()),
            channel_id: Some("C1".into()),
        };
        assert!(matches!(
            arg.target().unwrap_err(),
            DirectoryError::AmbiguousInput { .. }
        ));

        let arg = ChannelArg {
            channel: None,
            channel_id: None,
        };
        assert!(matches!(
            arg.target().unwrap_err(),
            DirectoryError::MissingInput { .. }
        ));
    }

    #[test]
    fn user_arg_validates_exactly_one() {
        let arg = UserArg {
            user: None,
            user_id: Some("U1".into()),
        };
        assert_eq!(arg.target().unwrap(), Target::Id("U1".into()));
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/slackline.toml"))).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
