//! `slx` -- CLI binary for the slackline workspace-directory client.
//!
//! Provides the following subcommands:
//!
//! - `slx channels` -- List, create, archive, and rename channels.
//! - `slx message` -- Post messages.
//! - `slx members` -- List, invite, and remove channel members.
//! - `slx manager` -- Set a channel manager (vendor extension).
//! - `slx users` -- List workspace users.
//! - `slx resolve` -- Translate names to ids and back.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

use commands::{ChannelArg, UserArg};

/// Workspace directory CLI.
#[derive(Parser)]
#[command(name = "slx", about = "Slack workspace directory CLI", version)]
struct Cli {
    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path (overrides auto-discovery).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Bearer token (overrides config file and environment).
    #[arg(long, global = true)]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
enum Commands {
    /// List, create, archive, and rename channels.
    Channels {
        #[command(subcommand)]
        action: ChannelsCmd,
    },

    /// Post messages.
    Message {
        #[command(subcommand)]
        action: MessageCmd,
    },

    /// List, invite, and remove channel members.
    Members {
        #[command(subcommand)]
        action: MembersCmd,
    },

    /// Set a channel manager (vendor extension; may be rejected by the
    /// service).
    Manager {
        #[command(subcommand)]
        action: ManagerCmd,
    },

    /// List workspace users.
    Users {
        #[command(subcommand)]
        action: UsersCmd,
    },

    /// Translate names to ids and back.
    Resolve {
        #[command(subcommand)]
        action: ResolveCmd,
    },
}

/// Subcommands for `slx channels`.
#[derive(Subcommand)]
enum ChannelsCmd {
    /// List all channels.
    List,

    /// Create a channel.
    Create {
        /// Display name for the new channel.
        name: String,
    },

    /// Archive a channel.
    Archive {
        #[command(flatten)]
        channel: ChannelArg,
    },

    /// Rename a channel.
    Rename {
        #[command(flatten)]
        channel: ChannelArg,

        /// The new display name.
        new_name: String,
    },
}

/// Subcommands for `slx message`.
#[derive(Subcommand)]
enum MessageCmd {
    /// Post a message to a channel.
    Send {
        #[command(flatten)]
        channel: ChannelArg,

        /// Message text.
        text: String,
    },
}

/// Subcommands for `slx members`.
#[derive(Subcommand)]
enum MembersCmd {
    /// List the members of a channel.
    List {
        #[command(flatten)]
        channel: ChannelArg,

        /// Resolve member ids to real names.
        #[arg(long)]
        names: bool,
    },

    /// Invite one or more users to a channel (one call for the batch).
    Add {
        #[command(flatten)]
        channel: ChannelArg,

        /// User name to invite. Repeatable.
        #[arg(long = "user")]
        users: Vec<String>,

        /// User id to invite. Repeatable.
        #[arg(long = "user-id")]
        user_ids: Vec<String>,
    },

    /// Remove a user from a channel.
    Remove {
        #[command(flatten)]
        channel: ChannelArg,

        #[command(flatten)]
        user: UserArg,
    },
}

/// Subcommands for `slx manager`.
#[derive(Subcommand)]
enum ManagerCmd {
    /// Set the manager of a channel.
    Set {
        #[command(flatten)]
        channel: ChannelArg,

        #[command(flatten)]
        user: UserArg,
    },
}

/// Subcommands for `slx users`.
#[derive(Subcommand)]
enum UsersCmd {
    /// List all workspace users.
    List,
}

/// Subcommands for `slx resolve`.
#[derive(Subcommand)]
enum ResolveCmd {
    /// Channel name to id.
    ChannelId {
        /// Channel display name.
        name: String,
    },

    /// Channel id to name.
    ChannelName {
        /// Channel id.
        id: String,
    },

    /// Username or real name to user id.
    UserId {
        /// Username or real name.
        name: String,
    },

    /// User id to real name.
    UserName {
        /// User id.
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();

    let config = commands::load_config(cli.config.as_deref())?;
    let ws = commands::connect(&config, cli.token.as_deref())?;

    match cli.command {
        Commands::Channels { action } => match action {
            ChannelsCmd::List => commands::channels::list(&ws).await?,
            ChannelsCmd::Create { name } => commands::channels::create(&ws, &name).await?,
            ChannelsCmd::Archive { channel } => {
                commands::channels::archive(&ws, &channel).await?;
            }
            ChannelsCmd::Rename { channel, new_name } => {
                commands::channels::rename(&ws, &channel, &new_name).await?;
            }
        },
        Commands::Message { action } => match action {
            MessageCmd::Send { channel, text } => {
                commands::message::send(&ws, &channel, &text).await?;
            }
        },
        Commands::Members { action } => match action {
            MembersCmd::List { channel, names } => {
                commands::members::list(&ws, &channel, names).await?;
            }
            MembersCmd::Add {
                channel,
                users,
                user_ids,
            } => {
                commands::members::add(&ws, &channel, &users, &user_ids).await?;
            }
            MembersCmd::Remove { channel, user } => {
                commands::members::remove(&ws, &channel, &user).await?;
            }
        },
        Commands::Manager { action } => match action {
            ManagerCmd::Set { channel, user } => {
                commands::members::set_manager(&ws, &channel, &user).await?;
            }
        },
        Commands::Users { action } => match action {
            UsersCmd::List => commands::users::list(&ws).await?,
        },
        Commands::Resolve { action } => match action {
            ResolveCmd::ChannelId { name } => commands::resolve::channel_id(&ws, &name).await?,
            ResolveCmd::ChannelName { id } => commands::resolve::channel_name(&ws, &id).await?,
            ResolveCmd::UserId { name } => commands::resolve::user_id(&ws, &name).await?,
            ResolveCmd::UserName { id } => commands::resolve::user_name(&ws, &id).await?,
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_message_send() {
        let cli = Cli::parse_from(["slx", "message", "send", "--channel", "general", "hi"]);
        match cli.command {
            Commands::Message {
                action: MessageCmd::Send { channel, text },
            } => {
                assert_eq!(channel.channel.as_deref(), Some("general"));
                assert!(channel.channel_id.is_none());
                assert_eq!(text, "hi");
            }
            _ => panic!("wrong subcommand"),
        }
    }

    #[test]
    fn parses_repeated_member_flags() {
        let cli = Cli::parse_from([
            "slx", "members", "add", "--channel-id", "C1", "--user", "alice", "--user", "bob",
            "--user-id", "U3",
        ]);
        match cli.command {
            Commands::Members {
                action:
                    MembersCmd::Add {
                        channel,
                        users,
                        user_ids,
                    },
            } => {
                assert_eq!(channel.channel_id.as_deref(), Some("C1"));
                assert_eq!(users, vec!["alice", "bob"]);
                assert_eq!(user_ids, vec!["U3"]);
            }
            _ => panic!("wrong subcommand"),
        }
    }
}
