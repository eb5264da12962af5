//! `slx members` and `slx manager` -- channel membership.

use anyhow::Context;

use slackline_client::Workspace;
use slackline_types::Target;

use super::{ChannelArg, UserArg};

/// List member ids, or real names with `--names`.
pub async fn list(ws: &Workspace, channel: &ChannelArg, names: bool) -> anyhow::Result<()> {
    let target = channel.target()?;
    let members = ws.list_members(&target, names).await?;
    for member in &members {
        println!("{member}");
    }
    Ok(())
}

/// Invite a batch of users in one call.
///
/// `users` are name-form targets, `user_ids` id-form; at least one of
/// the two lists must be non-empty.
pub async fn add(
    ws: &Workspace,
    channel: &ChannelArg,
    users: &[String],
    user_ids: &[String],
) -> anyhow::Result<()> {
    let channel = channel.target()?;

    let targets: Vec<Target> = user_ids
        .iter()
        .map(Target::id)
        .chain(users.iter().map(Target::name))
        .collect();
    if targets.is_empty() {
        anyhow::bail!("no users given; pass --user or --user-id at least once");
    }

    ws.add_members(&channel, &targets)
        .await
        .context("invite failed; no users were added")?;
    println!("invited {} member(s)", targets.len());
    Ok(())
}

/// Remove one user from a channel.
pub async fn remove(ws: &Workspace, channel: &ChannelArg, user: &UserArg) -> anyhow::Result<()> {
    let channel = channel.target()?;
    let user = user.target()?;
    ws.remove_member(&channel, &user).await?;
    println!("removed");
    Ok(())
}

/// Set a channel manager via the vendor-extension endpoint.
pub async fn set_manager(
    ws: &Workspace,
    channel: &ChannelArg,
    user: &UserArg,
) -> anyhow::Result<()> {
    let channel = channel.target()?;
    let user = user.target()?;
    ws.set_manager(&channel, &user)
        .await
        .context("set-manager is a vendor extension; the service may not support it")?;
    println!("manager set");
    Ok(())
}
