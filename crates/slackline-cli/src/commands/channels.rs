//! `slx channels` -- list, create, archive, and rename channels.

use comfy_table::{presets::UTF8_FULL, Table};

use slackline_client::Workspace;

use super::ChannelArg;

/// Display all channels as a table.
pub async fn list(ws: &Workspace) -> anyhow::Result<()> {
    let channels = ws.list_channels().await?;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["ID", "NAME", "ARCHIVED", "MEMBERS"]);
    for ch in &channels {
        table.add_row([
            ch.id.as_str(),
            ch.name.as_str(),
            if ch.is_archived { "yes" } else { "" },
            &ch.num_members.map(|n| n.to_string()).unwrap_or_default(),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Create a channel and report its id.
pub async fn create(ws: &Workspace, name: &str) -> anyhow::Result<()> {
    let ch = ws.create_channel(name).await?;
    println!("created #{} ({})", ch.name, ch.id);
    Ok(())
}

/// Archive a channel.
pub async fn archive(ws: &Workspace, channel: &ChannelArg) -> anyhow::Result<()> {
    let target = channel.target()?;
    ws.archive_channel(&target).await?;
    println!("archived");
    Ok(())
}

/// Rename a channel.
pub async fn rename(ws: &Workspace, channel: &ChannelArg, new_name: &str) -> anyhow::Result<()> {
    let target = channel.target()?;
    let ch = ws.rename_channel(&target, new_name).await?;
    println!("renamed to #{} ({})", ch.name, ch.id);
    Ok(())
}
