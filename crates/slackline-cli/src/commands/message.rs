//! `slx message` -- post messages.

use slackline_client::Workspace;

use super::ChannelArg;

/// Post a message and report its timestamp.
pub async fn send(ws: &Workspace, channel: &ChannelArg, text: &str) -> anyhow::Result<()> {
    let target = channel.target()?;
    let ts = ws.send_message(&target, text).await?;
    println!("sent ({ts})");
    Ok(())
}
