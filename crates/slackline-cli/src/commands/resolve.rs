//! `slx resolve` -- name / id translation.

use slackline_client::Workspace;

/// Channel name to id.
pub async fn channel_id(ws: &Workspace, name: &str) -> anyhow::Result<()> {
    println!("{}", ws.channel_id(name).await?);
    Ok(())
}

/// Channel id to name.
pub async fn channel_name(ws: &Workspace, id: &str) -> anyhow::Result<()> {
    println!("{}", ws.channel_name(id).await?);
    Ok(())
}

/// Username or real name to id.
pub async fn user_id(ws: &Workspace, name: &str) -> anyhow::Result<()> {
    println!("{}", ws.user_id(name).await?);
    Ok(())
}

/// User id to real name.
pub async fn user_name(ws: &Workspace, id: &str) -> anyhow::Result<()> {
    println!("{}", ws.user_name(id).await?);
    Ok(())
}
