//! `slx users` -- workspace user listing.

use comfy_table::{presets::UTF8_FULL, Table};

use slackline_client::Workspace;

/// Display all users as a table.
pub async fn list(ws: &Workspace) -> anyhow::Result<()> {
    let users = ws.list_users().await?;

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["ID", "USERNAME", "REAL NAME", "DELETED"]);
    for user in &users {
        table.add_row([
            user.id.as_str(),
            user.name.as_str(),
            user.real_name.as_deref().unwrap_or(""),
            if user.deleted { "yes" } else { "" },
        ]);
    }
    println!("{table}");
    Ok(())
}
