//! Search history management.

use anyhow::{anyhow, Result};
use dialoguer::Confirm;
use pulga_catalog::HistoryId;
use pulga_client::view::{HISTORY_CLEAR_FAILED, HISTORY_DELETE_FAILED};
use pulga_client::ApiError;

use super::{HistoryArgs, HistoryCommand};
use crate::context::Context;

/// Run the history command.
pub async fn run(args: HistoryArgs, ctx: &Context) -> Result<()> {
    let api = ctx.api()?;

    match args.command {
        HistoryCommand::Delete { id } => {
            api.delete_history_item(&HistoryId::new(id.clone()))
                .await
                .map_err(|e| failure(&e, HISTORY_DELETE_FAILED))?;
            ctx.output.success(&format!("Deleted history entry {}", id));
        }
        HistoryCommand::Clear { yes } => {
            if !yes && !ctx.output.is_json() {
                let confirmed = Confirm::new()
                    .with_prompt("Delete the whole search history?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    ctx.output.warn("Cancelled");
                    return Ok(());
                }
            }

            api.clear_history()
                .await
                .map_err(|e| failure(&e, HISTORY_CLEAR_FAILED))?;
            ctx.output.success("Search history cleared");
        }
    }

    Ok(())
}

/// Same wording the view shows for a failed history change.
fn failure(e: &ApiError, fallback: &str) -> anyhow::Error {
    anyhow!(e.user_message(fallback))
}
