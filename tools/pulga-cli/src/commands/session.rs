//! Stored token management.

use anyhow::Result;
use pulga_cache::SessionStore;
use serde_json::json;

use super::{SessionArgs, SessionCommand};
use crate::context::Context;

/// Run the session command.
pub async fn run(args: SessionArgs, ctx: &Context) -> Result<()> {
    let store = ctx.session_store()?;

    match args.command {
        SessionCommand::Show => show(&store, ctx),
        SessionCommand::Set { value, auth } => {
            if auth {
                store.set_auth_token(&value);
                ctx.output.success("Auth token stored");
            } else {
                store.set_session_id(&value);
                ctx.output.success("Session id stored");
            }
        }
        SessionCommand::Clear { auth, all } => {
            if all || !auth {
                store.clear_session_id();
            }
            if all || auth {
                store.clear_auth_token();
            }
            ctx.output.success("Cleared");
        }
    }

    Ok(())
}

fn show(store: &SessionStore, ctx: &Context) {
    let session_id = store.session_id();
    let auth_token = store.auth_token();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "session_id": session_id,
            "auth_token": auth_token.as_deref().map(mask),
        }));
        return;
    }

    ctx.output.header("Session");
    ctx.output
        .kv("session_id", session_id.as_deref().unwrap_or("(none)"));
    ctx.output.kv(
        "auth_token",
        &auth_token.as_deref().map(mask).unwrap_or_else(|| "(none)".to_string()),
    );
    ctx.output
        .kv("store", &ctx.config.store_path().display().to_string());
}

/// Show only the last four characters of a secret.
fn mask(token: &str) -> String {
    let count = token.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = token.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask() {
        assert_eq!(mask("abc"), "***");
        assert_eq!(mask("secret-token"), "********oken");
    }
}
