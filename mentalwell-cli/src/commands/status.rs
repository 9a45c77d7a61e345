//! Status command - shows the stored session and assessment completion.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};
use mentalwell_core::session;

use super::build_client;

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Backend base URL, overriding config and environment
    #[arg(long)]
    pub api_url: Option<String>,

    /// Skip the backend and only show the local session
    #[arg(long)]
    pub local: bool,
}

fn yes_no(value: bool) -> Cell {
    if value {
        Cell::new("yes").fg(Color::Green)
    } else {
        Cell::new("no").fg(Color::Yellow)
    }
}

pub async fn run(args: StatusArgs) -> Result<()> {
    let api = build_client(args.api_url.as_deref())?;
    let store = api.store();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    match store.username() {
        Some(email) => {
            table.add_row(vec![Cell::new("Account"), Cell::new(email)]);
            let valid = session::token_is_valid(store);
            table.add_row(vec![Cell::new("Session valid"), yes_no(valid)]);
            if let Some(token) = store.access_token()
                && let Ok(claims) = session::decode_claims(&token)
                && let Some(expiry) = DateTime::<Utc>::from_timestamp(claims.exp, 0)
            {
                table.add_row(vec![
                    Cell::new("Session expires"),
                    Cell::new(expiry.to_rfc3339()),
                ]);
            }

            if !args.local && valid {
                let cognitive = api.cognitive_status().await?;
                table.add_row(vec![
                    Cell::new("Cognitive test taken"),
                    yes_no(cognitive.has_completed_test),
                ]);
                if let Some(completed_at) = cognitive.completed_at {
                    table.add_row(vec![Cell::new("  completed at"), Cell::new(completed_at)]);
                }
                let emotion = api.emotion_status().await?;
                table.add_row(vec![
                    Cell::new("Emotion analysis taken"),
                    yes_no(!emotion.data.is_empty()),
                ]);
            }
        }
        None => {
            table.add_row(vec![
                Cell::new("Account"),
                Cell::new("not logged in").fg(Color::Yellow),
            ]);
        }
    }

    println!("{table}");
    Ok(())
}
