//! Single-identifier lookup command.

use crate::{cli::types::PlayerId, freefire::http::LookupClient, output, Result};

/// Handle the single-ID command: one lookup, one report.
pub async fn handle_check_id(player_id: &PlayerId, as_json: bool) -> Result<()> {
    let client = LookupClient::new()?;
    let result = client.lookup(player_id).await;
    output::render_result(result.as_ref(), as_json)
}
