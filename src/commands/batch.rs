//! Batch lookups from a newline-delimited ID file.

use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use colored::Colorize;
use tokio::time::sleep;

use crate::{cli::types::PlayerId, freefire::http::LookupClient, output, Result};


/// Pause between consecutive batch lookups.
pub const BATCH_DELAY: Duration = Duration::from_secs(1);

/// Handle the batch command: read IDs from `path` and look each one up in
/// turn. A missing file is reported on the console and skipped; it is not a
/// process-level error.
pub async fn handle_batch(path: &Path, as_json: bool) -> Result<()> {
    let ids = match read_batch_ids(path) {
        Ok(ids) => ids,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            println!("{} {}", "[!] Batch file not found:".red(), path.display());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("{} Loading {} IDs from batch file", "[*]".cyan(), ids.len());

    let client = LookupClient::new()?;
    run_batch(&client, &ids, as_json).await
}

/// Look up each ID strictly sequentially, sleeping [`BATCH_DELAY`] between
/// consecutive queries.
pub async fn run_batch(client: &LookupClient, ids: &[PlayerId], as_json: bool) -> Result<()> {
    for (i, player_id) in ids.iter().enumerate() {
        println!("\n{}", format!("[{}/{}]", i + 1, ids.len()).magenta());

        let result = client.lookup(player_id).await;
        output::render_result(result.as_ref(), as_json)?;

        if i + 1 < ids.len() {
            sleep(BATCH_DELAY).await;
        }
    }

    Ok(())
}

/// Read IDs from a batch file, trimming lines and skipping blank ones.
pub fn read_batch_ids(path: &Path) -> std::io::Result<Vec<PlayerId>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(PlayerId::new)
        .collect())
}
