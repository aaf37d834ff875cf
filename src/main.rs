//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use ff_checker::{
    cli::FfChecker,
    commands::{batch::handle_batch, check_id::handle_check_id},
    output, Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = FfChecker::parse();

    output::banner();

    if app.id.is_none() && app.batch.is_none() {
        eprintln!("Usage: ff-checker <ID>");
        eprintln!("Example: ff-checker 12345678");
        std::process::exit(1);
    }

    // Batch mode takes precedence; a positional ID given alongside it is ignored.
    if let Some(path) = &app.batch {
        handle_batch(path, app.json).await?;
    } else if let Some(id) = &app.id {
        handle_check_id(id, app.json).await?;
    }

    Ok(())
}
