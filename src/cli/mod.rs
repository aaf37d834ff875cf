//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::Parser;
use types::PlayerId;

#[derive(Debug, Parser)]
#[clap(name = "ff-checker", about = "Free Fire ID Checker", version)]
pub struct FfChecker {
    /// Free Fire player ID (8-12 digits).
    pub id: Option<PlayerId>,

    /// Batch file with one player ID per line (blank lines are skipped).
    #[clap(long, short)]
    pub batch: Option<PathBuf>,

    /// Output the canonical record as JSON instead of the text report.
    #[clap(long)]
    pub json: bool,
}
