//! Free Fire ID Checker
//!
//! A small CLI for looking up Free Fire player metadata (name, level, rank,
//! kill and win counters) from a set of community info endpoints.
//!
//! ## Features
//!
//! - **Endpoint Fallback**: queries a fixed, prioritized list of endpoints
//!   and uses the first one that answers with a usable response
//! - **Response Normalization**: the endpoints disagree on field names and
//!   shapes; responses are folded into one canonical [`PlayerRecord`]
//! - **Batch Mode**: process a newline-delimited file of IDs sequentially
//! - **JSON Output**: emit the canonical record as JSON instead of the
//!   terminal report
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ff_checker::{LookupClient, PlayerId, output};
//!
//! # async fn example() -> ff_checker::Result<()> {
//! let client = LookupClient::new()?;
//! let id: PlayerId = "12345678".parse()?;
//!
//! let result = client.lookup(&id).await;
//! output::display_result(result.as_ref());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod freefire;
pub mod output;

// Re-export commonly used types
pub use cli::types::PlayerId;
pub use error::{FfError, Result};
pub use freefire::http::{LookupClient, DEFAULT_ENDPOINTS};
pub use freefire::record::PlayerRecord;
