//! ID types for Free Fire lookups.

use crate::error::{FfError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for a Free Fire player ID.
///
/// The ID is an opaque string as far as this tool is concerned; the endpoints
/// accept it verbatim in the URL path. The only validation is non-emptiness.
///
/// # Examples
///
/// ```rust
/// use ff_checker::PlayerId;
///
/// let id: PlayerId = "12345678".parse().unwrap();
/// assert_eq!(id.as_str(), "12345678");
/// assert_eq!(id.to_string(), "12345678");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new PlayerId from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying ID string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = FfError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(FfError::EmptyPlayerId);
        }
        Ok(Self(trimmed.to_string()))
    }
}
