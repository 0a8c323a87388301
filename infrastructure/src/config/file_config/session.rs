//! Session configuration from TOML (`[session]` section)
//!
//! Controls the debate loop: turn budget, retry limit, and the per-call
//! generation timeout.

use serde::{Deserialize, Serialize};

/// Session configuration
///
/// # Example
///
/// ```toml
/// [session]
/// turn_budget = 12        # hard cap on turns per team
/// max_retries = 2         # retries after malformed output / timeout
/// timeout_seconds = 120   # per generation call; omit to wait forever
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Maximum turns in one team session
    pub turn_budget: usize,
    /// Retries per turn after a retryable generation failure
    pub max_retries: usize,
    /// Timeout in seconds for a single generation call
    pub timeout_seconds: Option<u64>,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            turn_budget: 12,
            max_retries: 2,
            timeout_seconds: Some(120),
        }
    }
}
