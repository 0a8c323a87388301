//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};

/// Output configuration
///
/// # Example
///
/// ```toml
/// [output]
/// color = true
/// transcript_file = "panel-transcript.jsonl"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
    /// Path for the JSONL debate transcript; omit to disable
    pub transcript_file: Option<String>,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            transcript_file: None,
        }
    }
}
