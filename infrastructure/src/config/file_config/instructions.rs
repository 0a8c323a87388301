//! Instruction source configuration from TOML (`[instructions]` section)

use serde::{Deserialize, Serialize};

/// Instruction source configuration
///
/// When `dir` is set, instruction text for a (team, dimension) pair is
/// read from `<dir>/<team>_<dimension>.txt` (e.g.
/// `strengths_personal.txt`). Pairs without a file fall back to the
/// built-in chef evaluation defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInstructionsConfig {
    /// Directory holding instruction text files
    pub dir: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_dir() {
        assert_eq!(FileInstructionsConfig::default().dir, None);
    }
}
