//! Model CLI subprocess client
//!
//! Spawns the configured model command once per generation call, writes
//! the request as a single JSON line to its stdin, and reads the JSON
//! response from its stdout. Timeout and retry policy live in the
//! application layer; this client only runs one process to completion.

use super::error::ModelCliError;
use super::protocol::{GenerateRequest, GenerateResponse};
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

/// One-shot subprocess client for a model CLI
pub struct ModelCliClient {
    command: String,
}

impl ModelCliClient {
    /// Create a client without checking that the command exists
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// Create a client, verifying the command's program is on PATH
    pub fn resolve(command: impl Into<String>) -> Result<Self, ModelCliError> {
        let command = command.into();
        let program = command
            .split_whitespace()
            .next()
            .ok_or(ModelCliError::EmptyCommand)?;
        which::which(program)
            .map_err(|_| ModelCliError::CommandNotFound(program.to_string()))?;
        Ok(Self { command })
    }

    /// The configured command line
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Run one generation call to completion
    pub async fn complete(&self, request: &GenerateRequest) -> Result<String, ModelCliError> {
        let payload = serde_json::to_string(request)?;
        debug!("Spawning model command: {}", self.command);

        let mut child = Command::new("sh")
            .args(["-c", &self.command])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            // A command that never reads stdin closes the pipe early;
            // that is its business, not an error.
            match stdin.write_all(payload.as_bytes()).await {
                Ok(()) => {
                    let _ = stdin.write_all(b"\n").await;
                }
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
                Err(e) => return Err(e.into()),
            }
        }

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            return Err(ModelCliError::NonZeroExit {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Self::parse_response(&stdout)?.into_content()
    }

    /// Parse the CLI's stdout into a response envelope
    ///
    /// The whole (trimmed) output is tried first; commands that print
    /// banners before the JSON line are tolerated by falling back to the
    /// last non-empty line.
    fn parse_response(stdout: &str) -> Result<GenerateResponse, ModelCliError> {
        let trimmed = stdout.trim();
        match serde_json::from_str(trimmed) {
            Ok(response) => Ok(response),
            Err(first_error) => trimmed
                .lines()
                .rev()
                .find(|line| !line.trim().is_empty())
                .and_then(|line| serde_json::from_str(line.trim()).ok())
                .ok_or_else(|| ModelCliError::ParseError {
                    error: first_error.to_string(),
                    raw: trimmed.to_string(),
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> GenerateRequest {
        GenerateRequest {
            model: "test-model".to_string(),
            system: "system".to_string(),
            prompt: "prompt".to_string(),
            tools: vec![],
        }
    }

    #[test]
    fn test_resolve_known_and_unknown_commands() {
        assert!(ModelCliClient::resolve("sh -c true").is_ok());
        assert!(matches!(
            ModelCliClient::resolve("definitely-not-a-real-binary"),
            Err(ModelCliError::CommandNotFound(_))
        ));
        assert!(matches!(
            ModelCliClient::resolve("   "),
            Err(ModelCliError::EmptyCommand)
        ));
    }

    #[tokio::test]
    async fn test_complete_reads_content() {
        let client = ModelCliClient::new(r#"printf %s '{"content": "hello"}'"#);
        let content = client.complete(&request()).await.unwrap();
        assert_eq!(content, "hello");
    }

    #[tokio::test]
    async fn test_complete_skips_banner_lines() {
        let client =
            ModelCliClient::new(r#"printf '%s\n%s\n' 'model-cli v1.0' '{"content": "hi"}'"#);
        let content = client.complete(&request()).await.unwrap();
        assert_eq!(content, "hi");
    }

    #[tokio::test]
    async fn test_complete_surfaces_cli_error() {
        let client = ModelCliClient::new(r#"printf %s '{"error": "quota exceeded"}'"#);
        let error = client.complete(&request()).await.unwrap_err();
        assert!(matches!(error, ModelCliError::Backend(msg) if msg == "quota exceeded"));
    }

    #[tokio::test]
    async fn test_complete_nonzero_exit() {
        let client = ModelCliClient::new("exit 3");
        let error = client.complete(&request()).await.unwrap_err();
        assert!(matches!(
            error,
            ModelCliError::NonZeroExit { status: 3, .. }
        ));
    }

    #[tokio::test]
    async fn test_complete_rejects_unparseable_output() {
        let client = ModelCliClient::new("echo not json at all");
        let error = client.complete(&request()).await.unwrap_err();
        assert!(matches!(error, ModelCliError::ParseError { .. }));
    }

    #[tokio::test]
    async fn test_echoed_request_is_not_a_response() {
        // `cat` echoes the request envelope, which has no content field.
        let client = ModelCliClient::new("cat");
        let error = client.complete(&request()).await.unwrap_err();
        assert!(matches!(error, ModelCliError::EmptyResponse));
    }
}
