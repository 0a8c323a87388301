//! Shared utilities for use cases.

use crate::use_cases::run_session::RunSessionError;
use tokio_util::sync::CancellationToken;

/// Check if cancellation has been requested.
///
/// Returns `Err(RunSessionError::Cancelled)` if the token exists and is
/// cancelled. Called before invoking a speaker and again before appending
/// its turn, so a cancelled session never records a partially-applied turn.
pub(crate) fn check_cancelled(token: &Option<CancellationToken>) -> Result<(), RunSessionError> {
    if let Some(token) = token
        && token.is_cancelled()
    {
        return Err(RunSessionError::Cancelled);
    }
    Ok(())
}
