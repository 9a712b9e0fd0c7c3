use thiserror::Error;

/// Programming errors in the shape of an optimistic action. Raised
/// synchronously before anything is forwarded; never recovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("optimistic action carries no state_key to snapshot")]
    MissingStateKey,
    #[error("callback tentative has no automatic revert path, supply on_error")]
    MissingErrorHandler,
}

/// Failure reported by the caller-supplied mutation. `reason` is carried
/// verbatim on the revert action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct OperationError {
    pub reason: String,
}

impl OperationError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
