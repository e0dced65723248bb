use crate::api::SnapshotState;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapError {
    #[error("CloudAPI error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("CloudAPI request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Instance \"{0}\" not found")]
    InstanceNotFound(String),

    #[error("Instance \"{0}\" matches more than one machine")]
    AmbiguousInstance(String),

    #[error("Timed out waiting for snapshot \"{name}\" to reach state {expected}")]
    WaitTimeout { name: String, expected: String },

    /// 수렴 대기가 에러 없이 끝났지만 허용되지 않은 상태인 경우 (일어나면 안 됨)
    #[error("Snapshot \"{name}\" settled in unexpected state \"{state}\"")]
    UnexpectedState { name: String, state: SnapshotState },

    #[error("Failed to read confirmation: {0}")]
    Prompt(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SnapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_state_names_target() {
        let err = SnapError::UnexpectedState {
            name: "nightly".to_string(),
            state: SnapshotState::Failed,
        };
        let msg = err.to_string();
        assert!(msg.contains("\"nightly\""));
        assert!(msg.contains("failed"));
    }

    #[test]
    fn test_api_error_message() {
        let err = SnapError::Api {
            status: 404,
            message: "snapshot not found".to_string(),
        };
        assert_eq!(err.to_string(), "CloudAPI error (404): snapshot not found");
    }
}
