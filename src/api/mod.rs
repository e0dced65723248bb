pub mod cloudapi;
#[cfg(test)]
pub mod fake;

use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use cloudapi::CloudApiClient;

/// CloudAPI가 보고하는 스냅샷 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotState {
    Queued,
    Creating,
    Created,
    Failed,
    Deleted,
    /// 이 클라이언트가 모르는 상태
    #[serde(other)]
    Unknown,
}

impl SnapshotState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SnapshotState::Queued => "queued",
            SnapshotState::Creating => "creating",
            SnapshotState::Created => "created",
            SnapshotState::Failed => "failed",
            SnapshotState::Deleted => "deleted",
            SnapshotState::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SnapshotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 상태 목록을 메시지용 문자열로 변환 (예: "deleted or failed")
pub fn describe_states(states: &[SnapshotState]) -> String {
    states
        .iter()
        .map(|s| format!("\"{}\"", s))
        .collect::<Vec<_>>()
        .join(" or ")
}

/// 인스턴스 스냅샷
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub name: String,
    pub state: SnapshotState,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,
}

impl Snapshot {
    pub fn new(name: &str, state: SnapshotState) -> Self {
        Self {
            name: name.to_string(),
            state,
            created: None,
            updated: None,
        }
    }
}

/// 삭제 요청이 받아들여진 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedSnapshot {
    /// 컨테이너 이름/짧은 ID를 해석한 실제 인스턴스 UUID
    pub instance_id: String,
}

/// Snapshot operations the batch deleter depends on.
///
/// Implementations must be safe to call concurrently for distinct snapshot
/// names on the same instance.
#[async_trait]
pub trait SnapshotApi: Send + Sync {
    /// Request deletion of snapshot `name` on `container` (name, short id or UUID).
    async fn delete_snapshot(&self, container: &str, name: &str) -> Result<DeletedSnapshot>;

    /// Block until the snapshot reaches one of `states`, an error occurs or
    /// the implementation gives up. Returns the last observed snapshot.
    async fn wait_for_snapshot_states(
        &self,
        instance_id: &str,
        name: &str,
        states: &[SnapshotState],
    ) -> Result<Snapshot>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_deserialization() {
        let json = r#"{
            "name": "before-upgrade",
            "state": "created",
            "created": "2024-03-01T10:00:00.000Z",
            "updated": "2024-03-01T10:00:05.000Z"
        }"#;

        let snap: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snap.name, "before-upgrade");
        assert_eq!(snap.state, SnapshotState::Created);
        assert!(snap.created.is_some());
    }

    #[test]
    fn test_unknown_state() {
        let snap: Snapshot =
            serde_json::from_str(r#"{"name": "x", "state": "exploding"}"#).unwrap();
        assert_eq!(snap.state, SnapshotState::Unknown);
        assert!(snap.updated.is_none());
    }

    #[test]
    fn test_describe_states() {
        assert_eq!(describe_states(&[SnapshotState::Deleted]), "\"deleted\"");
        assert_eq!(
            describe_states(&[SnapshotState::Created, SnapshotState::Failed]),
            "\"created\" or \"failed\""
        );
    }
}
