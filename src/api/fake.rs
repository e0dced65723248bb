//! In-memory `SnapshotApi` for unit tests.

use crate::api::{DeletedSnapshot, Snapshot, SnapshotApi, SnapshotState};
use crate::error::{Result, SnapError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::Barrier;

#[derive(Debug, Clone)]
enum WaitScript {
    Settle(SnapshotState),
    Fail(String),
}

#[derive(Default)]
pub struct ScriptedApi {
    delete_failures: HashMap<String, String>,
    wait_scripts: HashMap<String, WaitScript>,
    delete_barrier: Option<Barrier>,
    deletes: Mutex<Vec<String>>,
    waits: Mutex<Vec<(String, String)>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_delete(mut self, name: &str, message: &str) -> Self {
        self.delete_failures.insert(name.to_string(), message.to_string());
        self
    }

    pub fn settle_in(mut self, name: &str, state: SnapshotState) -> Self {
        self.wait_scripts.insert(name.to_string(), WaitScript::Settle(state));
        self
    }

    pub fn fail_wait(mut self, name: &str, message: &str) -> Self {
        self.wait_scripts.insert(name.to_string(), WaitScript::Fail(message.to_string()));
        self
    }

    /// 모든 삭제 호출이 `parties`개 모일 때까지 대기 (동시 실행 검증용)
    pub fn rendezvous_deletes(mut self, parties: usize) -> Self {
        self.delete_barrier = Some(Barrier::new(parties));
        self
    }

    pub fn deletes(&self) -> Vec<String> {
        self.deletes.lock().unwrap().clone()
    }

    /// (instance_id, name) 목록
    pub fn waits(&self) -> Vec<(String, String)> {
        self.waits.lock().unwrap().clone()
    }

    pub fn instance_id_for(container: &str) -> String {
        format!("{}-uuid", container)
    }
}

#[async_trait]
impl SnapshotApi for ScriptedApi {
    async fn delete_snapshot(&self, container: &str, name: &str) -> Result<DeletedSnapshot> {
        self.deletes.lock().unwrap().push(name.to_string());

        if let Some(barrier) = &self.delete_barrier {
            barrier.wait().await;
        }

        match self.delete_failures.get(name) {
            Some(message) => Err(SnapError::Api {
                status: 500,
                message: message.clone(),
            }),
            None => Ok(DeletedSnapshot {
                instance_id: Self::instance_id_for(container),
            }),
        }
    }

    async fn wait_for_snapshot_states(
        &self,
        instance_id: &str,
        name: &str,
        _states: &[SnapshotState],
    ) -> Result<Snapshot> {
        self.waits
            .lock()
            .unwrap()
            .push((instance_id.to_string(), name.to_string()));
        tokio::task::yield_now().await;

        match self.wait_scripts.get(name) {
            Some(WaitScript::Fail(message)) => Err(SnapError::WaitTimeout {
                name: name.to_string(),
                expected: message.clone(),
            }),
            Some(WaitScript::Settle(state)) => Ok(Snapshot::new(name, *state)),
            None => Ok(Snapshot::new(name, SnapshotState::Deleted)),
        }
    }
}
