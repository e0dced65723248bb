use crate::api::{SnapshotApi, SnapshotState};
use crate::error::{Result, SnapError};
use crate::ui::{human_duration, IndicatorFactory, Notifier};
use std::time::{Duration, Instant};
use tracing::debug;

/// 스냅샷이 기대한 최종 상태에 도달할 때까지 기다림
///
/// 폴링 자체는 `SnapshotApi`에 맡기고, 여기서는 표시기 수명과 경과 시간 보고만 담당합니다.
pub struct ConvergenceWaiter<'a> {
    api: &'a dyn SnapshotApi,
    notifier: &'a dyn Notifier,
    indicators: &'a dyn IndicatorFactory,
    /// 완료 메시지 앞부분 (예: "Deleted snapshot")
    completed_label: &'a str,
}

impl<'a> ConvergenceWaiter<'a> {
    pub fn new(
        api: &'a dyn SnapshotApi,
        notifier: &'a dyn Notifier,
        indicators: &'a dyn IndicatorFactory,
        completed_label: &'a str,
    ) -> Self {
        Self {
            api,
            notifier,
            indicators,
            completed_label,
        }
    }

    /// `acceptable` 상태 중 하나가 될 때까지 대기하고 배치 시작부터의 경과 시간을 반환
    ///
    /// `indicator`가 Some이면 그 세기로 표시기를 띄우며, 어떤 경로로 끝나든 반환 전에 제거됩니다.
    pub async fn wait(
        &self,
        instance_id: &str,
        name: &str,
        acceptable: &[SnapshotState],
        batch_start: Instant,
        indicator: Option<u32>,
    ) -> Result<Duration> {
        debug_assert!(!acceptable.is_empty());

        let snapshot = {
            let _indicator = indicator.map(|intensity| self.indicators.create(intensity, name));
            self.api
                .wait_for_snapshot_states(instance_id, name, acceptable)
                .await
        }?;

        if !acceptable.contains(&snapshot.state) {
            return Err(SnapError::UnexpectedState {
                name: name.to_string(),
                state: snapshot.state,
            });
        }

        let elapsed = batch_start.elapsed();
        debug!(snapshot = name, state = %snapshot.state, ?elapsed, "snapshot converged");
        self.notifier.info(&format!(
            "{} \"{}\" in {}",
            self.completed_label,
            name,
            human_duration(elapsed)
        ));

        Ok(elapsed)
    }
}
