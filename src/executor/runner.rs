use crate::api::{SnapshotApi, SnapshotState};
use crate::error::Result;
use crate::executor::planner::{Target, WaitSpec};
use crate::executor::waiter::ConvergenceWaiter;
use crate::ui::{IndicatorFactory, Notifier};
use std::time::{Duration, Instant};
use tracing::debug;

/// 삭제가 끝났다고 볼 수 있는 상태
const DELETED_STATES: &[SnapshotState] = &[SnapshotState::Deleted];

/// 대상 하나에 대한 삭제 요청 + (선택) 완료 대기
pub struct SnapshotRunner<'a> {
    api: &'a dyn SnapshotApi,
    notifier: &'a dyn Notifier,
    waiter: ConvergenceWaiter<'a>,
    can_show_indicator: bool,
}

impl<'a> SnapshotRunner<'a> {
    pub fn new(
        api: &'a dyn SnapshotApi,
        notifier: &'a dyn Notifier,
        indicators: &'a dyn IndicatorFactory,
        can_show_indicator: bool,
    ) -> Self {
        Self {
            api,
            notifier,
            waiter: ConvergenceWaiter::new(api, notifier, indicators, "Deleted snapshot"),
            can_show_indicator,
        }
    }

    /// 스냅샷 삭제. 성공 시 배치 시작부터의 경과 시간을 반환
    pub async fn execute(&self, target: &Target, wait: WaitSpec, batch_start: Instant) -> Result<Duration> {
        let deleted = self.api.delete_snapshot(&target.container, &target.name).await?;

        self.notifier.info(&format!(
            "Deleting snapshot \"{}\" of instance \"{}\"",
            target.name, deleted.instance_id
        ));

        if !wait.is_waiting() {
            return Ok(batch_start.elapsed());
        }

        debug!(snapshot = %target.name, ?wait, "waiting for deletion");
        self.waiter
            .wait(
                &deleted.instance_id,
                &target.name,
                DELETED_STATES,
                batch_start,
                wait.indicator_intensity(self.can_show_indicator),
            )
            .await
    }
}
