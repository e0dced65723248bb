use crate::api::SnapshotApi;
use crate::error::{Result, SnapError};
use crate::executor::planner::{DeletePlan, Target};
use crate::executor::runner::SnapshotRunner;
use crate::ui::{Confirmation, ConfirmPrompt, IndicatorFactory, Notifier};
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// 대상 하나의 실행 결과
#[derive(Debug)]
pub struct TargetResult {
    /// 입력 순서상 위치
    pub index: usize,
    pub target: Target,
    /// 성공 시 배치 시작부터의 경과 시간
    pub outcome: std::result::Result<Duration, SnapError>,
}

impl TargetResult {
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// 배치 실행 결과
#[derive(Debug)]
pub struct BatchResult {
    /// 완료 순서대로 정렬된 개별 결과
    pub results: Vec<TargetResult>,
    /// 전체 실행 시간
    pub total_duration: Duration,
}

impl BatchResult {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.succeeded()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.total() - self.success_count()
    }

    /// 모든 작업이 성공했는지 확인
    pub fn all_succeeded(&self) -> bool {
        self.results.iter().all(TargetResult::succeeded)
    }

    /// 실패한 대상들
    pub fn failed_targets(&self) -> Vec<&TargetResult> {
        self.results.iter().filter(|r| !r.succeeded()).collect()
    }

    /// 배치 전체 결과로 축약. 실패가 있으면 가장 먼저 끝난 실패의 에러만 반환
    pub fn into_result(self) -> Result<()> {
        match self.results.into_iter().find_map(|r| r.outcome.err()) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// 확인 후 모든 대상을 동시에 삭제하는 배치 실행기
pub struct BatchExecutor {
    api: Arc<dyn SnapshotApi>,
    notifier: Arc<dyn Notifier>,
    indicators: Arc<dyn IndicatorFactory>,
    /// 표시기를 보여줄 수 있는 터미널인지
    can_show_indicator: bool,
}

impl BatchExecutor {
    pub fn new(
        api: Arc<dyn SnapshotApi>,
        notifier: Arc<dyn Notifier>,
        indicators: Arc<dyn IndicatorFactory>,
    ) -> Self {
        Self {
            api,
            notifier,
            indicators,
            can_show_indicator: false,
        }
    }

    pub fn with_indicator_capability(mut self, can_show_indicator: bool) -> Self {
        self.can_show_indicator = can_show_indicator;
        self
    }

    /// 확인 → 병렬 삭제 → 결과 축약
    ///
    /// 사용자가 취소하면 아무 작업 없이 `Ok(())`를 반환합니다.
    pub async fn run(&self, plan: &DeletePlan, prompt: &ConfirmPrompt) -> Result<()> {
        let confirmation = prompt
            .confirm_delete(&plan.names(), plan.force, self.notifier.as_ref())
            .await?;

        if confirmation == Confirmation::Abort {
            debug!("deletion declined, nothing to do");
            return Ok(());
        }

        let batch_result = self.execute(plan).await;
        info!(
            total = batch_result.total(),
            failed = batch_result.failure_count(),
            elapsed = ?batch_result.total_duration,
            "batch finished"
        );

        batch_result.into_result()
    }

    /// 모든 대상을 동시에 실행하고 결과를 모두 수집
    ///
    /// 한 대상의 실패는 다른 대상을 취소하거나 막지 않습니다.
    pub async fn execute(&self, plan: &DeletePlan) -> BatchResult {
        let batch_start = Instant::now();
        let runner = SnapshotRunner::new(
            self.api.as_ref(),
            self.notifier.as_ref(),
            self.indicators.as_ref(),
            self.can_show_indicator,
        );
        let runner = &runner;

        let mut pending: FuturesUnordered<_> = plan
            .targets
            .iter()
            .enumerate()
            .map(move |(index, target)| async move {
                debug!(snapshot = %target.name, "dispatching");
                let outcome = runner.execute(target, plan.wait, batch_start).await;

                if let Err(e) = &outcome {
                    self.notifier.error(&format!(
                        "Failed to delete snapshot \"{}\": {}",
                        target.name, e
                    ));
                }

                TargetResult {
                    index,
                    target: target.clone(),
                    outcome,
                }
            })
            .collect();

        let mut results = Vec::with_capacity(plan.target_count());
        while let Some(result) = pending.next().await {
            results.push(result);
        }

        BatchResult {
            results,
            total_duration: batch_start.elapsed(),
        }
    }
}
