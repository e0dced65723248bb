use crate::api::CloudApiClient;
use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::executor::{BatchExecutor, DeletePlan, WaitSpec};
use crate::ui::{ConfirmPrompt, ConsoleNotifier, SpinnerFactory};
use indicatif::MultiProgress;
use std::io::{self, IsTerminal};
use std::sync::Arc;
use tracing::debug;

/// `snapdel <inst> <snapname>...` 실행
pub async fn execute_delete(cli: &Cli, config: &Config) -> Result<()> {
    config.validate()?;

    let plan = DeletePlan::new(&cli.container, &cli.names, WaitSpec::from_count(cli.wait), cli.force);
    debug!(?plan, "delete plan");

    let api = CloudApiClient::new(config)?;
    // 스피너와 알림이 같은 화면을 공유
    let progress = MultiProgress::new();
    let executor = BatchExecutor::new(
        Arc::new(api),
        Arc::new(ConsoleNotifier::new().with_progress(progress.clone())),
        Arc::new(SpinnerFactory::new(progress)),
    )
    // 스피너는 stderr에 그려짐
    .with_indicator_capability(io::stderr().is_terminal());

    let prompt = ConfirmPrompt::terminal();
    executor.run(&plan, &prompt).await
}
