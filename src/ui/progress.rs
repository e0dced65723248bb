use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::time::Duration;

const BRAILLE_TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const BOUNCE_TICKS: &[&str] = &[
    "[=    ]", "[ =   ]", "[  =  ]", "[   = ]", "[    =]", "[   = ]", "[  =  ]", "[ =   ]",
];

/// 대기 중임을 보여주는 표시기
pub trait ProgressIndicator: Send {
    /// 화면에서 표시기 제거
    fn destroy(&mut self);
}

/// 표시기 생성기 (대상별 대기마다 하나씩 생성)
pub trait IndicatorFactory: Send + Sync {
    fn create(&self, intensity: u32, label: &str) -> IndicatorGuard;
}

/// 스코프를 벗어나면 표시기를 정확히 한 번 제거하는 가드
#[must_use = "the indicator is destroyed as soon as the guard is dropped"]
pub struct IndicatorGuard {
    indicator: Option<Box<dyn ProgressIndicator>>,
}

impl IndicatorGuard {
    pub fn new(indicator: Box<dyn ProgressIndicator>) -> Self {
        Self {
            indicator: Some(indicator),
        }
    }
}

impl Drop for IndicatorGuard {
    fn drop(&mut self) {
        if let Some(mut indicator) = self.indicator.take() {
            indicator.destroy();
        }
    }
}

/// 스피너 스타일 (스냅샷 삭제 대기 중)
///
/// `-w`를 많이 줄수록 더 요란한 스피너를 사용합니다.
pub fn create_spinner(message: &str, intensity: u32) -> ProgressBar {
    let (ticks, template, tick_ms) = if intensity >= 3 {
        (BOUNCE_TICKS, "{spinner:.magenta} {msg} ({elapsed})", 60)
    } else {
        (BRAILLE_TICKS, "{spinner:.cyan} {msg}", 80)
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template(template)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(ticks),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(tick_ms));
    spinner
}

/// indicatif 스피너 기반 표시기
pub struct SpinnerIndicator {
    bar: ProgressBar,
    multi: MultiProgress,
}

impl ProgressIndicator for SpinnerIndicator {
    fn destroy(&mut self) {
        self.bar.finish_and_clear();
        self.multi.remove(&self.bar);
    }
}

/// 터미널(stderr)에 스피너를 띄우는 생성기
///
/// 여러 대상이 동시에 대기하므로 모든 스피너를 하나의 `MultiProgress`에 올려
/// 서로 다른 줄에 그립니다.
pub struct SpinnerFactory {
    multi: MultiProgress,
}

impl SpinnerFactory {
    pub fn new(multi: MultiProgress) -> Self {
        Self { multi }
    }

    /// 새 스피너 추가
    pub fn add_spinner(&self, label: &str, intensity: u32) -> ProgressBar {
        let spinner = create_spinner(&format!("Waiting for snapshot \"{}\"", label), intensity);
        self.multi.add(spinner)
    }
}

impl Default for SpinnerFactory {
    fn default() -> Self {
        Self::new(MultiProgress::new())
    }
}

impl IndicatorFactory for SpinnerFactory {
    fn create(&self, intensity: u32, label: &str) -> IndicatorGuard {
        let bar = self.add_spinner(label, intensity);
        IndicatorGuard::new(Box::new(SpinnerIndicator {
            bar,
            multi: self.multi.clone(),
        }))
    }
}

#[cfg(test)]
pub use counting::CountingIndicators;
