use colored::*;
use indicatif::MultiProgress;

/// 사용자에게 보여주는 한 줄 메시지 출력
///
/// 여러 대상이 동시에 메시지를 남기므로 각 호출은 한 줄 단위로 원자적이어야 합니다.
pub trait Notifier: Send + Sync {
    /// 진행/결과 메시지 (stdout)
    fn info(&self, message: &str);

    /// 취소 등 안내 메시지 (stderr)
    fn warn(&self, message: &str);

    /// 대상별 실패 메시지 (stderr)
    fn error(&self, message: &str);
}

/// 터미널 출력용 Notifier
///
/// 스피너가 떠 있는 동안에는 `MultiProgress::suspend`로 스피너를 잠시 지우고 출력합니다.
pub struct ConsoleNotifier {
    progress: Option<MultiProgress>,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self { progress: None }
    }

    /// 스피너와 같은 화면을 공유
    pub fn with_progress(mut self, progress: MultiProgress) -> Self {
        self.progress = Some(progress);
        self
    }

    fn emit(&self, print: impl FnOnce()) {
        match &self.progress {
            Some(multi) => multi.suspend(print),
            None => print(),
        }
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ConsoleNotifier {
    fn info(&self, message: &str) {
        // println!은 stdout 잠금을 잡고 한 줄을 씀
        self.emit(|| println!("{}", message));
    }

    fn warn(&self, message: &str) {
        self.emit(|| eprintln!("{}", message));
    }

    fn error(&self, message: &str) {
        self.emit(|| eprintln!("{} {}", "[X]".red(), message));
    }
}

#[cfg(test)]
pub use memory::{MemoryNotifier, Notice};
