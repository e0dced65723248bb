use crate::error::{Result, SnapError};
use crate::ui::notice::Notifier;
use dialoguer::theme::Theme;
use dialoguer::Input;
use std::fmt;
use std::io::{self, BufRead, IsTerminal, Write};
use std::sync::{Arc, Mutex};

/// 확인 결과. 취소는 에러가 아니라 정상 종료입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Proceed,
    Abort,
}

/// 한 줄 질문/응답 (블로킹 스레드에서 호출됨)
pub trait Prompter: Send {
    fn ask(&mut self, message: &str) -> Result<String>;
}

/// 프롬프트 문자열을 그대로 출력하는 테마 (dialoguer 기본 ": " 접미사 제거)
struct BareTheme;

impl Theme for BareTheme {
    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        _default: Option<&str>,
    ) -> fmt::Result {
        write!(f, "{}", prompt)
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        write!(f, "{}{}", prompt, sel)
    }
}

/// 터미널이면 dialoguer로, 아니면 stdin에서 한 줄을 읽음
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, message: &str) -> Result<String> {
        if io::stdin().is_terminal() && io::stderr().is_terminal() {
            let answer = Input::<String>::with_theme(&BareTheme)
                .with_prompt(message)
                .allow_empty(true)
                .interact_text();
            return terminal_answer(answer);
        }

        // Output to stderr to keep stdout for results
        let mut stderr = io::stderr();
        write!(stderr, "{}", message)?;
        stderr.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

/// 터미널 입력 결과 정리. EOF(Ctrl-D)는 빈 응답으로 취급해 취소되게 함
fn terminal_answer(answer: std::result::Result<String, dialoguer::Error>) -> Result<String> {
    match answer {
        Ok(line) => Ok(line),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(String::new()),
        Err(e) => Err(SnapError::Prompt(e.to_string())),
    }
}

pub struct ConfirmPrompt {
    prompter: Arc<Mutex<Box<dyn Prompter>>>,
}

impl ConfirmPrompt {
    pub fn new(prompter: Box<dyn Prompter>) -> Self {
        Self {
            prompter: Arc::new(Mutex::new(prompter)),
        }
    }

    pub fn terminal() -> Self {
        Self::new(Box::new(TerminalPrompter))
    }

    /// 삭제 확인 질문 문자열
    pub fn delete_message(names: &[String]) -> String {
        match names {
            [name] => format!("Delete snapshot \"{}\"? [y/n] ", name),
            _ => format!(
                "Delete {} snapshots ({})? [y/n] ",
                names.len(),
                names.join(", ")
            ),
        }
    }

    /// 삭제 진행 여부 확인. `force`면 묻지 않고 진행
    ///
    /// 입력 대기는 블로킹 스레드에서 이루어집니다.
    pub async fn confirm_delete(
        &self,
        names: &[String],
        force: bool,
        notifier: &dyn Notifier,
    ) -> Result<Confirmation> {
        if force {
            return Ok(Confirmation::Proceed);
        }

        let message = Self::delete_message(names);
        let prompter = Arc::clone(&self.prompter);
        let answer = tokio::task::spawn_blocking(move || {
            let mut prompter = prompter
                .lock()
                .map_err(|_| SnapError::Prompt("prompt is unavailable".to_string()))?;
            prompter.ask(&message)
        })
        .await
        .map_err(|e| SnapError::Prompt(e.to_string()))??;

        if answer.trim() == "y" {
            Ok(Confirmation::Proceed)
        } else {
            notifier.warn("Aborting");
            Ok(Confirmation::Abort)
        }
    }
}

#[cfg(test)]
pub use scripted::ScriptedPrompter;
