pub mod duration;
pub mod notice;
pub mod progress;
pub mod prompt;

pub use duration::human_duration;
pub use notice::{ConsoleNotifier, Notifier};
pub use progress::{create_spinner, IndicatorFactory, IndicatorGuard, SpinnerFactory};
pub use prompt::{Confirmation, ConfirmPrompt, Prompter, TerminalPrompter};
