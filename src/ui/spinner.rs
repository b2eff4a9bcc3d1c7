//! Progress spinners.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use super::theme::Theme;

/// A progress spinner for blocking package-manager calls.
pub struct ProgressSpinner {
    bar: ProgressBar,
    theme: Theme,
}

impl ProgressSpinner {
    /// Create a visible spinner with a message.
    pub fn new(message: &str, theme: Theme) -> Self {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
            .template("{spinner:.magenta} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));

        Self { bar, theme }
    }

    /// Create a spinner that doesn't draw (for quiet mode or non-TTY).
    ///
    /// Finishing a hidden spinner still prints its final line.
    pub fn hidden(theme: Theme) -> Self {
        Self {
            bar: ProgressBar::hidden(),
            theme,
        }
    }

    pub fn finish_success(&self, msg: &str) {
        self.finish(self.theme.format_success(msg), false);
    }

    pub fn finish_warning(&self, msg: &str) {
        self.finish(self.theme.format_warning(msg), false);
    }

    pub fn finish_error(&self, msg: &str) {
        self.finish(self.theme.format_error(msg), true);
    }

    /// Clear the spinner without leaving a line behind.
    pub fn clear(&self) {
        self.bar.finish_and_clear();
    }

    fn finish(&self, line: String, to_stderr: bool) {
        if self.bar.is_hidden() {
            if to_stderr {
                eprintln!("{}", line);
            } else {
                println!("{}", line);
            }
            return;
        }
        if let Ok(style) = ProgressStyle::default_spinner().template("{msg}") {
            self.bar.set_style(style);
        }
        self.bar.finish_with_message(line);
    }
}
