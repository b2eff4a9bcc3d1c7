//! Output mode and writer.

use super::spinner::ProgressSpinner;
use super::theme::Theme;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show status, spinners, and results.
    #[default]
    Normal,
    /// Show results and errors only.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Check if this mode shows informational messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

/// Output writer that respects output mode.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
    theme: Theme,
    interactive: bool,
}

impl Output {
    /// Create a writer with theme and interactivity detected from the terminal.
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            theme: Theme::detect(),
            interactive: console::Term::stdout().is_term(),
        }
    }

    /// Create a writer with an explicit theme and no spinners.
    pub fn with_theme(mode: OutputMode, theme: Theme) -> Self {
        Self {
            mode,
            theme,
            interactive: false,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Informational line, suppressed in quiet mode.
    pub fn message(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    pub fn header(&self, title: &str) {
        if self.mode.shows_status() {
            println!("{}", self.theme.format_header(title));
        }
    }

    /// Result lines are always printed.
    pub fn success(&self, msg: &str) {
        println!("{}", self.theme.format_success(msg));
    }

    pub fn warning(&self, msg: &str) {
        println!("{}", self.theme.format_warning(msg));
    }

    pub fn error(&self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    /// Raw line, always printed (used for JSON).
    pub fn raw(&self, text: &str) {
        println!("{}", text);
    }

    /// Start a spinner, hidden unless interactive and in normal mode.
    pub fn spinner(&self, message: &str) -> ProgressSpinner {
        if self.interactive && self.mode.shows_spinners() {
            ProgressSpinner::new(message, self.theme.clone())
        } else {
            ProgressSpinner::hidden(self.theme.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_hides_status_and_spinners() {
        assert!(!OutputMode::Quiet.shows_status());
        assert!(!OutputMode::Quiet.shows_spinners());
        assert!(OutputMode::Normal.shows_status());
    }

    #[test]
    fn output_mode_default() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }

    #[test]
    fn non_interactive_output_uses_hidden_spinner() {
        let output = Output::with_theme(OutputMode::Normal, Theme::plain());
        let spinner = output.spinner("Checking");
        spinner.finish_success("Checked");
    }
}
