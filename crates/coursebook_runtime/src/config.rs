//! Configuration for the interactive runtime.

use chrono::format::{Item, StrftimeItems};

use crate::error::{CommandError, Result};

/// Date format used when the user does not choose one.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Configuration for the REPL and the binary.
///
/// Controls presentation, history, and logging.
#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Whether to print the welcome banner.
    pub show_banner: bool,

    /// Primary prompt.
    pub prompt: String,

    /// `strftime` format for registration dates in views.
    pub date_format: String,

    /// Maximum number of history entries kept by the line editor.
    pub history_size: usize,

    /// Raise the default log level to `debug`.
    pub verbose: bool,

    /// Emit logs as JSON lines instead of compact text.
    pub json_logs: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            show_banner: true,
            prompt: "coursebook> ".to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            history_size: 1000,
            verbose: false,
            json_logs: false,
        }
    }
}

impl RuntimeConfig {
    /// Creates a configuration for running scripts without a terminal.
    #[must_use]
    pub fn batch() -> Self {
        Self {
            show_banner: false,
            ..Self::default()
        }
    }

    /// Builder method to show or hide the banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builder method to set the date format.
    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Builder method to enable/disable verbose logging.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Builder method to enable/disable JSON logs.
    #[must_use]
    pub fn with_json_logs(mut self, json: bool) -> Self {
        self.json_logs = json;
        self
    }

    /// Checks values that would otherwise fail later, at render time.
    pub fn validate(&self) -> Result<()> {
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(CommandError::InvalidConfig(format!(
                "bad date format {:?}",
                self.date_format
            )));
        }
        if self.history_size == 0 {
            return Err(CommandError::InvalidConfig(
                "history size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
