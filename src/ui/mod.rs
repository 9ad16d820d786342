//! Terminal output helpers.
//!
//! Commands write through [`Output`] so `--quiet` is honored in one place;
//! there is no process-global output state. Tabular rendering lives in
//! [`table`].

pub mod table;

pub use table::Table;

use console::style;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show status and result output.
    #[default]
    Normal,
    /// Show results only, no status messages.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

/// Output writer that respects output mode.
#[derive(Debug)]
pub struct Output {
    mode: OutputMode,
}

impl Output {
    /// Create a new output writer.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Write a result line. Always shown.
    pub fn result(&self, msg: &str) {
        println!("{}", msg);
    }

    /// Write a status line if the mode allows it.
    pub fn status(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    /// Write a success message if the mode allows it.
    pub fn success(&self, msg: &str) {
        if self.mode.shows_status() {
            println!("{} {}", style("✓").green(), msg);
        }
    }

    /// Write an error message. Always shown, on stderr.
    pub fn error(&self, msg: &str) {
        eprintln!("{} {}", style("Error:").red().bold(), msg);
    }
}
