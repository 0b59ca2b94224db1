//! CLI presenter for output formatting
//!
//! Status lines go to stderr, program output (the window, config
//! values) goes to stdout.

use colored::*;

use super::events::EVENT_HELP;
use super::view::WindowView;

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Draw the window, followed by the JSON pane when dev tools are open
    pub fn window(&self, view: &WindowView) {
        self.output(&view.render_text());
        if view.dev_tools_open {
            self.window_json(view);
        }
    }

    /// Print the window view model as JSON
    pub fn window_json(&self, view: &WindowView) {
        match view.to_json() {
            Ok(json) => self.output(&json),
            Err(e) => self.error(&format!("Failed to serialize window: {}", e)),
        }
    }

    /// Print the list of window commands
    pub fn help(&self) {
        for line in format_help() {
            self.output(&line);
        }
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Help lines with inputs padded to a common width
fn format_help() -> Vec<String> {
    let width = EVENT_HELP.iter().map(|(input, _)| input.len()).max().unwrap_or(0);
    EVENT_HELP
        .iter()
        .map(|(input, description)| format!("  {:<width$}  {}", input, description, width = width))
        .collect()
}
