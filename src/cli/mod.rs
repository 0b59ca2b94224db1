//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, the window session
//! and the config command.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod events;
pub mod presenter;
pub mod session_input;
pub mod view;
pub mod window;

// Re-export commonly used types
pub use app::{run_window, EXIT_ERROR, EXIT_SUCCESS};
pub use args::{Cli, Commands, ConfigAction, WindowOptions};
pub use events::UiEvent;
pub use presenter::Presenter;
pub use session_input::{SessionInput, SessionInputs};
pub use view::WindowView;
pub use window::{Reply, Window};
