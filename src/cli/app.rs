//! Window session runner

use std::process::ExitCode;

use crate::application::ports::ConfigStore;
use crate::application::ClippingsUseCase;
use crate::domain::clipping::ClippingStore;
use crate::domain::config::AppConfig;
use crate::infrastructure::{create_clipboard, create_notifier, XdgConfigStore};

use super::args::WindowOptions;
use super::events::UiEvent;
use super::presenter::Presenter;
use super::session_input::{SessionInput, SessionInputs};
use super::window::{Reply, Window};

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;

/// Open the window and process UI events from stdin until closed
pub async fn run_window(options: WindowOptions) -> ExitCode {
    let presenter = Presenter::new();

    let clipboard = create_clipboard(options.clipboard_backend);
    let notifier = create_notifier(options.notify);
    let store = ClippingStore::with_limit(options.max_clippings);
    let mut window = Window::new(ClippingsUseCase::with_store(store, clipboard, notifier));

    let mut inputs = match SessionInputs::stdin() {
        Ok(inputs) => inputs,
        Err(e) => {
            presenter.error(&format!("Failed to open input: {}", e));
            return ExitCode::from(EXIT_ERROR);
        }
    };

    presenter.window(&window.view());

    loop {
        let line = match inputs.recv().await {
            SessionInput::Line(line) => line,
            // End of input closes the window
            SessionInput::Closed => break,
            SessionInput::Interrupted => {
                presenter.info("Interrupted, closing the window");
                break;
            }
            SessionInput::Failed(e) => {
                presenter.error(&format!("Failed to read input: {}", e));
                return ExitCode::from(EXIT_ERROR);
            }
        };

        let event = match line.parse::<UiEvent>() {
            Ok(event) => event,
            Err(e) => {
                presenter.warn(&e.to_string());
                continue;
            }
        };

        match window.dispatch(event).await {
            Reply::Redraw => presenter.window(&window.view()),
            Reply::ShowJson => presenter.window_json(&window.view()),
            Reply::ShowHelp => presenter.help(),
            Reply::Success(message) => presenter.success(&message),
            Reply::Warning(message) => presenter.warn(&message),
            Reply::Ignored => {}
            Reply::Close => break,
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Load and merge configuration from defaults, file and CLI
///
/// Environment overrides arrive through clap and are part of `cli_config`.
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    load_merged_config_from(&XdgConfigStore::new(), cli_config).await
}

/// Merge: defaults < file < cli
pub async fn load_merged_config_from<S: ConfigStore>(store: &S, cli_config: AppConfig) -> AppConfig {
    let file_config = store.load_or_empty().await;

    AppConfig::defaults().merge(file_config).merge(cli_config)
}
