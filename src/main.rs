//! Clipmaster 9000 CLI entry point

use std::process::ExitCode;

use clap::Parser;

use clipmaster::cli::{
    app::{load_merged_config, run_window, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
    WindowOptions,
};
use clipmaster::domain::config::{AppConfig, ClipboardBackend};
use clipmaster::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let notify = cli.notify_override();
    let presenter = Presenter::new();

    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Build CLI config from args
    let cli_config = AppConfig {
        clipboard_backend: cli
            .clipboard
            .map(|b| ClipboardBackend::from(b).to_string()),
        notify,
        max_clippings: cli.max_clippings,
    };

    let config = load_merged_config(cli_config).await;

    let options = WindowOptions {
        clipboard_backend: config.clipboard_backend_or_default(),
        notify: config.notify_or_default(),
        max_clippings: config.max_clippings_or_default(),
    };

    run_window(options).await
}
