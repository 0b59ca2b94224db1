//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::config::ClipboardBackend;

/// Clipmaster 9000 - keep snippets of your clipboard
#[derive(Parser, Debug)]
#[command(name = "clipmaster")]
#[command(version)]
#[command(about = "Clipmaster 9000: save clipboard snippets and copy them back later")]
#[command(long_about = None)]
pub struct Cli {
    /// Clipboard backend to use
    #[arg(short = 'b', long = "clipboard", value_name = "BACKEND", env = "CLIPMASTER_CLIPBOARD")]
    pub clipboard: Option<BackendArg>,

    /// Show desktop notifications when the clipboard fails
    #[arg(short = 'n', long)]
    pub notify: bool,

    /// Turn notifications off for this session, whatever the config says
    #[arg(long, conflicts_with = "notify")]
    pub no_notify: bool,

    /// Keep at most this many clippings (0 = unlimited)
    #[arg(short = 'm', long, value_name = "N")]
    pub max_clippings: Option<usize>,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Notification setting given on the command line, if any
    pub fn notify_override(&self) -> Option<bool> {
        match (self.notify, self.no_notify) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Clipboard backend argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Arboard,
    Wayland,
    Memory,
}

impl From<BackendArg> for ClipboardBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Arboard => ClipboardBackend::Arboard,
            BackendArg::Wayland => ClipboardBackend::Wayland,
            BackendArg::Memory => ClipboardBackend::Memory,
        }
    }
}

/// Options for the window session, after config merging
#[derive(Debug, Clone)]
pub struct WindowOptions {
    pub clipboard_backend: ClipboardBackend,
    pub notify: bool,
    pub max_clippings: usize,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["clipboard_backend", "notify", "max_clippings"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::try_parse_from(["clipmaster"]).unwrap();
        assert!(!cli.notify);
        assert!(cli.max_clippings.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_backend() {
        let cli = Cli::parse_from(["clipmaster", "--clipboard", "memory"]);
        assert_eq!(cli.clipboard, Some(BackendArg::Memory));
        let cli = Cli::parse_from(["clipmaster", "-b", "wayland"]);
        assert_eq!(cli.clipboard, Some(BackendArg::Wayland));
    }

    #[test]
    fn cli_rejects_unknown_backend() {
        assert!(Cli::try_parse_from(["clipmaster", "--clipboard", "x11"]).is_err());
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::parse_from(["clipmaster", "-n", "-m", "20"]);
        assert!(cli.notify);
        assert_eq!(cli.max_clippings, Some(20));
    }

    #[test]
    fn notify_override_from_flags() {
        assert_eq!(Cli::parse_from(["clipmaster"]).notify_override(), None);
        assert_eq!(Cli::parse_from(["clipmaster", "--notify"]).notify_override(), Some(true));
        assert_eq!(Cli::parse_from(["clipmaster", "--no-notify"]).notify_override(), Some(false));
    }

    #[test]
    fn notify_flags_conflict() {
        assert!(Cli::try_parse_from(["clipmaster", "--notify", "--no-notify"]).is_err());
    }

    #[test]
    fn cli_parses_config_init() {
        let cli = Cli::parse_from(["clipmaster", "config", "init"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Init
            })
        ));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["clipmaster", "config", "set", "notify", "true"]);
        if let Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) = cli.command
        {
            assert_eq!(key, "notify");
            assert_eq!(value, "true");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn backend_arg_converts() {
        assert_eq!(ClipboardBackend::from(BackendArg::Arboard), ClipboardBackend::Arboard);
        assert_eq!(ClipboardBackend::from(BackendArg::Memory), ClipboardBackend::Memory);
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("clipboard_backend"));
        assert!(is_valid_config_key("max_clippings"));
        assert!(!is_valid_config_key("api_key"));
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
