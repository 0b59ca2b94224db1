//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, ClipboardBackend};
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let mut config = store.load().await?;
    apply_value(&mut config, key, value)?;

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load().await?;
    let value = read_value(&config, key).unwrap_or_else(|| NOT_SET.to_string());
    presenter.output(&value);

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        let value = read_value(&config, key).unwrap_or_else(|| NOT_SET.to_string());
        presenter.key_value(key, &value);
    }

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Validate `value` for `key` and store it in `config`
fn apply_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "clipboard_backend" => {
            let backend = value
                .parse::<ClipboardBackend>()
                .map_err(|e| invalid(e.to_string()))?;
            config.clipboard_backend = Some(backend.to_string());
        }
        "notify" => {
            let flag = parse_bool(value)
                .map_err(|_| invalid("Value must be 'true' or 'false'".to_string()))?;
            config.notify = Some(flag);
        }
        "max_clippings" => {
            let max = value.trim().parse::<usize>().map_err(|_| {
                invalid("Value must be a non-negative whole number (0 = unlimited)".to_string())
            })?;
            config.max_clippings = Some(max);
        }
        _ => return Err(invalid("Unknown key".to_string())),
    }

    Ok(())
}

fn read_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "clipboard_backend" => config.clipboard_backend.clone(),
        "notify" => config.notify.map(|b| b.to_string()),
        "max_clippings" => config.max_clippings.map(|n| n.to_string()),
        _ => None,
    }
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::XdgConfigStore;

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("false"), Ok(false));
        assert_eq!(parse_bool("YES"), Ok(true));
        assert_eq!(parse_bool("no"), Ok(false));
        assert_eq!(parse_bool("1"), Ok(true));
        assert_eq!(parse_bool("0"), Ok(false));
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn apply_backend_normalizes_name() {
        let mut config = AppConfig::empty();
        apply_value(&mut config, "clipboard_backend", "Wayland").unwrap();
        assert_eq!(config.clipboard_backend, Some("wayland".to_string()));
    }

    #[test]
    fn apply_backend_rejects_unknown() {
        let mut config = AppConfig::empty();
        let err = apply_value(&mut config, "clipboard_backend", "x11").unwrap_err();
        assert!(err.to_string().contains("clipboard_backend"));
        assert!(config.clipboard_backend.is_none());
    }

    #[test]
    fn apply_max_clippings() {
        let mut config = AppConfig::empty();
        apply_value(&mut config, "max_clippings", "15").unwrap();
        assert_eq!(config.max_clippings, Some(15));
        assert!(apply_value(&mut config, "max_clippings", "-1").is_err());
        assert_eq!(config.max_clippings, Some(15));
    }

    #[test]
    fn read_value_formats_fields() {
        let config = AppConfig::defaults();
        assert_eq!(read_value(&config, "clipboard_backend"), Some("arboard".to_string()));
        assert_eq!(read_value(&config, "notify"), Some("false".to_string()));
        assert_eq!(read_value(&config, "max_clippings"), Some("0".to_string()));
        assert_eq!(read_value(&AppConfig::empty(), "notify"), None);
    }

    #[test]
    fn check_key_lists_valid_keys() {
        let err = check_key("api_key").unwrap_err();
        assert!(err.to_string().contains("clipboard_backend, notify, max_clippings"));
    }

    #[tokio::test]
    async fn set_persists_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        handle_config_command(
            ConfigAction::Set {
                key: "notify".to_string(),
                value: "yes".to_string(),
            },
            &store,
            &presenter,
        )
        .await
        .unwrap();

        assert_eq!(store.load().await.unwrap().notify, Some(true));
    }

    #[tokio::test]
    async fn set_invalid_value_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        let result = handle_config_command(
            ConfigAction::Set {
                key: "notify".to_string(),
                value: "maybe".to_string(),
            },
            &store,
            &presenter,
        )
        .await;

        assert!(result.is_err());
        assert!(!store.exists());
    }
}
