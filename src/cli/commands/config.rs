//! Config command implementation.

use crate::cli::{ConfigAction, Output};
use crate::config::Settings;
use crate::error::FinnError;
use anyhow::Result;

/// Run the config command.
pub fn run_config(action: &ConfigAction, settings: Settings) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let toml_str = toml::to_string_pretty(&settings)
                .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;
            println!("{}", toml_str);
        }

        ConfigAction::Set { key, value } => {
            let updated = set_value(&settings, key, value)?;
            updated.save()?;
            Output::success(&format!("Set {} = {}", key, value));
        }

        ConfigAction::Edit => {
            let config_path = Settings::default_config_path();

            // Create default config if it doesn't exist
            if !config_path.exists() {
                settings.save()?;
                Output::info(&format!("Created default config at {:?}", config_path));
            }

            // Try to open in editor
            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vim".to_string());

            Output::info(&format!("Opening config in {}...", editor));

            let status = std::process::Command::new(&editor)
                .arg(&config_path)
                .status();

            match status {
                Ok(s) if s.success() => {
                    Output::success("Config saved.");
                }
                Ok(_) => {
                    Output::warning("Editor exited with non-zero status.");
                }
                Err(e) => {
                    Output::error(&format!("Failed to open editor: {}", e));
                    Output::info(&format!("Config file is at: {:?}", config_path));
                }
            }
        }

        ConfigAction::Path => {
            let config_path = Settings::default_config_path();
            println!("{}", config_path.display());
        }
    }

    Ok(())
}

/// Apply a dotted-key assignment (e.g. "agent.model") to the settings.
fn set_value(settings: &Settings, key: &str, raw: &str) -> Result<Settings, FinnError> {
    let mut root = toml::Value::try_from(settings)
        .map_err(|e| FinnError::Config(format!("Failed to serialize config: {}", e)))?;

    let parts: Vec<&str> = key.split('.').collect();
    let (leaf, path) = parts
        .split_last()
        .ok_or_else(|| FinnError::Config("Empty configuration key".to_string()))?;

    let mut current = &mut root;
    for part in path {
        current = current
            .get_mut(part)
            .ok_or_else(|| FinnError::Config(format!("Unknown configuration key: {}", key)))?;
    }

    let table = current
        .as_table_mut()
        .ok_or_else(|| FinnError::Config(format!("'{}' is not a section", path.join("."))))?;

    let parsed = match table.get(*leaf) {
        Some(toml::Value::Integer(_)) => toml::Value::Integer(raw.parse().map_err(|_| {
            FinnError::Config(format!("'{}' expects an integer, got '{}'", key, raw))
        })?),
        Some(toml::Value::Boolean(_)) => toml::Value::Boolean(raw.parse().map_err(|_| {
            FinnError::Config(format!("'{}' expects a boolean, got '{}'", key, raw))
        })?),
        // Strings, and optional fields absent from the serialized form
        _ => toml::Value::String(raw.to_string()),
    };
    table.insert(leaf.to_string(), parsed);

    root.try_into()
        .map_err(|e| FinnError::Config(format!("Invalid value for {}: {}", key, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_string_value() {
        let settings = Settings::default();
        let updated = set_value(&settings, "agent.model", "llama-3.1-70b-versatile").unwrap();
        assert_eq!(updated.agent.model, "llama-3.1-70b-versatile");
    }

    #[test]
    fn test_set_integer_value() {
        let settings = Settings::default();
        let updated = set_value(&settings, "cache.capacity", "50").unwrap();
        assert_eq!(updated.cache.capacity, 50);
    }

    #[test]
    fn test_set_optional_value() {
        let settings = Settings::default();
        let updated = set_value(&settings, "groq.api_key", "gsk_test").unwrap();
        assert_eq!(updated.groq.api_key.as_deref(), Some("gsk_test"));
    }

    #[test]
    fn test_set_rejects_unknown_section() {
        let settings = Settings::default();
        let err = set_value(&settings, "nonexistent.key", "x").unwrap_err();
        assert!(matches!(err, FinnError::Config(_)));
    }

    #[test]
    fn test_set_rejects_bad_integer() {
        let settings = Settings::default();
        let err = set_value(&settings, "cache.capacity", "lots").unwrap_err();
        assert!(matches!(err, FinnError::Config(_)));
    }
}
