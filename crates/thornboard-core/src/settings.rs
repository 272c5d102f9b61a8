// Thornboard Settings Module
// User-configurable keyboard options loaded from TOML

#![cfg(feature = "settings")]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::layout::{ThornSide, ThornStyle};

/// Keyboard settings.
///
/// Loaded from a TOML file (default: ~/.config/thornboard/settings.toml):
///
/// ```toml
/// [keyboard]
/// thorn_on_right = false
/// use_eth_instead = false
/// vibrate_on_keypress = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Put the thorn key on the right side of the letters page
    thorn_on_right: bool,

    /// Thorn key types ð/Ð instead of þ/Þ
    use_eth_instead: bool,

    /// Haptic feedback on every key press
    vibrate_on_keypress: bool,

    /// Path to the settings file (for reload)
    source_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Invalid setting value: {0}")]
    InvalidValue(String),
}

/// TOML representation for deserializing settings
#[derive(Debug, Clone, serde::Deserialize, Default)]
struct SettingsToml {
    #[serde(default)]
    keyboard: Option<HashMap<String, toml::Value>>,
}

/// TOML representation for writing settings back out
#[derive(Debug, serde::Serialize)]
struct SettingsOut {
    keyboard: KeyboardOut,
}

#[derive(Debug, serde::Serialize)]
struct KeyboardOut {
    thorn_on_right: bool,
    use_eth_instead: bool,
    vibrate_on_keypress: bool,
}

impl Settings {
    pub fn new() -> Self {
        Self {
            thorn_on_right: false,
            use_eth_instead: false,
            vibrate_on_keypress: true,
            source_path: None,
        }
    }

    /// Load settings from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(&path)?;
        let mut settings = Self::from_toml(&content)?;
        settings.source_path = Some(path.as_ref().to_path_buf());
        Ok(settings)
    }

    /// Load settings from TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let toml_settings: SettingsToml =
            toml::from_str(content).map_err(|e| SettingsError::TomlParse(e.to_string()))?;

        let mut settings = Self::new();

        if let Some(keyboard) = toml_settings.keyboard {
            for (key, value) in keyboard {
                let slot = match key.as_str() {
                    "thorn_on_right" => &mut settings.thorn_on_right,
                    "use_eth_instead" => &mut settings.use_eth_instead,
                    "vibrate_on_keypress" => &mut settings.vibrate_on_keypress,
                    other => {
                        log::warn!("Ignoring unknown keyboard setting '{}'", other);
                        continue;
                    }
                };
                *slot = parse_bool_value(&value)?;
            }
        }

        Ok(settings)
    }

    /// Serialize to the on-disk TOML format
    pub fn to_toml(&self) -> Result<String, SettingsError> {
        let out = SettingsOut {
            keyboard: KeyboardOut {
                thorn_on_right: self.thorn_on_right,
                use_eth_instead: self.use_eth_instead,
                vibrate_on_keypress: self.vibrate_on_keypress,
            },
        };
        Ok(toml::to_string(&out)?)
    }

    /// Get the default settings path
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("thornboard").join("settings.toml"))
    }

    /// Load from default location (~/.config/thornboard/settings.toml)
    pub fn load_default() -> Result<Self, SettingsError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_file(path);
            }
        }
        // Return default settings if file doesn't exist
        Ok(Self::new())
    }

    /// Reload settings from the original file
    pub fn reload(&mut self) -> Result<(), SettingsError> {
        if let Some(ref path) = self.source_path {
            let new_settings = Self::from_file(path)?;
            *self = new_settings;
            Ok(())
        } else {
            Err(SettingsError::InvalidValue("No source path set".to_string()))
        }
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn thorn_on_right(&self) -> bool {
        self.thorn_on_right
    }

    pub fn set_thorn_on_right(&mut self, value: bool) {
        self.thorn_on_right = value;
    }

    pub fn use_eth_instead(&self) -> bool {
        self.use_eth_instead
    }

    pub fn set_use_eth_instead(&mut self, value: bool) {
        self.use_eth_instead = value;
    }

    pub fn vibrate_on_keypress(&self) -> bool {
        self.vibrate_on_keypress
    }

    pub fn set_vibrate_on_keypress(&mut self, value: bool) {
        self.vibrate_on_keypress = value;
    }

    pub fn thorn_side(&self) -> ThornSide {
        ThornSide::from_right(self.thorn_on_right)
    }

    pub fn thorn_style(&self) -> ThornStyle {
        ThornStyle::from_eth(self.use_eth_instead)
    }
}

/// Parse a TOML value as a boolean
fn parse_bool_value(value: &toml::Value) -> Result<bool, SettingsError> {
    match value {
        toml::Value::Boolean(b) => Ok(*b),
        toml::Value::Integer(1) => Ok(true),
        toml::Value::Integer(0) => Ok(false),
        toml::Value::String(s) => match s.to_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(true),
            "false" | "no" | "off" | "0" => Ok(false),
            _ => Err(SettingsError::InvalidValue(format!(
                "Cannot convert '{}' to boolean",
                s
            ))),
        },
        _ => Err(SettingsError::InvalidValue(format!(
            "Cannot convert {:?} to boolean",
            value
        ))),
    }
}

/// Create default settings content for a new installation
pub fn default_settings_content() -> &'static str {
    r#"# Thornboard Settings
# Place this file at: ~/.config/thornboard/settings.toml

[keyboard]
# Put the thorn key on the right side of the letters page
thorn_on_right = false

# Type ð/Ð on the thorn key instead of þ/Þ
use_eth_instead = false

# Vibrate on every key press
vibrate_on_keypress = true
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::new();
        assert!(!settings.thorn_on_right());
        assert!(!settings.use_eth_instead());
        assert!(settings.vibrate_on_keypress());
        assert_eq!(settings.thorn_side(), ThornSide::Left);
        assert_eq!(settings.thorn_style(), ThornStyle::Thorn);
    }

    #[test]
    fn test_settings_from_toml() {
        let toml = r#"
[keyboard]
thorn_on_right = true
use_eth_instead = true
vibrate_on_keypress = false
"#;

        let settings = Settings::from_toml(toml).unwrap();
        assert!(settings.thorn_on_right());
        assert!(settings.use_eth_instead());
        assert!(!settings.vibrate_on_keypress());
        assert_eq!(settings.thorn_side(), ThornSide::Right);
        assert_eq!(settings.thorn_style(), ThornStyle::Eth);
    }

    #[test]
    fn test_settings_with_string_values() {
        let toml = r#"
[keyboard]
thorn_on_right = "yes"
use_eth_instead = "ON"
vibrate_on_keypress = 0
"#;

        let settings = Settings::from_toml(toml).unwrap();
        assert!(settings.thorn_on_right());
        assert!(settings.use_eth_instead());
        assert!(!settings.vibrate_on_keypress());
    }

    #[test]
    fn test_invalid_value_is_rejected() {
        let toml = r#"
[keyboard]
use_eth_instead = "maybe"
"#;
        assert!(matches!(
            Settings::from_toml(toml),
            Err(SettingsError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        assert!(matches!(
            Settings::from_toml("[keyboard"),
            Err(SettingsError::TomlParse(_))
        ));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let toml = r#"
[keyboard]
thorn_on_right = true
key_height = 42
"#;
        let settings = Settings::from_toml(toml).unwrap();
        assert!(settings.thorn_on_right());
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(Settings::from_toml("").unwrap(), Settings::new());
    }

    #[test]
    fn test_default_content_parses_to_defaults() {
        let settings = Settings::from_toml(default_settings_content()).unwrap();
        assert_eq!(settings, Settings::new());
    }

    #[test]
    fn test_to_toml_round_trip() {
        let mut settings = Settings::new();
        settings.set_use_eth_instead(true);
        settings.set_vibrate_on_keypress(false);

        let written = settings.to_toml().unwrap();
        assert_eq!(Settings::from_toml(&written).unwrap(), settings);
    }

    #[test]
    fn test_to_toml_writes_keyboard_table() {
        let written = Settings::new().to_toml().unwrap();
        assert!(written.starts_with("[keyboard]"));
        assert!(written.contains("vibrate_on_keypress = true"));
    }

    #[test]
    fn test_serialize_failure_has_its_own_variant() {
        let err: SettingsError =
            <toml::ser::Error as serde::ser::Error>::custom("unsupported value").into();
        assert!(matches!(err, SettingsError::TomlSerialize(_)));
        assert!(err.to_string().starts_with("TOML serialize error"));
    }

    #[test]
    fn test_reload_without_source_fails() {
        let mut settings = Settings::new();
        assert!(settings.reload().is_err());
    }
}
