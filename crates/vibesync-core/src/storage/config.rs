//! TOML-based application configuration.
//!
//! Stores:
//! - Classifier thresholds
//! - Reward amounts and starting profile counters
//! - Front-end pacing (simulated analysis delay, recipe display)
//!
//! Configuration is stored at `~/.config/vibesync/config.toml`.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::error::{ConfigError, Result, ValidationError};
use crate::mood::{Classifier, ClassifierPolicy};
use crate::profile::{Rewards, UserProfile};
use crate::session::WellnessSession;

/// Front-end configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Artificial pause before showing a result, in milliseconds.
    #[serde(default = "default_analysis_delay_ms")]
    pub analysis_delay_ms: u64,
    #[serde(default = "default_true")]
    pub show_recipes: bool,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/vibesync/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub classifier: ClassifierPolicy,
    #[serde(default)]
    pub rewards: Rewards,
    /// Counters a fresh session starts from.
    #[serde(default)]
    pub profile: UserProfile,
    #[serde(default)]
    pub ui: UiConfig,
}

fn default_analysis_delay_ms() -> u64 {
    1500
}
fn default_true() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            analysis_delay_ms: default_analysis_delay_ms(),
            show_recipes: true,
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
                    ),
                    serde_json::Value::Number(_) => value
                        .parse::<u64>()
                        .map(|n| serde_json::Value::Number(n.into()))
                        .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?,
                    serde_json::Value::Object(_) => {
                        return Err(invalid("cannot replace a whole section".to_string()))
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// Default location of the config file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or
    /// validated, or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there if the file is missing.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                cfg.classifier.validate()?;
                Ok(cfg)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(err) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: err.to_string(),
            }),
        }
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key. Does not save.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Config`](crate::CoreError::Config) if the key is
    /// unknown or the value cannot be parsed, and
    /// [`CoreError::Validation`](crate::CoreError::Validation) if the
    /// resulting classifier policy is inconsistent. On error the config is
    /// left unchanged.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        updated.classifier.validate()?;
        *self = updated;
        Ok(())
    }

    /// Write the whole config as pretty JSON followed by a newline.
    pub fn write_json<W: Write>(&self, mut out: W) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        writeln!(out, "{json}")?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            tracing::warn!(%err, "using default configuration");
            Self::default()
        })
    }

    /// Build a classifier from the configured policy.
    pub fn classifier(&self) -> Result<Classifier, ValidationError> {
        Classifier::with_policy(self.classifier.clone())
    }

    /// Start a fresh session seeded from this config.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`](crate::CoreError::Validation) if the
    /// classifier policy is inconsistent.
    pub fn session(&self) -> Result<WellnessSession> {
        Ok(WellnessSession::new(
            self.classifier()?,
            self.rewards.clone(),
            self.profile.clone(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    /// A sink whose pipe is always closed.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
        assert_eq!(parsed.ui.analysis_delay_ms, 1500);
        assert_eq!(parsed.rewards.submission_points, 25);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: Config = toml::from_str(
            r#"
            [classifier]
            high_stress_threshold = 8

            [profile]
            vibe_points = 0
            "#,
        )
        .unwrap();
        assert_eq!(parsed.classifier.high_stress_threshold, 8);
        assert_eq!(parsed.classifier.calm_max_stress, 3);
        assert_eq!(parsed.profile.vibe_points, 0);
        assert_eq!(parsed.profile.current_streak, 5);
        assert!(parsed.ui.show_recipes);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("ui.show_recipes").as_deref(), Some("true"));
        assert_eq!(cfg.get("classifier.high_stress_threshold").as_deref(), Some("7"));
        assert_eq!(cfg.get("profile.vibe_points").as_deref(), Some("150"));
        assert!(cfg.get("ui.missing_key").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn set_updates_nested_values() {
        let mut cfg = Config::default();
        cfg.set("ui.show_recipes", "false").unwrap();
        cfg.set("rewards.kit_order_points", "75").unwrap();
        assert!(!cfg.ui.show_recipes);
        assert_eq!(cfg.rewards.kit_order_points, 75);
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("ui.nonexistent_key", "value"),
            Err(CoreError::Config(ConfigError::UnknownKey(_)))
        ));
        assert!(matches!(
            cfg.set("nowhere.at_all", "1"),
            Err(CoreError::Config(ConfigError::UnknownKey(_)))
        ));
    }

    #[test]
    fn set_rejects_invalid_type() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("ui.show_recipes", "not_a_bool"),
            Err(CoreError::Config(ConfigError::InvalidValue { .. }))
        ));
        assert!(cfg.set("classifier.max_confidence", "-3").is_err());
        assert!(cfg.set("classifier.max_confidence", "300").is_err());
        assert!(cfg.set("classifier", "{}").is_err());
    }

    #[test]
    fn set_rejects_inconsistent_policy_and_keeps_old_value() {
        let mut cfg = Config::default();
        let result = cfg.set("classifier.calm_max_stress", "9");
        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::InvalidPolicy(_)))
        ));
        assert_eq!(cfg.classifier.calm_max_stress, 3);
    }

    #[test]
    fn write_json_emits_every_section() {
        let mut out = Vec::new();
        Config::default().write_json(&mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["classifier"]["high_stress_threshold"], 7);
        assert_eq!(value["profile"]["vibe_points"], 150);
        assert!(out.ends_with(b"\n"));
    }

    #[test]
    fn write_json_reports_io_failures() {
        let err = Config::default().write_json(ClosedPipe).unwrap_err();
        assert!(matches!(err, CoreError::Io(ref e) if e.kind() == std::io::ErrorKind::BrokenPipe));
        assert!(err.to_string().starts_with("IO error:"));
    }

    #[test]
    fn load_from_writes_defaults_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn save_then_load_preserves_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut cfg = Config::default();
        cfg.set("ui.analysis_delay_ms", "0").unwrap();
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.ui.analysis_delay_ms, 0);
    }

    #[test]
    fn load_from_rejects_garbage_and_bad_policy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        std::fs::write(&path, "this is = = not toml").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::LoadFailed { .. })
        ));

        std::fs::write(&path, "[classifier]\nhigh_stress_threshold = 2\n").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn session_uses_configured_profile() {
        let mut cfg = Config::default();
        cfg.set("profile.vibe_points", "0").unwrap();
        let session = cfg.session().unwrap();
        assert_eq!(session.profile().vibe_points, 0);
        assert_eq!(session.profile().total_submissions, 12);
    }
}
