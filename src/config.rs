use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

/// Settings read by the diagnostic routine.
///
/// Passed explicitly to whatever needs it; nothing here is global.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Also call `bug` through the dispatch handle while reporting.
    pub crash_demo: bool,
}

impl DemoConfig {
    pub fn with_crash_demo(crash_demo: bool) -> Self {
        Self { crash_demo }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|err| ConfigError::read(path, err))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), crash_demo = config.crash_demo, "config loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_disables_crash_demo() {
        assert!(!DemoConfig::default().crash_demo);
        assert_eq!(DemoConfig::from_toml_str("").unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_parse_crash_demo() {
        let config = DemoConfig::from_toml_str("crash_demo = true").unwrap();
        assert_eq!(config, DemoConfig::with_crash_demo(true));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = DemoConfig::from_toml_str("crash = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_wrong_type_rejected() {
        let err = DemoConfig::from_toml_str("crash_demo = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "crash_demo = true").unwrap();

        let config = DemoConfig::load(file.path()).unwrap();
        assert!(config.crash_demo);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = DemoConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
