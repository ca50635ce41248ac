//! Loading logger configuration from YAML or JSON

use std::fs;
use std::path::Path;

use super::model::LoggerConfig;
use crate::error::{ConfigError, ConfigResult};

impl LoggerConfig {
    /// Parse a YAML document
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Yaml(format!("Failed to parse YAML: {}", e)))
    }

    /// Parse a JSON document
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load from a file; `.json` files are parsed as JSON, anything else as YAML
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Render as YAML
    pub fn to_yaml(&self) -> ConfigResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Yaml(format!("Failed to serialize YAML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TransportConfig;
    use crate::types::LogLevel;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_yaml_config() {
        let config = LoggerConfig::from_yaml_str(
            r#"
name: api
level: debug
transports:
  - type: console
  - type: file
    path: logs/api.log
"#,
        )
        .unwrap();

        assert_eq!(config.name.as_deref(), Some("api"));
        assert_eq!(config.level, Some(LogLevel::Debug));
        assert_eq!(
            config.transports,
            Some(vec![
                TransportConfig::Console,
                TransportConfig::File {
                    path: PathBuf::from("logs/api.log")
                },
            ])
        );
    }

    #[test]
    fn test_json_config() {
        let config =
            LoggerConfig::from_json_str(r#"{"level": "error", "transports": [{"type": "noop"}]}"#)
                .unwrap();
        assert_eq!(config.level, Some(LogLevel::Error));
        assert_eq!(config.name, None);
        assert_eq!(config.transports, Some(vec![TransportConfig::Noop]));
    }

    #[test]
    fn test_missing_fields_default() {
        let config = LoggerConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, LoggerConfig::default());
    }

    #[test]
    fn test_invalid_level_rejected() {
        let err = LoggerConfig::from_yaml_str("level: loud").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));

        let err = LoggerConfig::from_json_str(r#"{"level": "loud"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_from_file_builds_working_logger() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("nested").join("out.log");
        let config_path = dir.path().join("logline.yaml");
        fs::write(
            &config_path,
            format!(
                "name: svc\nlevel: warn\ntransports:\n  - type: file\n    path: {}\n",
                log_path.display()
            ),
        )
        .unwrap();

        let logger = LoggerConfig::from_file(&config_path).unwrap().build().unwrap();
        logger.info("filtered");
        logger.error("kept");

        let content = fs::read_to_string(&log_path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("ERROR [svc] kept"));
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logline.json");
        fs::write(&path, r#"{"name": "j"}"#).unwrap();
        let config = LoggerConfig::from_file(&path).unwrap();
        assert_eq!(config.name.as_deref(), Some("j"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = LoggerConfig::from_file(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_yaml_output_is_readable() {
        let config = LoggerConfig::new()
            .with_name("svc")
            .with_level(LogLevel::Trace)
            .with_transport(TransportConfig::Console);
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("name: svc"));
        assert!(yaml.contains("level: trace"));
        assert_eq!(LoggerConfig::from_yaml_str(&yaml).unwrap(), config);
    }
}
