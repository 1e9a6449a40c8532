use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ScandeckConfig {
    pub server: Option<ServerConfig>,
    pub sources: Option<SourcesConfig>,
}

impl ScandeckConfig {
    /// Address the API server binds, with defaults applied.
    pub fn bind_address(&self) -> String {
        let host = self
            .server
            .as_ref()
            .and_then(|s| s.host.clone())
            .unwrap_or_else(|| "0.0.0.0".to_string());
        let port = self.server.as_ref().and_then(|s| s.port).unwrap_or(8080);
        format!("{}:{}", host, port)
    }

    pub fn image_export_path(&self) -> Option<PathBuf> {
        self.sources
            .as_ref()
            .and_then(|s| s.image.as_ref())
            .and_then(|s| s.export.as_ref())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    }

    pub fn dynamic_export_path(&self) -> Option<PathBuf> {
        self.sources
            .as_ref()
            .and_then(|s| s.dynamic.as_ref())
            .and_then(|s| s.export.as_ref())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    }

    /// True when at least one export path is configured.
    pub fn has_export_paths(&self) -> bool {
        self.image_export_path().is_some() || self.dynamic_export_path().is_some()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Some("0.0.0.0".to_string()),
            port: Some(8080),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SourcesConfig {
    pub image: Option<SourceConfig>,
    pub dynamic: Option<SourceConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SourceConfig {
    /// Path to the scanner's JSON export file.
    pub export: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address_defaults() {
        let config = ScandeckConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_bind_address_from_config() {
        let config = ScandeckConfig {
            server: Some(ServerConfig {
                host: Some("127.0.0.1".to_string()),
                port: Some(9000),
            }),
            sources: None,
        };
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
    }

    #[test]
    fn test_export_paths_absent_by_default() {
        let config = ScandeckConfig::default();
        assert!(config.image_export_path().is_none());
        assert!(config.dynamic_export_path().is_none());
        assert!(!config.has_export_paths());
    }

    #[test]
    fn test_empty_export_path_counts_as_absent() {
        let config = ScandeckConfig {
            server: None,
            sources: Some(SourcesConfig {
                image: Some(SourceConfig {
                    export: Some(String::new()),
                }),
                dynamic: None,
            }),
        };
        assert!(config.image_export_path().is_none());
    }

    #[test]
    fn test_config_yaml_roundtrip() {
        let yaml = r#"
server:
  host: 127.0.0.1
  port: 8090
sources:
  image:
    export: ./exports/image.json
  dynamic:
    export: ./exports/zap.json
"#;
        let config: ScandeckConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:8090");
        assert_eq!(
            config.image_export_path(),
            Some(PathBuf::from("./exports/image.json"))
        );
        assert_eq!(
            config.dynamic_export_path(),
            Some(PathBuf::from("./exports/zap.json"))
        );
    }

    #[test]
    fn test_partial_config_parses() {
        let config: ScandeckConfig = serde_yaml::from_str("server:\n  port: 8090\n").unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:8090");
        assert!(config.sources.is_none());
    }
}
