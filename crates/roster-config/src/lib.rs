use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use roster_core::DEFAULT_EXPORT_FILE_NAME;
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "roster";
const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_path: Option<PathBuf>,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub file_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            export: ExportConfig {
                file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid data_path value: {0}")]
    InvalidDataPath(String),
    #[error("invalid export file_name value: {0}")]
    InvalidExportFileName(String),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    data_path: Option<String>,
    export: Option<ExportFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ExportFile {
    file_name: Option<String>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(data_path) = parsed.data_path {
        if data_path.trim().is_empty() {
            return Err(ConfigError::InvalidDataPath(data_path));
        }
        config.data_path = Some(PathBuf::from(data_path));
    }

    if let Some(export) = parsed.export {
        if let Some(file_name) = export.file_name {
            config.export.file_name = validate_file_name(file_name)?;
        }
    }

    Ok(config)
}

/// The export name is a suggestion for a single file, never a path.
fn validate_file_name(raw: String) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.contains(['/', '\\']) || trimmed == "." || trimmed == ".." {
        return Err(ConfigError::InvalidExportFileName(raw));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{load_at_path, merge_config, ConfigError, ConfigFile, ExportFile};
    use roster_core::DEFAULT_EXPORT_FILE_NAME;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            data_path: Some("/srv/roster/funcionarios.csv".to_string()),
            export: Some(ExportFile {
                file_name: Some(" relatorio.csv ".to_string()),
            }),
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(
            merged.data_path,
            Some(PathBuf::from("/srv/roster/funcionarios.csv"))
        );
        assert_eq!(merged.export.file_name, "relatorio.csv");
    }

    #[test]
    fn merge_config_keeps_defaults() {
        let parsed = ConfigFile {
            data_path: None,
            export: None,
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.data_path, None);
        assert_eq!(merged.export.file_name, DEFAULT_EXPORT_FILE_NAME);
    }

    #[test]
    fn merge_config_rejects_export_paths() {
        let parsed = ConfigFile {
            data_path: None,
            export: Some(ExportFile {
                file_name: Some("../out.csv".to_string()),
            }),
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidExportFileName(_)));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("config file not found"));
    }

    #[test]
    fn load_at_path_skips_missing_optional_file() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        assert!(load_at_path(&missing, false).expect("load").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "data_path = \"dados/funcionarios.csv\"\n[export]\nfile_name = \"onibus.csv\"\n",
        )
        .expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(
            config.data_path,
            Some(PathBuf::from("dados/funcionarios.csv"))
        );
        assert_eq!(config.export.file_name, "onibus.csv");
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "due_soon_days = 5\n").expect("write config");

        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn load_at_path_accepts_world_readable_file() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "[export]\nfile_name = \"onibus.csv\"\n").expect("write config");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).expect("chmod");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.export.file_name, "onibus.csv");
    }
}
