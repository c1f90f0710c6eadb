//! Runtime settings, default directories and the metric catalog file

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::error::{HudError, Result};
use crate::metrics::MetricCatalog;

/// Default configuration directory name
const CONFIG_DIR_NAME: &str = "garmin-hud";

/// Catalog file looked up in the config directory when none is given
const CATALOG_FILE_NAME: &str = "catalog.json";

/// Get the configuration directory path
/// Returns ~/.config/garmin-hud on Unix, ~/Library/Application Support/garmin-hud on macOS
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(CONFIG_DIR_NAME))
        .ok_or_else(|| HudError::config("Could not determine config directory"))
}

/// Get the data directory path
/// Returns ~/.local/share/garmin-hud on Unix, ~/Library/Application Support/garmin-hud on macOS
pub fn data_dir() -> Result<PathBuf> {
    dirs::data_local_dir()
        .map(|p| p.join(CONFIG_DIR_NAME))
        .ok_or_else(|| HudError::config("Could not determine data directory"))
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Parse a "YYYY-MM-DD" argument
pub fn parse_date_arg(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
        .map_err(|_| HudError::InvalidDateFormat(text.to_string()))
}

/// Resolved runtime settings
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Root of the Parquet store
    pub data_dir: PathBuf,
    /// Pinned "today"; the local date is used when unset
    pub today: Option<NaiveDate>,
    /// Metric catalog file; the built-in catalog is used when unset
    pub catalog: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Read settings through `get` so tests never touch the process environment
    pub fn from_env_with<F>(mut get: F) -> Result<Self>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let data_dir = match get("GARMIN_HUD_DATA_DIR").filter(|v| !v.trim().is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => data_dir()?,
        };
        let today = get("GARMIN_HUD_TODAY")
            .filter(|v| !v.trim().is_empty())
            .map(|v| parse_date_arg(&v))
            .transpose()?;
        let catalog = get("GARMIN_HUD_CATALOG")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            data_dir,
            today,
            catalog,
        })
    }

    /// Apply command-line values on top of the environment
    pub fn with_overrides(
        mut self,
        data_dir: Option<PathBuf>,
        today: Option<NaiveDate>,
        catalog: Option<PathBuf>,
    ) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        if today.is_some() {
            self.today = today;
        }
        if catalog.is_some() {
            self.catalog = catalog;
        }
        self
    }

    /// The reference date for period windows
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Local::now().date_naive())
    }

    /// Load the configured catalog.
    ///
    /// Falls back to `catalog.json` in the config directory, then to the
    /// built-in catalog.
    pub fn catalog(&self) -> Result<MetricCatalog> {
        match &self.catalog {
            Some(path) => load_catalog(path),
            None => {
                let default_path = config_dir()?.join(CATALOG_FILE_NAME);
                if default_path.exists() {
                    load_catalog(&default_path)
                } else {
                    Ok(MetricCatalog::default())
                }
            }
        }
    }
}

/// Read a metric catalog from a JSON file
pub fn load_catalog(path: &Path) -> Result<MetricCatalog> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        HudError::config(format!("Cannot read catalog {}: {}", path.display(), e))
    })?;
    let catalog: MetricCatalog = serde_json::from_str(&text)
        .map_err(|e| HudError::config(format!("Invalid catalog {}: {}", path.display(), e)))?;
    if catalog.is_empty() {
        return Err(HudError::config(format!(
            "Catalog {} has no metrics",
            path.display()
        )));
    }
    debug!(path = %path.display(), metrics = catalog.len(), "loaded catalog");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_dir_exists() {
        let path = config_dir().unwrap();
        assert!(path.ends_with("garmin-hud"));
    }

    #[test]
    fn test_data_dir_exists() {
        let path = data_dir().unwrap();
        assert!(path.ends_with("garmin-hud"));
    }

    #[test]
    fn test_parse_date_arg() {
        assert_eq!(
            parse_date_arg("2024-01-07").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()
        );
        assert!(matches!(
            parse_date_arg("07/01/2024"),
            Err(HudError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn from_env_reads_values() {
        let get = |k: &str| match k {
            "GARMIN_HUD_DATA_DIR" => Some("/tmp/hud".into()),
            "GARMIN_HUD_TODAY" => Some("2024-01-07".into()),
            "GARMIN_HUD_CATALOG" => Some("/tmp/catalog.json".into()),
            _ => None,
        };
        let settings = Settings::from_env_with(get).unwrap();
        assert_eq!(settings.data_dir, PathBuf::from("/tmp/hud"));
        assert_eq!(settings.today(), NaiveDate::from_ymd_opt(2024, 1, 7).unwrap());
        assert_eq!(settings.catalog, Some(PathBuf::from("/tmp/catalog.json")));
    }

    #[test]
    fn from_env_defaults() {
        let settings = Settings::from_env_with(|_| None).unwrap();
        assert!(settings.data_dir.ends_with("garmin-hud"));
        assert_eq!(settings.today, None);
        assert_eq!(settings.catalog, None);
    }

    #[test]
    fn from_env_rejects_bad_today() {
        let get = |k: &str| (k == "GARMIN_HUD_TODAY").then(|| "tomorrow".to_string());
        assert!(Settings::from_env_with(get).is_err());
    }

    #[test]
    fn overrides_win() {
        let settings = Settings::from_env_with(|k| {
            (k == "GARMIN_HUD_DATA_DIR").then(|| "/env".to_string())
        })
        .unwrap()
        .with_overrides(
            Some(PathBuf::from("/flag")),
            NaiveDate::from_ymd_opt(2024, 3, 1),
            None,
        );
        assert_eq!(settings.data_dir, PathBuf::from("/flag"));
        assert_eq!(settings.today, NaiveDate::from_ymd_opt(2024, 3, 1));
    }

    #[test]
    fn test_load_catalog() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"label": "Steps", "column": "Steps", "format": "integer"}}]"#
        )
        .unwrap();
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);

        let settings = Settings {
            data_dir: PathBuf::from("."),
            today: None,
            catalog: Some(file.path().to_path_buf()),
        };
        assert_eq!(settings.catalog().unwrap(), catalog);
    }

    #[test]
    fn test_load_catalog_errors() {
        let mut empty = NamedTempFile::new().unwrap();
        write!(empty, "[]").unwrap();
        assert!(matches!(load_catalog(empty.path()), Err(HudError::Config(_))));

        let mut broken = NamedTempFile::new().unwrap();
        write!(broken, "{{not json").unwrap();
        assert!(matches!(load_catalog(broken.path()), Err(HudError::Config(_))));

        assert!(load_catalog(Path::new("/nonexistent/catalog.json")).is_err());
    }
}
