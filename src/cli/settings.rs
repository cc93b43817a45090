//! Settings file loading.
//!
//! Settings are looked up in order of priority:
//! 1. the file named by `--config`
//! 2. ./eatwhat.json (local customization)
//! 3. ~/.config/eatwhat/config.json (global user config)
//! 4. embedded default

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::picker::validate_category;

/// Embedded default settings as fallback
const EMBEDDED_SETTINGS: &str = include_str!("../../eatwhat.json");

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("no categories configured in {0}")]
    NoCategories(String),

    #[error("invalid category `{name}` in {origin}")]
    InvalidCategory { name: String, origin: String },
}

/// A selectable food list
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CategorySettings {
    /// File stem of the food list (`<name>.json`)
    pub name: String,
    /// Text on the category button (defaults to the name)
    #[serde(default)]
    pub label: Option<String>,
    /// Button colour as `#rrggbb`
    #[serde(default)]
    pub color: Option<String>,
}

impl CategorySettings {
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }
}

/// Contents of the settings file
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub categories: Vec<CategorySettings>,
    /// Category selected at start-up (default: the first one)
    #[serde(default)]
    pub default_category: Option<String>,
    /// Track breakfast as well as lunch and dinner
    #[serde(default)]
    pub breakfast: bool,
    #[serde(default)]
    pub food_dir: Option<PathBuf>,
    #[serde(default)]
    pub food_url: Option<String>,
    /// Delay between drawn dishes in milliseconds
    #[serde(default)]
    pub interval_ms: Option<u64>,
    /// Where the settings came from (for messages)
    #[serde(skip)]
    pub origin: String,
}

impl Settings {
    /// Parse and validate settings text
    pub fn parse(content: &str, origin: &str) -> Result<Self, SettingsError> {
        let mut settings: Settings =
            serde_json::from_str(content).map_err(|source| SettingsError::Parse {
                origin: origin.to_string(),
                source,
            })?;
        settings.origin = origin.to_string();

        if settings.categories.is_empty() {
            return Err(SettingsError::NoCategories(settings.origin));
        }
        let names = settings
            .categories
            .iter()
            .map(|c| c.name.as_str())
            .chain(settings.default_category.as_deref());
        for name in names {
            if validate_category(name).is_err() {
                return Err(SettingsError::InvalidCategory {
                    name: name.to_string(),
                    origin: settings.origin.clone(),
                });
            }
        }
        Ok(settings)
    }

    /// Load settings from an explicit file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    pub fn embedded() -> Result<Self, SettingsError> {
        Self::parse(EMBEDDED_SETTINGS, "embedded defaults")
    }

    /// Find and load settings following the lookup order
    pub fn discover(explicit: Option<&Path>) -> Result<Self, SettingsError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let mut candidates = vec![PathBuf::from("eatwhat.json")];
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join("eatwhat").join("config.json"));
        }

        for path in candidates {
            if path.exists() {
                info!(path = %path.display(), "loading settings");
                return Self::load(&path);
            }
            debug!(path = %path.display(), "no settings file");
        }

        info!("no settings file found, using embedded defaults");
        Self::embedded()
    }

    pub fn category_index(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name == name)
    }
}

/// Food directory used when none is configured:
/// ./food, then ~/.config/eatwhat/food, falling back to ./food
pub fn default_food_dir() -> PathBuf {
    let local = PathBuf::from("food");
    if local.is_dir() {
        return local;
    }
    if let Some(config_dir) = dirs::config_dir() {
        let global = config_dir.join("eatwhat").join("food");
        if global.is_dir() {
            return global;
        }
    }
    local
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn create_temp_settings_file(content: &str) -> (tempfile::NamedTempFile, PathBuf) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        let path = file.path().to_path_buf();
        (file, path)
    }

    #[test]
    fn test_embedded_settings_are_valid() {
        let settings = Settings::embedded().unwrap();
        assert!(!settings.categories.is_empty());
        assert_eq!(settings.origin, "embedded defaults");
        if let Some(default) = &settings.default_category {
            assert!(settings.category_index(default).is_some());
        }
    }

    #[test]
    fn test_settings_load_success() {
        let json = r##"{
            "categories": [
                {"name": "android", "label": "Android", "color": "#3ddc84"},
                {"name": "ios"}
            ],
            "defaultCategory": "ios",
            "breakfast": true,
            "foodDir": "menus",
            "intervalMs": 80
        }"##;
        let (_file, path) = create_temp_settings_file(json);

        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.categories.len(), 2);
        assert_eq!(settings.categories[0].display_label(), "Android");
        assert_eq!(settings.categories[1].display_label(), "ios");
        assert_eq!(settings.categories[0].color.as_deref(), Some("#3ddc84"));
        assert_eq!(settings.default_category.as_deref(), Some("ios"));
        assert!(settings.breakfast);
        assert_eq!(settings.food_dir, Some(PathBuf::from("menus")));
        assert_eq!(settings.food_url, None);
        assert_eq!(settings.interval_ms, Some(80));
        assert_eq!(settings.category_index("ios"), Some(1));
        assert_eq!(settings.category_index("nope"), None);
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::parse(r#"{"categories": [{"name": "a"}]}"#, "test").unwrap();
        assert!(!settings.breakfast);
        assert_eq!(settings.default_category, None);
        assert_eq!(settings.interval_ms, None);
    }

    #[test]
    fn test_settings_file_not_found() {
        let err = Settings::load(Path::new("/nonexistent/eatwhat.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
    }

    #[test]
    fn test_settings_invalid_json() {
        let (_file, path) = create_temp_settings_file("{ invalid json }");
        let err = Settings::load(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn test_settings_without_categories() {
        let err = Settings::parse(r#"{"categories": []}"#, "test").unwrap_err();
        assert!(matches!(err, SettingsError::NoCategories(_)));
    }

    #[test]
    fn test_settings_reject_path_like_category() {
        let err = Settings::parse(r#"{"categories": [{"name": "../x"}]}"#, "test").unwrap_err();
        assert!(matches!(err, SettingsError::InvalidCategory { .. }));

        let err = Settings::parse(
            r#"{"categories": [{"name": "a"}], "defaultCategory": "a/b"}"#,
            "test",
        )
        .unwrap_err();
        assert!(matches!(err, SettingsError::InvalidCategory { .. }));
    }

    #[test]
    fn test_discover_prefers_explicit_file() {
        let (_file, path) = create_temp_settings_file(r#"{"categories": [{"name": "only"}]}"#);
        let settings = Settings::discover(Some(&path)).unwrap();
        assert_eq!(settings.categories[0].name, "only");
        assert_eq!(settings.origin, path.display().to_string());
    }
}
