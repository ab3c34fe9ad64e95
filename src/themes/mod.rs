//! Theme file handling
//!
//! The theme file lists the topics offered in the UI:
//!
//! ```json
//! { "themes": [ { "name": "Science", "description": "Découvertes scientifiques récentes" } ] }
//! ```
//!
//! It is created with three defaults the first time it is read.

use crate::ThemeError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One selectable topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Theme {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Top-level structure of the theme file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeFile {
    #[serde(default)]
    pub themes: Vec<Theme>,
}

impl ThemeFile {
    /// The themes written when no file exists yet
    pub fn defaults() -> Self {
        Self {
            themes: vec![
                Theme::new("Actualité", "Actualités générales"),
                Theme::new("Technologie", "Nouvelles technologies et innovations"),
                Theme::new("Science", "Découvertes scientifiques récentes"),
            ],
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(|theme| theme.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|n| n == name)
    }
}

/// Loads the theme file, creating it with the defaults when missing
///
/// Parent directories are created as needed. An existing file is never
/// overwritten, even if it fails to parse.
pub fn load_themes(path: &Path) -> Result<ThemeFile, ThemeError> {
    if !path.exists() {
        tracing::info!("Theme file {} not found, writing defaults", path.display());
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&ThemeFile::defaults())?;
        std::fs::write(path, content)?;
    }

    let content = std::fs::read_to_string(path)?;
    let themes: ThemeFile = serde_json::from_str(&content)?;
    tracing::debug!("Loaded {} themes from {}", themes.themes.len(), path.display());
    Ok(themes)
}
