//! Configuration file support for nutri.
//!
//! Loads optional `.nutri/config.toml` from the working directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nutrition_report::{DEFAULT_TITLE, RenderOptions};
use serde::Deserialize;
use tracing::warn;

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NutriConfig {
    pub render: RenderConfig,
}

/// `[render]` table
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Document `<title>`
    pub title: Option<String>,
    /// Stylesheet appended after the built-in one, relative to the config file
    pub extra_css: Option<PathBuf>,
    /// Output path used when `--output` is absent
    pub output: Option<PathBuf>,
}

/// A loaded config together with the directory relative paths resolve against.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: NutriConfig,
    pub base_dir: PathBuf,
}

impl NutriConfig {
    /// Load config from `.nutri/config.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> LoadedConfig {
        let dir = root.join(".nutri");
        LoadedConfig {
            config: Self::load_from_path(&dir.join("config.toml")),
            base_dir: dir,
        }
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Load an explicitly requested config file; a missing file is an error.
    pub fn load_required(path: &Path) -> Result<LoadedConfig> {
        anyhow::ensure!(path.is_file(), "config file not found: {}", path.display());
        Ok(LoadedConfig {
            config: Self::load_from_path(path),
            base_dir: path.parent().map(Path::to_path_buf).unwrap_or_default(),
        })
    }
}

impl LoadedConfig {
    /// Build render options, reading `extra_css` from disk.
    ///
    /// `title_override` (from the command line) wins over the file.
    pub fn render_options(&self, title_override: Option<String>) -> Result<RenderOptions> {
        let render = &self.config.render;
        let title = title_override
            .or_else(|| render.title.clone())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let extra_css = match &render.extra_css {
            Some(rel) => {
                let path = self.base_dir.join(rel);
                let css = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read extra_css {}", path.display()))?;
                Some(css)
            }
            None => None,
        };

        Ok(RenderOptions { title, extra_css })
    }
}
