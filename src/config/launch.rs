//! Launch configuration
//!
//! An optional JSON file read once at startup. It supplies the initial banner
//! value and the background image catalog; nothing is ever written back.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::banner::BannerConfig;

/// Top-level launch file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchConfig {
    #[serde(default)]
    pub banner: BannerConfig,
    #[serde(default = "default_images")]
    pub images: Vec<CatalogImage>,
}

/// One background image in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogImage {
    /// Option label shown by the image selector
    pub label: String,
    /// Gradient painted when no image is loaded (top, bottom)
    pub top_color: String,
    pub bottom_color: String,
    /// Optional local PNG drawn instead of the gradient
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl CatalogImage {
    fn gradient(label: &str, top_color: &str, bottom_color: &str) -> Self {
        Self {
            label: label.to_string(),
            top_color: top_color.to_string(),
            bottom_color: bottom_color.to_string(),
            path: None,
        }
    }
}

fn default_images() -> Vec<CatalogImage> {
    vec![
        CatalogImage::gradient("Code", "#0f172a", "#334155"),
        CatalogImage::gradient("Design", "#7c3aed", "#f472b6"),
        CatalogImage::gradient("Create", "#b45309", "#1c1917"),
        CatalogImage::gradient("Innovate", "#0e7490", "#a7f3d0"),
    ]
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            banner: BannerConfig::default(),
            images: default_images(),
        }
    }
}

impl LaunchConfig {
    /// Load launch configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read launch config from {:?}", path))?;

        let config = Self::from_json(&contents)
            .with_context(|| format!("Invalid launch config in {:?}", path))?;

        info!(path = %path.display(), images = config.images.len(), "Loaded launch config");
        Ok(config)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        let config: LaunchConfig =
            serde_json::from_str(contents).context("Failed to parse launch config JSON")?;

        if config.images.is_empty() {
            bail!("Launch config must list at least one background image");
        }
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize launch config")
    }
}
