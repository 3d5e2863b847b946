//! View configuration loaded from TOML
//!
//! A view file has two optional sections:
//!
//! ```toml
//! [grid]
//! rows = 6
//! cols = 6
//! indent_odd_rows = true
//! isometric = true
//!
//! [render]
//! antialias = true
//! overlay = false
//! ```
//!
//! Named presets live in `data/grids/{name}.toml`.

use crate::core::error::{HexError, Result};
use crate::layout::GridSpec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Per-renderer drawing switches
///
/// Each view owns its own copy, so two boards can render with different
/// settings side by side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Smooth polygon edges. Text is never antialiased.
    pub antialias: bool,
    /// Let the host paint terrain overlay images instead of hexside glyphs
    pub overlay: bool,
    /// Scale of the concentric hexagon drawn inside a selected cell
    pub inner_scale: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            antialias: true,
            overlay: false,
            inner_scale: 0.8,
        }
    }
}

/// Complete configuration for one grid view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default)]
    pub grid: GridSpec,
    #[serde(default)]
    pub render: RenderConfig,
}

impl ViewConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ViewConfig = toml::from_str(content)?;
        config.grid.validate()?;
        if !(config.render.inner_scale > 0.0 && config.render.inner_scale <= 1.0) {
            return Err(HexError::InvalidGrid(format!(
                "render.inner_scale must be in (0, 1], got {}",
                config.render.inner_scale
            )));
        }
        Ok(config)
    }
}

/// Load a view configuration from a TOML file
pub fn load_view_config(path: impl AsRef<Path>) -> Result<ViewConfig> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let config = ViewConfig::from_toml_str(&contents)?;
    tracing::debug!(?path, grid = ?config.grid, "Loaded view config");
    Ok(config)
}

/// Load a named preset from `data/grids/`
pub fn load_preset(name: &str) -> Result<ViewConfig> {
    let path = preset_path(name);
    if !path.is_file() {
        return Err(HexError::UnknownPreset(name.to_string()));
    }
    load_view_config(path)
}

fn preset_path(name: &str) -> PathBuf {
    PathBuf::from("data/grids").join(format!("{}.toml", name))
}
