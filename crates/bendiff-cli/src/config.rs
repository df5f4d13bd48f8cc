use std::fs;
use std::path::Path;

use anyhow::Context;
use bendiff_diff::WhitespaceMode;
use bendiff_render::ViewMode;
use serde::{Deserialize, Serialize};

/// Defaults read from a TOML file; command-line flags win over these.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BendiffConfig {
    pub whitespace: WhitespaceMode,
    pub view: ViewMode,
    pub color: bool,
    pub line_numbers: bool,
}

impl Default for BendiffConfig {
    fn default() -> Self {
        Self {
            whitespace: WhitespaceMode::Exact,
            view: ViewMode::SideBySide,
            color: true,
            line_numbers: true,
        }
    }
}

impl BendiffConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    /// `path` if given, otherwise the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
