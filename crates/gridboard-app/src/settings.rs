// Settings: container geometry for headless runs and resolver options.
// Uses platform-native config dir: e.g. ~/Library/Application Support/gridboard/settings.json
// on macOS, ~/.config/gridboard/settings.json on Linux.

use std::path::{Path, PathBuf};

use gridboard_core::{FixedGeometry, Padding, Rect};
use gridboard_layout::ResolverOptions;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GridboardSettings {
    #[serde(default)]
    pub container: ContainerSettings,
    #[serde(default)]
    pub resolver: ResolverOptions,
}

/// Where the grid container sits in the viewport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContainerSettings {
    #[serde(default = "default_rect")]
    pub rect: Rect,
    /// Padding as computed-style strings, e.g. `"28px"`.
    #[serde(default)]
    pub padding: CssPadding,
}

fn default_rect() -> Rect {
    Rect::new(16.0, 16.0, 1256.0, 356.0)
}

impl Default for ContainerSettings {
    fn default() -> Self {
        Self {
            rect: default_rect(),
            padding: CssPadding::default(),
        }
    }
}

impl ContainerSettings {
    pub fn geometry(&self) -> FixedGeometry {
        FixedGeometry::new(self.rect, self.padding.to_padding())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CssPadding {
    #[serde(default = "default_padding")]
    pub top: String,
    #[serde(default = "default_padding")]
    pub right: String,
    #[serde(default = "default_padding")]
    pub bottom: String,
    #[serde(default = "default_padding")]
    pub left: String,
}

fn default_padding() -> String {
    "28px".to_string()
}

impl Default for CssPadding {
    fn default() -> Self {
        Self {
            top: default_padding(),
            right: default_padding(),
            bottom: default_padding(),
            left: default_padding(),
        }
    }
}

impl CssPadding {
    pub fn to_padding(&self) -> Padding {
        Padding::from_css(&self.top, &self.right, &self.bottom, &self.left)
    }
}

fn settings_path() -> Option<PathBuf> {
    let config_dir = dirs::config_dir()?;
    Some(config_dir.join("gridboard").join("settings.json"))
}

pub fn load_settings() -> GridboardSettings {
    match settings_path() {
        Some(path) => load_settings_from(&path),
        None => GridboardSettings::default(),
    }
}

/// Missing file means defaults; a file that fails to parse is reported and ignored.
pub fn load_settings_from(path: &Path) -> GridboardSettings {
    match std::fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to parse {}: {}", path.display(), e);
                GridboardSettings::default()
            }
        },
        Err(_) => GridboardSettings::default(),
    }
}
