use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::draw::mapper::SurfaceBounds;
use crate::draw::model::{Color, Tool, ToolState, BACKGROUND, DEFAULT_COLOR, DEFAULT_STROKE_WIDTH};
use crate::draw::BoardConfig;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Color the board starts with and that the eraser and clear paint.
    #[serde(default = "default_background")]
    pub background: String,
    /// Initial pen color when the board opens.
    #[serde(default = "default_color")]
    pub default_color: String,
    /// Initial stroke width. Values outside 1..=20 are clamped.
    #[serde(default = "default_width")]
    pub default_width: u32,
    /// Folder `whiteboard.png` is written into.
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,
    #[serde(default)]
    pub debug_logging: bool,
    /// Also write logs to this file when set.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
    #[serde(default = "default_toasts")]
    pub enable_toasts: bool,
    #[serde(default = "default_toast_duration")]
    pub toast_duration: f32,
}

fn default_background() -> String {
    BACKGROUND.to_hex()
}

fn default_color() -> String {
    DEFAULT_COLOR.to_hex()
}

fn default_width() -> u32 {
    DEFAULT_STROKE_WIDTH
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_toasts() -> bool {
    true
}

fn default_toast_duration() -> f32 {
    3.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            background: default_background(),
            default_color: default_color(),
            default_width: default_width(),
            export_dir: default_export_dir(),
            debug_logging: false,
            log_file: None,
            enable_toasts: default_toasts(),
            toast_duration: default_toast_duration(),
        }
    }
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Resolves the configured colors and width for a new board.
    pub fn board_config(&self) -> BoardConfig {
        let background = parse_or(&self.background, BACKGROUND, "background");
        let color = parse_or(&self.default_color, DEFAULT_COLOR, "default_color");
        BoardConfig {
            background,
            tools: ToolState::new(Tool::Pen, color, self.default_width),
            bounds: SurfaceBounds::default(),
        }
    }
}

fn parse_or(hex: &str, fallback: Color, field: &str) -> Color {
    match Color::from_hex(hex) {
        Ok(color) => color,
        Err(_) => {
            tracing::warn!(
                "setting `{}` has invalid color '{}'; using {}",
                field,
                hex,
                fallback
            );
            fallback
        }
    }
}
