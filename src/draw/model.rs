use std::fmt;

use crate::draw::error::DrawError;

pub const MIN_STROKE_WIDTH: u32 = 1;
pub const MAX_STROKE_WIDTH: u32 = 20;
pub const DEFAULT_STROKE_WIDTH: u32 = 3;

/// The eraser paints this many times wider than the pen at the same setting.
pub const ERASER_WIDTH_FACTOR: u32 = 3;

pub const BACKGROUND: Color = Color::rgb(0xff, 0xff, 0xff);

/// The six palette swatches offered by the toolbar, in display order.
pub const SWATCHES: [Color; 6] = [
    Color::rgb(0x3b, 0x82, 0xf6), // blue
    Color::rgb(0x8b, 0x5c, 0xf6), // purple
    Color::rgb(0xef, 0x44, 0x44), // red
    Color::rgb(0x10, 0xb9, 0x81), // green
    Color::rgb(0xf5, 0x9e, 0x0b), // yellow
    Color::rgb(0x00, 0x00, 0x00), // black
];

pub const DEFAULT_COLOR: Color = SWATCHES[0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Pen,
    Eraser,
}

impl Tool {
    /// Parses a tool tag as sent by a toolbar or a script (`"pen"`, `"eraser"`).
    pub fn from_tag(tag: &str) -> Result<Self, DrawError> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "pen" => Ok(Tool::Pen),
            "eraser" => Ok(Tool::Eraser),
            _ => Err(DrawError::InvalidToolConfig(format!(
                "unrecognized tool `{tag}`"
            ))),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tool::Pen => "Pen",
            Tool::Eraser => "Eraser",
        }
    }
}

/// An opaque RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Parses `#rrggbb` or the short `#rgb` form. The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Result<Self, DrawError> {
        let invalid = || DrawError::InvalidToolConfig(format!("invalid hex color `{hex}`"));
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        match digits.len() {
            6 => Ok(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let short = |s: &str| channel(s).map(|v| v * 0x11);
                Ok(Self::rgb(
                    short(&digits[0..1])?,
                    short(&digits[1..2])?,
                    short(&digits[2..3])?,
                ))
            }
            _ => Err(invalid()),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_rgba_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A coordinate in surface-local pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The active tool, color, and width. Read fresh by the renderer on every segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolState {
    pub tool: Tool,
    pub color: Color,
    pub width: u32,
}

impl ToolState {
    pub fn new(tool: Tool, color: Color, width: u32) -> Self {
        Self {
            tool,
            color,
            width: clamp_width(width),
        }
    }

    /// Color the renderer deposits: the ink color for the pen, `background` for the eraser.
    pub fn paint_color(&self, background: Color) -> Color {
        match self.tool {
            Tool::Pen => self.color,
            Tool::Eraser => background,
        }
    }

    /// Painted stroke width in pixels.
    ///
    /// `width` is public, so it is clamped again here in case a caller built
    /// the state by hand.
    pub fn paint_width(&self) -> u32 {
        let width = clamp_width(self.width);
        match self.tool {
            Tool::Pen => width,
            Tool::Eraser => width.saturating_mul(ERASER_WIDTH_FACTOR),
        }
    }
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new(Tool::Pen, DEFAULT_COLOR, DEFAULT_STROKE_WIDTH)
    }
}

pub fn clamp_width(width: u32) -> u32 {
    width.clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH)
}
