use crate::draw::error::DrawError;
use crate::draw::model::{clamp_width, Color, Tool, ToolState, SWATCHES};

/// Narrow setter surface over a board's [`ToolState`].
///
/// Changes apply from the next painted segment, so switching tools mid-stroke
/// does not end the stroke.
pub struct ToolPalette<'a> {
    state: &'a mut ToolState,
}

impl<'a> ToolPalette<'a> {
    pub fn new(state: &'a mut ToolState) -> Self {
        Self { state }
    }

    pub fn select_tool(&mut self, tool: Tool) {
        if self.state.tool != tool {
            tracing::debug!(from = ?self.state.tool, to = ?tool, "tool selected");
        }
        self.state.tool = tool;
    }

    /// Selects a tool by tag. Unknown tags leave the current tool in place.
    pub fn select_tool_tag(&mut self, tag: &str) -> Result<Tool, DrawError> {
        match Tool::from_tag(tag) {
            Ok(tool) => {
                self.select_tool(tool);
                Ok(tool)
            }
            Err(e) => {
                tracing::warn!(tag, keep = ?self.state.tool, "rejected tool tag");
                Err(e)
            }
        }
    }

    /// Any color is accepted; the swatches are only the toolbar's suggestions.
    pub fn select_color(&mut self, color: Color) {
        self.state.color = color;
    }

    /// Parses and selects a hex color. Malformed input keeps the current color.
    pub fn select_color_hex(&mut self, hex: &str) -> Result<Color, DrawError> {
        let color = Color::from_hex(hex).inspect_err(|_| {
            tracing::warn!(hex, keep = %self.state.color, "rejected color");
        })?;
        self.select_color(color);
        Ok(color)
    }

    /// Selects one of the six fixed swatches. Returns false for an unknown index.
    pub fn select_swatch(&mut self, index: usize) -> bool {
        match SWATCHES.get(index) {
            Some(color) => {
                self.select_color(*color);
                true
            }
            None => false,
        }
    }

    /// Sets the stroke width, clamped to 1..=20. Returns the stored width.
    pub fn set_width(&mut self, width: i64) -> u32 {
        let clamped = clamp_width(width.clamp(0, u32::MAX as i64) as u32);
        if clamped as i64 != width {
            tracing::debug!(requested = width, clamped, "stroke width clamped");
        }
        self.state.width = clamped;
        clamped
    }

    pub fn state(&self) -> &ToolState {
        self.state
    }
}
