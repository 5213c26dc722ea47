//! The drawing surface: pointer state machine plus the pixels it paints.

use crate::draw::actions;
use crate::draw::error::DrawError;
use crate::draw::input::PointerInput;
use crate::draw::mapper::{CoordinateMapper, SurfaceBounds};
use crate::draw::model::{Color, Point, ToolState, BACKGROUND};
use crate::draw::palette::ToolPalette;
use crate::draw::render::StrokeRenderer;
use crate::draw::surface::{DirtyRect, PixelSurface};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerState {
    Idle,
    Drawing,
}

/// Construction parameters for a [`DrawingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardConfig {
    pub background: Color,
    pub tools: ToolState,
    pub bounds: SurfaceBounds,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            background: BACKGROUND,
            tools: ToolState::default(),
            bounds: SurfaceBounds::default(),
        }
    }
}

pub struct DrawingSurface {
    pixels: Option<PixelSurface>,
    background: Color,
    tools: ToolState,
    mapper: CoordinateMapper,
    renderer: StrokeRenderer,
    state: PointerState,
    dirty: Option<DirtyRect>,
}

impl DrawingSurface {
    /// Creates a surface of fixed `width` x `height`, filled with the background.
    ///
    /// If the buffer cannot be allocated the surface still comes up, but stays
    /// unavailable: painting and clearing do nothing and export fails.
    pub fn new(width: u32, height: u32, config: BoardConfig) -> Self {
        let pixels = match PixelSurface::new(width, height, config.background) {
            Ok(pixels) => {
                tracing::debug!(width, height, "drawing surface allocated");
                Some(pixels)
            }
            Err(e) => {
                tracing::warn!("{e}");
                None
            }
        };
        let dirty = pixels
            .as_ref()
            .map(|p| DirtyRect::full(p.width(), p.height()));
        Self {
            pixels,
            background: config.background,
            tools: config.tools,
            mapper: CoordinateMapper::new(config.bounds),
            renderer: StrokeRenderer::new(config.background),
            state: PointerState::Idle,
            dirty,
        }
    }

    pub fn is_available(&self) -> bool {
        self.pixels.is_some()
    }

    pub fn pixels(&self) -> Option<&PixelSurface> {
        self.pixels.as_ref()
    }

    pub fn size(&self) -> Option<(u32, u32)> {
        self.pixels.as_ref().map(|p| (p.width(), p.height()))
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state == PointerState::Drawing
    }

    pub fn tool_state(&self) -> &ToolState {
        &self.tools
    }

    pub fn palette(&mut self) -> ToolPalette<'_> {
        ToolPalette::new(&mut self.tools)
    }

    pub fn bounds(&self) -> SurfaceBounds {
        self.mapper.bounds()
    }

    /// Records where the surface currently sits in the viewport.
    pub fn set_bounds(&mut self, bounds: SurfaceBounds) {
        self.mapper.set_bounds(bounds);
    }

    /// Region painted since the last call, for hosts that mirror the pixels.
    pub fn take_dirty(&mut self) -> Option<DirtyRect> {
        self.dirty.take()
    }

    /// Fills the whole surface with the background color.
    pub fn clear(&mut self) {
        let Some(pixels) = self.pixels.as_mut() else {
            tracing::debug!("clear ignored: surface unavailable");
            return;
        };
        actions::clear(pixels, self.background);
        let full = DirtyRect::full(pixels.width(), pixels.height());
        self.mark_dirty(full);
        tracing::info!("whiteboard cleared");
    }

    /// Encodes the current pixels as PNG.
    pub fn export_image(&self) -> Result<Vec<u8>, DrawError> {
        let pixels = self.pixels.as_ref().ok_or_else(|| {
            DrawError::SurfaceUnavailable("nothing to export".to_string())
        })?;
        actions::encode_png(pixels)
    }

    /// Encodes the current pixels and writes them to `<dir>/whiteboard.png`.
    pub fn export_to(&self, output_dir: &Path) -> anyhow::Result<PathBuf> {
        let bytes = self.export_image()?;
        let path = actions::deliver_png(&bytes, output_dir)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "whiteboard exported");
        Ok(path)
    }

    fn contains(&self, local: Point) -> bool {
        match self.size() {
            Some((w, h)) => {
                local.x >= 0.0 && local.y >= 0.0 && local.x < w as f32 && local.y < h as f32
            }
            None => false,
        }
    }

    fn end_stroke(&mut self, reason: &'static str) {
        if self.state == PointerState::Drawing {
            self.renderer.end_path();
            self.state = PointerState::Idle;
            tracing::debug!(reason, "stroke ended");
        }
    }

    fn mark_dirty(&mut self, rect: DirtyRect) {
        self.dirty = Some(match self.dirty {
            Some(acc) => acc.union(rect),
            None => rect,
        });
    }
}

impl PointerInput for DrawingSurface {
    fn on_pointer_down(&mut self, viewport: Point) {
        let local = self.mapper.to_local(viewport);
        if !self.contains(local) {
            self.end_stroke("pointer down outside surface");
            tracing::debug!(x = local.x, y = local.y, "pointer down ignored");
            return;
        }
        // A new down always starts a fresh path, even if the last one never saw an up.
        self.renderer.begin_path(local);
        self.state = PointerState::Drawing;
        tracing::debug!(x = local.x, y = local.y, "stroke started");
    }

    fn on_pointer_move(&mut self, viewport: Point) {
        if self.state != PointerState::Drawing {
            return;
        }
        let local = self.mapper.to_local(viewport);
        if !self.contains(local) {
            // The stroke stops at the last point that was inside the surface.
            self.end_stroke("left surface bounds");
            return;
        }
        let Some(pixels) = self.pixels.as_mut() else {
            return;
        };
        if let Some(rect) = self.renderer.extend_path(pixels, local, &self.tools) {
            self.mark_dirty(rect);
        }
    }

    fn on_pointer_up(&mut self, _viewport: Point) {
        self.end_stroke("pointer up");
    }

    fn on_pointer_leave(&mut self, _viewport: Point) {
        self.end_stroke("pointer left");
    }
}
