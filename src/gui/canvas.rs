use crate::draw::mapper::SurfaceBounds;
use crate::draw::surface::{DirtyRect, PixelSurface};
use crate::draw::{DrawingSurface, Point, PointerEvent, PointerInput};
use eframe::egui::{self, Color32, Pos2, Rect, Sense, TextureHandle, TextureOptions};

/// Mirrors a [`DrawingSurface`] into a texture and feeds it pointer input.
#[derive(Default)]
pub struct CanvasView {
    texture: Option<TextureHandle>,
    last_pointer: Option<Pos2>,
}

impl CanvasView {
    /// Drops the texture so the next board starts from a fresh upload.
    pub fn reset(&mut self) {
        self.texture = None;
        self.last_pointer = None;
    }

    pub fn show(&mut self, ui: &mut egui::Ui, board: &mut DrawingSurface) {
        let Some((width, height)) = board.size() else {
            ui.colored_label(ui.visuals().error_fg_color, "Drawing surface unavailable");
            return;
        };
        let (response, painter) =
            ui.allocate_painter(egui::vec2(width as f32, height as f32), Sense::drag());
        let rect = response.rect;
        board.set_bounds(SurfaceBounds::new(rect.min.x, rect.min.y));

        let events = ui.ctx().input(|i| i.events.clone());
        for event in &events {
            let last = self.last_pointer.unwrap_or(rect.min);
            if let Some(pointer) = pointer_event(event, rect, last) {
                self.last_pointer = Some(pos(pointer.position()));
                board.dispatch(pointer);
            }
        }

        self.upload(ui.ctx(), board);
        if let Some(tex) = &self.texture {
            painter.image(
                tex.id(),
                rect,
                Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0)),
                Color32::WHITE,
            );
        }
        if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
        }
    }

    fn upload(&mut self, ctx: &egui::Context, board: &mut DrawingSurface) {
        let Some(dirty) = board.take_dirty() else {
            return;
        };
        let Some(pixels) = board.pixels() else {
            return;
        };
        let full = DirtyRect::full(pixels.width(), pixels.height());
        if let (Some(tex), false) = (self.texture.as_mut(), dirty == full) {
            if let Some(region) = dirty.clamp(pixels.width(), pixels.height()) {
                tex.set_partial(
                    [region.x as usize, region.y as usize],
                    region_image(pixels, region),
                    TextureOptions::NEAREST,
                );
            }
            return;
        }
        self.texture = Some(ctx.load_texture(
            "whiteboard",
            region_image(pixels, full),
            TextureOptions::NEAREST,
        ));
    }
}

/// Translates one raw egui event into board input.
///
/// Presses only count inside `canvas`; a move that leaves it, or the pointer
/// leaving the window, becomes a leave.
pub fn pointer_event(event: &egui::Event, canvas: Rect, last: Pos2) -> Option<PointerEvent> {
    match event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: true,
            ..
        } if canvas.contains(*pos) => Some(PointerEvent::Down(point(*pos))),
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: false,
            ..
        } => Some(PointerEvent::Up(point(*pos))),
        egui::Event::PointerMoved(pos) if canvas.contains(*pos) => {
            Some(PointerEvent::Move(point(*pos)))
        }
        egui::Event::PointerMoved(pos) => Some(PointerEvent::Leave(point(*pos))),
        egui::Event::PointerGone => Some(PointerEvent::Leave(point(last))),
        _ => None,
    }
}

fn point(pos: Pos2) -> Point {
    Point::new(pos.x, pos.y)
}

fn pos(point: Point) -> Pos2 {
    Pos2::new(point.x, point.y)
}

fn region_image(pixels: &PixelSurface, region: DirtyRect) -> egui::ColorImage {
    let stride = pixels.width() as usize * 4;
    let (x, y) = (region.x as usize, region.y as usize);
    let (w, h) = (region.width as usize, region.height as usize);
    let mut rgba = Vec::with_capacity(w * h * 4);
    for row in pixels.rgba_pixels()[y * stride..]
        .chunks_exact(stride)
        .take(h)
    {
        rgba.extend_from_slice(&row[x * 4..(x + w) * 4]);
    }
    egui::ColorImage::from_rgba_unmultiplied([w, h], &rgba)
}
