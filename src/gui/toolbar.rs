use crate::draw::model::{MAX_STROKE_WIDTH, MIN_STROKE_WIDTH, SWATCHES};
use crate::draw::{DrawingSurface, Tool};
use eframe::egui::{self, Color32, Stroke};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    Open,
    Clear,
    Export,
    Close,
}

const SWATCH_SIZE: f32 = 18.0;

/// Draws the toolbar row. Tool, color and width edits go straight to the
/// board's palette; everything else is handed back to the caller.
pub fn show(ui: &mut egui::Ui, board: Option<&mut DrawingSurface>) -> Option<ToolbarAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        let Some(board) = board else {
            if ui.button("Open board").clicked() {
                action = Some(ToolbarAction::Open);
            }
            return;
        };

        let mut palette = board.palette();
        let mut tool = palette.state().tool;
        ui.selectable_value(&mut tool, Tool::Pen, Tool::Pen.label());
        ui.selectable_value(&mut tool, Tool::Eraser, Tool::Eraser.label());
        if tool != palette.state().tool {
            palette.select_tool(tool);
        }

        ui.separator();
        for (index, swatch) in SWATCHES.iter().enumerate() {
            let [r, g, b, _] = swatch.to_rgba_array();
            let stroke = if palette.state().color == *swatch {
                Stroke::new(2.0, ui.visuals().strong_text_color())
            } else {
                Stroke::NONE
            };
            let button = egui::Button::new("")
                .fill(Color32::from_rgb(r, g, b))
                .stroke(stroke)
                .min_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE));
            if ui
                .add(button)
                .on_hover_text(format!("{} ({})", swatch.to_hex(), index + 1))
                .clicked()
            {
                palette.select_swatch(index);
            }
        }

        ui.separator();
        let mut width = palette.state().width;
        if ui
            .add(egui::Slider::new(&mut width, MIN_STROKE_WIDTH..=MAX_STROKE_WIDTH).text("Width"))
            .changed()
        {
            palette.set_width(width as i64);
        }

        ui.separator();
        if ui.button("Clear").clicked() {
            action = Some(ToolbarAction::Clear);
        }
        if ui.button("Export").clicked() {
            action = Some(ToolbarAction::Export);
        }
        if ui.button("Close").clicked() {
            action = Some(ToolbarAction::Close);
        }
    });
    action
}
