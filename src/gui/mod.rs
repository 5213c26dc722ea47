mod canvas;
mod toolbar;

pub use canvas::{pointer_event, CanvasView};
pub use toolbar::ToolbarAction;

use crate::draw::{BoardSession, Tool};
use crate::settings::Settings;
use eframe::egui;
use egui_toast::{Toast, ToastKind, ToastOptions, Toasts};
use std::path::PathBuf;

pub struct WhiteboardApp {
    session: BoardSession,
    canvas: CanvasView,
    export_dir: PathBuf,
    toasts: Toasts,
    enable_toasts: bool,
    toast_duration: f32,
    open_requested: bool,
}

impl WhiteboardApp {
    pub fn new(settings: Settings) -> Self {
        Self {
            session: BoardSession::new(settings.board_config()),
            canvas: CanvasView::default(),
            export_dir: settings.export_dir,
            toasts: Toasts::new().anchor(egui::Align2::RIGHT_TOP, [10.0, 10.0]),
            enable_toasts: settings.enable_toasts,
            toast_duration: settings.toast_duration,
            open_requested: false,
        }
    }

    pub fn add_toast(&mut self, toast: Toast) {
        if self.enable_toasts {
            self.toasts.add(toast);
        }
    }

    fn notify(&mut self, kind: ToastKind, text: String) {
        let duration = self.toast_duration as f64;
        self.add_toast(Toast {
            text: text.into(),
            kind,
            options: ToastOptions::default().duration_in_seconds(duration),
        });
    }

    fn apply(&mut self, action: ToolbarAction) {
        match action {
            ToolbarAction::Open => self.open_requested = true,
            ToolbarAction::Clear => {
                if let Some(board) = self.session.board_mut() {
                    board.clear();
                }
            }
            ToolbarAction::Export => self.export(),
            ToolbarAction::Close => self.close(),
        }
    }

    fn export(&mut self) {
        let Some(board) = self.session.board() else {
            return;
        };
        match board.export_to(&self.export_dir) {
            Ok(path) => self.notify(ToastKind::Success, format!("Saved {}", path.display())),
            Err(e) => {
                tracing::error!("export failed: {e:#}");
                self.notify(ToastKind::Error, format!("Export failed: {e}"));
            }
        }
    }

    fn close(&mut self) {
        self.session.close();
        self.canvas.reset();
    }

    /// `P`/`E` tools, `1`-`6` swatches, `[`/`]` width, `Esc` close.
    fn handle_shortcuts(&mut self, ctx: &egui::Context) -> Option<ToolbarAction> {
        const SWATCH_KEYS: [egui::Key; 6] = [
            egui::Key::Num1,
            egui::Key::Num2,
            egui::Key::Num3,
            egui::Key::Num4,
            egui::Key::Num5,
            egui::Key::Num6,
        ];
        let board = self.session.board_mut()?;
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            return Some(ToolbarAction::Close);
        }
        let mut palette = board.palette();
        if ctx.input(|i| i.key_pressed(egui::Key::P)) {
            palette.select_tool(Tool::Pen);
        } else if ctx.input(|i| i.key_pressed(egui::Key::E)) {
            palette.select_tool(Tool::Eraser);
        }
        if let Some(index) = SWATCH_KEYS
            .iter()
            .position(|key| ctx.input(|i| i.key_pressed(*key)))
        {
            palette.select_swatch(index);
        }
        let width = palette.state().width as i64;
        if ctx.input(|i| i.key_pressed(egui::Key::OpenBracket)) {
            palette.set_width(width - 1);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::CloseBracket)) {
            palette.set_width(width + 1);
        }
        None
    }
}

impl eframe::App for WhiteboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions: Vec<ToolbarAction> = self.handle_shortcuts(ctx).into_iter().collect();

        egui::TopBottomPanel::top("whiteboard_toolbar").show(ctx, |ui| {
            actions.extend(toolbar::show(ui, self.session.board_mut()));
        });
        for action in actions {
            self.apply(action);
        }

        let mut unavailable = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            if std::mem::take(&mut self.open_requested) {
                let size = ui.available_size();
                let board = self
                    .session
                    .open(size.x.max(0.0) as u32, size.y.max(0.0) as u32);
                unavailable = !board.is_available();
            }
            match self.session.board_mut() {
                Some(board) => self.canvas.show(ui, board),
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.weak("Open the board to start drawing");
                    });
                }
            }
        });

        if unavailable {
            self.notify(ToastKind::Error, "Drawing surface unavailable".to_string());
        }

        if self.enable_toasts {
            self.toasts.show(ctx);
        }
    }
}
