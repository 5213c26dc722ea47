use eframe::egui;
use study_board::gui::WhiteboardApp;
use study_board::logging;
use study_board::settings::Settings;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load("settings.json")?;
    logging::init(settings.debug_logging, settings.log_file.clone());
    tracing::debug!(?settings, "settings loaded");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Study Board",
        native_options,
        Box::new(move |_cc| Box::new(WhiteboardApp::new(settings))),
    )
    .map_err(|e| anyhow::anyhow!("failed to start the whiteboard window: {e}"))?;
    Ok(())
}
