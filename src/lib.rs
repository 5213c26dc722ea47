pub mod draw;
#[cfg(feature = "gui")]
pub mod gui;
pub mod logging;
pub mod settings;
