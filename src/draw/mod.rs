pub mod actions;
pub mod board;
pub mod error;
pub mod input;
pub mod mapper;
pub mod model;
pub mod palette;
pub mod render;
pub mod session;
pub mod surface;

pub use board::{BoardConfig, DrawingSurface, PointerState};
pub use error::DrawError;
pub use input::{PointerEvent, PointerInput};
pub use model::{Color, Point, Tool, ToolState};
pub use session::BoardSession;
