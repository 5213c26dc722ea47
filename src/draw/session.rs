use crate::draw::board::{BoardConfig, DrawingSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardLifecycle {
    Closed,
    Open,
}

/// Owns the whiteboard between an open and a close signal.
///
/// Opening sizes the surface once from the viewport at that moment; closing
/// drops the pixels and tool state without persisting anything.
pub struct BoardSession {
    config: BoardConfig,
    board: Option<DrawingSurface>,
}

impl BoardSession {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            board: None,
        }
    }

    pub fn lifecycle(&self) -> BoardLifecycle {
        if self.board.is_some() {
            BoardLifecycle::Open
        } else {
            BoardLifecycle::Closed
        }
    }

    pub fn is_open(&self) -> bool {
        self.board.is_some()
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Opens a `width` x `height` board. An already open board is kept as is.
    pub fn open(&mut self, width: u32, height: u32) -> &mut DrawingSurface {
        let config = self.config;
        self.board.get_or_insert_with(|| {
            tracing::info!(width, height, "whiteboard opened");
            DrawingSurface::new(width, height, config)
        })
    }

    /// Tears the board down. Returns whether one was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.board.take().is_some();
        if was_open {
            tracing::info!("whiteboard closed");
        }
        was_open
    }

    /// Flips between open and closed; `width`/`height` size a newly opened board.
    pub fn toggle(&mut self, width: u32, height: u32) -> BoardLifecycle {
        if self.is_open() {
            self.close();
        } else {
            self.open(width, height);
        }
        self.lifecycle()
    }

    pub fn board(&self) -> Option<&DrawingSurface> {
        self.board.as_ref()
    }

    pub fn board_mut(&mut self) -> Option<&mut DrawingSurface> {
        self.board.as_mut()
    }
}

impl Default for BoardSession {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
