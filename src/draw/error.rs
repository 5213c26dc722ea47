use thiserror::Error;

/// Failures the drawing core reports to its host.
#[derive(Debug, Error)]
pub enum DrawError {
    /// The pixel buffer could not be allocated when the surface was created.
    #[error("drawing surface is unavailable: {0}")]
    SurfaceUnavailable(String),
    #[error("invalid tool configuration: {0}")]
    InvalidToolConfig(String),
    #[error("failed to export drawing: {0}")]
    Export(String),
}
