// File: crates/perfchart-core/src/error.rs
// Summary: Error type for target lookup and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// No drawing surface is registered under the requested id.
    #[error("render target `{0}` not found")]
    TargetNotFound(String),

    #[error("failed to create raster surface")]
    Surface,

    #[error("PNG encode failed")]
    Encode,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
