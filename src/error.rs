use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The field must be at least 3x3 so that the interior is non-empty.
    #[error("field dimensions {height}x{width} leave no interior (minimum is 3x3)")]
    InvalidDimensions { height: usize, width: usize },

    /// Terminal I/O failed while drawing a frame.
    #[error("terminal i/o error: {0}")]
    Io(#[from] std::io::Error),
}
