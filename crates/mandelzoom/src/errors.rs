use thiserror::Error;

/// Precondition violations on a view or raster size.
///
/// These are raised before any grid is built, so a degenerate view never produces a raster.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewError {
    #[error("zoom must be strictly positive and finite, got {0}")]
    NonPositiveZoom(f64),

    #[error("view centre must be finite, got ({0}, {1})")]
    NonFiniteCenter(f64, f64),

    #[error("sample grid would be empty ({width}x{height})")]
    EmptyGrid { width: u32, height: u32 },
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    View(#[from] ViewError),

    #[error("failed to encode frame: {0}")]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("render surface error: {0}")]
    Surface(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("input source unavailable: {0}")]
    Unavailable(String),

    #[error("cannot parse interaction '{0}' (expected 'x,y', 'in:x,y', 'out:x,y', 'reset' or 'quit')")]
    Parse(String),
}
