//! Error taxonomy for the Draw-to-SVG pipeline.
use thiserror::Error;

/// Errors that can abort conversion of a whole file, or (for `BadSprite`) a
/// single object within one. The object dispatcher in [`crate::orchestrator`]
/// catches `BadSprite` and a handful of other recoverable kinds and logs them
/// via `log::warn!` instead of propagating them; everything else here is
/// fatal for the file being converted.
#[derive(Error, Debug)]
pub enum DrawError {
    #[error("not a Draw file: bad magic number {0:#x}")]
    WrongMagic(u32),

    #[error("truncated Draw file: tried to read past end of stream at offset {0}")]
    Truncated(usize),

    #[error("bad sprite: {0}")]
    BadSprite(String),

    #[error("unsupported paper size in options object")]
    UnknownPaperSize,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, DrawError>;
