use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pxed operations
#[derive(Error, Diagnostic, Debug)]
pub enum PxedError {
    #[error("IO error: {0}")]
    #[diagnostic(code(pxed::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(pxed::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid token: {token}")]
    #[diagnostic(code(pxed::parse))]
    InvalidToken {
        token: String,
        #[help]
        help: Option<String>,
    },

    #[error("Coordinate ({x}, {y}) is outside the {width}x{height} canvas")]
    #[diagnostic(code(pxed::bounds))]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[error("Invalid canvas size: {width}x{height}")]
    #[diagnostic(code(pxed::size))]
    InvalidSize {
        width: u32,
        height: u32,
        #[help]
        help: Option<String>,
    },

    #[error("Could not load image {path}: {message}")]
    #[diagnostic(code(pxed::image))]
    ImageLoad {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Could not save image {path}: {message}")]
    #[diagnostic(code(pxed::image))]
    ImageSave {
        path: std::path::PathBuf,
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, PxedError>;
