use miette::Diagnostic;
use thiserror::Error;

/// Main error type for framepack operations
#[derive(Error, Diagnostic, Debug)]
pub enum FramepackError {
    #[error("IO error: {0}")]
    #[diagnostic(code(framepack::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(framepack::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(framepack::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid grid: {message}")]
    #[diagnostic(code(framepack::grid))]
    InvalidGrid {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Precondition violation: {message}")]
    #[diagnostic(code(framepack::precondition))]
    Precondition {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, FramepackError>;
