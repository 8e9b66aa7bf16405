//! # Application Error Type
//!
//! Startup and I/O failures for the terminal app.
//!
//! Business rejections from bodega-core (bad index, insufficient stock,
//! insufficient payment, ...) are NOT represented here: the menu loop
//! reports them to the operator and re-prompts. This type covers the
//! failures that actually end the program: the console going away and an
//! unusable seed file.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal application errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Console input/output failed (for stdin, this means EOF: the input
    /// stream closed under an interactive prompt).
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The seed file could not be read.
    #[error("failed to read seed file {path}: {source}")]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed file is not valid JSON for the expected shape.
    #[error("failed to parse seed file {path}: {source}")]
    SeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
