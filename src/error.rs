use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrinceError {
    /// Invalid argument value or argument combination.
    #[error("{0}")]
    Usage(String),

    /// Failure opening the requested output file.
    #[error("{path}: {source}")]
    OutputFile {
        path: String,
        source: std::io::Error,
    },

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catch all for violated internal invariants.
    #[error("internal error: {0}")]
    Internal(String),
}
