use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    /// Errors originating from the core baleq library.
    #[error("Balancing error: {0}")]
    Balance(#[from] baleq::BalanceError),

    /// I/O errors associated with a specific file path.
    #[error("I/O error for '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// General I/O errors not tied to a specific file.
    #[error("I/O error: {0}")]
    GenericIo(#[from] std::io::Error),

    /// Standard input was selected but contained no equation.
    #[error("No equation found on standard input")]
    EmptyInput,
}
