//! Error types

use lcd_client::LcdClientError;
use thiserror::Error;

/// Errors surfaced by LcdCli commands
#[derive(Debug, Error)]
pub enum Error {
    /// Failure reported by the LCD client
    #[error("{0}")]
    Client(#[from] LcdClientError),
    /// Failure reading an input file
    #[error("error reading file: {0}")]
    FileIO(#[from] std::io::Error),
    /// Input file is not valid JSON
    #[error("error parsing JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Malformed command line argument
    #[error("invalid argument: {0}")]
    Argument(String),
}
