use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
/// Delimited table error
pub enum DelimitedError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O failure: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid dialect: {0}")]
    InvalidDialect(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
