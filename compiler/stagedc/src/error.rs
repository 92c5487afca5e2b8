//! Driver errors: I/O, manifest parsing, usage, and generation failures.

use std::path::PathBuf;

use staged_codegen::CodegenError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error("cannot read `{path}`: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write `{path}`: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write to stdout: {0}")]
    Stdout(#[source] std::io::Error),

    #[error("invalid manifest `{path}`: {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Codegen(#[from] CodegenError),
}
