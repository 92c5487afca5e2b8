//! Command handlers for the `stagedc` CLI.
//!
//! Each submodule implements one command. They return [`DriverError`]
//! instead of exiting so `main` owns the process status.

use std::path::Path;

use crate::DriverError;

mod generate;
mod names;

pub use generate::{generate_file, load_manifest, parse_gen_options, GenOptions};
pub use names::show_names;

/// Read a file, attaching the path to any I/O error.
pub(crate) fn read_file(path: &Path) -> Result<String, DriverError> {
    std::fs::read_to_string(path).map_err(|source| DriverError::Read {
        path: path.to_path_buf(),
        source,
    })
}
