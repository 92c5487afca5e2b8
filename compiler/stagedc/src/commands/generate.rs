//! The `gen` command: manifest in, C header out.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use staged_codegen::Manifest;

use super::read_file;
use crate::DriverError;

/// Options for `stagedc gen`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenOptions {
    /// Manifest to read.
    pub manifest: PathBuf,
    /// Output header path. `None` writes to stdout.
    pub output: Option<PathBuf>,
    /// Overrides the manifest's `prefix`.
    pub prefix: Option<String>,
    /// Drop the `#include "core.h"` preamble even if the manifest asks for it.
    pub no_arena: bool,
}

/// Parse the arguments following `gen`.
///
/// The first positional argument is the manifest; `-o` takes the next
/// argument as the output path.
pub fn parse_gen_options(args: &[String]) -> Result<GenOptions, DriverError> {
    let mut options = GenOptions::default();
    let mut manifest = None;
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];
        if arg == "-o" {
            let Some(path) = args.get(i + 1) else {
                return Err(DriverError::Usage("-o requires a path".into()));
            };
            options.output = Some(PathBuf::from(path));
            i += 2;
            continue;
        }

        if let Some(path) = arg.strip_prefix("--output=") {
            options.output = Some(PathBuf::from(path));
        } else if let Some(prefix) = arg.strip_prefix("--prefix=") {
            options.prefix = Some(prefix.to_string());
        } else if arg == "--no-arena" {
            options.no_arena = true;
        } else if arg.starts_with('-') {
            return Err(DriverError::Usage(format!("unknown option '{arg}'")));
        } else if manifest.is_none() {
            manifest = Some(PathBuf::from(arg));
        } else {
            return Err(DriverError::Usage(format!("unexpected argument '{arg}'")));
        }
        i += 1;
    }

    options.manifest =
        manifest.ok_or_else(|| DriverError::Usage("missing manifest path".into()))?;
    Ok(options)
}

/// Read and parse a manifest file.
pub fn load_manifest(path: &Path) -> Result<Manifest, DriverError> {
    let text = read_file(path)?;
    serde_json::from_str(&text).map_err(|source| DriverError::Manifest {
        path: path.to_path_buf(),
        source,
    })
}

/// Run `gen`: load the manifest, apply overrides, emit, and write.
#[tracing::instrument(level = "debug", skip(options), fields(manifest = %options.manifest.display()))]
pub fn generate_file(options: &GenOptions) -> Result<(), DriverError> {
    let mut manifest = load_manifest(&options.manifest)?;
    if let Some(prefix) = &options.prefix {
        manifest.prefix.clone_from(prefix);
    }
    if options.no_arena {
        manifest.arena = false;
    }

    tracing::debug!(requests = manifest.requests.len(), "manifest loaded");
    let header = manifest.generate()?;

    match &options.output {
        Some(path) => std::fs::write(path, header).map_err(|source| DriverError::Write {
            path: path.clone(),
            source,
        }),
        None => std::io::stdout()
            .lock()
            .write_all(header.as_bytes())
            .map_err(DriverError::Stdout),
    }
}
