//! Generation-time errors.
//!
//! Every error is raised before the first write of the block it concerns, so
//! a failed request never leaves a half-emitted include guard behind.

use thiserror::Error;

/// A rejected generation request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// Prefix plus type name reached the identifier length limit.
    #[error(
        "name too long: prefix `{prefix}` plus `{type_name}` is {len} bytes, must be under {max}"
    )]
    NameTooLong {
        prefix: String,
        type_name: String,
        len: usize,
        max: usize,
    },

    /// A type, enum, or union name was empty.
    #[error("empty {what} name")]
    EmptyName { what: &'static str },

    /// An enum or tagged union was requested with no variants.
    #[error("`{name}` needs at least one variant")]
    NoVariants { name: String },

    /// Parallel field-name and field-type lists differ in length.
    #[error("field count mismatch: {names} names but {types} types")]
    FieldCountMismatch { names: usize, types: usize },
}
