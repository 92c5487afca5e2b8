//! Generation requests and manifests.
//!
//! A [`Request`] names one container shape and its inputs; a [`Manifest`]
//! bundles requests that share a prefix into one emitted header.

use crate::c::{self, UnionField};
use crate::{CodegenContext, CodegenError};

/// One generation call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "manifest",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Request {
    Slice { ty: String },
    Vec { ty: String },
    SparseSet { ty: String },
    Enum { name: String, variants: Vec<String> },
    TaggedUnion { name: String, fields: Vec<UnionField> },
}

impl Request {
    /// Emit this request's blocks under `prefix`.
    pub fn emit(&self, ctx: &mut CodegenContext, prefix: &str) -> Result<(), CodegenError> {
        match self {
            Request::Slice { ty } => c::emit_slice(ctx, prefix, ty),
            Request::Vec { ty } => c::emit_vec(ctx, prefix, ty),
            Request::SparseSet { ty } => c::emit_sparse_set(ctx, prefix, ty),
            Request::Enum { name, variants } => {
                c::emit_enum(ctx, prefix, name, variants.as_slice())
            }
            Request::TaggedUnion { name, fields } => {
                c::emit_tagged_union(ctx, prefix, name, fields)
            }
        }
    }

    /// Short kind label for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Request::Slice { .. } => "slice",
            Request::Vec { .. } => "vec",
            Request::SparseSet { .. } => "sparse_set",
            Request::Enum { .. } => "enum",
            Request::TaggedUnion { .. } => "tagged_union",
        }
    }
}

/// A batch of requests emitted into one header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "manifest", derive(serde::Serialize, serde::Deserialize))]
pub struct Manifest {
    /// Naming prefix shared by every request.
    #[cfg_attr(feature = "manifest", serde(default))]
    pub prefix: String,
    /// Emit `#include "core.h"` first, enabling the arena-backed paths.
    #[cfg_attr(feature = "manifest", serde(default))]
    pub arena: bool,
    pub requests: Vec<Request>,
}

impl Manifest {
    /// Emit every request in order into a fresh context.
    pub fn generate(&self) -> Result<String, CodegenError> {
        let mut ctx = CodegenContext::new();
        if self.arena {
            ctx.writeln("#include \"core.h\"");
            ctx.newline();
        }
        for request in &self.requests {
            tracing::debug!(kind = request.kind(), prefix = %self.prefix, "emitting request");
            request.emit(&mut ctx, &self.prefix)?;
        }
        Ok(ctx.take_output())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_concatenates_requests() {
        let manifest = Manifest {
            prefix: String::new(),
            arena: false,
            requests: vec![
                Request::Slice { ty: "int".into() },
                Request::Vec { ty: "int".into() },
            ],
        };
        let output = manifest.generate().unwrap_or_default();
        let slice_at = output.find("#ifndef _INTSLICE_");
        let vec_at = output.find("#ifndef _INTVEC_");
        assert!(slice_at.is_some());
        assert!(slice_at < vec_at);
    }

    #[test]
    fn test_arena_preamble() {
        let manifest = Manifest {
            prefix: String::new(),
            arena: true,
            requests: vec![],
        };
        assert_eq!(manifest.generate(), Ok("#include \"core.h\"\n\n".to_owned()));
    }

    #[test]
    fn test_generate_stops_at_first_error() {
        let manifest = Manifest {
            prefix: String::new(),
            arena: false,
            requests: vec![
                Request::Vec { ty: "int".into() },
                Request::Enum {
                    name: "Empty".into(),
                    variants: vec![],
                },
            ],
        };
        assert_eq!(
            manifest.generate(),
            Err(CodegenError::NoVariants {
                name: "Empty".into()
            })
        );
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(Request::SparseSet { ty: "x".into() }.kind(), "sparse_set");
        assert_eq!(
            Request::TaggedUnion {
                name: "U".into(),
                fields: vec![]
            }
            .kind(),
            "tagged_union"
        );
    }
}
