//! C emission templates.
//!
//! One module per container shape. Every generator derives its names first,
//! then writes one or more include-guarded blocks through the context:
//!
//! ```text
//! emit_tagged_union ──► emit_enum
//! emit_sparse_set   ──► emit_vec (index type) ──► emit_vec (element type)
//! emit_slice, emit_vec, emit_enum: leaf templates
//! ```

mod enumeration;
mod slice;
mod sparse_set;
mod tagged_union;
mod vec;

pub use enumeration::emit_enum;
pub use slice::emit_slice;
pub use sparse_set::{emit_sparse_set, INDEX_TYPE};
pub use tagged_union::{emit_tagged_union, UnionField};
pub use vec::emit_vec;

use crate::{CodegenContext, CodegenError};

/// Emit a function whose body lines are written one indentation level in.
fn emit_function(ctx: &mut CodegenContext, signature: &str, body: &[&str]) {
    ctx.writeln(&format!("{signature} {{"));
    ctx.indent();
    for line in body {
        ctx.writeln(line);
    }
    ctx.dedent();
    ctx.writeln("}");
    ctx.newline();
}

fn require_name(name: &str, what: &'static str) -> Result<(), CodegenError> {
    if name.trim().is_empty() {
        return Err(CodegenError::EmptyName { what });
    }
    Ok(())
}
