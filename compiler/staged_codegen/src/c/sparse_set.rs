//! Sparse-set template composed from three vector instantiations.
//!
//! `sparse[index]` holds the dense position plus one, so zero marks an empty
//! slot. Removal pops the last dense value and its backing index and moves
//! them into the hole.

use super::{emit_function, emit_vec, require_name};
use crate::{CodegenContext, CodegenError, NameCases};

/// C type used for dense positions and backing indices.
pub const INDEX_TYPE: &str = "unsigned long";

/// Emit the `{Pascal}SSet` type for `ty` and the vectors it is built on.
///
/// Guard: `_{ALLCAPS}SSET_`.
#[tracing::instrument(level = "debug", skip(ctx))]
pub fn emit_sparse_set(
    ctx: &mut CodegenContext,
    prefix: &str,
    ty: &str,
) -> Result<(), CodegenError> {
    require_name(ty, "sparse set element type")?;
    let cases = NameCases::derive(prefix, ty)?;
    let index = NameCases::derive(prefix, INDEX_TYPE)?;

    let guard = format!("_{}SSET_", cases.all_caps);
    if !ctx.open_guard(&guard) {
        return Ok(());
    }
    ctx.writeln("#include <assert.h>");
    ctx.newline();

    // dense_to_sparse and sparse share one index vector type
    emit_vec(ctx, prefix, INDEX_TYPE)?;
    emit_vec(ctx, prefix, INDEX_TYPE)?;
    emit_vec(ctx, prefix, ty)?;

    let NameCases {
        type_name: ty,
        all_lower: lower,
        pascal,
        ..
    } = &cases;
    let index_vec = format!("{}Vec", index.pascal);
    let index_fn = format!("{}vec", index.all_lower);

    ctx.writeln("typedef struct {");
    ctx.indent();
    ctx.writeln(&format!("{pascal}Vec dense;"));
    ctx.writeln(&format!("{index_vec} dense_to_sparse;"));
    ctx.writeln(&format!("{index_vec} sparse;"));
    ctx.dedent();
    ctx.writeln(&format!("}} {pascal}SSet;"));
    ctx.newline();

    let pad_sparse = format!("{index_fn}_ensure_length(&sset->sparse, 0, index + 1);");
    let push_dense = format!("    {lower}vec_append(&sset->dense, item);");
    let push_index = format!("    {index_fn}_append(&sset->dense_to_sparse, index);");
    emit_function(
        ctx,
        &format!("void {lower}sset_insert({pascal}SSet * sset, unsigned long index, {ty} item)"),
        &[
            "unsigned long dense_index = 0;",
            &pad_sparse,
            "dense_index = sset->sparse.items[index];",
            "if(dense_index == 0) {",
            "    assert(sset->dense.len == sset->dense_to_sparse.len);",
            "    dense_index = sset->dense.len;",
            &push_dense,
            &push_index,
            "    sset->sparse.items[index] = dense_index + 1; /*zero is reserved for an empty slot*/",
            "} else {",
            "    sset->dense.items[dense_index - 1] = item; /*overwrite in place*/",
            "}",
        ],
    );

    let free_d2s = format!("{index_fn}_free(&sset->dense_to_sparse);");
    let free_sparse = format!("{index_fn}_free(&sset->sparse);");
    let free_dense = format!("{lower}vec_free(&sset->dense);");
    emit_function(
        ctx,
        &format!("void {lower}sset_free({pascal}SSet * sset)"),
        &[&free_d2s, &free_sparse, &free_dense],
    );

    emit_function(
        ctx,
        &format!("int {lower}sset_get({pascal}SSet * sset, unsigned long index, {ty} * result)"),
        &[
            "if(index >= sset->sparse.len) return 1;",
            "if(sset->sparse.items[index] == 0) return 1;",
            "if(result == NULL) return 0;",
            "*result = sset->dense.items[sset->sparse.items[index] - 1];",
            "return 0;",
        ],
    );

    let decl_top = format!("{ty} top = {{0}};");
    let pop_top = format!("top = {lower}vec_pop(&sset->dense);");
    let pop_top_index = format!("top_index = {index_fn}_pop(&sset->dense_to_sparse);");
    emit_function(
        ctx,
        &format!("void {lower}sset_remove({pascal}SSet * sset, unsigned long index)"),
        &[
            &decl_top,
            "unsigned long top_index = 0;",
            "unsigned long hole = 0;",
            "if(index >= sset->sparse.len) return;",
            "if(sset->sparse.items[index] == 0) return;",
            "assert(sset->dense.len == sset->dense_to_sparse.len);",
            "assert(sset->dense.len > 0);",
            "hole = sset->sparse.items[index] - 1;",
            &pop_top,
            &pop_top_index,
            "if(hole < sset->dense.len) {",
            "    sset->dense.items[hole] = top;",
            "    sset->sparse.items[top_index] = hole + 1;",
            "    sset->dense_to_sparse.items[hole] = top_index;",
            "}",
            "sset->sparse.items[index] = 0;",
        ],
    );

    ctx.close_guard(&guard);
    Ok(())
}
