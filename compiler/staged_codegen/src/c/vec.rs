//! Vector template: a growable `{ items, len, cap }` array.
//!
//! Growth policy shared by both allocation paths: an unallocated vector gets
//! exactly the requested capacity; an under-sized one grows to twice the
//! request. The arena path is wrapped in `#ifdef _CORE_H_` so the block
//! compiles with or without the arena header.

use super::{emit_function, require_name};
use crate::{CodegenContext, CodegenError, NameCases};

/// Emit the `{Pascal}Vec` type for `ty`.
///
/// Guard: `_{ALLCAPS}VEC_`.
#[tracing::instrument(level = "debug", skip(ctx))]
pub fn emit_vec(ctx: &mut CodegenContext, prefix: &str, ty: &str) -> Result<(), CodegenError> {
    require_name(ty, "vector element type")?;
    let cases = NameCases::derive(prefix, ty)?;

    let guard = format!("_{}VEC_", cases.all_caps);
    if !ctx.open_guard(&guard) {
        return Ok(());
    }
    ctx.writeln("#include <stdlib.h>");
    ctx.writeln("#include <assert.h>");
    ctx.newline();

    let NameCases {
        type_name: ty,
        all_lower: lower,
        pascal,
        ..
    } = &cases;

    ctx.writeln("typedef struct {");
    ctx.indent();
    ctx.writeln(&format!("{ty} * items;"));
    ctx.writeln("unsigned long len;");
    ctx.writeln("unsigned long cap;");
    ctx.dedent();
    ctx.writeln(&format!("}} {pascal}Vec;"));
    ctx.newline();

    emit_function(
        ctx,
        &format!("void {lower}vec_ensure_capacity({pascal}Vec * vec, unsigned long capacity)"),
        &[
            "if(vec->items == NULL || vec->cap <= 0) {",
            "    vec->cap = capacity;",
            "    vec->items = malloc(vec->cap * sizeof(vec->items[0]));",
            "    assert(vec->items);",
            "    vec->len = 0;",
            "} else if(vec->cap < capacity) {",
            "    vec->cap = capacity * 2;",
            "    vec->items = realloc(vec->items, vec->cap * sizeof(vec->items[0]));",
            "    assert(vec->items);",
            "}",
            "assert(vec->cap >= capacity);",
        ],
    );

    ctx.writeln("#ifdef _CORE_H_");
    emit_function(
        ctx,
        &format!(
            "void {lower}vec_ensure_capacity_via_arena({pascal}Vec * vec, core_Arena * arena, unsigned long capacity)"
        ),
        &[
            "if(vec->items == NULL || vec->cap <= 0) {",
            "    vec->cap = capacity;",
            "    vec->items = core_arena_alloc(arena, vec->cap * sizeof(vec->items[0]));",
            "    assert(vec->items);",
            "    vec->len = 0;",
            "} else if(vec->cap < capacity) {",
            "    vec->cap = capacity * 2;",
            "    vec->items = core_arena_realloc(arena, vec->items, vec->cap * sizeof(vec->items[0]));",
            "    assert(vec->items);",
            "}",
            "assert(vec->cap >= capacity);",
        ],
    );
    ctx.writeln("#endif /*_CORE_H_*/");
    ctx.newline();

    let store = "vec->items[vec->len++] = item;";
    let grow = format!("{lower}vec_ensure_capacity(vec, vec->len + 1);");
    emit_function(
        ctx,
        &format!("void {lower}vec_append({pascal}Vec * vec, {ty} item)"),
        &[&grow, store],
    );

    let grow_via_arena = format!("{lower}vec_ensure_capacity_via_arena(vec, arena, vec->len + 1);");
    ctx.writeln("#ifdef _CORE_H_");
    emit_function(
        ctx,
        &format!("void {lower}vec_append_via_arena({pascal}Vec * vec, core_Arena * arena, {ty} item)"),
        &[&grow_via_arena, store],
    );
    ctx.writeln("#endif /*_CORE_H_*/");
    ctx.newline();

    emit_function(
        ctx,
        &format!("void {lower}vec_free({pascal}Vec * vec)"),
        &[
            "if(vec->items != NULL) {",
            "    free(vec->items);",
            "}",
            "vec->len = 0;",
            "vec->cap = 0;",
            "vec->items = NULL;",
        ],
    );

    let grow_once = format!("{lower}vec_ensure_capacity(vec, vec->len + times);");
    emit_function(
        ctx,
        &format!("void {lower}vec_append_n_times({pascal}Vec * vec, {ty} item, unsigned long times)"),
        &[
            "unsigned long i = 0;",
            &grow_once,
            "for(i = 0; i < times; ++i) {",
            "    vec->items[vec->len++] = item;",
            "}",
        ],
    );

    let pad = format!("{lower}vec_append_n_times(vec, default_value, minimum_length - vec->len);");
    emit_function(
        ctx,
        &format!(
            "void {lower}vec_ensure_length({pascal}Vec * vec, {ty} default_value, unsigned long minimum_length)"
        ),
        &[
            "if(vec->len >= minimum_length) return;",
            &pad,
            "assert(vec->len >= minimum_length);",
        ],
    );

    emit_function(
        ctx,
        &format!("{ty} {lower}vec_get({pascal}Vec * vec, unsigned long index)"),
        &["assert(index < vec->len);", "return vec->items[index];"],
    );

    emit_function(
        ctx,
        &format!("{ty} {lower}vec_pop({pascal}Vec * vec)"),
        &["assert(vec->len > 0);", "return vec->items[--vec->len];"],
    );

    ctx.close_guard(&guard);
    Ok(())
}
