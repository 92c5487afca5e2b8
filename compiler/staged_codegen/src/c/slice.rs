//! Slice template: a `{ ptr, len }` view with bounds-checked sub-slicing.

use super::{emit_function, require_name};
use crate::{CodegenContext, CodegenError, NameCases};

/// Emit the `{Pascal}Slice` type for `ty`.
///
/// Guard: `_{ALLCAPS}SLICE_`. Functions: `{lower}slice_init`,
/// `{lower}slice_get_first_n_items`, `{lower}slice_get_last_n_items`,
/// `{lower}slice_trim_first_n_items`, `{lower}slice_trim_last_n_items`,
/// plus the `{ALLCAPS}SLICE_FROM_ARRAY` macro.
#[tracing::instrument(level = "debug", skip(ctx))]
pub fn emit_slice(ctx: &mut CodegenContext, prefix: &str, ty: &str) -> Result<(), CodegenError> {
    require_name(ty, "slice element type")?;
    let NameCases {
        type_name,
        all_lower: lower,
        pascal,
        all_caps: caps,
    } = NameCases::derive(prefix, ty)?;

    let guard = format!("_{caps}SLICE_");
    if !ctx.open_guard(&guard) {
        return Ok(());
    }
    ctx.writeln("#include <assert.h>");
    ctx.newline();

    ctx.writeln("typedef struct {");
    ctx.indent();
    ctx.writeln(&format!("{type_name} * ptr;"));
    ctx.writeln("unsigned long len;");
    ctx.dedent();
    ctx.writeln(&format!("}} {pascal}Slice;"));
    ctx.newline();

    let zeroed = format!("{pascal}Slice result = {{0}};");
    emit_function(
        ctx,
        &format!("{pascal}Slice {lower}slice_init({type_name} * items, unsigned long count)"),
        &[&zeroed, "result.ptr = items;", "result.len = count;", "return result;"],
    );

    ctx.writeln(&format!(
        "#define {caps}SLICE_FROM_ARRAY(array) {lower}slice_init(array, (sizeof(array) / sizeof(array[0])))"
    ));
    ctx.newline();

    let copy = format!("{pascal}Slice result = slice;");
    let sub_slices: [(&str, &[&str]); 4] = [
        ("get_first_n_items", &["result.len = n;"]),
        ("get_last_n_items", &["result.len = n;", "result.ptr += slice.len - n;"]),
        ("trim_first_n_items", &["result.len = slice.len - n;", "result.ptr += n;"]),
        ("trim_last_n_items", &["result.len = slice.len - n;"]),
    ];
    for (op, adjust) in sub_slices {
        let mut body = vec![copy.as_str(), "assert(n <= slice.len);"];
        body.extend_from_slice(adjust);
        body.push("return result;");
        emit_function(
            ctx,
            &format!("{pascal}Slice {lower}slice_{op}({pascal}Slice slice, unsigned long n)"),
            &body,
        );
    }

    ctx.close_guard(&guard);
    Ok(())
}
