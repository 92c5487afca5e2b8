//! Enum template: tag constants plus a parallel name table.

use super::require_name;
use crate::names::upper;
use crate::{CodegenContext, CodegenError, NameCases};

/// Emit the `{Pascal}` enum for `name` with one constant per variant.
///
/// Guard: `_{ALLCAPS}ENUM_`. Constants are `{ALLCAPS}_{UPPER(variant)}`
/// in declaration order; `{lower}_names[i]` spells constant `i`.
#[tracing::instrument(level = "debug", skip(ctx, variants), fields(count = variants.len()))]
pub fn emit_enum<S: AsRef<str>>(
    ctx: &mut CodegenContext,
    prefix: &str,
    name: &str,
    variants: &[S],
) -> Result<(), CodegenError> {
    require_name(name, "enum")?;
    if variants.is_empty() {
        return Err(CodegenError::NoVariants {
            name: name.to_owned(),
        });
    }
    for variant in variants {
        require_name(variant.as_ref(), "enum variant")?;
    }
    let cases = NameCases::derive(prefix, name)?;

    let guard = format!("_{}ENUM_", cases.all_caps);
    if !ctx.open_guard(&guard) {
        return Ok(());
    }

    let constants: Vec<String> = variants
        .iter()
        .map(|v| format!("{}_{}", cases.all_caps, upper(v.as_ref())))
        .collect();
    let last = constants.len() - 1;

    ctx.writeln(&format!("#define {}_COUNT {}", cases.all_caps, constants.len()));
    ctx.writeln("typedef enum {");
    ctx.indent();
    for (i, constant) in constants.iter().enumerate() {
        let sep = if i < last { "," } else { "" };
        ctx.writeln(&format!("{constant}{sep}"));
    }
    ctx.dedent();
    ctx.writeln(&format!("}} {};", cases.pascal));
    ctx.newline();

    ctx.writeln(&format!("const char * {}_names[] = {{", cases.all_lower));
    ctx.indent();
    for (i, constant) in constants.iter().enumerate() {
        let sep = if i < last { "," } else { "" };
        ctx.writeln(&format!("\"{constant}\"{sep}"));
    }
    ctx.dedent();
    ctx.writeln("};");
    ctx.newline();

    ctx.close_guard(&guard);
    Ok(())
}
