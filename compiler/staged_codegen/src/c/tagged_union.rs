//! Tagged-union template: a tag enum plus `make`/`get` per field.

use super::{emit_enum, emit_function, require_name};
use crate::names::upper;
use crate::{CodegenContext, CodegenError, NameCases};

/// One variant of a tagged union.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "manifest", derive(serde::Serialize, serde::Deserialize))]
pub struct UnionField {
    /// Union member name, used verbatim.
    pub name: String,
    /// C type of the member.
    pub ty: String,
}

impl UnionField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// Pair parallel name and type lists.
    pub fn zip<N, T>(names: &[N], types: &[T]) -> Result<Vec<Self>, CodegenError>
    where
        N: AsRef<str>,
        T: AsRef<str>,
    {
        if names.len() != types.len() {
            return Err(CodegenError::FieldCountMismatch {
                names: names.len(),
                types: types.len(),
            });
        }
        Ok(names
            .iter()
            .zip(types)
            .map(|(n, t)| Self::new(n.as_ref(), t.as_ref()))
            .collect())
    }
}

/// Emit the `{name}Tag` enum followed by the `{Pascal}` union struct.
///
/// Guard: `_{ALLCAPS}TAGGEDUNION_`. Per field: `{lower}_{field}_make` and
/// `{lower}_{field}_get`, the latter asserting the tag before reading.
#[tracing::instrument(level = "debug", skip(ctx, fields), fields(count = fields.len()))]
pub fn emit_tagged_union(
    ctx: &mut CodegenContext,
    prefix: &str,
    name: &str,
    fields: &[UnionField],
) -> Result<(), CodegenError> {
    require_name(name, "tagged union")?;
    for field in fields {
        require_name(&field.name, "union field")?;
        require_name(&field.ty, "union field type")?;
    }
    let tag_name = format!("{name}Tag");
    let tag = NameCases::derive(prefix, &tag_name)?;
    let cases = NameCases::derive(prefix, name)?;

    let variants: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    emit_enum(ctx, prefix, &tag_name, &variants)?;

    let guard = format!("_{}TAGGEDUNION_", cases.all_caps);
    if !ctx.open_guard(&guard) {
        return Ok(());
    }
    ctx.writeln("#include <assert.h>");
    ctx.newline();

    let NameCases {
        all_lower: lower,
        pascal,
        ..
    } = &cases;

    ctx.writeln("typedef struct {");
    ctx.indent();
    ctx.writeln(&format!("{} tag;", tag.pascal));
    ctx.writeln("union {");
    ctx.indent();
    for field in fields {
        ctx.writeln(&format!("{} {};", field.ty, field.name));
    }
    ctx.dedent();
    ctx.writeln("} as;");
    ctx.dedent();
    ctx.writeln(&format!("}} {pascal};"));
    ctx.newline();

    for UnionField { name: field, ty } in fields {
        let constant = format!("{}_{}", tag.all_caps, upper(field));
        let zeroed = format!("{pascal} result = {{0}};");
        let set_tag = format!("result.tag = {constant};");
        let set_member = format!("result.as.{field} = value;");
        emit_function(
            ctx,
            &format!("{pascal} {lower}_{field}_make({ty} value)"),
            &[&zeroed, &set_tag, &set_member, "return result;"],
        );
    }

    for UnionField { name: field, ty } in fields {
        let constant = format!("{}_{}", tag.all_caps, upper(field));
        let check = format!("assert(value.tag == {constant});");
        let read = format!("return value.as.{field};");
        emit_function(
            ctx,
            &format!("{ty} {lower}_{field}_get({pascal} value)"),
            &[&check, &read],
        );
    }

    ctx.close_guard(&guard);
    Ok(())
}
