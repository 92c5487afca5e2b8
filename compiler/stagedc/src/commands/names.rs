//! The `names` command: show the identifier spellings for a type.

use staged_codegen::NameCases;

use crate::DriverError;

/// Render the four spellings derived from `prefix` and `ty`, one per line.
pub fn show_names(prefix: &str, ty: &str) -> Result<String, DriverError> {
    let cases = NameCases::derive(prefix, ty)?;
    Ok(format!(
        "type:   {}\nlower:  {}\npascal: {}\ncaps:   {}\n",
        cases.type_name, cases.all_lower, cases.pascal, cases.all_caps
    ))
}
