//! Lexical name derivation for generated identifiers.
//!
//! A `(prefix, type name)` pair maps to four spellings:
//!
//! | field       | `("my_", "foo bar")` | `("", "int *")` | used for                 |
//! |-------------|----------------------|-----------------|--------------------------|
//! | `type_name` | `foo bar`            | `int *`         | the real C type token    |
//! | `all_lower` | `myfoobar`           | `intptr`        | function name stems      |
//! | `pascal`    | `MyFooBar`           | `IntPtr`        | emitted type names       |
//! | `all_caps`  | `MYFOOBAR`           | `INTPTR`        | macros, guards, constants|
//!
//! Prefix and type name are scanned with the same rule, each starting a new
//! word. `_` and space are dropped, `*` becomes `ptr`. In `pascal` only a
//! segment's first character or a character right after a space is
//! capitalized; everything else keeps its original case (`foo_bar` gives
//! `Foobar`).
//!
//! The prefix is normalized too, never pasted verbatim. C callers see this
//! in every emitted identifier:
//!
//! | prefix  | type            | function                     | type name            |
//! |---------|-----------------|------------------------------|----------------------|
//! | `core_` | `unsigned long` | `coreunsignedlongvec_append` | `CoreUnsignedLongVec`|
//! | `my_`   | `int`           | `myintslice_init`            | `MyIntSlice`         |
//!
//! A header built from `core_` therefore does not link against code that
//! expects `core_unsignedlongvec_append` or `core_UnsignedLongVec`.

use crate::CodegenError;

/// Upper bound (exclusive) on `prefix.len() + type_name.len()`.
pub const MAX_NAME_LEN: usize = 128;

/// Consistent spellings of one `(prefix, type name)` pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NameCases {
    /// Original spelling, used verbatim where the C type is needed.
    pub type_name: String,
    /// All lowercase, separators stripped.
    pub all_lower: String,
    /// Capitalized words, separators stripped.
    pub pascal: String,
    /// All uppercase, separators stripped.
    pub all_caps: String,
}

impl NameCases {
    /// Derive the four spellings for `type_name` under `prefix`.
    pub fn derive(prefix: &str, type_name: &str) -> Result<Self, CodegenError> {
        let len = prefix.len() + type_name.len();
        if len >= MAX_NAME_LEN {
            return Err(CodegenError::NameTooLong {
                prefix: prefix.to_owned(),
                type_name: type_name.to_owned(),
                len,
                max: MAX_NAME_LEN,
            });
        }

        let mut cases = NameCases {
            type_name: type_name.to_owned(),
            all_lower: String::with_capacity(len + 3),
            pascal: String::with_capacity(len + 3),
            all_caps: String::with_capacity(len + 3),
        };
        cases.push_segment(prefix);
        cases.push_segment(type_name);
        Ok(cases)
    }

    fn push_segment(&mut self, segment: &str) {
        let mut prev = None;
        for (i, ch) in segment.chars().enumerate() {
            match ch {
                '_' | ' ' => {}
                '*' => {
                    self.all_lower.push_str("ptr");
                    self.pascal.push_str("Ptr");
                    self.all_caps.push_str("PTR");
                }
                _ => {
                    self.all_lower.extend(ch.to_lowercase());
                    self.all_caps.extend(ch.to_uppercase());
                    if i == 0 || prev == Some(' ') {
                        self.pascal.extend(ch.to_uppercase());
                    } else {
                        self.pascal.push(ch);
                    }
                }
            }
            prev = Some(ch);
        }
    }
}

/// Uppercase a field or variant name for use in an enum constant.
///
/// Unlike [`NameCases`], separators are kept: `dark_red` gives `DARK_RED`.
pub fn upper(name: &str) -> String {
    name.to_uppercase()
}
