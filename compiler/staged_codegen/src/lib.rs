//! Staged C Code Generation
//!
//! Emits specialized (monomorphized) C containers for a named element type.
//! Every generator derives a consistent set of identifiers from a prefix and
//! a type name, then writes self-contained include-guarded blocks:
//!
//! | shape        | type            | guard                   |
//! |--------------|-----------------|-------------------------|
//! | slice        | `{Pascal}Slice` | `_{ALLCAPS}SLICE_`       |
//! | vector       | `{Pascal}Vec`   | `_{ALLCAPS}VEC_`         |
//! | sparse set   | `{Pascal}SSet`  | `_{ALLCAPS}SSET_`        |
//! | enum         | `{Pascal}`      | `_{ALLCAPS}ENUM_`        |
//! | tagged union | `{Pascal}`      | `_{ALLCAPS}TAGGEDUNION_` |
//!
//! # Architecture
//!
//! ```text
//! Request / Manifest
//!        ↓
//!    NameCases       (derive lower / Pascal / ALL_CAPS spellings)
//!        ↓
//!   c::emit_*        (fixed templates, composite ones call leaf ones)
//!        ↓
//!  CodegenContext    (text sink + emitted-guard tracking)
//! ```
//!
//! Names are validated before anything is written: an over-long or empty
//! name is a [`CodegenError`], never a truncated identifier.

pub mod c;
mod context;
mod error;
pub mod names;
mod request;

pub use c::UnionField;
pub use context::CodegenContext;
pub use error::CodegenError;
pub use names::{NameCases, MAX_NAME_LEN};
pub use request::{Manifest, Request};
