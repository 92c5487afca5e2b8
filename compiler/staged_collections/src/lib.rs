//! Staged Collections - generic container building blocks
//!
//! Native counterparts of the containers that `staged_codegen` emits as C
//! text. Each type keeps the operation contracts of its generated twin:
//!
//! - [`Slice`]: borrowed fixed-size view with bounds-checked sub-slicing
//! - [`StagedVec`]: growable array with an explicit capacity policy
//! - [`VecArena`]: buffer pool backing the arena variant of [`StagedVec`]
//! - [`SparseSet`]: O(1) insert/lookup/remove keyed by small integers
//! - [`staged_enum!`] / [`tagged_union!`]: enum with a name table, and a
//!   tagged union with tag-checked accessors
//!
//! # Failure Model
//!
//! Precondition violations (out-of-range index, popping an empty vector,
//! reading the wrong union variant) panic. Absence in a [`SparseSet`] is an
//! ordinary `None`.

mod macros;
mod slice;
mod sparse_set;
mod vec;

pub use slice::Slice;
pub use sparse_set::SparseSet;
pub use vec::{StagedVec, VecArena};
