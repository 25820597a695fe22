//! Field transformation operators.
//!
//! This crate interprets a [`TransformationRule`](trademap_model::TransformationRule) against
//! one value:
//!
//! - **engine**: [`apply`], the dispatch over the closed operator set
//! - **text**: string slicing, replacement, casing, regex extraction and splitting
//! - **datetime**: token-based date parsing and rendering
//! - **numeric**: rounding to decimal places
//! - **boolean**: boolean conversion with configurable vocabularies
//! - **lookup**: operators that read tables or other record fields (`concat`, `enum_map`)
//!
//! Every operator is fail-soft: when it cannot act, [`apply`] returns the input unchanged.

pub mod boolean;
pub mod datetime;
pub mod engine;
pub mod lookup;
pub mod numeric;
pub mod text;

pub use datetime::to_strftime;
pub use engine::apply;
