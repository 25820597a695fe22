#![deny(unsafe_code)]

//! End-to-end trade record transformation.
//!
//! [`transform`] runs a mapping config over a raw record and validates the result against
//! the config's system model. [`Transformer`] does the same by config id, resolving both
//! through a [`ModelCatalog`].

pub mod catalog;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod transformer;

pub use catalog::{InMemoryCatalog, ModelCatalog};
pub use error::{Result, TransformError};
pub use options::TransformOptions;
pub use pipeline::{TransformOutcome, transform, transform_batch};
pub use transformer::Transformer;
