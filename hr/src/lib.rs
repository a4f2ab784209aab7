//! Employee roster domain logic: synthetic population generation, batched
//! persistence, the fixed benchmark query, and the index-tuning diagnostic.

pub mod benchmark;
pub mod error;
pub mod generator;
pub mod loader;
pub mod names;
pub mod ops;
pub mod optimizer;

pub use error::{HrError, HrResult};
