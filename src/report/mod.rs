//! Report module containing query building, aggregation and payload assembly

pub mod aggregate;
pub mod assemble;
pub mod query;

pub use aggregate::*;
pub use assemble::*;
pub use query::*;
