//! Route plan cost evaluation.

mod cost;

pub use cost::CostModel;
