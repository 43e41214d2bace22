//! Materialization: configuration spaces into estimator, pipeline, and
//! randomized-search descriptors

pub mod estimator;
pub mod pipeline;
pub mod registry;
pub mod search;

pub use estimator::{as_estimator, Estimator};
pub use pipeline::{as_pipeline, ImputeStrategy, Pipeline};
pub use registry::EstimatorKind;
pub use search::{as_search, distributions, ParamDistribution, RandomizedSearch, SearchOptions};
