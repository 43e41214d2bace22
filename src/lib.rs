//! tunebot - Configuration-space core for automated classifier benchmarking
//!
//! This crate provides the configuration-space machinery of a classifier
//! experiment harness:
//! - Declarative hyperparameter spaces with typed domains, defaults, and
//!   conditional activation
//! - A catalog of search spaces for the supported classifier families
//! - Seeded, reproducible random sampling of configurations
//! - Materialization into estimator, preprocessing-pipeline, and
//!   randomized-search descriptors
//!
//! Running materialized models against datasets and persisting results are
//! the jobs of external collaborators; this crate guarantees that a sampled
//! configuration is a flat string-keyed mapping such collaborators can
//! serialize.
//!
//! # Modules
//!
//! - [`space`] - Hyperparameters, conditions, configuration spaces, and the
//!   pipeline-embedding builder
//! - [`catalog`] - Per-classifier configuration-space definitions
//! - [`sampler`] - Seeded random configuration sampling
//! - [`materialize`] - Estimator / pipeline / randomized-search descriptors

// Core error handling
pub mod error;

pub mod catalog;
pub mod materialize;
pub mod sampler;
pub mod space;

pub use error::{Result, TunebotError};

/// Re-export commonly used types
pub mod prelude {
    // Error handling
    pub use crate::error::{Result, TunebotError};

    // Space model
    pub use crate::space::{
        Condition, ConfigSpace, Configuration, Domain, Hyperparameter, ParamValue, SpaceWrapper,
        WrapState, IMPUTER_STRATEGY_PARAM,
    };

    // Sampling
    pub use crate::sampler::{sample, RandomSampler};

    // Catalog
    pub use crate::catalog::{available_spaces, search_space, ALL_WILDCARD};

    // Materialization
    pub use crate::materialize::{
        as_estimator, as_pipeline, as_search, distributions, Estimator, EstimatorKind,
        ImputeStrategy, ParamDistribution, Pipeline, RandomizedSearch, SearchOptions,
    };
}
