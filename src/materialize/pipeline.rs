//! Fixed preprocessing pipeline wrapped around a materialized estimator

use crate::error::{Result, TunebotError};
use crate::materialize::estimator::{as_estimator, Estimator};
use crate::space::config_space::{ConfigSpace, Configuration};
use crate::space::hyperparameter::ParamValue;
use crate::space::wrapper::IMPUTER_STRATEGY_PARAM;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Numeric-imputation strategy of the pipeline's imputer stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImputeStrategy {
    Mean,
    Median,
    MostFrequent,
}

impl ImputeStrategy {
    fn parse(value: &ParamValue) -> Result<Self> {
        match value.as_str() {
            Some("mean") => Ok(ImputeStrategy::Mean),
            Some("median") => Ok(ImputeStrategy::Median),
            Some("most_frequent") => Ok(ImputeStrategy::MostFrequent),
            _ => Err(TunebotError::ValidationError(format!(
                "invalid imputation strategy '{value}'; expected mean, median, or most_frequent"
            ))),
        }
    }
}

/// The fixed preprocessing pipeline: numeric imputation, categorical constant
/// fill, standard scaling (numeric only), one-hot encoding with unknown
/// categories mapped to an all-zero row, a variance threshold, and the
/// estimator as the final stage.
///
/// Stage hyperparameters are addressed through the flat prefixed namespace
/// produced by [`crate::space::SpaceWrapper::wrap_in_fixed_pipeline`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    numeric_imputer: ImputeStrategy,
    /// Fill value for missing categorical entries
    categorical_fill: ParamValue,
    /// Standard scaling applied to numeric columns
    scale_numeric: bool,
    /// Unknown categories at inference time encode to all zeros
    ignore_unknown_categories: bool,
    variance_threshold: f64,
    numeric_indices: Vec<usize>,
    categorical_indices: Vec<usize>,
    estimator: Estimator,
}

impl Pipeline {
    pub fn estimator(&self) -> &Estimator {
        &self.estimator
    }

    pub fn numeric_imputer(&self) -> ImputeStrategy {
        self.numeric_imputer
    }

    pub fn numeric_indices(&self) -> &[usize] {
        &self.numeric_indices
    }

    pub fn categorical_indices(&self) -> &[usize] {
        &self.categorical_indices
    }

    /// Set one parameter through the flat prefixed namespace.
    ///
    /// `columntransformer__numeric__imputer__strategy` routes to the imputer
    /// stage; `"{estimator_prefix}__{name}"` routes to the estimator. Any
    /// other route is an error.
    pub fn set_param(&mut self, name: &str, value: ParamValue) -> Result<()> {
        if name == IMPUTER_STRATEGY_PARAM {
            self.numeric_imputer = ImputeStrategy::parse(&value)?;
            return Ok(());
        }
        let estimator_scope = format!("{}__", self.estimator.kind().stage_prefix());
        if let Some(rest) = name.strip_prefix(&estimator_scope) {
            self.estimator.set_param(rest, value);
            return Ok(());
        }
        Err(TunebotError::NotFoundError(format!(
            "parameter '{name}' does not address any pipeline stage"
        )))
    }

    /// Apply a full sampled configuration of prefixed parameters
    pub fn apply(&mut self, configuration: &Configuration) -> Result<()> {
        for (name, value) in configuration.iter() {
            self.set_param(name, value.clone())?;
        }
        Ok(())
    }
}

/// Build the fixed pipeline around the estimator resolved from `space`.
///
/// `numeric_indices` and `categorical_indices` partition the feature columns
/// and must be disjoint; overlap silently corrupts downstream column
/// transforms, so it is rejected here.
pub fn as_pipeline(
    space: &ConfigSpace,
    numeric_indices: &[usize],
    categorical_indices: &[usize],
) -> Result<Pipeline> {
    let numeric: HashSet<usize> = numeric_indices.iter().copied().collect();
    let overlap: Vec<usize> = categorical_indices
        .iter()
        .copied()
        .filter(|idx| numeric.contains(idx))
        .collect();
    if !overlap.is_empty() {
        return Err(TunebotError::ValidationError(format!(
            "numeric and categorical feature indices overlap: {overlap:?}"
        )));
    }

    let estimator = as_estimator(space, true)?;
    debug!(
        identity = space.identity(),
        numeric = numeric_indices.len(),
        categorical = categorical_indices.len(),
        "materializing pipeline"
    );
    let mut pipeline = Pipeline {
        numeric_imputer: ImputeStrategy::Mean,
        categorical_fill: ParamValue::Int(-1),
        scale_numeric: true,
        ignore_unknown_categories: true,
        variance_threshold: 0.0,
        numeric_indices: numeric_indices.to_vec(),
        categorical_indices: categorical_indices.to_vec(),
        estimator,
    };
    for (name, value) in space.static_meta() {
        pipeline.set_param(name, value.clone())?;
    }
    Ok(pipeline)
}
