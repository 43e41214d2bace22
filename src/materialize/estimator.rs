//! Estimator descriptors: a constructible model plus its parameter assignment

use crate::error::Result;
use crate::materialize::registry::EstimatorKind;
use crate::space::config_space::{ConfigSpace, Configuration};
use crate::space::hyperparameter::ParamValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// A materialized estimator: the resolved kind and the keyword arguments to
/// construct it with. Execution against data is the job of an external
/// collaborator; this crate only guarantees a well-formed, fully seeded
/// parameter assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimator {
    kind: EstimatorKind,
    params: BTreeMap<String, ParamValue>,
}

impl Estimator {
    pub fn kind(&self) -> EstimatorKind {
        self.kind
    }

    pub fn params(&self) -> &BTreeMap<String, ParamValue> {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&ParamValue> {
        self.params.get(name)
    }

    pub fn set_param(&mut self, name: impl Into<String>, value: ParamValue) {
        self.params.insert(name.into(), value);
    }

    /// Apply a configuration of unprefixed parameter values
    pub fn apply(&mut self, configuration: &Configuration) {
        for (name, value) in configuration.iter() {
            self.params.insert(name.clone(), value.clone());
        }
    }

    /// Fix `random_state` to 0 when the estimator accepts one and no
    /// parameter named (or ending in) `random_state` has been assigned.
    /// Guarantees deterministic model behavior independent of the
    /// configuration sampler's seed.
    fn seed_random_state(&mut self) {
        if !self.kind.accepts_random_state() {
            return;
        }
        let already_seeded = self.params.keys().any(|k| k.ends_with("random_state"));
        if !already_seeded {
            self.params
                .insert("random_state".to_string(), ParamValue::Int(0));
        }
    }
}

/// Resolve a space's identity to an estimator descriptor.
///
/// With `skip_meta` false, the space's `static_meta` entries are applied as
/// constructor arguments immediately after resolution.
pub fn as_estimator(space: &ConfigSpace, skip_meta: bool) -> Result<Estimator> {
    let kind = EstimatorKind::resolve(space.identity())?;
    debug!(identity = space.identity(), ?kind, "materializing estimator");
    let mut estimator = Estimator {
        kind,
        params: BTreeMap::new(),
    };
    if !skip_meta {
        for (name, value) in space.static_meta() {
            estimator.set_param(name.clone(), value.clone());
        }
    }
    estimator.seed_random_state();
    Ok(estimator)
}
