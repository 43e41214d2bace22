//! Mutable builder that augments a base configuration space before finalizing

use crate::error::{Result, TunebotError};
use crate::space::condition::Condition;
use crate::space::config_space::ConfigSpace;
use crate::space::hyperparameter::{Hyperparameter, str_choices};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Name of the numeric-imputation strategy hyperparameter added by
/// [`SpaceWrapper::wrap_in_fixed_pipeline`].
pub const IMPUTER_STRATEGY_PARAM: &str = "columntransformer__numeric__imputer__strategy";

/// Wrapping state of a [`SpaceWrapper`]. `Wrapped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WrapState {
    Unwrapped,
    Wrapped,
}

/// Builder owning a base [`ConfigSpace`] plus pending hyperparameters and
/// conditions not yet merged. [`SpaceWrapper::assemble`] produces a fully
/// independent space; later mutation of the wrapper never affects previously
/// assembled spaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceWrapper {
    base: ConfigSpace,
    pending_hyperparameters: Vec<Hyperparameter>,
    pending_conditions: Vec<Condition>,
    state: WrapState,
}

impl SpaceWrapper {
    pub fn new(
        base: ConfigSpace,
        hyperparameters: Vec<Hyperparameter>,
        conditions: Vec<Condition>,
    ) -> Self {
        Self {
            base,
            pending_hyperparameters: hyperparameters,
            pending_conditions: conditions,
            state: WrapState::Unwrapped,
        }
    }

    pub fn identity(&self) -> &str {
        self.base.identity()
    }

    pub fn state(&self) -> WrapState {
        self.state
    }

    pub fn pending_hyperparameters(&self) -> &[Hyperparameter] {
        &self.pending_hyperparameters
    }

    pub fn pending_conditions(&self) -> &[Condition] {
        &self.pending_conditions
    }

    /// Remove one pending hyperparameter by name.
    ///
    /// An unknown name is an error, not a no-op. A pending condition
    /// referencing the removed hyperparameter is left in place and surfaces
    /// as a validation error at `assemble`.
    pub fn exclude(&mut self, name: &str) -> Result<()> {
        let idx = self
            .pending_hyperparameters
            .iter()
            .position(|hp| hp.name == name)
            .ok_or_else(|| {
                TunebotError::NotFoundError(format!(
                    "no pending hyperparameter '{name}' in space '{}'",
                    self.base.identity()
                ))
            })?;
        self.pending_hyperparameters.remove(idx);
        Ok(())
    }

    /// Discard all pending conditions, yielding an unconditioned parameter set
    pub fn reset_conditions(&mut self) {
        self.pending_conditions.clear();
    }

    /// Namespace every pending hyperparameter for embedding inside the fixed
    /// preprocessing pipeline.
    ///
    /// Renames pending hyperparameters (and their condition references) to
    /// `"{prefix}__{name}"` where the prefix is the lower-cased final segment
    /// of the space identity, rewrites `static_meta` keys the same way, and
    /// adds the numeric-imputation strategy hyperparameter to the base space.
    /// One-shot: a second call is an `InvalidStateError`.
    pub fn wrap_in_fixed_pipeline(&mut self) -> Result<()> {
        if self.state == WrapState::Wrapped {
            return Err(TunebotError::InvalidStateError(
                "cannot wrap an already-wrapped space".to_string(),
            ));
        }

        let prefix = self.base.prefix();
        debug!(space = self.base.identity(), %prefix, "embedding space in fixed pipeline");

        let renames: BTreeMap<String, String> = self
            .pending_hyperparameters
            .iter()
            .map(|hp| (hp.name.clone(), format!("{prefix}__{}", hp.name)))
            .collect();
        for hp in &mut self.pending_hyperparameters {
            hp.name = renames[&hp.name].clone();
        }
        for condition in &mut self.pending_conditions {
            condition.rename(&renames);
        }

        let meta = std::mem::take(self.base.static_meta_mut());
        *self.base.static_meta_mut() = meta
            .into_iter()
            .map(|(k, v)| (format!("{prefix}__{k}"), v))
            .collect();

        self.base.add_hyperparameter(Hyperparameter::categorical(
            IMPUTER_STRATEGY_PARAM,
            str_choices(&["mean", "median", "most_frequent"]),
            "mean",
        )?)?;

        self.state = WrapState::Wrapped;
        Ok(())
    }

    /// Deep-copy the base space, merge all pending hyperparameters and
    /// conditions, and return an independent, fully validated space.
    pub fn assemble(&self) -> Result<ConfigSpace> {
        let mut space = self.base.clone();
        space.add_hyperparameters(self.pending_hyperparameters.iter().cloned())?;
        space.add_conditions(self.pending_conditions.iter().cloned())?;
        space.validate()?;
        Ok(space)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::hyperparameter::ParamValue;

    fn tree_wrapper() -> SpaceWrapper {
        let base = ConfigSpace::new("sklearn.tree.DecisionTreeClassifier");
        let hyperparameters = vec![
            Hyperparameter::categorical("criterion", str_choices(&["gini", "entropy"]), "gini")
                .unwrap(),
            Hyperparameter::uniform_int("min_samples_split", 2, 20, 2).unwrap(),
        ];
        SpaceWrapper::new(base, hyperparameters, Vec::new())
    }

    #[test]
    fn test_assemble_merges_pending() {
        let space = tree_wrapper().assemble().unwrap();
        assert_eq!(space.len(), 2);
        assert!(space.get("criterion").is_some());
    }

    #[test]
    fn test_assemble_is_independent_of_later_mutation() {
        let mut wrapper = tree_wrapper();
        let first = wrapper.assemble().unwrap();
        wrapper.exclude("criterion").unwrap();
        let second = wrapper.assemble().unwrap();
        assert!(first.get("criterion").is_some());
        assert!(second.get("criterion").is_none());
    }

    #[test]
    fn test_assemble_twice_structurally_equal() {
        let wrapper = tree_wrapper();
        assert_eq!(wrapper.assemble().unwrap(), wrapper.assemble().unwrap());
    }

    #[test]
    fn test_exclude_unknown_name_errors() {
        let mut wrapper = tree_wrapper();
        let err = wrapper.exclude("max_depth");
        assert!(matches!(err, Err(TunebotError::NotFoundError(_))));
    }

    #[test]
    fn test_reset_conditions() {
        let base = ConfigSpace::new("sklearn.svm.SVC");
        let hyperparameters = vec![
            Hyperparameter::categorical("kernel", str_choices(&["rbf", "poly"]), "rbf").unwrap(),
            Hyperparameter::uniform_int("degree", 1, 5, 3).unwrap(),
        ];
        let conditions = vec![Condition::equals("degree", "kernel", "poly")];
        let mut wrapper = SpaceWrapper::new(base, hyperparameters, conditions);
        wrapper.reset_conditions();
        let space = wrapper.assemble().unwrap();
        assert!(space.conditions().is_empty());
    }

    #[test]
    fn test_wrap_prefixes_pending_names_and_adds_imputer() {
        let mut wrapper = tree_wrapper();
        wrapper.wrap_in_fixed_pipeline().unwrap();
        for hp in wrapper.pending_hyperparameters() {
            assert!(hp.name.starts_with("decisiontreeclassifier__"), "{}", hp.name);
        }
        let space = wrapper.assemble().unwrap();
        assert!(space.get("decisiontreeclassifier__criterion").is_some());
        let imputer = space.get(IMPUTER_STRATEGY_PARAM).unwrap();
        assert_eq!(
            imputer.default_value(),
            ParamValue::from("mean")
        );
    }

    #[test]
    fn test_wrap_rewrites_condition_references() {
        let base = ConfigSpace::new("sklearn.svm.SVC");
        let hyperparameters = vec![
            Hyperparameter::categorical("kernel", str_choices(&["rbf", "poly"]), "rbf").unwrap(),
            Hyperparameter::uniform_int("degree", 1, 5, 3).unwrap(),
        ];
        let conditions = vec![Condition::equals("degree", "kernel", "poly")];
        let mut wrapper = SpaceWrapper::new(base, hyperparameters, conditions);
        wrapper.wrap_in_fixed_pipeline().unwrap();
        let space = wrapper.assemble().unwrap();
        let condition = space.condition_for("svc__degree").unwrap();
        assert_eq!(condition.parents(), vec!["svc__kernel"]);
    }

    #[test]
    fn test_wrap_rewrites_static_meta_keys() {
        let mut meta = BTreeMap::new();
        meta.insert("base_estimator".to_string(), ParamValue::from("DecisionTreeClassifier"));
        let base = ConfigSpace::with_meta("sklearn.ensemble.AdaBoostClassifier", meta);
        let mut wrapper = SpaceWrapper::new(base, Vec::new(), Vec::new());
        wrapper.wrap_in_fixed_pipeline().unwrap();
        let space = wrapper.assemble().unwrap();
        assert!(space.static_meta().contains_key("adaboostclassifier__base_estimator"));
        assert!(!space.static_meta().contains_key("base_estimator"));
    }

    #[test]
    fn test_double_wrap_errors() {
        let mut wrapper = tree_wrapper();
        wrapper.wrap_in_fixed_pipeline().unwrap();
        assert_eq!(wrapper.state(), WrapState::Wrapped);
        let err = wrapper.wrap_in_fixed_pipeline();
        assert!(matches!(err, Err(TunebotError::InvalidStateError(_))));
    }

    #[test]
    fn test_exclude_leaves_dangling_condition_to_assemble() {
        let base = ConfigSpace::new("sklearn.svm.SVC");
        let hyperparameters = vec![
            Hyperparameter::categorical("kernel", str_choices(&["rbf", "poly"]), "rbf").unwrap(),
            Hyperparameter::uniform_int("degree", 1, 5, 3).unwrap(),
        ];
        let conditions = vec![Condition::equals("degree", "kernel", "poly")];
        let mut wrapper = SpaceWrapper::new(base, hyperparameters, conditions);
        wrapper.exclude("kernel").unwrap();
        assert!(matches!(
            wrapper.assemble(),
            Err(TunebotError::ValidationError(_))
        ));
    }
}
