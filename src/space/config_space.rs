//! Configuration spaces: ordered hyperparameters, conditions, static meta

use crate::error::{Result, TunebotError};
use crate::space::condition::Condition;
use crate::space::hyperparameter::{Hyperparameter, ParamValue};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// One concrete assignment of values to the active hyperparameters of a
/// configuration space. Produced fresh per sampling call and never mutated
/// in place afterwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Configuration {
    values: BTreeMap<String, ParamValue>,
}

impl Configuration {
    pub(crate) fn from_values(values: BTreeMap<String, ParamValue>) -> Self {
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ParamValue)> {
        self.values.iter()
    }

    /// Render every value as a string, suitable for delimited-text or
    /// attribute-relation serialization by an external writer.
    pub fn to_flat_map(&self) -> BTreeMap<String, String> {
        self.values
            .iter()
            .map(|(k, v)| (k.clone(), v.to_string()))
            .collect()
    }
}

/// The declarative set of tunable hyperparameters for one classifier family.
///
/// `identity` doubles as a human label and as the dotted path of the target
/// estimator type, e.g. `"sklearn.tree.DecisionTreeClassifier"`. Built once,
/// optionally transformed by the wrapper, then treated as immutable for
/// sampling and materialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigSpace {
    identity: String,
    hyperparameters: Vec<Hyperparameter>,
    conditions: Vec<Condition>,
    static_meta: BTreeMap<String, ParamValue>,
    /// Indices into `hyperparameters` in dependency order (parents first)
    resolution_order: Vec<usize>,
}

impl ConfigSpace {
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            hyperparameters: Vec::new(),
            conditions: Vec::new(),
            static_meta: BTreeMap::new(),
            resolution_order: Vec::new(),
        }
    }

    /// Create a space carrying fixed constructor arguments that are applied
    /// at materialization and never sampled.
    pub fn with_meta(
        identity: impl Into<String>,
        static_meta: BTreeMap<String, ParamValue>,
    ) -> Self {
        Self {
            static_meta,
            ..Self::new(identity)
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Pipeline stage prefix: the last dotted segment of the identity,
    /// lower-cased (e.g. `decisiontreeclassifier`).
    pub fn prefix(&self) -> String {
        self.identity
            .rsplit('.')
            .next()
            .unwrap_or(&self.identity)
            .to_lowercase()
    }

    pub fn hyperparameters(&self) -> &[Hyperparameter] {
        &self.hyperparameters
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn static_meta(&self) -> &BTreeMap<String, ParamValue> {
        &self.static_meta
    }

    pub(crate) fn static_meta_mut(&mut self) -> &mut BTreeMap<String, ParamValue> {
        &mut self.static_meta
    }

    pub fn get(&self, name: &str) -> Option<&Hyperparameter> {
        self.hyperparameters.iter().find(|hp| hp.name == name)
    }

    pub fn len(&self) -> usize {
        self.hyperparameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hyperparameters.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        self.hyperparameters.iter().map(|hp| hp.name.as_str()).collect()
    }

    /// The condition governing `name`, if any
    pub fn condition_for(&self, name: &str) -> Option<&Condition> {
        self.conditions.iter().find(|c| c.child() == name)
    }

    pub fn add_hyperparameter(&mut self, hp: Hyperparameter) -> Result<()> {
        if self.get(&hp.name).is_some() {
            return Err(TunebotError::ValidationError(format!(
                "duplicate hyperparameter '{}' in space '{}'",
                hp.name, self.identity
            )));
        }
        self.hyperparameters.push(hp);
        self.rebuild_resolution_order()
    }

    pub fn add_hyperparameters(
        &mut self,
        hps: impl IntoIterator<Item = Hyperparameter>,
    ) -> Result<()> {
        for hp in hps {
            self.add_hyperparameter(hp)?;
        }
        Ok(())
    }

    pub fn add_condition(&mut self, condition: Condition) -> Result<()> {
        condition.validate_shape()?;
        let child = condition.child();
        if self.get(child).is_none() {
            return Err(TunebotError::ValidationError(format!(
                "condition references unknown child hyperparameter '{child}' in space '{}'",
                self.identity
            )));
        }
        for parent in condition.parents() {
            if self.get(parent).is_none() {
                return Err(TunebotError::ValidationError(format!(
                    "condition references unknown parent hyperparameter '{parent}' in space '{}'",
                    self.identity
                )));
            }
        }
        if self.condition_for(child).is_some() {
            return Err(TunebotError::ValidationError(format!(
                "hyperparameter '{child}' already has a condition; use a conjunction instead"
            )));
        }
        self.conditions.push(condition);
        // rebuilding also rejects cycles introduced by the new edge
        self.rebuild_resolution_order()
    }

    pub fn add_conditions(&mut self, conditions: impl IntoIterator<Item = Condition>) -> Result<()> {
        for condition in conditions {
            self.add_condition(condition)?;
        }
        Ok(())
    }

    /// Kahn's algorithm over the condition graph. Parents may be declared
    /// after their children; a cycle is a validation error.
    fn rebuild_resolution_order(&mut self) -> Result<()> {
        let index: HashMap<&str, usize> = self
            .hyperparameters
            .iter()
            .enumerate()
            .map(|(i, hp)| (hp.name.as_str(), i))
            .collect();

        let n = self.hyperparameters.len();
        let mut in_degree = vec![0usize; n];
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); n];
        for condition in &self.conditions {
            let Some(&child) = index.get(condition.child()) else {
                continue;
            };
            for parent in condition.parents() {
                if let Some(&parent) = index.get(parent) {
                    dependents[parent].push(child);
                    in_degree[child] += 1;
                }
            }
        }

        // declaration order among ready nodes keeps the ordering stable
        let mut ready: Vec<usize> = (0..n).filter(|&i| in_degree[i] == 0).collect();
        let mut order = Vec::with_capacity(n);
        let mut cursor = 0;
        while cursor < ready.len() {
            let node = ready[cursor];
            cursor += 1;
            order.push(node);
            for &dep in &dependents[node] {
                in_degree[dep] -= 1;
                if in_degree[dep] == 0 {
                    ready.push(dep);
                }
            }
        }

        if order.len() != n {
            let stuck: Vec<&str> = (0..n)
                .filter(|&i| in_degree[i] > 0)
                .map(|i| self.hyperparameters[i].name.as_str())
                .collect();
            return Err(TunebotError::ValidationError(format!(
                "condition cycle through hyperparameters: {}",
                stuck.join(", ")
            )));
        }
        self.resolution_order = order;
        Ok(())
    }

    /// Hyperparameters in dependency order, parents before children
    pub(crate) fn resolution_order(&self) -> impl Iterator<Item = &Hyperparameter> {
        self.resolution_order
            .iter()
            .map(move |&i| &self.hyperparameters[i])
    }

    /// One value per active hyperparameter: its declared default.
    /// Hyperparameters whose condition evaluates false under the defaults of
    /// their parents are omitted.
    pub fn default_configuration(&self) -> Result<Configuration> {
        let mut resolved: BTreeMap<String, ParamValue> = BTreeMap::new();
        for hp in self.resolution_order() {
            let active = match self.condition_for(&hp.name) {
                Some(condition) => condition.evaluate(&resolved)?,
                None => true,
            };
            if active {
                resolved.insert(hp.name.clone(), hp.default_value());
            }
        }
        Ok(Configuration::from_values(resolved))
    }

    /// Full structural validation; re-run by the wrapper after merging
    pub(crate) fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for hp in &self.hyperparameters {
            if !seen.insert(hp.name.as_str()) {
                return Err(TunebotError::ValidationError(format!(
                    "duplicate hyperparameter '{}' in space '{}'",
                    hp.name, self.identity
                )));
            }
        }
        for condition in &self.conditions {
            condition.validate_shape()?;
            for name in condition
                .parents()
                .into_iter()
                .chain(std::iter::once(condition.child()))
            {
                if self.get(name).is_none() {
                    return Err(TunebotError::ValidationError(format!(
                        "condition references unknown hyperparameter '{name}' in space '{}'",
                        self.identity
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::hyperparameter::str_choices;

    fn knn_like() -> ConfigSpace {
        let mut cs = ConfigSpace::new("sklearn.neighbors.KNeighborsClassifier");
        cs.add_hyperparameters([
            Hyperparameter::categorical(
                "algorithm",
                str_choices(&["auto", "ball_tree", "kd_tree", "brute"]),
                "auto",
            )
            .unwrap(),
            Hyperparameter::uniform_int("leaf_size", 1, 50, 1).unwrap(),
        ])
        .unwrap();
        cs.add_condition(Condition::in_values(
            "leaf_size",
            "algorithm",
            str_choices(&["ball_tree", "kd_tree"]),
        ))
        .unwrap();
        cs
    }

    #[test]
    fn test_prefix_is_lowercased_type_name() {
        let cs = ConfigSpace::new("sklearn.tree.DecisionTreeClassifier");
        assert_eq!(cs.prefix(), "decisiontreeclassifier");
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut cs = ConfigSpace::new("x.Y");
        cs.add_hyperparameter(Hyperparameter::constant("a", 1i64)).unwrap();
        let err = cs.add_hyperparameter(Hyperparameter::constant("a", 2i64));
        assert!(matches!(err, Err(TunebotError::ValidationError(_))));
    }

    #[test]
    fn test_condition_unknown_reference_rejected() {
        let mut cs = ConfigSpace::new("x.Y");
        cs.add_hyperparameter(Hyperparameter::constant("a", 1i64)).unwrap();
        let err = cs.add_condition(Condition::equals("a", "missing", 1i64));
        assert!(matches!(err, Err(TunebotError::ValidationError(_))));
    }

    #[test]
    fn test_second_condition_on_same_child_rejected() {
        let mut cs = knn_like();
        let err = cs.add_condition(Condition::equals("leaf_size", "algorithm", "auto"));
        assert!(matches!(err, Err(TunebotError::ValidationError(_))));
    }

    #[test]
    fn test_cycle_rejected() {
        let mut cs = ConfigSpace::new("x.Y");
        cs.add_hyperparameters([
            Hyperparameter::uniform_int("a", 0, 10, 5).unwrap(),
            Hyperparameter::uniform_int("b", 0, 10, 5).unwrap(),
        ])
        .unwrap();
        cs.add_condition(Condition::greater_than("a", "b", 3i64)).unwrap();
        let err = cs.add_condition(Condition::greater_than("b", "a", 3i64));
        assert!(matches!(err, Err(TunebotError::ValidationError(_))));
    }

    #[test]
    fn test_forward_reference_resolved_topologically() {
        let mut cs = ConfigSpace::new("x.Y");
        // child declared before its parent
        cs.add_hyperparameters([
            Hyperparameter::uniform_int("child", 0, 10, 5).unwrap(),
            Hyperparameter::categorical("parent", str_choices(&["on", "off"]), "on").unwrap(),
        ])
        .unwrap();
        cs.add_condition(Condition::equals("child", "parent", "on")).unwrap();
        let order: Vec<&str> = cs.resolution_order().map(|hp| hp.name.as_str()).collect();
        assert_eq!(order, vec!["parent", "child"]);
    }

    #[test]
    fn test_default_configuration_honors_conditions() {
        let config = knn_like().default_configuration().unwrap();
        assert_eq!(config.get("algorithm"), Some(&ParamValue::from("auto")));
        // leaf_size inactive under the default algorithm
        assert!(!config.contains("leaf_size"));
    }

    #[test]
    fn test_flat_map_rendering() {
        let mut cs = ConfigSpace::new("x.Y");
        cs.add_hyperparameters([
            Hyperparameter::constant("alpha", 0.5f64),
            Hyperparameter::constant("n", 3i64),
        ])
        .unwrap();
        let flat = cs.default_configuration().unwrap().to_flat_map();
        assert_eq!(flat.get("alpha").unwrap(), "0.5");
        assert_eq!(flat.get("n").unwrap(), "3");
    }
}
