//! Activation conditions linking a child hyperparameter to its parents

use crate::error::{Result, TunebotError};
use crate::space::hyperparameter::ParamValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Predicate making one hyperparameter's activation depend on another's value.
///
/// A hyperparameter carrying no condition is always active. `And` conjoins
/// two predicates over the same child.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    /// Child is active iff the parent equals `value`
    Equals {
        child: String,
        parent: String,
        value: ParamValue,
    },
    /// Child is active iff the parent's value is in `allowed`
    In {
        child: String,
        parent: String,
        allowed: Vec<ParamValue>,
    },
    /// Child is active iff the parent's value is strictly greater than `threshold`
    GreaterThan {
        child: String,
        parent: String,
        threshold: ParamValue,
    },
    /// Both predicates must hold
    And(Box<Condition>, Box<Condition>),
}

impl Condition {
    pub fn equals(
        child: impl Into<String>,
        parent: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Self {
        Condition::Equals {
            child: child.into(),
            parent: parent.into(),
            value: value.into(),
        }
    }

    pub fn in_values(
        child: impl Into<String>,
        parent: impl Into<String>,
        allowed: Vec<ParamValue>,
    ) -> Self {
        Condition::In {
            child: child.into(),
            parent: parent.into(),
            allowed,
        }
    }

    pub fn greater_than(
        child: impl Into<String>,
        parent: impl Into<String>,
        threshold: impl Into<ParamValue>,
    ) -> Self {
        Condition::GreaterThan {
            child: child.into(),
            parent: parent.into(),
            threshold: threshold.into(),
        }
    }

    pub fn and(a: Condition, b: Condition) -> Self {
        Condition::And(Box::new(a), Box::new(b))
    }

    /// The conditioned hyperparameter. Both branches of an `And` must agree;
    /// this is validated when the condition is added to a space.
    pub fn child(&self) -> &str {
        match self {
            Condition::Equals { child, .. }
            | Condition::In { child, .. }
            | Condition::GreaterThan { child, .. } => child,
            Condition::And(a, _) => a.child(),
        }
    }

    /// All parent hyperparameter names referenced by this condition
    pub fn parents(&self) -> Vec<&str> {
        match self {
            Condition::Equals { parent, .. }
            | Condition::In { parent, .. }
            | Condition::GreaterThan { parent, .. } => vec![parent],
            Condition::And(a, b) => {
                let mut out = a.parents();
                out.extend(b.parents());
                out
            }
        }
    }

    /// Check that both branches of every conjunction condition the same child
    pub(crate) fn validate_shape(&self) -> Result<()> {
        if let Condition::And(a, b) = self {
            a.validate_shape()?;
            b.validate_shape()?;
            if a.child() != b.child() {
                return Err(TunebotError::ValidationError(format!(
                    "conjunction branches condition different children: '{}' vs '{}'",
                    a.child(),
                    b.child()
                )));
            }
        }
        Ok(())
    }

    /// Evaluate activation against the already-resolved portion of a
    /// configuration. A parent absent from `resolved` (itself inactive)
    /// makes the child inactive.
    pub fn evaluate(&self, resolved: &BTreeMap<String, ParamValue>) -> Result<bool> {
        match self {
            Condition::Equals { parent, value, .. } => {
                Ok(resolved.get(parent).is_some_and(|v| v == value))
            }
            Condition::In {
                parent, allowed, ..
            } => Ok(resolved.get(parent).is_some_and(|v| allowed.contains(v))),
            Condition::GreaterThan {
                parent, threshold, ..
            } => match resolved.get(parent) {
                None => Ok(false),
                Some(v) => {
                    let lhs = v.as_f64();
                    let rhs = threshold.as_f64();
                    match (lhs, rhs) {
                        (Some(lhs), Some(rhs)) => Ok(lhs > rhs),
                        _ => Err(TunebotError::ValidationError(format!(
                            "greater-than condition on '{parent}' compares non-numeric values"
                        ))),
                    }
                }
            },
            Condition::And(a, b) => Ok(a.evaluate(resolved)? && b.evaluate(resolved)?),
        }
    }

    /// Rename child/parent references according to the given mapping.
    /// Used by the pipeline-embedding transform.
    pub(crate) fn rename(&mut self, renames: &BTreeMap<String, String>) {
        let fix = |name: &mut String| {
            if let Some(new) = renames.get(name.as_str()) {
                *name = new.clone();
            }
        };
        match self {
            Condition::Equals { child, parent, .. }
            | Condition::In { child, parent, .. }
            | Condition::GreaterThan { child, parent, .. } => {
                fix(child);
                fix(parent);
            }
            Condition::And(a, b) => {
                a.rename(renames);
                b.rename(renames);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::hyperparameter::str_choices;

    fn resolved(pairs: &[(&str, ParamValue)]) -> BTreeMap<String, ParamValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_equals_condition() {
        let cond = Condition::equals("degree", "kernel", "poly");
        assert!(cond
            .evaluate(&resolved(&[("kernel", ParamValue::from("poly"))]))
            .unwrap());
        assert!(!cond
            .evaluate(&resolved(&[("kernel", ParamValue::from("rbf"))]))
            .unwrap());
    }

    #[test]
    fn test_in_condition() {
        let cond = Condition::in_values("leaf_size", "algorithm", str_choices(&["ball_tree", "kd_tree"]));
        assert!(cond
            .evaluate(&resolved(&[("algorithm", ParamValue::from("kd_tree"))]))
            .unwrap());
        assert!(!cond
            .evaluate(&resolved(&[("algorithm", ParamValue::from("brute"))]))
            .unwrap());
    }

    #[test]
    fn test_greater_than_condition() {
        let cond = Condition::greater_than("gamma", "degree", 2i64);
        assert!(cond
            .evaluate(&resolved(&[("degree", ParamValue::Int(3))]))
            .unwrap());
        assert!(!cond
            .evaluate(&resolved(&[("degree", ParamValue::Int(2))]))
            .unwrap());
        let err = cond.evaluate(&resolved(&[("degree", ParamValue::from("three"))]));
        assert!(matches!(err, Err(TunebotError::ValidationError(_))));
    }

    #[test]
    fn test_inactive_parent_deactivates_child() {
        let cond = Condition::equals("degree", "kernel", "poly");
        assert!(!cond.evaluate(&resolved(&[])).unwrap());
    }

    #[test]
    fn test_and_condition() {
        let cond = Condition::and(
            Condition::equals("eta0", "learning_rate", "invscaling"),
            Condition::equals("eta0", "penalty", "l2"),
        );
        assert!(cond
            .evaluate(&resolved(&[
                ("learning_rate", ParamValue::from("invscaling")),
                ("penalty", ParamValue::from("l2")),
            ]))
            .unwrap());
        assert!(!cond
            .evaluate(&resolved(&[
                ("learning_rate", ParamValue::from("invscaling")),
                ("penalty", ParamValue::from("l1")),
            ]))
            .unwrap());
        assert_eq!(cond.child(), "eta0");
        assert_eq!(cond.parents(), vec!["learning_rate", "penalty"]);
    }

    #[test]
    fn test_and_mismatched_children_rejected() {
        let cond = Condition::and(
            Condition::equals("a", "p", "x"),
            Condition::equals("b", "p", "x"),
        );
        assert!(cond.validate_shape().is_err());
    }
}
