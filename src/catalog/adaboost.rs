//! AdaBoost search space, following the auto-sklearn ranges.
//!
//! The base estimator is a fixed decision tree whose depth is tuned through
//! the nested `base_estimator__max_depth` hyperparameter.

use crate::error::Result;
use crate::space::{str_choices, ConfigSpace, Hyperparameter, ParamValue, SpaceWrapper};
use std::collections::BTreeMap;

pub(crate) fn space() -> Result<SpaceWrapper> {
    let mut meta = BTreeMap::new();
    meta.insert(
        "base_estimator".to_string(),
        ParamValue::from("DecisionTreeClassifier"),
    );
    let base = ConfigSpace::with_meta("sklearn.ensemble.AdaBoostClassifier", meta);
    let hyperparameters = vec![
        Hyperparameter::uniform_int("n_estimators", 50, 500, 50)?,
        Hyperparameter::log_float("learning_rate", 0.01, 2.0, 0.1)?,
        Hyperparameter::categorical("algorithm", str_choices(&["SAMME.R", "SAMME"]), "SAMME.R")?,
        Hyperparameter::uniform_int("base_estimator__max_depth", 1, 10, 1)?,
    ];
    Ok(SpaceWrapper::new(base, hyperparameters, Vec::new()))
}
