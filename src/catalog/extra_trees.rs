//! Extra trees search space, following the auto-sklearn ranges

use crate::error::Result;
use crate::space::{str_choices, ConfigSpace, Hyperparameter, ParamValue, SpaceWrapper};

pub(crate) fn space() -> Result<SpaceWrapper> {
    let base = ConfigSpace::new("sklearn.ensemble.ExtraTreesClassifier");
    let hyperparameters = vec![
        Hyperparameter::constant("n_estimators", 100i64),
        Hyperparameter::categorical("criterion", str_choices(&["gini", "entropy"]), "gini")?,
        // m^max_features features per split; 0.5 yields Geurts' sqrt(m) heuristic
        Hyperparameter::uniform_float("max_features", 0.0, 1.0, 0.5)?,
        Hyperparameter::uniform_int("min_samples_split", 2, 20, 2)?,
        Hyperparameter::uniform_int("min_samples_leaf", 1, 20, 1)?,
        Hyperparameter::unparametrized("min_weight_fraction_leaf", 0.0),
        Hyperparameter::unparametrized("min_impurity_decrease", 0.0),
        Hyperparameter::categorical(
            "bootstrap",
            vec![ParamValue::Bool(true), ParamValue::Bool(false)],
            false,
        )?,
    ];
    Ok(SpaceWrapper::new(base, hyperparameters, Vec::new()))
}
