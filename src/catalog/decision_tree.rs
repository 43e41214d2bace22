//! Decision tree search space

use crate::error::Result;
use crate::space::{str_choices, ConfigSpace, Hyperparameter, SpaceWrapper};

pub(crate) fn space() -> Result<SpaceWrapper> {
    let base = ConfigSpace::new("sklearn.tree.DecisionTreeClassifier");
    let hyperparameters = vec![
        Hyperparameter::categorical("criterion", str_choices(&["gini", "entropy"]), "gini")?,
        // fraction of the training set depth heuristic, not an absolute depth
        Hyperparameter::uniform_float("max_depth", 0.0, 2.0, 0.5)?,
        Hyperparameter::uniform_int("min_samples_split", 2, 20, 2)?,
        Hyperparameter::uniform_int("min_samples_leaf", 1, 20, 1)?,
        Hyperparameter::constant("min_weight_fraction_leaf", 0.0),
        Hyperparameter::unparametrized("max_features", 1.0),
        Hyperparameter::unparametrized("max_leaf_nodes", "None"),
        Hyperparameter::unparametrized("min_impurity_decrease", 0.0),
    ];
    Ok(SpaceWrapper::new(base, hyperparameters, Vec::new()))
}
