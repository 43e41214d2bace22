//! Gradient boosting search space

use crate::error::Result;
use crate::space::{str_choices, ConfigSpace, Hyperparameter, SpaceWrapper};

pub(crate) fn space() -> Result<SpaceWrapper> {
    let base = ConfigSpace::new("sklearn.ensemble.GradientBoostingClassifier");
    let hyperparameters = vec![
        // fixed to deviance, as exponential requires two classes
        Hyperparameter::constant("loss", "deviance"),
        Hyperparameter::log_float("learning_rate", 0.01, 2.0, 0.1)?,
        Hyperparameter::uniform_int("n_estimators", 64, 512, 100)?,
        Hyperparameter::uniform_float("subsample", 0.0, 1.0, 1.0)?,
        Hyperparameter::categorical(
            "criterion",
            str_choices(&["friedman_mse", "mse", "mae"]),
            "friedman_mse",
        )?,
        Hyperparameter::uniform_int("min_samples_split", 2, 20, 2)?,
        Hyperparameter::uniform_int("min_samples_leaf", 1, 20, 1)?,
        Hyperparameter::uniform_float("min_weight_fraction_leaf", 0.0, 0.5, 0.0)?,
        Hyperparameter::uniform_int("max_depth", 1, 10, 3)?,
        Hyperparameter::uniform_float("min_impurity_decrease", 0.0, 1.0, 0.0)?,
        Hyperparameter::uniform_float("max_features", 0.0, 1.0, 0.0)?,
        Hyperparameter::uniform_float("validation_fraction", 0.0, 1.0, 0.1)?,
        Hyperparameter::uniform_int("n_iter_no_change", 1, 1024, 200)?,
        Hyperparameter::log_float("tol", 1e-5, 1e-1, 1e-4)?,
    ];
    Ok(SpaceWrapper::new(base, hyperparameters, Vec::new()))
}
