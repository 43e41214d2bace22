//! Histogram gradient boosting search space

use crate::error::Result;
use crate::space::{ConfigSpace, Hyperparameter, SpaceWrapper};

pub(crate) fn space() -> Result<SpaceWrapper> {
    let base = ConfigSpace::new("sklearn.ensemble.HistGradientBoostingClassifier");
    let hyperparameters = vec![
        Hyperparameter::constant("loss", "auto"),
        Hyperparameter::log_float("learning_rate", 0.001, 1.0, 1.0)?,
        Hyperparameter::uniform_int("max_iter", 50, 500, 100)?,
        Hyperparameter::uniform_int("max_leaf_nodes", 2, 256, 31)?,
        Hyperparameter::uniform_int("max_depth", 2, 20, 9)?,
        Hyperparameter::uniform_int("min_samples_leaf", 1, 20, 20)?,
        Hyperparameter::log_float("l2_regularization", 1e-10, 1.0, 1e-10)?,
        Hyperparameter::uniform_int("max_bins", 2, 255, 255)?,
        Hyperparameter::uniform_float("validation_fraction", 0.1, 0.3, 0.1)?,
        Hyperparameter::uniform_int("n_iter_no_change", 1, 2048, 10)?,
        Hyperparameter::log_float("tol", 1e-7, 1e-1, 1e-7)?,
    ];
    Ok(SpaceWrapper::new(base, hyperparameters, Vec::new()))
}
