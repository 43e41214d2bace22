//! Multi-layer perceptron search space.
//!
//! Batch size and initial learning rate only apply to the stochastic
//! solvers, so both are conditioned on the solver choice.

use crate::error::Result;
use crate::space::{str_choices, Condition, ConfigSpace, Hyperparameter, SpaceWrapper};

pub(crate) fn space() -> Result<SpaceWrapper> {
    let base = ConfigSpace::new("sklearn.neural_network.MLPClassifier");
    let hyperparameters = vec![
        Hyperparameter::uniform_int("hidden_layer_sizes", 32, 2048, 2048)?,
        Hyperparameter::categorical(
            "activation",
            str_choices(&["identity", "logistic", "tanh", "relu"]),
            "relu",
        )?,
        Hyperparameter::categorical("solver", str_choices(&["lbfgs", "sgd", "adam"]), "adam")?,
        Hyperparameter::log_float("alpha", 1e-5, 1e-1, 1e-4)?,
        Hyperparameter::uniform_int("batch_size", 32, 4096, 200)?,
        Hyperparameter::categorical(
            "learning_rate",
            str_choices(&["constant", "invscaling", "adaptive"]),
            "constant",
        )?,
        Hyperparameter::log_float("learning_rate_init", 1e-5, 1e-1, 1e-4)?,
    ];
    let conditions = vec![
        Condition::in_values("batch_size", "solver", str_choices(&["sgd", "adam"])),
        Condition::in_values("learning_rate_init", "solver", str_choices(&["sgd", "adam"])),
    ];
    Ok(SpaceWrapper::new(base, hyperparameters, conditions))
}
