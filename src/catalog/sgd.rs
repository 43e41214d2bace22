//! SGD classifier search space, following the auto-sklearn ranges

use crate::error::Result;
use crate::space::{str_choices, Condition, ConfigSpace, Hyperparameter, ParamValue, SpaceWrapper};

pub(crate) fn space() -> Result<SpaceWrapper> {
    let base = ConfigSpace::new("sklearn.linear_model.SGDClassifier");
    let hyperparameters = vec![
        Hyperparameter::categorical(
            "loss",
            str_choices(&["hinge", "log", "modified_huber", "squared_hinge", "perceptron"]),
            "log",
        )?,
        Hyperparameter::categorical("penalty", str_choices(&["l1", "l2", "elasticnet"]), "l2")?,
        Hyperparameter::log_float("alpha", 1e-7, 1e-1, 1e-4)?,
        Hyperparameter::log_float("l1_ratio", 1e-9, 1.0, 0.15)?,
        Hyperparameter::log_float("tol", 1e-5, 1e-1, 1e-4)?,
        Hyperparameter::log_float("epsilon", 1e-5, 1e-1, 1e-4)?,
        Hyperparameter::categorical(
            "learning_rate",
            str_choices(&["optimal", "invscaling", "constant"]),
            "invscaling",
        )?,
        Hyperparameter::log_float("eta0", 1e-7, 1e-1, 0.01)?,
        Hyperparameter::uniform_float("power_t", 1e-5, 1.0, 0.5)?,
        Hyperparameter::categorical(
            "average",
            vec![ParamValue::Bool(false), ParamValue::Bool(true)],
            false,
        )?,
    ];
    let conditions = vec![
        Condition::equals("l1_ratio", "penalty", "elasticnet"),
        Condition::equals("epsilon", "loss", "modified_huber"),
        Condition::equals("power_t", "learning_rate", "invscaling"),
        // eta0 is only read when learning_rate != 'optimal'
        Condition::in_values("eta0", "learning_rate", str_choices(&["invscaling", "constant"])),
    ];
    Ok(SpaceWrapper::new(base, hyperparameters, conditions))
}
