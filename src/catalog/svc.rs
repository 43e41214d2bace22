//! Support vector classifier search space.
//!
//! `degree` only applies to the polynomial kernel and `coef0` to the
//! polynomial and sigmoid kernels.

use crate::error::Result;
use crate::space::{str_choices, Condition, ConfigSpace, Hyperparameter, ParamValue, SpaceWrapper};

pub(crate) fn space() -> Result<SpaceWrapper> {
    let base = ConfigSpace::new("sklearn.svm.SVC");
    let hyperparameters = vec![
        Hyperparameter::log_float("C", 0.03125, 32768.0, 1.0)?,
        Hyperparameter::categorical("kernel", str_choices(&["rbf", "poly", "sigmoid"]), "rbf")?,
        Hyperparameter::uniform_int("degree", 1, 5, 3)?,
        Hyperparameter::log_float("gamma", 3.0517578125e-5, 8.0, 0.1)?,
        Hyperparameter::uniform_float("coef0", -1.0, 1.0, 0.0)?,
        Hyperparameter::categorical(
            "shrinking",
            vec![ParamValue::Bool(true), ParamValue::Bool(false)],
            true,
        )?,
        Hyperparameter::log_float("tol", 1e-5, 1e-1, 1e-3)?,
        Hyperparameter::unparametrized("max_iter", -1i64),
    ];
    let conditions = vec![
        Condition::equals("degree", "kernel", "poly"),
        Condition::in_values("coef0", "kernel", str_choices(&["poly", "sigmoid"])),
    ];
    Ok(SpaceWrapper::new(base, hyperparameters, conditions))
}
