//! Bernoulli naive Bayes search space, following the auto-sklearn ranges

use crate::error::Result;
use crate::space::{ConfigSpace, Hyperparameter, ParamValue, SpaceWrapper};

pub(crate) fn space() -> Result<SpaceWrapper> {
    let base = ConfigSpace::new("sklearn.naive_bayes.BernoulliNB");
    let hyperparameters = vec![
        Hyperparameter::log_float("alpha", 1e-2, 100.0, 1.0)?,
        Hyperparameter::categorical(
            "fit_prior",
            vec![ParamValue::Bool(true), ParamValue::Bool(false)],
            true,
        )?,
    ];
    Ok(SpaceWrapper::new(base, hyperparameters, Vec::new()))
}
