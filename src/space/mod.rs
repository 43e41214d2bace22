//! Configuration-space data model: hyperparameters, conditions, spaces, and
//! the pipeline-embedding builder

pub mod condition;
pub mod config_space;
pub mod hyperparameter;
pub mod wrapper;

pub use condition::Condition;
pub use config_space::{ConfigSpace, Configuration};
pub use hyperparameter::{Domain, Hyperparameter, ParamValue, str_choices};
pub use wrapper::{SpaceWrapper, WrapState, IMPUTER_STRATEGY_PARAM};
