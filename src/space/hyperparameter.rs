//! Hyperparameter definitions: scalar values, domains, and validation

use crate::error::{Result, TunebotError};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar value of a hyperparameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    Float(f64),
    Int(i64),
    Str(String),
    Bool(bool),
}

impl ParamValue {
    /// Get as float, coercing integers
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Float(v) => Some(*v),
            ParamValue::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Get as int
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ParamValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(v) => Some(v),
            _ => None,
        }
    }

    /// Get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Float(v) => write!(f, "{v}"),
            ParamValue::Int(v) => write!(f, "{v}"),
            ParamValue::Str(v) => write!(f, "{v}"),
            ParamValue::Bool(v) => write!(f, "{v}"),
        }
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

/// Domain of a hyperparameter.
///
/// Dispatch over kinds is always an exhaustive `match`, so adding a new kind
/// is a compile-time-checked exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Domain {
    /// Fixed value, shown to the tuner
    Constant(ParamValue),
    /// Fixed value, hidden from the tuner
    Unparametrized(ParamValue),
    /// Ordered finite choice set
    Categorical {
        choices: Vec<ParamValue>,
        default: ParamValue,
    },
    /// Inclusive integer range
    UniformInt {
        lower: i64,
        upper: i64,
        default: i64,
        log_scale: bool,
    },
    /// Continuous range
    UniformFloat {
        lower: f64,
        upper: f64,
        default: f64,
        log_scale: bool,
    },
}

/// A single named, typed, bounded tunable value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hyperparameter {
    pub name: String,
    pub domain: Domain,
}

impl Hyperparameter {
    /// Create a constant hyperparameter
    pub fn constant(name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        Self {
            name: name.into(),
            domain: Domain::Constant(value.into()),
        }
    }

    /// Create an unparametrized (fixed, untuned) hyperparameter
    pub fn unparametrized(name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        Self {
            name: name.into(),
            domain: Domain::Unparametrized(value.into()),
        }
    }

    /// Create a categorical hyperparameter
    pub fn categorical(
        name: impl Into<String>,
        choices: Vec<ParamValue>,
        default: impl Into<ParamValue>,
    ) -> Result<Self> {
        let name = name.into();
        let default = default.into();
        if choices.is_empty() {
            return Err(TunebotError::ValidationError(format!(
                "categorical hyperparameter '{name}' has no choices"
            )));
        }
        if !choices.contains(&default) {
            return Err(TunebotError::ValidationError(format!(
                "default '{default}' of hyperparameter '{name}' is not among its choices"
            )));
        }
        Ok(Self {
            name,
            domain: Domain::Categorical { choices, default },
        })
    }

    /// Create a uniform integer hyperparameter over an inclusive range
    pub fn uniform_int(name: impl Into<String>, lower: i64, upper: i64, default: i64) -> Result<Self> {
        Self::int_with_scale(name, lower, upper, default, false)
    }

    /// Create a log-scale integer hyperparameter
    pub fn log_int(name: impl Into<String>, lower: i64, upper: i64, default: i64) -> Result<Self> {
        Self::int_with_scale(name, lower, upper, default, true)
    }

    fn int_with_scale(
        name: impl Into<String>,
        lower: i64,
        upper: i64,
        default: i64,
        log_scale: bool,
    ) -> Result<Self> {
        let name = name.into();
        if lower > upper {
            return Err(TunebotError::ValidationError(format!(
                "hyperparameter '{name}': lower bound {lower} exceeds upper bound {upper}"
            )));
        }
        if default < lower || default > upper {
            return Err(TunebotError::ValidationError(format!(
                "hyperparameter '{name}': default {default} outside [{lower}, {upper}]"
            )));
        }
        if log_scale && lower <= 0 {
            return Err(TunebotError::ValidationError(format!(
                "hyperparameter '{name}': log scale requires a positive lower bound, got {lower}"
            )));
        }
        Ok(Self {
            name,
            domain: Domain::UniformInt {
                lower,
                upper,
                default,
                log_scale,
            },
        })
    }

    /// Create a uniform float hyperparameter
    pub fn uniform_float(name: impl Into<String>, lower: f64, upper: f64, default: f64) -> Result<Self> {
        Self::float_with_scale(name, lower, upper, default, false)
    }

    /// Create a log-scale float hyperparameter
    pub fn log_float(name: impl Into<String>, lower: f64, upper: f64, default: f64) -> Result<Self> {
        Self::float_with_scale(name, lower, upper, default, true)
    }

    fn float_with_scale(
        name: impl Into<String>,
        lower: f64,
        upper: f64,
        default: f64,
        log_scale: bool,
    ) -> Result<Self> {
        let name = name.into();
        if !(lower <= upper) {
            return Err(TunebotError::ValidationError(format!(
                "hyperparameter '{name}': lower bound {lower} exceeds upper bound {upper}"
            )));
        }
        if !(default >= lower && default <= upper) {
            return Err(TunebotError::ValidationError(format!(
                "hyperparameter '{name}': default {default} outside [{lower}, {upper}]"
            )));
        }
        if log_scale && lower <= 0.0 {
            return Err(TunebotError::ValidationError(format!(
                "hyperparameter '{name}': log scale requires a positive lower bound, got {lower}"
            )));
        }
        Ok(Self {
            name,
            domain: Domain::UniformFloat {
                lower,
                upper,
                default,
                log_scale,
            },
        })
    }

    /// The declared default (the fixed value for constants)
    pub fn default_value(&self) -> ParamValue {
        match &self.domain {
            Domain::Constant(v) | Domain::Unparametrized(v) => v.clone(),
            Domain::Categorical { default, .. } => default.clone(),
            Domain::UniformInt { default, .. } => ParamValue::Int(*default),
            Domain::UniformFloat { default, .. } => ParamValue::Float(*default),
        }
    }

    /// Whether a value is a member of this hyperparameter's domain
    pub fn contains(&self, value: &ParamValue) -> bool {
        match &self.domain {
            Domain::Constant(v) | Domain::Unparametrized(v) => v == value,
            Domain::Categorical { choices, .. } => choices.contains(value),
            Domain::UniformInt { lower, upper, .. } => match value.as_i64() {
                Some(v) => v >= *lower && v <= *upper,
                None => false,
            },
            Domain::UniformFloat { lower, upper, .. } => match value.as_f64() {
                Some(v) => v >= *lower && v <= *upper,
                None => false,
            },
        }
    }

    /// Draw one value from the domain
    pub fn sample(&self, rng: &mut impl Rng) -> ParamValue {
        match &self.domain {
            Domain::Constant(v) | Domain::Unparametrized(v) => v.clone(),
            Domain::Categorical { choices, .. } => {
                let idx = rng.gen_range(0..choices.len());
                choices[idx].clone()
            }
            Domain::UniformInt {
                lower,
                upper,
                log_scale,
                ..
            } => {
                let val = if *log_scale {
                    let log_low = (*lower as f64).ln();
                    let log_high = (*upper as f64).ln();
                    let drawn = (rng.gen::<f64>() * (log_high - log_low) + log_low).exp();
                    (drawn.round() as i64).clamp(*lower, *upper)
                } else {
                    rng.gen_range(*lower..=*upper)
                };
                ParamValue::Int(val)
            }
            Domain::UniformFloat {
                lower,
                upper,
                log_scale,
                ..
            } => {
                let val = if *log_scale {
                    let log_low = lower.ln();
                    let log_high = upper.ln();
                    (rng.gen::<f64>() * (log_high - log_low) + log_low).exp()
                } else {
                    rng.gen::<f64>() * (upper - lower) + lower
                };
                ParamValue::Float(val)
            }
        }
    }
}

/// Shorthand for building a categorical choice list from string literals
pub fn str_choices(values: &[&str]) -> Vec<ParamValue> {
    values.iter().map(|v| ParamValue::from(*v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_categorical_default_must_be_a_choice() {
        let err = Hyperparameter::categorical("criterion", str_choices(&["gini", "entropy"]), "mse");
        assert!(matches!(err, Err(TunebotError::ValidationError(_))));
    }

    #[test]
    fn test_uniform_bounds_validation() {
        assert!(Hyperparameter::uniform_int("n", 10, 5, 7).is_err());
        assert!(Hyperparameter::uniform_float("c", 0.0, 1.0, 2.0).is_err());
        assert!(Hyperparameter::uniform_float("c", 0.0, 1.0, 0.5).is_ok());
    }

    #[test]
    fn test_log_scale_requires_positive_lower() {
        assert!(Hyperparameter::log_float("alpha", 0.0, 1.0, 0.5).is_err());
        assert!(Hyperparameter::log_int("n", 0, 10, 5).is_err());
        assert!(Hyperparameter::log_float("alpha", 1e-5, 1.0, 1e-3).is_ok());
    }

    #[test]
    fn test_sample_stays_in_domain() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        let hp = Hyperparameter::uniform_int("n", 2, 20, 2).unwrap();
        for _ in 0..200 {
            let v = hp.sample(&mut rng);
            assert!(hp.contains(&v), "sampled {v} outside domain");
        }
    }

    #[test]
    fn test_log_float_sampling_range() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        let hp = Hyperparameter::log_float("c", 0.01, 100.0, 1.0).unwrap();
        for _ in 0..500 {
            let v = hp.sample(&mut rng).as_f64().unwrap();
            assert!((0.01..=100.0).contains(&v));
        }
    }

    #[test]
    fn test_constant_sampling_is_fixed() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        let hp = Hyperparameter::constant("loss", "deviance");
        assert_eq!(hp.sample(&mut rng), ParamValue::from("deviance"));
        assert_eq!(hp.default_value(), ParamValue::from("deviance"));
    }
}
