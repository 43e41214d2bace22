//! Randomized-search materialization: configuration spaces as parameter
//! distributions over a pipeline

use crate::error::{Result, TunebotError};
use crate::materialize::pipeline::{as_pipeline, Pipeline};
use crate::space::config_space::{ConfigSpace, Configuration};
use crate::space::hyperparameter::{Domain, ParamValue};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Distribution descriptor consumable by a randomized-search driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParamDistribution {
    /// Discrete list of one or more literal values
    Choices(Vec<ParamValue>),
    /// Uniform integer distribution over an inclusive range
    UniformInt { low: i64, high: i64 },
    /// Uniform continuous distribution over `[low, high]`
    Uniform { low: f64, high: f64 },
    /// Log-uniform: uniform in log space, exponentiated on read
    LogUniform { low: f64, high: f64 },
}

impl ParamDistribution {
    pub fn sample(&self, rng: &mut impl Rng) -> ParamValue {
        match self {
            ParamDistribution::Choices(values) => {
                let idx = rng.gen_range(0..values.len());
                values[idx].clone()
            }
            ParamDistribution::UniformInt { low, high } => {
                ParamValue::Int(rng.gen_range(*low..=*high))
            }
            ParamDistribution::Uniform { low, high } => {
                ParamValue::Float(rng.gen::<f64>() * (high - low) + low)
            }
            ParamDistribution::LogUniform { low, high } => {
                let log_low = low.ln();
                let log_high = high.ln();
                ParamValue::Float((rng.gen::<f64>() * (log_high - log_low) + log_low).exp())
            }
        }
    }
}

/// Map every hyperparameter of a space to a distribution descriptor.
///
/// The mapping is a deliberate closed world: every supported kind is
/// enumerated, and log-scaled integer domains (which the randomized-search
/// surface has no distribution for) are rejected rather than silently
/// linearized.
pub fn distributions(space: &ConfigSpace) -> Result<BTreeMap<String, ParamDistribution>> {
    let mut result = BTreeMap::new();
    for hp in space.hyperparameters() {
        let distribution = match &hp.domain {
            Domain::Constant(value) | Domain::Unparametrized(value) => {
                ParamDistribution::Choices(vec![value.clone()])
            }
            Domain::Categorical { choices, .. } => ParamDistribution::Choices(choices.clone()),
            Domain::UniformInt {
                lower,
                upper,
                log_scale,
                ..
            } => {
                if *log_scale {
                    return Err(TunebotError::UnsupportedKindError(format!(
                        "log-scale integer hyperparameter '{}' has no search distribution",
                        hp.name
                    )));
                }
                ParamDistribution::UniformInt {
                    low: *lower,
                    high: *upper,
                }
            }
            Domain::UniformFloat {
                lower,
                upper,
                log_scale,
                ..
            } => {
                if *log_scale {
                    ParamDistribution::LogUniform {
                        low: *lower,
                        high: *upper,
                    }
                } else {
                    ParamDistribution::Uniform {
                        low: *lower,
                        high: *upper,
                    }
                }
            }
        };
        result.insert(hp.name.clone(), distribution);
    }
    Ok(result)
}

/// Options for the randomized-search driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Number of parameter settings sampled
    pub n_iter: usize,
    /// Seed for candidate generation
    pub seed: u64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { n_iter: 10, seed: 0 }
    }
}

/// A pipeline plus the distribution table a randomized-search driver draws
/// candidate parameter settings from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomizedSearch {
    pipeline: Pipeline,
    distributions: BTreeMap<String, ParamDistribution>,
    options: SearchOptions,
}

impl RandomizedSearch {
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn distributions(&self) -> &BTreeMap<String, ParamDistribution> {
        &self.distributions
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Draw `n_iter` candidate parameter settings, deterministically per
    /// seed. Candidates sample every distribution; conditional filtering is
    /// the sampler's concern, not the search driver's.
    pub fn candidates(&self) -> Vec<Configuration> {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(self.options.seed);
        (0..self.options.n_iter)
            .map(|_| {
                let values: BTreeMap<String, ParamValue> = self
                    .distributions
                    .iter()
                    .map(|(name, dist)| (name.clone(), dist.sample(&mut rng)))
                    .collect();
                Configuration::from_values(values)
            })
            .collect()
    }
}

/// Build a randomized-search adapter over the fixed pipeline
pub fn as_search(
    space: &ConfigSpace,
    numeric_indices: &[usize],
    categorical_indices: &[usize],
    options: SearchOptions,
) -> Result<RandomizedSearch> {
    let pipeline = as_pipeline(space, numeric_indices, categorical_indices)?;
    let distributions = distributions(space)?;
    Ok(RandomizedSearch {
        pipeline,
        distributions,
        options,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::space::hyperparameter::{str_choices, Hyperparameter};

    fn svc_like_space() -> ConfigSpace {
        let mut cs = ConfigSpace::new("sklearn.svm.SVC");
        cs.add_hyperparameters([
            Hyperparameter::log_float("C", 0.03125, 32768.0, 1.0).unwrap(),
            Hyperparameter::categorical("kernel", str_choices(&["rbf", "poly"]), "rbf").unwrap(),
            Hyperparameter::uniform_int("degree", 1, 5, 3).unwrap(),
            Hyperparameter::unparametrized("max_iter", -1i64),
        ])
        .unwrap();
        cs
    }

    #[test]
    fn test_distribution_mapping() {
        let dists = distributions(&svc_like_space()).unwrap();
        assert_eq!(
            dists.get("C"),
            Some(&ParamDistribution::LogUniform {
                low: 0.03125,
                high: 32768.0
            })
        );
        assert_eq!(
            dists.get("degree"),
            Some(&ParamDistribution::UniformInt { low: 1, high: 5 })
        );
        assert_eq!(
            dists.get("max_iter"),
            Some(&ParamDistribution::Choices(vec![ParamValue::Int(-1)]))
        );
        assert_eq!(
            dists.get("kernel"),
            Some(&ParamDistribution::Choices(str_choices(&["rbf", "poly"])))
        );
    }

    #[test]
    fn test_log_int_domain_unsupported() {
        let mut cs = ConfigSpace::new("sklearn.svm.SVC");
        cs.add_hyperparameter(Hyperparameter::log_int("n", 1, 1000, 10).unwrap())
            .unwrap();
        let err = distributions(&cs);
        assert!(matches!(err, Err(TunebotError::UnsupportedKindError(_))));
    }

    #[test]
    fn test_log_uniform_sampling_in_bounds() {
        let dist = ParamDistribution::LogUniform {
            low: 0.01,
            high: 100.0,
        };
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        for _ in 0..10_000 {
            let v = dist.sample(&mut rng).as_f64().unwrap();
            assert!((0.01..=100.0).contains(&v));
        }
    }

    #[test]
    fn test_candidates_deterministic() {
        let space = svc_like_space();
        let options = SearchOptions { n_iter: 25, seed: 7 };
        let a = as_search(&space, &[0, 1], &[2], options.clone()).unwrap();
        let b = as_search(&space, &[0, 1], &[2], options).unwrap();
        assert_eq!(a.candidates(), b.candidates());
        assert_eq!(a.candidates().len(), 25);
    }

    #[test]
    fn test_default_options() {
        let options = SearchOptions::default();
        assert_eq!(options.n_iter, 10);
        assert_eq!(options.seed, 0);
    }
}
