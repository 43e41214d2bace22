//! Catalog of classifier configuration spaces.
//!
//! One module per classifier family; lookup by name is an explicit match so
//! an unsupported family fails with the valid set in the error message.

mod adaboost;
mod bernoulli_nb;
mod decision_tree;
mod extra_trees;
mod gradient_boosting;
mod hist_gradient_boosting;
mod knn;
mod neural_network;
mod random_forest;
mod sgd;
mod svc;

use crate::error::{Result, TunebotError};
use crate::space::SpaceWrapper;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::debug;

/// Wildcard name drawing a random family from the catalog
pub const ALL_WILDCARD: &str = "all";

const FAMILIES: &[&str] = &[
    "adaboost",
    "bernoulli_nb",
    "decision_tree",
    "extra_trees",
    "gradient_boosting",
    "hist_gradient_boosting",
    "knn",
    "neural_network",
    "random_forest",
    "sgd",
    "svc",
];

/// All available configuration-space names. With `allow_all`, the `all`
/// wildcard is prepended.
pub fn available_spaces(allow_all: bool) -> Vec<&'static str> {
    let mut names = Vec::with_capacity(FAMILIES.len() + 1);
    if allow_all {
        names.push(ALL_WILDCARD);
    }
    names.extend_from_slice(FAMILIES);
    names
}

/// Build a fresh [`SpaceWrapper`] for a classifier family.
///
/// `"all"` draws a random family; `seed` makes that draw reproducible and is
/// otherwise unused. Unknown names fail with the valid set listed.
pub fn search_space(classifier_name: &str, seed: Option<u64>) -> Result<SpaceWrapper> {
    let name = if classifier_name == ALL_WILDCARD {
        let mut rng = match seed {
            Some(s) => Xoshiro256PlusPlus::seed_from_u64(s),
            None => Xoshiro256PlusPlus::from_entropy(),
        };
        FAMILIES[rng.gen_range(0..FAMILIES.len())]
    } else {
        classifier_name
    };
    debug!(%name, "building configuration space");
    match name {
        "adaboost" => adaboost::space(),
        "bernoulli_nb" => bernoulli_nb::space(),
        "decision_tree" => decision_tree::space(),
        "extra_trees" => extra_trees::space(),
        "gradient_boosting" => gradient_boosting::space(),
        "hist_gradient_boosting" => hist_gradient_boosting::space(),
        "knn" => knn::space(),
        "neural_network" => neural_network::space(),
        "random_forest" => random_forest::space(),
        "sgd" => sgd::space(),
        "svc" => svc::space(),
        other => Err(TunebotError::NotFoundError(format!(
            "classifier search space not implemented: '{other}'; available: {}",
            available_spaces(true).join(", ")
        ))),
    }
}
