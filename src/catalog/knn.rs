//! k-nearest-neighbors search space.
//!
//! `leaf_size` only matters for the tree-backed neighbor searches, so it is
//! conditioned on the algorithm choice.

use crate::error::Result;
use crate::space::{str_choices, Condition, ConfigSpace, Hyperparameter, SpaceWrapper};

pub(crate) fn space() -> Result<SpaceWrapper> {
    let base = ConfigSpace::new("sklearn.neighbors.KNeighborsClassifier");
    let hyperparameters = vec![
        Hyperparameter::uniform_int("n_neighbors", 1, 20, 5)?,
        Hyperparameter::categorical("weights", str_choices(&["uniform", "distance"]), "uniform")?,
        Hyperparameter::categorical(
            "algorithm",
            str_choices(&["auto", "ball_tree", "kd_tree", "brute"]),
            "auto",
        )?,
        Hyperparameter::uniform_int("leaf_size", 1, 50, 1)?,
        Hyperparameter::uniform_int("p", 1, 5, 2)?,
        Hyperparameter::categorical(
            "metric",
            str_choices(&[
                "euclidean",
                "manhattan",
                "chebyshev",
                "minkowski",
                "wminkowski",
                "seuclidean",
                "mahalanobis",
            ]),
            "minkowski",
        )?,
    ];
    let conditions = vec![Condition::in_values(
        "leaf_size",
        "algorithm",
        str_choices(&["ball_tree", "kd_tree"]),
    )];
    Ok(SpaceWrapper::new(base, hyperparameters, conditions))
}
