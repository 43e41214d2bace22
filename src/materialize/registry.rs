//! Explicit registry mapping space identities to constructible estimator kinds

use crate::error::{Result, TunebotError};
use serde::{Deserialize, Serialize};

/// The closed set of classifier families this harness can materialize.
///
/// Resolution is an explicit match on the dotted identity, so an unsupported
/// or misspelled identity fails here rather than at some later reflective
/// lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstimatorKind {
    AdaBoost,
    BernoulliNb,
    DecisionTree,
    ExtraTrees,
    GradientBoosting,
    HistGradientBoosting,
    Knn,
    NeuralNetwork,
    RandomForest,
    Sgd,
    Svc,
}

impl EstimatorKind {
    /// Resolve a dotted identity to a kind; unknown identities are fatal
    pub fn resolve(identity: &str) -> Result<EstimatorKind> {
        match identity {
            "sklearn.ensemble.AdaBoostClassifier" => Ok(EstimatorKind::AdaBoost),
            "sklearn.naive_bayes.BernoulliNB" => Ok(EstimatorKind::BernoulliNb),
            "sklearn.tree.DecisionTreeClassifier" => Ok(EstimatorKind::DecisionTree),
            "sklearn.ensemble.ExtraTreesClassifier" => Ok(EstimatorKind::ExtraTrees),
            "sklearn.ensemble.GradientBoostingClassifier" => Ok(EstimatorKind::GradientBoosting),
            "sklearn.ensemble.HistGradientBoostingClassifier" => {
                Ok(EstimatorKind::HistGradientBoosting)
            }
            "sklearn.neighbors.KNeighborsClassifier" => Ok(EstimatorKind::Knn),
            "sklearn.neural_network.MLPClassifier" => Ok(EstimatorKind::NeuralNetwork),
            "sklearn.ensemble.RandomForestClassifier" => Ok(EstimatorKind::RandomForest),
            "sklearn.linear_model.SGDClassifier" => Ok(EstimatorKind::Sgd),
            "sklearn.svm.SVC" => Ok(EstimatorKind::Svc),
            other => Err(TunebotError::MaterializationError(format!(
                "no estimator registered for identity '{other}'"
            ))),
        }
    }

    /// The dotted path of the underlying estimator type
    pub fn type_path(&self) -> &'static str {
        match self {
            EstimatorKind::AdaBoost => "sklearn.ensemble.AdaBoostClassifier",
            EstimatorKind::BernoulliNb => "sklearn.naive_bayes.BernoulliNB",
            EstimatorKind::DecisionTree => "sklearn.tree.DecisionTreeClassifier",
            EstimatorKind::ExtraTrees => "sklearn.ensemble.ExtraTreesClassifier",
            EstimatorKind::GradientBoosting => "sklearn.ensemble.GradientBoostingClassifier",
            EstimatorKind::HistGradientBoosting => {
                "sklearn.ensemble.HistGradientBoostingClassifier"
            }
            EstimatorKind::Knn => "sklearn.neighbors.KNeighborsClassifier",
            EstimatorKind::NeuralNetwork => "sklearn.neural_network.MLPClassifier",
            EstimatorKind::RandomForest => "sklearn.ensemble.RandomForestClassifier",
            EstimatorKind::Sgd => "sklearn.linear_model.SGDClassifier",
            EstimatorKind::Svc => "sklearn.svm.SVC",
        }
    }

    /// The pipeline stage prefix: lower-cased final segment of the type path
    pub fn stage_prefix(&self) -> String {
        self.type_path()
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }

    /// Whether the estimator's constructor takes a `random_state` argument
    pub fn accepts_random_state(&self) -> bool {
        match self {
            EstimatorKind::AdaBoost
            | EstimatorKind::DecisionTree
            | EstimatorKind::ExtraTrees
            | EstimatorKind::GradientBoosting
            | EstimatorKind::HistGradientBoosting
            | EstimatorKind::NeuralNetwork
            | EstimatorKind::RandomForest
            | EstimatorKind::Sgd
            | EstimatorKind::Svc => true,
            EstimatorKind::BernoulliNb | EstimatorKind::Knn => false,
        }
    }
}
