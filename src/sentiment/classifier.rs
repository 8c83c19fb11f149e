//! Multinomial Naive Bayes classifier.
//!
//! Stores log priors and per-class log feature probabilities (Laplace smoothed)
//! so inference is a dot product followed by a log-sum-exp normalisation.

use serde::{Deserialize, Serialize};

use super::error::InferenceError;
use super::types::LabelMap;

/// Capability required from the classifier half of a trained artifact.
pub trait ProbabilisticClassifier: Send + Sync {
    /// Number of features the classifier was fitted on.
    fn n_features(&self) -> usize;

    /// Full class-probability distribution, indexed by class.
    fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError>;

    /// Explicit mapping from class index to sentiment label.
    fn labels(&self) -> &LabelMap;

    /// Index of the most probable class. Ties resolve to the lowest index.
    fn predict(&self, features: &[f64]) -> Result<usize, InferenceError> {
        let proba = self.predict_proba(features)?;
        argmax(&proba).ok_or(InferenceError::NoClasses)
    }
}

pub(crate) fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, &value) in values.iter().enumerate() {
        match best {
            Some((_, current)) if value <= current => {}
            _ => best = Some((idx, value)),
        }
    }
    best.map(|(idx, _)| idx)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultinomialNb {
    class_log_prior: Vec<f64>,
    /// [class][feature]
    feature_log_prob: Vec<Vec<f64>>,
    labels: LabelMap,
    alpha: f64,
}

impl MultinomialNb {
    /// Fits the model on count vectors.
    ///
    /// `targets[i]` is the class index of `vectors[i]`; the number of classes
    /// is taken from `labels`.
    pub fn fit(
        vectors: &[Vec<f64>],
        targets: &[usize],
        labels: LabelMap,
        alpha: f64,
    ) -> Result<Self, InferenceError> {
        let n_classes = labels.len();
        if n_classes == 0 {
            return Err(InferenceError::NoClasses);
        }
        let n_features = vectors.first().map(Vec::len).unwrap_or(0);

        let mut class_counts = vec![0usize; n_classes];
        let mut feature_counts = vec![vec![0.0; n_features]; n_classes];

        for (vector, &class) in vectors.iter().zip(targets) {
            if vector.len() != n_features {
                return Err(InferenceError::DimensionMismatch {
                    expected: n_features,
                    actual: vector.len(),
                });
            }
            if class >= n_classes {
                return Err(InferenceError::UnmappedClass(class));
            }
            class_counts[class] += 1;
            for (acc, value) in feature_counts[class].iter_mut().zip(vector) {
                *acc += value;
            }
        }

        let total_docs = targets.len().max(1) as f64;
        let class_log_prior = class_counts
            .iter()
            .map(|&count| {
                if count == 0 {
                    f64::NEG_INFINITY
                } else {
                    (count as f64 / total_docs).ln()
                }
            })
            .collect();

        let feature_log_prob = feature_counts
            .iter()
            .map(|counts| {
                let total: f64 = counts.iter().sum::<f64>() + alpha * n_features as f64;
                counts
                    .iter()
                    .map(|count| ((count + alpha) / total).ln())
                    .collect()
            })
            .collect();

        Ok(Self {
            class_log_prior,
            feature_log_prob,
            labels,
            alpha,
        })
    }

    /// Builds a model from already-computed parameters.
    pub fn from_parts(
        class_log_prior: Vec<f64>,
        feature_log_prob: Vec<Vec<f64>>,
        labels: LabelMap,
    ) -> Self {
        Self {
            class_log_prior,
            feature_log_prob,
            labels,
            alpha: 1.0,
        }
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    fn joint_log_likelihood(&self, features: &[f64]) -> Vec<f64> {
        self.class_log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, log_probs)| {
                prior
                    + features
                        .iter()
                        .zip(log_probs)
                        .filter(|(count, _)| **count != 0.0)
                        .map(|(count, log_prob)| count * log_prob)
                        .sum::<f64>()
            })
            .collect()
    }
}

impl ProbabilisticClassifier for MultinomialNb {
    fn n_features(&self) -> usize {
        self.feature_log_prob.first().map(Vec::len).unwrap_or(0)
    }

    fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>, InferenceError> {
        if self.class_log_prior.is_empty() {
            return Err(InferenceError::NoClasses);
        }
        let expected = self.n_features();
        if features.len() != expected {
            return Err(InferenceError::DimensionMismatch {
                expected,
                actual: features.len(),
            });
        }

        let jll = self.joint_log_likelihood(features);
        let max = jll.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let sum_exp: f64 = jll.iter().map(|score| (score - max).exp()).sum();
        let log_norm = max + sum_exp.ln();

        let proba: Vec<f64> = jll.iter().map(|score| (score - log_norm).exp()).collect();

        if let Some(class_index) = proba.iter().position(|p| !p.is_finite()) {
            return Err(InferenceError::NonFinite { class_index });
        }
        Ok(proba)
    }

    fn labels(&self) -> &LabelMap {
        &self.labels
    }
}
