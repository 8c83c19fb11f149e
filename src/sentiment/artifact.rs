//! Trained Artifact
//!
//! The vectorizer + classifier pair produced by the offline training job.
//! Each half is an independent bincode blob on disk. The pair is loaded once at
//! startup, wrapped in `Arc`, and only read afterwards.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::classifier::{MultinomialNb, ProbabilisticClassifier};
use super::error::{ArtifactError, InferenceError};
use super::normalizer::normalize;
use super::types::Classification;
use super::vectorizer::{CountVectorizer, TextVectorizer};

#[derive(Clone)]
pub struct TrainedArtifact {
    vectorizer: Arc<dyn TextVectorizer>,
    classifier: Arc<dyn ProbabilisticClassifier>,
}

impl TrainedArtifact {
    pub fn new(
        vectorizer: Arc<dyn TextVectorizer>,
        classifier: Arc<dyn ProbabilisticClassifier>,
    ) -> Self {
        let artifact = Self {
            vectorizer,
            classifier,
        };
        if !artifact.is_consistent() {
            tracing::warn!(
                "Artifact mismatch: vectorizer emits {} features, classifier expects {}",
                artifact.vectorizer.dimension(),
                artifact.classifier.n_features()
            );
        }
        artifact
    }

    /// Whether both halves agree on the feature dimension.
    pub fn is_consistent(&self) -> bool {
        self.vectorizer.dimension() == self.classifier.n_features()
    }

    /// normalize -> vectorize -> predict.
    ///
    /// Text that normalizes to nothing yields an all-zero vector and the
    /// classifier's prior decides.
    pub fn classify(&self, text: &str) -> Result<Classification, InferenceError> {
        let normalized = normalize(text);
        let features = self.vectorizer.transform(&normalized);

        let proba = self.classifier.predict_proba(&features)?;
        let class_index = self.classifier.predict(&features)?;
        let confidence = *proba
            .get(class_index)
            .ok_or(InferenceError::UnmappedClass(class_index))?;
        let label = self
            .classifier
            .labels()
            .label_for(class_index)
            .ok_or(InferenceError::UnmappedClass(class_index))?;

        tracing::debug!(
            "Classified '{}' as {:?} (class {}, p={:.3})",
            normalized,
            label,
            class_index,
            confidence
        );

        Ok(Classification {
            label,
            is_positive: label.is_positive(),
            confidence,
        })
    }
}

impl std::fmt::Debug for TrainedArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrainedArtifact")
            .field("vectorizer_dimension", &self.vectorizer.dimension())
            .field("classifier_features", &self.classifier.n_features())
            .finish()
    }
}

/// Outcome of the startup load. Each blob is reported separately for `/health`.
#[derive(Debug, Default)]
pub struct ArtifactLoad {
    pub artifact: Option<TrainedArtifact>,
    pub model_loaded: bool,
    pub vectorizer_loaded: bool,
    pub errors: Vec<ArtifactError>,
}

impl ArtifactLoad {
    pub fn status(&self) -> ArtifactStatus {
        ArtifactStatus {
            model_loaded: self.model_loaded,
            vectorizer_loaded: self.vectorizer_loaded,
        }
    }
}

/// Readiness flags kept after startup for operational visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArtifactStatus {
    pub model_loaded: bool,
    pub vectorizer_loaded: bool,
}

pub fn load_artifact(model_path: &Path, vectorizer_path: &Path) -> ArtifactLoad {
    let mut load = ArtifactLoad::default();

    let classifier = match read_blob::<MultinomialNb>(model_path) {
        Ok(classifier) => {
            load.model_loaded = true;
            Some(classifier)
        }
        Err(err) => {
            load.errors.push(err);
            None
        }
    };

    let vectorizer = match read_blob::<CountVectorizer>(vectorizer_path) {
        Ok(vectorizer) => {
            load.vectorizer_loaded = true;
            Some(vectorizer)
        }
        Err(err) => {
            load.errors.push(err);
            None
        }
    };

    if let (Some(classifier), Some(vectorizer)) = (classifier, vectorizer) {
        load.artifact = Some(TrainedArtifact::new(
            Arc::new(vectorizer),
            Arc::new(classifier),
        ));
    }

    load
}

pub fn read_blob<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::Missing(path.display().to_string()));
    }
    let reader = BufReader::new(File::open(path)?);
    bincode::deserialize_from(reader).map_err(|source| ArtifactError::Decode {
        path: path.display().to_string(),
        source,
    })
}

pub fn write_blob<T: Serialize>(path: &Path, value: &T) -> Result<(), ArtifactError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(writer, value).map_err(ArtifactError::Encode)
}
