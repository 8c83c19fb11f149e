//! Offline fitting of the vectorizer + classifier pair.
//!
//! Every row goes through the same normalizer the service uses at inference
//! time, so the fitted vocabulary matches what `transform` will see.

use anyhow::{anyhow, bail, Context, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use std::collections::BTreeSet;

use super::dataset::{load_csv, LabelledText};
use crate::config::TrainConfig;
use crate::sentiment::artifact::write_blob;
use crate::sentiment::classifier::{MultinomialNb, ProbabilisticClassifier};
use crate::sentiment::normalizer::normalize;
use crate::sentiment::types::{LabelEntry, LabelMap, SentimentLabel};
use crate::sentiment::vectorizer::{CountVectorizer, TextVectorizer};

#[derive(Debug, Clone)]
pub struct TrainedModel {
    pub vectorizer: CountVectorizer,
    pub classifier: MultinomialNb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainReport {
    pub train_rows: usize,
    pub test_rows: usize,
    pub vocabulary: usize,
    /// Held-out accuracy; `None` when nothing was held out.
    pub accuracy: Option<f64>,
}

/// Builds the label map from the raw labels present in `rows`.
///
/// Classes are ordered by raw value. Exactly two classes are expected and one of
/// them must be `positive_class`.
pub fn label_map_for(rows: &[LabelledText], positive_class: &str) -> Result<LabelMap> {
    let classes: BTreeSet<&str> = rows.iter().map(|row| row.raw_label.as_str()).collect();

    if classes.len() != 2 {
        bail!(
            "Expected exactly 2 classes, found {}: {:?}",
            classes.len(),
            classes
        );
    }
    if !classes.contains(positive_class) {
        bail!(
            "Positive class '{}' not present in labels {:?}",
            positive_class,
            classes
        );
    }

    Ok(LabelMap::new(
        classes
            .into_iter()
            .map(|raw| LabelEntry {
                raw: raw.to_string(),
                label: SentimentLabel::from_positive(raw == positive_class),
            })
            .collect(),
    ))
}

/// Deterministic shuffle-and-split. Returns (train, test).
pub fn split(
    rows: &[LabelledText],
    test_ratio: f64,
    seed: u64,
) -> (Vec<LabelledText>, Vec<LabelledText>) {
    let mut shuffled = rows.to_vec();
    shuffled.shuffle(&mut StdRng::seed_from_u64(seed));

    let test_len = ((rows.len() as f64) * test_ratio.clamp(0.0, 1.0)).round() as usize;
    let train = shuffled.split_off(test_len);
    (train, shuffled)
}

fn targets(rows: &[LabelledText], labels: &LabelMap) -> Result<Vec<usize>> {
    rows.iter()
        .map(|row| {
            labels
                .index_of_raw(&row.raw_label)
                .ok_or_else(|| anyhow!("Unknown label '{}'", row.raw_label))
        })
        .collect()
}

pub fn fit(rows: &[LabelledText], labels: LabelMap, alpha: f64) -> Result<TrainedModel> {
    if rows.is_empty() {
        bail!("No training rows");
    }

    let documents: Vec<String> = rows.par_iter().map(|row| normalize(&row.text)).collect();
    let vectorizer = CountVectorizer::fit(&documents);
    let vectors: Vec<Vec<f64>> = documents
        .par_iter()
        .map(|doc| vectorizer.transform(doc))
        .collect();
    let targets = targets(rows, &labels)?;

    let classifier = MultinomialNb::fit(&vectors, &targets, labels, alpha)
        .context("Failed to fit classifier")?;

    tracing::info!(
        "Fitted Naive Bayes on {} rows, vocabulary of {} terms",
        rows.len(),
        vectorizer.dimension()
    );

    Ok(TrainedModel {
        vectorizer,
        classifier,
    })
}

/// Fraction of `rows` whose predicted class matches the label.
pub fn evaluate(model: &TrainedModel, rows: &[LabelledText]) -> Result<f64> {
    if rows.is_empty() {
        bail!("No evaluation rows");
    }
    let targets = targets(rows, model.classifier.labels())?;

    let correct = rows
        .par_iter()
        .zip(targets.par_iter())
        .map(|(row, &target)| {
            let features = model.vectorizer.transform(&normalize(&row.text));
            model
                .classifier
                .predict(&features)
                .map(|predicted| usize::from(predicted == target))
        })
        .try_reduce(|| 0, |a, b| Ok(a + b))?;

    Ok(correct as f64 / rows.len() as f64)
}

pub fn run(config: &TrainConfig) -> Result<TrainReport> {
    let rows = load_csv(&config.data, &config.text_column, &config.label_column)?;
    let labels = label_map_for(&rows, &config.positive_class)?;

    let (train, test) = split(&rows, config.test_ratio, config.seed);
    let model = fit(&train, labels, config.alpha)?;

    let accuracy = if test.is_empty() {
        None
    } else {
        let accuracy = evaluate(&model, &test)?;
        tracing::info!("Held-out accuracy: {:.4} on {} rows", accuracy, test.len());
        Some(accuracy)
    };

    write_blob(&config.artifacts.model_path, &model.classifier)
        .with_context(|| format!("Failed to write {:?}", config.artifacts.model_path))?;
    write_blob(&config.artifacts.vectorizer_path, &model.vectorizer)
        .with_context(|| format!("Failed to write {:?}", config.artifacts.vectorizer_path))?;
    tracing::info!(
        "Model and vectorizer exported to {:?} and {:?}",
        config.artifacts.model_path,
        config.artifacts.vectorizer_path
    );

    Ok(TrainReport {
        train_rows: train.len(),
        test_rows: test.len(),
        vocabulary: model.vectorizer.dimension(),
        accuracy,
    })
}
