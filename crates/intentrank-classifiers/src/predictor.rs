//! Prediction entry points
//!
//! Runs a classifier on one input, ranks its labels and reports the best ones.
//! Classifier errors are passed through untouched; a failure only affects the
//! input that caused it.

use crate::classifier::IntentClassifier;
use futures::stream::{self, StreamExt};
use intentrank_core::{select_top_k, Result, Selection};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Ranking depth used by [`predict_top3`] and new [`Predictor`]s
pub const DEFAULT_TOP_K: usize = 3;

/// Predict the three most likely labels for `input`
///
/// Returns fewer than three entries, flagged via [`Selection::is_truncated`],
/// when the model knows fewer than three labels.
pub async fn predict_top3<C>(classifier: &C, input: &str) -> Result<Selection>
where
    C: IntentClassifier + ?Sized,
{
    predict_top_k(classifier, input, DEFAULT_TOP_K).await
}

/// Predict the `k` most likely labels for `input`
pub async fn predict_top_k<C>(classifier: &C, input: &str, k: usize) -> Result<Selection>
where
    C: IntentClassifier + ?Sized,
{
    let start = Instant::now();
    let result = rank(classifier, input, k).await;
    let latency_us = start.elapsed().as_micros() as f64;

    let name = classifier.name().to_string();
    metrics::histogram!("intentrank_prediction_latency_us", "classifier" => name.clone())
        .record(latency_us);

    match &result {
        Ok(selection) => {
            metrics::counter!("intentrank_predictions_total", "classifier" => name.clone())
                .increment(1);
            if selection.is_truncated() {
                metrics::counter!("intentrank_truncated_predictions_total", "classifier" => name)
                    .increment(1);
            }
        }
        Err(e) => {
            metrics::counter!(
                "intentrank_prediction_errors_total",
                "classifier" => name,
                "kind" => e.kind()
            )
            .increment(1);
        }
    }

    result
}

async fn rank<C>(classifier: &C, input: &str, k: usize) -> Result<Selection>
where
    C: IntentClassifier + ?Sized,
{
    let (scores, labels) = classifier.predict_labeled(input).await?;
    let selection = select_top_k(scores.as_slice(), labels.as_slice(), k)?;

    debug!(
        classifier = classifier.name(),
        top = selection.best().map(|p| p.label.as_str()),
        truncated = selection.is_truncated(),
        "Ranked prediction"
    );

    Ok(selection)
}

/// Reusable prediction handle around a shared classifier
#[derive(Clone)]
pub struct Predictor {
    classifier: Arc<dyn IntentClassifier>,
    top_k: usize,
}

impl Predictor {
    /// Create a predictor that ranks the top three labels
    pub fn new(classifier: Arc<dyn IntentClassifier>) -> Self {
        Self {
            classifier,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Set the ranking depth
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn classifier(&self) -> &Arc<dyn IntentClassifier> {
        &self.classifier
    }

    /// Rank labels for a single input
    pub async fn predict(&self, input: &str) -> Result<Selection> {
        predict_top_k(self.classifier.as_ref(), input, self.top_k).await
    }

    /// Rank labels for many inputs, running up to `concurrency` at once
    ///
    /// Results come back in input order, one per input.
    pub async fn predict_batch<S>(&self, inputs: &[S], concurrency: usize) -> Vec<Result<Selection>>
    where
        S: AsRef<str> + Sync,
    {
        stream::iter(inputs)
            .map(|input| self.predict(input.as_ref()))
            .buffered(concurrency.max(1))
            .collect::<Vec<_>>()
            .await
    }
}

impl std::fmt::Debug for Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predictor")
            .field("classifier", &self.classifier.name())
            .field("top_k", &self.top_k)
            .finish()
    }
}
