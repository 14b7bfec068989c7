//! Mock classifiers for testing
//!
//! Provides configurable mock implementations of the IntentClassifier trait
//! for testing the prediction entry points and error propagation.

use async_trait::async_trait;
use intentrank_classifiers::{predict_top3, IntentClassifier, Predictor};
use intentrank_core::{Error, LabelNames, Result, ScoreVector};
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// A classifier that returns a fixed score vector
pub struct MockClassifier {
    name: String,
    scores: Vec<f32>,
    labels: LabelNames,
    call_count: AtomicU32,
}

impl MockClassifier {
    /// Create a new mock classifier with aligned scores and labels
    pub fn new(scores: &[f32], labels: &[&str]) -> Self {
        Self {
            name: "mock".to_string(),
            scores: scores.to_vec(),
            labels: LabelNames::new(labels.iter().copied()),
            call_count: AtomicU32::new(0),
        }
    }

    /// Get the number of times predict was called
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl IntentClassifier for MockClassifier {
    async fn predict(&self, _text: &str) -> Result<ScoreVector> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        Ok(ScoreVector::new(self.scores.clone()))
    }

    fn label_names(&self) -> Result<LabelNames> {
        Ok(self.labels.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// A classifier that fails on inputs containing a trigger word
pub struct FailingClassifier {
    trigger: String,
    error_message: String,
}

impl FailingClassifier {
    pub fn new(trigger: &str) -> Self {
        Self {
            trigger: trigger.to_string(),
            error_message: "Simulated inference failure".to_string(),
        }
    }

    /// Set a custom error message
    pub fn with_error(mut self, message: &str) -> Self {
        self.error_message = message.to_string();
        self
    }
}

#[async_trait]
impl IntentClassifier for FailingClassifier {
    async fn predict(&self, text: &str) -> Result<ScoreVector> {
        if text.contains(&self.trigger) {
            return Err(Error::inference(&self.error_message));
        }
        Ok(ScoreVector::new(vec![0.2, 0.5, 0.3]))
    }

    fn label_names(&self) -> Result<LabelNames> {
        Ok(LabelNames::new(["a", "b", "c"]))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// A classifier that records how many predictions run at the same time
#[derive(Default)]
pub struct InFlightClassifier {
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl InFlightClassifier {
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IntentClassifier for InFlightClassifier {
    async fn predict(&self, _text: &str) -> Result<ScoreVector> {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        tokio::time::sleep(Duration::from_millis(10)).await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(ScoreVector::new(vec![0.4, 0.6]))
    }

    fn label_names(&self) -> Result<LabelNames> {
        Ok(LabelNames::new(["a", "b"]))
    }

    fn name(&self) -> &str {
        "in-flight"
    }
}

/// A classifier whose label list does not match its scores
pub struct MisalignedClassifier;

#[async_trait]
impl IntentClassifier for MisalignedClassifier {
    async fn predict(&self, _text: &str) -> Result<ScoreVector> {
        Ok(ScoreVector::new(vec![0.1, 0.2, 0.7]))
    }

    fn label_names(&self) -> Result<LabelNames> {
        Ok(LabelNames::new(["a", "b"]))
    }

    fn name(&self) -> &str {
        "misaligned"
    }
}

fn triples(selection: &intentrank_core::Selection) -> Vec<(&str, f32, usize)> {
    selection.iter().map(|p| p.as_tuple()).collect()
}

#[tokio::test]
async fn test_top3_end_to_end() {
    let classifier = MockClassifier::new(&[0.1, 0.7, 0.05, 0.1, 0.05], &["A", "B", "C", "D", "E"]);

    let selection = predict_top3(&classifier, "anything").await.unwrap();

    assert_eq!(
        triples(&selection),
        vec![("B", 0.7, 1), ("A", 0.1, 0), ("D", 0.1, 3)]
    );
    assert_eq!(classifier.call_count(), 1);
}

#[tokio::test]
async fn test_top3_duplicate_scores() {
    let classifier = MockClassifier::new(&[0.9, 0.9, 0.5], &["A", "B", "C"]);

    let selection = predict_top3(&classifier, "x").await.unwrap();

    assert_eq!(
        triples(&selection),
        vec![("A", 0.9, 0), ("B", 0.9, 1), ("C", 0.5, 2)]
    );
}

#[tokio::test]
async fn test_top3_with_two_labels_is_truncated() {
    let classifier = MockClassifier::new(&[0.9, 0.1], &["A", "B"]);

    let selection = predict_top3(&classifier, "x").await.unwrap();

    assert!(selection.is_truncated());
    assert_eq!(triples(&selection), vec![("A", 0.9, 0), ("B", 0.1, 1)]);
    assert!(matches!(
        selection.require_complete(),
        Err(Error::InsufficientLabels {
            requested: 3,
            available: 2
        })
    ));
}

#[tokio::test]
async fn test_inference_error_passes_through() {
    let classifier = FailingClassifier::new("boom").with_error("model file corrupt");

    let err = predict_top3(&classifier, "boom").await.unwrap_err();

    match err {
        Error::Inference(message) => assert_eq!(message, "model file corrupt"),
        other => panic!("expected inference error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_shape_mismatch_from_classifier() {
    let err = predict_top3(&MisalignedClassifier, "x").await.unwrap_err();
    assert!(matches!(
        err,
        Error::ShapeMismatch {
            scores: 3,
            labels: 2
        }
    ));
}

#[tokio::test]
async fn test_failed_input_does_not_affect_others() {
    let predictor = Predictor::new(Arc::new(FailingClassifier::new("boom")));
    let inputs = ["fine", "boom", "also fine"];

    let results = predictor.predict_batch(&inputs, 3).await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].as_ref().unwrap().best().unwrap().label, "b");
    assert!(matches!(results[1], Err(Error::Inference(_))));
    assert_eq!(results[2].as_ref().unwrap().best().unwrap().label, "b");

    // The classifier is still usable after a failure
    assert!(predictor.predict("fine again").await.is_ok());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_predictions_share_classifier() {
    let classifier = Arc::new(MockClassifier::new(&[0.3, 0.6, 0.1], &["x", "y", "z"]));
    let predictor = Predictor::new(classifier.clone());

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let predictor = predictor.clone();
            tokio::spawn(async move { predictor.predict(&format!("input {i}")).await })
        })
        .collect();

    for handle in handles {
        let selection = handle.await.unwrap().unwrap();
        assert_eq!(selection.best().unwrap().label, "y");
    }

    assert_eq!(classifier.call_count(), 16);
}

#[tokio::test]
async fn test_batch_respects_concurrency_limit() {
    let classifier = Arc::new(InFlightClassifier::default());
    let predictor = Predictor::new(classifier.clone());
    let inputs: Vec<String> = (0..8).map(|i| format!("input {i}")).collect();

    let results = predictor.predict_batch(&inputs, 3).await;

    assert_eq!(results.len(), 8);
    assert!(results.iter().all(|r| r.is_ok()));
    assert_eq!(classifier.max_in_flight(), 3);
}

#[tokio::test]
async fn test_batch_zero_concurrency_runs_one_at_a_time() {
    let classifier = Arc::new(InFlightClassifier::default());
    let predictor = Predictor::new(classifier.clone());

    let results = predictor.predict_batch(&["a", "b", "c"], 0).await;

    assert_eq!(results.len(), 3);
    assert_eq!(classifier.max_in_flight(), 1);
}
