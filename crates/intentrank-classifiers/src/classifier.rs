//! Classifier trait

use async_trait::async_trait;
use intentrank_core::{LabelNames, Result, ScoreVector};
use std::sync::Arc;

/// A loaded multi-class intent model
///
/// Implementations score an input against every label they know. The score
/// vector returned by [`predict`](Self::predict) must be index-aligned with
/// [`label_names`](Self::label_names).
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    /// Score the given text against every known label
    ///
    /// Fails with `ModelNotLoaded` or `Inference` errors.
    async fn predict(&self, text: &str) -> Result<ScoreVector>;

    /// Label names aligned with the score vector
    fn label_names(&self) -> Result<LabelNames>;

    /// Score the text and return the labels of the same model
    ///
    /// Classifiers whose model can change between calls must override this so
    /// both halves come from one model.
    async fn predict_labeled(&self, text: &str) -> Result<(ScoreVector, LabelNames)> {
        let scores = self.predict(text).await?;
        let labels = self.label_names()?;
        Ok((scores, labels))
    }

    /// Get the classifier name
    fn name(&self) -> &str;
}

#[async_trait]
impl<C: IntentClassifier + ?Sized> IntentClassifier for Arc<C> {
    async fn predict(&self, text: &str) -> Result<ScoreVector> {
        (**self).predict(text).await
    }

    fn label_names(&self) -> Result<LabelNames> {
        (**self).label_names()
    }

    async fn predict_labeled(&self, text: &str) -> Result<(ScoreVector, LabelNames)> {
        (**self).predict_labeled(text).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
