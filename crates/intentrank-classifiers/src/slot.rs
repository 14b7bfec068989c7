//! Swappable model handle
//!
//! A [`ModelSlot`] stands in for "the currently loaded model". Predictions made
//! while the slot is empty fail with `ModelNotLoaded`. Swapping a model in only
//! replaces the pointer; predictions already running keep the model they
//! started with.

use crate::classifier::IntentClassifier;
use async_trait::async_trait;
use intentrank_core::{Error, LabelNames, Result, ScoreVector};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

pub struct ModelSlot {
    name: String,
    model: RwLock<Option<Arc<dyn IntentClassifier>>>,
}

impl ModelSlot {
    /// Create an empty slot
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: RwLock::new(None),
        }
    }

    /// Create a slot that already holds a model
    pub fn with_model(name: impl Into<String>, model: Arc<dyn IntentClassifier>) -> Self {
        let slot = Self::new(name);
        slot.load(model);
        slot
    }

    /// Load a model, returning the one it replaced
    pub fn load(&self, model: Arc<dyn IntentClassifier>) -> Option<Arc<dyn IntentClassifier>> {
        info!(slot = %self.name, model = model.name(), "Loading model into slot");
        self.model.write().replace(model)
    }

    /// Remove the current model
    pub fn unload(&self) -> Option<Arc<dyn IntentClassifier>> {
        let previous = self.model.write().take();
        if previous.is_some() {
            info!(slot = %self.name, "Unloaded model from slot");
        }
        previous
    }

    pub fn is_loaded(&self) -> bool {
        self.model.read().is_some()
    }

    /// Current model, or `ModelNotLoaded`
    pub fn current(&self) -> Result<Arc<dyn IntentClassifier>> {
        self.model
            .read()
            .clone()
            .ok_or_else(|| Error::model_not_loaded(self.name.clone()))
    }
}

#[async_trait]
impl IntentClassifier for ModelSlot {
    async fn predict(&self, text: &str) -> Result<ScoreVector> {
        // Clone out of the lock so it is never held across the await
        let model = self.current()?;
        model.predict(text).await
    }

    fn label_names(&self) -> Result<LabelNames> {
        self.current()?.label_names()
    }

    async fn predict_labeled(&self, text: &str) -> Result<(ScoreVector, LabelNames)> {
        // One snapshot for both halves, so a concurrent load cannot mix models
        let model = self.current()?;
        model.predict_labeled(text).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}
