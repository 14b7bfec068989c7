//! Classifier registry initialization and management

use crate::{ClassifierConfig, IntentClassifier, KeywordClassifier, Predictor};
use intentrank_core::{Error, Result};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Registry of named intent models
pub struct ClassifierRegistry {
    /// Instantiated classifiers by name
    classifiers: HashMap<String, Arc<dyn IntentClassifier>>,

    /// Model used when the caller does not name one
    default_model: Option<String>,

    /// Ranking depth handed to predictors
    top_k: usize,
}

impl Default for ClassifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassifierRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            classifiers: HashMap::new(),
            default_model: None,
            top_k: ClassifierConfig::default().top_k,
        }
    }

    /// Build every model in the configuration
    ///
    /// A model that fails to build is logged and skipped so the remaining
    /// models stay usable. Asking for it later yields `ModelNotLoaded`.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        let mut registry = Self {
            classifiers: HashMap::new(),
            default_model: config.default_model.clone(),
            top_k: config.top_k,
        };

        info!("Initializing classifier registry with {} models", config.models.len());

        for name in config.model_names() {
            let spec = &config.models[&name];

            match KeywordClassifier::new(name.clone(), spec) {
                Ok(classifier) => {
                    info!("Loaded model: {}", name);
                    registry.register(name, Arc::new(classifier));
                }
                Err(e) => {
                    warn!("Failed to load model {}: {}", name, e);
                }
            }
        }

        info!(
            "Classifier registry initialized with {}/{} models",
            registry.count(),
            config.models.len()
        );

        registry
    }

    /// Load registry from configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let config = load_config(path)?;
        Ok(Self::from_config(&config))
    }

    /// Register (or replace) a classifier under `name`
    pub fn register(
        &mut self,
        name: impl Into<String>,
        classifier: Arc<dyn IntentClassifier>,
    ) -> Option<Arc<dyn IntentClassifier>> {
        self.classifiers.insert(name.into(), classifier)
    }

    /// Look up a classifier by name
    pub fn get(&self, name: &str) -> Result<Arc<dyn IntentClassifier>> {
        self.classifiers
            .get(name)
            .cloned()
            .ok_or_else(|| Error::model_not_loaded(name))
    }

    /// The configured default classifier
    pub fn default_classifier(&self) -> Result<Arc<dyn IntentClassifier>> {
        let name = self
            .default_model
            .as_deref()
            .ok_or_else(|| Error::model_not_loaded("no default model configured"))?;
        self.get(name)
    }

    /// Set the model used by [`default_classifier`](Self::default_classifier)
    pub fn set_default(&mut self, name: impl Into<String>) {
        self.default_model = Some(name.into());
    }

    /// Predictor for a named model using the configured ranking depth
    pub fn predictor(&self, name: &str) -> Result<Predictor> {
        Ok(Predictor::new(self.get(name)?).with_top_k(self.top_k))
    }

    /// Registered model names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.classifiers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Get the number of loaded classifiers
    pub fn count(&self) -> usize {
        self.classifiers.len()
    }
}

/// Load classifier configuration from file
pub fn load_config(path: impl AsRef<Path>) -> Result<ClassifierConfig> {
    let path = path.as_ref();
    info!("Loading classifiers config from {}", path.display());
    ClassifierConfig::from_file(path)
}
