//! Configuration for intent models

use crate::predictor::DEFAULT_TOP_K;
use intentrank_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Configuration for all intent models
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Model configurations by name
    #[serde(default)]
    pub models: HashMap<String, KeywordModelSpec>,

    /// Model used when the caller does not name one
    #[serde(default)]
    pub default_model: Option<String>,

    /// Ranking depth for predictors built from this config
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

/// Lexicon model specification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordModelSpec {
    /// Model description
    #[serde(default)]
    pub description: Option<String>,

    /// Additive smoothing applied to every label's hit count
    #[serde(default = "default_smoothing")]
    pub smoothing: f32,

    /// Labels in score-vector order
    pub labels: Vec<IntentLabelSpec>,
}

/// One intent label and the keywords that vote for it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentLabelSpec {
    pub name: String,

    #[serde(default)]
    pub keywords: Vec<String>,
}

fn default_top_k() -> usize {
    DEFAULT_TOP_K
}

fn default_smoothing() -> f32 {
    1.0
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            models: HashMap::new(),
            default_model: None,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl IntentLabelSpec {
    pub fn new<I, S>(name: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

impl KeywordModelSpec {
    pub fn new(labels: Vec<IntentLabelSpec>) -> Self {
        Self {
            description: None,
            smoothing: default_smoothing(),
            labels,
        }
    }

    pub fn with_smoothing(mut self, smoothing: f32) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl ClassifierConfig {
    /// Load from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Invalid classifier YAML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from file
    ///
    /// Read and parse failures both surface as `Error::Config` naming the file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;

        Self::from_yaml(&content).map_err(|e| match e {
            Error::Config(msg) => Error::config(format!("{}: {}", path.display(), msg)),
            other => other,
        })
    }

    /// Check settings that serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(Error::config("top_k must be greater than 0"));
        }

        if let Some(name) = &self.default_model {
            if !self.models.contains_key(name) {
                return Err(Error::config(format!(
                    "Default model '{}' is not defined",
                    name
                )));
            }
        }

        for (name, spec) in &self.models {
            if !spec.smoothing.is_finite() || spec.smoothing < 0.0 {
                return Err(Error::config(format!(
                    "Model '{}' has invalid smoothing {}",
                    name, spec.smoothing
                )));
            }
        }

        Ok(())
    }

    /// Get all model names, sorted
    pub fn model_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.models.keys().cloned().collect();
        names.sort();
        names
    }
}
