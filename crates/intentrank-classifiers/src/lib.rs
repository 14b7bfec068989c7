//! IntentRank Classifiers
//!
//! Intent classifiers and the prediction entry point built on top of them.
//!
//! - [`IntentClassifier`] is the seam to whatever produces per-label scores
//! - [`KeywordClassifier`] is a lexicon model configured from YAML
//! - [`ModelSlot`] holds a model that can be loaded, swapped and unloaded at runtime
//! - [`ClassifierRegistry`] builds and looks up named models
//! - [`predict_top3`] and [`Predictor`] run a model and rank its labels

pub mod classifier;
pub mod config;
pub mod keyword;
pub mod predictor;
pub mod registry;
pub mod slot;

pub use classifier::IntentClassifier;
pub use config::{ClassifierConfig, IntentLabelSpec, KeywordModelSpec};
pub use keyword::KeywordClassifier;
pub use predictor::{predict_top3, predict_top_k, Predictor, DEFAULT_TOP_K};
pub use registry::{load_config, ClassifierRegistry};
pub use slot::ModelSlot;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classifier::IntentClassifier;
    pub use crate::keyword::KeywordClassifier;
    pub use crate::predictor::{predict_top3, Predictor};
    pub use crate::registry::ClassifierRegistry;
    pub use crate::slot::ModelSlot;
    pub use intentrank_core::prelude::*;
}
