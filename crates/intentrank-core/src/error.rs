//! Error types for IntentRank

/// Result type alias using IntentRank's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for IntentRank operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Score vector and label names are not index-aligned
    #[error("shape mismatch: {scores} scores but {labels} labels")]
    ShapeMismatch { scores: usize, labels: usize },

    /// Caller passed an unusable argument (e.g. a ranking depth of zero)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The model knows fewer labels than the requested ranking depth
    #[error("insufficient labels: requested top {requested} but the model has {available}")]
    InsufficientLabels { requested: usize, available: usize },

    /// No model is loaded under the requested name or slot
    #[error("model not loaded: {0}")]
    ModelNotLoaded(String),

    /// Classifier failed while scoring an input
    #[error("inference error: {0}")]
    Inference(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Network/IO errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create a new invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a new model-not-loaded error
    pub fn model_not_loaded(name: impl Into<String>) -> Self {
        Self::ModelNotLoaded(name.into())
    }

    /// Create a new inference error
    pub fn inference(msg: impl Into<String>) -> Self {
        Self::Inference(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Short, stable name of the error kind (for metrics labels)
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ShapeMismatch { .. } => "shape_mismatch",
            Self::InvalidArgument(_) => "invalid_argument",
            Self::InsufficientLabels { .. } => "insufficient_labels",
            Self::ModelNotLoaded(_) => "model_not_loaded",
            Self::Inference(_) => "inference",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
        }
    }

    /// Whether the error was raised by the classifier rather than by ranking
    pub fn is_classifier_error(&self) -> bool {
        matches!(self, Self::ModelNotLoaded(_) | Self::Inference(_))
    }
}
