//! IntentRank Core
//!
//! Core types and the label ranking algorithm shared across IntentRank components.
//!
//! This crate provides:
//! - The data model for classifier output (score vectors, label names, ranked predictions)
//! - Error types and result handling
//! - Top-k selection over a score vector with positional tracking

pub mod error;
pub mod topk;
pub mod types;

pub use error::{Error, Result};
pub use topk::{ordinal, select_top_k, Selection};
pub use types::{LabelNames, RankedPrediction, ScoreVector};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::topk::{select_top_k, Selection};
    pub use crate::types::{LabelNames, RankedPrediction, ScoreVector};
}
