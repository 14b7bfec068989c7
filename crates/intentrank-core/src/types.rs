//! Core types for IntentRank

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// Per-class confidence output of a classifier for one input
///
/// One entry per known label, index-aligned with [`LabelNames`]. Produced fresh
/// by every prediction call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreVector(Vec<f32>);

impl ScoreVector {
    /// Wrap raw classifier scores
    pub fn new(scores: Vec<f32>) -> Self {
        Self(scores)
    }

    /// Borrow the scores as a slice
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    /// Consume the vector and return the raw scores
    pub fn into_inner(self) -> Vec<f32> {
        self.0
    }
}

impl Deref for ScoreVector {
    type Target = [f32];

    fn deref(&self) -> &[f32] {
        &self.0
    }
}

impl AsRef<[f32]> for ScoreVector {
    fn as_ref(&self) -> &[f32] {
        &self.0
    }
}

impl From<Vec<f32>> for ScoreVector {
    fn from(scores: Vec<f32>) -> Self {
        Self(scores)
    }
}

impl FromIterator<f32> for ScoreVector {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Label names of a loaded model, index-aligned with its [`ScoreVector`]s
///
/// Shared between every prediction of a model, so cloning only bumps a
/// reference count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct LabelNames(Arc<[String]>);

impl LabelNames {
    /// Create label names from any sequence of strings
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Borrow the names as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Position of a label, if the model knows it
    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|label| label == name)
    }
}

impl Deref for LabelNames {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for LabelNames {
    fn from(names: Vec<String>) -> Self {
        Self(names.into())
    }
}

impl From<LabelNames> for Vec<String> {
    fn from(names: LabelNames) -> Self {
        names.0.to_vec()
    }
}

impl<S: Into<String>> FromIterator<S> for LabelNames {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// One ranked entry of a top-k selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPrediction {
    /// Human-readable label name
    pub label: String,

    /// Confidence score copied from the score vector
    pub score: f32,

    /// Position of this label in the original score vector
    pub index: usize,
}

impl RankedPrediction {
    /// Create a new ranked prediction
    pub fn new(label: impl Into<String>, score: f32, index: usize) -> Self {
        Self {
            label: label.into(),
            score,
            index,
        }
    }

    /// View as a `(label, score, index)` triple
    pub fn as_tuple(&self) -> (&str, f32, usize) {
        (&self.label, self.score, self.index)
    }
}

impl fmt::Display for RankedPrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Label: {} with score: {}", self.label, self.score)
    }
}
