//! Top-k label selection
//!
//! Picks the `k` best entries of a classifier's score vector in a single pass,
//! keeping a bounded heap of `(index, score)` candidates. Positions are tracked
//! directly while scanning, so classes with identical scores always come back
//! as distinct entries.
//!
//! Ranking order is score descending, then index ascending. NaN scores rank
//! below every number.

use crate::error::{Error, Result};
use crate::types::RankedPrediction;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use tracing::warn;

/// Result of a top-k selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    predictions: Vec<RankedPrediction>,
    requested: usize,
    available: usize,
}

impl Selection {
    /// Ranked predictions, best first
    pub fn predictions(&self) -> &[RankedPrediction] {
        &self.predictions
    }

    /// Consume the selection and return the ranked predictions
    pub fn into_predictions(self) -> Vec<RankedPrediction> {
        self.predictions
    }

    /// Highest-ranked prediction, if the model has any labels
    pub fn best(&self) -> Option<&RankedPrediction> {
        self.predictions.first()
    }

    /// Requested ranking depth
    pub fn requested(&self) -> usize {
        self.requested
    }

    /// Number of labels the score vector carried
    pub fn available(&self) -> usize {
        self.available
    }

    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }

    /// True when the model has fewer labels than the requested depth
    pub fn is_truncated(&self) -> bool {
        self.available < self.requested
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedPrediction> {
        self.predictions.iter()
    }

    /// Turn a truncated selection into an [`Error::InsufficientLabels`]
    pub fn require_complete(self) -> Result<Self> {
        if self.is_truncated() {
            return Err(Error::InsufficientLabels {
                requested: self.requested,
                available: self.available,
            });
        }
        Ok(self)
    }
}

impl IntoIterator for Selection {
    type Item = RankedPrediction;
    type IntoIter = std::vec::IntoIter<RankedPrediction>;

    fn into_iter(self) -> Self::IntoIter {
        self.predictions.into_iter()
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a RankedPrediction;
    type IntoIter = std::slice::Iter<'a, RankedPrediction>;

    fn into_iter(self) -> Self::IntoIter {
        self.predictions.iter()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, prediction) in self.predictions.iter().enumerate() {
            if rank > 0 {
                writeln!(f)?;
            }
            write!(f, "{} {}", ordinal(rank + 1), prediction)?;
        }
        Ok(())
    }
}

/// English ordinal for a 1-based rank ("1st", "2nd", "11th", ...)
pub fn ordinal(rank: usize) -> String {
    let suffix = match (rank % 10, rank % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{rank}{suffix}")
}

/// Select the `k` highest-scoring labels
///
/// Returns `min(k, N)` predictions ordered by score descending, ties broken by
/// ascending index. When `N < k` all labels are returned and the selection is
/// flagged as truncated (see [`Selection::is_truncated`]).
///
/// # Errors
///
/// - [`Error::ShapeMismatch`] if `scores` and `labels` differ in length
/// - [`Error::InvalidArgument`] if `k` is zero
pub fn select_top_k<S: AsRef<str>>(
    scores: &[f32],
    labels: &[S],
    k: usize,
) -> Result<Selection> {
    if scores.len() != labels.len() {
        return Err(Error::ShapeMismatch {
            scores: scores.len(),
            labels: labels.len(),
        });
    }

    if k == 0 {
        return Err(Error::invalid_argument("k must be greater than 0"));
    }

    let available = scores.len();
    if available < k {
        warn!(
            requested = k,
            available,
            "Score vector has fewer labels than requested, returning all of them"
        );
    }

    let predictions = top_k_candidates(scores, k)
        .into_iter()
        .map(|c| RankedPrediction::new(labels[c.index].as_ref(), c.score, c.index))
        .collect();

    Ok(Selection {
        predictions,
        requested: k,
        available,
    })
}

/// Single pass over `scores`, returning at most `k` candidates best first
fn top_k_candidates(scores: &[f32], k: usize) -> Vec<Candidate> {
    let mut heap: BinaryHeap<Candidate> = BinaryHeap::with_capacity(k.min(scores.len()));

    for (index, &score) in scores.iter().enumerate() {
        let candidate = Candidate { index, score };

        if heap.len() < k {
            heap.push(candidate);
        } else if let Some(mut worst) = heap.peek_mut() {
            // Indices arrive in ascending order, so an equal score never displaces
            if candidate < *worst {
                *worst = candidate;
            }
        }
    }

    heap.into_sorted_vec()
}

/// Heap entry ordered by rank: "greater" means ranked lower
///
/// With this ordering `BinaryHeap` keeps the worst retained candidate on top,
/// and `into_sorted_vec` yields the best candidate first.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    index: usize,
    score: f32,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_scores(other.score, self.score).then_with(|| self.index.cmp(&other.index))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Total order on scores with NaN below everything
fn compare_scores(a: f32, b: f32) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}
