//! Lexicon-based intent classifier
//!
//! Every label owns a keyword list. Whole-word keyword hits are counted per
//! label and turned into a score vector with additive smoothing, so scores are
//! non-negative, sum to one, and an input with no hits scores every label
//! equally.

use crate::classifier::IntentClassifier;
use crate::config::KeywordModelSpec;
use aho_corasick::AhoCorasick;
use intentrank_core::{Error, LabelNames, Result, ScoreVector};
use std::collections::HashSet;
use tracing::debug;

pub struct KeywordClassifier {
    name: String,
    labels: LabelNames,
    keywords: AhoCorasick,
    /// Label index for each keyword pattern
    keyword_labels: Vec<usize>,
    smoothing: f32,
}

impl KeywordClassifier {
    /// Build a classifier from a model specification
    pub fn new(name: impl Into<String>, spec: &KeywordModelSpec) -> Result<Self> {
        let name = name.into();

        if spec.labels.is_empty() {
            return Err(Error::config(format!("Model '{}' defines no labels", name)));
        }

        if !spec.smoothing.is_finite() || spec.smoothing < 0.0 {
            return Err(Error::config(format!(
                "Model '{}' has invalid smoothing {}",
                name, spec.smoothing
            )));
        }

        let mut seen = HashSet::new();
        let mut patterns = Vec::new();
        let mut keyword_labels = Vec::new();

        for (index, label) in spec.labels.iter().enumerate() {
            if !seen.insert(label.name.as_str()) {
                return Err(Error::config(format!(
                    "Model '{}' defines label '{}' more than once",
                    name, label.name
                )));
            }

            for keyword in &label.keywords {
                let keyword = keyword.trim();
                if keyword.is_empty() {
                    return Err(Error::config(format!(
                        "Model '{}' has an empty keyword for label '{}'",
                        name, label.name
                    )));
                }
                patterns.push(keyword.to_string());
                keyword_labels.push(index);
            }
        }

        let keywords = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&patterns)
            .map_err(|e| Error::config(format!("Failed to build keyword matcher: {e}")))?;

        debug!(
            model = %name,
            labels = spec.labels.len(),
            keywords = patterns.len(),
            "Built keyword classifier"
        );

        Ok(Self {
            name,
            labels: spec.labels.iter().map(|l| l.name.as_str()).collect(),
            keywords,
            keyword_labels,
            smoothing: spec.smoothing,
        })
    }

    /// Raw whole-word keyword hits per label
    pub fn hit_counts(&self, text: &str) -> Vec<u32> {
        let mut hits = vec![0u32; self.labels.len()];

        for m in self.keywords.find_overlapping_iter(text) {
            if is_whole_word(text, m.start(), m.end()) {
                hits[self.keyword_labels[m.pattern().as_usize()]] += 1;
            }
        }

        hits
    }
}

/// True if the match is not glued to letters or digits on either side
fn is_whole_word(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();

    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

#[async_trait::async_trait]
impl IntentClassifier for KeywordClassifier {
    async fn predict(&self, text: &str) -> Result<ScoreVector> {
        let hits = self.hit_counts(text);
        let n = hits.len() as f32;
        let total: f32 = hits.iter().map(|&h| h as f32).sum();
        let denominator = total + self.smoothing * n;

        let scores: ScoreVector = if denominator > 0.0 {
            hits.iter()
                .map(|&h| (h as f32 + self.smoothing) / denominator)
                .collect()
        } else {
            vec![1.0 / n; hits.len()].into()
        };

        Ok(scores)
    }

    fn label_names(&self) -> Result<LabelNames> {
        Ok(self.labels.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
