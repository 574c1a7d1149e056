//! Ranking configuration
//!
//! Everything the ranker needs besides its inputs travels in [`RankConfig`]
//! so callers and tests can swap values without touching globals.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::vectorizer::evaluate::scoring::SimilarityAlgorithm;

/// Scores strictly below this are hidden
pub const DEFAULT_SCORE_THRESHOLD: f64 = 0.1;

/// Scale factor of [`SimilarityAlgorithm::RelevanceWeighted`]
pub const DEFAULT_SCORE_MULTIPLIER: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    pub threshold: f64,
    pub algorithm: SimilarityAlgorithm,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SCORE_THRESHOLD,
            algorithm: SimilarityAlgorithm::RelevanceWeighted {
                multiplier: DEFAULT_SCORE_MULTIPLIER,
            },
        }
    }
}

impl RankConfig {
    pub fn cosine(threshold: f64) -> Self {
        Self {
            threshold,
            algorithm: SimilarityAlgorithm::CosineSimilarity,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_algorithm(mut self, algorithm: SimilarityAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Check that the values can produce a meaningful ranking
    pub fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "score threshold must be a non-negative number, got {}",
                self.threshold
            )));
        }
        match self.algorithm {
            SimilarityAlgorithm::CosineSimilarity if self.threshold > 1.0 => {
                Err(Error::InvalidConfig(format!(
                    "cosine scores never exceed 1, threshold {} would hide everything",
                    self.threshold
                )))
            }
            SimilarityAlgorithm::RelevanceWeighted { multiplier }
                if !multiplier.is_finite() || multiplier < 0.0 =>
            {
                Err(Error::InvalidConfig(format!(
                    "score multiplier must be a non-negative number, got {multiplier}"
                )))
            }
            _ => Ok(()),
        }
    }
}
