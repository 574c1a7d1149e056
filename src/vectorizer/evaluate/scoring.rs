use std::{cmp::Ordering, fmt};

use num::Num;
use serde::{Deserialize, Serialize};

use crate::{
    config::DEFAULT_SCORE_MULTIPLIER,
    utils::math::vector,
    vectorizer::{corpus::Corpus, DocumentVector, ProfileVector, TermVector},
};

/// Enum for similarity algorithms used when ranking documents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SimilarityAlgorithm {
    /// Cosine similarity
    /// Considers only direction
    CosineSimilarity,
    /// Cosine similarity scaled by how much of the document is about the profile
    /// score = cos * (matching terms / document length) * multiplier
    /// param multiplier: constant scale factor
    RelevanceWeighted { multiplier: f64 },
}

impl Default for SimilarityAlgorithm {
    fn default() -> Self {
        SimilarityAlgorithm::RelevanceWeighted {
            multiplier: DEFAULT_SCORE_MULTIPLIER,
        }
    }
}

impl SimilarityAlgorithm {
    /// Score one document against one profile
    pub fn score(&self, profile: &ProfileVector, doc: &DocumentVector) -> f64 {
        let cos = cosine_similarity(profile, &doc.tf);
        match *self {
            SimilarityAlgorithm::CosineSimilarity => cos,
            SimilarityAlgorithm::RelevanceWeighted { multiplier } => {
                if doc.token_sum == 0 {
                    return 0.0;
                }
                let ratio = doc.masked_count(profile) as f64 / doc.token_sum as f64;
                cos * (ratio * multiplier)
            }
        }
    }
}

/// Cosine similarity between two term vectors
///
/// cosθ = A・B / (|A||B|)
///
/// Symmetric. A vector with zero norm on either side yields `0.0`.
pub fn cosine_similarity<A, B>(a: &TermVector<A>, b: &TermVector<B>) -> f64
where
    A: Num + Copy + Into<f64>,
    B: Num + Copy + Into<f64>,
{
    vector::cosine(a.as_slice(), b.as_slice())
}

/// One ranked document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HitEntry {
    /// document id
    pub key: String,
    pub score: f64,
}

/// Ordering of hits: higher score first, then document id ascending
pub fn compare_hits(a: &HitEntry, b: &HitEntry) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.key.cmp(&b.key))
}

/// Structure to store ranking results
#[derive(Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Hits {
    pub list: Vec<HitEntry>,
}

impl Hits {
    /// Create a new Hits instance
    pub fn new(list: Vec<HitEntry>) -> Self {
        Hits { list }
    }

    /// Sort results with [`compare_hits`]
    pub fn sort_by_score_desc(&mut self) -> &mut Self {
        // Remove NaN scores
        self.list.retain(|e| !e.score.is_nan());
        self.list.sort_by(compare_hits);
        self
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HitEntry> {
        self.list.iter()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.list.iter().map(|e| e.key.as_str()).collect()
    }
}

impl fmt::Debug for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // Pretty print with alternate formatting: each hit on a new line
            writeln!(f, "Hits [")?;
            for entry in &self.list {
                writeln!(f, "    {:?}: {:.6}", entry.key, entry.score)?;
            }
            write!(f, "]")
        } else {
            f.debug_list()
                .entries(self.list.iter().map(|e| (&e.key, e.score)))
                .finish()
        }
    }
}

impl fmt::Display for Hits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (rank, entry) in self.list.iter().enumerate() {
            writeln!(f, "{:>3}. {} ({:.12})", rank + 1, entry.key, entry.score)?;
        }
        Ok(())
    }
}

/// Rank every document of the corpus by cosine similarity
pub fn rank(profile: &ProfileVector, corpus: &Corpus, threshold: f64) -> Hits {
    rank_with(profile, corpus, threshold, &SimilarityAlgorithm::CosineSimilarity)
}

/// Rank every document of the corpus with the given algorithm
///
/// Every document is scored; those below `threshold` are logged and left
/// out. The rest are ordered by [`compare_hits`]. An empty result is valid.
pub fn rank_with(
    profile: &ProfileVector,
    corpus: &Corpus,
    threshold: f64,
    algorithm: &SimilarityAlgorithm,
) -> Hits {
    let mut hits = Hits::new(Vec::with_capacity(corpus.doc_num()));
    for (key, doc) in corpus.iter() {
        let score = algorithm.score(profile, doc);
        tracing::trace!(document = key, score, "scored");
        if score >= threshold {
            hits.list.push(HitEntry {
                key: key.to_string(),
                score,
            });
        } else {
            tracing::debug!(document = key, score, threshold, "hidden below threshold");
        }
    }
    hits.sort_by_score_desc();
    hits
}
