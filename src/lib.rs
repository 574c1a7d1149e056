//! This crate ranks documents against user interest profiles with a
//! term-frequency vector space model.

pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod presenter;
pub mod recommender;
pub mod utils;
pub mod vectorizer;

/// Recommender
/// The top-level struct of this crate, tying the pipeline together.
/// Documents are vectorized once when added; each profile is turned into a
/// binary interest vector and every document is scored against it.
///
/// Internally, it holds:
/// - The vocabulary (inside a `Vectorizer`)
/// - Term-frequency vectors for each document
/// - The ranking configuration (threshold and algorithm)
///
/// Profiles are ranked independently: `recommend_all` returns one outcome
/// per profile, so a profile naming an unknown interest fails alone.
pub use recommender::{ProfileOutcome, Recommender};

/// Vocabulary
/// The closed, ordered set of terms spanning the vector space, together
/// with the surface words that count toward each term.
/// Built from a `term#similar1#similar2` dictionary or from the bundled
/// reference dictionary; immutable afterwards.
pub use vectorizer::vocabulary::Vocabulary;

/// Vectorizer and term vectors
/// - `Vectorizer`: builds document and profile vectors over one vocabulary
/// - `TermVector`: fixed-dimension vector, one component per term
/// - `DocumentVector`: raw term counts plus document length
/// - `ProfileVector`: 0/1 presence of each declared interest
pub use vectorizer::{DocumentVector, ProfileVector, TermVector, Vectorizer};

/// Corpus and documents
/// `Corpus` keeps document vectors in a stable order keyed by document id.
pub use vectorizer::corpus::{Corpus, Document};

/// Profile
/// A user id with an ordered list of declared interests.
pub use vectorizer::profile::Profile;

/// Similarity and ranking
/// - `cosine_similarity`: the scoring primitive; zero vectors score 0
/// - `SimilarityAlgorithm`: plain cosine or relevance-weighted cosine
/// - `rank` / `rank_with`: score, filter by threshold, sort by
///   `compare_hits` (score descending, then document id)
/// - `Hits` / `HitEntry`: ranked results
pub use vectorizer::evaluate::scoring::{
    compare_hits, cosine_similarity, rank, rank_with, HitEntry, Hits, SimilarityAlgorithm,
};

pub use config::RankConfig;
pub use error::{Error, ProfileParseError, Result};
