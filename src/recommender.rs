use std::time::Instant;

use crate::{
    config::RankConfig,
    error::Result,
    vectorizer::{
        corpus::{Corpus, Document},
        evaluate::scoring::{rank_with, Hits},
        profile::Profile,
        vocabulary::Vocabulary,
        Vectorizer,
    },
};

/// Result of ranking one profile
///
/// A failing profile carries its error and never stops the others.
#[derive(Debug)]
pub struct ProfileOutcome<'p> {
    pub profile: &'p Profile,
    pub result: Result<Hits>,
}

/// Ranks a fixed corpus against interest profiles
///
/// Owns the vocabulary (through its [`Vectorizer`]), the document vectors
/// and the ranking configuration. Nothing changes while ranking.
#[derive(Debug, Clone)]
pub struct Recommender {
    vectorizer: Vectorizer,
    corpus: Corpus,
    config: RankConfig,
}

impl Recommender {
    pub fn new(vocabulary: Vocabulary, config: RankConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            vectorizer: Vectorizer::new(vocabulary),
            corpus: Corpus::new(),
            config,
        })
    }

    /// Vectorize and add a document
    pub fn add_doc(&mut self, doc: &Document) {
        self.corpus.add_doc(&self.vectorizer, doc);
    }

    pub fn add_docs<'d>(&mut self, docs: impl IntoIterator<Item = &'d Document>) {
        let start = Instant::now();
        for doc in docs {
            self.add_doc(doc);
        }
        tracing::debug!(
            documents = self.corpus.doc_num(),
            elapsed = ?start.elapsed(),
            "corpus vectorized"
        );
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        self.vectorizer.vocabulary()
    }

    pub fn vectorizer(&self) -> &Vectorizer {
        &self.vectorizer
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn config(&self) -> &RankConfig {
        &self.config
    }

    /// Ranked documents for one profile
    pub fn recommend(&self, profile: &Profile) -> Result<Hits> {
        let profile_vec = self.vectorizer.build_profile(profile)?;
        let hits = rank_with(
            &profile_vec,
            &self.corpus,
            self.config.threshold,
            &self.config.algorithm,
        );
        tracing::debug!(
            profile = %profile.id,
            shown = hits.len(),
            hidden = self.corpus.doc_num() - hits.len(),
            "profile ranked"
        );
        Ok(hits)
    }

    /// Rank each profile on its own
    pub fn recommend_all<'p>(&self, profiles: &'p [Profile]) -> Vec<ProfileOutcome<'p>> {
        profiles
            .iter()
            .map(|profile| {
                let result = self.recommend(profile);
                if let Err(err) = &result {
                    tracing::warn!(profile = %profile.id, error = %err, "profile skipped");
                }
                ProfileOutcome { profile, result }
            })
            .collect()
    }
}
