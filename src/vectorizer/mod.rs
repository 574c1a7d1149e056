pub mod corpus;
pub mod evaluate;
pub mod profile;
pub mod term;
pub mod token;
pub mod vocabulary;

use num::Num;

use crate::error::{Error, Result};
use crate::utils::math::vector;
use crate::vectorizer::{profile::Profile, term::TermFrequency, token::Tokenizer, vocabulary::Vocabulary};

/// Dense vector with one component per vocabulary axis
///
/// Compared by value; two vectors built from the same input are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TermVector<N>
where
    N: Num + Copy,
{
    values: Box<[N]>,
}

impl<N> TermVector<N>
where
    N: Num + Copy + Into<f64>,
{
    pub fn from_values(values: impl Into<Box<[N]>>) -> Self {
        Self { values: values.into() }
    }

    pub fn zeros(dim: usize) -> Self {
        Self { values: vec![N::zero(); dim].into_boxed_slice() }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn get(&self, axis: usize) -> Option<N> {
        self.values.get(axis).copied()
    }

    /// Component of a stem, looked up through the vocabulary
    pub fn get_by_stem(&self, vocabulary: &Vocabulary, stem: &str) -> Option<N> {
        vocabulary.index_of(stem).and_then(|axis| self.get(axis))
    }

    #[inline]
    pub fn as_slice(&self) -> &[N] {
        &self.values
    }

    pub fn is_zero(&self) -> bool {
        self.values.iter().all(|v| v.is_zero())
    }

    /// Euclidean length
    pub fn norm(&self) -> f64 {
        vector::norm(&self.values)
    }
}

/// Term-frequency vector of one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentVector {
    /// raw occurrence count per axis
    pub tf: TermVector<u32>,
    /// number of tokens in the document, vocabulary or not
    pub token_sum: u64,
}

impl DocumentVector {
    pub fn from_freq(freq: TermFrequency) -> Self {
        let (counts, token_sum) = freq.into_parts();
        Self {
            tf: TermVector::from_values(counts),
            token_sum,
        }
    }

    /// Sum of the counts on the axes where `mask` is non-zero
    pub fn masked_count<N>(&self, mask: &TermVector<N>) -> u64
    where
        N: Num + Copy + Into<f64>,
    {
        self.tf
            .as_slice()
            .iter()
            .zip(mask.as_slice())
            .filter(|(_, m)| !m.is_zero())
            .map(|(&c, _)| c as u64)
            .sum()
    }
}

/// Binary interest vector of one profile
pub type ProfileVector = TermVector<u8>;

/// Builds document and profile vectors over one vocabulary
///
/// Holds no state besides the vocabulary, so the same input always gives
/// the same vector.
#[derive(Debug, Clone)]
pub struct Vectorizer {
    vocabulary: Vocabulary,
}

impl Vectorizer {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Number of dimensions of every vector built here
    #[inline]
    pub fn dim(&self) -> usize {
        self.vocabulary.len()
    }

    fn tokenizer(&self) -> Tokenizer<'_> {
        Tokenizer::new(&self.vocabulary)
    }

    /// Term counts of a text, in vocabulary order
    pub fn build(&self, text: &str) -> TermVector<u32> {
        self.build_document(text).tf
    }

    /// Term counts plus document length
    pub fn build_document(&self, text: &str) -> DocumentVector {
        DocumentVector::from_freq(self.tokenizer().term_frequency(text))
    }

    /// Presence vector of a profile's interests
    ///
    /// An interest the vocabulary does not know is an error rather than
    /// being skipped, so a typo in the profile file surfaces.
    pub fn build_profile(&self, profile: &Profile) -> Result<ProfileVector> {
        let tokenizer = self.tokenizer();
        let mut values = vec![0u8; self.dim()];
        for interest in &profile.interests {
            let axis = tokenizer
                .resolve_interest(interest)
                .ok_or_else(|| Error::UnknownInterest {
                    profile: profile.id.clone(),
                    interest: interest.clone(),
                })?;
            values[axis] = 1;
        }
        Ok(TermVector::from_values(values))
    }
}
