use std::collections::HashMap;

use ahash::RandomState;
use indexmap::IndexSet;

use crate::error::{Error, Result};
use crate::vectorizer::token::basic_stemming;

/// Separator between words of a dictionary line
pub const DELIMITER: char = '#';

/// Dictionary behind [`Vocabulary::reference`]
pub const REFERENCE_DICTIONARY: &str = "\
movies#movie#film#cinema#actor#director#classic#review#screen
politics#political#politician#government#election#vote#voter#parliament#media#law#minister
soccer#football#league#goal#victory#match#striker#coach#stadium
books#book#novel#essay#author#shakespeare#library#poetry
";

/// Closed, ordered set of terms spanning the vector space
///
/// Each term (stem) is one axis. Surface words reach an axis through the
/// variant table, which is keyed by the stemmed form of the word.
/// A vocabulary is immutable once built.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// axis order
    stems: IndexSet<Box<str>>,
    /// stemmed variant -> axis index
    variants: HashMap<Box<str>, usize, RandomState>,
}

impl Vocabulary {
    /// Build from `(term, variants)` entries
    ///
    /// Every word is lowercased and stemmed. The term itself is always a
    /// variant of its own axis.
    pub fn from_entries<I, S, V>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, V)>,
        S: AsRef<str>,
        V: IntoIterator,
        V::Item: AsRef<str>,
    {
        let mut stems: IndexSet<Box<str>> = IndexSet::new();
        let mut variants: HashMap<Box<str>, usize, RandomState> =
            HashMap::with_hasher(RandomState::new());

        for (term, similar) in entries {
            let stem = normalize(term.as_ref());
            if stem.is_empty() {
                return Err(Error::InvalidConfig(format!(
                    "vocabulary term `{}` stems to nothing",
                    term.as_ref()
                )));
            }
            let (axis, inserted) = stems.insert_full(stem.clone().into_boxed_str());
            if !inserted {
                return Err(Error::DuplicateStem(stem));
            }
            register(&mut variants, &stems, stem.as_str(), axis)?;
            for word in similar {
                let variant = normalize(word.as_ref());
                if variant.is_empty() {
                    continue;
                }
                register(&mut variants, &stems, &variant, axis)?;
            }
        }

        if stems.is_empty() {
            return Err(Error::EmptyVocabulary);
        }
        Ok(Self { stems, variants })
    }

    /// Parse the `term#similar1#similar2#...` dictionary format
    /// Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let entries = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                let mut words = line.split(DELIMITER).map(str::trim);
                let term = words.next().unwrap_or_default();
                (term, words.collect::<Vec<_>>())
            })
            .collect::<Vec<_>>();
        Self::from_entries(entries)
    }

    /// Four-axis vocabulary: `movi`, `politic`, `soccer`, `book`
    ///
    /// Built from [`REFERENCE_DICTIONARY`] with the same checks as a
    /// dictionary file.
    pub fn reference() -> Result<Self> {
        Self::parse(REFERENCE_DICTIONARY)
    }

    /// Number of axes
    #[inline]
    pub fn len(&self) -> usize {
        self.stems.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stems.is_empty()
    }

    /// Stems in axis order
    pub fn stems(&self) -> impl Iterator<Item = &str> {
        self.stems.iter().map(|s| s.as_ref())
    }

    /// Axis of a stem
    #[inline]
    pub fn index_of(&self, stem: &str) -> Option<usize> {
        self.stems.get_index_of(stem)
    }

    /// Stem of an axis
    #[inline]
    pub fn stem_at(&self, axis: usize) -> Option<&str> {
        self.stems.get_index(axis).map(|s| s.as_ref())
    }

    /// Axis reached by an already stemmed token
    #[inline]
    pub fn axis_of(&self, token: &str) -> Option<usize> {
        self.variants.get(token).copied()
    }

    /// Number of distinct stemmed words that map onto some axis
    pub fn variant_num(&self) -> usize {
        self.variants.len()
    }
}

fn normalize(word: &str) -> String {
    basic_stemming(&word.trim().to_ascii_lowercase())
}

fn register(
    variants: &mut HashMap<Box<str>, usize, RandomState>,
    stems: &IndexSet<Box<str>>,
    variant: &str,
    axis: usize,
) -> Result<()> {
    match variants.get(variant) {
        Some(&existing) if existing != axis => Err(Error::ConflictingVariant {
            variant: variant.to_string(),
            first: stems.get_index(existing).map(|s| s.to_string()).unwrap_or_default(),
            second: stems.get_index(axis).map(|s| s.to_string()).unwrap_or_default(),
        }),
        Some(_) => Ok(()),
        None => {
            variants.insert(variant.into(), axis);
            Ok(())
        }
    }
}
