use crate::vectorizer::{term::TermFrequency, vocabulary::Vocabulary};

/// Reduce a word with a fixed suffix rule set
///
/// | suffix | becomes |
/// |--------|---------|
/// | `sses` | `ss`    |
/// | `ies`  | `i`     |
/// | `ss`   | `ss`    |
/// | `s`    | (removed) |
///
/// Only the first matching rule applies.
///
/// # Examples
/// ```
/// use profile_ir::vectorizer::token::basic_stemming;
/// assert_eq!(basic_stemming("caresses"), "caress");
/// assert_eq!(basic_stemming("ponies"), "poni");
/// assert_eq!(basic_stemming("cats"), "cat");
/// ```
pub fn basic_stemming(word: &str) -> String {
    if let Some(base) = word.strip_suffix("sses") {
        format!("{base}ss")
    } else if let Some(base) = word.strip_suffix("ies") {
        format!("{base}i")
    } else if word.ends_with("ss") {
        word.to_string()
    } else if let Some(base) = word.strip_suffix('s') {
        base.to_string()
    } else {
        word.to_string()
    }
}

/// Split text into stemmed, lowercase words
///
/// Anything that is not an ASCII letter separates words.
/// A lone `s` stems to an empty token; it is kept so the token count
/// still reflects every word of the text.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_ascii_lowercase()
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|word| !word.is_empty())
        .map(basic_stemming)
        .collect()
}

/// Maps raw text onto the axes of a vocabulary
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'v> {
    vocabulary: &'v Vocabulary,
}

impl<'v> Tokenizer<'v> {
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &'v Vocabulary {
        self.vocabulary
    }

    /// Count vocabulary terms in free text
    /// Words outside the vocabulary only add to the token sum.
    pub fn term_frequency(&self, text: &str) -> TermFrequency {
        let mut freq = TermFrequency::new(self.vocabulary.len());
        for token in tokenize(text) {
            match self.vocabulary.axis_of(&token) {
                Some(axis) => freq.add_term(axis),
                None => freq.add_unmatched(),
            };
        }
        freq
    }

    /// Resolve a declared interest label to its axis
    /// Returns `None` when the label is not part of the vocabulary.
    pub fn resolve_interest(&self, label: &str) -> Option<usize> {
        let word = label.trim().to_ascii_lowercase();
        if word.is_empty() {
            return None;
        }
        self.vocabulary.axis_of(&basic_stemming(&word))
    }
}
