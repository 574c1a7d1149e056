/// TermFrequency struct
/// Counts vocabulary terms of one text, one slot per axis.
/// Also tracks the total number of tokens, matched or not.
///
/// # Examples
/// ```
/// use profile_ir::vectorizer::term::TermFrequency;
/// let mut term_freq = TermFrequency::new(3);
/// term_freq.add_term(0);
/// term_freq.add_term(2);
/// term_freq.add_term(0);
/// term_freq.add_unmatched();
///
/// assert_eq!(term_freq.count(0), 2);
/// assert_eq!(term_freq.token_sum(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermFrequency {
    term_count: Vec<u32>,
    total_token_count: u64,
}

impl TermFrequency {
    /// Create an empty frequency table for `dim` axes
    pub fn new(dim: usize) -> Self {
        TermFrequency {
            term_count: vec![0; dim],
            total_token_count: 0,
        }
    }

    /// Count one occurrence of an axis
    ///
    /// # Arguments
    /// * `axis` - vocabulary position; out of range axes are ignored
    #[inline]
    pub fn add_term(&mut self, axis: usize) -> &mut Self {
        if let Some(count) = self.term_count.get_mut(axis) {
            *count += 1;
            self.total_token_count += 1;
        }
        self
    }

    /// Count a token that matched no axis
    #[inline]
    pub fn add_unmatched(&mut self) -> &mut Self {
        self.total_token_count += 1;
        self
    }

    /// Occurrences of an axis
    #[inline]
    pub fn count(&self, axis: usize) -> u32 {
        self.term_count.get(axis).copied().unwrap_or(0)
    }

    /// Counts in axis order
    #[inline]
    pub fn counts(&self) -> &[u32] {
        &self.term_count
    }

    /// Number of axes
    #[inline]
    pub fn dim(&self) -> usize {
        self.term_count.len()
    }

    /// Total number of tokens of the text
    #[inline]
    pub fn token_sum(&self) -> u64 {
        self.total_token_count
    }

    /// Number of tokens that hit some axis
    pub fn matched_sum(&self) -> u64 {
        self.term_count.iter().map(|&c| c as u64).sum()
    }

    pub(crate) fn into_parts(self) -> (Vec<u32>, u64) {
        (self.term_count, self.total_token_count)
    }
}
