use crate::error::ProfileParseError;
use crate::vectorizer::vocabulary::DELIMITER;

/// A user and the interests they declared
///
/// Interests keep their declaration order. Repeated interests are kept
/// here but only count once in the profile vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: String,
    pub interests: Vec<String>,
}

impl Profile {
    pub fn new<I, S>(id: impl Into<String>, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            interests: interests.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse `UserID#interest1#interest2#...`
    ///
    /// Fields are trimmed and empty interest fields are dropped.
    /// A line without user id or without interests is rejected; the loader
    /// adds the line number.
    pub fn parse_line(line: &str) -> Result<Self, ProfileParseError> {
        let mut fields = line.trim().split(DELIMITER).map(str::trim);
        let id = fields.next().unwrap_or_default();
        if id.is_empty() {
            return Err(ProfileParseError::MissingId);
        }
        let interests: Vec<&str> = fields.filter(|f| !f.is_empty()).collect();
        if interests.is_empty() {
            return Err(ProfileParseError::NoInterests(id.to_string()));
        }
        Ok(Self::new(id, interests))
    }

    /// Interests without repeats, in first-declared order
    pub fn distinct_interests(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::with_capacity(self.interests.len());
        for interest in &self.interests {
            if !seen.contains(&interest.as_str()) {
                seen.push(interest.as_str());
            }
        }
        seen
    }
}
