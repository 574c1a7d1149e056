//! Error types and exit codes
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage / configuration error (bad flags, bad vocabulary)
//! - 3: Data error (malformed input files, unknown interests, I/O)

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    Failure = 1,
    Usage = 2,
    Data = 3,
}

#[derive(Debug, Error)]
pub enum Error {
    /// A profile names an interest that no vocabulary axis accepts.
    #[error("profile `{profile}` declares interest `{interest}` which is not in the vocabulary")]
    UnknownInterest { profile: String, interest: String },

    #[error("vocabulary has no terms")]
    EmptyVocabulary,

    #[error("term `{0}` appears more than once in the vocabulary")]
    DuplicateStem(String),

    #[error("word `{variant}` is listed under both `{first}` and `{second}`")]
    ConflictingVariant {
        variant: String,
        first: String,
        second: String,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("{source_name}:{line}: {reason}")]
    Malformed {
        source_name: String,
        line: usize,
        reason: ProfileParseError,
    },

    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a `UserID#interest...` line was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileParseError {
    #[error("missing user id")]
    MissingId,

    #[error("profile `{0}` declares no interests")]
    NoInterests(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::EmptyVocabulary
            | Error::DuplicateStem(_)
            | Error::ConflictingVariant { .. }
            | Error::InvalidConfig(_) => ExitCode::Usage,
            Error::UnknownInterest { .. } | Error::Malformed { .. } | Error::Io { .. } => {
                ExitCode::Data
            }
            Error::Encode(_) => ExitCode::Failure,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_interest_names_profile_and_term() {
        let err = Error::UnknownInterest {
            profile: "User9".to_string(),
            interest: "moviez".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("User9"));
        assert!(msg.contains("moviez"));
        assert_eq!(err.exit_code(), ExitCode::Data);
    }

    #[test]
    fn vocabulary_problems_are_usage_errors() {
        assert_eq!(Error::EmptyVocabulary.exit_code(), ExitCode::Usage);
        assert_eq!(
            Error::DuplicateStem("movi".into()).exit_code(),
            ExitCode::Usage
        );
    }

    #[test]
    fn malformed_points_at_line() {
        let err = Error::Malformed {
            source_name: "profiles".into(),
            line: 4,
            reason: ProfileParseError::MissingId,
        };
        assert_eq!(err.to_string(), "profiles:4: missing user id");
        assert_eq!(err.exit_code(), ExitCode::Data);
    }
}
