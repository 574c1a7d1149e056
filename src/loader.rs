//! Reading corpus, profile and dictionary files
//!
//! The loader decides document ordering: ids come back sorted so ranking
//! ties resolve the same way on every run.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::vectorizer::{corpus::Document, profile::Profile, vocabulary::Vocabulary};

/// Extensions of files that are read as documents
pub const VALID_EXTENSIONS: &[&str] = &["txt"];

/// Whether a file is read as a document
pub fn is_tokenizable(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| VALID_EXTENSIONS.contains(&ext))
}

/// Read every `.txt` file directly inside `dir`
///
/// The document id is the file name without extension. Subdirectories and
/// other extensions are ignored. Documents come back sorted by id.
/// Bytes that are not UTF-8 become U+FFFD and split words like any other
/// non-letter.
pub fn load_corpus(dir: &Path) -> Result<Vec<Document>> {
    let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut documents = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| Error::io(dir, e))?.path();
        if !path.is_file() || !is_tokenizable(&path) {
            tracing::trace!(path = %path.display(), "not a document, skipped");
            continue;
        }
        let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
            tracing::warn!(path = %path.display(), "file name is not valid UTF-8, skipped");
            continue;
        };
        let bytes = fs::read(&path).map_err(|e| Error::io(&path, e))?;
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                tracing::debug!(path = %path.display(), "not valid UTF-8, decoded lossily");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        documents.push(Document::new(id, text));
    }
    documents.sort_by(|a, b| a.id.cmp(&b.id));

    tracing::debug!(dir = %dir.display(), documents = documents.len(), "corpus loaded");
    Ok(documents)
}

/// Parse profiles, one `UserID#interest1#...` per non-blank line
///
/// `source_name` only labels errors.
pub fn parse_profiles(text: &str, source_name: &str) -> Result<Vec<Profile>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            Profile::parse_line(line).map_err(|reason| Error::Malformed {
                source_name: source_name.to_string(),
                line: idx + 1,
                reason,
            })
        })
        .collect()
}

pub fn load_profiles(path: &Path) -> Result<Vec<Profile>> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let profiles = parse_profiles(&text, &path.display().to_string())?;
    tracing::debug!(path = %path.display(), profiles = profiles.len(), "profiles loaded");
    Ok(profiles)
}

/// Read a `term#similar1#similar2#...` dictionary file
pub fn load_dictionary(path: &Path) -> Result<Vocabulary> {
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let vocabulary = Vocabulary::parse(&text)?;
    tracing::debug!(
        path = %path.display(),
        terms = vocabulary.len(),
        variants = vocabulary.variant_num(),
        "dictionary loaded"
    );
    Ok(vocabulary)
}
