use indexmap::IndexMap;

use crate::vectorizer::{DocumentVector, Vectorizer};

/// Raw document as handed over by a loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: String,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Document vectors keyed by document id
///
/// Iteration follows insertion order. Built once from the loaded
/// documents and read-only while ranking.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: IndexMap<Box<str>, DocumentVector>,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self {
            documents: IndexMap::new(),
        }
    }

    /// Vectorize and add a document
    pub fn add_doc(&mut self, vectorizer: &Vectorizer, doc: &Document) {
        let vector = vectorizer.build_document(&doc.text);
        self.insert(doc.id.as_str(), vector);
    }

    /// Add an already built vector
    pub fn insert(&mut self, id: &str, vector: DocumentVector) {
        self.documents.insert(id.into(), vector);
    }

    pub fn get(&self, id: &str) -> Option<&DocumentVector> {
        self.documents.get(id)
    }

    /// Get the number of documents in the corpus
    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DocumentVector)> {
        self.documents.iter().map(|(k, v)| (k.as_ref(), v))
    }
}
