use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

/// Identifier assigned by the ingestion side, e.g. "0", "1", ...
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocId(pub String);

impl DocId {
    pub fn as_str(&self) -> &str { &self.0 }
}

impl From<String> for DocId {
    fn from(s: String) -> Self { DocId(s) }
}

impl From<&str> for DocId {
    fn from(s: &str) -> Self { DocId(s.to_string()) }
}

impl From<usize> for DocId {
    fn from(n: usize) -> Self { DocId(n.to_string()) }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: DocId,
    pub path: String,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<DocId>, path: impl Into<String>, text: impl Into<String>) -> Self {
        Self { id: id.into(), path: path.into(), text: text.into() }
    }
}

/// In-memory store of indexed documents, keyed by id.
#[derive(Debug, Default)]
pub struct DocumentStore {
    docs: HashMap<DocId, Document>,
}

impl DocumentStore {
    pub fn new() -> Self { Self::default() }

    /// Inserts the document, replacing any previous one with the same id.
    pub fn add(&mut self, document: Document) -> &Document {
        match self.docs.entry(document.id.clone()) {
            Entry::Occupied(mut e) => {
                e.insert(document);
                e.into_mut()
            }
            Entry::Vacant(e) => e.insert(document),
        }
    }

    pub fn get(&self, id: &DocId) -> Option<&Document> {
        self.docs.get(id)
    }

    /// Removing an unknown document is a no-op.
    pub fn remove(&mut self, document: &Document) -> Option<Document> {
        self.docs.remove(&document.id)
    }

    pub fn len(&self) -> usize { self.docs.len() }

    pub fn is_empty(&self) -> bool { self.docs.is_empty() }
}
