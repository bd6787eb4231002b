use crate::document::{DocId, Document, DocumentStore};
use crate::tokenizer::{tokenize, TokenizerOptions};
use std::collections::HashMap;

/// Occurrence profile of one term within one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    pub doc_id: DocId,
    pub frequency: u32,
}

/// Term -> appearances, each list in the order documents were indexed.
#[derive(Debug, Default)]
pub struct Postings {
    terms: HashMap<String, Vec<Appearance>>,
}

impl Postings {
    pub fn get(&self, term: &str) -> Option<&[Appearance]> {
        self.terms.get(term).map(Vec::as_slice)
    }

    pub fn contains(&self, term: &str) -> bool { self.terms.contains_key(term) }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Appearance])> {
        self.terms.iter().map(|(t, a)| (t.as_str(), a.as_slice()))
    }

    fn merge(&mut self, term: String, appearance: Appearance) {
        self.terms.entry(term).or_default().push(appearance);
    }
}

#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: Postings,
    store: DocumentStore,
    options: TokenizerOptions,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    pub fn with_options(options: TokenizerOptions) -> Self {
        Self { options, ..Self::default() }
    }

    /// Tokenize `document`, merge one appearance per distinct term into the
    /// postings and hand the document to the store.
    ///
    /// Indexing the same id twice appends a second appearance under each of
    /// its terms; nothing is deduplicated.
    pub fn index_document(&mut self, document: Document) -> &Document {
        let mut tf_counts: HashMap<String, u32> = HashMap::new();
        for term in tokenize(&document.text, self.options) {
            *tf_counts.entry(term).or_insert(0) += 1;
        }
        tracing::debug!(doc_id = %document.id, distinct_terms = tf_counts.len(), "indexing document");

        for (term, frequency) in tf_counts {
            self.postings.merge(term, Appearance { doc_id: document.id.clone(), frequency });
        }

        self.store.add(document)
    }

    pub fn get_indexes(&self) -> &Postings { &self.postings }

    pub fn store(&self) -> &DocumentStore { &self.store }

    /// Drop `document` from the store. Its appearances stay in the postings
    /// and no longer resolve.
    pub fn remove(&mut self, document: &Document) -> Option<Document> {
        self.store.remove(document)
    }

    pub fn num_terms(&self) -> usize { self.postings.len() }

    pub fn num_documents(&self) -> usize { self.store.len() }
}
