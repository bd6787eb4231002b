use crate::document::Document;
use crate::index::{Appearance, InvertedIndex};
use std::collections::HashSet;

/// One query term together with its stored appearance list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermHits<'a> {
    pub term: &'a str,
    pub appearances: &'a [Appearance],
}

/// Matched terms in the order they first occur in the query.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryResults<'a> {
    hits: Vec<TermHits<'a>>,
}

impl<'a> QueryResults<'a> {
    pub fn get(&self, term: &str) -> Option<&'a [Appearance]> {
        self.hits.iter().find(|h| h.term == term).map(|h| h.appearances)
    }

    pub fn terms(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.hits.iter().map(|h| h.term)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TermHits<'a>> {
        self.hits.iter()
    }

    pub fn len(&self) -> usize { self.hits.len() }

    pub fn is_empty(&self) -> bool { self.hits.is_empty() }
}

impl<'a> IntoIterator for QueryResults<'a> {
    type Item = TermHits<'a>;
    type IntoIter = std::vec::IntoIter<TermHits<'a>>;

    fn into_iter(self) -> Self::IntoIter { self.hits.into_iter() }
}

/// An appearance joined with the document it points at.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedAppearance<'a> {
    pub document: &'a Document,
    pub frequency: u32,
}

pub struct Retriever<'a> {
    index: &'a InvertedIndex,
}

impl<'a> Retriever<'a> {
    pub fn new(index: &'a InvertedIndex) -> Self { Self { index } }

    /// Look up every space-separated term of `query` independently.
    ///
    /// The split is literal (no trimming). Terms without postings are left out;
    /// a term repeated in the query is reported once, at its first position.
    pub fn retrieve_results(&self, query: &'a str) -> QueryResults<'a> {
        let postings = self.index.get_indexes();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut hits = Vec::new();
        for term in query.split(' ') {
            if !seen.insert(term) { continue; }
            if let Some(appearances) = postings.get(term) {
                hits.push(TermHits { term, appearances });
            }
        }
        tracing::debug!(matched = hits.len(), "resolved query");
        QueryResults { hits }
    }

    /// `None` when the document was removed from the store after indexing.
    pub fn resolve(&self, appearance: &Appearance) -> Option<ResolvedAppearance<'a>> {
        self.index
            .store()
            .get(&appearance.doc_id)
            .map(|document| ResolvedAppearance { document, frequency: appearance.frequency })
    }
}
