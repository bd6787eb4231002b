pub mod document;
pub mod index;
pub mod retriever;
pub mod tokenizer;

pub use document::{DocId, Document, DocumentStore};
pub use index::{Appearance, InvertedIndex, Postings};
pub use retriever::{QueryResults, ResolvedAppearance, Retriever, TermHits};
pub use tokenizer::TokenizerOptions;
