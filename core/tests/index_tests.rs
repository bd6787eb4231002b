use lexis_core::{Appearance, DocId, Document, InvertedIndex, Retriever, TokenizerOptions};

fn app(id: &str, frequency: u32) -> Appearance {
    Appearance { doc_id: DocId::from(id), frequency }
}

fn sample_index() -> InvertedIndex {
    let mut idx = InvertedIndex::new();
    idx.index_document(Document::new("0", "a.txt", "cat dog cat"));
    idx.index_document(Document::new("1", "b.txt", "dog bird"));
    idx
}

#[test]
fn postings_follow_indexing_order() {
    let idx = sample_index();
    let postings = idx.get_indexes();
    assert_eq!(postings.get("cat").unwrap(), &[app("0", 2)]);
    assert_eq!(postings.get("dog").unwrap(), &[app("0", 1), app("1", 1)]);
    assert_eq!(postings.get("bird").unwrap(), &[app("1", 1)]);
}

#[test]
fn one_appearance_per_term_and_document() {
    let idx = sample_index();
    for (term, appearances) in idx.get_indexes().iter() {
        let mut ids: Vec<&DocId> = appearances.iter().map(|a| &a.doc_id).collect();
        let before = ids.len();
        ids.dedup();
        assert_eq!(before, ids.len(), "duplicate appearance under {term:?}");
    }
}

#[test]
fn indexing_order_does_not_change_content() {
    let d0 = Document::new("0", "a.txt", "cat dog cat");
    let d1 = Document::new("1", "b.txt", "dog bird");

    let mut forward = InvertedIndex::new();
    forward.index_document(d0.clone());
    forward.index_document(d1.clone());
    let mut backward = InvertedIndex::new();
    backward.index_document(d1);
    backward.index_document(d0);

    assert_eq!(forward.num_terms(), backward.num_terms());
    for (term, appearances) in forward.get_indexes().iter() {
        let mut a = appearances.to_vec();
        let mut b = backward.get_indexes().get(term).unwrap().to_vec();
        a.sort_by(|x, y| x.doc_id.cmp(&y.doc_id));
        b.sort_by(|x, y| x.doc_id.cmp(&y.doc_id));
        assert_eq!(a, b);
    }
}

#[test]
fn reindexing_same_document_appends() {
    let mut idx = InvertedIndex::new();
    idx.index_document(Document::new("0", "a.txt", "cat"));
    idx.index_document(Document::new("0", "a.txt", "cat"));
    assert_eq!(idx.get_indexes().get("cat").unwrap(), &[app("0", 1), app("0", 1)]);
    assert_eq!(idx.num_documents(), 1);
}

#[test]
fn empty_term_indexed_unless_dropped() {
    let mut literal = InvertedIndex::new();
    literal.index_document(Document::new("0", "h.txt", "Hello, World!!"));
    assert_eq!(literal.get_indexes().get("Hello").unwrap(), &[app("0", 1)]);
    assert_eq!(literal.get_indexes().get("World").unwrap(), &[app("0", 1)]);
    assert!(literal.get_indexes().contains(""));

    let mut dropped = InvertedIndex::with_options(TokenizerOptions { keep_empty_tokens: false });
    dropped.index_document(Document::new("0", "h.txt", "Hello, World!!"));
    assert!(!dropped.get_indexes().contains(""));
    assert_eq!(dropped.num_terms(), 2);
}

#[test]
fn query_returns_stored_sequences() {
    let idx = sample_index();
    let retriever = Retriever::new(&idx);

    let res = retriever.retrieve_results("cat dog");
    assert_eq!(res.len(), 2);
    assert_eq!(res.get("cat").unwrap(), idx.get_indexes().get("cat").unwrap());
    assert_eq!(res.get("dog").unwrap(), &[app("0", 1), app("1", 1)]);

    let res = retriever.retrieve_results("bird");
    assert_eq!(res.terms().collect::<Vec<_>>(), vec!["bird"]);

    let res = retriever.retrieve_results("fish");
    assert!(res.get("fish").is_none());
    assert!(res.is_empty());
}

#[test]
fn query_is_case_sensitive_and_not_trimmed() {
    let idx = sample_index();
    let retriever = Retriever::new(&idx);
    assert!(retriever.retrieve_results("Cat").is_empty());
    // "cat  dog" splits into "cat", "", "dog"; "" has no postings here
    let res = retriever.retrieve_results("cat  dog");
    assert_eq!(res.terms().collect::<Vec<_>>(), vec!["cat", "dog"]);
}

#[test]
fn remove_leaves_postings_in_place() {
    let mut idx = sample_index();
    let d0 = idx.store().get(&DocId::from("0")).unwrap().clone();
    idx.remove(&d0);

    assert!(idx.store().get(&DocId::from("0")).is_none());
    assert_eq!(idx.get_indexes().get("cat").unwrap(), &[app("0", 2)]);

    let retriever = Retriever::new(&idx);
    let res = retriever.retrieve_results("dog");
    let resolved: Vec<_> = res
        .get("dog")
        .unwrap()
        .iter()
        .filter_map(|a| retriever.resolve(a))
        .map(|r| r.document.path.as_str())
        .collect();
    assert_eq!(resolved, vec!["b.txt"]);
}
