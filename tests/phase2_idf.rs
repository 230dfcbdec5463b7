//! Phase 2 tests: IDF computation over document sets.

use tfidf_qa::{compute_idfs, DocumentSet, QaError, TermFrequencies};

// ==================== Helpers ====================

fn doc_set(docs: &[(&str, &[&str])]) -> DocumentSet {
    docs.iter()
        .map(|(id, tokens)| (*id, TermFrequencies::from_tokens(tokens.iter().copied())))
        .collect()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

// ==================== IDF Tests ====================

#[test]
fn test_idf_empty_document_set_fails() {
    let result = compute_idfs(&DocumentSet::new());
    assert!(matches!(result, Err(QaError::EmptyDocumentSet)));
}

#[test]
fn test_idf_basic_values() {
    let docs = doc_set(&[("doc1", &["cat", "sat"]), ("doc2", &["dog", "ran", "fast"])]);
    let idfs = compute_idfs(&docs).unwrap();

    assert_eq!(idfs.doc_count(), 2);
    assert!(approx(idfs.get("cat").unwrap(), 2.0f64.ln()));
    assert!(approx(idfs.get("fast").unwrap(), 2.0f64.ln()));
}

#[test]
fn test_idf_counts_presence_not_multiplicity() {
    let docs = doc_set(&[("a", &["cat", "cat", "cat"]), ("b", &["dog"])]);
    let idfs = compute_idfs(&docs).unwrap();
    assert!(approx(idfs.get("cat").unwrap(), 2.0f64.ln()));
}

#[test]
fn test_idf_word_in_every_document_is_zero() {
    let docs = doc_set(&[("a", &["cat", "dog"]), ("b", &["cat"]), ("c", &["cat", "fish"])]);
    let idfs = compute_idfs(&docs).unwrap();
    assert_eq!(idfs.get("cat").unwrap(), 0.0);
}

#[test]
fn test_idf_covers_exactly_the_vocabulary() {
    let docs = doc_set(&[("a", &["cat", "dog"]), ("b", &["dog", "fish", "fish"])]);
    let idfs = compute_idfs(&docs).unwrap();

    assert_eq!(idfs.len(), 3);
    for word in ["cat", "dog", "fish"] {
        assert!(idfs.contains(word), "missing weight for {word}");
    }
    assert!(idfs.get("bird").is_none());
}

#[test]
fn test_idf_allows_empty_token_sequences() {
    let docs = doc_set(&[("empty", &[]), ("b", &["cat"])]);
    let idfs = compute_idfs(&docs).unwrap();
    assert_eq!(idfs.len(), 1);
    assert!(approx(idfs.get("cat").unwrap(), 2.0f64.ln()));
}

#[test]
fn test_idf_monotonic_in_document_frequency() {
    // df: rare = 1, common = 2, everywhere = 4
    let docs = doc_set(&[
        ("a", &["rare", "common", "everywhere"]),
        ("b", &["common", "everywhere"]),
        ("c", &["everywhere"]),
        ("d", &["everywhere"]),
    ]);
    let idfs = compute_idfs(&docs).unwrap();

    let rare = idfs.get("rare").unwrap();
    let common = idfs.get("common").unwrap();
    let everywhere = idfs.get("everywhere").unwrap();
    assert!(rare > common);
    assert!(common > everywhere);
}

#[test]
fn test_idf_never_negative() {
    let docs = doc_set(&[("a", &["x", "y", "z"]), ("b", &["x", "y"]), ("c", &["x"])]);
    let idfs = compute_idfs(&docs).unwrap();
    for (word, weight) in idfs.iter() {
        assert!(weight >= 0.0, "negative weight for {word}");
    }
}
