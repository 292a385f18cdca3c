use std::sync::Arc;

use super::*;

// === Keywords ===

#[test]
fn c_keywords_resolve() {
    let tables = LexTables::c_language();
    for word in ["int", "for", "while", "return", "struct", "nullptr", "typeof_unqual"] {
        assert!(tables.is_keyword(word), "{word} should be a keyword");
    }
}

#[test]
fn keyword_match_is_case_sensitive() {
    let tables = LexTables::c_language();
    assert!(tables.is_keyword("for"));
    assert!(!tables.is_keyword("For"));
    assert!(!tables.is_keyword("FOR"));
}

#[test]
fn keyword_match_is_exact() {
    let tables = LexTables::c_language();
    assert!(!tables.is_keyword("fo"));
    assert!(!tables.is_keyword("fork"));
    assert!(!tables.is_keyword(""));
}

#[test]
fn keyword_table_has_no_duplicates() {
    assert_eq!(LexTables::c_language().keyword_count(), C_KEYWORDS.len());
}

// === Character Sets ===

#[test]
fn operator_characters() {
    let tables = LexTables::c_language();
    for &b in b"+-*/><=!" {
        assert!(tables.is_operator(b));
        assert!(!tables.is_boundary_symbol(b));
    }
    assert!(!tables.is_operator(b'%'));
    assert!(!tables.is_operator(b'&'));
}

#[test]
fn boundary_characters() {
    let tables = LexTables::c_language();
    for &b in b"[](){}.;," {
        assert!(tables.is_boundary_symbol(b));
        assert!(!tables.is_operator(b));
    }
    assert!(!tables.is_boundary_symbol(b':'));
}

// === Sharing ===

#[test]
fn shared_tables_are_built_once() {
    let a = LexTables::shared();
    let b = LexTables::shared();
    assert!(Arc::ptr_eq(&a, &b));
    assert!(a.is_keyword("int"));
}

// === Builder ===

#[test]
fn builder_accepts_custom_sets() {
    let tables = LexTables::builder()
        .keywords(["let", "fn"])
        .keywords(vec![String::from("mut")])
        .operators(*b"%&")
        .boundary_symbols(*b":")
        .build();
    assert!(tables.is_keyword("let"));
    assert!(tables.is_keyword("mut"));
    assert!(!tables.is_keyword("int"));
    assert!(tables.is_operator(b'%'));
    assert!(!tables.is_operator(b'+'));
    assert!(tables.is_boundary_symbol(b':'));
}

#[test]
fn empty_builder_matches_nothing() {
    let tables = LexTables::builder().build();
    assert_eq!(tables.keyword_count(), 0);
    assert!(!tables.is_operator(b'='));
    assert!(!tables.is_boundary_symbol(b';'));
}
