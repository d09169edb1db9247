// Invariants for the typing banner's phrase list.
// These tests are native-friendly and avoid wasm/browser APIs.

use std::collections::HashSet;

#[test]
fn phrases_are_unique_and_non_empty() {
    let mut seen = HashSet::new();
    for p in resume_motion::PHRASES {
        assert!(!p.trim().is_empty(), "blank phrase in PHRASES");
        assert_eq!(p.trim(), *p, "phrase {:?} has stray whitespace", p);
        assert!(seen.insert(*p), "duplicate phrase {:?} in PHRASES", p);
    }
}

#[test]
fn first_phrase_is_ai_trainer() {
    assert_eq!(resume_motion::PHRASES.first(), Some(&"AI Trainer"));
}

#[test]
fn default_config_uses_phrase_list() {
    let cfg = resume_motion::SiteConfig::default();
    let expected: Vec<String> = resume_motion::PHRASES.iter().map(|p| p.to_string()).collect();
    assert_eq!(cfg.phrases, expected);
}
