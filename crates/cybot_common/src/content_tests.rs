//! Tests for content loading, override semantics and random selection.

use crate::content::{write_default_responses, ContentError, ContentSources, ContentStore};
use crate::defaults;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn sources(dir: &Path) -> ContentSources {
    ContentSources {
        responses: dir.join("responses.json"),
        tips: None,
        jokes: None,
        challenges: None,
    }
}

fn store_with_default_responses(dir: &Path) -> ContentStore {
    let sources = sources(dir);
    write_default_responses(&sources.responses).unwrap();
    ContentStore::load(&sources).unwrap()
}

// ============================================================================
// Defaults and lookup
// ============================================================================

#[test]
fn every_default_topic_is_known_with_nonempty_tips() {
    let store = ContentStore::with_defaults();
    assert_eq!(store.topic_names().len(), 11);
    for topic in store.topic_names() {
        assert!(store.is_known_topic(topic), "topic '{}' not found", topic);
        assert!(
            !store.tips_for(topic).is_empty(),
            "topic '{}' has no tips",
            topic
        );
    }
}

#[test]
fn topic_lookup_is_case_insensitive_and_trimmed() {
    let store = ContentStore::with_defaults();
    for query in ["PHISHING", "  phishing  ", "Phishing"] {
        assert!(store.is_known_topic(query), "'{}' should match", query);
        assert_eq!(store.tips_for(query).len(), 5);
    }
    assert!(!store.is_known_topic(""));
    assert!(!store.is_known_topic("   "));
}

#[test]
fn password_safety_tips_keep_their_defined_order() {
    let store = ContentStore::with_defaults();
    let tips = store.tips_for("password safety");
    assert_eq!(
        tips,
        [
            "Create strong passwords: Use 12+ characters with complexity",
            "Mix uppercase, lowercase, numbers & symbols in passwords",
            "Never reuse passwords across different websites",
            "Use a reputable password manager to generate and store passwords",
            "Enable two-factor authentication for critical accounts",
        ]
    );
}

#[test]
fn unknown_query_gets_the_fixed_fallback() {
    let store = ContentStore::with_defaults();
    assert!(!store.has_response("tell me a secret"));
    assert_eq!(
        store.response_for("tell me a secret"),
        defaults::UNKNOWN_QUERY_RESPONSE
    );
}

// ============================================================================
// Required responses source
// ============================================================================

#[test]
fn default_responses_round_trip_through_disk() {
    let dir = TempDir::new().unwrap();
    let store = store_with_default_responses(dir.path());

    for (question, answer) in defaults::default_responses() {
        assert!(store.has_response(question), "'{}' missing", question);
        assert_eq!(store.response_for(question), answer);
    }
}

#[test]
fn response_keys_are_case_folded_on_load() {
    let dir = TempDir::new().unwrap();
    let sources = sources(dir.path());
    fs::write(
        &sources.responses,
        r#"{"  How ARE You  ": "Doing great."}"#,
    )
    .unwrap();

    let store = ContentStore::load(&sources).unwrap();
    assert_eq!(store.response_for("how are you"), "Doing great.");
    assert_eq!(store.response_for("HOW ARE YOU"), "Doing great.");
}

#[test]
fn missing_responses_file_is_reported_as_missing() {
    let dir = TempDir::new().unwrap();
    match ContentStore::load(&sources(dir.path())) {
        Err(ContentError::ResponsesMissing { path }) => {
            assert!(path.ends_with("responses.json"));
        }
        other => panic!("expected ResponsesMissing, got {:?}", other.err()),
    }
}

#[test]
fn malformed_responses_file_is_reported_as_malformed() {
    let dir = TempDir::new().unwrap();
    let sources = sources(dir.path());
    fs::write(&sources.responses, "{ not json").unwrap();

    assert!(matches!(
        ContentStore::load(&sources),
        Err(ContentError::ResponsesMalformed { .. })
    ));
}

// ============================================================================
// Optional overrides
// ============================================================================

#[test]
fn tips_override_replaces_the_whole_topic_table() {
    let dir = TempDir::new().unwrap();
    let mut sources = sources(dir.path());
    write_default_responses(&sources.responses).unwrap();

    let tips_path = dir.path().join("cybertips.json");
    fs::write(
        &tips_path,
        r#"{"Password Hygiene": ["Rotate credentials after a breach"]}"#,
    )
    .unwrap();
    sources.tips = Some(tips_path);

    let store = ContentStore::load(&sources).unwrap();
    assert_eq!(store.topic_names(), ["password hygiene"]);
    assert!(store.is_known_topic("password hygiene"));
    assert_eq!(
        store.tips_for("Password Hygiene"),
        ["Rotate credentials after a breach"]
    );
    // No merge: the defaults are gone.
    assert!(!store.is_known_topic("phishing"));
}

#[test]
fn malformed_tips_override_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let mut sources = sources(dir.path());
    write_default_responses(&sources.responses).unwrap();

    let tips_path = dir.path().join("cybertips.json");
    fs::write(&tips_path, "[1, 2, 3]").unwrap();
    sources.tips = Some(tips_path);

    let store = ContentStore::load(&sources).unwrap();
    assert!(store.is_known_topic("phishing"));
    assert_eq!(store.topic_names().len(), 11);
}

#[test]
fn nonempty_jokes_override_replaces_wholesale() {
    let dir = TempDir::new().unwrap();
    let mut sources = sources(dir.path());
    write_default_responses(&sources.responses).unwrap();

    let jokes_path = dir.path().join("jokes.json");
    fs::write(&jokes_path, r#"["Only joke in town."]"#).unwrap();
    sources.jokes = Some(jokes_path);

    let store = ContentStore::load(&sources).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..10 {
        assert_eq!(store.random_joke(&mut rng), "Only joke in town.");
    }
}

#[test]
fn empty_jokes_override_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let mut sources = sources(dir.path());
    write_default_responses(&sources.responses).unwrap();

    let jokes_path = dir.path().join("jokes.json");
    fs::write(&jokes_path, "[]").unwrap();
    sources.jokes = Some(jokes_path);

    let store = ContentStore::load(&sources).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let joke = store.random_joke(&mut rng).to_string();
    assert!(defaults::DEFAULT_JOKES.contains(&joke.as_str()));
}

#[test]
fn malformed_challenges_override_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let mut sources = sources(dir.path());
    write_default_responses(&sources.responses).unwrap();

    let challenges_path = dir.path().join("challenges.json");
    fs::write(&challenges_path, "not json at all").unwrap();
    sources.challenges = Some(challenges_path);

    let store = ContentStore::load(&sources).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let challenge = store.random_challenge(&mut rng).to_string();
    assert!(defaults::DEFAULT_CHALLENGES.contains(&challenge.as_str()));
}

// ============================================================================
// Random selection
// ============================================================================

#[test]
fn joke_selection_covers_the_whole_default_list() {
    let store = ContentStore::with_defaults();
    let mut rng = StdRng::seed_from_u64(42);

    let mut counts: HashMap<String, u32> = HashMap::new();
    for _ in 0..500 {
        *counts.entry(store.random_joke(&mut rng).to_string()).or_default() += 1;
    }

    assert_eq!(counts.len(), defaults::DEFAULT_JOKES.len());
    for (joke, count) in &counts {
        assert!(*count > 50, "joke '{}' drawn only {} times", joke, count);
    }
}

#[test]
fn seeded_selection_is_reproducible() {
    let store = ContentStore::with_defaults();
    let mut a = StdRng::seed_from_u64(1234);
    let mut b = StdRng::seed_from_u64(1234);

    for _ in 0..50 {
        assert_eq!(store.random_joke(&mut a), store.random_joke(&mut b));
        assert_eq!(store.random_emoji(&mut a), store.random_emoji(&mut b));
    }
}

#[test]
fn emoji_pick_always_returns_something() {
    let store = ContentStore::with_defaults();
    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..20 {
        assert!(!store.random_emoji(&mut rng).is_empty());
    }
}
