//! Content store: topics, responses, jokes, challenges, emojis.
//!
//! The responses file is required; when it is missing or malformed the
//! caller recovers once by persisting [`write_default_responses`] and
//! reloading. Every other source is optional and replaces the built-in
//! defaults wholesale when present and valid - a bad override is logged
//! and ignored, never fatal.

use rand::Rng;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::defaults;
use crate::settings::AppSettings;

/// Errors for the required content source. Optional sources never error.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("responses file not found: {path}")]
    ResponsesMissing { path: PathBuf },

    #[error("failed to parse responses file {path}: {source}")]
    ResponsesMalformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to read {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

/// Where content is loaded from. Optional sources are `Some` only when the
/// corresponding file actually exists.
#[derive(Debug, Clone)]
pub struct ContentSources {
    pub responses: PathBuf,
    pub tips: Option<PathBuf>,
    pub jokes: Option<PathBuf>,
    pub challenges: Option<PathBuf>,
}

impl ContentSources {
    /// Resolve sources from settings, probing the optional files on disk.
    pub fn discover(settings: &AppSettings) -> Self {
        let probe = |path: &Path| -> Option<PathBuf> {
            if path.exists() {
                Some(path.to_path_buf())
            } else {
                debug!(path = %path.display(), "optional content file not present");
                None
            }
        };

        Self {
            responses: settings.responses_path.clone(),
            tips: probe(&settings.tips_path),
            jokes: probe(&settings.jokes_path),
            challenges: probe(&settings.challenges_path),
        }
    }
}

/// Immutable content tables, populated once at startup.
pub struct ContentStore {
    topics: HashMap<String, Vec<String>>,
    topic_order: Vec<String>,
    responses: HashMap<String, String>,
    jokes: Vec<String>,
    challenges: Vec<String>,
    emojis: Vec<String>,
}

/// Keys are compared trimmed and case-folded.
fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

impl ContentStore {
    /// Build a store with only the built-in defaults.
    pub fn with_defaults() -> Self {
        let mut topics = HashMap::new();
        let mut topic_order = Vec::new();
        for (name, tips) in defaults::default_topics() {
            topic_order.push(name.to_string());
            topics.insert(
                name.to_string(),
                tips.into_iter().map(str::to_string).collect(),
            );
        }

        Self {
            topics,
            topic_order,
            responses: HashMap::new(),
            jokes: defaults::DEFAULT_JOKES.iter().map(|j| j.to_string()).collect(),
            challenges: defaults::DEFAULT_CHALLENGES
                .iter()
                .map(|c| c.to_string())
                .collect(),
            emojis: defaults::DEFAULT_EMOJIS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Load all content. The responses source must exist and parse; the
    /// optional sources fall back to defaults on any failure.
    pub fn load(sources: &ContentSources) -> Result<Self, ContentError> {
        let mut store = Self::with_defaults();

        store.load_responses(&sources.responses)?;

        if let Some(path) = &sources.tips {
            store.apply_tips_override(path);
        }
        if let Some(path) = &sources.jokes {
            store.apply_list_override(path, ListKind::Jokes);
        }
        if let Some(path) = &sources.challenges {
            store.apply_list_override(path, ListKind::Challenges);
        }

        Ok(store)
    }

    fn load_responses(&mut self, path: &Path) -> Result<(), ContentError> {
        let raw = fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                ContentError::ResponsesMissing {
                    path: path.to_path_buf(),
                }
            } else {
                ContentError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let parsed: HashMap<String, String> =
            serde_json::from_str(&raw).map_err(|source| ContentError::ResponsesMalformed {
                path: path.to_path_buf(),
                source,
            })?;

        self.responses = parsed
            .into_iter()
            .map(|(k, v)| (normalize(&k), v))
            .collect();
        Ok(())
    }

    /// A valid tips file replaces the whole topic table; there is no merge.
    /// Override topics are listed in alphabetical order.
    fn apply_tips_override(&mut self, path: &Path) {
        match read_json::<HashMap<String, Vec<String>>>(path) {
            Ok(custom) => {
                let mut topics: HashMap<String, Vec<String>> = custom
                    .into_iter()
                    .map(|(k, v)| (normalize(&k), v))
                    .collect();
                let mut order: Vec<String> = topics.keys().cloned().collect();
                order.sort();
                std::mem::swap(&mut self.topics, &mut topics);
                self.topic_order = order;
                debug!(path = %path.display(), topics = self.topic_order.len(), "loaded custom tips");
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "failed to load custom tips, keeping defaults");
            }
        }
    }

    /// Lists replace the defaults only when they parse and are non-empty.
    fn apply_list_override(&mut self, path: &Path, kind: ListKind) {
        match read_json::<Vec<String>>(path) {
            Ok(custom) if !custom.is_empty() => {
                match kind {
                    ListKind::Jokes => self.jokes = custom,
                    ListKind::Challenges => self.challenges = custom,
                }
                debug!(path = %path.display(), kind = kind.name(), "loaded custom list");
            }
            Ok(_) => {
                warn!(path = %path.display(), kind = kind.name(), "override list is empty, keeping defaults");
            }
            Err(err) => {
                warn!(path = %path.display(), kind = kind.name(), error = %err, "failed to load override list, keeping defaults");
            }
        }
    }

    /// Topic display names in definition order.
    pub fn topic_names(&self) -> &[String] {
        &self.topic_order
    }

    pub fn is_known_topic(&self, text: &str) -> bool {
        let key = normalize(text);
        !key.is_empty() && self.topics.contains_key(&key)
    }

    /// Tips for a topic, empty if unknown.
    pub fn tips_for(&self, text: &str) -> &[String] {
        self.topics
            .get(&normalize(text))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_response(&self, query: &str) -> bool {
        let key = normalize(query);
        !key.is_empty() && self.responses.contains_key(&key)
    }

    /// Stored answer for a query, or the fixed fallback message.
    pub fn response_for(&self, query: &str) -> &str {
        self.responses
            .get(&normalize(query))
            .map(String::as_str)
            .unwrap_or(defaults::UNKNOWN_QUERY_RESPONSE)
    }

    pub fn random_joke<R: Rng>(&self, rng: &mut R) -> &str {
        pick(&self.jokes, rng).unwrap_or(defaults::NO_JOKES_MESSAGE)
    }

    pub fn random_challenge<R: Rng>(&self, rng: &mut R) -> &str {
        pick(&self.challenges, rng).unwrap_or(defaults::NO_CHALLENGES_MESSAGE)
    }

    pub fn random_emoji<R: Rng>(&self, rng: &mut R) -> &str {
        pick(&self.emojis, rng).unwrap_or(defaults::FALLBACK_EMOJI)
    }
}

#[derive(Clone, Copy)]
enum ListKind {
    Jokes,
    Challenges,
}

impl ListKind {
    fn name(self) -> &'static str {
        match self {
            ListKind::Jokes => "jokes",
            ListKind::Challenges => "challenges",
        }
    }
}

fn pick<'a, R: Rng>(items: &'a [String], rng: &mut R) -> Option<&'a str> {
    if items.is_empty() {
        None
    } else {
        Some(items[rng.gen_range(0..items.len())].as_str())
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let raw = fs::read_to_string(path).map_err(|e| e.to_string())?;
    serde_json::from_str(&raw).map_err(|e| e.to_string())
}

/// Persist the three seeded question/answer pairs, pretty-printed. Used to
/// recover from a missing or malformed responses file.
pub fn write_default_responses(path: &Path) -> io::Result<()> {
    let table: BTreeMap<&str, &str> = defaults::default_responses().into_iter().collect();
    let json = serde_json::to_string_pretty(&table)?;
    fs::write(path, json)
}
