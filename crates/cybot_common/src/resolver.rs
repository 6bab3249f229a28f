//! Input classification.
//!
//! Reserved commands are intercepted before any content lookup, so an
//! override file can never shadow `exit`, `help`, `joke` or `challenge`.
//! Matching is exact on trimmed, case-folded input; there is no fuzzy or
//! substring matching.

use crate::content::ContentStore;

/// Reserved control tokens. These bypass topic/response lookup entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Joke,
    Challenge,
    Exit,
}

impl Command {
    /// All commands in the order the help menu lists them.
    pub const ALL: [Command; 4] = [
        Command::Joke,
        Command::Challenge,
        Command::Help,
        Command::Exit,
    ];

    /// Exact case-insensitive match on the trimmed token.
    pub fn parse(token: &str) -> Option<Command> {
        match token.trim().to_lowercase().as_str() {
            "help" => Some(Command::Help),
            "joke" => Some(Command::Joke),
            "challenge" => Some(Command::Challenge),
            "exit" => Some(Command::Exit),
            _ => None,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Joke => "joke",
            Command::Challenge => "challenge",
            Command::Exit => "exit",
        }
    }

    /// One-line description for the help menu.
    pub fn description(self) -> &'static str {
        match self {
            Command::Joke => "Hear a cybersecurity-themed joke",
            Command::Challenge => "Take a cybersecurity mini-challenge",
            Command::Help => "Show this help menu",
            Command::Exit => "Close the bot",
        }
    }
}

/// Outcome of classifying one line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A reserved command.
    Command(Command),
    /// A known topic and its tips, in stored order.
    Tips { topic: String, tips: Vec<String> },
    /// A stored answer for a known question.
    Answer(String),
    /// Nothing matched; carries the offending input for the error message.
    Unrecognized(String),
}

/// Classify input in strict priority order: command, then topic, then
/// stored response, then unrecognized. Callers reject empty input before
/// getting here.
pub fn resolve(input: &str, store: &ContentStore) -> Resolution {
    if let Some(command) = Command::parse(input) {
        return Resolution::Command(command);
    }

    if store.is_known_topic(input) {
        return Resolution::Tips {
            topic: input.trim().to_lowercase(),
            tips: store.tips_for(input).to_vec(),
        };
    }

    if store.has_response(input) {
        return Resolution::Answer(store.response_for(input).to_string());
    }

    Resolution::Unrecognized(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ContentStore {
        ContentStore::with_defaults()
    }

    #[test]
    fn commands_parse_case_insensitively() {
        assert_eq!(Command::parse("exit"), Some(Command::Exit));
        assert_eq!(Command::parse("  EXIT  "), Some(Command::Exit));
        assert_eq!(Command::parse("Joke"), Some(Command::Joke));
        assert_eq!(Command::parse("CHALLENGE"), Some(Command::Challenge));
        assert_eq!(Command::parse("help"), Some(Command::Help));
        assert_eq!(Command::parse("helpme"), None);
        assert_eq!(Command::parse("exit now"), None);
    }

    #[test]
    fn commands_win_over_content() {
        // Even with defaults only, command tokens must never reach lookup.
        let store = store();
        for command in Command::ALL {
            match resolve(command.token(), &store) {
                Resolution::Command(c) => assert_eq!(c, command),
                other => panic!("'{}' resolved to {:?}", command.token(), other),
            }
        }
    }

    #[test]
    fn known_topic_resolves_to_tips_in_order() {
        let store = store();
        match resolve("  Password Safety ", &store) {
            Resolution::Tips { topic, tips } => {
                assert_eq!(topic, "password safety");
                assert_eq!(tips.len(), 5);
                assert_eq!(
                    tips[0],
                    "Create strong passwords: Use 12+ characters with complexity"
                );
            }
            other => panic!("expected tips, got {:?}", other),
        }
    }

    #[test]
    fn unknown_input_is_unrecognized_and_preserved() {
        let store = store();
        match resolve("  quantum entanglement  ", &store) {
            Resolution::Unrecognized(text) => assert_eq!(text, "quantum entanglement"),
            other => panic!("expected unrecognized, got {:?}", other),
        }
    }

    #[test]
    fn topics_beat_responses_but_lose_to_commands() {
        // Priority is checked structurally: every default topic resolves to
        // tips, and no command token is a topic.
        let store = store();
        for topic in store.topic_names() {
            assert!(matches!(resolve(topic, &store), Resolution::Tips { .. }));
        }
        for command in Command::ALL {
            assert!(!store.is_known_topic(command.token()));
        }
    }
}
