//! The interactive session loop.
//!
//! Prompt, read, classify, render, repeat. The only normal exit is the
//! `exit` command; a closed input stream also ends the session since
//! nothing further can be read.

use cybot_common::{resolve, Command, ContentStore, Resolution};
use owo_colors::OwoColorize;
use rand::rngs::StdRng;
use tracing::warn;

use crate::reader::LineEditor;
use crate::typist::{self, Typist};
use crate::ui::{self, colors};

pub struct Session {
    store: ContentStore,
    typist: Typist,
    editor: LineEditor,
    rng: StdRng,
    user_name: String,
}

impl Session {
    pub fn new(
        store: ContentStore,
        typist: Typist,
        editor: LineEditor,
        rng: StdRng,
        user_name: String,
    ) -> Self {
        Self {
            store,
            typist,
            editor,
            rng,
            user_name,
        }
    }

    pub fn run(&mut self) {
        loop {
            println!();
            let prompt = format!("{}> ", self.user_name);
            let input = match self.editor.read_line(&prompt) {
                Ok(line) => line,
                Err(err) => {
                    warn!(error = %err, "input stream unavailable, ending session");
                    break;
                }
            };

            let normalized = input.trim().to_lowercase();
            if normalized.is_empty() {
                self.typist.say(
                    "Please enter a command or question. Type 'help' for options.",
                    typist::NOTICE,
                );
                continue;
            }

            match resolve(&normalized, &self.store) {
                Resolution::Command(Command::Exit) => {
                    self.typist.say(&farewell(&self.user_name), typist::CHAT);
                    break;
                }
                Resolution::Command(Command::Help) => self.show_help(),
                Resolution::Command(Command::Joke) => self.show_joke(),
                Resolution::Command(Command::Challenge) => self.show_challenge(),
                Resolution::Tips { topic, tips } => self.show_tips(&topic, &tips),
                Resolution::Answer(answer) => self.typist.say(&answer, typist::CHAT),
                Resolution::Unrecognized(text) => {
                    self.typist.say(&unrecognized(&text), typist::CHAT);
                }
            }
        }
    }

    fn show_help(&mut self) {
        let border = ui::menu_border();
        println!("\n{}", border.dimmed());
        self.typist
            .say_colored("AVAILABLE COMMANDS:", typist::TIP, colors::CYAN);
        println!("{}", border.dimmed());

        for topic in self.store.topic_names() {
            self.typist.say(
                &format!("{} {topic} - Get tips on {topic}", ui::BULLET),
                typist::MENU,
            );
        }
        for command in Command::ALL {
            self.typist.say(
                &format!(
                    "{} {} - {}",
                    ui::BULLET,
                    command.token(),
                    command.description()
                ),
                typist::MENU,
            );
        }

        println!("{}", border.dimmed());
        self.typist
            .say_colored("You can also ask me questions like:", typist::TIP, colors::CYAN);
        self.typist.say("• How are you?", typist::MENU);
        self.typist.say("• What's your purpose?", typist::MENU);
        self.typist.say("• What can I ask you about?", typist::MENU);
        println!("{}", border.dimmed());
    }

    fn show_joke(&mut self) {
        println!();
        self.typist.say("Cybersecurity Joke Time!", typist::HEADER);
        self.typist.pause_ms(500);
        let joke = self.store.random_joke(&mut self.rng).to_string();
        self.typist.say(&joke, typist::PUNCHLINE);
    }

    fn show_challenge(&mut self) {
        println!();
        self.typist.say("Cybersecurity Challenge!", typist::HEADER);
        self.typist.pause_ms(500);
        let challenge = self.store.random_challenge(&mut self.rng).to_string();
        self.typist.say(&challenge, typist::HEADER);
        println!();
        self.typist
            .say("(Hint: Think carefully about online safety!)", typist::CHAT);
    }

    fn show_tips(&mut self, topic: &str, tips: &[String]) {
        if tips.is_empty() {
            self.typist.say(
                &format!("Sorry, I couldn't find tips for {topic}."),
                typist::CHAT,
            );
            return;
        }

        let emoji = self.store.random_emoji(&mut self.rng).to_string();
        println!();
        self.typist.say(
            &format!("{emoji} {} TIPS:", topic.to_uppercase()),
            typist::HEADER,
        );
        for tip in tips {
            self.typist.say(&tip_line(tip), typist::CHAT);
            self.typist.pause_ms(200);
        }
    }
}

fn tip_line(tip: &str) -> String {
    format!("{} {tip}", ui::BULLET)
}

fn farewell(user_name: &str) -> String {
    format!("Stay safe online, {user_name}! Logging out...")
}

fn unrecognized(input: &str) -> String {
    format!("I didn't quite understand '{input}'. Could you rephrase or type 'help' for available commands?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tips_render_with_a_bullet_marker() {
        assert_eq!(
            tip_line("Never reuse passwords across different websites"),
            "• Never reuse passwords across different websites"
        );
    }

    #[test]
    fn farewell_names_the_user() {
        let line = farewell("Robin");
        assert!(line.contains("Robin"));
        assert!(line.contains("Stay safe online"));
    }

    #[test]
    fn unrecognized_message_echoes_the_input_and_suggests_help() {
        let line = unrecognized("frobnicate the firewall");
        assert!(line.contains("'frobnicate the firewall'"));
        assert!(line.contains("help"));
    }
}
