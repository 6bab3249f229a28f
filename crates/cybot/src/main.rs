//! Cybot - Cybersecurity Awareness Bot
//!
//! Flagless terminal chatbot: logo, best-effort welcome audio, a name
//! prompt, then the interactive session loop.

use cybot::reader::LineEditor;
use cybot::session::Session;
use cybot::typist::Typist;
use cybot::ui::colors;
use cybot::{bootstrap, errors, typist};
use cybot_common::AppSettings;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr so they never interleave with the animated chat.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    process::exit(run());
}

fn run() -> i32 {
    let settings = AppSettings::default();
    let animate = console::Term::stdout().is_term();
    let mut typist = Typist::new(StdRng::from_entropy()).with_animation(animate);

    bootstrap::set_console_title();
    bootstrap::display_logo(&settings, &mut typist);
    bootstrap::play_welcome_audio(&settings, &mut typist);

    let store = match bootstrap::init_content(&settings, &mut typist) {
        Ok(store) => store,
        Err(err) => {
            typist.say_colored(
                &format!("Unexpected error initializing chatbot: {err:#}"),
                typist::DIAGNOSTIC,
                colors::RED,
            );
            return errors::EXIT_CONTENT_INIT_FAILED;
        }
    };

    let user_name = bootstrap::prompt_for_user_name(&settings, &mut typist);
    bootstrap::display_welcome(&store, &user_name, &mut typist);

    let editor = LineEditor::new(settings.max_command_history);
    let mut session = Session::new(store, typist, editor, StdRng::from_entropy(), user_name);
    session.run();

    errors::EXIT_SUCCESS
}
