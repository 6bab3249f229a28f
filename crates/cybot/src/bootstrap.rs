//! Startup sequence.
//!
//! Title, logo, best-effort welcome audio notice, content initialization
//! with one-shot default-file recovery, name prompt, welcome banner.
//! Everything here is cosmetic and non-fatal except content init, which
//! can fail past recovery and takes the process down with exit code 1.

use anyhow::{Context, Result};
use cybot_common::settings::FALLBACK_LOGO;
use cybot_common::{content, AppSettings, ContentError, ContentSources, ContentStore};
use owo_colors::OwoColorize;
use std::fs;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

use crate::typist::{self, Typist};
use crate::ui::{self, colors};

/// Best-effort terminal title (OSC 2). Silently ignored where unsupported.
pub fn set_console_title() {
    print!("\x1b]2;Cybersecurity Awareness Bot\x07");
    let _ = io::stdout().flush();
}

/// Print the logo file when present, else the built-in fallback.
pub fn display_logo(settings: &AppSettings, typist: &mut Typist) {
    if settings.logo_path.exists() {
        match fs::read_to_string(&settings.logo_path) {
            Ok(art) => println!("{art}"),
            Err(err) => {
                typist.say_colored(
                    &format!("Error displaying ASCII logo: {err}"),
                    typist::DIAGNOSTIC,
                    colors::RED,
                );
                println!("{FALLBACK_LOGO}");
            }
        }
    } else {
        println!("{FALLBACK_LOGO}");
    }
}

/// Welcome audio is best-effort only; this build has no audio backend, so
/// the file's presence just earns an honest notice.
pub fn play_welcome_audio(settings: &AppSettings, typist: &mut Typist) {
    if settings.welcome_audio_path.exists() {
        warn!(path = %settings.welcome_audio_path.display(), "audio playback not supported in this build");
        typist.say(
            "Welcome! Audio playback is not supported here. Continuing silently.",
            typist::NOTICE,
        );
    } else {
        typist.say(
            "Welcome audio file not found. Continuing silently.",
            typist::NOTICE,
        );
    }
}

/// Load all content. A missing or malformed responses file is recovered
/// once by persisting the seeded defaults and reloading; a second failure
/// propagates to the caller.
pub fn init_content(settings: &AppSettings, typist: &mut Typist) -> Result<ContentStore> {
    let sources = ContentSources::discover(settings);

    match ContentStore::load(&sources) {
        Ok(store) => Ok(store),
        Err(ContentError::ResponsesMissing { path }) => {
            typist.say_colored(
                &format!(
                    "Error: {} not found. Creating a default file...",
                    path.display()
                ),
                typist::DIAGNOSTIC,
                colors::RED,
            );
            rebuild_responses(&sources)
        }
        Err(err @ ContentError::ResponsesMalformed { .. }) => {
            typist.say_colored(&format!("{err}"), typist::DIAGNOSTIC, colors::RED);
            typist.say("Creating a default responses file...", typist::DIAGNOSTIC);
            rebuild_responses(&sources)
        }
        Err(err) => Err(err).context("reading content files"),
    }
}

fn rebuild_responses(sources: &ContentSources) -> Result<ContentStore> {
    content::write_default_responses(&sources.responses)
        .context("writing default responses file")?;
    info!(path = %sources.responses.display(), "synthesized default responses file");
    ContentStore::load(sources).context("reloading content after writing defaults")
}

/// Ask for a name, up to the configured number of attempts, then fall back
/// to the default with a notice.
pub fn prompt_for_user_name(settings: &AppSettings, typist: &mut Typist) -> String {
    for attempt in 1..=settings.max_name_attempts {
        typist.write("What's your name, cyber defender? ", typist::CHAT, None, false);
        let name = read_trimmed_line().unwrap_or_default();
        if !name.is_empty() {
            return name;
        }
        if attempt < settings.max_name_attempts {
            typist.say_colored(
                "I didn't catch that. Let's try again.",
                typist::CHAT,
                colors::YELLOW,
            );
        }
    }

    typist.say_colored(
        &format!("I'll call you {}.", settings.default_user_name),
        typist::CHAT,
        colors::YELLOW,
    );
    settings.default_user_name.clone()
}

fn read_trimmed_line() -> io::Result<String> {
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// The bordered welcome banner with the ordered topic list.
pub fn display_welcome(store: &ContentStore, user_name: &str, typist: &mut Typist) {
    let border = ui::welcome_border();
    println!("{}", border.dimmed());
    typist.say_colored(
        &format!("Welcome to Cybersecurity Awareness, {user_name}!"),
        typist::HEADER,
        colors::GREEN,
    );
    typist.say("I'm here to help you stay safe in the digital world.", typist::HEADER);
    println!("{}", border.dimmed());

    println!();
    typist.say_colored("Available topics:", typist::CHAT, colors::CYAN);
    typist.pause_ms(300);
    for topic in store.topic_names() {
        typist.say(
            &format!("{} {topic} - Get tips on {topic}", ui::BULLET),
            typist::TIP,
        );
    }

    println!();
    typist.say("Type 'joke' for a humor break!", typist::CHAT);
    typist.say("Type 'challenge' for a cybersecurity mini-challenge!", typist::CHAT);
    typist.say("Type 'help' to see available commands", typist::CHAT);
    typist.say("Type 'exit' to quit", typist::CHAT);
    println!();
}
