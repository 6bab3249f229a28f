//! Typing-animation renderer.
//!
//! Writes text one character at a time with a random per-character delay,
//! plus a longer pause after sentence and clause punctuation. Colors are
//! applied for the duration of one message and reset on every exit path,
//! including write failures. Rendering is blocking; one message finishes
//! before anything else happens.

use rand::rngs::StdRng;
use rand::Rng;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crate::ui::colors;

/// Per-character delay range in milliseconds, sampled uniformly in
/// `[min_ms, max_ms)`.
#[derive(Debug, Clone, Copy)]
pub struct Pace {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Pace {
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }
}

/// Paces used across the session, slowest for headers and punchlines.
pub const DIAGNOSTIC: Pace = Pace::new(5, 15);
pub const NOTICE: Pace = Pace::new(10, 30);
pub const MENU: Pace = Pace::new(10, 25);
pub const CHAT: Pace = Pace::new(15, 40);
pub const TIP: Pace = Pace::new(15, 30);
pub const HEADER: Pace = Pace::new(20, 50);
pub const PUNCHLINE: Pace = Pace::new(25, 60);

/// Extra-pause class for a character that was just written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseClass {
    /// End of a sentence: `.` `!` `?` - pause in `[150, 300)` ms.
    Sentence,
    /// Clause separator: `,` `;` `:` - pause in `[50, 150)` ms.
    Clause,
    /// Anything else: no extra pause.
    None,
}

pub fn pause_class(c: char) -> PauseClass {
    match c {
        '.' | '!' | '?' => PauseClass::Sentence,
        ',' | ';' | ':' => PauseClass::Clause,
        _ => PauseClass::None,
    }
}

/// The renderer. Owns its random source so tests can seed it; animation can
/// be switched off (non-TTY output) without changing what gets written.
pub struct Typist {
    rng: StdRng,
    animate: bool,
}

impl Typist {
    pub fn new(rng: StdRng) -> Self {
        Self { rng, animate: true }
    }

    pub fn with_animation(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    /// Animated line with a trailing newline.
    pub fn say(&mut self, text: &str, pace: Pace) {
        self.write(text, pace, None, true);
    }

    /// Animated colored line with a trailing newline.
    pub fn say_colored(&mut self, text: &str, pace: Pace, color: &'static str) {
        self.write(text, pace, Some(color), true);
    }

    /// Animated write. Empty text is a no-op. The color, when set, is
    /// reset even if a character write fails partway through.
    pub fn write(&mut self, text: &str, pace: Pace, color: Option<&'static str>, newline: bool) {
        if text.is_empty() {
            return;
        }

        let mut out = io::stdout();
        if let Some(code) = color {
            let _ = out.write_all(code.as_bytes());
        }

        let result = self.type_chars(&mut out, text, pace);

        if color.is_some() {
            let _ = out.write_all(colors::RESET.as_bytes());
        }
        if newline {
            let _ = out.write_all(b"\n");
        }
        let _ = out.flush();

        if let Err(err) = result {
            tracing::debug!(error = %err, "animated write failed");
        }
    }

    /// Plain pause, used between tips and before punchlines.
    pub fn pause_ms(&mut self, millis: u64) {
        if self.animate {
            thread::sleep(Duration::from_millis(millis));
        }
    }

    fn type_chars(&mut self, out: &mut impl Write, text: &str, pace: Pace) -> io::Result<()> {
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
            out.flush()?;
            self.jitter(pace.min_ms, pace.max_ms);
            match pause_class(ch) {
                PauseClass::Sentence => self.jitter(150, 300),
                PauseClass::Clause => self.jitter(50, 150),
                PauseClass::None => {}
            }
        }
        Ok(())
    }

    fn jitter(&mut self, min_ms: u64, max_ms: u64) {
        if !self.animate || min_ms >= max_ms {
            return;
        }
        let delay = self.rng.gen_range(min_ms..max_ms);
        thread::sleep(Duration::from_millis(delay));
    }
}
