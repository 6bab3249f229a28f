//! Interactive line editor with history recall.
//!
//! Reads raw keys from the terminal: printable characters echo and append
//! (bounded by the visible width), backspace erases, and the arrow keys
//! walk the bounded most-recent-first history. When stdin is not a
//! terminal the editor degrades to a plain buffered line read, and any
//! redraw failure degrades to a simple backspace echo rather than
//! propagating.

use console::{measure_text_width, Key, Term};
use cybot_common::CommandHistory;
use std::io::{self, BufRead, Write};

pub struct LineEditor {
    term: Term,
    history: CommandHistory,
}

impl LineEditor {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            term: Term::stdout(),
            history: CommandHistory::new(history_capacity),
        }
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Read one submitted line. The returned text is untrimmed; submitted
    /// non-empty lines land in the history (consecutive duplicates once).
    pub fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        if !self.term.is_term() {
            return self.read_plain(prompt);
        }
        self.read_interactive(prompt)
    }

    /// Fallback for pipes and redirected input.
    fn read_plain(&mut self, prompt: &str) -> io::Result<String> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        let line = line.trim_end_matches(['\r', '\n']).to_string();
        self.history.push(&line);
        Ok(line)
    }

    fn read_interactive(&mut self, prompt: &str) -> io::Result<String> {
        self.term.write_str(prompt)?;

        // Keep the buffer inside the visible line.
        let width = self.term.size().1 as usize;
        let max_len = width.saturating_sub(measure_text_width(prompt) + 2);

        let mut buffer = String::new();
        // History recall position; `None` means composing fresh input.
        let mut recall: Option<usize> = None;

        loop {
            match self.term.read_key()? {
                Key::Enter => {
                    self.term.write_line("")?;
                    self.history.push(&buffer);
                    return Ok(buffer);
                }
                Key::Backspace => {
                    if buffer.pop().is_some() {
                        self.redraw(prompt, &buffer);
                    }
                }
                Key::ArrowUp => {
                    let next = recall.map_or(0, |i| i + 1);
                    if let Some(entry) = self.history.entry(next) {
                        buffer = entry.to_string();
                        recall = Some(next);
                        self.redraw(prompt, &buffer);
                    }
                }
                Key::ArrowDown => match recall {
                    Some(0) => {
                        // Walking below the newest entry clears the line.
                        recall = None;
                        buffer.clear();
                        self.redraw(prompt, &buffer);
                    }
                    Some(i) => {
                        recall = Some(i - 1);
                        buffer = self
                            .history
                            .entry(i - 1)
                            .map(str::to_string)
                            .unwrap_or_default();
                        self.redraw(prompt, &buffer);
                    }
                    None => {}
                },
                Key::Char(c) if !c.is_control() => {
                    if buffer.chars().count() < max_len {
                        buffer.push(c);
                        let mut utf8 = [0u8; 4];
                        self.term.write_str(c.encode_utf8(&mut utf8))?;
                    }
                }
                // Tab is reserved for completion; other keys are ignored.
                _ => {}
            }
        }
    }

    fn redraw(&self, prompt: &str, buffer: &str) {
        if self.redraw_line(prompt, buffer).is_err() {
            // Plain backspace echo if cursor positioning fails.
            let _ = self.term.write_str("\u{8} \u{8}");
        }
    }

    fn redraw_line(&self, prompt: &str, buffer: &str) -> io::Result<()> {
        self.term.clear_line()?;
        self.term.write_str(prompt)?;
        self.term.write_str(buffer)
    }
}
