//! Operator interaction and diagnostics.
//!
//! Adapters never read the terminal or pick a log macro themselves. They get
//! a [`Confirm`] for yes/no questions and a [`Diagnostics`] sink for per-clip
//! messages, so both can be swapped out in tests.

use std::io::{BufRead, Write};

use tracing::Level;

/// Answers a yes/no question.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Receives per-clip diagnostics.
pub trait Diagnostics {
    fn emit(&mut self, level: Level, message: &str);

    fn debug(&mut self, message: &str) {
        self.emit(Level::DEBUG, message);
    }

    fn info(&mut self, message: &str) {
        self.emit(Level::INFO, message);
    }

    fn warn(&mut self, message: &str) {
        self.emit(Level::WARN, message);
    }
}

/// Interpret a free-text answer: `y`/`Y` first means yes, anything else
/// (including an empty line) means no.
pub fn parse_yes_no(answer: &str) -> bool {
    matches!(answer.trim().chars().next(), Some('y' | 'Y'))
}

/// Prompts on a writer and reads the answer from a line reader.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl TerminalPrompt<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Prompt on stdout, read answers from stdin.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for TerminalPrompt<R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        if write!(self.output, "{} ", prompt)
            .and_then(|_| self.output.flush())
            .is_err()
        {
            return false;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => parse_yes_no(&answer),
        }
    }
}

/// Accepts every prompt without asking.
#[derive(Debug, Default, Clone, Copy)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, prompt: &str) -> bool {
        tracing::debug!("{} (assumed yes)", prompt);
        true
    }
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn emit(&mut self, level: Level, message: &str) {
        if level == Level::ERROR {
            tracing::error!("{}", message);
        } else if level == Level::WARN {
            tracing::warn!("{}", message);
        } else if level == Level::INFO {
            tracing::info!("{}", message);
        } else if level == Level::DEBUG {
            tracing::debug!("{}", message);
        } else {
            tracing::trace!("{}", message);
        }
    }
}

/// Keeps every diagnostic in memory.
#[derive(Debug, Default, Clone)]
pub struct RecordedDiagnostics {
    pub entries: Vec<(Level, String)>,
}

impl RecordedDiagnostics {
    /// Whether any recorded message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|(_, message)| message.contains(needle))
    }
}

impl Diagnostics for RecordedDiagnostics {
    fn emit(&mut self, level: Level, message: &str) {
        self.entries.push((level, message.to_string()));
    }
}

/// Replays scripted answers, then answers no. Records every prompt.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConfirm {
    answers: std::collections::VecDeque<bool>,
    pub prompts: Vec<String>,
}

impl ScriptedConfirm {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            prompts: Vec::new(),
        }
    }
}

impl Confirm for ScriptedConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}
