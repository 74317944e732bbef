//! Terminal input handling for the Trek REPL.
//!
//! Wraps rustyline configuration and completion tailored to the game's
//! command set, with a plain stdin fallback when no terminal is attached.

use std::fs;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::sync::LazyLock;

use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::command::META_COMMANDS;
use crate::{Action, Direction};

/// Outcome of reading a line from the REPL input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

/// Anything the REPL can read player input from.
pub trait LineSource {
    /// Show `prompt` and read one line.
    ///
    /// # Errors
    /// - if the underlying input fails
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent>;
}

static COMMAND_TERMS: LazyLock<Vec<String>> = LazyLock::new(build_command_terms);

type ReplEditor = rustyline::Editor<TrekHelper, DefaultHistory>;

#[derive(Default)]
struct TrekHelper;

impl Helper for TrekHelper {}

impl Completer for TrekHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, prefix) = current_prefix(line, pos);
        if prefix.is_empty() {
            return Ok((start, Vec::new()));
        }
        let lower = prefix.to_lowercase();
        let pairs = COMMAND_TERMS
            .iter()
            .filter(|term| term.starts_with(&lower))
            .map(|term| Pair {
                display: term.clone(),
                replacement: term.clone(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for TrekHelper {
    type Hint = String;
}

impl Highlighter for TrekHelper {}

impl Validator for TrekHelper {}

fn current_prefix(line: &str, pos: usize) -> (usize, String) {
    let slice = &line[..pos];
    let trimmed = slice.trim_start_matches(char::is_whitespace);
    let start = pos - trimmed.len();
    (start, trimmed.to_string())
}

/// Every full command word the parser accepts, lowercased.
fn build_command_terms() -> Vec<String> {
    let mut terms: Vec<String> = Direction::ALL
        .iter()
        .map(|direction| direction.to_string())
        .chain([Action::PickUp, Action::Drop].iter().map(|action| action.label().to_lowercase()))
        .chain(META_COMMANDS.iter().map(|command| (*command).to_string()))
        .chain(["[menu]".to_string()])
        .collect();
    terms.sort_unstable();
    terms.dedup();
    terms
}

/// Where the game reads commands from when run from the binary.
///
/// A terminal gets line editing, completion and persistent history. Anything
/// else (a pipe, a redirected file) is read line by line.
pub enum InputManager {
    Terminal(Box<TerminalInput>),
    Piped(ReaderInput<io::StdinLock<'static>>),
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        if !io::stdin().is_terminal() {
            info!("stdin is not a terminal, reading commands line by line");
            return InputManager::Piped(ReaderInput::new(io::stdin().lock()));
        }
        match TerminalInput::open(history_file()) {
            Ok(terminal) => InputManager::Terminal(Box::new(terminal)),
            Err(err) => {
                warn!("line editor unavailable ({err}), reading commands line by line");
                InputManager::Piped(ReaderInput::new(io::stdin().lock()))
            },
        }
    }
}

impl LineSource for InputManager {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self {
            InputManager::Terminal(terminal) => terminal.read_line(prompt),
            InputManager::Piped(reader) => reader.read_line(prompt),
        }
    }
}

/// Rustyline editor with command completion and a history file.
pub struct TerminalInput {
    editor: ReplEditor,
    history: Option<PathBuf>,
}

impl TerminalInput {
    fn open(history: Option<PathBuf>) -> io::Result<Self> {
        let mut editor = ReplEditor::new().map_err(readline_to_io)?;
        editor.set_helper(Some(TrekHelper));
        if let Some(path) = &history {
            match editor.load_history(path) {
                Ok(()) => info!("loaded command history from {}", path.display()),
                Err(ReadlineError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {},
                Err(err) => warn!("couldn't load command history from {}: {err}", path.display()),
            }
        }
        Ok(Self { editor, history })
    }

    /// Add a command to the history and write the history file.
    fn remember(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }
        if let Err(err) = self.editor.add_history_entry(line) {
            warn!("couldn't add '{line}' to command history: {err}");
        }
        let Some(path) = &self.history else {
            return;
        };
        if let Some(dir) = path.parent()
            && let Err(err) = fs::create_dir_all(dir)
        {
            warn!("couldn't create {}: {err}", dir.display());
            return;
        }
        if let Err(err) = self.editor.save_history(path) {
            warn!("couldn't save command history to {}: {err}", path.display());
        }
    }
}

impl LineSource for TerminalInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                self.remember(&line);
                Ok(InputEvent::Line(line))
            },
            Err(ReadlineError::Interrupted) => Ok(InputEvent::Interrupted),
            Err(ReadlineError::Eof) => Ok(InputEvent::Eof),
            Err(err) => Err(readline_to_io(err)),
        }
    }
}

/// Reads commands from any buffered reader, echoing the prompt to stdout.
pub struct ReaderInput<R> {
    reader: R,
    buffer: String,
}

impl<R: BufRead> ReaderInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::new(),
        }
    }
}

impl<R: BufRead> LineSource for ReaderInput<R> {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        print!("{prompt}");
        io::stdout().flush()?;
        self.buffer.clear();
        if self.reader.read_line(&mut self.buffer)? == 0 {
            return Ok(InputEvent::Eof);
        }
        Ok(InputEvent::Line(self.buffer.trim_end_matches(['\r', '\n']).to_string()))
    }
}

fn readline_to_io(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(err) => err,
        other => io::Error::other(other),
    }
}

/// `<data dir>/trek/history.txt`, if the platform has a data directory.
fn history_file() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| base.join("trek").join("history.txt"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_input_strips_line_endings_and_reports_eof() {
        let mut input = ReaderInput::new(io::Cursor::new("north\r\npick up\n\nlast"));
        assert_eq!(input.read_line("> ").unwrap(), InputEvent::Line("north".into()));
        assert_eq!(input.read_line("> ").unwrap(), InputEvent::Line("pick up".into()));
        assert_eq!(input.read_line("> ").unwrap(), InputEvent::Line(String::new()));
        assert_eq!(input.read_line("> ").unwrap(), InputEvent::Line("last".into()));
        assert_eq!(input.read_line("> ").unwrap(), InputEvent::Eof);
    }

    #[test]
    fn readline_io_errors_keep_their_kind() {
        let err = readline_to_io(ReadlineError::Io(io::Error::from(io::ErrorKind::BrokenPipe)));
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn history_lives_under_trek() {
        if let Some(path) = history_file() {
            assert!(path.ends_with("trek/history.txt"));
        }
    }

    #[test]
    fn command_terms_cover_actions_and_menu() {
        for term in ["north", "west", "pick up", "drop", "look", "inventory", "score", "quit", "[menu]"] {
            assert!(COMMAND_TERMS.iter().any(|t| t == term), "{term}");
        }
    }

    #[test]
    fn prefix_skips_leading_space() {
        assert_eq!(current_prefix("  no", 4), (2, "no".to_string()));
    }
}
