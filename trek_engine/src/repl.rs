//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! render each turn of a [`Session`] and feed the player's input back into it.

pub mod input;
pub mod inventory;
pub mod look;
pub mod system;

pub use inventory::*;
pub use look::*;
pub use system::*;

use anyhow::{Context, Result};
use log::info;

use crate::session::TurnStart;
use crate::style::GameStyle;
use crate::{Outcome, Session, View, ViewItem};

use input::{InputEvent, InputManager, LineSource};

/// Control flow signal used by handlers to exit the REPL.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReplControl {
    Continue,
    Quit,
}

/// Run the main read-eval-print loop on the terminal until the session ends.
///
/// # Errors
/// - see [`run_repl_with`]
pub fn run_repl(session: &mut Session) -> Result<()> {
    let mut input = InputManager::new();
    run_repl_with(session, &mut input)
}

/// Run the main read-eval-print loop, reading player input from `input`.
///
/// Each pass opens a turn, shows the surroundings and actions, prompts, and
/// hands the command to the session. Returns once the session reaches a final
/// state and its summary has been shown.
///
/// # Errors
/// - if the player ends up on a cell with no location
/// - if reading input fails in an unrecoverable way
pub fn run_repl_with(session: &mut Session, input: &mut impl LineSource) -> Result<()> {
    let mut view = View::new();
    let mut show_description = true;
    let mut turn = 0;

    loop {
        let actions = match session.begin_turn().context("while starting a turn")? {
            TurnStart::Over(state) => {
                info!("session over after {turn} turns: {state:?}");
                end_summary_handler(session, &mut view);
                view.flush();
                return Ok(());
            },
            TurnStart::Playing { arrival, actions } => {
                turn += 1;
                info!("================> BEGIN TURN {turn} <================");
                if show_description {
                    arrival_handler(&mut view, &arrival);
                }
                actions
            },
        };
        available_actions_handler(&mut view, actions);
        view.flush();
        show_description = true;

        let line = match input.read_line(&prompt(session)) {
            Ok(InputEvent::Line(line)) => line,
            Ok(InputEvent::Eof) => "quit".to_string(),
            Ok(InputEvent::Interrupted) => {
                view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
                view.flush();
                show_description = false;
                continue;
            },
            Err(err) => {
                view.push(ViewItem::Error(format!("Failed to read input ({err}). Try again.")));
                view.flush();
                show_description = false;
                continue;
            },
        };

        let outcome = session.submit(&line).context("while resolving command")?;
        let control = match outcome {
            Outcome::Invalid { input: typed } => {
                info!("invalid command '{typed}'");
                view.push(ViewItem::Error("Invalid option. Please try again.".to_string()));
                ReplControl::Continue
            },
            Outcome::Moved { direction, .. } => {
                view.push(ViewItem::ActionSuccess(format!("You head {direction}.")));
                ReplControl::Continue
            },
            Outcome::ChoosePickUp { offered } => pick_up_handler(session, input, &mut view, &offered)?,
            Outcome::ChooseDrop { offered } => drop_handler(session, input, &mut view, &offered)?,
            Outcome::Look { description } => {
                look_handler(&mut view, description);
                show_description = false;
                ReplControl::Continue
            },
            Outcome::Inventory { names } => {
                inventory_handler(&mut view, names);
                ReplControl::Continue
            },
            Outcome::Score { score } => {
                score_handler(session, &mut view, score);
                ReplControl::Continue
            },
            Outcome::Menu { options } => {
                menu_handler(&mut view, &options);
                show_description = false;
                ReplControl::Continue
            },
            Outcome::Quit => ReplControl::Quit,
            Outcome::SessionOver => ReplControl::Continue,
        };
        if control == ReplControl::Quit {
            quit_handler(session);
        }
        view.flush();
    }
}

/// Status line shown before each command.
fn prompt(session: &Session) -> String {
    format!(
        "[Moves: {}/{}|Score: {}]>> ",
        format_moves(session.player.moves_taken),
        session.config.move_budget,
        session.player.score
    )
    .prompt_style()
    .to_string()
}

/// Whole move counts print without decimals; fractional ones with one place.
fn format_moves(moves: f64) -> String {
    if moves.fract().abs() < f64::EPSILON {
        format!("{moves:.0}")
    } else {
        format!("{moves:.1}")
    }
}

/// Read a plain answer (an item name) at a selection prompt.
///
/// # Errors
/// - if reading input fails
pub(crate) fn read_answer(input: &mut impl LineSource, prompt: &str) -> Result<Answer> {
    let event = input.read_line(prompt).context("while reading selection")?;
    Ok(match event {
        InputEvent::Line(line) => Answer::Line(line),
        InputEvent::Eof => Answer::Eof,
        InputEvent::Interrupted => Answer::Canceled,
    })
}

/// What came back from a selection prompt.
pub(crate) enum Answer {
    Line(String),
    Eof,
    Canceled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_format() {
        assert_eq!(format_moves(3.0), "3");
        assert_eq!(format_moves(2.5), "2.5");
        assert_eq!(format_moves(0.0), "0");
    }
}
