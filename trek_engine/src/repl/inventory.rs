//! `repl::inventory` module
//!
//! Handlers for picking items up, dropping them, and listing what the player carries.
//! Pick up and drop ask for an item name and keep asking until they get one that fits.

use anyhow::{Context, Result};
use log::info;

use crate::repl::input::LineSource;
use crate::repl::{Answer, ReplControl, read_answer};
use crate::world::{PickUpOutcome, SelectionError};
use crate::{Session, View, ViewItem};

/// Ask which item to pick up, then pick it up.
///
/// Returns [`ReplControl::Quit`] if input ends before a name is chosen.
///
/// # Errors
/// - if reading input fails
/// - if the player's location can't be found
pub fn pick_up_handler(
    session: &mut Session,
    input: &mut impl LineSource,
    view: &mut View,
    offered: &[String],
) -> Result<ReplControl> {
    view.push(ViewItem::ActionSuccess(format!("You found: {}", offered.join(", "))));
    view.flush();

    loop {
        let name = match read_answer(input, "Which item would you like to pick up? ")? {
            Answer::Line(name) => name,
            Answer::Eof => return Ok(ReplControl::Quit),
            Answer::Canceled => {
                view.push(ViewItem::EngineMessage("Pick up canceled.".to_string()));
                return Ok(ReplControl::Continue);
            },
        };

        match session.pick_up(&name) {
            Ok(PickUpOutcome::Taken {
                name,
                penalty,
                unlocked,
            }) => {
                if unlocked {
                    view.push(ViewItem::ActionSuccess(format!("You unlocked the {name}.")));
                }
                view.push(ViewItem::ActionSuccess(format!("You picked up the {name}.")));
                if let Some(points) = penalty.filter(|&p| p != 0) {
                    view.push(ViewItem::PointsAwarded {
                        amount: -points,
                        reason: format!("removing the {name} from this location"),
                    });
                }
                return Ok(ReplControl::Continue);
            },
            Ok(PickUpOutcome::Locked { name, hint }) => {
                info!("player tried to take locked item '{name}'");
                view.push(ViewItem::ActionFailure(format!("The {name} won't budge.")));
                view.push(ViewItem::Hint(hint));
                return Ok(ReplControl::Continue);
            },
            Err(SelectionError::NotHere(_) | SelectionError::NotCarried(_)) => {
                view.push(ViewItem::ActionFailure("That item is not here.".to_string()));
                view.flush();
            },
            Err(SelectionError::SessionOver) => return Ok(ReplControl::Quit),
            Err(SelectionError::World(err)) => return Err(err).context("while picking up an item"),
        }
    }
}

/// Ask which item to drop, then drop it.
///
/// Returns [`ReplControl::Quit`] if input ends before a name is chosen.
///
/// # Errors
/// - if reading input fails
/// - if the player's location can't be found
pub fn drop_handler(
    session: &mut Session,
    input: &mut impl LineSource,
    view: &mut View,
    offered: &[String],
) -> Result<ReplControl> {
    view.push(ViewItem::ActionSuccess(format!("You have: {}", offered.join(", "))));
    view.flush();

    loop {
        let name = match read_answer(input, "Which item would you like to drop? ")? {
            Answer::Line(name) => name,
            Answer::Eof => return Ok(ReplControl::Quit),
            Answer::Canceled => {
                view.push(ViewItem::EngineMessage("Drop canceled.".to_string()));
                return Ok(ReplControl::Continue);
            },
        };

        match session.drop_item(&name) {
            Ok(dropped) => {
                view.push(ViewItem::ActionSuccess(format!("You dropped the {}.", dropped.name)));
                if let Some(points) = dropped.reward.filter(|&p| p != 0) {
                    view.push(ViewItem::PointsAwarded {
                        amount: points,
                        reason: format!("depositing the {} into this location", dropped.name),
                    });
                }
                return Ok(ReplControl::Continue);
            },
            Err(SelectionError::NotCarried(_) | SelectionError::NotHere(_)) => {
                view.push(ViewItem::ActionFailure("You don't have that item.".to_string()));
                view.flush();
            },
            Err(SelectionError::SessionOver) => return Ok(ReplControl::Quit),
            Err(SelectionError::World(err)) => return Err(err).context("while dropping an item"),
        }
    }
}

/// Show what's in the player's bag.
pub fn inventory_handler(view: &mut View, names: Vec<String>) {
    view.push(ViewItem::Inventory(names));
}
