//! module Render System
//!
//! This module contains the `ViewItem` renderers for player status and
//! system/engine messages: inventory, score, the menu, and the summary shown
//! when a session ends.

use colored::Colorize as _;
use textwrap::{fill, termwidth};

use crate::{
    SessionState, View, ViewItem,
    session::SessionSummary,
    style::{GameStyle as _, indented_block, normal_block},
    view::icons::{ICON_CELEBRATE, ICON_ENGINE},
};

const WON_TEXT: &str = "Every one of your belongings is back where it belongs. With your kit complete you walk \
     into the Exam Centre, find your seat and turn over the paper. Whatever happens next, you made it here \
     ready. Good luck, and may your code compile on the first try.";
const TIMEOUT_TEXT: &str = "You glance at your watch mid-stride and your stomach drops: the exam has already \
     started. The doors are closed and the invigilator is not letting anyone else in. Not today, but the \
     lessons of this morning will stick.";
const QUIT_TEXT: &str = "You decide the hunt across campus is too much for one morning and head home, leaving \
     your things where they lie. Rest up. There's always another sitting.";

pub(super) fn inventory(view: &View) {
    for item in &view.items {
        if let ViewItem::Inventory(names) = item {
            if names.is_empty() {
                println!("Your bag is empty. *crickets*");
            } else {
                let listed: Vec<String> = names.iter().map(|name| name.item_style().to_string()).collect();
                println!("This is what is in your bag: {}", listed.join(", "));
            }
        }
    }
}

pub(super) fn score(view: &View) {
    for item in &view.items {
        if let ViewItem::Score {
            score,
            moves_taken,
            budget,
        } = item
        {
            println!("Your score so far is: {}", score.to_string().bold());
            println!("Moves used: {moves_taken:.1} of {budget}");
        }
    }
}

/// Lists the meta-commands, always accepted whatever the surroundings.
pub(super) fn menu_options(view: &View) {
    if let Some(ViewItem::MenuOptions(options)) = view.items.iter().find(|i| i.is_menu_options()) {
        println!("{}", "Menu Options:".subheading_style());
        for option in options {
            println!("{}", fill(option, indented_block()).action_style());
        }
    }
}

/// Used for generic messages from the engine -- rare.
pub(super) fn engine_message(view: &View) {
    for item in &view.items {
        if let ViewItem::EngineMessage(msg) = item {
            println!("{}", fill(format!("{ICON_ENGINE:<4}{msg}").as_str(), normal_block()));
        }
    }
}

/// Displays the closing text and standing when the session ends.
pub(super) fn end_summary(view: &View) {
    let Some(ViewItem::EndSummary(summary)) = view.items.iter().find(|i| i.is_end_summary()) else {
        return;
    };
    let width = termwidth();
    let (title, text) = match summary.state {
        SessionState::Won => (format!("{ICON_CELEBRATE} Congratulations! {ICON_CELEBRATE}"), WON_TEXT),
        SessionState::LostTimeout => ("Out of Time".to_string(), TIMEOUT_TEXT),
        SessionState::LostQuit | SessionState::Playing => ("Game Over".to_string(), QUIT_TEXT),
    };
    println!("{:^width$}\n", title.as_str().black().on_yellow());
    println!("{}\n", fill(text, normal_block()).description_style());
    if summary.state.is_won() {
        println!(
            "You had {:.1} moves remaining. You completed the game with {} points.\n",
            summary.moves_remaining(),
            summary.score
        );
    }
    print_standing(summary);
}

#[allow(clippy::cast_precision_loss)]
fn print_standing(summary: &SessionSummary) {
    let score_pct = if summary.max_score > 0 {
        100.0 * (summary.score as f32 / summary.max_score as f32)
    } else {
        0.0
    };
    let visit_pct = if summary.total_locations > 0 {
        100.0 * (summary.visited as f32 / summary.total_locations as f32)
    } else {
        0.0
    };
    println!("{:10} {}", "Rank:", summary.rank.bright_cyan());
    println!("{:10} {}", "Notes:", summary.rank_description.description_style());
    println!("{:10} {}/{} ({:.1}%)", "Score:", summary.score, summary.max_score, score_pct);
    println!(
        "{:10} {}/{} ({:.1}%)",
        "Visited:", summary.visited, summary.total_locations, visit_pct
    );
    println!("{:10} {:.1}/{}", "Moves:", summary.moves_taken, summary.move_budget);
}
