//! `repl::system` module
//!
//! Contains repl loop handlers for commands about the game itself rather than the world:
//! score, the menu, quitting, and the closing summary.

use log::info;

use crate::{Session, View, ViewItem};

/// End the session at the player's request.
pub fn quit_handler(session: &mut Session) {
    session.quit();
    info!(
        "player quit with a score of {} after {} steps",
        session.player.score, session.player.steps
    );
    info!("ending inventory:");
    session
        .player
        .inventory
        .ids()
        .filter_map(|id| session.world.item(id))
        .for_each(|item| info!("- {} ({})", item.name, item.id));
}

pub fn score_handler(session: &Session, view: &mut View, score: i64) {
    view.push(ViewItem::Score {
        score,
        moves_taken: session.player.moves_taken,
        budget: session.config.move_budget,
    });
}

pub fn menu_handler(view: &mut View, options: &[&str]) {
    view.push(ViewItem::MenuOptions(
        options.iter().map(|option| (*option).to_string()).collect(),
    ));
}

/// Queue the end-of-game summary for whatever state the session finished in.
pub fn end_summary_handler(session: &Session, view: &mut View) {
    let summary = session.summary();
    info!(
        "final standing: {:?}, score {}/{}, rank {}",
        summary.state, summary.score, summary.max_score, summary.rank
    );
    view.push(ViewItem::EndSummary(summary));
}
