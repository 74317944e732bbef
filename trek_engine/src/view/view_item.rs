//! ViewItem module
//!
//! A `ViewItem` is an enum variant sent to the `View`, which aggregates them, styles them,
//! organizes them, and displays them before moving to the next prompt. Variants contain different
//! payloads, depending the type of information that needs to be displayed.

use variantly::Variantly;

use crate::Action;
use crate::session::SessionSummary;
use crate::view::Section;

/// `ViewItems` are each of the various types of information / messages that may be displayed to the player.
#[derive(Debug, Clone, PartialEq, Variantly)]
pub enum ViewItem {
    ActionFailure(String),
    ActionSuccess(String),
    AvailableActions(Vec<Action>),
    EndSummary(SessionSummary),
    EngineMessage(String),
    Error(String),
    Hint(String),
    Inventory(Vec<String>),
    LocationDescription {
        description: String,
        first_visit: bool,
    },
    MenuOptions(Vec<String>),
    /// Positive for rewards, negative for penalties.
    PointsAwarded {
        amount: i64,
        reason: String,
    },
    Score {
        score: i64,
        moves_taken: f64,
        budget: u32,
    },
    SpeedBoost(String),
    VisitPoints(i64),
}

impl ViewItem {
    /// Return the section of the display this item should appear in.
    pub fn section(&self) -> Section {
        match self {
            ViewItem::LocationDescription { .. }
            | ViewItem::VisitPoints(_)
            | ViewItem::SpeedBoost(_)
            | ViewItem::AvailableActions(_) => Section::Environment,
            ViewItem::ActionSuccess(_)
            | ViewItem::ActionFailure(_)
            | ViewItem::Hint(_)
            | ViewItem::PointsAwarded { .. }
            | ViewItem::Inventory(_)
            | ViewItem::Score { .. }
            | ViewItem::Error(_) => Section::DirectResult,
            ViewItem::MenuOptions(_) | ViewItem::EngineMessage(_) | ViewItem::EndSummary(_) => Section::System,
        }
    }
}
