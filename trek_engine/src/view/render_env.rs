//! # Render Env(ironment) Module
//!
//! This module contains the individual `ViewItem` renderers for the "environment" section
//! of an output frame.

use textwrap::fill;

use crate::{
    View, ViewItem,
    style::{GameStyle as _, indented_block, normal_block},
    view::icons::{ICON_BOOST, ICON_POSITIVE},
};

/// Shows the location description; long on the first visit, brief afterward.
pub(super) fn location_description(view: &View) {
    if let Some(ViewItem::LocationDescription {
        description,
        first_visit,
    }) = view.items.iter().find(|i| i.is_location_description())
    {
        for paragraph in description.lines() {
            println!("{}", fill(paragraph, normal_block()).description_style());
        }
        if *first_visit {
            println!();
        }
    }
}

pub(super) fn visit_points(view: &View) {
    for item in &view.items {
        if let ViewItem::VisitPoints(points) = item {
            println!("{ICON_POSITIVE} You got {points} points for visiting this location!");
        }
    }
}

pub(super) fn speed_boost(view: &View) {
    for item in &view.items {
        if let ViewItem::SpeedBoost(message) = item {
            println!(
                "{}",
                fill(format!("{ICON_BOOST} {message}").as_str(), normal_block()).boost_style()
            );
        }
    }
}

/// Lists the menu entry followed by the actions available this turn.
pub(super) fn available_actions(view: &View) {
    if let Some(ViewItem::AvailableActions(actions)) = view.items.iter().find(|i| i.is_available_actions()) {
        println!("\n{}", "What to do?".subheading_style());
        println!("{}", fill("[menu]", indented_block()));
        for action in actions {
            println!("{}", fill(action.label(), indented_block()).action_style());
        }
    }
}
