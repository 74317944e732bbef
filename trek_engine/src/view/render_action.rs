//! module Render Action
//!
//! This module contains the individual `ViewItem` renderers for direct responses to action
//! commands -- successes, failures, hints, points and errors.

use colored::Colorize as _;
use textwrap::fill;

use crate::{
    View, ViewItem,
    style::{GameStyle as _, normal_block},
    view::icons::{ICON_ERROR, ICON_FAILURE, ICON_HINT, ICON_NEGATIVE, ICON_POSITIVE, ICON_SUCCESS},
};

pub(super) fn action_success(view: &View) {
    let messages: Vec<_> = view
        .items
        .iter()
        .filter_map(|i| match i {
            ViewItem::ActionSuccess(msg) => Some(msg),
            _ => None,
        })
        .collect();
    for msg in messages {
        println!(
            "{}",
            fill(
                format!("{} {}", ICON_SUCCESS.bright_green(), msg).as_str(),
                normal_block()
            )
        );
    }
}

pub(super) fn action_failure(view: &View) {
    let messages: Vec<_> = view
        .items
        .iter()
        .filter_map(|i| match i {
            ViewItem::ActionFailure(msg) => Some(msg),
            _ => None,
        })
        .collect();
    for msg in messages {
        println!(
            "{}",
            fill(
                format!("{} {}", ICON_FAILURE.bright_red(), msg).as_str(),
                normal_block()
            )
        );
    }
}

pub(super) fn hints(view: &View) {
    for item in &view.items {
        if let ViewItem::Hint(hint) = item {
            println!("{}", fill(format!("{ICON_HINT} {hint}").as_str(), normal_block()).hint_style());
        }
    }
}

pub(super) fn points_awarded(view: &View) {
    for item in &view.items {
        if let ViewItem::PointsAwarded { amount, reason } = item {
            let line = if *amount >= 0 {
                format!("{} You got {amount} points for {reason}! :)", ICON_POSITIVE.bright_green())
            } else {
                format!(
                    "{} You lost {} points for {reason}. :(",
                    ICON_NEGATIVE.bright_red(),
                    amount.unsigned_abs()
                )
            };
            println!("{}", fill(line.as_str(), normal_block()));
        }
    }
}

pub(super) fn errors(view: &View) {
    let messages: Vec<_> = view
        .items
        .iter()
        .filter_map(|i| match i {
            ViewItem::Error(msg) => Some(msg),
            _ => None,
        })
        .collect();
    for msg in messages {
        println!(
            "{}",
            fill(format!("{ICON_ERROR:<4}{msg}").as_str(), normal_block()).error_style()
        );
    }
}
