//! `repl::look` module
//!
//! Handlers that describe the player's surroundings.

use log::info;

use crate::session::Arrival;
use crate::{Action, View, ViewItem};

/// Queue the description and any first-visit effects of the current location.
pub fn arrival_handler(view: &mut View, arrival: &Arrival) {
    view.push(ViewItem::LocationDescription {
        description: arrival.description.clone(),
        first_visit: arrival.first_visit,
    });
    if let Some(points) = arrival.visit_points {
        view.push(ViewItem::VisitPoints(points));
    }
    if let Some(message) = &arrival.boost {
        view.push(ViewItem::SpeedBoost(message.clone()));
    }
}

pub fn available_actions_handler(view: &mut View, actions: Vec<Action>) {
    view.push(ViewItem::AvailableActions(actions));
}

/// Show the full description again. Doesn't count as a visit.
pub fn look_handler(view: &mut View, description: String) {
    info!("player looked around");
    view.push(ViewItem::LocationDescription {
        description,
        first_visit: false,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LocationId;

    #[test]
    fn arrival_queues_effects_only_when_present() {
        let mut view = View::new();
        let arrival = Arrival {
            position: LocationId(3),
            first_visit: true,
            description: "A bike shed.".into(),
            visit_points: Some(4),
            boost: Some("You borrow a bike.".into()),
        };
        arrival_handler(&mut view, &arrival);
        assert_eq!(view.items.len(), 3);
        assert!(view.items[1].is_visit_points());
        assert!(view.items[2].is_speed_boost());

        let mut view = View::new();
        let arrival = Arrival {
            first_visit: false,
            visit_points: None,
            boost: None,
            ..arrival
        };
        arrival_handler(&mut view, &arrival);
        assert_eq!(view.items.len(), 1);
    }
}
