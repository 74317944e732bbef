use std::path::{Path, PathBuf};

use te::command::{Command, parse_command};
use te::loader::load_session_from;
use te::session::TurnStart;
use te::world::PickUpOutcome;
use te::*;
use trek_engine as te;

fn demo_data() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Open a turn (which must still be in play) and submit one command.
fn turn(session: &mut Session, input: &str) -> Outcome {
    let start = session.begin_turn().unwrap();
    assert!(matches!(start, TurnStart::Playing { .. }), "session ended before '{input}'");
    session.submit(input).unwrap()
}

#[test]
fn test_lib_version() {
    assert!(!te::TREK_VERSION.is_empty());
}

#[test]
fn test_command_parse() {
    assert_eq!(parse_command("look"), Command::Look);
    assert_eq!(parse_command("Pick Up"), Command::PickUp);
}

#[test]
fn demo_world_loads_and_validates() {
    let session = load_session_from(&demo_data()).unwrap();
    assert_eq!(session.world.locations.len(), 10);
    assert_eq!(session.world.items.len(), 5);
    assert_eq!(session.config.move_budget, 14);
    assert_eq!(session.config.goal_location, LocationId(9));
    assert_eq!(session.world.winning_items(LocationId(9)).len(), 3);
    assert_eq!(session.world.max_score(), 63);
    assert_eq!(session.state(), SessionState::Playing);
}

#[test]
fn demo_opening_actions() {
    let mut session = load_session_from(&demo_data()).unwrap();
    let TurnStart::Playing { arrival, actions } = session.begin_turn().unwrap() else {
        panic!("demo session should start in play");
    };
    assert!(arrival.first_visit);
    assert!(arrival.description.starts_with("Your dorm room, still dark"));
    let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
    assert_eq!(labels, vec!["South", "East", "Pick up"]);
}

#[test]
fn demo_walkthrough_wins_with_full_marks() {
    let mut session = load_session_from(&demo_data()).unwrap();

    assert!(turn(&mut session, "pick up").is_choose_pick_up());
    session.pick_up("library book").unwrap();
    turn(&mut session, "south"); // bike shed
    turn(&mut session, "east");
    turn(&mut session, "north");
    turn(&mut session, "east"); // dining hall
    turn(&mut session, "take");
    session.pick_up("Lucky Pen").unwrap();
    turn(&mut session, "south"); // library
    turn(&mut session, "drop");
    assert_eq!(session.drop_item("Library Book").unwrap().reward, Some(5));
    turn(&mut session, "pick up");
    session.pick_up("printer card").unwrap();
    turn(&mut session, "east"); // computer lab
    turn(&mut session, "pick up");
    let aid = session.pick_up("aid sheet").unwrap();
    assert!(matches!(aid, PickUpOutcome::Taken { unlocked: true, .. }));
    turn(&mut session, "west");
    turn(&mut session, "south");
    turn(&mut session, "west"); // coffee shop
    turn(&mut session, "pick up");
    session.pick_up("t-card").unwrap();
    turn(&mut session, "e");
    turn(&mut session, "e"); // exam centre
    for name in ["lucky pen", "t-card", "aid sheet"] {
        turn(&mut session, "drop");
        session.drop_item(name).unwrap();
    }

    assert_eq!(session.begin_turn().unwrap(), TurnStart::Over(SessionState::Won));
    let summary = session.summary();
    assert_eq!(summary.score, 63);
    assert_eq!(summary.max_score, 63);
    assert!((summary.moves_taken - 6.0).abs() < f64::EPSILON);
    assert_eq!(summary.rank, "Valedictorian");
    assert_eq!(summary.visited, 10);
}

#[test]
fn demo_aid_sheet_is_locked_without_printer_card() {
    let mut session = load_session_from(&demo_data()).unwrap();
    for step in ["east", "east", "south", "east"] {
        turn(&mut session, step);
    }
    assert!(turn(&mut session, "pick up").is_choose_pick_up());
    let outcome = session.pick_up("Aid Sheet").unwrap();
    assert!(matches!(outcome, PickUpOutcome::Locked { .. }));
    assert!(session.player.inventory.is_empty());
}
