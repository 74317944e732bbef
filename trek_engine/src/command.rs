//! Command module
//!
//! Describes possible commands used during gameplay.
use variantly::Variantly;

use crate::{Action, Direction};

/// Commands that are always accepted, whatever the player's surroundings.
pub const META_COMMANDS: [&str; 4] = ["look", "inventory", "score", "quit"];

/// Commands that can be executed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variantly)]
pub enum Command {
    Go(Direction),
    PickUp,
    Drop,
    Look,
    Inventory,
    Score,
    Menu,
    Quit,
    Unknown,
}

impl Command {
    /// The turn action this command needs to be available, if any.
    pub fn required_action(self) -> Option<Action> {
        match self {
            Command::Go(direction) => Some(Action::Go(direction)),
            Command::PickUp => Some(Action::PickUp),
            Command::Drop => Some(Action::Drop),
            _ => None,
        }
    }
}

/// Parses an input string and returns a corresponding `Command` if recognized.
/// Input is case-insensitive and surrounding whitespace is ignored.
pub fn parse_command(input: &str) -> Command {
    let lowered = input.trim().to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    match words.as_slice() {
        ["north" | "n"] | ["go", "north"] => Command::Go(Direction::North),
        ["south" | "s"] | ["go", "south"] => Command::Go(Direction::South),
        ["east" | "e"] | ["go", "east"] => Command::Go(Direction::East),
        ["west" | "w"] | ["go", "west"] => Command::Go(Direction::West),
        ["pick", "up"] | ["pickup" | "take"] => Command::PickUp,
        ["drop"] => Command::Drop,
        ["look"] => Command::Look,
        ["inventory" | "inv"] => Command::Inventory,
        ["score"] => Command::Score,
        ["[menu]" | "menu"] => Command::Menu,
        ["quit" | "exit"] => Command::Quit,
        _ => Command::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_action_labels_in_any_case() {
        assert_eq!(parse_command("North"), Command::Go(Direction::North));
        assert_eq!(parse_command("  WEST \n"), Command::Go(Direction::West));
        assert_eq!(parse_command("Pick up"), Command::PickUp);
        assert_eq!(parse_command("pick   up"), Command::PickUp);
        assert_eq!(parse_command("DROP"), Command::Drop);
    }

    #[test]
    fn parses_meta_commands_and_aliases() {
        assert_eq!(parse_command("look"), Command::Look);
        assert_eq!(parse_command("inv"), Command::Inventory);
        assert_eq!(parse_command("Score"), Command::Score);
        assert_eq!(parse_command("[menu]"), Command::Menu);
        assert_eq!(parse_command("exit"), Command::Quit);
        for meta in META_COMMANDS {
            assert!(parse_command(meta).is_not_unknown(), "{meta}");
        }
    }

    #[test]
    fn unknown_input() {
        assert!(parse_command("dance").is_unknown());
        assert!(parse_command("").is_unknown());
        assert!(parse_command("north east").is_unknown());
    }

    #[test]
    fn required_actions() {
        assert_eq!(
            Command::Go(Direction::East).required_action(),
            Some(Action::Go(Direction::East))
        );
        assert_eq!(Command::Drop.required_action(), Some(Action::Drop));
        assert_eq!(Command::Look.required_action(), None);
    }
}
