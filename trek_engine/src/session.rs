//! A single play-through: one world, one player, one configuration.
//!
//! [`Session`] is driven from outside (normally by the REPL). Each turn the
//! caller runs [`Session::begin_turn`], renders what it returns, then hands the
//! player's command to [`Session::submit`]. Pick-up and drop selections are
//! resolved with [`Session::pick_up`] and [`Session::drop_item`].

use log::info;
use serde::{Deserialize, Serialize};
use variantly::Variantly;

use crate::loader::config::GameConfig;
use crate::world::{DropOutcome, PickUpOutcome, SelectionError};
use crate::{Action, LocationId, Outcome, Player, World, WorldError};

/// Where a session stands. Every state other than `Playing` is final.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Variantly)]
pub enum SessionState {
    Playing,
    Won,
    LostTimeout,
    LostQuit,
}

/// What the player finds on arriving at (or staying in) a location.
#[derive(Debug, Clone, PartialEq)]
pub struct Arrival {
    pub position: LocationId,
    pub first_visit: bool,
    /// Long description on the first visit, brief afterward.
    pub description: String,
    /// Points for visiting, only on the first visit and only if non-zero.
    pub visit_points: Option<i64>,
    /// Message of a speed boost applied on this arrival.
    pub boost: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TurnStart {
    Playing { arrival: Arrival, actions: Vec<Action> },
    Over(SessionState),
}

/// End-of-game (or current) standing, for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    pub state: SessionState,
    pub score: i64,
    pub max_score: i64,
    pub moves_taken: f64,
    pub move_budget: u32,
    pub visited: usize,
    pub total_locations: usize,
    pub rank: String,
    pub rank_description: String,
}

impl SessionSummary {
    /// Budget units still unspent, never below zero.
    pub fn moves_remaining(&self) -> f64 {
        (f64::from(self.move_budget) - self.moves_taken).max(0.0)
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    pub world: World,
    pub player: Player,
    pub config: GameConfig,
    state: SessionState,
}

impl Session {
    /// Start a session with the player at the configured start point.
    ///
    /// # Errors
    /// - if the start point holds no location
    /// - if the goal location doesn't exist or no item targets it
    pub fn new(world: World, config: GameConfig) -> Result<Session, WorldError> {
        let (x, y) = (config.start.x, config.start.y);
        if world.resolve(x, y).is_none() {
            return Err(WorldError::NoLocationAt { x, y });
        }
        let goal = config.goal_location;
        if world.location(goal).is_none() {
            return Err(WorldError::UnknownLocation(goal));
        }
        if world.winning_items(goal).is_empty() {
            return Err(WorldError::NoWinningItems(goal));
        }
        info!("new session: start ({x}, {y}), goal location {goal}, budget {}", config.move_budget);
        Ok(Session {
            world,
            player: Player::new(x, y),
            config,
            state: SessionState::Playing,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_not_playing()
    }

    fn transition(&mut self, next: SessionState) {
        if self.state.is_playing() {
            info!("session state {:?} -> {next:?}", self.state);
            self.state = next;
        }
    }

    /// Open a new turn.
    ///
    /// The win check runs first, then the move budget check. If the session is
    /// still going, arrival effects for the current location are applied (first
    /// visit points and speed boost) and the actions for this turn are returned.
    ///
    /// # Errors
    /// - if the player stands on a cell with no location
    pub fn begin_turn(&mut self) -> Result<TurnStart, WorldError> {
        if self.state.is_playing() {
            if self.world.goal_satisfied(self.config.goal_location) {
                self.player.victory = true;
                self.transition(SessionState::Won);
            } else if self.player.over_budget(self.config.move_budget) {
                self.transition(SessionState::LostTimeout);
            }
        }
        if self.is_over() {
            return Ok(TurnStart::Over(self.state));
        }

        let arrival = self.arrive()?;
        let actions = self.world.available_actions(&self.player)?;
        Ok(TurnStart::Playing { arrival, actions })
    }

    fn arrive(&mut self) -> Result<Arrival, WorldError> {
        let location = self.world.player_location_mut(&self.player)?;
        let position = location.position;
        let description = location.arrival_description().to_string();
        let first_visit = location.visit();
        let visit_points = (first_visit && location.visit_points != 0).then_some(location.visit_points);

        if let Some(points) = visit_points {
            self.player.award(points);
            info!("first visit to location {position}: {points} points");
        }

        let mut boost = None;
        if first_visit
            && let Some(speed) = self.config.boost_at(position)
            && self.player.set_movement_multiplier(speed.multiplier)
        {
            info!("movement multiplier set to {} at location {position}", speed.multiplier);
            boost = Some(speed.message.clone());
        }

        Ok(Arrival {
            position,
            first_visit,
            description,
            visit_points,
            boost,
        })
    }

    /// Resolve one command. Does nothing once the session is over.
    ///
    /// # Errors
    /// - if the player stands on a cell with no location
    pub fn submit(&mut self, input: &str) -> Result<Outcome, WorldError> {
        if self.is_over() {
            return Ok(Outcome::SessionOver);
        }
        let outcome = self.world.dispatch(&mut self.player, input)?;
        if outcome.is_quit() {
            self.quit();
        }
        Ok(outcome)
    }

    /// End the session as a non-victory exit.
    pub fn quit(&mut self) {
        self.transition(SessionState::LostQuit);
    }

    /// Pick up the named item at the player's location.
    ///
    /// # Errors
    /// - `SelectionError::SessionOver` once the session has ended
    /// - see [`World::pick_up`]
    pub fn pick_up(&mut self, name: &str) -> Result<PickUpOutcome, SelectionError> {
        if self.is_over() {
            return Err(SelectionError::SessionOver);
        }
        self.world.pick_up(&mut self.player, name)
    }

    /// Drop the named item at the player's location.
    ///
    /// # Errors
    /// - `SelectionError::SessionOver` once the session has ended
    /// - see [`World::drop_item`]
    pub fn drop_item(&mut self, name: &str) -> Result<DropOutcome, SelectionError> {
        if self.is_over() {
            return Err(SelectionError::SessionOver);
        }
        self.world.drop_item(&mut self.player, name)
    }

    pub fn summary(&self) -> SessionSummary {
        let max_score = self.world.max_score();
        #[allow(clippy::cast_precision_loss)]
        let percent = if max_score > 0 {
            (self.player.score as f32 / max_score as f32) * 100.0
        } else {
            0.0
        };
        let (rank, rank_description) = self.config.rank_for(percent);
        SessionSummary {
            state: self.state,
            score: self.player.score,
            max_score,
            moves_taken: self.player.moves_taken,
            move_budget: self.config.move_budget,
            visited: self.world.visited_count(),
            total_locations: self.world.locations.len(),
            rank: rank.to_string(),
            rank_description: rank_description.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::config::{SpeedBoost, StartPoint};
    use crate::{Grid, Item, ItemId, Location};

    fn session(budget: u32) -> Session {
        boosted_session(budget, LocationId(1), 2.0)
    }

    fn boosted_session(budget: u32, boost_at: LocationId, multiplier: f64) -> Session {
        let grid = Grid::from_raw(&[vec![0, 1, 2]]).unwrap();
        let locations = vec![
            Location::new(LocationId(0), "Gate", "The front gate, long view.", 0),
            Location::new(LocationId(1), "Bridge", "A rickety bridge, long view.", 3),
            Location::new(LocationId(2), "Tower", "The clock tower, long view.", 0),
        ];
        let items = vec![Item {
            id: ItemId(0),
            name: "Bell".into(),
            home_position: LocationId(0),
            target_position: LocationId(2),
            target_points: 5,
            lock: None,
        }];
        let mut world = World::new(grid, locations, items);
        world.locations.get_mut(&LocationId(0)).unwrap().items.insert(ItemId(0));
        let config = GameConfig {
            move_budget: budget,
            goal_location: LocationId(2),
            start: StartPoint { x: 0, y: 0 },
            speed_boosts: vec![SpeedBoost {
                location: boost_at,
                multiplier,
                message: "A tailwind picks up.".into(),
            }],
            ..GameConfig::default()
        };
        Session::new(world, config).unwrap()
    }

    fn playing(start: TurnStart) -> (Arrival, Vec<Action>) {
        match start {
            TurnStart::Playing { arrival, actions } => (arrival, actions),
            TurnStart::Over(state) => panic!("session ended early: {state:?}"),
        }
    }

    #[test]
    fn first_arrival_is_long_then_brief() {
        let mut session = session(10);
        let (arrival, _) = playing(session.begin_turn().unwrap());
        assert!(arrival.first_visit);
        assert_eq!(arrival.description, "The front gate, long view.");
        let (arrival, _) = playing(session.begin_turn().unwrap());
        assert!(!arrival.first_visit);
        assert_eq!(arrival.description, "Gate");
    }

    #[test]
    fn visit_points_and_boost_apply_once() {
        let mut session = session(10);
        session.begin_turn().unwrap();
        session.submit("east").unwrap();
        let (arrival, _) = playing(session.begin_turn().unwrap());
        assert_eq!(arrival.visit_points, Some(3));
        assert_eq!(arrival.boost.as_deref(), Some("A tailwind picks up."));
        assert_eq!(session.player.score, 3);
        assert!((session.player.movement_multiplier - 2.0).abs() < f64::EPSILON);

        session.submit("west").unwrap();
        session.begin_turn().unwrap();
        session.submit("east").unwrap();
        let (arrival, _) = playing(session.begin_turn().unwrap());
        assert_eq!(arrival.visit_points, None);
        assert_eq!(arrival.boost, None);
        assert_eq!(session.player.score, 3);
        // one full-cost step, then two half-cost steps
        assert!((session.player.moves_taken - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn quit_is_terminal() {
        let mut session = session(10);
        session.begin_turn().unwrap();
        assert!(session.submit("QUIT").unwrap().is_quit());
        assert_eq!(session.state(), SessionState::LostQuit);
        assert_eq!(session.begin_turn().unwrap(), TurnStart::Over(SessionState::LostQuit));
        assert!(session.submit("east").unwrap().is_session_over());
        assert_eq!(session.pick_up("bell"), Err(SelectionError::SessionOver));
        assert_eq!((session.player.x, session.player.y), (0, 0));
    }

    #[test]
    fn fast_player_may_spend_exactly_the_budget() {
        let mut session = boosted_session(3, LocationId(0), 5.0);
        for step in 0..15 {
            playing(session.begin_turn().unwrap());
            let direction = if step % 2 == 0 { "east" } else { "west" };
            assert!(session.submit(direction).unwrap().is_moved());
        }
        assert!((session.player.moves_taken - 3.0).abs() < f64::EPSILON);
        playing(session.begin_turn().unwrap());

        session.submit("east").unwrap();
        assert_eq!(session.begin_turn().unwrap(), TurnStart::Over(SessionState::LostTimeout));
    }

    #[test]
    fn budget_overrun_times_out() {
        let mut session = session(1);
        session.begin_turn().unwrap();
        session.submit("east").unwrap();
        // exactly at budget is still fine
        assert!(matches!(session.begin_turn().unwrap(), TurnStart::Playing { .. }));
        session.submit("west").unwrap();
        assert_eq!(session.begin_turn().unwrap(), TurnStart::Over(SessionState::LostTimeout));
        assert!(!session.player.victory);
    }

    #[test]
    fn delivering_the_bell_wins() {
        let mut session = session(10);
        session.begin_turn().unwrap();
        session.submit("pick up").unwrap();
        session.pick_up("bell").unwrap();
        for _ in 0..2 {
            session.begin_turn().unwrap();
            session.submit("east").unwrap();
        }
        session.begin_turn().unwrap();
        assert!(session.submit("drop").unwrap().is_choose_drop());
        let dropped = session.drop_item("Bell").unwrap();
        assert_eq!(dropped.reward, Some(5));
        assert_eq!(session.begin_turn().unwrap(), TurnStart::Over(SessionState::Won));
        assert!(session.player.victory);
        let summary = session.summary();
        assert_eq!(summary.score, 8);
        assert_eq!(summary.max_score, 8);
        assert_eq!(summary.rank, "Valedictorian");
    }

    #[test]
    fn new_rejects_bad_start_and_goal() {
        let base = session(10);
        let mut config = base.config.clone();
        config.start = StartPoint { x: 5, y: 0 };
        assert_eq!(
            Session::new(base.world.clone(), config).unwrap_err(),
            WorldError::NoLocationAt { x: 5, y: 0 }
        );

        let mut config = base.config.clone();
        config.goal_location = LocationId(1);
        assert_eq!(
            Session::new(base.world.clone(), config).unwrap_err(),
            WorldError::NoWinningItems(LocationId(1))
        );
    }
}
