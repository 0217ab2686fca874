//! Engine state management.
//!
//! Owns the game state, the configuration, and the random source between
//! turns. Each turn folds the referee's report into the state, decides one
//! action per ally, and writes the actions out.

use std::io::{self, Write};

use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::{Action, GameState, TurnReport};
use crate::config::AgentConfig;
use crate::controller::decide_turn;
use crate::protocol::write_actions;

/// Holds the mutable state of the agent between turns.
pub struct Engine {
    pub config: AgentConfig,
    pub state: GameState,
    rng: SmallRng,
}

impl Engine {
    /// Creates an engine for a grid of the given size. The random source is
    /// seeded from `config.seed`, or from entropy when it is unset.
    pub fn new(config: AgentConfig, width: i32, height: i32) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        info!(
            "engine ready: {}x{} grid, team size {}, seed {:?}",
            width, height, config.team_size, config.seed
        );
        Engine {
            config,
            state: GameState::new(width, height),
            rng,
        }
    }

    /// Folds the turn into the state and returns one action per ally slot.
    pub fn play_turn(&mut self, report: &TurnReport) -> Vec<Action> {
        self.state.apply_turn(report, &self.config);
        decide_turn(&mut self.state, &self.config, &mut self.rng)
    }

    /// Plays a turn and writes the resulting command lines.
    pub fn handle_turn<W: Write>(&mut self, report: &TurnReport, out: &mut W) -> io::Result<()> {
        let actions = self.play_turn(report);
        write_actions(out, &actions)
    }
}
