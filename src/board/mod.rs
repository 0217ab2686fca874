//! Board representation and game-state types.
//!
//! Contains grid positions, robot actions, carried items, the two robot
//! rosters, and the overall game state folded from each turn's observations.

pub mod action;
pub mod bot;
pub mod item;
pub mod position;
pub mod state;

pub use action::Action;
pub use bot::{Bot, Enemy};
pub use item::Item;
pub use position::{distance, Position};
pub use state::{CellReport, EntityKind, EntityReport, GameState, TurnReport};
