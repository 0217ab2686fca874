//! Target selection for digging, delivering, and placing equipment.

use std::collections::{BTreeMap, BTreeSet};

use super::nearest::nearest;
use crate::board::{Action, Position};

/// Digs the nearest known ore cell, home-biased. `None` when no ore is known.
pub fn dig_nearest_ore(from: Position, ores: &BTreeMap<Position, u32>) -> Option<Action> {
    nearest(from, ores.keys().copied(), true).map(Action::Dig)
}

/// Carries ore straight back to the home edge along the current row.
pub fn deliver_ore(from: Position) -> Action {
    Action::Move(from.home())
}

/// Digs the nearest unused placement spot, home-biased, or the fallback
/// deposit when every spot is taken.
pub fn place_equipment(from: Position, spots: &BTreeSet<Position>, fallback: Position) -> Action {
    let spot = nearest(from, spots.iter().copied(), true).unwrap_or(fallback);
    Action::Dig(spot)
}
