//! Exploratory movement when no ore is known.
//!
//! Robots deep enough in the field dig blindly around themselves. Robots
//! near home, or surrounded by holes, head for a bounded box of the
//! interior that is biased toward mid-board.

use std::collections::HashSet;
use std::ops::Range;

use rand::Rng;

use super::nearest::nearest;
use crate::board::{Action, Position};

/// Columns from here on count as the interior of the field.
const INTERIOR_MIN_X: i32 = 5;
/// Rows where blind digging is allowed.
const BAND_MIN_Y: i32 = 1;
const BAND_MAX_Y: i32 = 13;
/// Half-width of the search box around the robot.
const BOX_RADIUS: i32 = 4;
/// The box always extends at least up to this (exclusive) bound.
const BOX_MIN_END: i32 = 8;
/// Exclusive upper bounds of the box.
const BOX_MAX_X: i32 = 28;
const BOX_MAX_Y: i32 = 13;
/// More free cells than this and the robot picks one at random.
const CROWDED_FREE_CELLS: usize = 4;

/// Chooses an exploratory action, or `None` when the search box is empty
/// (only possible on grids far larger than the standard one).
pub fn explore(from: Position, holes: &HashSet<Position>, rng: &mut impl Rng) -> Option<Action> {
    if in_dig_band(from) {
        let fresh: Vec<Position> = from
            .adjacency()
            .into_iter()
            .filter(|c| !holes.contains(c))
            .collect();
        if !fresh.is_empty() {
            let idx = rng.gen_range(0..fresh.len());
            return Some(Action::Dig(fresh[idx]));
        }
    }

    let (xs, ys) = search_box(from);
    let cells: Vec<Position> = xs
        .flat_map(|x| ys.clone().map(move |y| Position::new(x, y)))
        .collect();
    let free: Vec<Position> = cells.iter().copied().filter(|c| !holes.contains(c)).collect();

    let dest = if free.len() > CROWDED_FREE_CELLS {
        free[rng.gen_range(0..free.len())]
    } else if free.is_empty() {
        if cells.is_empty() {
            return None;
        }
        cells[rng.gen_range(0..cells.len())]
    } else {
        nearest(from, free, false)?
    };
    Some(Action::Move(dest))
}

/// True inside the interior band where blind digging pays off.
fn in_dig_band(pos: Position) -> bool {
    pos.x() >= INTERIOR_MIN_X && (BAND_MIN_Y..=BAND_MAX_Y).contains(&pos.y())
}

/// Half-open column and row ranges of the search box around `pos`.
fn search_box(pos: Position) -> (Range<i32>, Range<i32>) {
    let xs = INTERIOR_MIN_X.max(pos.x() - BOX_RADIUS)
        ..BOX_MIN_END.max((pos.x() + BOX_RADIUS).min(BOX_MAX_X));
    let ys = BAND_MIN_Y.max(pos.y() - BOX_RADIUS)
        ..BOX_MIN_END.max((pos.y() + BOX_RADIUS).min(BOX_MAX_Y));
    (xs, ys)
}
