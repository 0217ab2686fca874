//! Trap threat assessment.
//!
//! A trap detonates when its cell is dug, and the blast sets off every trap
//! in its adjacency. The full footprint of a chain detonation is therefore
//! the connected component of traps containing the origin, plus one ring of
//! adjacent cells around each of them. Every robot standing in that
//! footprint is destroyed.

use std::collections::{BTreeSet, HashSet};

use log::debug;

use crate::board::{Bot, Enemy, Position};

/// Returns every cell destroyed if the trap at `origin` goes off.
///
/// Depends only on set membership: iteration order of `traps` does not
/// affect the result. The origin is always part of the chain, even when
/// it is not listed in `traps`.
pub fn explosive_cluster(origin: Position, traps: &HashSet<Position>) -> BTreeSet<Position> {
    let mut chain = BTreeSet::new();
    chain.insert(origin);
    let mut frontier = vec![origin];

    while let Some(trap) = frontier.pop() {
        for cell in trap.adjacency() {
            if traps.contains(&cell) && chain.insert(cell) {
                frontier.push(cell);
            }
        }
    }

    let mut blast = chain.clone();
    for trap in &chain {
        blast.extend(trap.adjacency());
    }
    blast
}

/// Returns the trap to dig when blowing it up takes out more enemies than
/// allies, or `None` when no adjacent trap is worth it.
///
/// Traps are tried in adjacency order (own cell, west, north, east, south).
/// Dead robots sit at the sentinel and never count. A dead `bot` never
/// detonates.
pub fn should_self_detonate(
    bot: &Bot,
    traps: &HashSet<Position>,
    allies: &[Bot],
    enemies: &[Enemy],
) -> Option<Position> {
    if bot.is_dead() {
        return None;
    }

    for trap in bot.pos.adjacency() {
        if !traps.contains(&trap) {
            continue;
        }
        let blast = explosive_cluster(trap, traps);
        let ally_count = allies
            .iter()
            .filter(|a| !a.is_dead() && blast.contains(&a.pos))
            .count();
        let enemy_count = enemies
            .iter()
            .filter(|e| !e.is_dead() && blast.contains(&e.pos))
            .count();

        let explode = enemy_count > ally_count && enemy_count > 0;
        debug!(
            "bot {} at ({}): trap ({}) allies={} enemies={} explode={}",
            bot.id, bot.pos, trap, ally_count, enemy_count, explode
        );
        if explode {
            return Some(trap);
        }
    }
    None
}
