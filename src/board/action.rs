//! Actions a robot can take in one turn.
//!
//! Exactly one action is emitted per ally per turn. The protocol text form
//! lives in `protocol::output`.

use super::item::Item;
use super::position::Position;

/// A single robot command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Do nothing: `WAIT`
    Wait,

    /// Move towards a cell: `MOVE x y`
    Move(Position),

    /// Dig a cell, moving next to it first if needed: `DIG x y`
    Dig(Position),

    /// Ask headquarters for equipment: `REQUEST RADAR` or `REQUEST TRAP`
    Request(Item),
}
