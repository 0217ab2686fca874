//! Target search.
//!
//! Picks where a robot goes next: the nearest ore, the home edge, an
//! equipment spot, or an exploratory cell when nothing is known.

pub mod explore;
pub mod nearest;
pub mod ore;

pub use explore::explore;
pub use nearest::nearest;
pub use ore::{deliver_ore, dig_nearest_ore, place_equipment};
