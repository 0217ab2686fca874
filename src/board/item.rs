//! Items a bot can carry, and the equipment it can request.

use std::fmt;

/// An item held by a bot, also used as the bot's target intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Item {
    #[default]
    None,
    Ore,
    Radar,
    Trap,
}

impl Item {
    /// Parses an item from its protocol code.
    pub fn from_code(code: i32) -> Option<Item> {
        match code {
            -1 => Some(Item::None),
            2 => Some(Item::Radar),
            3 => Some(Item::Trap),
            4 => Some(Item::Ore),
            _ => None,
        }
    }

    /// Returns true for radar and trap.
    pub const fn is_equipment(self) -> bool {
        matches!(self, Item::Radar | Item::Trap)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Item::None => "NONE",
            Item::Ore => "ORE",
            Item::Radar => "RADAR",
            Item::Trap => "TRAP",
        };
        f.write_str(name)
    }
}
