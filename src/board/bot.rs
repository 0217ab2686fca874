//! Team and opponent robots.
//!
//! Allies are owned by the team roster and mutated once per turn by the
//! controller. Enemies are a read-only mirror refreshed from the turn input.

use super::item::Item;
use super::position::Position;

/// A robot on our team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bot {
    pub id: u32,
    pub pos: Position,
    pub item: Item,
    /// Intent used for same-turn equipment arbitration.
    pub target: Item,
}

impl Bot {
    pub fn new(id: u32, pos: Position, item: Item) -> Self {
        Bot { id, pos, item, target: Item::None }
    }

    pub fn is_dead(&self) -> bool {
        self.pos.is_dead()
    }

    /// Refreshes position and held item from the turn input. A pending
    /// radar or trap intent only survives while that equipment is carried.
    pub fn observe(&mut self, pos: Position, item: Item) {
        self.pos = pos;
        self.item = item;
        if !item.is_equipment() {
            self.target = Item::None;
        }
    }
}

/// A robot on the opposing team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enemy {
    pub id: u32,
    pub pos: Position,
    pub item: Item,
}

impl Enemy {
    pub fn new(id: u32, pos: Position, item: Item) -> Self {
        Enemy { id, pos, item }
    }

    pub fn is_dead(&self) -> bool {
        self.pos.is_dead()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bot_has_no_target() {
        let bot = Bot::new(3, Position::new(0, 4), Item::Radar);
        assert_eq!(bot.target, Item::None);
        assert!(!bot.is_dead());
    }

    #[test]
    fn observe_keeps_target() {
        let mut bot = Bot::new(0, Position::new(0, 4), Item::None);
        bot.target = Item::Radar;
        bot.observe(Position::new(0, 4), Item::Radar);
        assert_eq!(bot.item, Item::Radar);
        assert_eq!(bot.target, Item::Radar);
    }

    #[test]
    fn observe_clears_target_once_equipment_is_gone() {
        let mut bot = Bot::new(0, Position::new(6, 5), Item::Radar);
        bot.target = Item::Radar;
        bot.observe(Position::new(6, 5), Item::None);
        assert_eq!(bot.target, Item::None);

        bot.target = Item::Trap;
        bot.observe(Position::new(0, 5), Item::Ore);
        assert_eq!(bot.target, Item::None);
    }

    #[test]
    fn dead_enemy() {
        let enemy = Enemy::new(7, Position::DEAD, Item::None);
        assert!(enemy.is_dead());
    }
}
