//! Game state representation.
//!
//! Holds everything the agent knows about the match: the visible ore map,
//! dug holes, placed equipment, both rosters, and the team cooldowns.
//! `apply_turn` folds one turn's observations into the state, resetting
//! the turn-scoped structures and keeping the ones that accumulate for
//! the whole game (holes and enemy-suspect holes).

use std::collections::{BTreeMap, BTreeSet, HashSet};

use log::debug;

use super::bot::{Bot, Enemy};
use super::item::Item;
use super::position::Position;
use crate::config::AgentConfig;

/// Kind of an entity reported in the turn input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Ally,
    Enemy,
    Radar,
    Trap,
}

impl EntityKind {
    /// Parses an entity kind from its protocol code.
    pub fn from_code(code: u32) -> Option<EntityKind> {
        match code {
            0 => Some(EntityKind::Ally),
            1 => Some(EntityKind::Enemy),
            2 => Some(EntityKind::Radar),
            3 => Some(EntityKind::Trap),
            _ => None,
        }
    }
}

/// One entity line of the turn input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityReport {
    pub id: u32,
    pub kind: EntityKind,
    pub pos: Position,
    pub item: Item,
}

/// One grid cell of the turn input. `ore` is `None` when unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellReport {
    pub ore: Option<u32>,
    pub hole: bool,
}

/// Everything observed at the start of one turn.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TurnReport {
    pub my_score: u32,
    pub opponent_score: u32,
    /// Grid rows, indexed `[y][x]`.
    pub cells: Vec<Vec<CellReport>>,
    pub radar_cooldown: u32,
    pub trap_cooldown: u32,
    pub entities: Vec<EntityReport>,
}

/// Complete knowledge of the match at the current turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub width: i32,
    pub height: i32,
    /// Number of turns applied so far.
    pub turn: u32,
    pub my_score: u32,
    pub opponent_score: u32,
    pub radar_cooldown: u32,
    pub trap_cooldown: u32,
    /// Known ore-bearing cells with a positive quantity.
    pub ores: BTreeMap<Position, u32>,
    pub holes: HashSet<Position>,
    /// Holes probably dug by the opponent, possibly trapped.
    pub enemy_holes: HashSet<Position>,
    pub traps: HashSet<Position>,
    pub radars: HashSet<Position>,
    /// Radar placement spots not yet used.
    pub radar_spots: BTreeSet<Position>,
    /// Trap placement spots not yet used.
    pub trap_spots: BTreeSet<Position>,
    /// Team roster keyed by slot.
    pub allies: BTreeMap<u32, Bot>,
    /// Opponent roster keyed by slot.
    pub enemies: BTreeMap<u32, Enemy>,
}

impl GameState {
    /// Creates an empty state for a grid of the given size.
    pub fn new(width: i32, height: i32) -> Self {
        GameState {
            width,
            height,
            turn: 0,
            my_score: 0,
            opponent_score: 0,
            radar_cooldown: 0,
            trap_cooldown: 0,
            ores: BTreeMap::new(),
            holes: HashSet::new(),
            enemy_holes: HashSet::new(),
            traps: HashSet::new(),
            radars: HashSet::new(),
            radar_spots: BTreeSet::new(),
            trap_spots: BTreeSet::new(),
            allies: BTreeMap::new(),
            enemies: BTreeMap::new(),
        }
    }

    /// Folds a turn's observations into the state.
    pub fn apply_turn(&mut self, report: &TurnReport, config: &AgentConfig) {
        self.ores.clear();
        self.traps.clear();
        self.radars.clear();

        self.my_score = report.my_score;
        self.opponent_score = report.opponent_score;
        self.radar_cooldown = report.radar_cooldown;
        self.trap_cooldown = report.trap_cooldown;

        for (y, row) in report.cells.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let pos = Position::new(x as i32, y as i32);
                if cell.hole {
                    self.holes.insert(pos);
                }
                match cell.ore {
                    Some(amount) if amount > 0 => {
                        self.ores.insert(pos, amount);
                    }
                    _ => {}
                }
            }
        }

        let team_size = config.team_size.max(1);
        for entity in &report.entities {
            let slot = entity.id % team_size;
            match entity.kind {
                EntityKind::Ally => {
                    self.allies
                        .entry(slot)
                        .and_modify(|bot| bot.observe(entity.pos, entity.item))
                        .or_insert_with(|| Bot::new(entity.id, entity.pos, entity.item));
                }
                EntityKind::Enemy => {
                    let stayed = self
                        .enemies
                        .get(&slot)
                        .is_some_and(|prev| prev.pos == entity.pos);
                    if self.turn > 0 && stayed && entity.pos.x() > 0 {
                        self.mark_enemy_dig(entity.pos);
                    }
                    self.enemies
                        .insert(slot, Enemy::new(entity.id, entity.pos, entity.item));
                }
                EntityKind::Radar => {
                    self.radars.insert(entity.pos);
                }
                EntityKind::Trap => {
                    self.traps.insert(entity.pos);
                }
            }
        }

        let (enemy_holes, traps, radars) = (&self.enemy_holes, &self.traps, &self.radars);
        self.ores.retain(|pos, _| {
            !enemy_holes.contains(pos) && !traps.contains(pos) && !radars.contains(pos)
        });

        self.reset_spots(config);
        self.turn += 1;
    }

    /// An enemy that stood still away from home has dug one of its
    /// adjacent holes; all of them become suspect.
    fn mark_enemy_dig(&mut self, pos: Position) {
        for cell in pos.adjacency() {
            if cell.x() > 0 && self.holes.contains(&cell) && self.enemy_holes.insert(cell) {
                debug!("enemy stayed at ({}), suspect hole ({})", pos, cell);
            }
        }
    }

    /// Regenerates the placement candidate sets, minus placed equipment.
    fn reset_spots(&mut self, config: &AgentConfig) {
        self.radar_spots = config
            .radar_layout
            .iter()
            .map(|&(x, y)| Position::new(x, y))
            .filter(|p| !self.radars.contains(p))
            .collect();

        let height = self.height;
        let rows = &config.trap_rows;
        let column = (0..height).map(|y| Position::new(config.trap_column, y));
        let interior = (2..self.width - 1).flat_map(move |x| {
            rows.iter()
                .filter(move |&&y| y < height)
                .map(move |&y| Position::new(x, y))
        });
        self.trap_spots = column
            .chain(interior)
            .filter(|p| !self.traps.contains(p))
            .collect();
    }

    /// Total ore across the known ore map.
    pub fn total_ore(&self) -> u32 {
        self.ores.values().sum()
    }

    /// Allies that are still on the board.
    pub fn living_allies(&self) -> impl Iterator<Item = &Bot> {
        self.allies.values().filter(|b| !b.is_dead())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_grid(width: usize, height: usize) -> Vec<Vec<CellReport>> {
        vec![vec![CellReport::default(); width]; height]
    }

    fn entity(id: u32, kind: EntityKind, x: i32, y: i32) -> EntityReport {
        EntityReport { id, kind, pos: Position::new(x, y), item: Item::None }
    }

    #[test]
    fn entity_kind_codes() {
        assert_eq!(EntityKind::from_code(0), Some(EntityKind::Ally));
        assert_eq!(EntityKind::from_code(3), Some(EntityKind::Trap));
        assert_eq!(EntityKind::from_code(4), None);
    }

    #[test]
    fn ore_map_drops_unknown_and_zero() {
        let config = AgentConfig::default();
        let mut cells = empty_grid(30, 15);
        cells[6][3].ore = Some(4);
        cells[2][8].ore = Some(0);
        let report = TurnReport { cells, ..TurnReport::default() };

        let mut state = GameState::new(30, 15);
        state.apply_turn(&report, &config);
        assert_eq!(state.ores.len(), 1);
        assert_eq!(state.ores.get(&Position::new(3, 6)), Some(&4));
        assert_eq!(state.total_ore(), 4);
    }

    #[test]
    fn ore_under_trap_or_radar_is_dropped() {
        let config = AgentConfig::default();
        let mut cells = empty_grid(30, 15);
        cells[5][5].ore = Some(2);
        cells[7][10].ore = Some(3);
        cells[1][1].ore = Some(1);
        let report = TurnReport {
            cells,
            entities: vec![entity(20, EntityKind::Trap, 5, 5), entity(21, EntityKind::Radar, 10, 7)],
            ..TurnReport::default()
        };

        let mut state = GameState::new(30, 15);
        state.apply_turn(&report, &config);
        assert_eq!(state.ores.keys().copied().collect::<Vec<_>>(), vec![Position::new(1, 1)]);
        assert!(!state.radar_spots.contains(&Position::new(10, 7)));
        assert!(state.traps.contains(&Position::new(5, 5)));
        assert_eq!(state.radar_spots.len(), 12);
    }

    #[test]
    fn rosters_keyed_by_slot() {
        let config = AgentConfig::default();
        let report = TurnReport {
            cells: empty_grid(30, 15),
            entities: vec![
                entity(0, EntityKind::Ally, 0, 2),
                entity(4, EntityKind::Ally, 0, 9),
                entity(5, EntityKind::Enemy, 29, 2),
                entity(9, EntityKind::Enemy, 29, 9),
            ],
            ..TurnReport::default()
        };
        let mut state = GameState::new(30, 15);
        state.apply_turn(&report, &config);
        assert_eq!(state.allies.keys().copied().collect::<Vec<_>>(), vec![0, 4]);
        assert_eq!(state.enemies.keys().copied().collect::<Vec<_>>(), vec![0, 4]);
        assert_eq!(state.enemies[&4].id, 9);
    }

    #[test]
    fn ally_target_lasts_while_equipment_is_carried() {
        let config = AgentConfig::default();
        let mut report = TurnReport {
            cells: empty_grid(30, 15),
            entities: vec![entity(0, EntityKind::Ally, 0, 2)],
            ..TurnReport::default()
        };
        let mut state = GameState::new(30, 15);
        state.apply_turn(&report, &config);
        state.allies.get_mut(&0).unwrap().target = Item::Radar;

        report.entities[0].item = Item::Radar;
        state.apply_turn(&report, &config);
        let bot = state.allies[&0];
        assert_eq!(bot.item, Item::Radar);
        assert_eq!(bot.target, Item::Radar);

        report.entities[0].item = Item::None;
        state.apply_turn(&report, &config);
        assert_eq!(state.allies[&0].target, Item::None);
    }

    #[test]
    fn stationary_enemy_marks_adjacent_holes() {
        let config = AgentConfig::default();
        let mut cells = empty_grid(30, 15);
        cells[5][8].hole = true;
        cells[5][7].ore = Some(2);
        cells[5][7].hole = true;
        cells[9][9].hole = true;
        let report = TurnReport {
            cells,
            entities: vec![entity(5, EntityKind::Enemy, 8, 5)],
            ..TurnReport::default()
        };
        let mut state = GameState::new(30, 15);
        state.apply_turn(&report, &config);
        assert!(state.enemy_holes.is_empty());
        assert_eq!(state.total_ore(), 2);

        state.apply_turn(&report, &config);
        assert!(state.enemy_holes.contains(&Position::new(8, 5)));
        assert!(state.enemy_holes.contains(&Position::new(7, 5)));
        assert!(!state.enemy_holes.contains(&Position::new(9, 9)));
        assert!(state.ores.is_empty());
    }

    #[test]
    fn enemy_at_home_is_not_suspected() {
        let config = AgentConfig::default();
        let mut cells = empty_grid(30, 15);
        cells[5][1].hole = true;
        let report = TurnReport {
            cells,
            entities: vec![entity(5, EntityKind::Enemy, 0, 5)],
            ..TurnReport::default()
        };
        let mut state = GameState::new(30, 15);
        state.apply_turn(&report, &config);
        state.apply_turn(&report, &config);
        assert!(state.enemy_holes.is_empty());
    }

    #[test]
    fn trap_spots_follow_layout() {
        let config = AgentConfig::default();
        let report = TurnReport {
            cells: empty_grid(30, 15),
            entities: vec![entity(30, EntityKind::Trap, 1, 3)],
            ..TurnReport::default()
        };
        let mut state = GameState::new(30, 15);
        state.apply_turn(&report, &config);
        // 15 column cells minus the placed one, plus 27 interior columns x 5 rows.
        assert_eq!(state.trap_spots.len(), 14 + 27 * 5);
        assert!(!state.trap_spots.contains(&Position::new(1, 3)));
        assert!(state.trap_spots.contains(&Position::new(2, 1)));
        assert!(state.trap_spots.contains(&Position::new(28, 13)));
        assert!(!state.trap_spots.contains(&Position::new(29, 13)));
    }

    #[test]
    fn placed_equipment_is_rebuilt_each_turn() {
        let config = AgentConfig::default();
        let mut report = TurnReport {
            cells: empty_grid(30, 15),
            entities: vec![entity(30, EntityKind::Trap, 4, 4)],
            ..TurnReport::default()
        };
        let mut state = GameState::new(30, 15);
        state.apply_turn(&report, &config);
        assert!(state.traps.contains(&Position::new(4, 4)));

        report.entities.clear();
        state.apply_turn(&report, &config);
        assert!(state.traps.is_empty());
        assert!(state.trap_spots.contains(&Position::new(4, 4)));
    }

    #[test]
    fn holes_accumulate() {
        let config = AgentConfig::default();
        let mut cells = empty_grid(30, 15);
        cells[3][3].hole = true;
        let mut state = GameState::new(30, 15);
        state.apply_turn(&TurnReport { cells, ..TurnReport::default() }, &config);
        state.apply_turn(&TurnReport { cells: empty_grid(30, 15), ..TurnReport::default() }, &config);
        assert!(state.holes.contains(&Position::new(3, 3)));
        assert_eq!(state.turn, 2);
    }

    #[test]
    fn living_allies_skip_dead() {
        let config = AgentConfig::default();
        let report = TurnReport {
            cells: empty_grid(30, 15),
            entities: vec![
                entity(0, EntityKind::Ally, 0, 2),
                entity(1, EntityKind::Ally, -1, -1),
            ],
            ..TurnReport::default()
        };
        let mut state = GameState::new(30, 15);
        state.apply_turn(&report, &config);
        assert_eq!(state.living_allies().count(), 1);
    }
}
