//! Equipment request arbitration.
//!
//! Headquarters hands out radars and traps on a cooldown, so the team must
//! never ask for the same kind twice in one turn. Each empty-handed robot
//! looks at its living teammates' target intents before asking; a robot
//! that asks records the kind in its own target, which later robots in the
//! same turn then see.

use rand::Rng;

use crate::board::{Bot, GameState, Item};
use crate::config::AgentConfig;

/// Equipment kinds already claimed by teammates this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Claims {
    pub radar: bool,
    pub trap: bool,
}

impl Claims {
    /// Collects the target intents of living teammates.
    pub fn from_teammates<'a>(teammates: impl IntoIterator<Item = &'a Bot>) -> Self {
        teammates
            .into_iter()
            .filter(|b| !b.is_dead())
            .fold(Claims::default(), |claims, b| Claims {
                radar: claims.radar || b.target == Item::Radar,
                trap: claims.trap || b.target == Item::Trap,
            })
    }
}

/// Team-wide facts the arbiter needs, fixed for the whole turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquipmentOutlook {
    pub radar_spot_open: bool,
    pub trap_spot_open: bool,
    pub radar_cooldown: u32,
    pub trap_cooldown: u32,
    pub total_ore: u32,
    /// Id of the living ally closest to the home edge.
    pub home_most: Option<u32>,
}

impl EquipmentOutlook {
    /// Snapshots the state at the start of a turn. Ties for the home-most
    /// robot are broken with `rng`.
    pub fn from_state(state: &GameState, rng: &mut impl Rng) -> Self {
        let living: Vec<&Bot> = state.living_allies().collect();
        EquipmentOutlook {
            radar_spot_open: !state.radar_spots.is_empty(),
            trap_spot_open: !state.trap_spots.is_empty(),
            radar_cooldown: state.radar_cooldown,
            trap_cooldown: state.trap_cooldown,
            total_ore: state.total_ore(),
            home_most: home_most(&living, rng),
        }
    }
}

/// Returns the id of the bot with the smallest x, picking uniformly at
/// random among ties. Dead bots must already be filtered out.
pub fn home_most(bots: &[&Bot], rng: &mut impl Rng) -> Option<u32> {
    let min_x = bots.iter().map(|b| b.pos.x()).min()?;
    let tied: Vec<u32> = bots
        .iter()
        .filter(|b| b.pos.x() == min_x)
        .map(|b| b.id)
        .collect();
    Some(tied[rng.gen_range(0..tied.len())])
}

/// Decides whether an empty-handed `bot` should request equipment.
///
/// Radar wins over trap when both are allowed.
pub fn choose_request(
    bot: &Bot,
    claims: Claims,
    outlook: &EquipmentOutlook,
    config: &AgentConfig,
) -> Option<Item> {
    if bot.is_dead() || bot.item != Item::None {
        return None;
    }

    let radar_ok = outlook.radar_spot_open
        && !claims.radar
        && outlook.radar_cooldown < config.radar_cooldown_limit
        && outlook.total_ore < config.ore_saturation
        && outlook.home_most == Some(bot.id);
    if radar_ok {
        return Some(Item::Radar);
    }

    let trap_ok = outlook.trap_spot_open
        && !claims.trap
        && outlook.trap_cooldown == config.trap_cooldown_ready
        && bot.pos.x() == 0;
    if trap_ok {
        return Some(Item::Trap);
    }

    None
}
