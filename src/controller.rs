//! Per-robot decision making.
//!
//! Each living ally gets exactly one action per turn, chosen by the first
//! rule that applies:
//!
//! 1. dead: `WAIT`, and its item is forgotten;
//! 2. an adjacent trap chain would kill more enemies than allies: dig it;
//! 3. empty-handed: request equipment, else dig the nearest ore, else explore;
//! 4. carrying ore: head home along the current row;
//! 5. carrying a radar or trap: dig it into the nearest free spot.
//!
//! Allies are decided in ascending slot order. The only state shared between
//! them is their target intent, read by the equipment arbiter.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use log::{debug, info};
use rand::Rng;

use crate::arbiter::{choose_request, Claims, EquipmentOutlook};
use crate::board::{Action, Bot, Enemy, GameState, Item, Position};
use crate::config::AgentConfig;
use crate::eval::should_self_detonate;
use crate::search::{deliver_ore, dig_nearest_ore, explore, place_equipment};

/// Read-only view of the turn shared by every robot decision.
pub struct TurnView<'a> {
    pub ores: &'a BTreeMap<Position, u32>,
    pub holes: &'a HashSet<Position>,
    pub traps: &'a HashSet<Position>,
    pub radar_spots: &'a BTreeSet<Position>,
    pub trap_spots: &'a BTreeSet<Position>,
    pub allies: &'a [Bot],
    pub enemies: &'a [Enemy],
    pub outlook: EquipmentOutlook,
}

/// Decides one action per ally, in ascending slot order, updating each
/// ally's target intent along the way.
pub fn decide_turn(state: &mut GameState, config: &AgentConfig, rng: &mut impl Rng) -> Vec<Action> {
    let outlook = EquipmentOutlook::from_state(state, rng);
    let allies: Vec<Bot> = state.allies.values().copied().collect();
    let enemies: Vec<Enemy> = state.enemies.values().copied().collect();

    debug!(
        "turn {}: ore total {} over {} cells, targets [{}]",
        state.turn,
        outlook.total_ore,
        state.ores.len(),
        allies
            .iter()
            .map(|b| b.target.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );

    let view = TurnView {
        ores: &state.ores,
        holes: &state.holes,
        traps: &state.traps,
        radar_spots: &state.radar_spots,
        trap_spots: &state.trap_spots,
        allies: &allies,
        enemies: &enemies,
        outlook,
    };

    let slots: Vec<u32> = state.allies.keys().copied().collect();
    let mut actions = Vec::with_capacity(slots.len());
    for slot in slots {
        let claims = Claims::from_teammates(
            state
                .allies
                .iter()
                .filter(|(s, _)| **s != slot)
                .map(|(_, b)| b),
        );
        let Some(bot) = state.allies.get_mut(&slot) else {
            continue;
        };
        actions.push(decide(bot, claims, &view, config, rng));
    }
    actions
}

/// Chooses the action for a single ally.
pub fn decide(
    bot: &mut Bot,
    claims: Claims,
    view: &TurnView<'_>,
    config: &AgentConfig,
    rng: &mut impl Rng,
) -> Action {
    if bot.is_dead() {
        bot.item = Item::None;
        bot.target = Item::None;
        return Action::Wait;
    }
    if bot.item == Item::None {
        bot.target = Item::None;
    }

    if let Some(trap) = should_self_detonate(bot, view.traps, view.allies, view.enemies) {
        info!("bot {} detonates trap at ({})", bot.id, trap);
        return Action::Dig(trap);
    }

    match bot.item {
        Item::None => {
            if let Some(item) = choose_request(bot, claims, &view.outlook, config) {
                info!("bot {} requests {}", bot.id, item);
                bot.target = item;
                return Action::Request(item);
            }
            if let Some(action) = dig_nearest_ore(bot.pos, view.ores) {
                return action;
            }
            explore(bot.pos, view.holes, rng).unwrap_or(Action::Wait)
        }
        Item::Ore => {
            bot.target = Item::None;
            deliver_ore(bot.pos)
        }
        Item::Radar => {
            debug!("bot {} has radar", bot.id);
            place_equipment(bot.pos, view.radar_spots, config.fallback_deposit())
        }
        Item::Trap => {
            debug!("bot {} has trap", bot.id);
            place_equipment(bot.pos, view.trap_spots, config.fallback_deposit())
        }
    }
}
