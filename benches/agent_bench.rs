use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::HashSet;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use orebot::board::{CellReport, EntityKind, EntityReport, GameState, Item, Position, TurnReport};
use orebot::config::AgentConfig;
use orebot::controller::decide_turn;
use orebot::eval::explosive_cluster;

/// A comb of traps along three rows, all chained through column 10.
fn trap_field() -> HashSet<Position> {
    let mut traps = HashSet::new();
    for y in 1..14 {
        traps.insert(Position::new(10, y));
    }
    for x in 2..28 {
        for y in [1, 7, 13] {
            traps.insert(Position::new(x, y));
        }
    }
    traps
}

/// A mid-game turn: ore scattered over the field, five allies spread out.
fn mid_game_report() -> TurnReport {
    let mut cells = vec![vec![CellReport::default(); 30]; 15];
    for (i, row) in cells.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            if (i * 7 + j * 3) % 11 == 0 {
                cell.ore = Some(((i + j) % 3) as u32 + 1);
            }
            cell.hole = (i + j) % 5 == 0;
        }
    }
    let mut entities = Vec::new();
    for (i, (x, y)) in [(0, 2), (6, 5), (12, 9), (20, 3), (3, 12)].into_iter().enumerate() {
        let item = if i == 2 { Item::Ore } else { Item::None };
        entities.push(EntityReport {
            id: i as u32,
            kind: EntityKind::Ally,
            pos: Position::new(x, y),
            item,
        });
        entities.push(EntityReport {
            id: i as u32 + 5,
            kind: EntityKind::Enemy,
            pos: Position::new(29 - x, y),
            item: Item::None,
        });
    }
    TurnReport {
        cells,
        radar_cooldown: 0,
        trap_cooldown: 0,
        entities,
        ..TurnReport::default()
    }
}

fn bench_explosive_cluster(c: &mut Criterion) {
    let traps = trap_field();
    c.bench_function("explosive_cluster_chained_field", |b| {
        b.iter(|| explosive_cluster(black_box(Position::new(10, 7)), black_box(&traps)))
    });
}

fn bench_decide_turn(c: &mut Criterion) {
    let config = AgentConfig::default();
    let mut state = GameState::new(30, 15);
    state.apply_turn(&mid_game_report(), &config);

    c.bench_function("decide_turn_mid_game", |b| {
        let mut rng = SmallRng::seed_from_u64(0);
        b.iter(|| {
            let mut s = state.clone();
            decide_turn(black_box(&mut s), &config, &mut rng)
        })
    });
}

fn bench_apply_turn(c: &mut Criterion) {
    let config = AgentConfig::default();
    let report = mid_game_report();
    c.bench_function("apply_turn_full_grid", |b| {
        b.iter(|| {
            let mut state = GameState::new(30, 15);
            state.apply_turn(black_box(&report), &config);
            state
        })
    });
}

criterion_group!(
    benches,
    bench_explosive_cluster,
    bench_decide_turn,
    bench_apply_turn
);
criterion_main!(benches);
