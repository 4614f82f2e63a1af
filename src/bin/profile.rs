use std::collections::HashSet;

use bitfour::bitboard::{columns, BOARD_SIZE};
use bitfour::Position;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

const DEFAULT_PLAYOUTS: usize = 100_000;

#[derive(Default)]
struct Tally {
    wins: usize,
    draws: usize,
    forced_losses: usize,
    moves: usize,
}

/// Pick a non-losing column when one exists, any legal column otherwise.
#[hotpath::measure]
fn choose_column(position: &Position, rng: &mut StdRng) -> Option<usize> {
    let non_losing: Vec<usize> = columns(position.possible_non_losing_moves()).collect();
    if let Some(&col) = non_losing.choose(rng) {
        return Some(col);
    }
    let legal: Vec<usize> = columns(position.possible()).collect();
    legal.choose(rng).copied()
}

#[hotpath::measure]
fn playout(rng: &mut StdRng, keys: &mut HashSet<u64>, tally: &mut Tally) {
    let mut position = Position::new();

    loop {
        keys.insert(position.key());

        if position.can_win_next() {
            tally.wins += 1;
            break;
        }
        if position.move_count() == BOARD_SIZE {
            tally.draws += 1;
            break;
        }
        if position.possible_non_losing_moves() == 0 {
            tally.forced_losses += 1;
        }

        let Some(col) = choose_column(&position, rng) else {
            tally.draws += 1;
            break;
        };
        position.play(col);
        tally.moves += 1;
    }
}

#[hotpath::main]
fn main() {
    let playouts = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_PLAYOUTS);

    let mut rng = StdRng::seed_from_u64(42);
    let mut keys = HashSet::new();
    let mut tally = Tally::default();

    for _ in 0..playouts {
        playout(&mut rng, &mut keys, &mut tally);
    }

    println!(
        "Playouts: {}\n  Wins: {}\n  Draws: {}\n  Forced-loss nodes: {}\n  Moves played: {}\n  Distinct keys: {}",
        playouts,
        tally.wins,
        tally.draws,
        tally.forced_losses,
        tally.moves,
        keys.len()
    );
}
