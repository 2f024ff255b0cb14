//! Basic example of using the sliding-puzzle engine

use slide_core::{Engine, DEFAULT_SHUFFLE_STEPS};

fn main() {
    // Start from the solved 15-puzzle
    let mut engine = Engine::new(4).expect("4 is a valid grid size");
    println!("Solved board:");
    println!("{}", engine.board());

    // Randomize it; every shuffle step is a legal move, so the result is
    // always solvable
    engine.shuffle(DEFAULT_SHUFFLE_STEPS);
    println!("After shuffling {} steps:", DEFAULT_SHUFFLE_STEPS);
    println!("{}", engine.board());
    println!("Solved: {}", engine.is_solved());
    println!("Player moves so far: {}\n", engine.moves());

    // Slide a tile into the gap
    let blank = engine.blank();
    let target = if blank.row > 0 {
        (blank.row - 1, blank.col)
    } else {
        (blank.row + 1, blank.col)
    };
    let result = engine
        .request_move(target.0, target.1)
        .expect("target is in bounds");
    println!(
        "Moved tile at ({}, {}): accepted={}, moves={}, solved={}",
        target.0, target.1, result.accepted, result.moves, result.solved
    );
    println!("{}", result.board);

    // Aiming at the blank itself is a routine rejection, not an error
    let blank = engine.blank();
    let rejected = engine
        .request_move(blank.row, blank.col)
        .expect("blank is in bounds");
    println!(
        "Aimed at the blank: accepted={}, moves={}",
        rejected.accepted, rejected.moves
    );

    // Off-grid coordinates are a hard failure
    if let Err(e) = engine.request_move(99, 0) {
        println!("Off-grid request: {}", e);
    }
}
