//! Solves the code-breaking puzzle printed on the milk carton

use mastermind_smt::{CheckResult, Clue, Puzzle};
use z3::{Config, Context};

fn main() -> mastermind_smt::Result<()> {
    tracing_subscriber::fmt::init();

    let cfg = Config::new();
    let ctx = Context::new(&cfg);
    let mut puzzle = Puzzle::new(&ctx);

    puzzle.add_clue(&Clue::OneRightRightPlace(6, 8, 2));
    puzzle.add_clue(&Clue::OneRightWrongPlace(6, 1, 4));
    puzzle.add_clue(&Clue::TwoRightWrongPlace(2, 0, 6));
    // The three clues above already pin the key; the rest corroborate it.
    puzzle.add_clue(&Clue::AllWrong(7, 3, 8));
    puzzle.add_clue(&Clue::OneRightWrongPlace(8, 7, 0));

    match puzzle.check()? {
        CheckResult::Sat(key) => println!("{key}"),
        CheckResult::Unsat => println!("unsat"),
        CheckResult::Unknown(reason) => println!("unknown: {reason}"),
    }

    Ok(())
}
