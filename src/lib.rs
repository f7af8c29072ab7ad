//! mastermind-smt - symbolic solver for a 3-digit code-breaking puzzle
//!
//! Given a hidden 3-digit key and a set of guesses annotated with feedback
//! ("one digit right and in the right place", "two right but in the wrong
//! place", ...), this crate determines the key by encoding each clue as a
//! boolean constraint over three integer variables and handing the
//! conjunction to Z3, rather than enumerating candidate keys.
//!
//! # Example
//!
//! ```rust,ignore
//! use mastermind_smt::{CheckResult, Clue, Puzzle};
//! use z3::{Config, Context};
//!
//! let cfg = Config::new();
//! let ctx = Context::new(&cfg);
//! let mut puzzle = Puzzle::new(&ctx);
//! puzzle.add_clue(&Clue::OneRightRightPlace(6, 8, 2));
//! match puzzle.check()? {
//!     CheckResult::Sat(key) => println!("{key}"),
//!     CheckResult::Unsat => println!("unsat"),
//!     CheckResult::Unknown(reason) => println!("unknown: {reason}"),
//! }
//! ```

mod encode;
mod error;
mod solver;

pub use encode::{encode_clue, Clue, KeyVars, KEY_LEN};
pub use error::{SolveError, SolveResult as Result};
pub use solver::{CheckResult, Key, Puzzle};
