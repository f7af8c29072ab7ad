//! Constraint store and Z3 solver driver
//!
//! A [`Puzzle`] owns the three key variables and the append-only constraint
//! set, runs exactly one satisfiability check, and extracts the concrete key
//! from the model on a sat outcome.

use std::fmt;
use std::time::Duration;

use tracing::debug;
use z3::{Context, Model, SatResult, Solver};

use crate::encode::{encode_clue, Clue, KeyVars, KEY_LEN};
use crate::error::{SolveError, SolveResult};

/// A concrete key extracted from a satisfying model
///
/// Digits are guaranteed within [0, 9] by the domain constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Key(pub [u8; KEY_LEN]);

impl Key {
    /// The digit at a zero-based position
    pub fn digit(&self, pos: usize) -> u8 {
        self.0[pos]
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.0[0], self.0[1], self.0[2])
    }
}

/// Outcome of the satisfiability check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    /// The clues are jointly satisfiable; one valid key (not necessarily
    /// unique) was extracted
    Sat(Key),
    /// No key satisfies all clues
    Unsat,
    /// The solver could not decide, with its reason
    Unknown(String),
}

impl CheckResult {
    /// Check if the result is satisfiable
    pub fn is_sat(&self) -> bool {
        matches!(self, CheckResult::Sat(_))
    }

    /// Check if the result is unsatisfiable
    pub fn is_unsat(&self) -> bool {
        matches!(self, CheckResult::Unsat)
    }

    /// Check if the result is unknown
    pub fn is_unknown(&self) -> bool {
        matches!(self, CheckResult::Unknown(_))
    }

    /// Get the key if satisfiable
    pub fn key(&self) -> Option<Key> {
        match self {
            CheckResult::Sat(key) => Some(*key),
            _ => None,
        }
    }
}

/// One puzzle instance: key variables plus the accumulated constraint set
///
/// Creating the puzzle asserts the [0, 9] domain bound on each key variable,
/// once, before any clue. Clues then grow the constraint set monotonically;
/// nothing is ever retracted. [`Puzzle::check`] consumes the puzzle, so no
/// clue can be added after the result has been computed and the check cannot
/// be rerun.
pub struct Puzzle<'ctx> {
    ctx: &'ctx Context,
    solver: Solver<'ctx>,
    keys: KeyVars<'ctx>,
}

impl<'ctx> Puzzle<'ctx> {
    /// Create a puzzle with fresh key variables restricted to [0, 9]
    pub fn new(ctx: &'ctx Context) -> Self {
        let solver = Solver::new(ctx);
        let keys = KeyVars::new(ctx);
        solver.assert(&keys.domain(ctx));
        Self { ctx, solver, keys }
    }

    /// Impose a deadline on the solver invocation
    ///
    /// The core never sets one itself; hitting the deadline surfaces as an
    /// [`CheckResult::Unknown`] outcome.
    pub fn set_timeout(&mut self, timeout: Duration) {
        let mut params = z3::Params::new(self.ctx);
        params.set_u32("timeout", timeout.as_millis() as u32);
        self.solver.set_params(&params);
    }

    /// Encode one clue and add its constraint to the store
    pub fn add_clue(&mut self, clue: &Clue) {
        debug!(?clue, "asserting clue constraint");
        self.solver.assert(&encode_clue(self.ctx, &self.keys, clue));
    }

    /// One guessed digit is at its own position; the other two are absent
    pub fn one_right_right_place(&mut self, a: i64, b: i64, c: i64) {
        self.add_clue(&Clue::OneRightRightPlace(a, b, c));
    }

    /// One guessed digit is in the key at a different position; the other
    /// two are absent
    pub fn one_right_wrong_place(&mut self, a: i64, b: i64, c: i64) {
        self.add_clue(&Clue::OneRightWrongPlace(a, b, c));
    }

    /// Two guessed digits are in the key at different positions; the third
    /// is absent
    pub fn two_right_wrong_place(&mut self, a: i64, b: i64, c: i64) {
        self.add_clue(&Clue::TwoRightWrongPlace(a, b, c));
    }

    /// No guessed digit appears anywhere in the key
    pub fn all_wrong(&mut self, a: i64, b: i64, c: i64) {
        self.add_clue(&Clue::AllWrong(a, b, c));
    }

    /// Run the satisfiability check over all accumulated constraints
    ///
    /// Returns `Sat(key)` with one extracted key, `Unsat` if the puzzle as
    /// stated has no consistent key, or `Unknown` verbatim if the solver
    /// could not decide. Nothing is retried; the constraint set is fixed and
    /// deterministic.
    pub fn check(self) -> SolveResult<CheckResult> {
        match self.solver.check() {
            SatResult::Sat => {
                let model = self.solver.get_model().ok_or_else(|| {
                    SolveError::ModelError("solver reported sat but produced no model".to_string())
                })?;
                let key = self.extract_key(&model)?;
                debug!(%key, "puzzle satisfiable");
                Ok(CheckResult::Sat(key))
            }
            SatResult::Unsat => {
                debug!("puzzle unsatisfiable");
                Ok(CheckResult::Unsat)
            }
            SatResult::Unknown => {
                let reason = self
                    .solver
                    .get_reason_unknown()
                    .unwrap_or_else(|| "unknown".to_string());
                debug!(%reason, "solver could not decide");
                Ok(CheckResult::Unknown(reason))
            }
        }
    }

    /// Read the concrete key digits back from the model
    fn extract_key(&self, model: &Model<'ctx>) -> SolveResult<Key> {
        let mut digits = [0u8; KEY_LEN];
        for (pos, var) in self.keys.iter().enumerate() {
            let value = model
                .eval(var, true)
                .and_then(|v| v.as_i64())
                .ok_or_else(|| {
                    SolveError::ModelError(format!("no value for key position {}", pos + 1))
                })?;
            digits[pos] = u8::try_from(value).map_err(|_| {
                SolveError::ModelError(format!("value {value} outside digit range"))
            })?;
        }
        Ok(Key(digits))
    }
}
