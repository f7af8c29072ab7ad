//! Translation from puzzle clues to Z3 constraints
//!
//! Each clue is a guessed digit triple plus a feedback category, and encodes
//! to exactly one boolean proposition over the three key variables. The
//! disjunctive categories enumerate their placement scenarios from the fixed
//! position/digit index sets rather than spelling the disjuncts out by hand,
//! so the encodings stay symmetric across positions.

use z3::ast::{Ast, Bool, Int};
use z3::Context;

/// Number of digits in the key
pub const KEY_LEN: usize = 3;

/// The three symbolic key variables, positionally indexed
///
/// Created once per puzzle; constraints reference the variables but never
/// mutate them.
pub struct KeyVars<'ctx> {
    vars: [Int<'ctx>; KEY_LEN],
}

impl<'ctx> KeyVars<'ctx> {
    /// Declare the three integer constants `k1`, `k2`, `k3`
    pub fn new(ctx: &'ctx Context) -> Self {
        Self {
            vars: [
                Int::new_const(ctx, "k1"),
                Int::new_const(ctx, "k2"),
                Int::new_const(ctx, "k3"),
            ],
        }
    }

    /// The variable at a zero-based position
    pub fn var(&self, pos: usize) -> &Int<'ctx> {
        &self.vars[pos]
    }

    /// Iterate over the variables in position order
    pub fn iter(&self) -> impl Iterator<Item = &Int<'ctx>> {
        self.vars.iter()
    }

    /// The domain restriction: every key digit lies in [0, 9]
    pub fn domain(&self, ctx: &'ctx Context) -> Bool<'ctx> {
        let low = Int::from_i64(ctx, 0);
        let high = Int::from_i64(ctx, 9);
        let parts: Vec<Bool<'ctx>> = self
            .vars
            .iter()
            .flat_map(|k| [k.ge(&low), k.le(&high)])
            .collect();
        and_all(ctx, &parts)
    }
}

/// One puzzle clue: a guessed triple plus its feedback category
///
/// Digits outside [0, 9] are not rejected here; they conflict with the
/// domain constraints and surface as an unsatisfiable system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clue {
    /// Exactly one guessed digit sits at its own position; the other two
    /// appear nowhere in the key
    OneRightRightPlace(i64, i64, i64),
    /// Exactly one guessed digit is in the key, at a different position than
    /// guessed; the other two appear nowhere in the key
    OneRightWrongPlace(i64, i64, i64),
    /// Exactly two guessed digits are in the key, each at a different
    /// position than guessed; the third appears nowhere in the key
    TwoRightWrongPlace(i64, i64, i64),
    /// None of the guessed digits appears anywhere in the key
    AllWrong(i64, i64, i64),
}

impl Clue {
    /// The guessed digits in position order
    pub fn digits(&self) -> [i64; KEY_LEN] {
        match *self {
            Clue::OneRightRightPlace(a, b, c)
            | Clue::OneRightWrongPlace(a, b, c)
            | Clue::TwoRightWrongPlace(a, b, c)
            | Clue::AllWrong(a, b, c) => [a, b, c],
        }
    }
}

/// Encode one clue as a single boolean constraint over the key variables
pub fn encode_clue<'ctx>(ctx: &'ctx Context, keys: &KeyVars<'ctx>, clue: &Clue) -> Bool<'ctx> {
    let g = clue.digits();
    match clue {
        Clue::OneRightRightPlace(..) => {
            // One disjunct per candidate position: the digit there matches,
            // and both other guessed digits are absent everywhere.
            let branches: Vec<Bool<'ctx>> = (0..KEY_LEN)
                .map(|i| {
                    let mut parts = vec![hit(ctx, keys, i, g[i])];
                    for j in (0..KEY_LEN).filter(|&j| j != i) {
                        parts.push(absent(ctx, keys, g[j]));
                    }
                    and_all(ctx, &parts)
                })
                .collect();
            or_all(ctx, &branches)
        }
        Clue::OneRightWrongPlace(..) => {
            // 3 candidate digits x 2 alternative positions = 6 scenarios.
            // In each, the moved digit occupies its alternative position and
            // the remaining positions exclude both other guessed digits.
            let mut branches = Vec::with_capacity(6);
            for i in 0..KEY_LEN {
                for q in (0..KEY_LEN).filter(|&q| q != i) {
                    let mut parts = vec![hit(ctx, keys, q, g[i])];
                    for p in (0..KEY_LEN).filter(|&p| p != q) {
                        for j in (0..KEY_LEN).filter(|&j| j != i) {
                            parts.push(miss(ctx, keys, p, g[j]));
                        }
                    }
                    branches.push(and_all(ctx, &parts));
                }
            }
            Bool::and(ctx, &[&none_in_place(ctx, keys, &g), &or_all(ctx, &branches)])
        }
        Clue::TwoRightWrongPlace(..) => {
            // 3 unordered digit pairs x 3 placements avoiding own slots = 9
            // scenarios. Both paired digits are pinned at wrong, distinct
            // positions; the remaining position holds none of the guessed
            // digits, which keeps the third digit out of the key.
            let mut branches = Vec::with_capacity(9);
            for i in 0..KEY_LEN {
                for j in i + 1..KEY_LEN {
                    for pi in (0..KEY_LEN).filter(|&p| p != i) {
                        for pj in (0..KEY_LEN).filter(|&p| p != j && p != pi) {
                            let rest = KEY_LEN * (KEY_LEN - 1) / 2 - pi - pj;
                            let mut parts =
                                vec![hit(ctx, keys, pi, g[i]), hit(ctx, keys, pj, g[j])];
                            for &d in &g {
                                parts.push(miss(ctx, keys, rest, d));
                            }
                            branches.push(and_all(ctx, &parts));
                        }
                    }
                }
            }
            Bool::and(ctx, &[&none_in_place(ctx, keys, &g), &or_all(ctx, &branches)])
        }
        Clue::AllWrong(..) => {
            // Plain conjunction: every position excludes every guessed digit.
            let mut parts = Vec::with_capacity(KEY_LEN * KEY_LEN);
            for p in 0..KEY_LEN {
                for &d in &g {
                    parts.push(miss(ctx, keys, p, d));
                }
            }
            and_all(ctx, &parts)
        }
    }
}

/// The key digit at `pos` equals `digit`
fn hit<'ctx>(ctx: &'ctx Context, keys: &KeyVars<'ctx>, pos: usize, digit: i64) -> Bool<'ctx> {
    keys.var(pos)._eq(&Int::from_i64(ctx, digit))
}

/// The key digit at `pos` differs from `digit`
fn miss<'ctx>(ctx: &'ctx Context, keys: &KeyVars<'ctx>, pos: usize, digit: i64) -> Bool<'ctx> {
    hit(ctx, keys, pos, digit).not()
}

/// `digit` appears at no position of the key
fn absent<'ctx>(ctx: &'ctx Context, keys: &KeyVars<'ctx>, digit: i64) -> Bool<'ctx> {
    let parts: Vec<Bool<'ctx>> = (0..KEY_LEN).map(|p| miss(ctx, keys, p, digit)).collect();
    and_all(ctx, &parts)
}

/// No guessed digit sits at its own position
fn none_in_place<'ctx>(
    ctx: &'ctx Context,
    keys: &KeyVars<'ctx>,
    guess: &[i64; KEY_LEN],
) -> Bool<'ctx> {
    let parts: Vec<Bool<'ctx>> = (0..KEY_LEN).map(|i| miss(ctx, keys, i, guess[i])).collect();
    and_all(ctx, &parts)
}

fn and_all<'ctx>(ctx: &'ctx Context, parts: &[Bool<'ctx>]) -> Bool<'ctx> {
    let refs: Vec<&Bool<'ctx>> = parts.iter().collect();
    Bool::and(ctx, &refs)
}

fn or_all<'ctx>(ctx: &'ctx Context, parts: &[Bool<'ctx>]) -> Bool<'ctx> {
    let refs: Vec<&Bool<'ctx>> = parts.iter().collect();
    Bool::or(ctx, &refs)
}
