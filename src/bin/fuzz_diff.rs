//! AFL Fuzz harness for the edit-graph solver
//!
//! This harness tests the critical diff properties:
//! 1. Round-trip: replaying the script over the old sequence rebuilds the new one
//! 2. Consumption: the script consumes exactly the two input lengths
//! 3. Cost bounds: never worse than drop-everything-add-everything, and
//!    cost parity always matches the combined input length
//! 4. Determinism: diffing the same input twice yields the same script
//!
//! Model: the first input byte picks a split point, the remaining bytes
//! become the two sequences. Elements are folded into a narrow alphabet
//! so the sequences actually share subsequences, and lengths are capped
//! to keep the wavefront search fast under fuzzing.

use afl::fuzz;
use reweave::graph::diff_slices;
use reweave::op::Op;

const MAX_LEN: usize = 64;
const ALPHABET: u8 = 8;

fn decode(data: &[u8]) -> Option<(Vec<u8>, Vec<u8>)> {
    if data.is_empty() {
        return None;
    }

    let rest = &data[1..];
    let split = (data[0] as usize) % (rest.len() + 1);
    let (old_raw, new_raw) = rest.split_at(split);

    let old: Vec<u8> = old_raw.iter().take(MAX_LEN).map(|b| b % ALPHABET).collect();
    let new: Vec<u8> = new_raw.iter().take(MAX_LEN).map(|b| b % ALPHABET).collect();
    Some((old, new))
}

fn check(old: &[u8], new: &[u8]) {
    let script = diff_slices(old, new);

    // CRITICAL INVARIANT: replay must rebuild the new sequence.
    let rebuilt = script
        .rebuild(old, new)
        .expect("lengths match by construction");
    assert_eq!(rebuilt, new, "round-trip failure");

    // The script consumes exactly the inputs.
    let mut consumed_old = 0;
    let mut produced_new = 0;
    for op in script.ops() {
        match op {
            Op::Skip => {
                consumed_old += 1;
                produced_new += 1;
            }
            Op::Insert => produced_new += 1,
            Op::Remove => consumed_old += 1,
        }
    }
    assert_eq!(consumed_old, old.len(), "script consumes wrong old length");
    assert_eq!(produced_new, new.len(), "script produces wrong new length");

    // Cost bounds: at worst drop everything and add everything, and
    // cost = old + new - 2 * lcs always has the combined parity.
    assert!(script.cost() <= old.len() + new.len(), "cost exceeds worst case");
    assert_eq!(
        script.cost() % 2,
        (old.len() + new.len()) % 2,
        "cost parity mismatch"
    );

    // Determinism: same input, same script.
    let again = diff_slices(old, new);
    assert_eq!(script, again, "nondeterministic result");
}

fn main() {
    fuzz!(|data: &[u8]| {
        if let Some((old, new)) = decode(data) {
            check(&old, &new);
        }
    });
}
