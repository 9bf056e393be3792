// model = "claude-opus-4-5"
// created = 2026-02-04
// modified = 2026-02-04
// driver = "Isaac Clayton"

//! Cross-checks the wavefront engine against the pedagogy references.
//!
//! The pedagogy crate computes edit scripts by dynamic programming,
//! which is easy to convince yourself is correct. The production engine
//! must agree with it on cost for every input (the scripts themselves
//! may differ, since equal-cost scripts are not unique and the two
//! engines use different tie-breaks).
//!
//! Small inputs are checked exhaustively, larger ones by seeded random
//! sampling.

use pedagogy::diff_trait::cost;
use pedagogy::diff_trait::rebuild;
use pedagogy::diff_trait::DiffAlgorithm;
use pedagogy::dp::TableDiff;
use pedagogy::lcs::lcs_len_slices;
use pedagogy::memo::MemoDiff;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use reweave::graph::diff_slices;

// =============================================================================
// Test helpers
// =============================================================================

/// Every sequence over `alphabet` of length 0 up to `max_len`.
fn all_sequences(alphabet: &[u8], max_len: usize) -> Vec<Vec<u8>> {
    let mut result = vec![Vec::new()];
    let mut frontier = vec![Vec::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for seq in &frontier {
            for &symbol in alphabet {
                let mut extended = seq.clone();
                extended.push(symbol);
                next.push(extended);
            }
        }
        result.extend(next.iter().cloned());
        frontier = next;
    }
    return result;
}

/// Check one input pair against both references.
fn check_pair(old: &[u8], new: &[u8]) {
    let script = diff_slices(old, new);

    // The engine's script must replay correctly.
    let rebuilt = script.rebuild(old, new).unwrap();
    assert_eq!(rebuilt, new, "round-trip failed for {:?} -> {:?}", old, new);

    // Both references must agree with the engine on cost.
    let table = TableDiff.edit_script(old.len(), new.len(), |i, j| old[i] == new[j]);
    let memo = MemoDiff.edit_script(old.len(), new.len(), |i, j| old[i] == new[j]);
    assert_eq!(
        script.cost(),
        cost(&table),
        "cost differs from TableDiff for {:?} -> {:?}",
        old,
        new
    );
    assert_eq!(
        script.cost(),
        cost(&memo),
        "cost differs from MemoDiff for {:?} -> {:?}",
        old,
        new
    );

    // And the cost must be the LCS bound.
    let lcs = lcs_len_slices(old, new);
    assert_eq!(script.cost(), old.len() + new.len() - 2 * lcs);

    // The reference scripts replay correctly too.
    assert_eq!(rebuild(&table, old, new), new);
    assert_eq!(rebuild(&memo, old, new), new);
}

// =============================================================================
// Exhaustive small inputs
// =============================================================================

#[test]
fn exhaustive_binary_alphabet_up_to_four() {
    // 31 sequences, 961 pairs.
    let sequences = all_sequences(&[b'a', b'b'], 4);
    for old in &sequences {
        for new in &sequences {
            check_pair(old, new);
        }
    }
}

#[test]
fn exhaustive_ternary_alphabet_up_to_three() {
    // 40 sequences, 1600 pairs.
    let sequences = all_sequences(&[b'x', b'y', b'z'], 3);
    for old in &sequences {
        for new in &sequences {
            check_pair(old, new);
        }
    }
}

// =============================================================================
// Randomized larger inputs
// =============================================================================

#[test]
fn random_pairs_agree_with_references() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let old_len = rng.gen_range(0..40);
        let new_len = rng.gen_range(0..40);
        let old: Vec<u8> = (0..old_len).map(|_| rng.gen_range(0..6)).collect();
        let new: Vec<u8> = (0..new_len).map(|_| rng.gen_range(0..6)).collect();
        check_pair(&old, &new);
    }
}

#[test]
fn random_edits_of_a_common_ancestor() {
    // Pairs produced by mutating one sequence into another, the shape
    // diffs see in practice: mostly equal with scattered edits.
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let len = rng.gen_range(1..60);
        let old: Vec<u8> = (0..len).map(|_| rng.gen_range(0..6)).collect();

        let mut new = old.clone();
        let edits = rng.gen_range(0..8);
        for _ in 0..edits {
            match rng.gen_range(0..3) {
                0 if !new.is_empty() => {
                    let at = rng.gen_range(0..new.len());
                    new.remove(at);
                }
                1 => {
                    let at = rng.gen_range(0..=new.len());
                    new.insert(at, rng.gen_range(0..6));
                }
                _ if !new.is_empty() => {
                    let at = rng.gen_range(0..new.len());
                    new[at] = rng.gen_range(0..6);
                }
                _ => {}
            }
        }

        check_pair(&old, &new);
    }
}
