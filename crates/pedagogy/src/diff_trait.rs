// model = "claude-opus-4-5"
// created = 2026-02-03
// modified = 2026-02-04
// driver = "Isaac Clayton"

//! The DiffAlgorithm trait defines the interface for an edit-script
//! computer.
//!
//! All implementations must provide this interface, enabling:
//! - Conformance testing with shared test suites
//! - Benchmarking across different implementations
//! - Easy swapping of implementations
//!
//! An algorithm sees the two sequences only through their lengths and
//! an equality predicate on index pairs, so the same implementation
//! diffs characters, list rows, or anything else.

/// One step of an edit script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edit {
    /// The elements at both cursors match; keep the element.
    Keep,
    /// Add the element at the new-sequence cursor.
    Add,
    /// Drop the element at the old-sequence cursor.
    Drop,
}

/// An algorithm computing a shortest edit script between two sequences.
///
/// Implementors must return a script that:
/// - Consumes exactly `old_len` elements (Keeps plus Drops)
/// - Produces exactly `new_len` elements (Keeps plus Adds)
/// - Has minimal cost, i.e. `old_len + new_len - 2 * lcs_len` edits
///
/// `same(i, j)` must only be called with `i < old_len` and
/// `j < new_len`.
pub trait DiffAlgorithm {
    /// Compute a shortest edit script turning the old sequence into the
    /// new one.
    fn edit_script<F>(&self, old_len: usize, new_len: usize, same: F) -> Vec<Edit>
    where
        F: FnMut(usize, usize) -> bool;
}

/// Number of edits in a script: Adds plus Drops. Keeps are free.
pub fn cost(script: &[Edit]) -> usize {
    return script.iter().filter(|edit| **edit != Edit::Keep).count();
}

/// Replay a script over a copy of `old`, sourcing Adds from `new`.
///
/// Conformance helper: a correct script rebuilds `new` exactly.
pub fn rebuild<T: Clone>(script: &[Edit], old: &[T], new: &[T]) -> Vec<T> {
    let mut work = old.to_vec();
    let mut pos = 0;
    let mut new_pos = 0;
    for edit in script {
        match edit {
            Edit::Keep => {
                pos += 1;
                new_pos += 1;
            }
            Edit::Add => {
                work.insert(pos, new[new_pos].clone());
                pos += 1;
                new_pos += 1;
            }
            Edit::Drop => {
                work.remove(pos);
            }
        }
    }
    return work;
}
