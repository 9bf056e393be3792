// model = "claude-opus-4-5"
// created = 2026-02-03
// modified = 2026-02-04
// driver = "Isaac Clayton"

//! Top-down memoized diff.
//!
//! Computes the same longest-common-subsequence lengths as the full
//! table, but only for subproblems actually reachable from (0, 0). On
//! sequences with long common prefixes this touches a thin band of the
//! grid instead of all of it.
//!
//! The recursion is run on an explicit work list, so deeply nested
//! subproblems cannot overflow the call stack. A cell is pushed back
//! onto the list until every child it depends on has been resolved.

use rustc_hash::FxHashMap;

use crate::diff_trait::DiffAlgorithm;
use crate::diff_trait::Edit;

/// Memoized top-down diff.
pub struct MemoDiff;

impl DiffAlgorithm for MemoDiff {
    fn edit_script<F>(&self, old_len: usize, new_len: usize, mut same: F) -> Vec<Edit>
    where
        F: FnMut(usize, usize) -> bool,
    {
        // memo[(i, j)] = LCS length of old[i..] and new[j..], for every
        // cell reachable from the origin.
        let mut memo: FxHashMap<(usize, usize), usize> = FxHashMap::default();
        let mut work = vec![(0usize, 0usize)];
        while let Some((i, j)) = work.pop() {
            if memo.contains_key(&(i, j)) {
                continue;
            }
            if i == old_len || j == new_len {
                memo.insert((i, j), 0);
                continue;
            }
            if same(i, j) {
                match memo.get(&(i + 1, j + 1)) {
                    Some(&diagonal) => {
                        memo.insert((i, j), diagonal + 1);
                    }
                    None => {
                        work.push((i, j));
                        work.push((i + 1, j + 1));
                    }
                }
            } else {
                match (memo.get(&(i + 1, j)), memo.get(&(i, j + 1))) {
                    (Some(&drop), Some(&add)) => {
                        memo.insert((i, j), drop.max(add));
                    }
                    (drop, add) => {
                        work.push((i, j));
                        if drop.is_none() {
                            work.push((i + 1, j));
                        }
                        if add.is_none() {
                            work.push((i, j + 1));
                        }
                    }
                }
            }
        }

        // Walk the memo from (0, 0); every cell on the walk was
        // resolved above. Same tie-break as TableDiff: drop before add.
        let mut script = Vec::with_capacity(old_len + new_len);
        let mut i = 0;
        let mut j = 0;
        while i < old_len && j < new_len {
            if same(i, j) {
                script.push(Edit::Keep);
                i += 1;
                j += 1;
            } else if memo[&(i + 1, j)] >= memo[&(i, j + 1)] {
                script.push(Edit::Drop);
                i += 1;
            } else {
                script.push(Edit::Add);
                j += 1;
            }
        }
        while i < old_len {
            script.push(Edit::Drop);
            i += 1;
        }
        while j < new_len {
            script.push(Edit::Add);
            j += 1;
        }
        return script;
    }
}
