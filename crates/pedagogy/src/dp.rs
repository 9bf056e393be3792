// model = "claude-opus-4-5"
// created = 2026-02-03
// modified = 2026-02-04
// driver = "Isaac Clayton"

//! The textbook dynamic-programming diff.
//!
//! Fills the full Wagner-Fischer table of longest-common-subsequence
//! lengths, then walks it front to back to emit the script. The table
//! is indexed by suffixes, `lcs[i][j]` = LCS length of `old[i..]` and
//! `new[j..]`, so the walk proceeds forward and the script comes out in
//! replay order without a reversal pass.
//!
//! O(W*H) time and space. Fine as a baseline and as ground truth for
//! small inputs; the production wavefront search is the one to use on
//! real data.

use crate::diff_trait::DiffAlgorithm;
use crate::diff_trait::Edit;

/// Full-table Wagner-Fischer diff.
pub struct TableDiff;

impl DiffAlgorithm for TableDiff {
    fn edit_script<F>(&self, old_len: usize, new_len: usize, mut same: F) -> Vec<Edit>
    where
        F: FnMut(usize, usize) -> bool,
    {
        // lcs[i][j] = LCS length of old[i..] and new[j..].
        // The last row and column stay zero: an empty suffix shares
        // nothing with anything.
        let mut lcs = vec![vec![0usize; new_len + 1]; old_len + 1];
        for i in (0..old_len).rev() {
            for j in (0..new_len).rev() {
                lcs[i][j] = if same(i, j) {
                    lcs[i + 1][j + 1] + 1
                } else {
                    lcs[i + 1][j].max(lcs[i][j + 1])
                };
            }
        }

        // Walk the table from (0, 0). Matching elements are always
        // kept; otherwise follow the larger subproblem, dropping before
        // adding on ties.
        let mut script = Vec::with_capacity(old_len + new_len);
        let mut i = 0;
        let mut j = 0;
        while i < old_len && j < new_len {
            if same(i, j) {
                script.push(Edit::Keep);
                i += 1;
                j += 1;
            } else if lcs[i + 1][j] >= lcs[i][j + 1] {
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
