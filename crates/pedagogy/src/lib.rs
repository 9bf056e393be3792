// model = "claude-opus-4-5"
// created = 2026-02-03
// modified = 2026-02-04
// driver = "Isaac Clayton"

//! Educational edit-script implementations and primitives.
//!
//! This crate provides pedagogical implementations of the shortest
//! edit script problem. It is designed for:
//!
//! - Learning how classic diff algorithms work
//! - Comparing algorithm characteristics (memory, performance)
//! - Serving as the ground truth for conformance tests
//!
//! # Implementations
//!
//! | Implementation | Algorithm | Key Feature |
//! |----------------|-----------|-------------|
//! | `TableDiff` | Wagner-Fischer suffix table | Textbook baseline, O(W*H) table |
//! | `MemoDiff` | Memoized recursion | Only touches reachable subproblems |
//!
//! # Primitives
//!
//! The `lcs` module provides `lcs_len`, a two-row longest common
//! subsequence length computation. A script is minimal exactly when its
//! edit count equals `old_len + new_len - 2 * lcs_len`.
//!
//! # Example
//!
//! ```
//! use pedagogy::diff_trait::{cost, DiffAlgorithm, Edit};
//! use pedagogy::dp::TableDiff;
//!
//! let old = b"abc";
//! let new = b"axc";
//! let script = TableDiff.edit_script(old.len(), new.len(), |i, j| old[i] == new[j]);
//! assert_eq!(cost(&script), 2);
//! assert_eq!(script.first(), Some(&Edit::Keep));
//! ```

pub mod diff_trait;
pub mod dp;
pub mod lcs;
pub mod memo;
