// model = "claude-opus-4-5"
// created = "2026-02-03"
// modified = "2026-02-04"
// driver = "Isaac Clayton"

//! Reweave - minimal edit scripts between ordered sequences.
//!
//! # Quick Start
//!
//! ```
//! use reweave::graph::diff_slices;
//!
//! // Diff two sequences.
//! let old = b"ABCABBA";
//! let new = b"CBABAC";
//! let script = diff_slices(old, new);
//!
//! // Five edits is the minimum: the sequences share a four-element
//! // common subsequence.
//! assert_eq!(script.cost(), 5);
//!
//! // Replaying the script over the old sequence rebuilds the new one.
//! let rebuilt = script.rebuild(old, new).unwrap();
//! assert_eq!(rebuilt, new);
//! ```

pub mod graph;
pub mod op;
