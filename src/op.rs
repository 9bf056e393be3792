// model = "claude-opus-4-5"
// created = "2026-02-03"
// modified = "2026-02-04"
// driver = "Isaac Clayton"

//! Edit operations and the scripts that replay them.
//!
//! A diff between two sequences is an ordered list of operations that,
//! when replayed against a working copy of the old sequence, reconstruct
//! the new sequence. The key insight is that operations carry no element
//! values: they only describe *where* the sequences agree and disagree.
//! Whoever replays the script supplies the elements, so the same script
//! type works for characters, list rows, or anything else.
//!
//! We store:
//! - Skip: "the element here appears in both sequences, keep it"
//! - Insert: "copy the next element of the new sequence in here"
//! - Remove: "drop the element here from the old sequence"
//!
//! Replay maintains two cursors. `pos` points into the working sequence,
//! `new_pos` points into the new sequence and only exists so inserts know
//! which element to source. A removal does not advance `pos`: the element
//! to its right slides into the vacated slot.

/// One step of an edit script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    /// The element is present in both sequences. Keep it.
    Skip,
    /// Copy an element from the new sequence into the working sequence.
    Insert,
    /// Drop an element of the old sequence from the working sequence.
    Remove,
}

/// Error returned when a script is replayed against sequences of the
/// wrong length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// The old sequence does not have the length the script was computed for.
    OldLenMismatch { expected: usize, actual: usize },
    /// The new sequence does not have the length the script was computed for.
    NewLenMismatch { expected: usize, actual: usize },
}

/// An ordered list of operations transforming one sequence into another.
///
/// Produced by [`crate::graph::compute_edit_script`]. The script remembers
/// the lengths it was computed for so replay against the wrong sequences
/// fails fast instead of producing garbage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditScript {
    /// The operations, in replay order.
    ops: Vec<Op>,
    /// Length of the old sequence the script was computed for.
    old_len: usize,
    /// Length of the new sequence the script was computed for.
    new_len: usize,
}

impl EditScript {
    /// Wrap a finished operation list. Only the solver builds these.
    pub(crate) fn new(ops: Vec<Op>, old_len: usize, new_len: usize) -> EditScript {
        return EditScript { ops, old_len, new_len };
    }

    /// The operations, in replay order.
    pub fn ops(&self) -> &[Op] {
        return &self.ops;
    }

    /// Total number of operations, skips included.
    pub fn len(&self) -> usize {
        return self.ops.len();
    }

    /// Check if the script contains no operations at all.
    /// Only true when both sequences were empty.
    pub fn is_empty(&self) -> bool {
        return self.ops.is_empty();
    }

    /// Number of edits: inserts plus removes. Skips are free.
    pub fn cost(&self) -> usize {
        return self.ops.iter().filter(|op| **op != Op::Skip).count();
    }

    /// Check if the script changes nothing, i.e. it is all skips.
    pub fn is_identity(&self) -> bool {
        return self.ops.iter().all(|op| *op == Op::Skip);
    }

    /// Length of the old sequence the script was computed for.
    pub fn old_len(&self) -> usize {
        return self.old_len;
    }

    /// Length of the new sequence the script was computed for.
    pub fn new_len(&self) -> usize {
        return self.new_len;
    }

    /// Replay the script, invoking `on_insert(pos, new_pos)` for every
    /// insert and `on_remove(pos)` for every remove.
    ///
    /// The caller is expected to mutate a working copy of the old
    /// sequence: insert the new sequence's element at `new_pos` into the
    /// working sequence at `pos`, or delete the working sequence's
    /// element at `pos`. Callbacks run strictly in script order, on the
    /// calling thread. After the final callback the working sequence
    /// equals the new sequence.
    pub fn apply(&self, mut on_insert: impl FnMut(usize, usize), mut on_remove: impl FnMut(usize)) {
        let mut pos = 0;
        let mut new_pos = 0;
        for op in &self.ops {
            match op {
                Op::Skip => {
                    pos += 1;
                    new_pos += 1;
                }
                Op::Insert => {
                    on_insert(pos, new_pos);
                    pos += 1;
                    new_pos += 1;
                }
                Op::Remove => {
                    on_remove(pos);
                }
            }
        }
    }

    /// Replay the script with fallible callbacks.
    ///
    /// The first callback error is returned immediately and the
    /// remaining operations are not applied. The caller owns whatever
    /// consistency its working sequence needs after a partial replay.
    pub fn try_apply<E>(
        &self,
        mut on_insert: impl FnMut(usize, usize) -> Result<(), E>,
        mut on_remove: impl FnMut(usize) -> Result<(), E>,
    ) -> Result<(), E> {
        let mut pos = 0;
        let mut new_pos = 0;
        for op in &self.ops {
            match op {
                Op::Skip => {
                    pos += 1;
                    new_pos += 1;
                }
                Op::Insert => {
                    on_insert(pos, new_pos)?;
                    pos += 1;
                    new_pos += 1;
                }
                Op::Remove => {
                    on_remove(pos)?;
                }
            }
        }
        return Ok(());
    }

    /// Replay the script over a copy of `old`, sourcing inserts from
    /// `new`, and return the rebuilt sequence.
    ///
    /// Both slices must have the lengths the script was computed for;
    /// otherwise the replay would index out of range, so we reject the
    /// call before touching any element.
    pub fn rebuild<T: Clone>(&self, old: &[T], new: &[T]) -> Result<Vec<T>, ReplayError> {
        if old.len() != self.old_len {
            return Err(ReplayError::OldLenMismatch {
                expected: self.old_len,
                actual: old.len(),
            });
        }
        if new.len() != self.new_len {
            return Err(ReplayError::NewLenMismatch {
                expected: self.new_len,
                actual: new.len(),
            });
        }

        let mut work = old.to_vec();
        let mut pos = 0;
        let mut new_pos = 0;
        for op in &self.ops {
            match op {
                Op::Skip => {
                    pos += 1;
                    new_pos += 1;
                }
                Op::Insert => {
                    work.insert(pos, new[new_pos].clone());
                    pos += 1;
                    new_pos += 1;
                }
                Op::Remove => {
                    work.remove(pos);
                }
            }
        }
        return Ok(work);
    }
}
