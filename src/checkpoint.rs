//! Resume checkpoints for incremental re-highlighting.
//!
//! A scope pass records a checkpoint after every top-level step. Each one
//! claims: "re-matching from `pos` with the default style reproduces what a
//! full pass would produce from `pos` onward, provided nothing changed at or
//! after `pos`, nor in any text the pass looked ahead at while deciding
//! (`max_pos`)". Edits drop every claim they could falsify.

/// One recorded resume point.
#[derive(Debug, Clone, Copy)]
struct Checkpoint {
    /// Safe resume position.
    pos: usize,
    /// Furthest position inspected while producing the match that ended at
    /// `pos`, including backtracked lookahead.
    max_pos: usize,
}

/// Ordered checkpoint store for one document.
///
/// Checkpoints are strictly increasing by `pos`; out-of-order insertions are
/// silently dropped.
#[derive(Debug, Default)]
pub struct CheckpointSet {
    checkpoints: Vec<Checkpoint>,
}

impl CheckpointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a checkpoint, unless it would break monotonicity.
    pub fn add(&mut self, pos: usize, max_pos: usize) {
        if self.checkpoints.last().is_none_or(|c| pos > c.pos) {
            self.checkpoints.push(Checkpoint { pos, max_pos });
        }
    }

    /// Greatest recorded position `<= pos`, or the document start.
    pub fn find(&self, pos: usize) -> usize {
        let index = self.checkpoints.partition_point(|c| c.pos <= pos);
        if index == 0 {
            0
        } else {
            self.checkpoints[index - 1].pos
        }
    }

    /// Invalidate for an edit at `pos`: drop the first checkpoint whose
    /// lookahead reached `pos` and everything after it. Checkpoints whose
    /// derivation never saw the edited text survive.
    pub fn edit(&mut self, pos: usize) {
        if let Some(index) = self.checkpoints.iter().position(|c| c.max_pos >= pos) {
            self.checkpoints.truncate(index);
        }
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }
}
