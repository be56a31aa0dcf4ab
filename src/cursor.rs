//! The transactional matching context.
//!
//! A [`Cursor`] binds an input source, a checkpoint store, and a span
//! accumulator to one requested window, and provides the save/restore pair
//! every composite grammar node relies on for atomicity: `restore` rewinds
//! both the input position and the accumulator, so a failed match leaves no
//! trace. It also tracks how far matching ever looked ahead, which bounds
//! checkpoint validity after edits.

use crate::checkpoint::CheckpointSet;
use crate::input::Input;
use crate::range::Range;
use crate::span::{Span, SpanBuffer, SpanSave};
use crate::style::StyleTag;

/// Snapshot of all mutable matching state. Copyable and never kept beyond
/// the match attempt that created it.
#[derive(Debug, Clone, Copy)]
pub struct SavePoint {
    input: usize,
    spans: SpanSave,
}

/// Mutable state for one highlighting pass.
pub struct Cursor<'a> {
    input: &'a mut dyn Input,
    checkpoints: &'a mut CheckpointSet,
    window: Range,
    /// High-water mark of every position inspected so far, including
    /// positions reached by attempts that later backtracked.
    max_pos: usize,
    spans: SpanBuffer,
}

impl<'a> Cursor<'a> {
    pub fn new(
        input: &'a mut dyn Input,
        checkpoints: &'a mut CheckpointSet,
        window: Range,
    ) -> Self {
        Self {
            input,
            checkpoints,
            window,
            max_pos: 0,
            spans: SpanBuffer::new(window),
        }
    }

    /// The character under the cursor, or `None` at end of input.
    pub fn get(&self) -> Option<char> {
        self.input.get()
    }

    /// Consume one character.
    pub fn advance(&mut self) {
        self.input.advance();
    }

    /// Current byte position.
    pub fn position(&self) -> usize {
        self.input.position()
    }

    /// Record a style boundary at the current position; returns the previous
    /// style so a highlight wrapper can reinstate it on exit.
    pub fn change_style(&mut self, style: StyleTag) -> StyleTag {
        self.spans.change_style(self.input.position(), style)
    }

    /// Record a resume checkpoint at the current position.
    pub fn add_checkpoint(&mut self) {
        let pos = self.input.position();
        self.checkpoints.add(pos, self.max_pos.max(pos));
    }

    /// Seek to the best recorded checkpoint at or before the window start.
    pub fn skip_to_checkpoint(&mut self) {
        let pos = self.checkpoints.find(self.window.start);
        self.input.seek(pos);
    }

    /// Sole loop-termination predicate for the scope driver.
    pub fn is_before_window_end(&self) -> bool {
        self.input.position() < self.window.end
    }

    pub fn save(&self) -> SavePoint {
        SavePoint {
            input: self.input.save(),
            spans: self.spans.save(),
        }
    }

    /// Rewind to `save`. The position abandoned here feeds the lookahead
    /// high-water mark: the match inspected text this far even though it
    /// backtracked, so edits up to here can change its outcome.
    pub fn restore(&mut self, save: SavePoint) {
        self.max_pos = self.max_pos.max(self.input.position());
        self.input.restore(save.input);
        self.spans.restore(save.spans);
    }

    /// End the pass: force the style back to default (flushing the final
    /// open run) and yield the accumulated spans.
    pub fn finish(mut self) -> Vec<Span> {
        self.change_style(StyleTag::Default);
        self.spans.into_spans()
    }
}
