//! Named scopes and the windowed highlighting driver.
//!
//! A [`Scope`] is a registered grammar: an ordered list of top-level
//! alternatives plus the driving loop. One pass resumes at the best
//! checkpoint at or before the window start, then repeatedly tries the
//! alternatives in order; when none matches it consumes one raw character
//! with no style, so every document highlights fully no matter how little
//! the grammar covers. A checkpoint is recorded after every step; at those
//! points the active style is always back at the scope's baseline, which is
//! what makes resuming from them sound.

use std::collections::HashMap;

use crate::checkpoint::CheckpointSet;
use crate::cursor::Cursor;
use crate::grammar::Node;
use crate::input::Input;
use crate::range::Range;
use crate::span::Span;

/// A named top-level grammar: ordered alternatives, first match wins.
pub struct Scope {
    alternatives: Vec<Node>,
}

impl Scope {
    pub fn new(alternatives: Vec<Node>) -> Self {
        Self { alternatives }
    }

    /// One driver step: the alternatives as an ordered choice, falling back
    /// to one raw character. Fails only at end of input.
    fn step(&self, cursor: &mut Cursor<'_>) -> bool {
        if self.alternatives.iter().any(|alt| alt.matches(cursor)) {
            return true;
        }
        if cursor.get().is_some() {
            cursor.advance();
            true
        } else {
            false
        }
    }

    /// Drive the scope over the cursor's window.
    pub fn run(&self, cursor: &mut Cursor<'_>) {
        cursor.skip_to_checkpoint();
        while cursor.is_before_window_end() && self.step(cursor) {
            cursor.add_checkpoint();
        }
    }
}

/// Registry of scopes by name.
///
/// Populate once at startup (see [`crate::languages::register_all`]), read
/// thereafter. Registering an existing name replaces it.
#[derive(Default)]
pub struct ScopeRegistry {
    scopes: HashMap<String, Scope>,
}

impl ScopeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, scope: Scope) {
        self.scopes.insert(name.into(), scope);
    }

    pub fn get(&self, name: &str) -> Option<&Scope> {
        self.scopes.get(name)
    }

    /// Registered scope names in alphabetical order.
    pub fn sorted_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.scopes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

/// Highlight one window of `input`, reusing and extending `checkpoints`.
///
/// `window.start <= window.end <= input length` is the caller's contract.
/// The returned spans tile exactly `[window.start, window.end)` in order,
/// non-overlapping and maximally merged. Matching is not confined to the
/// window: matches may begin before `window.start` (when resuming) and run
/// past `window.end`; only the clipped spans are reported.
pub fn highlight(
    scope: &Scope,
    input: &mut dyn Input,
    checkpoints: &mut CheckpointSet,
    window: Range,
) -> Vec<Span> {
    let mut cursor = Cursor::new(input, checkpoints, window);
    scope.run(&mut cursor);
    cursor.finish()
}

/// One open document: an input source plus its checkpoint store.
///
/// This is the unit of exclusive ownership: at most one pass runs against a
/// document at a time, since passes mutate the checkpoint store in place.
/// Independent documents are fully independent.
pub struct Document<I: Input> {
    input: I,
    checkpoints: CheckpointSet,
}

impl<I: Input> Document<I> {
    pub fn new(input: I) -> Self {
        Self {
            input,
            checkpoints: CheckpointSet::new(),
        }
    }

    /// Highlight one window, reusing checkpoints from earlier passes.
    pub fn highlight(&mut self, scope: &Scope, window: Range) -> Vec<Span> {
        highlight(scope, &mut self.input, &mut self.checkpoints, window)
    }

    /// Must be called after any text change at or after `pos`, before the
    /// next highlighting pass. A missed notification is a logic error: later
    /// passes may silently resume from a stale checkpoint and produce wrong
    /// (but well-formed) spans.
    pub fn notify_edit(&mut self, pos: usize) {
        self.checkpoints.edit(pos);
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }
}
