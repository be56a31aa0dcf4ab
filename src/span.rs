//! Span accumulation: style-boundary events in, merged span list out.
//!
//! The cursor reports "style changed to T at position P" events as matching
//! proceeds. [`SpanBuffer`] folds that stream into the minimal list of
//! non-overlapping spans clipped to the requested window: runs outside the
//! window vanish, runs straddling it are clipped, and adjacent runs with the
//! same tag merge into one span.

use crate::range::Range;
use crate::style::StyleTag;

/// A style-tagged region of the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub style: StyleTag,
}

impl Span {
    pub fn new(start: usize, end: usize, style: StyleTag) -> Self {
        Self { start, end, style }
    }

    pub fn range(&self) -> Range {
        Range::new(self.start, self.end)
    }
}

/// Snapshot of accumulator state, captured by [`SpanBuffer::save`].
///
/// Restoring truncates the emitted list and reopens the run that was open at
/// capture time, which is what makes spans emitted by a since-failed match
/// vanish from the output.
#[derive(Debug, Clone, Copy)]
pub struct SpanSave {
    emitted: usize,
    start: usize,
    style: StyleTag,
}

/// Accumulates spans for one highlighting pass over one window.
pub struct SpanBuffer {
    spans: Vec<Span>,
    window: Range,
    /// Start of the currently open run.
    start: usize,
    /// Style of the currently open run.
    style: StyleTag,
}

impl SpanBuffer {
    pub fn new(window: Range) -> Self {
        Self {
            spans: Vec::new(),
            window,
            start: 0,
            style: StyleTag::Default,
        }
    }

    /// Close the open run at `end`: clip it to the window and either extend
    /// the previous span (same style, contiguous) or push a new one.
    fn emit(&mut self, end: usize) {
        if end <= self.window.start || self.start >= self.window.end {
            return;
        }
        if let Some(last) = self.spans.last_mut()
            && last.end == self.start
            && last.style == self.style
        {
            last.end = end.min(self.window.end);
            return;
        }
        self.spans.push(Span::new(
            self.start.max(self.window.start),
            end.min(self.window.end),
            self.style,
        ));
    }

    /// Record a style boundary at `pos` and return the previous style.
    pub fn change_style(&mut self, pos: usize, style: StyleTag) -> StyleTag {
        if pos != self.start {
            self.emit(pos);
            self.start = pos;
        }
        std::mem::replace(&mut self.style, style)
    }

    pub fn save(&self) -> SpanSave {
        SpanSave {
            emitted: self.spans.len(),
            start: self.start,
            style: self.style,
        }
    }

    pub fn restore(&mut self, save: SpanSave) {
        self.spans.truncate(save.emitted);
        self.start = save.start;
        self.style = save.style;
    }

    /// Finished span list. The caller must have flushed the final open run
    /// (the scope driver does so by forcing the default style at its end
    /// position).
    pub fn into_spans(self) -> Vec<Span> {
        self.spans
    }
}
