//! Input source abstraction.
//!
//! Provides the [`Input`] trait for random-access character reads and two
//! implementations:
//! - [`StringInput`] over a borrowed `&str`
//! - [`RopeInput`] over an owned [`ropey::Rope`] (an editor buffer)
//!
//! Positions are byte offsets; `advance` moves one whole character, so every
//! position ever produced by advancing falls on a UTF-8 boundary.

use ropey::Rope;

/// Random-access character source.
///
/// `get` returns `None` at end of input; no character class matches it, which
/// is what makes `not(any_char())` an end-of-input test.
pub trait Input {
    /// The character at the current position, or `None` at end of input.
    fn get(&self) -> Option<char>;

    /// Move one character forward. No-op at end of input.
    fn advance(&mut self);

    /// Current byte position.
    fn position(&self) -> usize;

    /// Jump to an absolute byte position.
    fn seek(&mut self, pos: usize);

    /// Capture a point to return to. Position is all the state an input has.
    fn save(&self) -> usize {
        self.position()
    }

    /// Rewind to a previously saved point.
    fn restore(&mut self, save: usize) {
        self.seek(save);
    }
}

/// Input over a borrowed string slice.
pub struct StringInput<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> StringInput<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl Input for StringInput<'_> {
    fn get(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.get() {
            self.pos += ch.len_utf8();
        }
    }

    fn position(&self) -> usize {
        self.pos
    }

    fn seek(&mut self, pos: usize) {
        self.pos = pos;
    }
}

/// Input over an owned rope, for highlighting live editor buffers.
pub struct RopeInput {
    rope: Rope,
    pos: usize,
}

impl RopeInput {
    pub fn new(rope: Rope) -> Self {
        Self { rope, pos: 0 }
    }

    pub fn from_str(text: &str) -> Self {
        Self::new(Rope::from_str(text))
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Mutable access for edits. The caller is responsible for notifying the
    /// owning document so stale checkpoints get dropped.
    pub fn rope_mut(&mut self) -> &mut Rope {
        &mut self.rope
    }
}

impl Input for RopeInput {
    fn get(&self) -> Option<char> {
        if self.pos < self.rope.len_bytes() {
            Some(self.rope.char(self.rope.byte_to_char(self.pos)))
        } else {
            None
        }
    }

    fn advance(&mut self) {
        if let Some(ch) = self.get() {
            self.pos += ch.len_utf8();
        }
    }

    fn position(&self) -> usize {
        self.pos
    }

    fn seek(&mut self, pos: usize) {
        self.pos = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_input_walks_bytes() {
        let mut input = StringInput::new("ab");
        assert_eq!(input.get(), Some('a'));
        input.advance();
        assert_eq!(input.position(), 1);
        assert_eq!(input.get(), Some('b'));
        input.advance();
        assert_eq!(input.get(), None);
        input.advance(); // no-op at end
        assert_eq!(input.position(), 2);
    }

    #[test]
    fn string_input_advances_whole_chars() {
        let mut input = StringInput::new("€x");
        assert_eq!(input.get(), Some('€'));
        input.advance();
        assert_eq!(input.position(), 3);
        assert_eq!(input.get(), Some('x'));
    }

    #[test]
    fn save_restore_rewinds() {
        let mut input = StringInput::new("abc");
        input.advance();
        let save = input.save();
        input.advance();
        input.advance();
        input.restore(save);
        assert_eq!(input.position(), 1);
        assert_eq!(input.get(), Some('b'));
    }

    #[test]
    fn rope_input_matches_string_input() {
        let text = "fn main() { let s = \"héllo\"; }";
        let mut a = StringInput::new(text);
        let mut b = RopeInput::from_str(text);
        loop {
            assert_eq!(a.get(), b.get());
            assert_eq!(a.position(), b.position());
            if a.get().is_none() {
                break;
            }
            a.advance();
            b.advance();
        }
    }

    #[test]
    fn rope_input_seek() {
        let mut input = RopeInput::from_str("hello");
        input.seek(3);
        assert_eq!(input.get(), Some('l'));
        input.seek(5);
        assert_eq!(input.get(), None);
    }
}
