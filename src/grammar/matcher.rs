//! The backtracking matcher.
//!
//! Every node obeys one contract: on success the cursor has advanced past
//! the consumed text and any implied spans are recorded; on failure the
//! cursor position and the accumulated spans are exactly as they were before
//! the call, however much internal backtracking happened. Composites lean on
//! the children's own atomicity; `Choice` needs no explicit restore because
//! a failed child already undid itself.

use crate::cursor::Cursor;
use crate::style::StyleTag;

use super::node::Node;

impl Node {
    /// Attempt a match at the cursor's current position.
    pub fn matches(&self, cursor: &mut Cursor<'_>) -> bool {
        match self {
            Node::Char(class) => {
                if let Some(ch) = cursor.get()
                    && class.matches(ch)
                {
                    cursor.advance();
                    true
                } else {
                    false
                }
            }
            Node::Literal(text) => {
                let save = cursor.save();
                for expected in text.chars() {
                    if cursor.get() == Some(expected) {
                        cursor.advance();
                    } else {
                        cursor.restore(save);
                        return false;
                    }
                }
                true
            }
            Node::Sequence(children) => {
                let save = cursor.save();
                for child in children {
                    if !child.matches(cursor) {
                        cursor.restore(save);
                        return false;
                    }
                }
                true
            }
            Node::Choice(children) => children.iter().any(|child| child.matches(cursor)),
            Node::Repeat(child) => {
                while child.matches(cursor) {}
                true
            }
            Node::Optional(child) => {
                child.matches(cursor);
                true
            }
            Node::Not(child) => {
                let save = cursor.save();
                if child.matches(cursor) {
                    cursor.restore(save);
                    false
                } else {
                    true
                }
            }
            Node::Highlight(style, child) => {
                if *style == StyleTag::Inherit {
                    return child.matches(cursor);
                }
                let old_style = cursor.change_style(*style);
                let matched = child.matches(cursor);
                cursor.change_style(old_style);
                matched
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::node::*;
    use crate::checkpoint::CheckpointSet;
    use crate::cursor::Cursor;
    use crate::input::StringInput;
    use crate::range::Range;
    use crate::span::Span;
    use crate::style::StyleTag;

    /// Run `node` against `text` from position 0; return (matched, end pos).
    fn try_match(node: &Node, text: &str) -> (bool, usize) {
        let mut input = StringInput::new(text);
        let mut checkpoints = CheckpointSet::new();
        let mut cursor = Cursor::new(&mut input, &mut checkpoints, Range::new(0, text.len()));
        let matched = node.matches(&mut cursor);
        (matched, cursor.position())
    }

    /// Like `try_match` but also flush and return the emitted spans.
    fn match_spans(node: &Node, text: &str) -> (bool, Vec<Span>) {
        let mut input = StringInput::new(text);
        let mut checkpoints = CheckpointSet::new();
        let mut cursor = Cursor::new(&mut input, &mut checkpoints, Range::new(0, text.len()));
        let matched = node.matches(&mut cursor);
        (matched, cursor.finish())
    }

    // --- Primitives ---

    #[test]
    fn char_advances_on_match() {
        assert_eq!(try_match(&ch('a'), "abc"), (true, 1));
        assert_eq!(try_match(&ch('x'), "abc"), (false, 0));
    }

    #[test]
    fn char_fails_at_end_of_input() {
        assert_eq!(try_match(&any_char(), ""), (false, 0));
    }

    #[test]
    fn range_is_inclusive() {
        assert_eq!(try_match(&range('a', 'z'), "m"), (true, 1));
        assert_eq!(try_match(&range('a', 'z'), "M"), (false, 0));
    }

    #[test]
    fn literal_matches_whole_string() {
        assert_eq!(try_match(&lit("for"), "for(;;)"), (true, 3));
    }

    #[test]
    fn literal_mismatch_restores_position() {
        // "fo" consumed before the mismatch; failure must rewind to 0.
        assert_eq!(try_match(&lit("for"), "fox"), (false, 0));
    }

    #[test]
    fn literal_truncated_by_end_of_input() {
        assert_eq!(try_match(&lit("for"), "fo"), (false, 0));
    }

    #[test]
    fn empty_literal_matches_nothing_successfully() {
        assert_eq!(try_match(&lit(""), "abc"), (true, 0));
    }

    // --- Sequence ---

    #[test]
    fn sequence_is_all_or_nothing() {
        let node = seq([lit("ab"), ch('c')]);
        assert_eq!(try_match(&node, "abc"), (true, 3));
        // First child succeeds, second fails: position must be back at 0.
        assert_eq!(try_match(&node, "abd"), (false, 0));
    }

    #[test]
    fn empty_sequence_always_matches() {
        assert_eq!(try_match(&seq([]), "abc"), (true, 0));
    }

    // --- Choice ---

    #[test]
    fn choice_takes_first_match_even_if_shorter() {
        let node = choice([lit("a"), lit("ab")]);
        assert_eq!(try_match(&node, "ab"), (true, 1));
    }

    #[test]
    fn choice_falls_through_failed_alternatives() {
        let node = choice([lit("x"), lit("y"), lit("ab")]);
        assert_eq!(try_match(&node, "ab"), (true, 2));
    }

    #[test]
    fn empty_choice_fails() {
        assert_eq!(try_match(&choice([]), "abc"), (false, 0));
    }

    // --- Repetition / Optional ---

    #[test]
    fn repeat_consumes_greedily_and_always_succeeds() {
        assert_eq!(try_match(&repeat(range('0', '9')), "123x"), (true, 3));
        assert_eq!(try_match(&repeat(range('0', '9')), "xyz"), (true, 0));
    }

    #[test]
    fn optional_consumes_only_on_match() {
        assert_eq!(try_match(&opt(ch('-')), "-5"), (true, 1));
        assert_eq!(try_match(&opt(ch('-')), "5"), (true, 0));
    }

    // --- Negative lookahead ---

    #[test]
    fn not_consumes_nothing_either_way() {
        assert_eq!(try_match(&not(lit("ab")), "ab"), (false, 0));
        assert_eq!(try_match(&not(lit("ab")), "ax"), (true, 0));
    }

    #[test]
    fn but_consumes_one_non_matching_char() {
        let node = but(lit("*/"));
        assert_eq!(try_match(&node, "ab"), (true, 1));
        assert_eq!(try_match(&node, "*/"), (false, 0));
        // '*' alone is fine; only the full terminator is excluded.
        assert_eq!(try_match(&node, "*a"), (true, 1));
    }

    #[test]
    fn end_of_input_only_at_end() {
        assert_eq!(try_match(&end_of_input(), ""), (true, 0));
        assert_eq!(try_match(&end_of_input(), "a"), (false, 0));
    }

    // --- Highlight ---

    #[test]
    fn highlight_emits_span_on_success() {
        let node = highlight(StyleTag::Keyword, lit("if"));
        let (matched, spans) = match_spans(&node, "if");
        assert!(matched);
        assert_eq!(spans, vec![Span::new(0, 2, StyleTag::Keyword)]);
    }

    #[test]
    fn highlight_restores_enclosing_style() {
        let node = seq([highlight(StyleTag::Keyword, lit("if")), lit("(x")]);
        let (matched, spans) = match_spans(&node, "if(x");
        assert!(matched);
        assert_eq!(
            spans,
            vec![
                Span::new(0, 2, StyleTag::Keyword),
                Span::new(2, 4, StyleTag::Default),
            ]
        );
    }

    #[test]
    fn failed_highlight_leaves_no_spans() {
        // The keyword matches and emits, then the sequence fails overall;
        // the rollback must erase the keyword span too.
        let node = seq([highlight(StyleTag::Keyword, lit("if")), ch('!')]);
        let (matched, spans) = match_spans(&node, "if(x");
        assert!(!matched);
        assert!(spans.is_empty());
    }

    #[test]
    fn nested_highlights_restore_outer_style() {
        // String wrapping an escape: the text after the escape must revert
        // to the string style, not default.
        let node = highlight(
            StyleTag::String,
            seq([
                ch('"'),
                ch('a'),
                highlight(StyleTag::Escape, lit("\\n")),
                ch('b'),
                ch('"'),
            ]),
        );
        let (matched, spans) = match_spans(&node, "\"a\\nb\"");
        assert!(matched);
        assert_eq!(
            spans,
            vec![
                Span::new(0, 2, StyleTag::String),
                Span::new(2, 4, StyleTag::Escape),
                Span::new(4, 6, StyleTag::String),
            ]
        );
    }

    #[test]
    fn inherit_highlight_is_transparent() {
        let node = highlight(
            StyleTag::Keyword,
            seq([ch('a'), highlight(StyleTag::Inherit, ch('b')), ch('c')]),
        );
        let (matched, spans) = match_spans(&node, "abc");
        assert!(matched);
        assert_eq!(spans, vec![Span::new(0, 3, StyleTag::Keyword)]);
    }

    // --- Atomicity under deep nesting ---

    #[test]
    fn deeply_nested_failure_is_atomic() {
        // A long partial match through nested combinators, then failure at
        // the last character: everything must rewind.
        let node = seq([
            highlight(
                StyleTag::Comment,
                seq([lit("/*"), repeat(but(lit("*/"))), lit("*/")]),
            ),
            ch('!'),
        ]);
        let (matched, spans) = match_spans(&node, "/* comment */x");
        assert!(!matched);
        assert!(spans.is_empty());

        let (_, pos) = try_match(&node, "/* comment */x");
        assert_eq!(pos, 0);
    }
}
