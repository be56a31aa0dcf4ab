//! C grammar.
//!
//! Also home to the helpers (identifiers, keyword-with-boundary, hex digits)
//! shared by the other C-family grammars.

use crate::grammar::*;
use crate::scope::{Scope, ScopeRegistry};
use crate::style::StyleTag;

pub(crate) fn whitespace_char() -> Node {
    choice([
        ch(' '),
        ch('\t'),
        ch('\n'),
        ch('\r'),
        ch('\u{b}'),
        ch('\u{c}'),
    ])
}

fn identifier_begin_char() -> Node {
    choice([range('a', 'z'), range('A', 'Z'), ch('_')])
}

pub(crate) fn identifier_char() -> Node {
    choice([range('a', 'z'), range('A', 'Z'), ch('_'), range('0', '9')])
}

pub(crate) fn identifier() -> Node {
    seq([identifier_begin_char(), repeat(identifier_char())])
}

/// A word that must not run into a following identifier character, so that
/// e.g. "if" does not match the prefix of "iffy".
pub(crate) fn keyword(word: &str) -> Node {
    seq([lit(word), not(identifier_char())])
}

pub(crate) fn keywords(words: &[&str]) -> Node {
    Node::Choice(words.iter().map(|word| keyword(word)).collect())
}

pub(crate) fn hex_digit() -> Node {
    choice([range('0', '9'), range('a', 'f'), range('A', 'F')])
}

pub(crate) fn comment() -> Node {
    choice([
        seq([lit("/*"), repeat(but(lit("*/"))), opt(lit("*/"))]),
        seq([lit("//"), repeat(but(ch('\n')))]),
    ])
}

fn escape() -> Node {
    seq([
        ch('\\'),
        choice([
            ch('a'),
            ch('b'),
            ch('t'),
            ch('n'),
            ch('v'),
            ch('f'),
            ch('r'),
            ch('"'),
            ch('\''),
            ch('?'),
            ch('\\'),
            one_or_more(range('0', '7')),
            seq([ch('x'), one_or_more(hex_digit())]),
            seq([ch('u'), one_or_more(hex_digit())]),
            seq([ch('U'), one_or_more(hex_digit())]),
        ]),
    ])
}

fn encoding_prefix() -> Node {
    opt(choice([ch('L'), lit("u8"), ch('u'), ch('U')]))
}

/// Unterminated strings match to end of line, so a half-typed string in an
/// editor buffer does not swallow the rest of the document.
fn string() -> Node {
    seq([
        encoding_prefix(),
        ch('"'),
        repeat(choice([
            highlight(StyleTag::Escape, escape()),
            but(choice([ch('"'), ch('\n')])),
        ])),
        opt(ch('"')),
    ])
}

fn character() -> Node {
    seq([
        encoding_prefix(),
        ch('\''),
        repeat(choice([
            highlight(StyleTag::Escape, escape()),
            but(choice([ch('\''), ch('\n')])),
        ])),
        opt(ch('\'')),
    ])
}

// Digit runs allow ' separators: 1'000'000.

fn digits() -> Node {
    seq([
        range('0', '9'),
        repeat(seq([opt(ch('\'')), range('0', '9')])),
    ])
}

fn hex_digits() -> Node {
    seq([hex_digit(), repeat(seq([opt(ch('\'')), hex_digit()]))])
}

fn binary_digits() -> Node {
    seq([
        range('0', '1'),
        repeat(seq([opt(ch('\'')), range('0', '1')])),
    ])
}

fn number() -> Node {
    seq([
        choice([
            // hex
            seq([
                ch('0'),
                choice([ch('x'), ch('X')]),
                choice([
                    seq([hex_digits(), opt(ch('.')), opt(hex_digits())]),
                    seq([ch('.'), hex_digits()]),
                ]),
                // exponent
                opt(seq([
                    choice([ch('p'), ch('P')]),
                    opt(choice([ch('+'), ch('-')])),
                    digits(),
                ])),
            ]),
            // binary
            seq([ch('0'), choice([ch('b'), ch('B')]), binary_digits()]),
            // decimal or octal
            seq([
                choice([
                    seq([digits(), opt(ch('.')), opt(digits())]),
                    seq([ch('.'), digits()]),
                ]),
                // exponent
                opt(seq([
                    choice([ch('e'), ch('E')]),
                    opt(choice([ch('+'), ch('-')])),
                    digits(),
                ])),
            ]),
        ]),
        // suffix
        repeat(choice([
            ch('u'),
            ch('U'),
            ch('l'),
            ch('L'),
            ch('f'),
            ch('F'),
        ])),
    ])
}

fn preprocessor() -> Node {
    seq([
        ch('#'),
        repeat(choice([ch(' '), ch('\t')])),
        identifier(),
    ])
}

const KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "do", "switch", "case", "default", "goto", "break", "continue",
    "return", "struct", "enum", "union", "typedef", "const", "static", "extern", "inline",
];

const TYPES: &[&str] = &[
    "void", "char", "short", "int", "long", "float", "double", "unsigned", "signed",
];

pub fn scope() -> Scope {
    Scope::new(vec![
        // whitespace
        one_or_more(whitespace_char()),
        // comments
        highlight(StyleTag::Comment, comment()),
        // strings and characters
        highlight(StyleTag::String, string()),
        highlight(StyleTag::String, character()),
        // numbers
        highlight(StyleTag::Literal, number()),
        // keywords
        highlight(StyleTag::Keyword, keywords(KEYWORDS)),
        // types
        highlight(StyleTag::Type, keywords(TYPES)),
        // preprocessor
        highlight(StyleTag::Keyword, preprocessor()),
        // identifiers
        identifier(),
    ])
}

pub fn register(registry: &mut ScopeRegistry) {
    registry.register("c", scope());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkpoint::CheckpointSet;
    use crate::input::StringInput;
    use crate::range::Range;
    use crate::scope::highlight;
    use crate::span::Span;

    fn spans_for(text: &str) -> Vec<Span> {
        let scope = scope();
        let mut input = StringInput::new(text);
        let mut checkpoints = CheckpointSet::new();
        highlight(&scope, &mut input, &mut checkpoints, Range::new(0, text.len()))
    }

    fn style_at(spans: &[Span], pos: usize) -> StyleTag {
        spans.iter().find(|s| s.start <= pos && pos < s.end).unwrap().style
    }

    #[test]
    fn statement_tokenizes() {
        let spans = spans_for("int x = 42; // done");
        assert_eq!(
            spans,
            vec![
                Span::new(0, 3, StyleTag::Type),
                Span::new(3, 8, StyleTag::Default),
                Span::new(8, 10, StyleTag::Literal),
                Span::new(10, 12, StyleTag::Default),
                Span::new(12, 19, StyleTag::Comment),
            ]
        );
    }

    #[test]
    fn escape_highlighted_inside_string() {
        let spans = spans_for("\"a\\n\"");
        assert_eq!(
            spans,
            vec![
                Span::new(0, 2, StyleTag::String),
                Span::new(2, 4, StyleTag::Escape),
                Span::new(4, 5, StyleTag::String),
            ]
        );
    }

    #[test]
    fn octal_escape_in_char_literal() {
        let spans = spans_for("'\\0'");
        assert_eq!(
            spans,
            vec![
                Span::new(0, 1, StyleTag::String),
                Span::new(1, 3, StyleTag::Escape),
                Span::new(3, 4, StyleTag::String),
            ]
        );
    }

    #[test]
    fn number_forms() {
        for text in ["0x1Ful", "0b101", "3.14e-2f", "1'000'000", ".5", "0X.8p3"] {
            let spans = spans_for(text);
            assert_eq!(
                spans,
                vec![Span::new(0, text.len(), StyleTag::Literal)],
                "number: {text}"
            );
        }
    }

    #[test]
    fn keyword_requires_word_boundary() {
        assert_eq!(
            spans_for("iffy"),
            vec![Span::new(0, 4, StyleTag::Default)]
        );
        let spans = spans_for("if(x)");
        assert_eq!(style_at(&spans, 0), StyleTag::Keyword);
        assert_eq!(style_at(&spans, 2), StyleTag::Default);
    }

    #[test]
    fn preprocessor_directive() {
        let spans = spans_for("#include <stdio.h>");
        assert_eq!(style_at(&spans, 0), StyleTag::Keyword);
        assert_eq!(style_at(&spans, 7), StyleTag::Keyword);
        assert_eq!(style_at(&spans, 10), StyleTag::Default);
    }

    #[test]
    fn block_comment_spans_lines() {
        let spans = spans_for("a /* x\ny */ b");
        assert_eq!(style_at(&spans, 4), StyleTag::Comment);
        assert_eq!(style_at(&spans, 8), StyleTag::Comment);
        assert_eq!(style_at(&spans, 12), StyleTag::Default);
    }

    #[test]
    fn unterminated_string_stops_at_newline() {
        let spans = spans_for("\"oops\nint");
        assert_eq!(style_at(&spans, 2), StyleTag::String);
        assert_eq!(style_at(&spans, 6), StyleTag::Type);
    }

    #[test]
    fn prefixed_string() {
        let spans = spans_for("u8\"x\"");
        assert_eq!(spans, vec![Span::new(0, 5, StyleTag::String)]);
    }
}
