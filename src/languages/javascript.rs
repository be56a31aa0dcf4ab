//! JavaScript grammar.

use crate::grammar::*;
use crate::scope::{Scope, ScopeRegistry};
use crate::style::StyleTag;

use super::c;

// JavaScript identifiers additionally allow '$'.

fn identifier_begin_char() -> Node {
    choice([range('a', 'z'), range('A', 'Z'), ch('_'), ch('$')])
}

fn identifier_char() -> Node {
    choice([
        range('a', 'z'),
        range('A', 'Z'),
        ch('_'),
        ch('$'),
        range('0', '9'),
    ])
}

fn identifier() -> Node {
    seq([identifier_begin_char(), repeat(identifier_char())])
}

fn keyword(word: &str) -> Node {
    seq([lit(word), not(identifier_char())])
}

fn keywords(words: &[&str]) -> Node {
    Node::Choice(words.iter().map(|word| keyword(word)).collect())
}

fn escape() -> Node {
    seq([ch('\\'), any_char()])
}

fn quoted_string(quote: char) -> Node {
    seq([
        ch(quote),
        repeat(choice([
            highlight(StyleTag::Escape, escape()),
            but(choice([ch(quote), ch('\n')])),
        ])),
        opt(ch(quote)),
    ])
}

fn string() -> Node {
    choice([quoted_string('"'), quoted_string('\'')])
}

fn number() -> Node {
    seq([
        choice([
            // hexadecimal
            seq([ch('0'), choice([ch('x'), ch('X')]), one_or_more(c::hex_digit())]),
            // binary
            seq([ch('0'), choice([ch('b'), ch('B')]), one_or_more(range('0', '1'))]),
            // octal
            seq([ch('0'), choice([ch('o'), ch('O')]), one_or_more(range('0', '7'))]),
            // decimal
            seq([
                choice([
                    seq([
                        one_or_more(range('0', '9')),
                        opt(ch('.')),
                        repeat(range('0', '9')),
                    ]),
                    seq([ch('.'), one_or_more(range('0', '9'))]),
                ]),
                // exponent
                opt(seq([
                    choice([ch('e'), ch('E')]),
                    opt(choice([ch('+'), ch('-')])),
                    one_or_more(range('0', '9')),
                ])),
            ]),
        ]),
        // BigInt suffix
        opt(ch('n')),
    ])
}

const KEYWORDS: &[&str] = &[
    "function", "this", "var", "let", "const", "if", "else", "for", "in", "of", "while", "do",
    "switch", "case", "default", "break", "continue", "try", "catch", "finally", "throw",
    "return", "new", "class", "extends", "static", "import", "export",
];

pub fn scope() -> Scope {
    Scope::new(vec![
        // comments
        highlight(StyleTag::Comment, c::comment()),
        // strings
        highlight(StyleTag::String, string()),
        // numbers
        highlight(StyleTag::Literal, number()),
        // literals
        highlight(StyleTag::Literal, keywords(&["null", "false", "true"])),
        // keywords
        highlight(StyleTag::Keyword, keywords(KEYWORDS)),
        // identifiers
        identifier(),
    ])
}

pub fn register(registry: &mut ScopeRegistry) {
    registry.register("javascript", scope());
}
