//! XML grammar.
//!
//! Tags are structural, so the whole tag is matched as one unit with the
//! attribute list and quoted values re-styled inside it.

use crate::grammar::*;
use crate::scope::{Scope, ScopeRegistry};
use crate::style::StyleTag;

fn comment() -> Node {
    seq([lit("<!--"), repeat(but(lit("-->"))), opt(lit("-->"))])
}

fn white_space() -> Node {
    repeat(choice([ch(' '), ch('\t'), ch('\n'), ch('\r')]))
}

fn name_begin_char() -> Node {
    choice([range('a', 'z'), range('A', 'Z'), ch('_'), ch(':')])
}

fn name_char() -> Node {
    choice([
        range('a', 'z'),
        range('A', 'Z'),
        range('0', '9'),
        ch('_'),
        ch(':'),
        ch('-'),
        ch('.'),
    ])
}

fn name() -> Node {
    seq([name_begin_char(), repeat(name_char())])
}

fn quoted() -> Node {
    choice([
        seq([
            ch('"'),
            repeat(but(choice([ch('"'), ch('\n')]))),
            opt(ch('"')),
        ]),
        seq([
            ch('\''),
            repeat(but(choice([ch('\''), ch('\n')]))),
            opt(ch('\'')),
        ]),
    ])
}

fn attribute() -> Node {
    seq([
        name(),
        white_space(),
        ch('='),
        white_space(),
        highlight(StyleTag::String, quoted()),
        white_space(),
    ])
}

fn open_tag() -> Node {
    seq([
        ch('<'),
        name(),
        white_space(),
        highlight(StyleTag::Type, repeat(attribute())),
        choice([lit("/>"), ch('>')]),
    ])
}

fn close_tag() -> Node {
    seq([lit("</"), name(), white_space(), ch('>')])
}

pub fn scope() -> Scope {
    Scope::new(vec![
        // comments
        highlight(StyleTag::Comment, comment()),
        // tags
        highlight(StyleTag::Keyword, close_tag()),
        highlight(StyleTag::Keyword, open_tag()),
    ])
}

pub fn register(registry: &mut ScopeRegistry) {
    registry.register("xml", scope());
}
