//! Python grammar.

use crate::grammar::*;
use crate::scope::{Scope, ScopeRegistry};
use crate::style::StyleTag;

use super::c::{identifier, keyword, keywords};

fn comment() -> Node {
    seq([ch('#'), repeat(but(ch('\n')))])
}

pub fn scope() -> Scope {
    Scope::new(vec![
        // comments
        highlight(StyleTag::Comment, comment()),
        // literals
        highlight(StyleTag::Literal, keywords(&["None", "False", "True"])),
        // definitions highlight the introduced name too
        seq([
            highlight(StyleTag::Keyword, keyword("def")),
            repeat(ch(' ')),
            opt(highlight(StyleTag::Function, identifier())),
        ]),
        seq([
            highlight(StyleTag::Keyword, keyword("class")),
            repeat(ch(' ')),
            opt(highlight(StyleTag::Type, identifier())),
        ]),
        // keywords
        highlight(
            StyleTag::Keyword,
            keywords(&[
                "lambda", "if", "elif", "else", "for", "in", "while", "break", "continue",
                "return", "import",
            ]),
        ),
        // operators
        highlight(StyleTag::Operator, keywords(&["and", "or", "not", "is", "in"])),
    ])
}

pub fn register(registry: &mut ScopeRegistry) {
    registry.register("python", scope());
}
