//! Grammar node types and builder functions.
//!
//! Nodes are immutable values composed once during scope registration; all
//! mutable state lives in the cursor. The builders mirror how grammars read
//! on paper: `seq([lit("/*"), repeat(but(lit("*/"))), opt(lit("*/"))])`.

use crate::style::StyleTag;

/// Membership test for a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Any character. End of input satisfies no class, this one included.
    Any,
    /// Exactly one character.
    One(char),
    /// Inclusive character range.
    Range(char, char),
}

impl CharClass {
    pub fn matches(&self, ch: char) -> bool {
        match self {
            CharClass::Any => true,
            CharClass::One(c) => *c == ch,
            CharClass::Range(lo, hi) => *lo <= ch && ch <= *hi,
        }
    }
}

/// One grammar node. See [`Node::matches`](crate::grammar) for the matching
/// and atomicity contract.
#[derive(Debug, Clone)]
pub enum Node {
    /// Consume one character satisfying the class.
    Char(CharClass),
    /// Consume a fixed string.
    Literal(String),
    /// All children in order, or nothing (all-or-nothing AND).
    Sequence(Vec<Node>),
    /// First matching child wins (ordered OR).
    Choice(Vec<Node>),
    /// Child as many times as it matches; always succeeds.
    ///
    /// A child that can match without consuming input makes this loop
    /// forever. That is a grammar-authoring contract, not a runtime check.
    Repeat(Box<Node>),
    /// Child at most once; always succeeds.
    Optional(Box<Node>),
    /// Succeed iff the child fails, consuming nothing either way.
    Not(Box<Node>),
    /// Match the child with the given style active.
    Highlight(StyleTag, Box<Node>),
}

pub fn ch(c: char) -> Node {
    Node::Char(CharClass::One(c))
}

/// One character in the inclusive range `first..=last`.
pub fn range(first: char, last: char) -> Node {
    Node::Char(CharClass::Range(first, last))
}

pub fn any_char() -> Node {
    Node::Char(CharClass::Any)
}

pub fn lit(s: &str) -> Node {
    Node::Literal(s.to_string())
}

pub fn seq<const N: usize>(nodes: [Node; N]) -> Node {
    Node::Sequence(nodes.into())
}

pub fn choice<const N: usize>(nodes: [Node; N]) -> Node {
    Node::Choice(nodes.into())
}

pub fn repeat(child: Node) -> Node {
    Node::Repeat(Box::new(child))
}

pub fn opt(child: Node) -> Node {
    Node::Optional(Box::new(child))
}

pub fn not(child: Node) -> Node {
    Node::Not(Box::new(child))
}

pub fn highlight(style: StyleTag, child: Node) -> Node {
    Node::Highlight(style, Box::new(child))
}

/// Child once, then as many more times as it matches.
pub fn one_or_more(child: Node) -> Node {
    seq([child.clone(), repeat(child)])
}

/// Any single character that does not begin a match of `child`.
pub fn but(child: Node) -> Node {
    seq([not(child), any_char()])
}

/// Succeeds only at end of input, consuming nothing.
pub fn end_of_input() -> Node {
    not(any_char())
}
