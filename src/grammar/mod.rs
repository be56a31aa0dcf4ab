//! Grammar combinator engine.
//!
//! A grammar is a tree of immutable [`Node`] values built once at scope
//! registration. Matching is recursive descent with backtracking over a
//! [`Cursor`](crate::Cursor); a failed node leaves cursor and span
//! state untouched (the atomic-match contract in [`matcher`]).
//!
//! # Builders
//!
//! | Builder            | Matches                                          |
//! |--------------------|--------------------------------------------------|
//! | `ch('x')`          | The character `x`                                |
//! | `range('a', 'z')`  | One character in the inclusive range             |
//! | `any_char()`       | Any one character (fails only at end of input)   |
//! | `lit("if")`        | The exact string                                 |
//! | `seq([..])`        | All in order, or nothing                         |
//! | `choice([..])`     | First alternative that matches (order matters)   |
//! | `repeat(x)`        | `x` zero or more times, greedy; always succeeds  |
//! | `opt(x)`           | `x` at most once; always succeeds                |
//! | `not(x)`           | Succeeds iff `x` fails; never consumes           |
//! | `highlight(t, x)`  | `x`, with style tag `t` active while it matches  |
//! | `one_or_more(x)`   | `x` then `repeat(x)`                             |
//! | `but(x)`           | Any one character not starting a match of `x`    |
//! | `end_of_input()`   | `not(any_char())`                                |
//!
//! `repeat` of a node that can succeed without consuming (e.g. `opt`,
//! another `repeat`, an empty literal) loops forever. This is a
//! grammar-authoring contract; the engine does not detect it.

pub mod matcher;
pub mod node;

pub use node::{
    CharClass, Node, any_char, but, ch, choice, end_of_input, highlight, lit, not, one_or_more,
    opt, range, repeat, seq,
};
