//! An incremental syntax highlighter built on backtracking grammar
//! combinators.
//!
//! Grammars are trees of [`grammar::Node`] combinators. A registered
//! grammar is a [`Scope`]: highlighting drives it over a byte window of the
//! input and produces styled [`Span`]s tiling that window. Checkpoints
//! recorded along the way let later passes resume mid-document instead of
//! re-lexing from the top.
//!
//! # Example
//!
//! ```rust
//! use glint::{CheckpointSet, Range, ScopeRegistry, StringInput, StyleTag, highlight, languages};
//!
//! let mut registry = ScopeRegistry::new();
//! languages::register_all(&mut registry);
//! let scope = registry.get("c").unwrap();
//!
//! let text = "return 42;";
//! let mut input = StringInput::new(text);
//! let mut checkpoints = CheckpointSet::new();
//! let spans = highlight(scope, &mut input, &mut checkpoints, Range::new(0, text.len()));
//!
//! assert_eq!(spans[0].style, StyleTag::Keyword); // "return"
//! assert_eq!(spans[0].range(), Range::new(0, 6));
//! ```

mod checkpoint;
mod cursor;
pub mod grammar;
mod input;
pub mod languages;
mod range;
pub mod render;
mod scope;
mod span;
mod style;

pub use checkpoint::CheckpointSet;
pub use cursor::Cursor;
pub use input::{Input, RopeInput, StringInput};
pub use range::Range;
pub use scope::{Document, Scope, ScopeRegistry, highlight};
pub use span::Span;
pub use style::{Color, MONOKAI, ONE_DARK, Style, StyleTag, Theme, theme_by_name};
