//! Recursive-descent parser for MVEL expressions and templates.
//!
//! Parsing never fails: every input, however malformed, produces a `ROOT`
//! node covering the requested window. Pathological input is cut off by the
//! ceilings in [`Limits`].

use mvel_syntax::SyntaxNode;
use text_size::TextRange;

mod grammar;
mod limits;
mod parser;
#[cfg(test)]
mod tests;

pub use limits::Limits;

/// Parses `text[window]` with the default [`Limits`].
pub fn parse(text: &str, window: TextRange) -> SyntaxNode {
    parse_with(text, window, Limits::default())
}

#[tracing::instrument(level = "debug", skip_all, fields(len = u32::from(window.len())))]
pub fn parse_with(text: &str, window: TextRange, limits: Limits) -> SyntaxNode {
    let mut parser = parser::Parser::new(text, window, limits);
    grammar::root(&mut parser);
    parser.build_tree()
}
