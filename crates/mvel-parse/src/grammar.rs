use mvel_syntax::SyntaxKind::{self, *};
use mvel_syntax::SyntaxSet;

use crate::parser::Parser;

mod exprs;
mod stmts;
mod templates;

/// Parses the whole window into a `ROOT` node.
pub(crate) fn root(p: &mut Parser<'_>) {
    let m = p.start();
    let mut iterations = 0;

    while !p.at(EOF) {
        if iterations == p.limits().max_top_level_iterations {
            p.guard_tripped("top level");
            break;
        }
        iterations += 1;

        let before = p.pos();
        if !stmts::statement(p, 1) && p.pos() == before {
            p.advance();
        }
    }

    // Whatever the cap left behind still belongs to the root.
    while !p.at(EOF) {
        p.advance();
    }
    p.flush_trivia();

    m.complete(p, ROOT);
}

/// Parses `element (delim element)* ket` after the opening token was
/// consumed. An element that consumes nothing costs one token and ends the
/// list unless a delimiter follows.
pub(crate) fn delimited(
    p: &mut Parser<'_>,
    depth: u32,
    ket: SyntaxKind,
    delims: &SyntaxSet,
    construct: &'static str,
    mut element: impl FnMut(&mut Parser<'_>, u32),
) {
    let mut iterations = 0;

    while !p.at(ket) && !p.at(EOF) {
        if iterations == p.limits().max_iterations {
            p.guard_tripped(construct);
            break;
        }
        iterations += 1;

        let before = p.pos();
        element(p, depth);
        if p.pos() == before {
            p.advance();
        }

        if !p.eat_set(delims) {
            break;
        }
    }

    p.eat(ket);
}
