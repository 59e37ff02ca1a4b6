use mvel_syntax::SyntaxKind::*;
use mvel_syntax::SyntaxSet;

use super::{delimited, stmts};
use crate::parser::Parser;

/// All binary operators bind equally and associate left by repetition.
const BINARY_OPERATORS: SyntaxSet = SyntaxSet::new([
    PLUS, MINUS, STAR, SLASH, PERCENT, EQ_EQ, BANG_EQ, LT, GT, LT_EQ, GT_EQ, AMP_AMP, PIPE_PIPE,
]);

const ATOMS: SyntaxSet = SyntaxSet::new([NAME, STRING, NUMBER, BOOLEAN, NULL, EMPTY]);

const COMMA_SET: SyntaxSet = SyntaxSet::new([COMMA]);

/// Braced literals double as statement blocks, so `;` separates too.
const ARRAY_SEPARATORS: SyntaxSet = SyntaxSet::new([COMMA, SEMICOLON]);

/// Assignment or flat binary expression. Fails without consuming anything
/// when no primary expression starts here.
pub(super) fn expr(p: &mut Parser<'_>, depth: u32) -> bool {
    let m = p.start();

    if !primary(p, depth) {
        m.abandon(p);
        return false;
    }

    if p.eat(EQ) {
        stmts::statement(p, depth + 1);
        m.complete(p, ASSIGNMENT);
        return true;
    }

    let mut operators = 0;
    while p.at_set(&BINARY_OPERATORS) {
        if operators == p.limits().max_chain {
            p.guard_tripped("operator chain");
            break;
        }
        operators += 1;

        p.advance();
        if !primary(p, depth) {
            break;
        }
    }

    m.complete(p, EXPRESSION);
    true
}

/// Primaries contribute their tokens to the enclosing node; only the
/// expressions nested inside them open nodes of their own.
fn primary(p: &mut Parser<'_>, depth: u32) -> bool {
    match p.peek_kind() {
        kind if ATOMS.contains(kind) => {
            p.advance();
            property_chain(p);

            if p.eat(LEFT_PAREN) {
                delimited(p, depth, RIGHT_PAREN, &COMMA_SET, "argument list", |p, depth| {
                    stmts::statement(p, depth + 1);
                });
            }
            true
        }
        LEFT_PAREN => {
            p.advance();
            stmts::statement(p, depth + 1);
            p.eat(RIGHT_PAREN);
            true
        }
        LEFT_BRACKET => {
            p.advance();
            delimited(p, depth, RIGHT_BRACKET, &COMMA_SET, "list literal", |p, depth| {
                stmts::statement(p, depth + 1);
                if p.eat(COLON) {
                    stmts::statement(p, depth + 1);
                }
            });
            true
        }
        LEFT_BRACE => {
            p.advance();
            delimited(p, depth, RIGHT_BRACE, &ARRAY_SEPARATORS, "array literal", |p, depth| {
                stmts::statement(p, depth + 1);
            });
            true
        }
        _ => false,
    }
}

fn property_chain(p: &mut Parser<'_>) {
    let mut links = 0;

    while p.at(DOT) {
        if links == p.limits().max_chain {
            p.guard_tripped("property chain");
            break;
        }
        links += 1;

        p.advance();
        if !p.eat(NAME) {
            break;
        }
    }
}
