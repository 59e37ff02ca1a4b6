use mvel_syntax::SyntaxKind::{self, *};
use mvel_syntax::SyntaxSet;

use super::{delimited, exprs, templates};
use crate::parser::Parser;

const FOR_HEADER_SEPARATORS: SyntaxSet = SyntaxSet::new([COLON, SEMICOLON]);

/// Parses one statement at nesting `depth`. Returns `false` on a miss; a miss
/// caused by the depth ceiling still consumes one token so callers advance.
pub(crate) fn statement(p: &mut Parser<'_>, depth: u32) -> bool {
    if depth > p.limits().max_depth {
        p.guard_tripped("recursion depth");
        p.advance();
        return false;
    }

    match p.peek_kind() {
        EOF => false,
        IF_KW => {
            if_stmt(p, depth);
            true
        }
        FOR_KW | FOREACH_KW => {
            for_stmt(p, depth);
            true
        }
        WHILE_KW => {
            while_stmt(p, depth);
            true
        }
        DO_KW => {
            do_stmt(p, depth);
            true
        }
        RETURN_KW => {
            keyword_stmt(p, depth, RETURN_STMT);
            true
        }
        DEF_KW | FUNCTION_KW => {
            function_def(p, depth);
            true
        }
        NEW_KW | ASSERT_KW | ISDEF_KW | WITH_KW => {
            keyword_stmt(p, depth, STATEMENT);
            true
        }
        AT => templates::block(p, depth),
        kind if kind.is_markup() => templates::block(p, depth),
        _ => exprs::expr(p, depth),
    }
}

fn if_stmt(p: &mut Parser<'_>, depth: u32) {
    let m = p.start();
    p.advance();

    condition(p, depth);
    statement(p, depth + 1);

    if p.eat(ELSE_KW) {
        statement(p, depth + 1);
    }

    m.complete(p, IF_STMT);
}

/// `for (init; cond; step) body` and `foreach (item : items) body`.
fn for_stmt(p: &mut Parser<'_>, depth: u32) {
    let m = p.start();
    p.advance();

    if p.eat(LEFT_PAREN) {
        delimited(p, depth, RIGHT_PAREN, &FOR_HEADER_SEPARATORS, "loop header", |p, depth| {
            statement(p, depth + 1);
        });
    }
    statement(p, depth + 1);

    m.complete(p, FOR_STMT);
}

fn while_stmt(p: &mut Parser<'_>, depth: u32) {
    let m = p.start();
    p.advance();

    condition(p, depth);
    statement(p, depth + 1);

    m.complete(p, WHILE_STMT);
}

/// `do body while (cond)` and `do body until (cond)`.
fn do_stmt(p: &mut Parser<'_>, depth: u32) {
    let m = p.start();
    p.advance();

    condition(p, depth);
    statement(p, depth + 1);

    if p.eat(WHILE_KW) || p.eat(UNTIL_KW) {
        condition(p, depth);
    }

    m.complete(p, WHILE_STMT);
}

/// A keyword followed by one operand, e.g. `return x` or `assert a == b`.
fn keyword_stmt(p: &mut Parser<'_>, depth: u32, kind: SyntaxKind) {
    let m = p.start();
    p.advance();

    statement(p, depth + 1);

    m.complete(p, kind);
}

fn function_def(p: &mut Parser<'_>, depth: u32) {
    let m = p.start();
    p.advance();

    p.eat(NAME);
    if p.eat(LEFT_PAREN) {
        param_list(p);
        p.eat(RIGHT_PAREN);
    }
    statement(p, depth + 1);

    m.complete(p, FUNCTION_DEF);
}

fn param_list(p: &mut Parser<'_>) {
    let mut iterations = 0;

    while p.at(NAME) {
        if iterations == p.limits().max_iterations {
            p.guard_tripped("parameter list");
            break;
        }
        iterations += 1;

        p.advance();
        if !p.eat(COMMA) {
            break;
        }
    }
}

/// Optional parenthesized condition.
fn condition(p: &mut Parser<'_>, depth: u32) {
    if p.eat(LEFT_PAREN) {
        statement(p, depth + 1);
        p.eat(RIGHT_PAREN);
    }
}
