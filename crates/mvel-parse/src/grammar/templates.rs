use mvel_syntax::SyntaxKind::*;

use super::stmts;
use crate::parser::Parser;

/// A markup block: an opener such as `@code{` (or `@` followed by `{`), a body
/// of ordinary statements, and the `}` that brings the brace depth back to 0.
pub(super) fn block(p: &mut Parser<'_>, depth: u32) -> bool {
    let m = p.start();

    match p.peek_kind() {
        MARKUP_END => {
            p.advance();
            p.eat(RIGHT_BRACE);
        }
        AT => {
            p.advance();
            if p.eat(LEFT_BRACE) {
                region_body(p, depth);
            }
        }
        _ => {
            p.advance();
            region_body(p, depth);
        }
    }

    m.complete(p, TEMPLATE_BLOCK);
    true
}

/// Braces are counted here rather than matched by the grammar, which lets
/// the body hold stray braces without closing the region early.
fn region_body(p: &mut Parser<'_>, depth: u32) {
    let mut braces = 1u32;
    let mut iterations = 0;

    while !p.at(EOF) {
        if iterations == p.limits().max_region_iterations {
            p.guard_tripped("markup region");
            break;
        }
        iterations += 1;

        match p.peek_kind() {
            LEFT_BRACE => {
                braces += 1;
                p.advance();
            }
            RIGHT_BRACE => {
                braces -= 1;
                p.advance();
                if braces == 0 {
                    break;
                }
            }
            _ => {
                let before = p.pos();
                if !stmts::statement(p, depth + 1) && p.pos() == before {
                    p.advance();
                }
            }
        }
    }
}
