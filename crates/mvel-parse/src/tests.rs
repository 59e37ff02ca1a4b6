use std::fs;
use std::path::{Path, PathBuf};

use expect_test::expect_file;
use mvel_syntax::SyntaxKind::{self, *};
use mvel_syntax::SyntaxNode;
use proptest::prelude::*;
use text_size::{TextRange, TextSize};

use crate::{Limits, parse, parse_with};

#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct TestCase {
    input: PathBuf,
    expected: PathBuf,
    text: String,
}

impl TestCase {
    fn list() -> Vec<Self> {
        let test_data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data");

        let mut cases = fs::read_dir(&test_data_dir)
            .unwrap_or_else(|err| {
                panic!("Cannot read directory {}: {err}", test_data_dir.display())
            })
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                if path.extension()? == "mvel" {
                    let expected = path.with_extension("ir");
                    let text = fs::read_to_string(&path).ok()?;
                    Some(Self { input: path, expected, text })
                } else {
                    None
                }
            })
            .collect::<Vec<_>>();

        cases.sort();
        cases
    }
}

fn parse_all(text: &str) -> SyntaxNode {
    parse(text, TextRange::up_to(TextSize::of(text)))
}

fn top_level_kinds(root: &SyntaxNode) -> Vec<SyntaxKind> {
    root.children().map(SyntaxNode::kind).collect()
}

fn parse_limited(text: &str, limits: Limits) -> SyntaxNode {
    parse_with(text, TextRange::up_to(TextSize::of(text)), limits)
}

fn ranges(node: &SyntaxNode) -> Vec<TextRange> {
    node.children().map(SyntaxNode::text_range).collect()
}

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

#[test]
fn golden() {
    let test_cases = TestCase::list();
    assert!(!test_cases.is_empty(), "no test data found");

    for case in test_cases {
        let tree = parse_all(&case.text);
        let actual = tree.debug(&case.text).to_string();
        expect_file![&case.expected].assert_eq(&actual);
    }
}

#[test]
fn flat_precedence() {
    let root = parse_all("1 + 2 * 3");

    let [expr] = root.children().collect::<Vec<_>>()[..] else {
        panic!("expected a single expression");
    };
    assert_eq!(expr.kind(), EXPRESSION);

    let significant = expr.tokens().filter(|token| !token.is_trivia()).count();
    assert_eq!(significant, 5);
    assert_eq!(expr.children().count(), 0);
}

#[test]
fn markup_braces_balance() {
    let text = "@code{ a{b}c }";
    let root = parse_all(text);

    assert_eq!(top_level_kinds(&root), [TEMPLATE_BLOCK]);
    let block = root.children().next().unwrap();
    assert_eq!(block.text_range(), TextRange::up_to(TextSize::of(text)));
}

#[test]
fn anonymous_region_after_trivia() {
    let root = parse_all("@ { a }");
    assert_eq!(top_level_kinds(&root), [TEMPLATE_BLOCK]);

    let block = root.children().next().unwrap();
    assert_eq!(block.text_range(), TextRange::new(0.into(), 7.into()));
}

#[test]
fn lone_at_is_a_block() {
    let root = parse_all("@ x");
    assert_eq!(top_level_kinds(&root), [TEMPLATE_BLOCK, EXPRESSION]);

    let block = root.children().next().unwrap();
    assert_eq!(block.children_with_tokens().len(), 1);
}

#[test]
fn loops() {
    let root = parse_all("foreach (item : items) { item }");
    assert_eq!(top_level_kinds(&root), [FOR_STMT]);

    let root = parse_all("for (i = 0; i < 3; i = i + 1) print(i)");
    assert_eq!(top_level_kinds(&root), [FOR_STMT]);

    let root = parse_all("do { x = x + 1 } until (x > 3)");
    assert_eq!(top_level_kinds(&root), [WHILE_STMT]);

    let root = parse_all("while (x) x = next(x)");
    assert_eq!(top_level_kinds(&root), [WHILE_STMT]);
}

#[test]
fn keyword_statements() {
    let root = parse_all("assert a == b; new Foo(); return");
    assert_eq!(top_level_kinds(&root), [STATEMENT, STATEMENT, RETURN_STMT]);
}

#[test]
fn depth_guard() {
    let root = parse_limited("((((((((((x))))))))))", Limits::new(3, 1000));

    assert!(root.depth() <= 3, "depth was {}", root.depth());
    assert_eq!(root.text_range(), range(0, 21));
}

#[test]
fn top_level_guard_keeps_coverage() {
    let text = ";".repeat(500);
    let root = parse_with(&text, TextRange::up_to(TextSize::of(&*text)), Limits::new(1000, 1));

    assert_eq!(root.text_range(), TextRange::up_to(TextSize::of(&*text)));
    assert_eq!(root.descendant_tokens().count(), 500);
}

#[test]
fn noise_ends_argument_list() {
    let root = parse_all("f(# b) c");
    assert_eq!(top_level_kinds(&root), [EXPRESSION, EXPRESSION, EXPRESSION]);
    assert_eq!(ranges(&root), [range(0, 3), range(4, 5), range(7, 8)]);
}

#[test]
fn noise_before_separator_keeps_list_open() {
    let root = parse_all("f(#, b) c");
    assert_eq!(ranges(&root), [range(0, 7), range(8, 9)]);
}

#[test]
fn unclosed_call_in_region_stays_short() {
    let root = parse_all("@code{ f( } x = 1 y = 2");
    assert_eq!(top_level_kinds(&root), [TEMPLATE_BLOCK]);

    let block = root.children().next().unwrap();
    assert_eq!(top_level_kinds(block), [EXPRESSION, ASSIGNMENT, ASSIGNMENT]);
    assert_eq!(ranges(block), [range(7, 11), range(12, 17), range(18, 23)]);
}

#[test]
fn operator_chain_guard() {
    let limits = Limits { max_chain: 2, ..Limits::default() };
    let root = parse_limited("a + b + c + d", limits);

    assert_eq!(top_level_kinds(&root), [EXPRESSION, EXPRESSION]);
    assert_eq!(ranges(&root), [range(0, 9), range(12, 13)]);
}

#[test]
fn property_chain_guard() {
    let limits = Limits { max_chain: 2, ..Limits::default() };
    let root = parse_limited("a.b.c.d", limits);

    assert_eq!(ranges(&root), [range(0, 5), range(6, 7)]);
}

#[test]
fn argument_list_guard() {
    let limits = Limits { max_iterations: 2, ..Limits::default() };
    let root = parse_limited("f(a, b, c) x", limits);

    assert_eq!(ranges(&root), [range(0, 7), range(8, 9), range(11, 12)]);
}

#[test]
fn list_literal_guard() {
    let limits = Limits { max_iterations: 2, ..Limits::default() };
    let root = parse_limited("[1, 2, 3]", limits);

    assert_eq!(ranges(&root), [range(0, 6), range(7, 8)]);
}

#[test]
fn parameter_list_guard() {
    let limits = Limits { max_iterations: 2, ..Limits::default() };
    let root = parse_limited("def f(a, b, c) x", limits);

    assert_eq!(top_level_kinds(&root), [FUNCTION_DEF, EXPRESSION]);
    assert_eq!(ranges(&root), [range(0, 13), range(15, 16)]);

    let def = root.children().next().unwrap();
    assert_eq!(ranges(def), [range(12, 13)]);
}

#[test]
fn region_guard() {
    let limits = Limits { max_region_iterations: 3, ..Limits::default() };
    let root = parse_limited("@code{ a b c d } e", limits);

    assert_eq!(top_level_kinds(&root), [TEMPLATE_BLOCK, EXPRESSION, EXPRESSION]);
    assert_eq!(ranges(&root), [range(0, 12), range(13, 14), range(17, 18)]);
}

#[test]
fn window_is_respected() {
    let text = "xx a = 1 yy";
    let window = TextRange::new(3.into(), 8.into());
    let root = parse(text, window);

    assert_eq!(root.text_range(), window);
    assert_eq!(top_level_kinds(&root), [ASSIGNMENT]);
}

#[test]
fn leading_trivia_stays_in_root() {
    let root = parse_all("  // note\n x");
    assert_eq!(root.text_range().start(), TextSize::from(0));
    assert_eq!(top_level_kinds(&root), [EXPRESSION]);
}

#[test]
fn empty_input() {
    let root = parse_all("");
    assert_eq!(root.kind(), ROOT);
    assert_eq!(root.text_range(), TextRange::empty(0.into()));
    assert!(root.children_with_tokens().is_empty());
}

#[test]
fn deterministic() {
    let text = "@foreach{item : items}@{item.name}@end{} x = [1, 2: 3, {4; 5}]";
    assert_eq!(parse_all(text), parse_all(text));
}

proptest! {
    #[test]
    fn any_input_yields_covering_tree(text in "\\PC{0,64}") {
        let root = parse_all(&text);

        prop_assert_eq!(root.text_range(), TextRange::up_to(TextSize::of(&*text)));
        let rebuilt: String =
            root.descendant_tokens().map(|token| token.text(&text)).collect();
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn unbalanced_punctuation_terminates(
        text in "[(){}\\[\\]@=+;,:. a-z0-9]{0,128}",
    ) {
        let limits = Limits::new(8, 16);
        let root = parse_with(&text, TextRange::up_to(TextSize::of(&*text)), limits);

        prop_assert!(root.depth() <= limits.max_depth);
        prop_assert_eq!(root.text_range(), TextRange::up_to(TextSize::of(&*text)));
    }
}
