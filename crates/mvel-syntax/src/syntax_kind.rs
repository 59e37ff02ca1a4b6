#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxKind {
    LEFT_PAREN,
    RIGHT_PAREN,
    LEFT_BRACKET,
    RIGHT_BRACKET,
    LEFT_BRACE,
    RIGHT_BRACE,
    DOT,
    COMMA,
    SEMICOLON,
    COLON,
    QUESTION,
    AT,

    EQ,
    EQ_EQ,
    BANG,
    BANG_EQ,
    LT,
    LT_EQ,
    GT,
    GT_EQ,
    AMP_AMP,
    PIPE_PIPE,
    PLUS,
    MINUS,
    STAR,
    SLASH,
    PERCENT,

    IF_KW,
    ELSE_KW,
    FOR_KW,
    FOREACH_KW,
    WHILE_KW,
    DO_KW,
    UNTIL_KW,
    RETURN_KW,
    NEW_KW,
    FUNCTION_KW,
    DEF_KW,
    ISDEF_KW,
    WITH_KW,
    ASSERT_KW,

    NAME,
    STRING,
    NUMBER,
    BOOLEAN,
    NULL,
    EMPTY,

    MARKUP_OPEN,
    MARKUP_COMMENT,
    MARKUP_CODE,
    MARKUP_INCLUDE,
    MARKUP_INCLUDE_NAMED,
    MARKUP_FOREACH,
    MARKUP_IF,
    MARKUP_ELSE,
    MARKUP_END,
    MARKUP_DECLARE,

    WHITESPACE,
    LINE_COMMENT,
    BLOCK_COMMENT,

    ERROR,
    EOF,

    ROOT,
    EXPRESSION,
    ASSIGNMENT,
    IF_STMT,
    FOR_STMT,
    WHILE_STMT,
    RETURN_STMT,
    FUNCTION_DEF,
    TEMPLATE_BLOCK,
    STATEMENT,
    TOMBSTONE,
}

use SyntaxKind::*;

/// Reserved words, including the word-shaped literals.
static KEYWORDS: [(&str, SyntaxKind); 19] = [
    ("if", IF_KW),
    ("else", ELSE_KW),
    ("for", FOR_KW),
    ("foreach", FOREACH_KW),
    ("while", WHILE_KW),
    ("do", DO_KW),
    ("until", UNTIL_KW),
    ("return", RETURN_KW),
    ("new", NEW_KW),
    ("function", FUNCTION_KW),
    ("def", DEF_KW),
    ("isdef", ISDEF_KW),
    ("with", WITH_KW),
    ("assert", ASSERT_KW),
    ("true", BOOLEAN),
    ("false", BOOLEAN),
    ("null", NULL),
    ("nil", NULL),
    ("empty", EMPTY),
];

/// Template markup openers. Every entry ends with the region's `{`.
static MARKUP: [(&str, SyntaxKind); 9] = [
    ("@comment{", MARKUP_COMMENT),
    ("@code{", MARKUP_CODE),
    ("@include{", MARKUP_INCLUDE),
    ("@includeNamed{", MARKUP_INCLUDE_NAMED),
    ("@foreach{", MARKUP_FOREACH),
    ("@if{", MARKUP_IF),
    ("@else{", MARKUP_ELSE),
    ("@end{", MARKUP_END),
    ("@declare{", MARKUP_DECLARE),
];

impl SyntaxKind {
    /// Classifies an identifier spelling, returning `None` for plain names.
    pub fn from_keyword(ident: &str) -> Option<Self> {
        KEYWORDS.iter().find(|(text, _)| *text == ident).map(|&(_, kind)| kind)
    }

    /// Longest markup opener that `text` starts with, with its length in bytes.
    pub fn from_markup(text: &str) -> Option<(Self, usize)> {
        MARKUP
            .iter()
            .filter(|(opener, _)| text.starts_with(opener))
            .max_by_key(|(opener, _)| opener.len())
            .map(|&(opener, kind)| (kind, opener.len()))
    }

    pub fn is_trivia(self) -> bool {
        matches!(self, WHITESPACE | LINE_COMMENT | BLOCK_COMMENT)
    }

    pub fn is_keyword(self) -> bool {
        (IF_KW as u16..=ASSERT_KW as u16).contains(&(self as u16))
    }

    pub fn is_literal(self) -> bool {
        matches!(self, STRING | NUMBER | BOOLEAN | NULL | EMPTY)
    }

    /// Markup openers, excluding the bare `@`.
    pub fn is_markup(self) -> bool {
        (MARKUP_OPEN as u16..=MARKUP_DECLARE as u16).contains(&(self as u16))
    }

    pub fn is_node(self) -> bool {
        self as u16 >= ROOT as u16
    }
}
