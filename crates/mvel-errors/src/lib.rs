use std::fmt::Display;

pub use annotate_snippets::Renderer;
use annotate_snippets::{Level, Snippet};
use mvel_syntax::{SyntaxKind, SyntaxNode, SyntaxToken};
pub use text_size::TextRange;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    message: String,
    range: TextRange,
}

impl Diagnostic {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn error(message: impl Into<String>, range: TextRange) -> Self {
        Self { message: message.into(), range }
    }

    pub fn render<'a>(
        &'a self,
        renderer: &'a Renderer,
        path: &'a str,
        text: &'a str,
    ) -> impl Display + 'a {
        let message = Level::Error.title(&self.message).snippet(
            Snippet::source(text)
                .origin(path)
                .annotation(Level::Error.span(self.range.into()).label("here"))
                .fold(true),
        );
        renderer.render(message)
    }
}

/// Reports every `ERROR` token under `root`, in source order.
pub fn collect(root: &SyntaxNode, text: &str) -> Vec<Diagnostic> {
    root.descendant_tokens()
        .filter(|token| token.kind() == SyntaxKind::ERROR)
        .map(|token| Diagnostic::error(describe(token, text), token.text_range()))
        .collect()
}

fn describe(token: &SyntaxToken, text: &str) -> &'static str {
    match token.text(text) {
        "&" => "expected `&&`",
        "|" => "expected `||`",
        error if error.starts_with(['"', '\'']) => "unterminated string literal",
        error if error.starts_with("/*") => "unterminated block comment",
        _ => "unexpected character",
    }
}
