//! Incremental builder for the owned syntax tree.

use text_size::{TextRange, TextSize};

use crate::{NodeOrToken, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

struct Opened {
    kind: SyntaxKind,
    start: TextSize,
    children: Vec<SyntaxElement>,
}

/// Builds a `SyntaxNode` from a balanced sequence of start/token/finish calls.
pub struct Builder {
    opened: Vec<Opened>,
    finished: Option<SyntaxNode>,
    offset: TextSize,
}

impl Builder {
    /// `offset` is where the first node begins; nodes that end up without
    /// tokens get an empty range at the offset they were started at.
    pub fn new(offset: TextSize) -> Self {
        Self { opened: Vec::with_capacity(16), finished: None, offset }
    }

    pub fn start_node(&mut self, kind: SyntaxKind) {
        self.opened.push(Opened { kind, start: self.offset, children: Vec::new() });
    }

    pub fn token(&mut self, kind: SyntaxKind, range: TextRange) {
        self.offset = range.end();
        let parent = self.opened.last_mut().expect("token outside of any node");
        parent.children.push(NodeOrToken::Token(SyntaxToken::new(kind, range)));
    }

    pub fn finish_node(&mut self) {
        let Opened { kind, start, children } = self.opened.pop().expect("unbalanced finish_node");

        let range = match (children.first(), children.last()) {
            (Some(first), Some(last)) => {
                TextRange::new(first.text_range().start(), last.text_range().end())
            }
            _ => TextRange::empty(start),
        };

        let node = SyntaxNode::new(kind, range, children);
        match self.opened.last_mut() {
            Some(parent) => parent.children.push(NodeOrToken::Node(node)),
            None => self.finished = Some(node),
        }
    }

    pub fn finish(self) -> SyntaxNode {
        assert!(self.opened.is_empty(), "unfinished nodes left in the builder");
        self.finished.expect("no node was built")
    }
}
