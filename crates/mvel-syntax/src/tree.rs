//! Owned syntax tree: one node type tagged by kind, children in source order.

use std::fmt;

use text_size::TextRange;

use crate::SyntaxKind;

/// A leaf of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SyntaxToken {
    kind: SyntaxKind,
    range: TextRange,
}

impl SyntaxToken {
    pub fn new(kind: SyntaxKind, range: TextRange) -> Self {
        Self { kind, range }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    pub fn text_range(&self) -> TextRange {
        self.range
    }

    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }

    /// Slices this token out of the text the tree was parsed from.
    pub fn text<'a>(&self, text: &'a str) -> &'a str {
        &text[self.range]
    }
}

/// An interior node. Owns its children exclusively; there are no parent links.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SyntaxNode {
    kind: SyntaxKind,
    range: TextRange,
    children: Vec<SyntaxElement>,
}

pub type SyntaxElement = NodeOrToken<SyntaxNode, SyntaxToken>;

impl SyntaxNode {
    pub(crate) fn new(kind: SyntaxKind, range: TextRange, children: Vec<SyntaxElement>) -> Self {
        Self { kind, range, children }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.kind
    }

    pub fn text_range(&self) -> TextRange {
        self.range
    }

    pub fn text<'a>(&self, text: &'a str) -> &'a str {
        &text[self.range]
    }

    pub fn children_with_tokens(&self) -> &[SyntaxElement] {
        &self.children
    }

    /// Direct child nodes.
    pub fn children(&self) -> impl Iterator<Item = &SyntaxNode> + '_ {
        self.children.iter().filter_map(NodeOrToken::as_node)
    }

    /// Direct child tokens, trivia included.
    pub fn tokens(&self) -> impl Iterator<Item = &SyntaxToken> + '_ {
        self.children.iter().filter_map(NodeOrToken::as_token)
    }

    pub fn preorder(&self) -> Preorder<'_> {
        Preorder { stack: Vec::with_capacity(32), root: Some(self) }
    }

    /// Every token below this node, in source order.
    pub fn descendant_tokens(&self) -> impl Iterator<Item = &SyntaxToken> + '_ {
        self.preorder().filter_map(|event| match event {
            WalkEvent::Token(token) => Some(token),
            WalkEvent::Enter(_) | WalkEvent::Leave(_) => None,
        })
    }

    /// Maximum number of nested nodes below this one. A node with only
    /// tokens has depth 0.
    pub fn depth(&self) -> u32 {
        let mut current = 0u32;
        let mut max = 0u32;

        for event in self.preorder() {
            match event {
                WalkEvent::Enter(_) => {
                    current += 1;
                    max = max.max(current);
                }
                WalkEvent::Leave(_) => current -= 1,
                WalkEvent::Token(_) => {}
            }
        }

        max.saturating_sub(1)
    }

    /// Indented dump of the tree, one element per line.
    pub fn debug<'a>(&'a self, text: &'a str) -> impl fmt::Display + 'a {
        DebugTree { root: self, text }
    }
}

struct DebugTree<'a> {
    root: &'a SyntaxNode,
    text: &'a str,
}

impl fmt::Display for DebugTree<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut indent = 0;

        for event in self.root.preorder() {
            match event {
                WalkEvent::Enter(node) => {
                    writeln!(f, "{:indent$}{:?}@{:?}", "", node.kind, node.range)?;
                    indent += 2;
                }
                WalkEvent::Leave(_) => indent -= 2,
                WalkEvent::Token(token) => {
                    let text = token.text(self.text);
                    writeln!(f, "{:indent$}{:?}@{:?} {text:?}", "", token.kind, token.range)?;
                }
            }
        }

        Ok(())
    }
}

/// Preorder traversal over nodes and tokens.
#[derive(Clone)]
pub struct Preorder<'a> {
    stack: Vec<(&'a SyntaxNode, std::slice::Iter<'a, SyntaxElement>)>,
    root: Option<&'a SyntaxNode>,
}

/// Preorder walk event.
#[derive(Debug, Clone, Copy)]
pub enum WalkEvent<'a> {
    Enter(&'a SyntaxNode),
    Leave(&'a SyntaxNode),
    Token(&'a SyntaxToken),
}

impl<'a> Iterator for Preorder<'a> {
    type Item = WalkEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.stack.is_empty() {
            let root = self.root.take()?;
            self.stack.push((root, root.children.iter()));
            return Some(WalkEvent::Enter(root));
        }

        let (_, active) = self.stack.last_mut()?;
        match active.next() {
            Some(NodeOrToken::Node(child)) => {
                self.stack.push((child, child.children.iter()));
                Some(WalkEvent::Enter(child))
            }
            Some(NodeOrToken::Token(token)) => Some(WalkEvent::Token(token)),
            None => {
                let (exited, _) = self.stack.pop()?;
                Some(WalkEvent::Leave(exited))
            }
        }
    }
}

/// Node-or-token wrapper used throughout the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeOrToken<N, T> {
    Node(N),
    Token(T),
}

impl<N, T> NodeOrToken<N, T> {
    /// Returns a shared reference to the node, if any.
    pub fn as_node(&self) -> Option<&N> {
        match self {
            NodeOrToken::Node(node) => Some(node),
            NodeOrToken::Token(_) => None,
        }
    }

    /// Returns a shared reference to the token, if any.
    pub fn as_token(&self) -> Option<&T> {
        match self {
            NodeOrToken::Node(_) => None,
            NodeOrToken::Token(token) => Some(token),
        }
    }
}

impl SyntaxElement {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            NodeOrToken::Node(node) => node.kind(),
            NodeOrToken::Token(token) => token.kind(),
        }
    }

    pub fn text_range(&self) -> TextRange {
        match self {
            NodeOrToken::Node(node) => node.text_range(),
            NodeOrToken::Token(token) => token.text_range(),
        }
    }
}
