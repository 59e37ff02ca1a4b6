use drop_bomb::DropBomb;
use mvel_syntax::{Builder, SyntaxKind, SyntaxNode, SyntaxSet};
use mvel_tokenizer::{Token, Tokenizer};
use text_size::{TextRange, TextSize};

use crate::Limits;

/// Event-based parser. Grammar functions only see significant tokens; trivia
/// is queued and emitted in front of the next token or node, so it always
/// lands in the enclosing node rather than at the edge of a child.
pub(crate) struct Parser<'a> {
    window: TextRange,
    tokenizer: Tokenizer<'a>,
    current: Token,
    trivia: Vec<Token>,
    events: Vec<Event>,
    limits: Limits,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(text: &'a str, window: TextRange, limits: Limits) -> Self {
        let mut parser = Self {
            window,
            tokenizer: mvel_tokenizer::tokenize(text, window),
            current: Token { kind: SyntaxKind::EOF, range: TextRange::empty(window.start()) },
            trivia: Vec::new(),
            events: Vec::new(),
            limits,
        };
        parser.bump();
        parser
    }

    pub(crate) fn limits(&self) -> &Limits {
        &self.limits
    }

    pub(crate) fn peek_kind(&self) -> SyntaxKind {
        self.current.kind
    }

    /// Start of the current significant token. Used to detect progress.
    pub(crate) fn pos(&self) -> TextSize {
        self.current.range.start()
    }

    pub(crate) fn at(&self, kind: SyntaxKind) -> bool {
        self.peek_kind() == kind
    }

    pub(crate) fn at_set(&self, set: &SyntaxSet) -> bool {
        set.contains(self.peek_kind())
    }

    pub(crate) fn advance(&mut self) {
        if self.at(SyntaxKind::EOF) {
            return;
        }

        self.flush_trivia();
        self.events.push(Event::Token(self.current));
        self.bump();
    }

    pub(crate) fn eat(&mut self, kind: SyntaxKind) -> bool {
        if !self.at(kind) {
            return false;
        }

        self.advance();
        true
    }

    pub(crate) fn eat_set(&mut self, set: &SyntaxSet) -> bool {
        if !self.at_set(set) {
            return false;
        }

        self.advance();
        true
    }

    pub(crate) fn flush_trivia(&mut self) {
        self.events.extend(self.trivia.drain(..).map(Event::Token));
    }

    pub(crate) fn start(&mut self) -> Marker {
        // Leading trivia of the window stays queued for the root node.
        if !self.events.is_empty() {
            self.flush_trivia();
        }
        let pos = self.events.len() as u32;
        self.events.push(Event::TOMBSTONE);
        Marker::new(pos)
    }

    pub(crate) fn guard_tripped(&self, construct: &'static str) {
        tracing::debug!(construct, offset = u32::from(self.pos()), "parse guard tripped");
    }

    pub(crate) fn build_tree(self) -> SyntaxNode {
        let mut builder = Builder::new(self.window.start());

        for event in self.events {
            match event {
                Event::Start { kind: SyntaxKind::TOMBSTONE } => {}
                Event::Start { kind } => builder.start_node(kind),
                Event::Finish => builder.finish_node(),
                Event::Token(Token { kind, range }) => builder.token(kind, range),
            }
        }

        builder.finish()
    }

    fn bump(&mut self) {
        loop {
            let token = self.tokenizer.next_token();
            if token.kind.is_trivia() {
                self.trivia.push(token);
            } else {
                self.current = token;
                return;
            }
        }
    }
}

enum Event {
    Start { kind: SyntaxKind },
    Token(Token),
    Finish,
}

impl Event {
    const TOMBSTONE: Self = Event::Start { kind: SyntaxKind::TOMBSTONE };
}

pub(crate) struct Marker {
    position: u32,
    bomb: DropBomb,
}

impl Marker {
    fn new(pos: u32) -> Marker {
        Marker {
            position: pos,
            bomb: DropBomb::new("Marker must be either completed or abandoned"),
        }
    }

    pub(crate) fn complete(mut self, p: &mut Parser<'_>, kind: SyntaxKind) {
        self.bomb.defuse();

        match &mut p.events[self.position as usize] {
            Event::Start { kind: slot } => {
                *slot = kind;
            }
            _ => unreachable!(),
        }

        p.events.push(Event::Finish);
    }

    /// Drops the node. Tokens consumed since `start` stay with the parent.
    pub(crate) fn abandon(mut self, p: &mut Parser<'_>) {
        self.bomb.defuse();

        if self.position as usize == p.events.len() - 1 {
            match p.events.pop() {
                Some(Event::Start { kind: SyntaxKind::TOMBSTONE }) => {}
                _ => unreachable!(),
            }
        }
    }
}
