//! Lowering of the engine's parse tree into a rowan green tree.
//!
//! The engine only records token indices. Here every token's text comes back
//! from the token stream, and the trivia the lexer attached to each token is
//! re-inserted so the tree covers the source text exactly:
//!
//! ```text
//!   tokens:  [ws "fn"] [ws "main"] ...       trivia owned by the next token
//!   tree:    FN
//!             ├─ FN_KW "fn"
//!             ├─ WHITESPACE " "              emitted before the outermost
//!             ├─ NAME                        node starting at that token
//!             │   └─ IDENT "main"
//! ```
//!
//! Pieces of a split punctuator (`>>` closing two generic lists) become
//! separate tokens, each with its own slice of the original text.

use rowan::{GreenNode, GreenNodeBuilder};

use super::engine::ParseNode;
use super::syntax_kind::SyntaxKind;
use super::token::Token;

pub(crate) struct TreeBuilder<'t> {
    tokens: &'t [Token],
    builder: GreenNodeBuilder<'static>,
    /// Tokens before this index have had their leading trivia emitted
    trivia_done: u32,
}

impl<'t> TreeBuilder<'t> {
    pub(crate) fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            builder: GreenNodeBuilder::new(),
            trivia_done: 0,
        }
    }

    /// Build a tree rooted at `root`, whose children are `nodes`. Trailing
    /// trivia and the empty `EOF` token close the root.
    pub(crate) fn build(mut self, root: SyntaxKind, nodes: &[ParseNode]) -> GreenNode {
        self.builder.start_node(root.into());
        for node in nodes {
            self.node(node);
        }
        if let Some(eof) = self.tokens.last() {
            let index = (self.tokens.len() - 1) as u32;
            self.trivia(index);
            self.builder.token(SyntaxKind::EOF.into(), eof.text.as_str());
        }
        self.builder.finish_node();
        self.builder.finish()
    }

    fn node(&mut self, node: &ParseNode) {
        match node {
            ParseNode::Token { index, kind, part } => self.token(*index, *kind, *part),
            ParseNode::Node { kind, children } => {
                if let Some(first) = node.first_pos() {
                    self.trivia(first.index);
                }
                self.builder.start_node((*kind).into());
                for child in children.iter() {
                    self.node(child);
                }
                self.builder.finish_node();
            }
        }
    }

    fn token(&mut self, index: u32, kind: SyntaxKind, part: Option<(u8, u8)>) {
        let Some(token) = self.tokens.get(index as usize) else {
            return;
        };
        self.trivia(index);
        let text = match part {
            Some((start, end)) => token.text.get(start as usize..end as usize).unwrap_or(""),
            None => token.text.as_str(),
        };
        self.builder.token(kind.into(), text);
    }

    /// Emit the leading trivia of every token up to and including `index`
    /// that has not been emitted yet
    fn trivia(&mut self, index: u32) {
        while self.trivia_done <= index {
            let Some(token) = self.tokens.get(self.trivia_done as usize) else {
                return;
            };
            for trivia in &token.trivia {
                self.builder.token(trivia.kind.syntax_kind().into(), trivia.text.as_str());
            }
            self.trivia_done += 1;
        }
    }
}
