//! Intermediate parse tree produced by the evaluator.

use std::sync::Arc;

use crate::parser::syntax_kind::SyntaxKind;

/// A position in the token stream. `offset` is non-zero only inside a glued
/// punctuator that has been partially consumed (after the first `>` of `>>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pos {
    pub index: u32,
    pub offset: u8,
}

impl Pos {
    pub fn new(index: u32, offset: u8) -> Self {
        Self { index, offset }
    }

    pub fn token(index: u32) -> Self {
        Self { index, offset: 0 }
    }

    pub fn is_split(self) -> bool {
        self.offset != 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseNode {
    /// A whole token, or the byte range `part` of one
    Token {
        index: u32,
        kind: SyntaxKind,
        part: Option<(u8, u8)>,
    },
    Node {
        kind: SyntaxKind,
        children: Arc<[ParseNode]>,
    },
}

impl ParseNode {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            ParseNode::Token { kind, .. } | ParseNode::Node { kind, .. } => *kind,
        }
    }

    pub fn children(&self) -> &[ParseNode] {
        match self {
            ParseNode::Token { .. } => &[],
            ParseNode::Node { children, .. } => children,
        }
    }

    /// Position of the first token piece under this node
    pub fn first_pos(&self) -> Option<Pos> {
        match self {
            ParseNode::Token { index, part, .. } => {
                Some(Pos::new(*index, part.map_or(0, |(start, _)| start)))
            }
            ParseNode::Node { children, .. } => children.iter().find_map(ParseNode::first_pos),
        }
    }

    /// Depth-first search for the first node of `kind`
    pub fn find(&self, kind: SyntaxKind) -> Option<&ParseNode> {
        if self.kind() == kind {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find(kind))
    }

    /// Compact S-expression form, used in traces and tests
    pub fn sexpr(&self) -> String {
        let mut out = String::new();
        self.write_sexpr(&mut out);
        out
    }

    fn write_sexpr(&self, out: &mut String) {
        match self {
            ParseNode::Token { kind, .. } => out.push_str(&format!("{kind:?}")),
            ParseNode::Node { kind, children } => {
                out.push_str(&format!("({kind:?}"));
                for child in children.iter() {
                    out.push(' ');
                    child.write_sexpr(out);
                }
                out.push(')');
            }
        }
    }
}
