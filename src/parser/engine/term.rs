//! PEG terms and their constructors.
//!
//! A [`Term`] is one node of a rule body. Rule references are by name until
//! the grammar is linked, which is what lets rules refer to each other in any
//! order and recurse through each other.

use std::fmt;
use std::ops::{BitOr, Not};

use super::grammar::RuleId;
use crate::parser::syntax_kind::SyntaxKind;

/// Context flags threaded through evaluation and part of every memo key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u8);

impl Flags {
    pub const NONE: Flags = Flags(0);
    /// Struct literals are not allowed (`if`/`while`/`for`/`match` heads)
    pub const NO_STRUCT: Flags = Flags(1);
    /// `let` expressions are allowed (`if`/`while` conditions)
    pub const LET_ALLOWED: Flags = Flags(1 << 1);
    pub const ALL: Flags = Flags(0b11);

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn intersects(self, other: Flags) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl Not for Flags {
    type Output = Flags;

    fn not(self) -> Flags {
        Flags(!self.0 & Self::ALL.0)
    }
}

impl std::ops::BitAnd for Flags {
    type Output = Flags;

    fn bitand(self, rhs: Flags) -> Flags {
        Flags(self.0 & rhs.0)
    }
}

/// Reference to another rule, by name before linking and by id after
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleRef {
    Name(&'static str),
    Id(RuleId),
}

/// One level of a left-associative operator ladder
#[derive(Debug, Clone)]
pub struct Fold {
    pub operand: Term,
    pub tails: Box<[Tail]>,
    /// Maximum number of tails folded (`Some(1)` for non-chaining levels)
    pub max: Option<u16>,
}

/// A trailing operator form: on success the operand so far and the tail's
/// output become the children of a new `kind` node.
#[derive(Debug, Clone)]
pub struct Tail {
    pub kind: SyntaxKind,
    pub body: Term,
}

#[derive(Debug, Clone)]
pub enum Term {
    /// A token of exactly this kind
    Token(SyntaxKind),
    /// This punctuator, or the leading part of a glued one (`>` out of `>>`)
    Split(SyntaxKind),
    /// An identifier with this exact text (`union`, `macro_rules`, ...)
    Contextual(&'static str),
    /// Any token except delimiters and end of file
    AnyToken,
    /// End of input; consumes nothing
    Eof,
    Seq(Box<[Term]>),
    Choice(Box<[Term]>),
    Opt(Box<Term>),
    Star(Box<Term>),
    Plus(Box<Term>),
    And(Box<Term>),
    Not(Box<Term>),
    Ref(RuleRef),
    /// Wrap whatever the inner term produced in a node
    Node(SyntaxKind, Box<Term>),
    /// Evaluate the inner term with flags set and cleared
    With {
        set: Flags,
        clear: Flags,
        term: Box<Term>,
    },
    /// Evaluate the inner term only when `flags` intersect the current flags
    /// exactly when `when_set` is true; fail otherwise
    Gate {
        flags: Flags,
        when_set: bool,
        term: Box<Term>,
    },
    Fold(Box<Fold>),
}

impl Term {
    /// Visit every direct child term mutably
    pub(crate) fn children_mut(&mut self) -> Vec<&mut Term> {
        match self {
            Term::Seq(items) | Term::Choice(items) => items.iter_mut().collect(),
            Term::Opt(t)
            | Term::Star(t)
            | Term::Plus(t)
            | Term::And(t)
            | Term::Not(t)
            | Term::Node(_, t)
            | Term::With { term: t, .. }
            | Term::Gate { term: t, .. } => vec![t.as_mut()],
            Term::Fold(fold) => {
                let Fold { operand, tails, .. } = fold.as_mut();
                let mut out = vec![operand];
                out.extend(tails.iter_mut().map(|t| &mut t.body));
                out
            }
            Term::Token(_)
            | Term::Split(_)
            | Term::Contextual(_)
            | Term::AnyToken
            | Term::Eof
            | Term::Ref(_) => Vec::new(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Token(k) | Term::Split(k) => write!(f, "{k:?}"),
            Term::Contextual(text) => write!(f, "'{text}'"),
            Term::AnyToken => write!(f, "ANY"),
            Term::Eof => write!(f, "EOF"),
            Term::Seq(items) => write_joined(f, items, " "),
            Term::Choice(items) => write_joined(f, items, " | "),
            Term::Opt(t) => write!(f, "({t})?"),
            Term::Star(t) => write!(f, "({t})*"),
            Term::Plus(t) => write!(f, "({t})+"),
            Term::And(t) => write!(f, "&({t})"),
            Term::Not(t) => write!(f, "!({t})"),
            Term::Ref(RuleRef::Name(name)) => write!(f, "{name}"),
            Term::Ref(RuleRef::Id(id)) => write!(f, "#{}", id.index()),
            Term::Node(kind, t) => write!(f, "{kind:?}[{t}]"),
            Term::With { term, .. } | Term::Gate { term, .. } => write!(f, "{term}"),
            Term::Fold(fold) => write!(f, "fold({})", fold.operand),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Term], sep: &str) -> fmt::Result {
    write!(f, "(")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, "{sep}")?;
        }
        write!(f, "{item}")?;
    }
    write!(f, ")")
}

// =============================================================================
// Constructors
// =============================================================================

pub fn tok(kind: SyntaxKind) -> Term {
    Term::Token(kind)
}

pub fn split(kind: SyntaxKind) -> Term {
    Term::Split(kind)
}

pub fn contextual(text: &'static str) -> Term {
    Term::Contextual(text)
}

pub fn any_token() -> Term {
    Term::AnyToken
}

pub fn eof() -> Term {
    Term::Eof
}

/// Matches the empty string
pub fn empty() -> Term {
    Term::Seq(Box::new([]))
}

pub fn r(name: &'static str) -> Term {
    Term::Ref(RuleRef::Name(name))
}

pub fn seq(items: impl Into<Vec<Term>>) -> Term {
    Term::Seq(items.into().into_boxed_slice())
}

pub fn choice(items: impl Into<Vec<Term>>) -> Term {
    Term::Choice(items.into().into_boxed_slice())
}

/// Ordered choice over plain tokens
pub fn any_of(kinds: &[SyntaxKind]) -> Term {
    choice(kinds.iter().copied().map(tok).collect::<Vec<_>>())
}

pub fn opt(term: Term) -> Term {
    Term::Opt(Box::new(term))
}

pub fn star(term: Term) -> Term {
    Term::Star(Box::new(term))
}

pub fn plus(term: Term) -> Term {
    Term::Plus(Box::new(term))
}

pub fn and(term: Term) -> Term {
    Term::And(Box::new(term))
}

pub fn not(term: Term) -> Term {
    Term::Not(Box::new(term))
}

pub fn node(kind: SyntaxKind, term: Term) -> Term {
    Term::Node(kind, Box::new(term))
}

/// `item (sep item)* sep?`
pub fn list(item: Term, sep: SyntaxKind) -> Term {
    seq([item.clone(), star(seq([tok(sep), item])), opt(tok(sep))])
}

/// Evaluate with `flags` added
pub fn with_flags(flags: Flags, term: Term) -> Term {
    Term::With {
        set: flags,
        clear: Flags::NONE,
        term: Box::new(term),
    }
}

/// Evaluate with `flags` removed
pub fn without_flags(flags: Flags, term: Term) -> Term {
    Term::With {
        set: Flags::NONE,
        clear: flags,
        term: Box::new(term),
    }
}

/// Only when any of `flags` is set
pub fn when(flags: Flags, term: Term) -> Term {
    Term::Gate {
        flags,
        when_set: true,
        term: Box::new(term),
    }
}

/// Only when none of `flags` is set
pub fn unless(flags: Flags, term: Term) -> Term {
    Term::Gate {
        flags,
        when_set: false,
        term: Box::new(term),
    }
}

pub fn fold(operand: Term, tails: impl Into<Vec<Tail>>, max: Option<u16>) -> Term {
    Term::Fold(Box::new(Fold {
        operand,
        tails: tails.into().into_boxed_slice(),
        max,
    }))
}

pub fn tail(kind: SyntaxKind, body: Term) -> Tail {
    Tail { kind, body }
}
