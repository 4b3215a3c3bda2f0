//! Packrat evaluation of grammar terms over a token stream.
//!
//! The evaluator walks terms recursively, appending finished nodes to one
//! shared output vector. A failing alternative truncates the vector back to
//! where it started, so backtracking never leaves partial nodes behind.
//!
//! ```text
//!   out: [ PATH_EXPR  LITERAL ]        tail `+ 1` matched
//!          ^ mark
//!   wrap(mark, BIN_EXPR)
//!   out: [ BIN_EXPR(PATH_EXPR PLUS LITERAL) ]
//! ```
//!
//! Every rule application is memoized by `(rule, position, flags)`. A memo
//! hit on a rule still in progress means the grammar is left-recursive,
//! which grammar validation rules out; it aborts the process.

use std::cmp::Ordering;
use std::sync::Arc;

use super::grammar::{Grammar, RuleId};
use super::memo::{MemoEntry, MemoKey, MemoTable};
use super::term::{Flags, Fold, RuleRef, Term};
use super::tree::{ParseNode, Pos};
use crate::parser::errors::{Expected, ParseContext};
use crate::parser::keywords::{kind_text, punct_kind};
use crate::parser::syntax_kind::SyntaxKind;
use crate::parser::token::Token;

/// The furthest point any alternative reached before failing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Failure {
    pub pos: Pos,
    pub expected: Vec<Expected>,
    pub context: ParseContext,
}

/// Why evaluation stopped without a tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    Syntax(Failure),
    Budget { steps: u64 },
    /// Rule applications nested deeper than the configured limit
    Depth { depth: u32 },
}

/// Counters reported after a parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalStats {
    /// Rule applications, including memo hits
    pub steps: u64,
    pub memo_entries: usize,
}

pub struct Evaluator<'g, 't> {
    grammar: &'g Grammar,
    tokens: &'t [Token],
    memo: &'t mut MemoTable,
    out: Vec<ParseNode>,
    flags: Flags,
    failure: Failure,
    /// Active contexts with the position their rule started at
    contexts: Vec<(ParseContext, Pos)>,
    /// Inside a negative lookahead; failures there are not reported
    suppress: u32,
    steps: u64,
    max_steps: Option<u64>,
    exhausted: bool,
    /// Rule applications currently on the stack
    depth: u32,
    max_depth: Option<u32>,
    too_deep: bool,
    trace: bool,
}

impl<'g, 't> Evaluator<'g, 't> {
    /// `tokens` must end with the stream's `EOF` token and `memo` must be
    /// empty or already hold entries for this same stream.
    pub fn new(grammar: &'g Grammar, tokens: &'t [Token], memo: &'t mut MemoTable) -> Self {
        debug_assert!(tokens.last().is_some_and(Token::is_eof));
        Self {
            grammar,
            tokens,
            memo,
            out: Vec::new(),
            flags: Flags::NONE,
            failure: Failure::default(),
            contexts: Vec::new(),
            suppress: 0,
            steps: 0,
            max_steps: None,
            exhausted: false,
            depth: 0,
            max_depth: None,
            too_deep: false,
            trace: false,
        }
    }

    pub fn with_max_steps(mut self, max_steps: Option<u64>) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Bound how many rule applications may be active at once. Recursion
    /// follows the nesting of the input, so this caps stack use.
    pub fn with_max_depth(mut self, max_depth: Option<u32>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn stats(&self) -> EvalStats {
        EvalStats {
            steps: self.steps,
            memo_entries: self.memo.len(),
        }
    }

    /// Evaluate `root` from the first token. On success returns the nodes it
    /// produced and the position where it stopped.
    pub fn run(&mut self, root: &Term) -> Result<(Vec<ParseNode>, Pos), EvalError> {
        self.out.clear();
        let result = self.eval(root, Pos::default());
        if self.exhausted {
            return Err(EvalError::Budget { steps: self.steps });
        }
        if self.too_deep {
            let depth = self.max_depth.unwrap_or(self.depth);
            return Err(EvalError::Depth { depth });
        }
        match result {
            Some(end) => Ok((std::mem::take(&mut self.out), end)),
            None => Err(EvalError::Syntax(std::mem::take(&mut self.failure))),
        }
    }

    fn halted(&self) -> bool {
        self.exhausted || self.too_deep
    }

    // =========================================================================
    // Token access
    // =========================================================================

    /// Kind and remaining text of the token at `pos`
    fn view(&self, pos: Pos) -> (SyntaxKind, &'t str) {
        let tokens: &'t [Token] = self.tokens;
        let Some(token) = tokens.get(pos.index as usize) else {
            return (SyntaxKind::EOF, "");
        };
        if !pos.is_split() {
            return (token.kind, token.text.as_str());
        }
        let rest = token.text.get(pos.offset as usize..).unwrap_or("");
        (punct_kind(rest).unwrap_or(SyntaxKind::ERROR), rest)
    }

    /// Consume the rest of the token at `pos` as `kind`
    fn leaf(&mut self, pos: Pos, kind: SyntaxKind) -> Pos {
        let part = if pos.is_split() {
            let len = self.tokens[pos.index as usize].text.len() as u8;
            Some((pos.offset, len))
        } else {
            None
        };
        self.out.push(ParseNode::Token {
            index: pos.index,
            kind,
            part,
        });
        Pos::token(pos.index + 1)
    }

    /// Innermost context whose rule has consumed input before `pos`. A rule
    /// failing on its first token is not yet "in" its construct.
    fn context_at(&self, pos: Pos) -> ParseContext {
        self.contexts
            .iter()
            .rev()
            .find(|(_, start)| *start < pos)
            .map(|(context, _)| *context)
            .unwrap_or_default()
    }

    fn expect(&mut self, pos: Pos, what: Expected) {
        if self.suppress > 0 {
            return;
        }
        match pos.cmp(&self.failure.pos) {
            Ordering::Greater => {
                self.failure.pos = pos;
                self.failure.expected.clear();
                self.failure.expected.push(what);
                self.failure.context = self.context_at(pos);
            }
            Ordering::Equal => {
                if self.failure.expected.is_empty() {
                    self.failure.context = self.context_at(pos);
                }
                if !self.failure.expected.contains(&what) {
                    self.failure.expected.push(what);
                }
            }
            Ordering::Less => {}
        }
    }

    /// Replace the children produced since `mark` by a single node
    fn wrap(&mut self, mark: usize, kind: SyntaxKind) {
        let children: Arc<[ParseNode]> = self.out.drain(mark..).collect();
        self.out.push(ParseNode::Node { kind, children });
    }

    // =========================================================================
    // Terms
    // =========================================================================

    fn eval(&mut self, term: &Term, pos: Pos) -> Option<Pos> {
        match term {
            Term::Token(kind) => self.eval_token(*kind, pos),
            Term::Split(kind) => self.eval_split(*kind, pos),
            Term::Contextual(word) => {
                let (kind, text) = self.view(pos);
                if kind == SyntaxKind::IDENT && text == *word {
                    Some(self.leaf(pos, SyntaxKind::IDENT))
                } else {
                    self.expect(pos, Expected::Word(word));
                    None
                }
            }
            Term::AnyToken => {
                let (kind, _) = self.view(pos);
                if kind.is_open_delim() || kind.is_close_delim() || kind == SyntaxKind::EOF {
                    None
                } else {
                    Some(self.leaf(pos, kind))
                }
            }
            Term::Eof => {
                if self.view(pos).0 == SyntaxKind::EOF {
                    Some(pos)
                } else {
                    self.expect(pos, Expected::Token(SyntaxKind::EOF));
                    None
                }
            }
            Term::Seq(items) => {
                let mark = self.out.len();
                let mut cur = pos;
                for item in items.iter() {
                    match self.eval(item, cur) {
                        Some(next) => cur = next,
                        None => {
                            self.out.truncate(mark);
                            return None;
                        }
                    }
                }
                Some(cur)
            }
            Term::Choice(alts) => {
                let mark = self.out.len();
                for alt in alts.iter() {
                    if let Some(end) = self.eval(alt, pos) {
                        return Some(end);
                    }
                    self.out.truncate(mark);
                }
                None
            }
            Term::Opt(inner) => {
                let mark = self.out.len();
                self.eval(inner, pos).or_else(|| {
                    self.out.truncate(mark);
                    Some(pos)
                })
            }
            Term::Star(inner) => Some(self.repeat(inner, pos)),
            Term::Plus(inner) => {
                let first = self.eval(inner, pos)?;
                Some(self.repeat(inner, first))
            }
            Term::And(inner) => {
                let mark = self.out.len();
                let matched = self.eval(inner, pos).is_some();
                self.out.truncate(mark);
                matched.then_some(pos)
            }
            Term::Not(inner) => {
                let mark = self.out.len();
                self.suppress += 1;
                let matched = self.eval(inner, pos).is_some();
                self.suppress -= 1;
                self.out.truncate(mark);
                (!matched).then_some(pos)
            }
            Term::Ref(reference) => {
                let id = match *reference {
                    RuleRef::Id(id) => id,
                    RuleRef::Name(name) => self.grammar.rule_id(name)?,
                };
                self.eval_rule(id, pos)
            }
            Term::Node(kind, inner) => {
                let mark = self.out.len();
                let end = self.eval(inner, pos)?;
                self.wrap(mark, *kind);
                Some(end)
            }
            Term::With { set, clear, term } => {
                let saved = self.flags;
                self.flags = (saved | *set) & !*clear;
                let result = self.eval(term, pos);
                self.flags = saved;
                result
            }
            Term::Gate {
                flags,
                when_set,
                term,
            } => {
                if self.flags.intersects(*flags) == *when_set {
                    self.eval(term, pos)
                } else {
                    None
                }
            }
            Term::Fold(fold) => self.eval_fold(fold, pos),
        }
    }

    fn eval_token(&mut self, kind: SyntaxKind, pos: Pos) -> Option<Pos> {
        if self.view(pos).0 == kind {
            Some(self.leaf(pos, kind))
        } else {
            self.expect(pos, Expected::Token(kind));
            None
        }
    }

    /// Match `kind` exactly, or as the first piece of a longer glued
    /// punctuator, leaving the rest at a split position
    fn eval_split(&mut self, kind: SyntaxKind, pos: Pos) -> Option<Pos> {
        let (current, rest) = self.view(pos);
        if current == kind {
            return Some(self.leaf(pos, kind));
        }
        let glued = kind_text(kind).filter(|text| rest.len() > text.len() && rest.starts_with(text));
        if let Some(text) = glued {
            let start = pos.offset;
            let end = start + text.len() as u8;
            self.out.push(ParseNode::Token {
                index: pos.index,
                kind,
                part: Some((start, end)),
            });
            return Some(Pos::new(pos.index, end));
        }
        self.expect(pos, Expected::Token(kind));
        None
    }

    /// Greedy repetition; stops at the first failure or empty match
    fn repeat(&mut self, inner: &Term, pos: Pos) -> Pos {
        let mut cur = pos;
        loop {
            let mark = self.out.len();
            match self.eval(inner, cur) {
                Some(next) if next != cur => cur = next,
                _ => {
                    self.out.truncate(mark);
                    return cur;
                }
            }
        }
    }

    fn eval_fold(&mut self, fold: &Fold, pos: Pos) -> Option<Pos> {
        let mark = self.out.len();
        let mut end = self.eval(&fold.operand, pos)?;
        let mut folded: u16 = 0;
        'levels: while fold.max.is_none_or(|max| folded < max) {
            for tail in fold.tails.iter() {
                let tail_mark = self.out.len();
                if let Some(next) = self.eval(&tail.body, end) {
                    self.wrap(mark, tail.kind);
                    end = next;
                    folded += 1;
                    continue 'levels;
                }
                self.out.truncate(tail_mark);
            }
            break;
        }
        Some(end)
    }

    // =========================================================================
    // Rules
    // =========================================================================

    fn eval_rule(&mut self, id: RuleId, pos: Pos) -> Option<Pos> {
        if self.halted() {
            return None;
        }
        self.steps += 1;
        if self.max_steps.is_some_and(|max| self.steps > max) {
            tracing::debug!("step budget exhausted after {} steps", self.steps);
            self.exhausted = true;
            return None;
        }
        if self.max_depth.is_some_and(|max| self.depth >= max) {
            tracing::debug!(depth = self.depth, token = pos.index, "nesting limit reached");
            self.too_deep = true;
            return None;
        }

        let grammar: &'g Grammar = self.grammar;
        let rule = grammar.rule(id);
        let key = MemoKey::new(id, pos, self.flags);
        match self.memo.get(key) {
            Some(MemoEntry::InProgress) => {
                panic!(
                    "rule `{}` re-entered at token {} without consuming input",
                    rule.name, pos.index
                );
            }
            Some(MemoEntry::Failed) => return None,
            Some(MemoEntry::Matched { end, nodes }) => {
                let end = *end;
                let nodes = Arc::clone(nodes);
                self.out.extend(nodes.iter().cloned());
                return Some(end);
            }
            None => {}
        }
        self.memo.insert(key, MemoEntry::InProgress);

        if let Some(context) = rule.context {
            self.contexts.push((context, pos));
        }
        let saved_failure = self.failure.pos;
        let saved_expected = self.failure.expected.len();
        let mark = self.out.len();

        self.depth += 1;
        let result = self.eval(&rule.body, pos);
        self.depth -= 1;
        if rule.context.is_some() {
            self.contexts.pop();
        }

        match result {
            Some(end) => {
                if let Some(kind) = rule.kind {
                    self.wrap(mark, kind);
                }
                let nodes: Arc<[ParseNode]> = self.out[mark..].into();
                if self.trace {
                    tracing::trace!(rule = rule.name, start = pos.index, end = end.index, "matched");
                }
                self.memo.insert(key, MemoEntry::Matched { end, nodes });
            }
            None => {
                self.out.truncate(mark);
                let collapse = rule.label.filter(|_| self.suppress == 0 && self.failure.pos == pos);
                if let Some(label) = collapse {
                    // nothing consumed: report the construct, not its first tokens
                    if saved_failure == pos {
                        self.failure.expected.truncate(saved_expected);
                    } else {
                        self.failure.expected.clear();
                    }
                    self.expect(pos, Expected::Label(label));
                }
                if self.trace {
                    tracing::trace!(rule = rule.name, start = pos.index, "failed");
                }
                self.memo.insert(key, MemoEntry::Failed);
            }
        }
        result
    }
}
