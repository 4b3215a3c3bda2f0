//! Rule registry: named rules, linking and static validation.

use indexmap::IndexMap;
use thiserror::Error;

use super::term::{Fold, RuleRef, Term};
use crate::parser::errors::ParseContext;
use crate::parser::syntax_kind::SyntaxKind;

/// Index of a rule inside its [`Grammar`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(u16);

impl RuleId {
    pub(crate) fn new(index: u16) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Grammar construction bugs. These never depend on input text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    #[error("rule `{0}` is defined twice")]
    DuplicateRule(&'static str),
    #[error("rule `{rule}` refers to undefined rule `{target}`")]
    UnknownRule {
        rule: &'static str,
        target: &'static str,
    },
    #[error("left recursion through {}", .0.join(" -> "))]
    LeftRecursion(Vec<&'static str>),
    #[error("too many rules")]
    TooManyRules,
}

#[derive(Debug, Clone)]
pub struct RuleDef {
    pub name: &'static str,
    /// Node wrapping the rule's output; `None` splices it into the caller
    pub kind: Option<SyntaxKind>,
    /// What to call the rule in "expected ..." messages when it fails
    /// without consuming anything
    pub label: Option<&'static str>,
    /// Construct reported as "in ..." for failures inside the rule
    pub context: Option<ParseContext>,
    pub body: Term,
}

/// Builder-side handle for decorating a freshly added rule
pub struct RuleHandle<'a> {
    def: Option<&'a mut RuleDef>,
}

impl RuleHandle<'_> {
    pub fn label(mut self, label: &'static str) -> Self {
        if let Some(def) = self.def.as_deref_mut() {
            def.label = Some(label);
        }
        self
    }

    pub fn context(mut self, context: ParseContext) -> Self {
        if let Some(def) = self.def.as_deref_mut() {
            def.context = Some(context);
        }
        self
    }
}

/// Collects rules in declaration order, then links them into a [`Grammar`].
#[derive(Debug, Default)]
pub struct GrammarBuilder {
    rules: IndexMap<&'static str, RuleDef>,
    errors: Vec<GrammarError>,
}

impl GrammarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A transparent rule
    pub fn rule(&mut self, name: &'static str, body: Term) -> RuleHandle<'_> {
        self.add(name, None, body)
    }

    /// A rule producing a node of `kind`
    pub fn node(&mut self, name: &'static str, kind: SyntaxKind, body: Term) -> RuleHandle<'_> {
        self.add(name, Some(kind), body)
    }

    fn add(&mut self, name: &'static str, kind: Option<SyntaxKind>, body: Term) -> RuleHandle<'_> {
        if self.rules.contains_key(name) {
            self.errors.push(GrammarError::DuplicateRule(name));
            return RuleHandle { def: None };
        }
        let def = RuleDef {
            name,
            kind,
            label: None,
            context: None,
            body,
        };
        let slot = self.rules.entry(name).or_insert(def);
        RuleHandle { def: Some(slot) }
    }

    /// Resolve references and reject left-recursive grammars
    pub fn finish(mut self) -> Result<Grammar, GrammarError> {
        if let Some(err) = self.errors.pop() {
            return Err(err);
        }
        if self.rules.len() > u16::MAX as usize {
            return Err(GrammarError::TooManyRules);
        }

        let ids: IndexMap<&'static str, RuleId> = self
            .rules
            .keys()
            .enumerate()
            .map(|(i, name)| (*name, RuleId::new(i as u16)))
            .collect();

        let mut rules: Vec<RuleDef> = self.rules.into_values().collect();
        for rule in &mut rules {
            link(rule.name, &mut rule.body, &ids)?;
        }

        let grammar = Grammar { rules, ids };
        grammar.check_left_recursion()?;
        tracing::debug!("grammar linked: {} rules", grammar.rules.len());
        Ok(grammar)
    }
}

fn link(
    rule: &'static str,
    term: &mut Term,
    ids: &IndexMap<&'static str, RuleId>,
) -> Result<(), GrammarError> {
    if let Term::Ref(reference) = term {
        if let RuleRef::Name(target) = *reference {
            let id = ids
                .get(target)
                .ok_or(GrammarError::UnknownRule { rule, target })?;
            *reference = RuleRef::Id(*id);
        }
        return Ok(());
    }
    for child in term.children_mut() {
        link(rule, child, ids)?;
    }
    Ok(())
}

/// An immutable, linked set of rules
#[derive(Debug)]
pub struct Grammar {
    rules: Vec<RuleDef>,
    ids: IndexMap<&'static str, RuleId>,
}

impl Grammar {
    pub fn rule(&self, id: RuleId) -> &RuleDef {
        &self.rules[id.index()]
    }

    pub fn rule_id(&self, name: &str) -> Option<RuleId> {
        self.ids.get(name).copied()
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.ids.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn resolve(&self, reference: RuleRef) -> Option<RuleId> {
        match reference {
            RuleRef::Id(id) => Some(id),
            RuleRef::Name(name) => self.rule_id(name),
        }
    }

    /// Rules that can match without consuming input
    fn nullable_rules(&self) -> Vec<bool> {
        let mut nullable = vec![false; self.rules.len()];
        loop {
            let mut changed = false;
            for (i, rule) in self.rules.iter().enumerate() {
                if !nullable[i] && self.is_nullable(&rule.body, &nullable) {
                    nullable[i] = true;
                    changed = true;
                }
            }
            if !changed {
                return nullable;
            }
        }
    }

    fn is_nullable(&self, term: &Term, nullable: &[bool]) -> bool {
        match term {
            Term::Token(_) | Term::Split(_) | Term::Contextual(_) | Term::AnyToken => false,
            Term::Eof | Term::Opt(_) | Term::Star(_) | Term::And(_) | Term::Not(_) => true,
            Term::Seq(items) => items.iter().all(|t| self.is_nullable(t, nullable)),
            Term::Choice(items) => items.iter().any(|t| self.is_nullable(t, nullable)),
            Term::Plus(t) | Term::Node(_, t) => self.is_nullable(t, nullable),
            Term::With { term, .. } | Term::Gate { term, .. } => self.is_nullable(term, nullable),
            Term::Ref(reference) => self
                .resolve(*reference)
                .is_some_and(|id| nullable[id.index()]),
            Term::Fold(fold) => self.is_nullable(&fold.operand, nullable),
        }
    }

    /// Rules `term` may invoke before consuming any token
    fn left_calls(&self, term: &Term, nullable: &[bool], out: &mut Vec<RuleId>) {
        match term {
            Term::Token(_) | Term::Split(_) | Term::Contextual(_) | Term::AnyToken | Term::Eof => {}
            Term::Seq(items) => {
                for item in items.iter() {
                    self.left_calls(item, nullable, out);
                    if !self.is_nullable(item, nullable) {
                        break;
                    }
                }
            }
            Term::Choice(items) => {
                for item in items.iter() {
                    self.left_calls(item, nullable, out);
                }
            }
            Term::Opt(t)
            | Term::Star(t)
            | Term::Plus(t)
            | Term::And(t)
            | Term::Not(t)
            | Term::Node(_, t) => self.left_calls(t, nullable, out),
            Term::With { term, .. } | Term::Gate { term, .. } => {
                self.left_calls(term, nullable, out)
            }
            Term::Ref(reference) => out.extend(self.resolve(*reference)),
            Term::Fold(fold) => {
                let Fold { operand, tails, .. } = fold.as_ref();
                self.left_calls(operand, nullable, out);
                if self.is_nullable(operand, nullable) {
                    for tail in tails.iter() {
                        self.left_calls(&tail.body, nullable, out);
                    }
                }
            }
        }
    }

    fn check_left_recursion(&self) -> Result<(), GrammarError> {
        let nullable = self.nullable_rules();
        let edges: Vec<Vec<RuleId>> = self
            .rules
            .iter()
            .map(|rule| {
                let mut calls = Vec::new();
                self.left_calls(&rule.body, &nullable, &mut calls);
                calls
            })
            .collect();

        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            New,
            Active,
            Done,
        }

        let mut marks = vec![Mark::New; self.rules.len()];
        for start in 0..self.rules.len() {
            if marks[start] != Mark::New {
                continue;
            }
            // iterative DFS; `path` holds the active chain
            let mut path: Vec<(usize, usize)> = vec![(start, 0)];
            marks[start] = Mark::Active;
            while let Some(&mut (node, ref mut next)) = path.last_mut() {
                if let Some(&callee) = edges[node].get(*next) {
                    *next += 1;
                    let callee = callee.index();
                    match marks[callee] {
                        Mark::New => {
                            marks[callee] = Mark::Active;
                            path.push((callee, 0));
                        }
                        Mark::Active => {
                            let mut cycle: Vec<&'static str> = path
                                .iter()
                                .skip_while(|(n, _)| *n != callee)
                                .map(|(n, _)| self.rules[*n].name)
                                .collect();
                            cycle.push(self.rules[callee].name);
                            return Err(GrammarError::LeftRecursion(cycle));
                        }
                        Mark::Done => {}
                    }
                } else {
                    marks[node] = Mark::Done;
                    path.pop();
                }
            }
        }
        Ok(())
    }
}
