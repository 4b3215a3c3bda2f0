//! Memoizing PEG engine.
//!
//! ```text
//!   GrammarBuilder ──finish()──► Grammar ──► Evaluator ──► ParseNode tree
//!   (named Terms)     link +               (tokens, memo)
//!                     left-recursion check
//! ```
//!
//! Grammars are data: rule bodies are [`Term`] trees built with the small
//! constructor functions in [`term`]. The engine knows nothing about Rust
//! syntax beyond the token kinds it matches.

mod eval;
mod grammar;
mod memo;
pub mod term;
mod tree;

pub use eval::{EvalError, EvalStats, Evaluator, Failure};
pub use grammar::{Grammar, GrammarBuilder, GrammarError, RuleDef, RuleHandle, RuleId};
pub use memo::{MemoEntry, MemoKey, MemoPool, MemoTable};
pub use term::{Flags, Fold, RuleRef, Tail, Term};
pub use tree::{ParseNode, Pos};
