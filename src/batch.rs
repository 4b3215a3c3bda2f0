//! Parallel parsing of many in-memory sources.
//!
//! Files are independent: each worker takes a memo table from a shared
//! [`MemoPool`], parses one file, and hands the table back. Results come back
//! in input order.

use rayon::prelude::*;

use crate::base::Encoding;
use crate::metrics::FileMetrics;
use crate::parser::engine::{MemoPool, MemoTable};
use crate::parser::{Parse, ParseOptions};
use crate::Error;

/// One source buffer to parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInput {
    /// Caller's label for the file, carried into the outcome
    pub name: String,
    pub bytes: Vec<u8>,
    pub encoding: Encoding,
}

impl SourceInput {
    /// UTF-8 source text
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bytes: text.into().into_bytes(),
            encoding: Encoding::Utf8,
        }
    }

    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>, encoding: Encoding) -> Self {
        Self {
            name: name.into(),
            bytes,
            encoding,
        }
    }
}

/// Result of parsing one input
#[derive(Debug)]
pub struct BatchOutcome {
    pub name: String,
    pub result: Result<Parse, Error>,
}

impl BatchOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    pub fn metrics(&self) -> Option<FileMetrics> {
        self.result.as_ref().ok().map(FileMetrics::from_parse)
    }
}

/// Parse every input with default options on the global rayon pool
pub fn parse_batch(inputs: &[SourceInput]) -> Vec<BatchOutcome> {
    parse_batch_with(inputs, &ParseOptions::default(), &MemoPool::new())
}

/// Parse every input, drawing memo tables from `pool`
pub fn parse_batch_with(
    inputs: &[SourceInput],
    options: &ParseOptions,
    pool: &MemoPool,
) -> Vec<BatchOutcome> {
    tracing::debug!(
        files = inputs.len(),
        threads = rayon::current_num_threads(),
        "batch start"
    );

    let outcomes: Vec<BatchOutcome> = inputs
        .par_iter()
        .map(|input| {
            let mut memo = pool.acquire();
            let result = parse_input(input, options, &mut memo);
            pool.release(memo);

            if let Err(err) = &result {
                tracing::debug!(file = %input.name, "parse failed: {}", err);
            }
            BatchOutcome {
                name: input.name.clone(),
                result,
            }
        })
        .collect();

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    tracing::debug!(files = outcomes.len(), failed, "batch finished");
    outcomes
}

fn parse_input(
    input: &SourceInput,
    options: &ParseOptions,
    memo: &mut MemoTable,
) -> Result<Parse, Error> {
    let tokens = crate::tokenize(&input.bytes, input.encoding)?;
    crate::parser::parse_tokens(tokens, options, memo)
}
