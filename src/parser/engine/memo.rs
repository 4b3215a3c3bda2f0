//! Packrat memo table and a pool for reusing tables across parses.
//!
//! A table is keyed by rule, position and context flags. It belongs to one
//! token stream at a time: evaluation starts from an empty table and the table
//! is reset before it goes back into the pool.

use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use super::grammar::RuleId;
use super::term::Flags;
use super::tree::{ParseNode, Pos};

/// Tables grown past this many entries are dropped instead of cleared so one
/// huge file does not pin its memory in the pool.
const RETAIN_CAPACITY: usize = 1 << 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoKey(u64);

impl MemoKey {
    pub fn new(rule: RuleId, pos: Pos, flags: Flags) -> Self {
        let packed = (rule.index() as u64) << 48
            | u64::from(pos.index) << 16
            | u64::from(pos.offset) << 8
            | u64::from(flags.bits());
        Self(packed)
    }
}

#[derive(Debug, Clone)]
pub enum MemoEntry {
    /// The rule is being evaluated at this key right now
    InProgress,
    Failed,
    Matched { end: Pos, nodes: Arc<[ParseNode]> },
}

#[derive(Debug, Default)]
pub struct MemoTable {
    entries: FxHashMap<MemoKey, MemoEntry>,
    generation: u64,
}

impl MemoTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: MemoKey) -> Option<&MemoEntry> {
        self.entries.get(&key)
    }

    pub fn insert(&mut self, key: MemoKey, entry: MemoEntry) {
        self.entries.insert(key, entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many times this table has been reset
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Forget every entry before the table is used for another stream
    pub fn reset(&mut self) {
        if self.entries.capacity() > RETAIN_CAPACITY {
            self.entries = FxHashMap::default();
        } else {
            self.entries.clear();
        }
        self.generation += 1;
    }
}

/// Shared pool of memo tables for parsing many files
#[derive(Debug, Default)]
pub struct MemoPool {
    tables: Mutex<Vec<MemoTable>>,
}

impl MemoPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a clean table, allocating one if the pool is empty
    pub fn acquire(&self) -> MemoTable {
        self.tables.lock().pop().unwrap_or_default()
    }

    /// Reset `table` and return it to the pool
    pub fn release(&self, mut table: MemoTable) {
        table.reset();
        self.tables.lock().push(table);
    }

    pub fn idle(&self) -> usize {
        self.tables.lock().len()
    }
}
