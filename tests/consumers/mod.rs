//! Tests for code built on top of the parser: metrics and batch parsing
