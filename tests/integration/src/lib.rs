//! Cross-module tests for the tokenomics model
//!
//! Scenario tests live in `tests/`; property tests use proptest.
