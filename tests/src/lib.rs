//! Integration test framework for gsmdtap
#![allow(missing_docs)]
//!
//! This crate provides fixtures and helpers for decoding whole DTAP frames
//! through the public API of `gsmdtap-codec`.
//!
//! # Components
//!
//! - [`recording_sub_decoder`] - Sub-decoder that records every hand-off
//! - [`test_fixtures`] - Named capture frames with their expected summaries
//! - [`test_utils`] - Logging setup and field assertions
//!
//! # Test Categories
//!
//! 1. **Message Scenarios** - Complete frames of every family
//! 2. **Robustness** - Truncation, tag mutation and random input
//! 3. **Association** - Party number hooks across a call
//! 4. **Concurrency** - One decoder shared by many threads

pub mod recording_sub_decoder;
pub mod test_fixtures;
pub mod test_utils;

pub use recording_sub_decoder::{HandOff, RecordingSubDecoder};
pub use test_fixtures::{fixture, Fixture, FIXTURES};
pub use test_utils::{element_headings, init_test_logging, labels, TestResult};
