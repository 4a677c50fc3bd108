//! Integration tests for the clinic-book library.
//!
//! These drive the public API end to end against a temporary data file.

pub mod app_test;
pub mod storage_test;
