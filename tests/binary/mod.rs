//! Tests that run the built binary in one-shot mode.

pub mod common;
pub mod one_shot_test;
