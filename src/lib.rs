//! clinic-book - an address book for a clinic's doctors, patients and appointments.
//!
//! This library exposes the core modules to the binary and to integration tests.

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod storage;
