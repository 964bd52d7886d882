//! Common test utilities for deploypack CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated work directory, load directory and git repository
//! - `git_available`: Skip guard for machines without git

#![allow(dead_code)]

pub mod env;

pub use env::*;
