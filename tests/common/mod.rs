//! Common test utilities for appengine-deploy CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory, home and Cloud SDK
//! - Fixtures: Reusable project content constants

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
