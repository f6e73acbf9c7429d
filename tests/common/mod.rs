//! Common test utilities for Stitch contract and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project/home directories plus a runner for the binary
//! - Fixtures: reusable manifests

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
