//! Consolidated test utilities for den
//!
//! This module provides unified testing utilities for integration tests,
//! built on real directory trees and git repositories.

pub mod assertions;
pub mod fixtures;
pub mod repository;
