//! reqcheck - requirements.txt version reporter library
//!
//! This library provides the core functionality for reading pip requirements:
//! - Tokenizing requirement lines into version clauses
//! - Resolving the pinned (`==`) version of each package
//! - Looking up the latest release on PyPI and comparing versions

pub mod checker;
pub mod cli;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod output;
pub mod parser;
pub mod progress;
pub mod registry;
