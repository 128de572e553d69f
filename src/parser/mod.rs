//! Requirement line parsing
//!
//! This module provides:
//! - A clause tokenizer that splits a line into a package name and its
//!   version-specifier clauses
//! - A line resolver that selects the exact-version pin and converts it into
//!   a three-slot version
//!
//! Both are stateless and never fail.

mod resolver;
mod tokenizer;

pub use resolver::resolve_line;
pub use tokenizer::{compress, tokenize, TokenizedLine};
