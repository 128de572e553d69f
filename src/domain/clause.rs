//! Version-specifier operators and clauses
//!
//! Operators are matched longest first so `===` is never read as `==`
//! followed by a stray `=`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A version-specifier operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// `===` arbitrary equality
    ArbitraryEqual,
    /// `~=` compatible release
    Compatible,
    /// `!=`
    NotEqual,
    /// `<=`
    LessOrEqual,
    /// `>=`
    GreaterOrEqual,
    /// `==` exact-version pin
    Equal,
    /// `<`
    Less,
    /// `>`
    Greater,
}

const THREE_CHAR_OPERATORS: [Operator; 1] = [Operator::ArbitraryEqual];

const TWO_CHAR_OPERATORS: [Operator; 5] = [
    Operator::Compatible,
    Operator::NotEqual,
    Operator::LessOrEqual,
    Operator::GreaterOrEqual,
    Operator::Equal,
];

const ONE_CHAR_OPERATORS: [Operator; 2] = [Operator::Greater, Operator::Less];

impl Operator {
    /// Operator text as written in a manifest
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::ArbitraryEqual => "===",
            Operator::Compatible => "~=",
            Operator::NotEqual => "!=",
            Operator::LessOrEqual => "<=",
            Operator::GreaterOrEqual => ">=",
            Operator::Equal => "==",
            Operator::Less => "<",
            Operator::Greater => ">",
        }
    }

    /// Matches an operator at the start of `input`, preferring the longest one
    pub fn match_prefix(input: &[u8]) -> Option<Operator> {
        THREE_CHAR_OPERATORS
            .iter()
            .chain(TWO_CHAR_OPERATORS.iter())
            .chain(ONE_CHAR_OPERATORS.iter())
            .find(|op| input.starts_with(op.as_str().as_bytes()))
            .copied()
    }

    /// Length of the operator text in bytes
    pub fn text_len(&self) -> usize {
        self.as_str().len()
    }

    /// True only for `==`; `===` is a different operator
    pub fn is_exact_pin(&self) -> bool {
        matches!(self, Operator::Equal)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An operator paired with its raw operand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub operator: Operator,
    pub operand: String,
}

impl Clause {
    pub fn new(operator: Operator, operand: impl Into<String>) -> Self {
        Self {
            operator,
            operand: operand.into(),
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.operand)
    }
}
