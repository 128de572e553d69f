//! Clause tokenizer for requirement lines
//!
//! Splits a declaration such as `pytest[extra] >= 1.2.3, < 2.0.0` into the
//! package name and its version-specifier clauses with a single left-to-right
//! scan. Whitespace is insignificant and removed before scanning.
//!
//! A clause runs from its operator to the next comma, the next operator, or
//! the end of the line. Commas seen before the first operator (for example
//! inside an extras list) never separate clauses.

use crate::domain::{Clause, Operator};

/// Package name and clauses found on one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedLine {
    /// Name before the first operator, lower-cased, extras removed
    pub name: String,
    /// Clauses in the order they appear
    pub clauses: Vec<Clause>,
}

/// Removes every whitespace character
pub fn compress(line: &str) -> String {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Everything before `[`, lower-cased
fn package_name(head: &str) -> String {
    head.split_once('[')
        .map_or(head, |(name, _)| name)
        .to_lowercase()
}

/// Tokenize a raw requirement line
pub fn tokenize(line: &str) -> TokenizedLine {
    let line = compress(line);
    let bytes = line.as_bytes();

    let mut name = None;
    let mut clauses = Vec::new();
    // operator of the open clause and the byte offset where its operand starts
    let mut open: Option<(Operator, usize)> = None;

    let mut i = 0;
    while i < bytes.len() {
        if let Some(operator) = Operator::match_prefix(&bytes[i..]) {
            if name.is_none() {
                name = Some(package_name(&line[..i]));
            }
            if let Some((previous, start)) = open.take() {
                clauses.push(Clause::new(previous, &line[start..i]));
            }
            open = Some((operator, i + operator.text_len()));
            i += operator.text_len();
            continue;
        }

        if bytes[i] == b',' {
            if let Some((operator, start)) = open.take() {
                clauses.push(Clause::new(operator, &line[start..i]));
            }
        }

        i += 1;
    }

    if let Some((operator, start)) = open {
        clauses.push(Clause::new(operator, &line[start..]));
    }

    TokenizedLine {
        name: name.unwrap_or_else(|| package_name(&line)),
        clauses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The name followed by each clause rendered as `<operator><operand>`
    fn tokens(line: &str) -> Vec<String> {
        let tokenized = tokenize(line);
        std::iter::once(tokenized.name)
            .chain(tokenized.clauses.iter().map(ToString::to_string))
            .collect()
    }

    #[test]
    fn test_name_only() {
        assert_eq!(tokens(" PyTest "), vec!["pytest"]);
    }

    #[test]
    fn test_name_only_with_extras() {
        assert_eq!(tokens(" pytest [extra1, extra2] "), vec!["pytest"]);
    }

    #[test]
    fn test_single_clause() {
        assert_eq!(tokens("pytest >= 1.2.3"), vec!["pytest", ">=1.2.3"]);
    }

    #[test]
    fn test_multiple_clauses_keep_order() {
        assert_eq!(
            tokens(" pytest >= 1.2.3, < 2.0.0, == 1.5.5 "),
            vec!["pytest", ">=1.2.3", "<2.0.0", "==1.5.5"]
        );
        assert_eq!(
            tokens(" pytest [extras] >= 1.2.3, == 1.5.5, < 2.0.0 "),
            vec!["pytest", ">=1.2.3", "==1.5.5", "<2.0.0"]
        );
        assert_eq!(
            tokens(" pytest [extra1, extra2] == 1.5.5, >= 1.2.3, < 2.0.0 "),
            vec!["pytest", "==1.5.5", ">=1.2.3", "<2.0.0"]
        );
    }

    #[test]
    fn test_arbitrary_equality_not_split() {
        let line = tokenize("pytest === 1.0");
        assert_eq!(line.clauses, vec![Clause::new(Operator::ArbitraryEqual, "1.0")]);
    }

    #[test]
    fn test_clause_closed_by_next_operator() {
        assert_eq!(tokens("pytest>=1.0<2.0"), vec!["pytest", ">=1.0", "<2.0"]);
    }

    #[test]
    fn test_trailing_comma_emits_once() {
        assert_eq!(tokens("pytest==1.0,"), vec!["pytest", "==1.0"]);
        assert_eq!(tokens("pytest==1.0,junk"), vec!["pytest", "==1.0"]);
    }

    #[test]
    fn test_operator_at_last_position() {
        let line = tokenize("pytest>");
        assert_eq!(line.name, "pytest");
        assert_eq!(line.clauses, vec![Clause::new(Operator::Greater, "")]);
    }

    #[test]
    fn test_leading_operator_gives_empty_name() {
        let line = tokenize("==1.2");
        assert_eq!(line.name, "");
        assert_eq!(line.clauses, vec![Clause::new(Operator::Equal, "1.2")]);
    }

    #[test]
    fn test_tabs_are_whitespace() {
        assert_eq!(tokens("pytest\t==\t1.0"), vec!["pytest", "==1.0"]);
    }

    #[test]
    fn test_empty_line() {
        let line = tokenize("");
        assert_eq!(line.name, "");
        assert!(line.clauses.is_empty());
    }

    #[test]
    fn test_non_ascii_name() {
        assert_eq!(tokens("pâckage==1.0"), vec!["pâckage", "==1.0"]);
    }

    #[test]
    fn test_malformed_brackets() {
        assert_eq!(tokens("pytest]]==1"), vec!["pytest]]", "==1"]);
        assert_eq!(tokens("pytest[[[==1"), vec!["pytest", "==1"]);
    }

    #[test]
    fn test_compress() {
        assert_eq!(compress("  a \t b\n"), "ab");
    }
}
