//! Line resolver
//!
//! Turns one manifest line into a package name and the version pinned with
//! `==`. Lines that declare nothing, and lines that pin more than one exact
//! version, resolve to `None`.

use super::tokenizer::tokenize;
use crate::domain::Version;

/// Cuts environment markers (`; python_version < "3.8"`), inline comments
/// (`#` preceded by whitespace) and a trailing line continuation (`\`) from a
/// declaration.
fn strip_annotations(line: &str) -> &str {
    let line = line.split_once(';').map_or(line, |(declaration, _)| declaration);

    let line = line
        .char_indices()
        .find(|&(i, c)| c == '#' && line[..i].ends_with(char::is_whitespace))
        .map_or(line, |(i, _)| &line[..i]);

    line.trim_end().strip_suffix('\\').unwrap_or(line)
}

/// Resolve a raw manifest line to `(name, version)`.
///
/// Never fails: malformed version components degrade to unknown and anything
/// that is not a declaration returns `None`.
pub fn resolve_line(line: &str) -> Option<(String, Version)> {
    let line = line.trim();

    // blank lines, comments, and pip options such as `-r other.txt`
    if line.is_empty() || line.starts_with('#') || line.starts_with('-') {
        return None;
    }

    let tokens = tokenize(strip_annotations(line));
    if tokens.name.is_empty() {
        return None;
    }

    let mut pins = tokens
        .clauses
        .iter()
        .filter(|clause| clause.operator.is_exact_pin());

    let version = match (pins.next(), pins.next()) {
        (None, _) => Version::unknown(),
        (Some(pin), None) => Version::from_operand(&pin.operand),
        // ambiguous: more than one exact pin
        (Some(_), Some(_)) => return None,
    };

    Some((tokens.name, version))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partial(major: Option<u64>, minor: Option<u64>, patch: Option<u64>) -> Version {
        Version {
            major,
            minor,
            patch,
        }
    }

    fn resolved(line: &str) -> Option<(String, Version)> {
        resolve_line(line)
    }

    fn pytest(version: Version) -> Option<(String, Version)> {
        Some(("pytest".to_string(), version))
    }

    #[test]
    fn test_full_pin() {
        assert_eq!(resolved("pytest==1.20.300"), pytest(Version::new(1, 20, 300)));
        assert_eq!(
            resolved("   pytest  ==  1.20.300 "),
            pytest(Version::new(1, 20, 300))
        );
        assert_eq!(
            resolved(" PyTest == 1.20.300"),
            pytest(Version::new(1, 20, 300))
        );
    }

    #[test]
    fn test_partial_pins() {
        assert_eq!(
            resolved("pytest==1.20"),
            pytest(partial(Some(1), Some(20), None))
        );
        assert_eq!(resolved("pytest==1"), pytest(partial(Some(1), None, None)));
    }

    #[test]
    fn test_extras_are_removed() {
        assert_eq!(
            resolved(" pytest [extra] ==  1.20.300 "),
            pytest(Version::new(1, 20, 300))
        );
        assert_eq!(
            resolved(" pytest [extra1, extra2] == 1.20"),
            pytest(partial(Some(1), Some(20), None))
        );
        assert_eq!(
            resolved(" pytest[extra1,extra2] == 1"),
            pytest(partial(Some(1), None, None))
        );
    }

    #[test]
    fn test_prerelease_suffix_degrades_patch() {
        for line in [
            " pytest == 1.20.300dev",
            " pytest == 1.20.300rc1",
            " pytest == 1.20.300a1",
            " pytest == 1.20.300b1",
        ] {
            assert_eq!(
                resolved(line),
                pytest(partial(Some(1), Some(20), None)),
                "line {line:?}"
            );
        }
    }

    #[test]
    fn test_ignored_lines() {
        for line in [
            "",
            "  \t  ",
            "# comments",
            "    # comments",
            "  -r outro-arquivo.txt",
            "-r folder/outro-arquivo.txt",
            "--index-url https://example.org/simple",
            "-e git+https://github.com/pytest-dev/pytest.git#egg=pytest",
        ] {
            assert_eq!(resolved(line), None, "line {line:?}");
        }
    }

    #[test]
    fn test_two_exact_pins_are_ignored() {
        assert_eq!(resolved(" pytest == 1.2.3, == 1.2.4"), None);
        assert_eq!(resolved("pytest==1.2.3,>=1.0,==1.2.3"), None);
    }

    #[test]
    fn test_single_pin_among_other_clauses() {
        assert_eq!(
            resolved(" pytest >= 1.2.3, == 1.2.4"),
            pytest(Version::new(1, 2, 4))
        );
        for line in [
            " pytest >= 1.2.3, < 2.0.0, == 1.5.5 ",
            " pytest >= 1.2.3, == 1.5.5, < 2.0.0 ",
            " pytest == 1.5.5, >= 1.2.3, < 2.0.0 ",
        ] {
            assert_eq!(resolved(line), pytest(Version::new(1, 5, 5)), "line {line:?}");
        }
    }

    #[test]
    fn test_other_operators_give_unknown_version() {
        for line in [
            " pytest >= 1.20.300 ",
            " pytest <= 1.20.300 ",
            " pytest ~= 1.20.300 ",
            " pytest != 1.20.300 ",
            " pytest < 1.20.300 ",
            " pytest > 1.20.300 ",
            " pytest === 1.20.300 ",
            " pytest ",
            " pytest [extra] ",
            " pytest [extra1, extra2] ",
        ] {
            assert_eq!(resolved(line), pytest(Version::unknown()), "line {line:?}");
        }
    }

    #[test]
    fn test_environment_marker_is_cut() {
        assert_eq!(
            resolved("pytest==1.0 ; python_version < \"3.8\""),
            pytest(partial(Some(1), Some(0), None))
        );
    }

    #[test]
    fn test_inline_comment_is_cut() {
        assert_eq!(
            resolved("pytest==8.3.2  # pinned for CI"),
            pytest(Version::new(8, 3, 2))
        );
    }

    #[test]
    fn test_operator_only_lines() {
        assert_eq!(resolved("=="), None);
        assert_eq!(resolved("==1.2.3"), None);
        assert_eq!(resolved(">"), None);
    }

    #[test]
    fn test_stray_characters_after_name_are_lenient() {
        assert_eq!(
            resolved("pytest]]"),
            Some(("pytest]]".to_string(), Version::unknown()))
        );
    }

    #[test]
    fn test_trailing_comma() {
        assert_eq!(
            resolved("pytest==1.0,"),
            pytest(partial(Some(1), Some(0), None))
        );
    }

    #[test]
    fn test_wildcard_pin() {
        assert_eq!(
            resolved("pytest==10.20.*"),
            pytest(partial(Some(10), Some(20), None))
        );
    }

    #[test]
    fn test_line_continuation_is_cut() {
        assert_eq!(resolved("pytest==1 \\"), pytest(partial(Some(1), None, None)));
        assert_eq!(resolved("pytest==1.2.3\\"), pytest(Version::new(1, 2, 3)));
        assert_eq!(resolved("    --hash=sha256:0123abcd \\"), None);
    }
}
