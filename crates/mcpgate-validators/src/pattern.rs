//! Character-class patterns for gateway fields
//!
//! Each [`ValidationPattern`] pairs an anchored regex with the clause used in
//! its rejection message. The clause must name every character the regex
//! admits; the tests at the bottom of this file check that exhaustively over
//! printable ASCII.
//!
//! None of the patterns admit `<`, `>`, `"`, `'` or `/`, so a pattern mismatch
//! alone is enough to keep markup out of names that end up in rendered pages.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Characters that must never reach a rendering context
pub const HTML_SPECIAL_CHARS: &[char] = &['<', '>', '"', '\'', '/'];

const NAME_SOURCE: &str = r"^[a-zA-Z0-9_.\- ]+$";
const IDENTIFIER_SOURCE: &str = r"^[a-zA-Z0-9_.\-]+$";
const TOOL_NAME_SOURCE: &str = r"^[a-zA-Z][a-zA-Z0-9._\-]*$";

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(NAME_SOURCE).expect("Invalid name regex pattern"));

static IDENTIFIER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(IDENTIFIER_SOURCE).expect("Invalid identifier regex pattern"));

static TOOL_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(TOOL_NAME_SOURCE).expect("Invalid tool name regex pattern"));

/// Display names: letters, digits, underscore, dot, hyphen and space
pub static NAME_PATTERN: ValidationPattern = ValidationPattern {
    kind: FieldKind::Name,
    source: NAME_SOURCE,
    allowed: "can only contain letters, numbers, underscore (_), hyphen (-), dot (.), and spaces",
    punctuation: &['_', '-', '.', ' '],
    regex: &NAME_REGEX,
};

/// Identifiers: like names but without spaces
pub static IDENTIFIER_PATTERN: ValidationPattern = ValidationPattern {
    kind: FieldKind::Identifier,
    source: IDENTIFIER_SOURCE,
    allowed: "can only contain letters, numbers, underscore (_), hyphen (-), and dot (.)",
    punctuation: &['_', '-', '.'],
    regex: &IDENTIFIER_REGEX,
};

/// Tool names: a leading letter, then identifier characters
pub static TOOL_NAME_PATTERN: ValidationPattern = ValidationPattern {
    kind: FieldKind::ToolName,
    source: TOOL_NAME_SOURCE,
    allowed: "must start with a letter and can only contain letters, numbers, underscore (_), hyphen (-), and dot (.)",
    punctuation: &['_', '-', '.'],
    regex: &TOOL_NAME_REGEX,
};

/// Kind of field being validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Human-facing display name
    Name,
    /// Machine identifier (slugs, ids)
    Identifier,
    /// Registered tool name
    ToolName,
}

impl FieldKind {
    /// Pattern applied to this kind of field
    pub fn pattern(self) -> &'static ValidationPattern {
        match self {
            FieldKind::Name => &NAME_PATTERN,
            FieldKind::Identifier => &IDENTIFIER_PATTERN,
            FieldKind::ToolName => &TOOL_NAME_PATTERN,
        }
    }

    /// Label used when the caller does not supply one
    pub fn default_label(self) -> &'static str {
        match self {
            FieldKind::Name => "Name",
            FieldKind::Identifier => "Identifier",
            FieldKind::ToolName => "Tool name",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Name => write!(f, "name"),
            FieldKind::Identifier => write!(f, "identifier"),
            FieldKind::ToolName => write!(f, "tool_name"),
        }
    }
}

/// An immutable, process-wide field pattern
pub struct ValidationPattern {
    kind: FieldKind,
    source: &'static str,
    allowed: &'static str,
    punctuation: &'static [char],
    regex: &'static Lazy<Regex>,
}

impl ValidationPattern {
    /// Field kind this pattern guards
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Regex source, anchored at both ends
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Message clause enumerating the permitted characters
    pub fn allowed(&self) -> &'static str {
        self.allowed
    }

    /// Non-alphanumeric characters the pattern admits
    pub fn punctuation(&self) -> &'static [char] {
        self.punctuation
    }

    /// Full-match test against the compiled pattern
    #[inline]
    pub fn is_match(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }
}

impl fmt::Debug for ValidationPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationPattern")
            .field("kind", &self.kind)
            .field("source", &self.source)
            .finish()
    }
}

/// Returns true if `value` contains any of [`HTML_SPECIAL_CHARS`]
pub fn contains_html_special_chars(value: &str) -> bool {
    value.contains(HTML_SPECIAL_CHARS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_patterns() -> [&'static ValidationPattern; 3] {
        [&NAME_PATTERN, &IDENTIFIER_PATTERN, &TOOL_NAME_PATTERN]
    }

    fn char_name(c: char) -> &'static str {
        match c {
            '_' => "underscore",
            '-' => "hyphen",
            '.' => "dot",
            ' ' => "space",
            _ => unreachable!("no name for {:?}", c),
        }
    }

    #[test]
    fn test_patterns_compile() {
        for pattern in all_patterns() {
            assert!(Regex::new(pattern.source()).is_ok());
            assert!(pattern.source().starts_with('^'));
            assert!(pattern.source().ends_with('$'));
        }
    }

    #[test]
    fn test_accepted_chars_are_named_in_message() {
        for pattern in all_patterns() {
            // Tool names need a leading letter before the character under test
            for c in (0x20u8..0x7f).map(char::from) {
                let candidate = format!("a{}", c);
                if !pattern.is_match(&candidate) {
                    continue;
                }
                assert!(
                    c.is_ascii_alphanumeric() || pattern.punctuation().contains(&c),
                    "{} accepts undeclared character {:?}",
                    pattern.kind(),
                    c
                );
            }

            for &c in pattern.punctuation() {
                let allowed = pattern.allowed().to_lowercase();
                assert!(
                    allowed.contains(char_name(c)),
                    "{} message does not name {:?}",
                    pattern.kind(),
                    c
                );
                assert!(pattern.is_match(&format!("a{}b", c)));
            }
        }
    }

    #[test]
    fn test_no_pattern_admits_html_chars() {
        for pattern in all_patterns() {
            for &c in HTML_SPECIAL_CHARS {
                assert!(!pattern.is_match(&format!("a{}b", c)));
                assert!(!pattern.punctuation().contains(&c));
            }
        }
    }

    #[test]
    fn test_patterns_reject_non_ascii_and_control() {
        for pattern in all_patterns() {
            assert!(!pattern.is_match("caf\u{e9}"));
            assert!(!pattern.is_match("tab\tbed"));
            assert!(!pattern.is_match("line\n"));
            assert!(!pattern.is_match(""));
        }
    }

    #[test]
    fn test_tool_name_requires_leading_letter() {
        assert!(TOOL_NAME_PATTERN.is_match("tool"));
        assert!(TOOL_NAME_PATTERN.is_match("t"));
        assert!(!TOOL_NAME_PATTERN.is_match("1tool"));
        assert!(!TOOL_NAME_PATTERN.is_match("_tool"));
        assert!(!TOOL_NAME_PATTERN.is_match(".tool"));
        assert!(!TOOL_NAME_PATTERN.is_match("-tool"));
    }

    #[test]
    fn test_field_kind_lookup() {
        assert_eq!(FieldKind::Name.pattern().kind(), FieldKind::Name);
        assert_eq!(FieldKind::Identifier.pattern().kind(), FieldKind::Identifier);
        assert_eq!(FieldKind::ToolName.pattern().kind(), FieldKind::ToolName);
        assert_eq!(FieldKind::ToolName.default_label(), "Tool name");
        assert_eq!(FieldKind::ToolName.to_string(), "tool_name");
    }

    #[test]
    fn test_contains_html_special_chars() {
        assert!(contains_html_special_chars("<b>"));
        assert!(contains_html_special_chars("it's"));
        assert!(contains_html_special_chars("a/b"));
        assert!(!contains_html_special_chars("plain name"));
    }
}
