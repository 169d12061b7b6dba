//! Definition line matching.
//!
//! A best-effort line classifier, deliberately not a parser: a line opens a
//! definition only when its first token is exactly `class` or `def`,
//! followed by an identifier. Decorators, multi-line signatures and
//! keywords embedded in strings are known blind spots; misses there are
//! accepted false negatives, never errors.

use regex::Regex;

use crate::graph::NodeKind;

/// A matched definition opener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// [`NodeKind::Class`] or [`NodeKind::Function`].
    pub kind: NodeKind,
    /// The defined identifier.
    pub name: String,
}

/// Matches `class`/`def` openers on trimmed lines.
#[derive(Debug)]
pub struct DefinitionMatcher {
    pattern: Regex,
}

impl DefinitionMatcher {
    pub fn new() -> Self {
        // Anchored: keyword must be the first token of the trimmed line.
        let pattern = Regex::new(r"^(class|def)\s+([A-Za-z_][A-Za-z0-9_]*)")
            .expect("definition pattern is valid");
        Self { pattern }
    }

    /// Classify a trimmed line. Callers filter skippable lines first.
    pub fn match_line(&self, trimmed: &str) -> Option<Definition> {
        let captures = self.pattern.captures(trimmed)?;
        let kind = match &captures[1] {
            "class" => NodeKind::Class,
            _ => NodeKind::Function,
        };
        Some(Definition {
            kind,
            name: captures[2].to_string(),
        })
    }
}

impl Default for DefinitionMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Blank and comment lines never open or close a scope.
pub fn is_skippable(trimmed: &str) -> bool {
    trimmed.is_empty() || trimmed.starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_class() {
        let matcher = DefinitionMatcher::new();
        let def = matcher.match_line("class UserService:").unwrap();
        assert_eq!(def.kind, NodeKind::Class);
        assert_eq!(def.name, "UserService");
    }

    #[test]
    fn test_matches_function() {
        let matcher = DefinitionMatcher::new();
        let def = matcher.match_line("def get_user(self, user_id):").unwrap();
        assert_eq!(def.kind, NodeKind::Function);
        assert_eq!(def.name, "get_user");
    }

    #[test]
    fn test_underscore_identifier() {
        let matcher = DefinitionMatcher::new();
        let def = matcher.match_line("def __init__(self):").unwrap();
        assert_eq!(def.name, "__init__");
    }

    #[test]
    fn test_keyword_must_be_first_token() {
        let matcher = DefinitionMatcher::new();
        assert!(matcher.match_line("async def fetch():").is_none());
        assert!(matcher.match_line("return def_value").is_none());
        assert!(matcher.match_line("x = \"class Foo:\"").is_none());
    }

    #[test]
    fn test_keyword_prefix_is_not_keyword() {
        let matcher = DefinitionMatcher::new();
        assert!(matcher.match_line("classify(data)").is_none());
        assert!(matcher.match_line("defrost()").is_none());
    }

    #[test]
    fn test_identifier_must_start_with_letter_or_underscore() {
        let matcher = DefinitionMatcher::new();
        assert!(matcher.match_line("def 2fast():").is_none());
        assert!(matcher.match_line("class :").is_none());
    }

    #[test]
    fn test_skippable_lines() {
        assert!(is_skippable(""));
        assert!(is_skippable("# a comment"));
        assert!(is_skippable("#def hidden():"));
        assert!(!is_skippable("def visible():"));
    }
}
