//! Wildcard pattern matching for actions, resources and `StringLike` conditions
//!
//! The only wildcard is `*`, which matches any run of zero or more characters.
//! Every other character matches itself literally, and a pattern must cover
//! the whole input (matching is anchored at both ends).

use regex::Regex;
use tracing::debug;

/// Pattern matcher for actions, resources and string-like conditions
pub struct PatternMatcher;

impl PatternMatcher {
    /// Check if `input` matches the wildcard `pattern`
    ///
    /// # Examples
    /// ```
    /// use policy_engine::iam::PatternMatcher;
    ///
    /// assert!(PatternMatcher::matches_pattern("resource:doc1", "resource:*"));
    /// assert!(PatternMatcher::matches_pattern("", "*"));
    /// assert!(!PatternMatcher::matches_pattern("other:doc1", "resource:*"));
    /// ```
    pub fn matches_pattern(input: &str, pattern: &str) -> bool {
        match Self::compile(pattern) {
            Some(regex) => regex.is_match(input),
            None => false,
        }
    }

    /// Translate a wildcard pattern into an anchored regex
    ///
    /// Returns `None` if the regex cannot be built (e.g. the compiled program
    /// exceeds the regex size limit). Callers treat that as "no match".
    pub fn compile(pattern: &str) -> Option<Regex> {
        let source = Self::to_regex_source(pattern);
        match Regex::new(&source) {
            Ok(regex) => Some(regex),
            Err(err) => {
                debug!(pattern, error = %err, "wildcard pattern failed to compile");
                None
            }
        }
    }

    /// Escape everything, then turn the escaped `*` back into `.*`
    fn to_regex_source(pattern: &str) -> String {
        let body = regex::escape(pattern).replace(r"\*", ".*");
        // (?s) so `*` also spans newlines in the input
        format!("(?s)^{}$", body)
    }
}
