//! Story rewriting for content-policy safety.

use regex::Regex;
use vignette_core::SanitizationResult;

/// One ordered rewrite rule.
struct RewriteRule {
    pattern: Regex,
    replacement: &'static str,
    warning: &'static str,
}

/// Rule table: pattern, fixed replacement, warning text.
///
/// Replacements are chosen so that no rule's output matches any rule's
/// pattern, which makes sanitization idempotent.
const RULES: [(&str, &str, &str); 10] = [
    (
        r"(?i)\bkill(?:s|ed|ing|er)?\b",
        "defeat",
        "Replaced \"kill\" phrasing with \"defeat\"",
    ),
    (
        r"(?i)\bmurder(?:s|ed|er|ing)?\b",
        "confrontation",
        "Replaced \"murder\" phrasing with \"confrontation\"",
    ),
    (
        r"(?i)\b(?:gun|firearm)s?\b",
        "gadget",
        "Replaced weapon phrasing with \"gadget\"",
    ),
    (
        r"(?i)\bkni(?:fe|ves)\b",
        "tool",
        "Replaced blade phrasing with \"tool\"",
    ),
    (
        r"(?i)\bblood(?:y|ied)?\b",
        "dramatic",
        "Replaced \"blood\" phrasing with \"dramatic\"",
    ),
    (
        r"(?i)\bfight(?:s|ing|er)?\b",
        "showdown",
        "Replaced \"fight\" phrasing with \"showdown\"",
    ),
    (
        r"(?i)\b(?:bomb|explosion)s?\b|\bexplod(?:e|es|ed|ing)\b",
        "burst of light",
        "Replaced explosive phrasing with \"burst of light\"",
    ),
    (
        r"(?i)\bdie(?:s|d)?\b|\bdead\b|\bdeath\b",
        "vanish",
        "Replaced \"death\" phrasing with \"vanish\"",
    ),
    (
        r"(?i)\bwar\b",
        "struggle",
        "Replaced \"war\" with \"struggle\"",
    ),
    (
        r"(?i)\bshoot(?:s|ing)?\b|\bshot\b",
        "launch",
        "Replaced \"shoot\" phrasing with \"launch\"",
    ),
];

/// Rewrites free-text stories to reduce provider content-policy
/// rejections.
///
/// Applies an ordered rule list, recording one warning per rule that
/// matched. Deterministic and side-effect free: the same input always
/// yields the same output and warnings, in the same order, and running
/// the sanitizer over its own output changes nothing.
///
/// # Examples
///
/// ```
/// use vignette_continuity::ContentSanitizer;
///
/// let sanitizer = ContentSanitizer::new();
/// let result = sanitizer.sanitize("Two knights fight at dawn");
/// assert!(result.was_modified());
///
/// let clean = sanitizer.sanitize("A calm walk in the park");
/// assert!(clean.warnings().is_empty());
/// ```
pub struct ContentSanitizer {
    rules: Vec<RewriteRule>,
}

impl ContentSanitizer {
    /// Compile the rewrite rule table.
    pub fn new() -> Self {
        let rules = RULES
            .iter()
            .map(|&(pattern, replacement, warning)| RewriteRule {
                pattern: Regex::new(pattern).expect("static rewrite pattern compiles"),
                replacement,
                warning,
            })
            .collect();
        Self { rules }
    }

    /// Rewrite a story, returning the sanitized text and per-rule
    /// warnings. Never errors; a story with no matches comes back
    /// unchanged with an empty warning list.
    #[tracing::instrument(skip(self, story))]
    pub fn sanitize(&self, story: &str) -> SanitizationResult {
        let mut current = story.to_string();
        let mut warnings = Vec::new();

        for rule in &self.rules {
            if rule.pattern.is_match(&current) {
                current = rule
                    .pattern
                    .replace_all(&current, rule.replacement)
                    .into_owned();
                warnings.push(rule.warning.to_string());
            }
        }

        if !warnings.is_empty() {
            tracing::debug!(
                rules_matched = warnings.len(),
                "Rewrote story for content-policy safety"
            );
        }

        SanitizationResult::new(current, warnings)
    }
}

impl Default for ContentSanitizer {
    fn default() -> Self {
        Self::new()
    }
}
