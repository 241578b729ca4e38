//! Redaction of sensitive fields from logged payloads.
//!
//! Rules rewrite known-sensitive substrings before a payload reaches the
//! log sink. Redaction applies to the logged copy only; the text that is
//! signed and transmitted is never touched.

use crate::envelope::Metadata;
use crate::logging::LogKind;
use regex::Regex;
use std::sync::LazyLock;

/// Placeholder written over masked field content.
pub const MASK: &str = "**sanitized**";

static REG_PASSWORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)(<item key="reg_password">).*?(</item>)"#).expect("pattern is valid")
});

/// A single named redaction rule.
///
/// A rule pairs a predicate over the log kind and call metadata with a
/// pattern rewrite. Rules are applied in order; each applicable rule
/// rewrites its pattern and leaves the rest of the text untouched.
pub struct Rule {
    name: &'static str,
    applies: fn(LogKind, &Metadata) -> bool,
    pattern: Regex,
    replacement: String,
}

impl Rule {
    /// Creates a rule from a predicate and a regex rewrite.
    ///
    /// `replacement` uses the `regex` crate's capture-group syntax
    /// (`${1}`, `${2}`, ...).
    #[must_use]
    pub fn new(
        name: &'static str,
        applies: fn(LogKind, &Metadata) -> bool,
        pattern: Regex,
        replacement: impl Into<String>,
    ) -> Self {
        Self {
            name,
            applies,
            pattern,
            replacement: replacement.into(),
        }
    }

    /// The rule's name, for diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    fn rewrite(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

/// Applies an ordered rule set to payloads bound for the log.
#[derive(Debug)]
pub struct Redactor {
    enabled: bool,
    rules: Vec<Rule>,
}

impl Redactor {
    /// Creates a redactor with the default rule set.
    ///
    /// When `enabled` is false, [`Redactor::redact`] returns its input
    /// unchanged.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            rules: default_rules(),
        }
    }

    /// Appends a rule. Rules run in insertion order.
    #[must_use]
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Rewrites sensitive substrings of `text` for logging.
    #[must_use]
    pub fn redact(&self, kind: LogKind, text: &str, meta: &Metadata) -> String {
        if !self.enabled {
            return text.to_owned();
        }
        let mut out = text.to_owned();
        for rule in &self.rules {
            if (rule.applies)(kind, meta) {
                out = rule.rewrite(&out);
            }
        }
        out
    }
}

/// Built-in rules. New rules for other sensitive fields append here.
fn default_rules() -> Vec<Rule> {
    vec![Rule::new(
        "reg-password",
        |kind, meta| {
            kind == LogKind::Request
                && meta.object.as_deref() == Some("DOMAIN")
                && meta.action.as_deref() == Some("SW_REGISTER")
        },
        REG_PASSWORD_PATTERN.clone(),
        format!("${{1}}{MASK}${{2}}"),
    )]
}

#[cfg(test)]
mod redact_tests;
