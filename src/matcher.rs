//! Usage gating: decides whether a utility selector is used in markup, and
//! which bracketed direct values it should expand to.

use std::collections::BTreeSet;

use crate::selector::{substitute_direct, AttributePattern};
use crate::usage::UsageIndex;

/// Outcome of matching one selector against a usage index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectorMatch {
    pub enabled: bool,
    /// The selector value carries a `[]` placeholder.
    pub is_direct: bool,
    /// Observed values whose payload fits the placeholder, in sorted order.
    pub direct_values: Vec<String>,
}

impl SelectorMatch {
    fn disabled() -> Self {
        Self::default()
    }

    fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }
}

/// Match `selector` against `usage`.
///
/// With `use_only` unset the selector is always enabled and never direct.
/// Malformed selectors are disabled, never an error.
pub fn match_selector(selector: &str, usage: &UsageIndex, use_only: bool) -> SelectorMatch {
    if !use_only {
        return SelectorMatch::enabled();
    }

    let Some(pattern) = AttributePattern::extract(selector) else {
        return SelectorMatch::disabled();
    };
    let Some(observed) = usage.values(&pattern.name) else {
        return SelectorMatch::disabled();
    };
    let Some(value) = pattern.value.as_deref() else {
        return SelectorMatch::enabled();
    };

    let candidates: BTreeSet<&str> = if pattern.name == "style" {
        observed.iter().map(String::as_str).collect()
    } else {
        observed.iter().flat_map(|v| v.split_whitespace()).collect()
    };

    let mut matched = SelectorMatch::disabled();
    if pattern.is_direct() {
        matched.is_direct = true;
        matched.direct_values = candidates
            .iter()
            .filter(|candidate| has_companion(value, candidate, &candidates))
            .map(|candidate| candidate.to_string())
            .collect();
        if !matched.direct_values.is_empty() {
            matched.enabled = true;
            return matched;
        }
    }

    matched.enabled = candidates.contains(value);
    matched
}

/// A candidate fits template `t` when `t` with `[]` replaced by the
/// candidate's own form, `[p]` or `fluid-[p]`, was itself observed.
fn has_companion(template: &str, candidate: &str, candidates: &BTreeSet<&str>) -> bool {
    substitute_direct(template, candidate).is_some_and(|key| candidates.contains(key.as_str()))
}

/// Shorthand for `match_selector(selector, usage, true).enabled`.
pub fn is_enabled(selector: &str, usage: &UsageIndex) -> bool {
    match_selector(selector, usage, true).enabled
}
