//! Selector rewrites used by modifiers, breakpoints, and direct values.

use crate::selector::pattern::bracket_payload;
use crate::selector::tokenizer::{tokenize, SelectorToken};

/// Scope a selector to a breakpoint.
///
/// - `name op "v"` becomes `name op "{key}:v"`
/// - for attributes whose name contains `style`, each custom property
///   `--name` in the value becomes `--{key}-name`
/// - a `.`/`#` sigil outside brackets gets `{key}:` inserted after it
///
/// A selector that fails to tokenize is returned unchanged.
pub fn rewrite_for_breakpoint(selector: &str, key: &str) -> String {
    let Some(tokens) = tokenize(selector) else {
        return selector.to_string();
    };

    let mut out = String::with_capacity(selector.len() + key.len() * 2);
    let mut in_bracket = false;
    let mut attr_name = String::new();
    let mut after_operator = false;

    for (i, (token, text)) in tokens.iter().enumerate() {
        match token {
            SelectorToken::BracketOpen => {
                in_bracket = true;
                attr_name.clear();
                out.push_str(text);
            }
            SelectorToken::BracketClose => {
                in_bracket = false;
                after_operator = false;
                out.push_str(text);
            }
            SelectorToken::Operator if in_bracket => {
                after_operator = true;
                out.push_str(text);
            }
            SelectorToken::DoubleQuoted | SelectorToken::SingleQuoted
                if in_bracket && after_operator && text.len() > 2 =>
            {
                let quote = &text[..1];
                let inner = &text[1..text.len() - 1];
                out.push_str(quote);
                if attr_name.contains("style") {
                    out.push_str(&scope_custom_properties(inner, key));
                } else {
                    out.push_str(key);
                    out.push(':');
                    out.push_str(inner);
                }
                out.push_str(quote);
                after_operator = false;
            }
            SelectorToken::Ident | SelectorToken::Symbol if in_bracket && !after_operator => {
                attr_name.push_str(text);
                out.push_str(text);
            }
            SelectorToken::Dot | SelectorToken::Hash
                if !in_bracket
                    && matches!(tokens.get(i + 1), Some((SelectorToken::Ident, _))) =>
            {
                out.push_str(text);
                out.push_str(key);
                out.push(':');
            }
            _ => out.push_str(text),
        }
    }

    out
}

/// Rewrite every `--name` in a style value to `--{key}-name`.
fn scope_custom_properties(value: &str, key: &str) -> String {
    let mut out = String::with_capacity(value.len() + key.len() * 2);
    let mut rest = value;
    while let Some(at) = rest.find("--") {
        out.push_str(&rest[..at]);
        out.push_str("--");
        out.push_str(key);
        out.push('-');
        let name = &rest[at + 2..];
        let end = name.find([':', ';']).unwrap_or(name.len());
        out.push_str(&name[..end]);
        rest = &name[end..];
    }
    out.push_str(rest);
    out
}

/// Nest a modifier selector under its parent: `&:where(S)` or `&S`.
pub fn rewrite_modifier(selector: &str, is_where: bool) -> String {
    if is_where {
        format!("&:where({selector})")
    } else {
        format!("&{selector}")
    }
}

/// Returns `true` when a direct value requests a fluid clamp.
pub fn is_fluid_value(direct_value: &str) -> bool {
    direct_value.contains("fluid-[") && direct_value.contains(']')
}

/// Substitute the first `[]` placeholder in `selector` with the payload of
/// `direct_value`: `[payload]`, or `fluid-[payload]` for fluid requests.
///
/// Returns `None` when the direct value has no payload.
pub fn substitute_direct(selector: &str, direct_value: &str) -> Option<String> {
    let payload = bracket_payload(direct_value)?;
    let replacement = if is_fluid_value(direct_value) {
        format!("fluid-[{payload}]")
    } else {
        format!("[{payload}]")
    };
    Some(selector.replacen("[]", &replacement, 1))
}
