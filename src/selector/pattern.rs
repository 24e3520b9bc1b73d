//! Attribute pattern extraction.

use crate::selector::tokenizer::{tokenize, SelectorToken};

/// The governing attribute of a utility selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributePattern {
    pub name: String,
    /// Unquoted value. `None` for a bare `[name]` selector or an empty value.
    pub value: Option<String>,
}

impl AttributePattern {
    /// Find the first well-formed attribute selector in `selector`.
    ///
    /// Only quoted values are recognized. Returns `None` when no attribute
    /// selector parses, which the matcher treats as "disabled".
    pub fn extract(selector: &str) -> Option<Self> {
        let tokens = tokenize(selector)?;
        (0..tokens.len())
            .filter(|&i| tokens[i].0 == SelectorToken::BracketOpen)
            .find_map(|i| parse_bracket(&tokens[i + 1..]))
    }

    /// Returns `true` if the value carries an empty `[]` placeholder.
    pub fn is_direct(&self) -> bool {
        self.value.as_deref().is_some_and(|v| v.contains("[]"))
    }
}

/// Parse `name [op "value"] ]` from the tokens following a `[`.
fn parse_bracket(tokens: &[(SelectorToken, &str)]) -> Option<AttributePattern> {
    let mut iter = tokens
        .iter()
        .filter(|(t, _)| *t != SelectorToken::Whitespace)
        .peekable();

    let mut name = String::new();
    while let Some((token, text)) = iter.peek() {
        match token {
            SelectorToken::Ident | SelectorToken::Symbol | SelectorToken::Dot | SelectorToken::Hash => {
                name.push_str(text);
                iter.next();
            }
            _ => break,
        }
    }
    if name.is_empty() {
        return None;
    }

    match iter.next()? {
        (SelectorToken::BracketClose, _) => Some(AttributePattern { name, value: None }),
        (SelectorToken::Operator, _) => {
            let (token, quoted) = iter.next()?;
            if !matches!(token, SelectorToken::DoubleQuoted | SelectorToken::SingleQuoted) {
                return None;
            }
            let (closing, _) = iter.next()?;
            if *closing != SelectorToken::BracketClose {
                return None;
            }
            let inner = &quoted[1..quoted.len() - 1];
            let value = (!inner.is_empty()).then(|| inner.to_string());
            Some(AttributePattern { name, value })
        }
        _ => None,
    }
}

/// Text inside the first `[...]` of `value`. `None` when absent or empty.
pub fn bracket_payload(value: &str) -> Option<&str> {
    let open = value.find('[')?;
    let rest = &value[open + 1..];
    let close = rest.find(']')?;
    let payload = &rest[..close];
    (!payload.is_empty()).then_some(payload)
}
