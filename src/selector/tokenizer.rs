//! logos-based utility selector tokenizer.
//!
//! Utility selectors are small (`[data-m~="4"]`, `[data-space] > * + *`,
//! `.card`), so the lexer only distinguishes what the rewrites need: bracket
//! boundaries, attribute operators, quoted values, and class/id sigils.

use logos::Logos;

/// Selector token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorToken {
    /// `[`
    #[token("[")]
    BracketOpen,

    /// `]`
    #[token("]")]
    BracketClose,

    /// Attribute operator: `=`, `~=`, `*=`, `^=`, `$=`, `|=`.
    #[regex(r"[~*^$|]?=")]
    Operator,

    /// Double-quoted attribute value.
    #[regex(r#""[^"]*""#)]
    DoubleQuoted,

    /// Single-quoted attribute value.
    #[regex(r"'[^']*'")]
    SingleQuoted,

    /// Class sigil `.`.
    #[token(".")]
    Dot,

    /// Id sigil `#`.
    #[token("#")]
    Hash,

    #[regex(r"[ \t\n\r\f]+")]
    Whitespace,

    /// Name run: attribute names, class names, element names.
    #[regex(r"[a-zA-Z0-9_-]+")]
    Ident,

    /// Any other single character: combinators, `&`, `:`, parens, `*`.
    #[regex(r#"[^\[\]"'.#=a-zA-Z0-9_ \t\n\r\f-]"#)]
    Symbol,
}

/// Tokenize a selector into `(SelectorToken, &str)` pairs.
///
/// Unmatched quotes are the only lexing failure; they surface as `None` so
/// callers can treat the selector as malformed.
pub fn tokenize(selector: &str) -> Option<Vec<(SelectorToken, &str)>> {
    SelectorToken::lexer(selector)
        .spanned()
        .map(|(result, span)| result.ok().map(|token| (token, &selector[span])))
        .collect()
}
