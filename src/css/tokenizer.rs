//! logos-based stylesheet tokenizer.
//!
//! The stylesheet parser only needs statement structure (blocks, terminators,
//! the first top-level colon of a declaration), so this lexer is deliberately
//! coarse: everything that is not punctuation, whitespace, a string, or a
//! comment collapses into [`Token::Other`].
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (`/*` as [`Token::Comment`] beats `/` as `Slash`,
//!    `@media` as [`Token::AtKeyword`] beats `@` as `At`)
//! 2. For equal length matches, earlier-defined variants win

use logos::{Lexer, Logos};

/// Stylesheet token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    // ── Compound tokens ──────────────────────────────────────────────

    /// Block comment `/* ... */`. Unterminated comments run to end of input.
    #[token("/*", block_comment)]
    Comment,

    /// At-keyword: `@media`, `@olex`, `@custom-media`.
    #[regex(r"@[a-zA-Z_-][a-zA-Z0-9_-]*")]
    AtKeyword,

    /// Double-quoted string literal, escapes included.
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    StringLiteral,

    /// Single-quoted string literal, escapes included.
    #[regex(r"'([^'\\\n]|\\.)*'")]
    StringLiteralSingle,

    /// Whitespace run.
    #[regex(r"[ \t\n\r\f]+")]
    Whitespace,

    /// Any run of characters without structural meaning.
    #[regex(r#"[^{}():;'"@/ \t\n\r\f]+"#)]
    Other,

    // ── Single-character punctuation ─────────────────────────────────

    /// `{`
    #[token("{")]
    BraceOpen,

    /// `}`
    #[token("}")]
    BraceClose,

    /// `(`
    #[token("(")]
    ParenOpen,

    /// `)`
    #[token(")")]
    ParenClose,

    /// `:`
    #[token(":")]
    Colon,

    /// `;`
    #[token(";")]
    Semicolon,

    /// A `/` that does not open a comment.
    #[token("/")]
    Slash,

    /// A lone `@`.
    #[token("@")]
    At,
}

fn block_comment(lex: &mut Lexer<Token>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => lex.bump(end + 2),
        None => lex.bump(lex.remainder().len()),
    }
    true
}

/// Tokenize a stylesheet string into `(Token, &str)` pairs.
///
/// Unrecognized input (an unterminated string) is dropped; the parser uses
/// its own spanned pass to report it.
pub fn tokenize(input: &str) -> Vec<(Token, &str)> {
    Token::lexer(input)
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, &input[span])))
        .collect()
}
