//! Recursive descent stylesheet parser.
//!
//! Parses stylesheet text into a [`Stylesheet`] tree of rules, at-rules,
//! declarations, and comments. Nesting is supported at any depth. Uses the
//! logos-based tokenizer from [`crate::css::tokenizer`].
//!
//! A statement runs until `{`, `;`, or `}` at paren depth zero:
//! - a leading at-keyword makes it an at-rule (with a block if it ends in `{`)
//! - otherwise `{` makes it a rule
//! - otherwise it is a declaration, split at the first `:`

use logos::Logos;

use crate::css::model::*;
use crate::css::tokenizer::Token;

/// Errors from stylesheet parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected token at position {position}: {message}")]
    UnexpectedToken { position: usize, message: String },
    #[error("unexpected end of input: {0}")]
    UnexpectedEof(String),
    #[error("unrecognized input at position {position}")]
    UnrecognizedInput { position: usize },
}

/// A positioned token. `byte_start` is used for error reporting.
#[derive(Debug, Clone, Copy)]
struct PToken<'a> {
    token: Token,
    text: &'a str,
    byte_start: usize,
}

/// Tokenize input using logos with span information preserved.
fn tokenize_with_spans(input: &str) -> Result<Vec<PToken<'_>>, ParseError> {
    let mut tokens = Vec::new();
    for (result, span) in Token::lexer(input).spanned() {
        let token = result.map_err(|_| ParseError::UnrecognizedInput {
            position: span.start,
        })?;
        tokens.push(PToken {
            token,
            text: &input[span.clone()],
            byte_start: span.start,
        });
    }
    Ok(tokens)
}

/// Parse a stylesheet string into a [`Stylesheet`].
pub fn parse_stylesheet(input: &str) -> Result<Stylesheet, ParseError> {
    let tokens = tokenize_with_spans(input)?;
    let mut parser = Parser { tokens, cursor: 0 };
    let nodes = parser.parse_block(false)?;
    Ok(Stylesheet { nodes })
}

/// Recursive descent parser state.
struct Parser<'a> {
    tokens: Vec<PToken<'a>>,
    cursor: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<PToken<'a>> {
        self.tokens.get(self.cursor).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|t| t.token == Token::Whitespace) {
            self.cursor += 1;
        }
    }

    /// Parse statements until end of input, or until the `}` closing a
    /// nested block.
    fn parse_block(&mut self, nested: bool) -> Result<Vec<Node>, ParseError> {
        let mut nodes = Vec::new();

        loop {
            self.skip_whitespace();
            let Some(tok) = self.peek() else {
                if nested {
                    return Err(ParseError::UnexpectedEof("expected '}'".into()));
                }
                return Ok(nodes);
            };

            match tok.token {
                Token::BraceClose if nested => {
                    self.cursor += 1;
                    return Ok(nodes);
                }
                Token::BraceClose => {
                    return Err(ParseError::UnexpectedToken {
                        position: tok.byte_start,
                        message: "unmatched '}'".into(),
                    });
                }
                Token::Semicolon => self.cursor += 1,
                Token::Comment => {
                    self.cursor += 1;
                    nodes.push(Node::Comment(Comment::new(comment_text(tok.text))));
                }
                _ => nodes.push(self.parse_statement()?),
            }
        }
    }

    /// Parse one rule, at-rule, or declaration starting at the cursor.
    fn parse_statement(&mut self) -> Result<Node, ParseError> {
        let start = self.cursor;
        let mut depth = 0usize;

        let terminator = loop {
            let Some(tok) = self.peek() else {
                break None;
            };
            match tok.token {
                Token::ParenOpen => depth += 1,
                Token::ParenClose => depth = depth.saturating_sub(1),
                Token::BraceOpen | Token::Semicolon | Token::BraceClose if depth == 0 => {
                    break Some(tok);
                }
                _ => {}
            }
            self.cursor += 1;
        };

        let end = self.cursor;
        let opens_block = terminator.is_some_and(|t| t.token == Token::BraceOpen);
        if terminator.is_some_and(|t| t.token != Token::BraceClose) {
            // Consume `{` or `;`; a `}` belongs to the enclosing block.
            self.cursor += 1;
        }

        let body = &self.tokens[start..end];
        let Some(first) = body.first().copied() else {
            let position = terminator.map(|t| t.byte_start).unwrap_or_default();
            return Err(ParseError::UnexpectedToken {
                position,
                message: "expected selector before '{'".into(),
            });
        };

        if first.token == Token::AtKeyword {
            let name = first.text[1..].to_string();
            let params = join_tokens(&body[1..]);
            if opens_block {
                let nodes = self.parse_block(true)?;
                return Ok(Node::AtRule(AtRule::block(name, params, nodes)));
            }
            return Ok(Node::AtRule(AtRule::statement(name, params)));
        }

        if opens_block {
            let selector = join_tokens(body);
            let nodes = self.parse_block(true)?;
            return Ok(Node::Rule(Rule { selector, nodes }));
        }

        parse_declaration(body).map(Node::Declaration)
    }
}

/// Parse `property: value [!important]` from a statement body.
fn parse_declaration(body: &[PToken<'_>]) -> Result<Declaration, ParseError> {
    let position = body.first().map(|t| t.byte_start).unwrap_or_default();
    let colon = body
        .iter()
        .position(|t| t.token == Token::Colon)
        .ok_or_else(|| ParseError::UnexpectedToken {
            position,
            message: format!("expected ':' in declaration '{}'", join_tokens(body)),
        })?;

    let property = join_tokens(&body[..colon]);
    if property.is_empty() {
        return Err(ParseError::UnexpectedToken {
            position,
            message: "expected property name".into(),
        });
    }

    let mut value = join_tokens(&body[colon + 1..]);
    let important = strip_important(&mut value);

    Ok(Declaration {
        property,
        value,
        important,
    })
}

/// Join token text, collapsing whitespace runs to one space and dropping
/// comments. The result is trimmed.
fn join_tokens(tokens: &[PToken<'_>]) -> String {
    let mut out = String::new();
    for tok in tokens {
        match tok.token {
            Token::Whitespace => {
                if !out.is_empty() && !out.ends_with(' ') {
                    out.push(' ');
                }
            }
            Token::Comment => {}
            _ => out.push_str(tok.text),
        }
    }
    let trimmed = out.trim_end().len();
    out.truncate(trimmed);
    out
}

/// Remove a trailing `!important` (any case) from `value`.
fn strip_important(value: &mut String) -> bool {
    const FLAG: &str = "!important";
    let len = value.len();
    if len >= FLAG.len() && value[len - FLAG.len()..].eq_ignore_ascii_case(FLAG) {
        value.truncate(len - FLAG.len());
        let trimmed = value.trim_end().len();
        value.truncate(trimmed);
        return true;
    }
    false
}

fn comment_text(raw: &str) -> &str {
    let inner = raw.strip_prefix("/*").unwrap_or(raw);
    inner.strip_suffix("*/").unwrap_or(inner)
}
