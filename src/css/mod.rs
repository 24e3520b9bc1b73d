//! Stylesheet engine: tokenizer, parser, AST, printer.

pub mod model;
pub mod parser;
pub mod printer;
pub mod tokenizer;

pub use model::{AtRule, Comment, Declaration, Node, Rule, Stylesheet};
pub use parser::{parse_stylesheet, ParseError};
