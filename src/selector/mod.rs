//! Utility selector analysis: attribute extraction and the rewrites applied
//! to modifier, breakpoint, and direct-value selectors.

pub mod pattern;
pub mod rewrite;
pub mod tokenizer;

pub use pattern::{bracket_payload, AttributePattern};
pub use rewrite::{is_fluid_value, rewrite_for_breakpoint, rewrite_modifier, substitute_direct};
