//! # olex
//!
//! A utility-first CSS generator driven by `data-*` attributes.
//!
//! olex scans markup for utility attributes, then expands the `@olex`
//! markers of a stylesheet into only the rules that markup uses. Each
//! utility family nests its modifiers under one base rule and repeats
//! responsive modifiers once per breakpoint.
//!
//! ## Core Systems
//!
//! - **[`css`]**: Stylesheet tokenizer, parser, AST, and printer
//! - **[`selector`]**: Selector tokenizer and breakpoint/modifier rewrites
//! - **[`usage`]**: Markup scanning, content globs, and the usage cache
//! - **[`matcher`]**: Usage gating and direct-value capture for one selector
//! - **[`theme`]**: Theme tokens, `@theme` blocks, and `:root` emission
//! - **[`style`]**: Style units, direct-value expansion, and media grouping
//! - **[`families`]**: The declarative table of utility families
//! - **[`fluid`]**: Viewport-interpolated `clamp()` sizes
//! - **[`compiler`]**: The end-to-end pipeline over one stylesheet
//! - **[`watch`]**: Debounced rebuilds on file changes

// Foundation
pub mod config;
pub mod error;

// Core systems
pub mod css;
pub mod fluid;
pub mod matcher;
pub mod selector;
pub mod usage;

// Generation
pub mod families;
pub mod generator;
pub mod style;
pub mod theme;

// Pipeline
pub mod compiler;
pub mod watch;

pub use compiler::Compiler;
pub use config::Config;
pub use error::{Error, Result};
pub use fluid::compute_fluid;
pub use generator::generate_utilities;
pub use usage::build_usage_index;
