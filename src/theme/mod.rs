//! Theme tokens: the context threaded through generation and the nodes
//! emitted into `@layer theme`.

pub mod context;
pub mod emit;

pub use context::{ThemeContext, TokenTable, TokenValue};
pub use emit::{custom_media, theme_nodes};
