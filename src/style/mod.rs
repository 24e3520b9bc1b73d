//! Style units: utility declarations, their modifiers, direct-value
//! expansion, and breakpoint grouping.

pub mod declaration;
pub mod direct;
pub mod media;
pub mod unit;

pub use declaration::{build_rule, DeclValue, Property, UtilityDeclaration};
pub use direct::expand_direct;
pub use media::group_media;
pub use unit::{BuildScope, ModifierLink, Phase, Ready, StyleOptions, StyleUnit};
