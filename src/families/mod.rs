//! Declarative utility families.
//!
//! Each [`Family`] names an attribute, the declarations of its base rule, and
//! a generator for its modifiers. [`expand`] turns one table entry into CSS
//! nodes; the generator walks [`FAMILIES`] in order.

pub mod layout;
pub mod scale;
pub mod utilities;

use tracing::debug;

use crate::css::Node;
use crate::error::Result;
use crate::style::{BuildScope, Property, StyleOptions, StyleUnit, UtilityDeclaration};
use crate::theme::ThemeContext;

/// Output section a family belongs to, named by its `@olex` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Layouts,
    Utilities,
}

impl Group {
    /// Params of the `@olex` marker this group replaces.
    pub fn marker(self) -> &'static str {
        match self {
            Group::Layouts => "layouts",
            Group::Utilities => "utilities",
        }
    }
}

/// One modifier of a family: `[data-{attr}~="{value}"]{suffix}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Modifier {
    pub value: String,
    pub properties: Vec<Property>,
    /// Repeated per breakpoint.
    pub responsive: bool,
    /// Replaces the generated selector.
    pub selector: Option<String>,
}

impl Modifier {
    pub fn new(value: impl Into<String>, properties: Vec<Property>) -> Self {
        Self {
            value: value.into(),
            properties,
            responsive: true,
            selector: None,
        }
    }

    /// A single-property modifier. Values carrying `[]` take the direct value.
    pub fn keyed(value: impl Into<String>, property: &str, css: &str) -> Self {
        let value = value.into();
        let property = if value.contains("[]") {
            Property::direct(property)
        } else {
            Property::literal(property, css)
        };
        Self::new(value, vec![property])
    }

    /// Every property takes the direct value.
    pub fn direct(value: impl Into<String>, properties: &[&str]) -> Self {
        Self::new(value, properties.iter().map(|p| Property::direct(*p)).collect())
    }

    /// Builder: exclude from breakpoint grouping.
    pub fn fixed(mut self) -> Self {
        self.responsive = false;
        self
    }

    /// Builder: use `selector` verbatim.
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }
}

/// A utility family table entry.
#[derive(Debug, Clone, Copy)]
pub struct Family {
    pub name: &'static str,
    pub group: Group,
    /// Attribute name without `data-` and prefix.
    pub attribute: &'static str,
    /// Appended to every selector, e.g. ` > * + *`.
    pub suffix: &'static str,
    pub base: fn(&ThemeContext) -> Vec<Property>,
    pub modifiers: fn(&ThemeContext) -> Vec<Modifier>,
}

impl Family {
    pub fn selector(&self, ctx: &ThemeContext) -> String {
        format!("[{}]{}", ctx.attr(self.attribute), self.suffix)
    }

    pub fn modifier_selector(&self, ctx: &ThemeContext, value: &str) -> String {
        format!("[{}~=\"{value}\"]{}", ctx.attr(self.attribute), self.suffix)
    }
}

pub fn no_base(_: &ThemeContext) -> Vec<Property> {
    Vec::new()
}

pub fn no_modifiers(_: &ThemeContext) -> Vec<Modifier> {
    Vec::new()
}

macro_rules! family {
    ($name:literal, $group:ident, $attr:literal, $suffix:literal, $base:expr, $mods:expr) => {
        Family {
            name: $name,
            group: Group::$group,
            attribute: $attr,
            suffix: $suffix,
            base: $base,
            modifiers: $mods,
        }
    };
}

/// Every family, in output order.
pub static FAMILIES: &[Family] = &[
    family!("container", Layouts, "container", "", layout::container_base, layout::container),
    family!("over", Layouts, "over", "", layout::over_base, layout::over),
    family!("grid", Layouts, "grid", "", layout::grid_base, layout::grid),
    family!("grid-item", Layouts, "grid-item", "", no_base, layout::grid_item),
    family!("flex", Layouts, "flex", "", layout::flex_base, layout::flex),
    family!("flex-item", Layouts, "flex-item", "", layout::flex_item_base, layout::flex_item),
    family!("gap", Layouts, "gap", "", no_base, layout::gap),
    family!("order", Layouts, "order", "", no_base, layout::order),
    family!("place", Layouts, "place", "", no_base, layout::place),
    family!("margin", Layouts, "m", "", no_base, layout::margin),
    family!("padding", Layouts, "p", "", no_base, layout::padding),
    family!("space", Layouts, "space", " > * + *", no_base, layout::space),
    family!("width", Layouts, "width", "", no_base, layout::width),
    family!("height", Layouts, "height", "", no_base, layout::height),
    family!("size", Layouts, "size", "", no_base, layout::size),
    family!("aspect", Layouts, "aspect", "", no_base, layout::aspect),
    family!("display", Layouts, "display", "", no_base, layout::display),
    family!("position", Layouts, "position", "", no_base, layout::position),
    family!("inset", Layouts, "inset", "", no_base, layout::inset),
    family!("z-index", Layouts, "z-index", "", no_base, layout::z_index),
    family!("overflow", Layouts, "overflow", "", no_base, layout::overflow),
    family!("color", Utilities, "color", "", no_base, utilities::color),
    family!("bg", Utilities, "bg", "", no_base, utilities::background),
    family!("blend-mode", Utilities, "blend-mode", "", no_base, utilities::blend_mode),
    family!("border", Utilities, "border", "", no_base, utilities::border),
    family!("radius", Utilities, "radius", "", no_base, utilities::radius),
    family!("text", Utilities, "text", "", no_base, utilities::text),
    family!("font", Utilities, "font", "", no_base, utilities::font),
    family!("object", Utilities, "object", "", no_base, utilities::object),
    family!(
        "visually-hidden",
        Utilities,
        "visually-hidden",
        ":not(:focus)",
        utilities::visually_hidden_base,
        no_modifiers
    ),
];

/// Expand one family into CSS nodes. `None` when its attribute is unused.
pub async fn expand(family: &Family, scope: &BuildScope<'_>) -> Result<Option<Vec<Node>>> {
    let theme = scope.theme;
    let mut parent = StyleUnit::new(
        UtilityDeclaration::new(family.selector(theme), (family.base)(theme)),
        StyleOptions::default(),
    );
    if !parent.initialize(scope).await?.is_enabled() {
        debug!(family = family.name, "unused, skipped");
        return Ok(None);
    }

    for modifier in (family.modifiers)(theme) {
        let selector = match modifier.selector {
            Some(selector) => selector,
            None => family.modifier_selector(theme, &modifier.value),
        };
        let options = StyleOptions {
            is_media_query: modifier.responsive,
            ..StyleOptions::default()
        };
        let child = StyleUnit::new(UtilityDeclaration::new(selector, modifier.properties), options);
        parent.attach_modifier(&child, scope).await?;
    }

    let nodes = parent.emit(scope).await?;
    debug!(
        family = family.name,
        nodes = nodes.as_ref().map_or(0, Vec::len),
        "family expanded"
    );
    Ok(nodes)
}
