//! Value scales shared by the family tables.

use std::ops::RangeInclusive;

use crate::families::Modifier;
use crate::style::Property;
use crate::theme::ThemeContext;

/// Theme size keys and the utility value names they are exposed under.
const SIZE_ALIASES: &[(&str, &str)] = &[
    ("4xs", "4xsmall"),
    ("3xs", "3xsmall"),
    ("2xs", "2xsmall"),
    ("xs", "xsmall"),
    ("sm", "small"),
    ("md", "medium"),
    ("lg", "large"),
    ("xl", "xlarge"),
    ("2xl", "2xlarge"),
    ("3xl", "3xlarge"),
    ("4xl", "4xlarge"),
];

/// Numeric steps of the spacing scale.
pub const SPACE_STEPS: RangeInclusive<u32> = 0..=20;

pub fn size_alias(key: &str) -> Option<&'static str> {
    SIZE_ALIASES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, alias)| *alias)
}

/// `(alias, var(--{table}-{key}))` for every aliased key of `table`, in
/// table order. Keys without an alias are skipped.
pub fn aliased(ctx: &ThemeContext, table: &str) -> Vec<(String, String)> {
    ctx.table(table)
        .into_iter()
        .flat_map(|t| t.keys())
        .filter_map(|key| size_alias(key).map(|alias| (alias.to_string(), ctx.var(table, key))))
        .collect()
}

/// `(alias-or-key, var(--{table}-{key}))` for every key of `table`.
pub fn keyed(ctx: &ThemeContext, table: &str) -> Vec<(String, String)> {
    ctx.table(table)
        .into_iter()
        .flat_map(|t| t.keys())
        .map(|key| {
            let name = size_alias(key).unwrap_or(key);
            (name.to_string(), ctx.var(table, key))
        })
        .collect()
}

/// `calc(var(--space-base) * {step} * var(--to-rem))`.
pub fn space_step(ctx: &ThemeContext, step: u32) -> String {
    format!(
        "calc({} * {step} * {})",
        ctx.var("space", "base"),
        ctx.var_name("to-rem")
    )
}

/// `inherit`, `current`, `transparent`, then every `color` token.
pub fn color_values(ctx: &ThemeContext) -> Vec<(String, String)> {
    let mut values = vec![
        ("inherit".to_string(), "inherit".to_string()),
        ("current".to_string(), "currentColor".to_string()),
        ("transparent".to_string(), "transparent".to_string()),
    ];
    values.extend(
        ctx.table("color")
            .into_iter()
            .flat_map(|t| t.keys())
            .map(|key| (key.to_string(), ctx.var("color", key))),
    );
    values
}

/// A value prefix and the properties it sets, e.g. `y-` -> top and bottom.
#[derive(Debug, Clone)]
pub struct Side {
    pub prefix: &'static str,
    pub properties: Vec<String>,
}

impl Side {
    pub fn new(prefix: &'static str, properties: &[&str]) -> Self {
        Self {
            prefix,
            properties: properties.iter().map(|p| p.to_string()).collect(),
        }
    }

    fn set(&self, value: &str) -> Vec<Property> {
        self.properties
            .iter()
            .map(|p| Property::literal(p.clone(), value))
            .collect()
    }
}

/// Spacing modifiers across `sides`: the named `space` sizes first, then
/// steps 0..=20 ascending.
pub fn spacing(ctx: &ThemeContext, sides: &[Side]) -> Vec<Modifier> {
    let mut out = Vec::new();
    for (alias, value) in aliased(ctx, "space") {
        for side in sides {
            out.push(Modifier::new(format!("{}{alias}", side.prefix), side.set(&value)));
        }
    }
    for step in SPACE_STEPS {
        let value = space_step(ctx, step);
        for side in sides {
            out.push(Modifier::new(format!("{}{step}", side.prefix), side.set(&value)));
        }
    }
    out
}

/// One `{prefix}[]` direct modifier per side.
pub fn directs(sides: &[Side]) -> Vec<Modifier> {
    sides
        .iter()
        .map(|side| {
            let properties: Vec<&str> = side.properties.iter().map(String::as_str).collect();
            Modifier::direct(format!("{}[]", side.prefix), &properties)
        })
        .collect()
}
