//! Immutable theme context threaded through every generation step.

use tracing::warn;

use crate::config::{scalar_text, Config};
use crate::css::{Node, Stylesheet};

/// Table holding the breakpoint scale.
pub const BREAKPOINT_TABLE: &str = "breakpoint";
/// Scalar holding the token prefix.
pub const PREFIX_KEY: &str = "prefix";

/// Ordered `key -> value` token table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenTable {
    entries: Vec<(String, String)>,
}

impl TokenTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace `key`. Replaced keys keep their position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A top-level theme entry: a scalar (`--name: v`) or a table
/// (`--table-key: v`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    Scalar(String),
    Table(TokenTable),
}

/// Theme tokens, prefix, and breakpoints for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeContext {
    /// Prefix including its trailing `-`, or empty.
    prefix: String,
    tokens: Vec<(String, TokenValue)>,
}

impl ThemeContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a context from config: prefix and theme tables.
    pub fn from_config(config: &Config) -> Self {
        let mut ctx = Self::new().with_prefix(&config.prefix);
        for (name, value) in &config.theme {
            match value {
                toml::Value::Table(table) => {
                    for (key, value) in table {
                        match scalar_text(value) {
                            Some(text) => ctx.set_token(name, key, text),
                            None => warn!("theme.{name}.{key}: unsupported value, skipped"),
                        }
                    }
                }
                other => match scalar_text(other) {
                    Some(text) => ctx.set_scalar(name, text),
                    None => warn!("theme.{name}: unsupported value, skipped"),
                },
            }
        }
        ctx
    }

    /// Builder: set the token prefix (without its trailing `-`).
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = hyphenated(prefix);
        self
    }

    /// Builder: set one table entry.
    pub fn with_token(mut self, table: &str, key: &str, value: &str) -> Self {
        self.set_token(table, key, value);
        self
    }

    /// Builder: set every breakpoint, in order.
    pub fn with_breakpoints(mut self, breakpoints: &[(&str, &str)]) -> Self {
        for &(key, value) in breakpoints {
            self.set_token(BREAKPOINT_TABLE, key, value);
        }
        self
    }

    fn set_token(&mut self, table: &str, key: &str, value: impl Into<String>) {
        match self.tokens.iter_mut().find(|(name, _)| name == table) {
            Some((_, TokenValue::Table(existing))) => existing.insert(key, value),
            // A scalar already owns this name.
            Some((_, TokenValue::Scalar(_))) => {}
            None => {
                let mut entries = TokenTable::new();
                entries.insert(key, value);
                self.tokens.push((table.to_string(), TokenValue::Table(entries)));
            }
        }
    }

    fn set_scalar(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if name == PREFIX_KEY {
            self.prefix = hyphenated(&value);
        }
        match self.tokens.iter_mut().find(|(n, _)| n == name) {
            Some((_, slot)) => *slot = TokenValue::Scalar(value),
            None => self.tokens.push((name.to_string(), TokenValue::Scalar(value))),
        }
    }

    /// Apply one theme declaration. `--a-b-c` splits at the last hyphen into
    /// table `a-b`, key `c`; a name without a hyphen is a scalar.
    pub fn apply_declaration(&mut self, property: &str, value: &str) {
        let property = property.trim();
        let name = property.strip_prefix("--").unwrap_or(property);
        let value = value.trim();
        match name.rfind('-') {
            Some(index) => self.set_token(&name[..index], &name[index + 1..], value),
            None => self.set_scalar(name, value),
        }
    }

    /// Consume every `@theme { ... }` block in `sheet`, applying its
    /// declarations in document order.
    pub fn absorb_theme_blocks(&mut self, sheet: &mut Stylesheet) {
        for block in sheet.remove_at_rules(|at| at.name == "theme") {
            self.apply_nodes(block.nodes.as_deref().unwrap_or_default());
        }
    }

    fn apply_nodes(&mut self, nodes: &[Node]) {
        for node in nodes {
            match node {
                Node::Declaration(decl) => self.apply_declaration(&decl.property, &decl.value),
                Node::Rule(rule) => self.apply_nodes(&rule.nodes),
                Node::AtRule(at) => self.apply_nodes(at.nodes.as_deref().unwrap_or_default()),
                Node::Comment(_) => {}
            }
        }
    }

    // ---------------------------------------------------------------------------
    // Lookups
    // ---------------------------------------------------------------------------

    /// Prefix including its trailing `-`, or empty.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn tokens(&self) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn table(&self, name: &str) -> Option<&TokenTable> {
        self.tokens.iter().find_map(|(n, v)| match v {
            TokenValue::Table(table) if n == name => Some(table),
            _ => None,
        })
    }

    pub fn token(&self, table: &str, key: &str) -> Option<&str> {
        self.table(table)?.get(key)
    }

    /// Breakpoints in declaration order.
    pub fn breakpoints(&self) -> impl Iterator<Item = (&str, &str)> {
        self.table(BREAKPOINT_TABLE).into_iter().flat_map(|table| table.iter())
    }

    pub fn breakpoint(&self, key: &str) -> Option<&str> {
        self.token(BREAKPOINT_TABLE, key)
    }

    // ---------------------------------------------------------------------------
    // Naming
    // ---------------------------------------------------------------------------

    /// Utility attribute name: `data-{prefix}{family}`.
    pub fn attr(&self, family: &str) -> String {
        format!("data-{}{family}", self.prefix)
    }

    /// Custom property reference for a table entry: `var(--{prefix}{table}-{key})`.
    pub fn var(&self, table: &str, key: &str) -> String {
        format!("var(--{}{table}-{key})", self.prefix)
    }

    /// Custom property reference by full name: `var(--{prefix}{name})`.
    pub fn var_name(&self, name: &str) -> String {
        format!("var(--{}{name})", self.prefix)
    }

    /// Custom property name: `--{prefix}{name}`.
    pub fn custom_property(&self, name: &str) -> String {
        format!("--{}{name}", self.prefix)
    }

    /// Params of the custom-media query for a breakpoint: `(--{prefix}{key})`.
    pub fn media_params(&self, key: &str) -> String {
        format!("(--{}{key})", self.prefix)
    }

    /// Prefix every `var(--` reference in `value`.
    pub fn prefix_vars(&self, value: &str) -> String {
        if self.prefix.is_empty() {
            return value.to_string();
        }
        value.replace("var(--", &format!("var(--{}", self.prefix))
    }
}

fn hyphenated(prefix: &str) -> String {
    if prefix.is_empty() {
        String::new()
    } else {
        format!("{prefix}-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::parse_stylesheet;
    use pretty_assertions::assert_eq;

    #[test]
    fn declarations_split_at_last_hyphen() {
        let mut ctx = ThemeContext::new();
        ctx.apply_declaration("--color-main", "#116ec5");
        ctx.apply_declaration("--font-fluid-sm", "16,20");
        ctx.apply_declaration("--to-rem", "0.0625rem");
        assert_eq!(ctx.token("color", "main"), Some("#116ec5"));
        assert_eq!(ctx.token("font-fluid", "sm"), Some("16,20"));
        assert_eq!(ctx.token("to", "rem"), Some("0.0625rem"));
    }

    #[test]
    fn later_declarations_replace_in_place() {
        let ctx = ThemeContext::new()
            .with_breakpoints(&[("sm", "576px"), ("md", "768px")])
            .with_token("breakpoint", "sm", "600px");
        let breakpoints: Vec<_> = ctx.breakpoints().collect();
        assert_eq!(breakpoints, vec![("sm", "600px"), ("md", "768px")]);
    }

    #[test]
    fn prefix_scalar_sets_prefix() {
        let mut ctx = ThemeContext::new();
        ctx.apply_declaration("--prefix", "hl");
        assert_eq!(ctx.prefix(), "hl-");
        assert_eq!(ctx.attr("m"), "data-hl-m");
        assert_eq!(ctx.var("space", "base"), "var(--hl-space-base)");
        assert_eq!(ctx.media_params("md"), "(--hl-md)");
    }

    #[test]
    fn empty_prefix_scalar_clears_prefix() {
        let mut ctx = ThemeContext::new().with_prefix("hl");
        ctx.apply_declaration("--prefix", "");
        assert_eq!(ctx.prefix(), "");
        assert_eq!(ctx.attr("m"), "data-m");
    }

    #[test]
    fn scalar_blocks_table_of_same_name() {
        let mut ctx = ThemeContext::new();
        ctx.apply_declaration("--gutter", "1rem");
        ctx.apply_declaration("--gutter-sm", "0.5rem");
        assert!(ctx.table("gutter").is_none());
        assert!(matches!(
            ctx.tokens().next(),
            Some(("gutter", TokenValue::Scalar(v))) if v == "1rem"
        ));
    }

    #[test]
    fn absorbs_and_removes_theme_blocks() {
        let mut sheet = parse_stylesheet(
            "@theme { --prefix: hl; --breakpoint-md: 768px; }\na { b: c }\n@theme { --space-base: 8; }",
        )
        .unwrap();
        let mut ctx = ThemeContext::new();
        ctx.absorb_theme_blocks(&mut sheet);

        assert_eq!(sheet.nodes.len(), 1);
        assert_eq!(ctx.prefix(), "hl-");
        assert_eq!(ctx.breakpoint("md"), Some("768px"));
        assert_eq!(ctx.token("space", "base"), Some("8"));
    }

    #[test]
    fn from_config_reads_tables_and_prefix() {
        let config = Config::from_toml_str(
            "prefix = \"ui\"\n[theme.space]\nbase = 8\nsm = \"0.5rem\"",
            ".",
        )
        .unwrap();
        let ctx = ThemeContext::from_config(&config);
        assert_eq!(ctx.prefix(), "ui-");
        assert_eq!(ctx.token("space", "base"), Some("8"));
        assert_eq!(ctx.breakpoint("xxs"), Some("375px"));
        assert_eq!(ctx.breakpoints().count(), 7);
    }

    #[test]
    fn prefix_vars_rewrites_references() {
        let ctx = ThemeContext::new().with_prefix("hl");
        assert_eq!(
            ctx.prefix_vars("calc(var(--space-base) * var(--to-rem))"),
            "calc(var(--hl-space-base) * var(--hl-to-rem))"
        );
        assert_eq!(ThemeContext::new().prefix_vars("var(--a)"), "var(--a)");
    }
}
