//! Theme emission: custom media per breakpoint and a `:root` rule carrying
//! every token as a custom property.

use crate::css::{AtRule, Comment, Declaration, Node, Rule};
use crate::theme::context::{ThemeContext, TokenValue, BREAKPOINT_TABLE, PREFIX_KEY};

/// Table whose keys drive the per-breakpoint `--design-viewport` override.
pub const DESIGN_WIDTH_TABLE: &str = "design-width";

/// Build the theme nodes: `@custom-media` per breakpoint, then `:root`.
pub fn theme_nodes(ctx: &ThemeContext) -> Vec<Node> {
    let mut nodes: Vec<Node> = custom_media(ctx).into_iter().map(Node::AtRule).collect();
    nodes.push(Node::Rule(root_rule(ctx)));
    nodes
}

/// `@custom-media --{prefix}{key} screen and (width >= {value});`
pub fn custom_media(ctx: &ThemeContext) -> Vec<AtRule> {
    ctx.breakpoints()
        .map(|(key, value)| {
            AtRule::statement(
                "custom-media",
                format!("--{}{key} screen and (width >= {value})", ctx.prefix()),
            )
        })
        .collect()
}

fn root_rule(ctx: &ThemeContext) -> Rule {
    let prefix = ctx.prefix();
    let mut rule = Rule::new(":root");

    for (name, value) in ctx.tokens() {
        if name == PREFIX_KEY || name == BREAKPOINT_TABLE {
            continue;
        }
        rule.nodes.push(Node::Comment(Comment::new(format!(" {} ", heading(name)))));
        match value {
            TokenValue::Table(table) => {
                for (key, value) in table.iter() {
                    rule.nodes.push(Node::Declaration(Declaration::new(
                        format!("--{prefix}{name}-{key}"),
                        ctx.prefix_vars(value),
                    )));
                }
            }
            TokenValue::Scalar(value) => {
                rule.nodes.push(Node::Declaration(Declaration::new(
                    format!("--{prefix}{name}"),
                    ctx.prefix_vars(value),
                )));
            }
        }
    }

    rule.nodes.extend(design_viewport(ctx));
    rule
}

/// `--design-viewport` on `:root` for the first design width with a
/// breakpoint, then one media override per later design width.
fn design_viewport(ctx: &ThemeContext) -> Vec<Node> {
    let Some(widths) = ctx.table(DESIGN_WIDTH_TABLE) else {
        return Vec::new();
    };

    let prefix = ctx.prefix();
    let property = format!("--{prefix}design-viewport");
    let mut nodes = vec![Node::Comment(Comment::new(" Viewport "))];
    let mut first = true;

    for key in widths.keys().filter(|key| ctx.breakpoint(key).is_some()) {
        let decl = Declaration::new(property.clone(), ctx.var(DESIGN_WIDTH_TABLE, key));
        if first {
            nodes.push(Node::Declaration(decl));
            first = false;
        } else {
            nodes.push(Node::AtRule(AtRule::block(
                "media",
                ctx.media_params(key),
                vec![Node::Declaration(decl)],
            )));
        }
    }

    nodes
}

/// `font-fluid` -> `Font fluid`.
fn heading(name: &str) -> String {
    let spaced = name.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
