//! Breakpoint grouping of responsive modifiers.

use crate::css::{AtRule, Node, Rule};
use crate::matcher::match_selector;
use crate::selector::{rewrite_for_breakpoint, rewrite_modifier};
use crate::style::direct::expand_direct;
use crate::style::unit::{ModifierLink, StyleOptions};
use crate::theme::ThemeContext;
use crate::usage::UsageIndex;

/// One `@media (--{prefix}{key})` block per breakpoint, in table order, for
/// the responsive links whose breakpoint-scoped selector is in use.
/// Breakpoints with nothing in use produce no block.
pub fn group_media(
    selector: &str,
    links: &[ModifierLink],
    options: &StyleOptions,
    usage: &UsageIndex,
    theme: &ThemeContext,
) -> Vec<AtRule> {
    let mut blocks = Vec::new();

    for (key, _) in theme.breakpoints() {
        let mut included: Vec<Node> = Vec::new();

        for link in links.iter().filter(|link| link.is_media_query) {
            let scoped = rewrite_for_breakpoint(&link.declaration.selector, key);
            let matched = match_selector(&scoped, usage, options.is_use_only);
            if !matched.enabled {
                continue;
            }

            let target = rewrite_modifier(&scoped, options.is_where);
            if link.is_direct_rule {
                let rules = expand_direct(
                    &target,
                    &link.declaration.properties,
                    &matched.direct_values,
                    theme.prefix(),
                );
                included.extend(rules.into_iter().map(Node::Rule));
            } else if let Some(mut rule) = link.declaration.resolve_literal() {
                rule.selector = target;
                included.push(Node::Rule(rule));
            }
        }

        if included.is_empty() {
            continue;
        }

        let body = if options.is_root_nesting {
            vec![Node::Rule(Rule {
                selector: selector.to_string(),
                nodes: included,
            })]
        } else {
            included
        };
        blocks.push(AtRule::block("media", theme.media_params(key), body));
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::declaration::{Property, UtilityDeclaration};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn link(selector: &str, properties: Vec<Property>, is_media_query: bool) -> ModifierLink {
        let declaration = UtilityDeclaration::new(selector, properties);
        ModifierLink {
            is_direct_rule: declaration.has_direct(),
            declaration: Arc::new(declaration),
            is_media_query,
        }
    }

    fn theme() -> ThemeContext {
        ThemeContext::new().with_breakpoints(&[("sm", "576px"), ("md", "768px"), ("lg", "1024px")])
    }

    #[test]
    fn no_usage_means_no_blocks() {
        let usage = UsageIndex::new().with("data-color", ["red"]);
        let links = [link(r#"[data-color~="red"]"#, vec![Property::literal("color", "red")], true)];
        let blocks = group_media("[data-color]", &links, &StyleOptions::default(), &usage, &theme());
        assert!(blocks.is_empty());
    }

    #[test]
    fn modifiers_keep_attachment_order() {
        let usage = UsageIndex::new().with("data-color", ["lg:blue lg:red"]);
        let links = [
            link(r#"[data-color~="red"]"#, vec![Property::literal("color", "red")], true),
            link(r#"[data-color~="blue"]"#, vec![Property::literal("color", "blue")], true),
        ];
        let blocks = group_media("[data-color]", &links, &StyleOptions::default(), &usage, &theme());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].params, "(--lg)");

        let Some([Node::Rule(wrapper)]) = blocks[0].nodes.as_deref() else {
            panic!("expected wrapper rule");
        };
        assert_eq!(wrapper.selector, "[data-color]");
        let nested: Vec<_> = wrapper
            .nodes
            .iter()
            .filter_map(|n| match n {
                Node::Rule(rule) => Some(rule.selector.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            nested,
            vec![r#"&:where([data-color~="lg:red"])"#, r#"&:where([data-color~="lg:blue"])"#]
        );
    }

    #[test]
    fn prefixed_media_params() {
        let usage = UsageIndex::new().with("data-hl-m", ["sm:4"]);
        let links = [link(r#"[data-hl-m~="4"]"#, vec![Property::literal("margin", "4px")], true)];
        let theme = theme().with_prefix("hl");
        let blocks = group_media("[data-hl-m]", &links, &StyleOptions::default(), &usage, &theme);
        assert_eq!(blocks[0].params, "(--hl-sm)");
    }

    #[test]
    fn style_custom_properties_are_scoped() {
        let usage = UsageIndex::new().with("style", ["--sm-cols:"]);
        let links = [link(
            r#"[style~="--cols:"]"#,
            vec![Property::literal("grid-template-columns", "repeat(var(--cols), 1fr)")],
            true,
        )];
        let blocks = group_media("[data-grid]", &links, &StyleOptions::default(), &usage, &theme());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].params, "(--sm)");
    }
}
