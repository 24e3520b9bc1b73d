//! Family expansion into a stylesheet's `@olex` markers.

use tracing::debug;

use crate::css::{Node, Stylesheet};
use crate::error::Result;
use crate::families::{expand, Group, FAMILIES};
use crate::style::BuildScope;

/// At-rule name of the insertion markers.
pub const MARKER: &str = "olex";

/// Expand every family whose group marker is present and splice the nodes in
/// place of the marker. Families keep table order.
pub async fn generate_utilities(root: &mut Stylesheet, scope: &BuildScope<'_>) -> Result<()> {
    for group in [Group::Layouts, Group::Utilities] {
        if !root.any_at_rule(|at| at.is(MARKER, group.marker())) {
            debug!(group = group.marker(), "no marker, skipped");
            continue;
        }

        let mut nodes: Vec<Node> = Vec::new();
        for family in FAMILIES.iter().filter(|f| f.group == group) {
            if let Some(expanded) = expand(family, scope).await? {
                nodes.extend(expanded);
            }
        }

        debug!(group = group.marker(), nodes = nodes.len(), "group generated");
        root.splice_at_marker(MARKER, group.marker(), nodes);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::parse_stylesheet;
    use crate::theme::ThemeContext;
    use crate::usage::UsageCache;
    use pretty_assertions::assert_eq;

    async fn generate(css: &str, html: &str) -> String {
        let theme = ThemeContext::new().with_breakpoints(&[("md", "768px")]);
        let usage = UsageCache::new();
        usage.store_documents([html]);
        let mut sheet = parse_stylesheet(css).unwrap();
        generate_utilities(&mut sheet, &BuildScope::new(&theme, &usage))
            .await
            .unwrap();
        sheet.to_string()
    }

    #[tokio::test]
    async fn splices_at_marker_position() {
        let out = generate(
            "a { color: red; }\n@olex layouts;\nb { color: blue; }",
            r#"<div data-m="4"></div>"#,
        )
        .await;
        let a = out.find("a {").unwrap();
        let m = out.find("[data-m]").unwrap();
        let b = out.find("b {").unwrap();
        assert!(a < m && m < b);
        assert!(!out.contains("@olex"));
    }

    #[tokio::test]
    async fn missing_marker_group_is_not_generated() {
        let out = generate("@olex utilities;", r#"<div data-m="4" data-color="inherit"></div>"#).await;
        assert!(!out.contains("[data-m]"));
        assert!(out.contains("[data-color]"));
    }

    #[tokio::test]
    async fn families_keep_table_order() {
        let out = generate(
            "@olex layouts;",
            r#"<div data-p="2" data-m="2" data-grid="cols-2"></div>"#,
        )
        .await;
        let grid = out.find("[data-grid]").unwrap();
        let m = out.find("[data-m]").unwrap();
        let p = out.find("[data-p]").unwrap();
        assert!(grid < m && m < p);
    }

    #[tokio::test]
    async fn unused_markup_leaves_marker_empty() {
        let out = generate("@olex layouts;\na { color: red; }", "<p>plain</p>").await;
        assert_eq!(out.trim(), "a {\n  color: red;\n}");
    }

    #[tokio::test]
    async fn responsive_modifier_groups_under_media() {
        let out = generate("@olex layouts;", r#"<div data-m="md:4"></div>"#).await;
        assert!(out.contains("@media (--md)"));
        assert!(out.contains(r#"[data-m~="md:4"]"#));
    }
}
