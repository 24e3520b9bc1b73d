//! The style unit: one utility rule plus the modifiers attached to it.
//!
//! A unit resolves lazily. The first call to [`StyleUnit::initialize`] loads
//! the usage index, matches the selector, and materializes the base rule and
//! any direct-value rules; every later call, concurrent or not, observes the
//! same result.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::trace;

use crate::css::{Node, Rule};
use crate::error::Result;
use crate::matcher::{match_selector, SelectorMatch};
use crate::selector::rewrite_modifier;
use crate::style::declaration::UtilityDeclaration;
use crate::style::direct::expand_direct;
use crate::style::media::group_media;
use crate::theme::ThemeContext;
use crate::usage::{UsageCache, UsageIndex};

/// Per-unit switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleOptions {
    /// Repeat this unit per breakpoint when attached as a modifier.
    pub is_media_query: bool,
    /// Nest modifiers as `&:where(S)` rather than `&S`.
    pub is_where: bool,
    /// Emit media blocks beside the base rule, each wrapping a copy of the
    /// base selector, instead of nesting them inside the base rule.
    pub is_root_nesting: bool,
    /// Gate on usage. When unset the unit is always enabled.
    pub is_use_only: bool,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            is_media_query: false,
            is_where: true,
            is_root_nesting: true,
            is_use_only: true,
        }
    }
}

impl StyleOptions {
    /// Builder: mark as participating in breakpoint grouping.
    pub fn media_query(mut self) -> Self {
        self.is_media_query = true;
        self
    }
}

/// Initialization state of a [`StyleUnit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninit,
    Initializing,
    Ready,
}

/// What one generation run reads: the theme and the usage cache.
#[derive(Debug, Clone, Copy)]
pub struct BuildScope<'a> {
    pub theme: &'a ThemeContext,
    pub usage: &'a UsageCache,
}

impl<'a> BuildScope<'a> {
    pub fn new(theme: &'a ThemeContext, usage: &'a UsageCache) -> Self {
        Self { theme, usage }
    }
}

/// Resolved state of an initialized unit.
#[derive(Debug)]
pub struct Ready {
    usage: Arc<UsageIndex>,
    matched: SelectorMatch,
    rule: Option<Rule>,
    direct_rules: Vec<Rule>,
}

impl Ready {
    pub fn is_enabled(&self) -> bool {
        self.matched.enabled
    }

    pub fn matched(&self) -> &SelectorMatch {
        &self.matched
    }

    /// The base rule, absent while a direct placeholder is unresolved.
    pub fn rule(&self) -> Option<&Rule> {
        self.rule.as_ref()
    }

    pub fn direct_rules(&self) -> &[Rule] {
        &self.direct_rules
    }
}

/// A modifier recorded on its parent for later breakpoint grouping.
///
/// Links are kept whether or not the modifier was enabled at attach time;
/// grouping re-checks usage against the breakpoint-scoped selector.
#[derive(Debug, Clone)]
pub struct ModifierLink {
    pub declaration: Arc<UtilityDeclaration>,
    pub is_media_query: bool,
    pub is_direct_rule: bool,
}

#[derive(Debug)]
pub struct StyleUnit {
    declaration: Arc<UtilityDeclaration>,
    options: StyleOptions,
    started: AtomicBool,
    ready: OnceCell<Ready>,
    nested: Vec<Node>,
    modifiers: Vec<ModifierLink>,
}

impl StyleUnit {
    pub fn new(declaration: UtilityDeclaration, options: StyleOptions) -> Self {
        Self {
            declaration: Arc::new(declaration),
            options,
            started: AtomicBool::new(false),
            ready: OnceCell::new(),
            nested: Vec::new(),
            modifiers: Vec::new(),
        }
    }

    pub fn declaration(&self) -> &UtilityDeclaration {
        &self.declaration
    }

    pub fn options(&self) -> StyleOptions {
        self.options
    }

    pub fn modifiers(&self) -> &[ModifierLink] {
        &self.modifiers
    }

    pub fn phase(&self) -> Phase {
        if self.ready.initialized() {
            Phase::Ready
        } else if self.started.load(Ordering::Acquire) {
            Phase::Initializing
        } else {
            Phase::Uninit
        }
    }

    /// Resolve the unit once. Concurrent callers await the same work.
    pub async fn initialize(&self, scope: &BuildScope<'_>) -> Result<&Ready> {
        let result = self.ready.get_or_try_init(|| self.resolve(scope)).await;
        if result.is_err() {
            self.started.store(false, Ordering::Release);
        }
        result
    }

    async fn resolve(&self, scope: &BuildScope<'_>) -> Result<Ready> {
        self.started.store(true, Ordering::Release);
        let usage = scope.usage.load().await?;

        let declaration = &self.declaration;
        let matched = match_selector(&declaration.selector, &usage, self.options.is_use_only);
        let rule = declaration.resolve_literal();
        let direct_rules = if matched.direct_values.is_empty() {
            Vec::new()
        } else {
            expand_direct(
                &declaration.selector,
                &declaration.properties,
                &matched.direct_values,
                scope.theme.prefix(),
            )
        };

        trace!(
            selector = %declaration.selector,
            enabled = matched.enabled,
            direct = direct_rules.len(),
            "style unit ready"
        );

        Ok(Ready {
            usage,
            matched,
            rule,
            direct_rules,
        })
    }

    /// Attach `child` as a modifier of this unit.
    ///
    /// Enabled literal modifiers and every expanded direct rule are nested
    /// under the base rule now; the link itself is kept for breakpoint
    /// grouping in [`emit`](Self::emit).
    pub async fn attach_modifier(&mut self, child: &StyleUnit, scope: &BuildScope<'_>) -> Result<()> {
        self.initialize(scope).await?;
        let ready = child.initialize(scope).await?;
        let is_where = self.options.is_where;
        let is_direct_rule = child.declaration.has_direct();

        if is_direct_rule {
            for rule in &ready.direct_rules {
                self.nested.push(Node::Rule(nest(rule, is_where)));
            }
        } else if ready.matched.enabled {
            if let Some(rule) = &ready.rule {
                self.nested.push(Node::Rule(nest(rule, is_where)));
            }
        }

        self.modifiers.push(ModifierLink {
            declaration: Arc::clone(&child.declaration),
            is_media_query: child.options.is_media_query,
            is_direct_rule,
        });
        Ok(())
    }

    /// Produce this unit's output, or `None` when it is disabled.
    ///
    /// With root nesting the result is `[base, @media...]`; otherwise the
    /// media blocks are nested inside the base rule.
    pub async fn emit(&self, scope: &BuildScope<'_>) -> Result<Option<Vec<Node>>> {
        let ready = self.initialize(scope).await?;
        if !ready.matched.enabled {
            return Ok(None);
        }
        let Some(mut base) = ready.rule.clone() else {
            return Ok(None);
        };
        base.nodes.extend(self.nested.iter().cloned());

        let media = group_media(
            &self.declaration.selector,
            &self.modifiers,
            &self.options,
            &ready.usage,
            scope.theme,
        );

        if self.options.is_root_nesting {
            let mut nodes = Vec::with_capacity(media.len() + 1);
            nodes.push(Node::Rule(base));
            nodes.extend(media.into_iter().map(Node::AtRule));
            Ok(Some(nodes))
        } else {
            base.nodes.extend(media.into_iter().map(Node::AtRule));
            Ok(Some(vec![Node::Rule(base)]))
        }
    }
}

fn nest(rule: &Rule, is_where: bool) -> Rule {
    Rule {
        selector: rewrite_modifier(&rule.selector, is_where),
        nodes: rule.nodes.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::css::{AtRule, Declaration};
    use crate::style::declaration::Property;
    use pretty_assertions::assert_eq;

    fn theme() -> ThemeContext {
        ThemeContext::new().with_breakpoints(&[("sm", "576px"), ("md", "768px")])
    }

    fn cache(documents: &[&str]) -> UsageCache {
        let cache = UsageCache::new();
        cache.store_documents(documents);
        cache
    }

    fn unit(selector: &str, properties: Vec<Property>) -> StyleUnit {
        StyleUnit::new(UtilityDeclaration::new(selector, properties), StyleOptions::default())
    }

    fn modifier(selector: &str, properties: Vec<Property>) -> StyleUnit {
        StyleUnit::new(
            UtilityDeclaration::new(selector, properties),
            StyleOptions::default().media_query(),
        )
    }

    fn selectors(nodes: &[Node]) -> Vec<String> {
        nodes
            .iter()
            .filter_map(|n| match n {
                Node::Rule(rule) => Some(rule.selector.clone()),
                _ => None,
            })
            .collect()
    }

    // ── Initialization ───────────────────────────────────────────────

    #[tokio::test]
    async fn initialization_is_memoized() {
        let theme = theme();
        let usage = cache(&[r#"<div data-m="4"></div>"#]);
        let scope = BuildScope::new(&theme, &usage);
        let base = unit("[data-m]", vec![]);

        assert_eq!(base.phase(), Phase::Uninit);
        let (a, b) = tokio::join!(base.initialize(&scope), base.initialize(&scope));
        assert!(std::ptr::eq(a.unwrap(), b.unwrap()));
        assert_eq!(base.phase(), Phase::Ready);
        assert!(base.initialize(&scope).await.unwrap().is_enabled());
    }

    #[tokio::test]
    async fn failed_initialization_resets_phase() {
        let theme = theme();
        let usage = UsageCache::new();
        let scope = BuildScope::new(&theme, &usage);
        let base = unit("[data-m]", vec![]);

        assert!(base.initialize(&scope).await.is_err());
        assert_eq!(base.phase(), Phase::Uninit);
    }

    #[tokio::test]
    async fn ungated_unit_is_always_enabled() {
        let theme = theme();
        let usage = cache(&[]);
        let scope = BuildScope::new(&theme, &usage);
        let options = StyleOptions {
            is_use_only: false,
            ..StyleOptions::default()
        };
        let base = StyleUnit::new(UtilityDeclaration::new("[data-m]", vec![]), options);
        assert!(base.initialize(&scope).await.unwrap().is_enabled());
    }

    // ── Modifiers ────────────────────────────────────────────────────

    #[tokio::test]
    async fn enabled_modifier_nests_under_base() {
        let theme = theme();
        let usage = cache(&[r#"<div data-m="4"></div>"#]);
        let scope = BuildScope::new(&theme, &usage);

        let mut base = unit("[data-m]", vec![]);
        for value in ["4", "5"] {
            let child = modifier(
                &format!(r#"[data-m~="{value}"]"#),
                vec![Property::literal("margin", value)],
            );
            base.attach_modifier(&child, &scope).await.unwrap();
        }

        let nodes = base.emit(&scope).await.unwrap().unwrap();
        assert_eq!(nodes.len(), 1);
        let Node::Rule(rule) = &nodes[0] else {
            panic!("expected rule");
        };
        assert_eq!(selectors(&rule.nodes), vec![r#"&:where([data-m~="4"])"#]);
        assert_eq!(base.modifiers().len(), 2);
    }

    #[tokio::test]
    async fn plain_nesting_without_where() {
        let theme = theme();
        let usage = cache(&[r#"<div data-m="4"></div>"#]);
        let scope = BuildScope::new(&theme, &usage);
        let options = StyleOptions {
            is_where: false,
            ..StyleOptions::default()
        };

        let mut base = StyleUnit::new(UtilityDeclaration::new("[data-m]", vec![]), options);
        let child = modifier(r#"[data-m~="4"]"#, vec![Property::literal("margin", "4px")]);
        base.attach_modifier(&child, &scope).await.unwrap();

        let nodes = base.emit(&scope).await.unwrap().unwrap();
        let Node::Rule(rule) = &nodes[0] else {
            panic!("expected rule");
        };
        assert_eq!(selectors(&rule.nodes), vec![r#"&[data-m~="4"]"#]);
    }

    #[tokio::test]
    async fn disabled_base_emits_nothing() {
        let theme = theme();
        let usage = cache(&[r#"<div data-p="4"></div>"#]);
        let scope = BuildScope::new(&theme, &usage);
        let base = unit("[data-m]", vec![]);
        assert_eq!(base.emit(&scope).await.unwrap(), None);
    }

    #[tokio::test]
    async fn direct_modifier_expands_without_placeholder_leak() {
        let theme = theme();
        let usage = cache(&[r#"<div data-m="y-[12px] [3rem]"></div>"#]);
        let scope = BuildScope::new(&theme, &usage);

        let mut base = unit("[data-m]", vec![]);
        let child = modifier(
            r#"[data-m~="y-[]"]"#,
            vec![Property::direct("margin-top"), Property::direct("margin-bottom")],
        );
        base.attach_modifier(&child, &scope).await.unwrap();

        let nodes = base.emit(&scope).await.unwrap().unwrap();
        let Node::Rule(rule) = &nodes[0] else {
            panic!("expected rule");
        };
        assert_eq!(
            rule.nodes,
            vec![Node::Rule(
                Rule::new(r#"&:where([data-m~="y-[12px]"])"#)
                    .with_declaration("margin-top", "12px")
                    .with_declaration("margin-bottom", "12px")
            )]
        );
        assert!(base.modifiers()[0].is_direct_rule);
    }

    // ── Breakpoints ──────────────────────────────────────────────────

    #[tokio::test]
    async fn media_blocks_follow_breakpoint_order() {
        let theme = theme();
        let usage = cache(&[r#"<div data-m="md:4 sm:4"></div>"#]);
        let scope = BuildScope::new(&theme, &usage);

        let mut base = unit("[data-m]", vec![]);
        let child = modifier(r#"[data-m~="4"]"#, vec![Property::literal("margin", "4px")]);
        base.attach_modifier(&child, &scope).await.unwrap();

        let nodes = base.emit(&scope).await.unwrap().unwrap();
        let params: Vec<_> = nodes
            .iter()
            .filter_map(|n| match n {
                Node::AtRule(at) => Some(at.params.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(params, vec!["(--sm)", "(--md)"]);

        let Node::AtRule(sm) = &nodes[1] else {
            panic!("expected media");
        };
        assert_eq!(
            sm,
            &AtRule::block(
                "media",
                "(--sm)",
                vec![Node::Rule(Rule {
                    selector: "[data-m]".into(),
                    nodes: vec![Node::Rule(
                        Rule::new(r#"&:where([data-m~="sm:4"])"#).with_declaration("margin", "4px")
                    )],
                })],
            )
        );
    }

    #[tokio::test]
    async fn unused_breakpoints_are_omitted() {
        let theme = theme();
        let usage = cache(&[r#"<div data-m="4"></div>"#]);
        let scope = BuildScope::new(&theme, &usage);

        let mut base = unit("[data-m]", vec![]);
        let child = modifier(r#"[data-m~="4"]"#, vec![Property::literal("margin", "4px")]);
        base.attach_modifier(&child, &scope).await.unwrap();

        let nodes = base.emit(&scope).await.unwrap().unwrap();
        assert_eq!(nodes.len(), 1);
        assert!(nodes.iter().all(|n| !matches!(n, Node::AtRule(_))));
    }

    #[tokio::test]
    async fn non_responsive_modifiers_skip_grouping() {
        let theme = theme();
        let usage = cache(&[r#"<div data-m="md:4"></div>"#]);
        let scope = BuildScope::new(&theme, &usage);

        let mut base = unit("[data-m]", vec![]);
        let child = unit(r#"[data-m~="4"]"#, vec![Property::literal("margin", "4px")]);
        base.attach_modifier(&child, &scope).await.unwrap();

        let nodes = base.emit(&scope).await.unwrap().unwrap();
        assert_eq!(nodes.len(), 1);
    }

    #[tokio::test]
    async fn direct_values_regroup_per_breakpoint() {
        let theme = theme();
        let usage = cache(&[r#"<div data-m="md:fluid-[16,32]"></div>"#]);
        let scope = BuildScope::new(&theme, &usage);

        let mut base = unit("[data-m]", vec![]);
        let child = modifier(r#"[data-m~="[]"]"#, vec![Property::direct("margin")]);
        base.attach_modifier(&child, &scope).await.unwrap();

        let nodes = base.emit(&scope).await.unwrap().unwrap();
        assert_eq!(nodes.len(), 2);
        let Node::AtRule(md) = &nodes[1] else {
            panic!("expected media");
        };
        assert_eq!(md.params, "(--md)");
        let Some([Node::Rule(wrapper)]) = md.nodes.as_deref() else {
            panic!("expected wrapper rule");
        };
        let Node::Rule(inner) = &wrapper.nodes[0] else {
            panic!("expected nested rule");
        };
        assert_eq!(inner.selector, r#"&:where([data-m~="md:fluid-[16,32]"])"#);
        let Node::Declaration(Declaration { value, .. }) = &inner.nodes[0] else {
            panic!("expected declaration");
        };
        assert!(value.starts_with("clamp("));
    }

    #[tokio::test]
    async fn media_nested_without_root_nesting() {
        let theme = theme();
        let usage = cache(&[r#"<div data-m="sm:4"></div>"#]);
        let scope = BuildScope::new(&theme, &usage);
        let options = StyleOptions {
            is_root_nesting: false,
            ..StyleOptions::default()
        };

        let mut base = StyleUnit::new(UtilityDeclaration::new("[data-m]", vec![]), options);
        let child = modifier(r#"[data-m~="4"]"#, vec![Property::literal("margin", "4px")]);
        base.attach_modifier(&child, &scope).await.unwrap();

        let nodes = base.emit(&scope).await.unwrap().unwrap();
        assert_eq!(nodes.len(), 1);
        let Node::Rule(rule) = &nodes[0] else {
            panic!("expected rule");
        };
        assert_eq!(
            rule.nodes,
            vec![Node::AtRule(AtRule::block(
                "media",
                "(--sm)",
                vec![Node::Rule(
                    Rule::new(r#"&:where([data-m~="sm:4"])"#).with_declaration("margin", "4px")
                )],
            ))]
        );
    }
}
