//! The compile pipeline: stylesheet text in, generated stylesheet text out.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::Config;
use crate::css::{parse_stylesheet, AtRule, Comment, Node, Stylesheet};
use crate::error::{Error, Result};
use crate::generator::{generate_utilities, MARKER};
use crate::style::BuildScope;
use crate::theme::{theme_nodes, ThemeContext};
use crate::usage::{ContentSource, UsageCache};

/// Layer the theme nodes are prepended into.
const THEME_LAYER: &str = "theme";

/// Compiles stylesheets against one config and one usage cache.
#[derive(Debug)]
pub struct Compiler {
    config: Config,
    cache: Arc<UsageCache>,
}

impl Compiler {
    /// A compiler whose cache scans the configured content globs.
    pub fn new(config: Config) -> Self {
        let source = ContentSource::new(config.root.clone(), config.content.clone());
        Self {
            cache: Arc::new(UsageCache::with_source(source)),
            config,
        }
    }

    /// A compiler sharing an existing cache.
    pub fn with_cache(config: Config, cache: Arc<UsageCache>) -> Self {
        Self { config, cache }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn cache(&self) -> &Arc<UsageCache> {
        &self.cache
    }

    /// Compile stylesheet text. Stylesheets without an olex directive only
    /// get their breakpoint `@media` queries resolved.
    pub async fn compile(&self, css: &str) -> Result<String> {
        let mut sheet = parse_stylesheet(css)?;
        if !is_olex_root(&sheet) {
            info!("no olex directive, stylesheet passed through");
            if !self.config.custom_media {
                resolve_media_queries(&mut sheet, &ThemeContext::from_config(&self.config));
            }
            return Ok(sheet.to_string());
        }

        let mut theme = ThemeContext::from_config(&self.config);
        theme.absorb_theme_blocks(&mut sheet);

        sheet.remove_at_rules(is_olex_import);
        sheet.nodes.insert(0, Node::Comment(banner()));
        if !sheet.prepend_into("layer", THEME_LAYER, theme_nodes(&theme)) {
            debug!("no @layer theme block, theme not emitted");
        }

        let scope = BuildScope::new(&theme, &self.cache);
        generate_utilities(&mut sheet, &scope).await?;

        if !self.config.custom_media {
            resolve_custom_media(&mut sheet, &theme);
        }

        Ok(sheet.to_string())
    }

    /// Read and compile a stylesheet file.
    pub async fn compile_file(&self, input: &Path) -> Result<String> {
        let css = tokio::fs::read_to_string(input)
            .await
            .map_err(|source| Error::Read {
                path: input.to_path_buf(),
                source,
            })?;
        self.compile(&css).await
    }

    /// Compile `input` and write the result to `output`.
    pub async fn build(&self, input: &Path, output: &Path) -> Result<()> {
        let css = self.compile_file(input).await?;
        tokio::fs::write(output, css)
            .await
            .map_err(|source| Error::Write {
                path: output.to_path_buf(),
                source,
            })?;
        info!("wrote {}", output.display());
        Ok(())
    }
}

fn banner() -> Comment {
    Comment::new(format!("! olex v{} | MIT License ", env!("CARGO_PKG_VERSION")))
}

/// `@import "olex"` with any quoting.
fn is_olex_import(at: &AtRule) -> bool {
    at.name == "import" && at.params.trim().trim_matches(|c| c == '"' || c == '\'') == "olex"
}

fn is_olex_root(sheet: &Stylesheet) -> bool {
    sheet.any_at_rule(|at| at.name == MARKER || is_olex_import(at))
}

/// Breakpoint key named by the first `--{prefix}{key}` in `params`.
fn breakpoint_key<'a>(params: &'a str, theme: &ThemeContext) -> Option<&'a str> {
    let needle = format!("--{}", theme.prefix());
    let start = params.find(&needle)? + needle.len();
    let rest = &params[start..];
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    let key = &rest[..end];
    theme.breakpoint(key).map(|_| key)
}

/// Drop breakpoint `@custom-media` rules and rewrite `@media (--key)` to the
/// breakpoint's width query.
fn resolve_custom_media(sheet: &mut Stylesheet, theme: &ThemeContext) {
    let dropped = sheet.remove_at_rules(|at| {
        at.name == "custom-media" && breakpoint_key(&at.params, theme).is_some()
    });
    debug!(dropped = dropped.len(), "custom media resolved");
    resolve_media_queries(sheet, theme);
}

/// Rewrite `@media (--{prefix}key)` to the breakpoint's width query.
fn resolve_media_queries(sheet: &mut Stylesheet, theme: &ThemeContext) {
    sheet.walk_at_rules_mut(&mut |at| {
        if at.name != "media" {
            return;
        }
        if let Some(value) = breakpoint_key(&at.params, theme).and_then(|key| theme.breakpoint(key)) {
            at.params = format!("screen and (width >= {value})");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn compiler(config: Config, html: &str) -> Compiler {
        let cache = UsageCache::new();
        cache.store_documents([html]);
        Compiler::with_cache(config, Arc::new(cache))
    }

    #[test]
    fn olex_import_quoting() {
        for params in ["\"olex\"", "'olex'", "olex"] {
            assert!(is_olex_import(&AtRule::statement("import", params)));
        }
        assert!(!is_olex_import(&AtRule::statement("import", "\"reset.css\"")));
    }

    #[test]
    fn breakpoint_keys_respect_prefix() {
        let theme = ThemeContext::new()
            .with_prefix("hl")
            .with_breakpoints(&[("md", "768px")]);
        assert_eq!(breakpoint_key("(--hl-md)", &theme), Some("md"));
        assert_eq!(breakpoint_key("(--md)", &theme), None);
        assert_eq!(breakpoint_key("(--hl-huge)", &theme), None);
    }

    #[tokio::test]
    async fn passthrough_without_directive() {
        let out = compiler(Config::default(), "")
            .compile("a{color:red}")
            .await
            .unwrap();
        assert_eq!(out, "a {\n  color: red;\n}\n");
    }

    #[tokio::test]
    async fn passthrough_resolves_breakpoint_media() {
        let css = "@custom-media --md screen and (width >= 768px);\n@media (--md) {\n  .card { padding: 2rem; }\n}";
        let out = compiler(Config::default(), "").compile(css).await.unwrap();
        assert!(out.contains("@media screen and (width >= 768px) {"));
        assert!(out.contains("@custom-media --md screen and (width >= 768px);"));
        assert!(!out.contains("@media (--md)"));
    }

    #[tokio::test]
    async fn passthrough_keeps_media_when_configured() {
        let config = Config {
            custom_media: true,
            ..Config::default()
        };
        let out = compiler(config, "")
            .compile("@media (--md) {\n  .card { padding: 2rem; }\n}")
            .await
            .unwrap();
        assert!(out.contains("@media (--md) {"));
    }

    #[tokio::test]
    async fn banner_leads_output() {
        let out = compiler(Config::default(), "")
            .compile("@import \"olex\";")
            .await
            .unwrap();
        assert_eq!(
            out.lines().next(),
            Some(format!("/*! olex v{} | MIT License */", env!("CARGO_PKG_VERSION")).as_str())
        );
        assert!(!out.contains("@import"));
    }

    #[tokio::test]
    async fn theme_fills_layer_and_media_resolves() {
        let css = "@import \"olex\";\n@layer theme {}\n@olex layouts;";
        let out = compiler(Config::default(), r#"<div data-m="md:4"></div>"#)
            .compile(css)
            .await
            .unwrap();
        assert!(out.contains(":root"));
        assert!(!out.contains("@custom-media"));
        assert!(out.contains("@media screen and (width >= 768px)"));
        assert!(out.contains(r#"[data-m~="md:4"]"#));
    }

    #[tokio::test]
    async fn custom_media_kept_when_configured() {
        let config = Config {
            custom_media: true,
            ..Config::default()
        };
        let css = "@layer theme {}\n@olex layouts;";
        let out = compiler(config, r#"<div data-m="md:4"></div>"#)
            .compile(css)
            .await
            .unwrap();
        assert!(out.contains("@custom-media --md screen and (width >= 768px);"));
        assert!(out.contains("@media (--md)"));
    }

    #[tokio::test]
    async fn theme_block_sets_prefix() {
        let css = "@theme { --prefix: hl; }\n@olex layouts;";
        let out = compiler(Config::default(), r#"<div data-hl-m="2"></div>"#)
            .compile(css)
            .await
            .unwrap();
        assert!(out.contains("[data-hl-m]"));
        assert!(out.contains("var(--hl-space-base)"));
        assert!(!out.contains("@theme"));
    }
}
