//! Integration tests for olex.
//!
//! These tests drive the public API from outside the crate: a project on disk,
//! a config file, content globs, and a compiled stylesheet.

use std::fs;
use std::path::Path;

use olex::config::CONFIG_FILE;
use olex::{build_usage_index, compute_fluid, Compiler, Config};
use tempfile::TempDir;

const ENTRY: &str = "@import \"olex\";\n@layer theme {}\n@layer layout {\n  @olex layouts;\n}\n@olex utilities;\n";

fn project(config: &str, html: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(CONFIG_FILE), config).unwrap();
    fs::create_dir_all(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/index.html"), html).unwrap();
    fs::write(dir.path().join("style.css"), ENTRY).unwrap();
    dir
}

fn compiler(dir: &Path) -> Compiler {
    Compiler::new(Config::load(&dir.join(CONFIG_FILE)).unwrap())
}

// ---------------------------------------------------------------------------
// Compile end to end
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_compile_generates_used_utilities() {
    let dir = project(
        "content = \"./src/**/*.html\"\n[theme.space]\nbase = 8\n[theme.to]\nrem = \"0.0625rem\"",
        r#"<div data-m="4" data-color="inherit"></div>"#,
    );
    let out = compiler(dir.path())
        .compile_file(&dir.path().join("style.css"))
        .await
        .unwrap();

    assert!(out.starts_with("/*! olex v"));
    assert!(out.contains("--space-base: 8;"));
    assert!(out.contains("[data-m] {"));
    assert!(out.contains(r#"&:where([data-m~="4"])"#));
    assert!(out.contains("margin: calc(var(--space-base) * 4 * var(--to-rem));"));
    assert!(out.contains(r#"&:where([data-color~="inherit"])"#));
    assert!(!out.contains("[data-p]"));
    assert!(!out.contains("@olex"));
}

#[tokio::test]
async fn test_compile_resolves_breakpoints() {
    let dir = project("content = \"./src/**/*.html\"", r#"<div data-m="md:2"></div>"#);
    let out = compiler(dir.path())
        .compile_file(&dir.path().join("style.css"))
        .await
        .unwrap();

    assert!(out.contains("@media screen and (width >= 768px)"));
    assert!(!out.contains("@custom-media"));
    assert!(!out.contains("(--md)"));
}

#[tokio::test]
async fn test_compile_is_deterministic() {
    let dir = project(
        "content = \"./src/**/*.html\"",
        r#"<div data-gap="[8px] 2" data-grid="cols-3 md:cols-6"></div>"#,
    );
    let compiler = compiler(dir.path());
    let input = dir.path().join("style.css");
    let first = compiler.compile_file(&input).await.unwrap();
    let second = compiler.compile_file(&input).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_prefix_applies_everywhere() {
    let dir = project(
        "content = \"./src/**/*.html\"\nprefix = \"hl\"",
        r#"<div data-hl-p="1" data-p="2"></div>"#,
    );
    let out = compiler(dir.path())
        .compile_file(&dir.path().join("style.css"))
        .await
        .unwrap();

    assert!(out.contains("[data-hl-p] {"));
    assert!(out.contains("var(--hl-space-base)"));
    assert!(!out.contains("[data-p]"));
}

#[tokio::test]
async fn test_plain_stylesheet_passes_through() {
    let dir = project("", "<div data-m=\"4\"></div>");
    let out = compiler(dir.path())
        .compile("a { color: red; }")
        .await
        .unwrap();
    assert_eq!(out, "a {\n  color: red;\n}\n");
}

#[tokio::test]
async fn test_cache_clear_picks_up_new_content() {
    let dir = project("content = \"./src/**/*.html\"", r#"<div data-m="1"></div>"#);
    let compiler = compiler(dir.path());
    let input = dir.path().join("style.css");

    let before = compiler.compile_file(&input).await.unwrap();
    assert!(!before.contains("[data-p]"));

    fs::write(dir.path().join("src/index.html"), r#"<div data-p="3"></div>"#).unwrap();
    let cached = compiler.compile_file(&input).await.unwrap();
    assert_eq!(before, cached);

    compiler.cache().clear();
    let after = compiler.compile_file(&input).await.unwrap();
    assert!(after.contains("[data-p]"));
    assert!(!after.contains("[data-m]"));
}

#[tokio::test]
async fn test_build_writes_output_file() {
    let dir = project("content = \"./src/**/*.html\"", r#"<div data-m="1"></div>"#);
    let output = dir.path().join("dist.css");
    compiler(dir.path())
        .build(&dir.path().join("style.css"), &output)
        .await
        .unwrap();
    assert!(fs::read_to_string(output).unwrap().contains("[data-m]"));
}

#[tokio::test]
async fn test_missing_input_is_an_error() {
    let dir = project("", "");
    let result = compiler(dir.path())
        .compile_file(&dir.path().join("missing.css"))
        .await;
    assert!(matches!(result, Err(olex::Error::Read { .. })));
}

// ---------------------------------------------------------------------------
// Public helpers
// ---------------------------------------------------------------------------

#[test]
fn test_usage_index_from_documents() {
    let index = build_usage_index([r#"<a data-m="1 2" class="x y"></a>"#, r#"<b data-m="3"></b>"#]);
    let values: Vec<&str> = index
        .values("data-m")
        .unwrap()
        .iter()
        .map(String::as_str)
        .collect();
    assert_eq!(values, vec!["1 2", "3"]);
    assert!(index.contains_attribute("class"));
}

#[test]
fn test_compute_fluid_is_a_clamp() {
    let out = compute_fluid(16.0, 24.0, None, None);
    assert!(out.starts_with("clamp("));
    assert!(out.contains("100vi"));
}
