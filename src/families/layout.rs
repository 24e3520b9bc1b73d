//! Layout families: containers, grid and flex, spacing, sizing, positioning.

use crate::families::scale::{aliased, directs, spacing, Side};
use crate::families::Modifier;
use crate::style::Property;
use crate::theme::ThemeContext;

const GRID_COLUMNS: u32 = 12;
const GRID_ROWS: u32 = 6;

// ── Container ────────────────────────────────────────────────────────

pub fn container_base(ctx: &ThemeContext) -> Vec<Property> {
    let offset = ctx.var_name("default-container-offset");
    vec![
        Property::literal(ctx.custom_property("container-offset-start"), offset.clone()),
        Property::literal(ctx.custom_property("container-offset-end"), offset),
        Property::literal(ctx.custom_property("container-margin-start"), "auto"),
        Property::literal(ctx.custom_property("container-margin-end"), "auto"),
        Property::literal("container", "container / inline-size"),
        Property::literal("box-sizing", "content-box"),
        Property::literal(
            "margin-inline",
            format!(
                "{} {}",
                ctx.var_name("container-margin-start"),
                ctx.var_name("container-margin-end")
            ),
        ),
        Property::literal(
            "padding-inline",
            format!(
                "{} {}",
                ctx.var_name("container-offset-start"),
                ctx.var_name("container-offset-end")
            ),
        ),
    ]
}

pub fn container(ctx: &ThemeContext) -> Vec<Modifier> {
    let start = ctx.custom_property("container-offset-start");
    let end = ctx.custom_property("container-offset-end");

    // `None` takes the direct value.
    let mut sizes: Vec<(String, Option<String>)> = vec![("none".into(), Some("0".into()))];
    sizes.extend(aliased(ctx, "offset").into_iter().map(|(alias, var)| (alias, Some(var))));
    sizes.push(("[]".into(), None));

    let set = |name: &str, value: &Option<String>| match value {
        Some(value) => Property::literal(name, value.clone()),
        None => Property::direct(name),
    };

    let mut out = Vec::new();
    for (key, value) in &sizes {
        out.push(Modifier::new(key.clone(), vec![set(&start, value), set(&end, value)]));
    }
    for (key, value) in &sizes {
        out.push(Modifier::new(format!("s-{key}"), vec![set(&start, value)]));
    }
    for (key, value) in &sizes {
        out.push(Modifier::new(format!("e-{key}"), vec![set(&end, value)]));
    }

    let margin_start = ctx.custom_property("container-margin-start");
    let margin_end = ctx.custom_property("container-margin-end");
    for (key, s, e) in [("start", "0", "auto"), ("center", "auto", "auto"), ("end", "auto", "0")] {
        out.push(Modifier::new(
            key,
            vec![
                Property::literal(margin_start.clone(), s),
                Property::literal(margin_end.clone(), e),
            ],
        ));
    }
    out
}

// ── Over ─────────────────────────────────────────────────────────────

pub fn over_base(ctx: &ThemeContext) -> Vec<Property> {
    vec![
        Property::literal(
            ctx.custom_property("over-start"),
            format!("calc(-1 * var(--{}container-offset-start, initial))", ctx.prefix()),
        ),
        Property::literal(
            ctx.custom_property("over-end"),
            format!("calc(-1 * var(--{}container-offset-end, initial))", ctx.prefix()),
        ),
        Property::literal("container", "over / inline-size"),
        Property::literal(
            "margin-inline",
            format!("{} {}", ctx.var_name("over-start"), ctx.var_name("over-end")),
        ),
    ]
}

pub fn over(ctx: &ThemeContext) -> Vec<Modifier> {
    let edge = |side: &str| {
        if side == "0" {
            "0".to_string()
        } else {
            ctx.var_name(&format!("over-{side}"))
        }
    };
    [("start", "start", "0"), ("end", "0", "end"), ("both", "start", "end"), ("clear", "0", "0")]
        .into_iter()
        .map(|(key, start, end)| {
            Modifier::new(
                key,
                vec![
                    Property::literal("margin-inline-start", edge(start)),
                    Property::literal("margin-inline-end", edge(end)),
                ],
            )
        })
        .collect()
}

// ── Grid ─────────────────────────────────────────────────────────────

pub fn grid_base(ctx: &ThemeContext) -> Vec<Property> {
    vec![
        Property::literal(ctx.custom_property("grid-display"), "block"),
        Property::literal(ctx.custom_property("grid-layout"), "minmax(0, 1fr)"),
        Property::literal(
            ctx.custom_property("grid-auto-fit"),
            format!("minmax(min(var(--{}grid-min-size, 300px), 100%), 1fr)", ctx.prefix()),
        ),
        Property::literal("display", format!("{} grid", ctx.var_name("grid-display"))),
    ]
}

pub fn grid(ctx: &ThemeContext) -> Vec<Modifier> {
    let display = ctx.custom_property("grid-display");
    let layout = ctx.var_name("grid-layout");
    let auto_fit = ctx.var_name("grid-auto-fit");
    let cols = ctx.var_name("cols");

    let mut out: Vec<Modifier> = ["block", "inline"]
        .into_iter()
        .map(|key| Modifier::keyed(key, &display, key))
        .collect();

    out.push(Modifier::keyed("cols-0", "grid-template-columns", "none"));
    for i in 1..=GRID_COLUMNS {
        out.push(Modifier::keyed(
            format!("cols-{i}"),
            "grid-template-columns",
            &format!("repeat({i}, {layout})"),
        ));
    }
    out.push(Modifier::keyed(
        "cols-auto-fit",
        "grid-template-columns",
        &format!("repeat(auto-fit, {auto_fit})"),
    ));
    out.push(Modifier::keyed("cols-subgrid", "grid-template-columns", "subgrid"));
    out.push(
        Modifier::keyed("", "grid-template-columns", &format!("repeat({cols}, {layout})"))
            .with_selector(format!("[style~=\"{}:\"]", ctx.custom_property("cols")))
            .fixed(),
    );
    out.push(
        Modifier::keyed("", "grid-template-columns", &format!("repeat({cols}, {auto_fit})"))
            .with_selector(format!("[style*=\"{}: auto-fit\"]", ctx.custom_property("cols")))
            .fixed(),
    );
    out.push(Modifier::keyed("cols-[]", "grid-template-columns", ""));

    out.push(Modifier::keyed("rows-0", "grid-template-rows", "none"));
    for i in 1..=GRID_ROWS {
        out.push(Modifier::keyed(
            format!("rows-{i}"),
            "grid-template-rows",
            &format!("repeat({i}, {layout})"),
        ));
    }
    out.push(Modifier::keyed("rows-subgrid", "grid-template-rows", "subgrid"));
    out.push(Modifier::keyed("rows-[]", "grid-template-rows", ""));
    out
}

pub fn grid_item(ctx: &ThemeContext) -> Vec<Modifier> {
    let subgrid_display = format!("var(--{}grid-display, block) grid", ctx.prefix());
    let mut out = Vec::new();

    for (axis, line, template, count) in [
        ("col", "grid-column", "grid-template-columns", GRID_COLUMNS),
        ("row", "grid-row", "grid-template-rows", GRID_ROWS),
    ] {
        let start = format!("{line}-start");
        let end = format!("{line}-end");

        out.push(Modifier::new(
            format!("{axis}s-subgrid"),
            vec![
                Property::literal("display", subgrid_display.clone()),
                Property::literal(template, "subgrid"),
            ],
        ));
        for i in 1..=count {
            out.push(Modifier::keyed(format!("{axis}-{i}"), line, &format!("span {i} / span {i}")));
            out.push(Modifier::keyed(format!("{axis}-start-{i}"), &start, &i.to_string()));
            out.push(Modifier::keyed(format!("{axis}-end-{i}"), &end, &i.to_string()));
        }
        out.push(Modifier::keyed(format!("{axis}-[]"), line, ""));
        out.push(Modifier::keyed(format!("{axis}-start-[]"), &start, ""));
        out.push(Modifier::keyed(format!("{axis}-end-[]"), &end, ""));
        out.push(Modifier::keyed(format!("{axis}-full"), line, "1 / -1"));
        out.push(Modifier::keyed(format!("{axis}-auto"), line, "auto / auto"));
        out.push(Modifier::keyed(format!("{axis}-start-auto"), &start, "auto"));
        out.push(Modifier::keyed(format!("{axis}-end-auto"), &end, "auto"));
    }
    out
}

// ── Flex ─────────────────────────────────────────────────────────────

pub fn flex_base(ctx: &ThemeContext) -> Vec<Property> {
    vec![
        Property::literal(ctx.custom_property("flex-display"), "block"),
        Property::literal("display", format!("{} flex", ctx.var_name("flex-display"))),
    ]
}

pub fn flex(ctx: &ThemeContext) -> Vec<Modifier> {
    let display = ctx.custom_property("flex-display");
    let mut out: Vec<Modifier> = ["block", "inline"]
        .into_iter()
        .map(|key| Modifier::keyed(key, &display, key))
        .collect();
    for key in ["nowrap", "wrap"] {
        out.push(Modifier::keyed(key, "flex-wrap", key));
    }
    for (key, value) in [
        ("row", "row"),
        ("row-reverse", "row-reverse"),
        ("col", "column"),
        ("col-reverse", "column-reverse"),
    ] {
        out.push(Modifier::keyed(key, "flex-direction", value));
    }
    out
}

pub fn flex_item_base(ctx: &ThemeContext) -> Vec<Property> {
    vec![
        Property::literal("container", "flex-item / inline-size"),
        Property::literal(
            "flex",
            format!(
                "{} {} {}",
                ctx.var_name("grow"),
                ctx.var_name("shrink"),
                ctx.var_name("basis")
            ),
        ),
    ]
}

pub fn flex_item(_: &ThemeContext) -> Vec<Modifier> {
    let mut out = Vec::new();
    for i in 0..=3 {
        out.push(Modifier::keyed(format!("g-{i}"), "flex-grow", &i.to_string()));
        out.push(Modifier::keyed(format!("s-{i}"), "flex-shrink", &i.to_string()));
    }
    out.push(Modifier::keyed("g-[]", "flex-grow", ""));
    out.push(Modifier::keyed("s-[]", "flex-shrink", ""));
    out.push(Modifier::keyed("b-[]", "flex-basis", ""));
    out
}

// ── Gap, order, place ────────────────────────────────────────────────

pub fn gap(ctx: &ThemeContext) -> Vec<Modifier> {
    let all = [Side::new("", &["gap"])];
    let axes = [Side::new("col-", &["column-gap"]), Side::new("row-", &["row-gap"])];
    let mut out = spacing(ctx, &all);
    out.extend(spacing(ctx, &axes));
    out.extend(directs(&all));
    out.extend(directs(&axes));
    out
}

pub fn order(_: &ThemeContext) -> Vec<Modifier> {
    let mut out = vec![Modifier::keyed("0", "order", "0")];
    for i in 1..=12 {
        out.push(Modifier::keyed(i.to_string(), "order", &i.to_string()));
        out.push(Modifier::keyed(format!("-{i}"), "order", &format!("-{i}")));
    }
    out.push(Modifier::keyed("first", "order", "-9999"));
    out.push(Modifier::keyed("last", "order", "9999"));
    out.push(Modifier::keyed("[]", "order", ""));
    out
}

const PLACE: &[(&str, &str, &[(&str, &str)])] = &[
    (
        "",
        "place-content",
        &[
            ("start", "start"),
            ("center", "center"),
            ("end", "end"),
            ("between", "space-between"),
            ("around", "space-around"),
            ("evenly", "space-evenly"),
            ("baseline", "baseline"),
            ("stretch", "stretch"),
        ],
    ),
    (
        "items-",
        "place-items",
        &[
            ("start", "start"),
            ("center", "center"),
            ("end", "end"),
            ("baseline", "baseline"),
            ("stretch", "stretch"),
        ],
    ),
    (
        "self-",
        "place-self",
        &[
            ("start", "start"),
            ("center", "center"),
            ("end", "end"),
            ("auto", "auto"),
            ("stretch", "stretch"),
        ],
    ),
    (
        "inline-",
        "justify-content",
        &[
            ("normal", "normal"),
            ("start", "flex-start"),
            ("center", "center"),
            ("end", "flex-end"),
            ("between", "space-between"),
            ("around", "space-around"),
            ("evenly", "space-evenly"),
            ("stretch", "stretch"),
        ],
    ),
    (
        "inline-items-",
        "justify-items",
        &[("start", "start"), ("center", "center"), ("end", "end"), ("stretch", "stretch")],
    ),
    (
        "inline-self-",
        "justify-self",
        &[
            ("start", "start"),
            ("center", "center"),
            ("end", "end"),
            ("stretch", "stretch"),
            ("auto", "auto"),
        ],
    ),
    (
        "block-",
        "align-content",
        &[
            ("normal", "normal"),
            ("start", "flex-start"),
            ("center", "center"),
            ("end", "flex-end"),
            ("between", "space-between"),
            ("around", "space-around"),
            ("evenly", "space-evenly"),
            ("baseline", "baseline"),
            ("stretch", "stretch"),
        ],
    ),
    (
        "block-items-",
        "align-items",
        &[
            ("start", "flex-start"),
            ("center", "center"),
            ("end", "flex-end"),
            ("baseline", "baseline"),
            ("stretch", "stretch"),
        ],
    ),
    (
        "block-self-",
        "align-self",
        &[
            ("auto", "auto"),
            ("start", "flex-start"),
            ("center", "center"),
            ("end", "flex-end"),
            ("baseline", "baseline"),
            ("stretch", "stretch"),
        ],
    ),
];

pub fn place(_: &ThemeContext) -> Vec<Modifier> {
    PLACE
        .iter()
        .flat_map(|(prefix, property, values)| {
            values
                .iter()
                .map(move |(key, value)| Modifier::keyed(format!("{prefix}{key}"), property, value))
        })
        .collect()
}

// ── Margin, padding, space ───────────────────────────────────────────

/// Side groups of a box property: all, axes, edges, logical axes, logical
/// edges.
fn box_sides(property: &str) -> Vec<Vec<Side>> {
    let p = |suffix: &str| format!("{property}{suffix}");
    let side = |prefix: &'static str, suffixes: &[&str]| {
        let properties: Vec<String> = suffixes.iter().map(|s| p(s)).collect();
        let properties: Vec<&str> = properties.iter().map(String::as_str).collect();
        Side::new(prefix, &properties)
    };
    vec![
        vec![side("", &[""])],
        vec![side("y-", &["-top", "-bottom"]), side("x-", &["-left", "-right"])],
        vec![
            side("top-", &["-top"]),
            side("right-", &["-right"]),
            side("bottom-", &["-bottom"]),
            side("left-", &["-left"]),
        ],
        vec![side("block-", &["-block"]), side("inline-", &["-inline"])],
        vec![
            side("block-start-", &["-block-start"]),
            side("block-end-", &["-block-end"]),
            side("inline-start-", &["-inline-start"]),
            side("inline-end-", &["-inline-end"]),
        ],
    ]
}

/// Scales for every side group, then every direct modifier.
fn box_model(ctx: &ThemeContext, property: &str) -> Vec<Modifier> {
    let groups = box_sides(property);
    let mut out: Vec<Modifier> = groups.iter().flat_map(|g| spacing(ctx, g)).collect();
    out.extend(groups.iter().flat_map(|g| directs(g)));
    out
}

pub fn margin(ctx: &ThemeContext) -> Vec<Modifier> {
    box_model(ctx, "margin")
}

pub fn padding(ctx: &ThemeContext) -> Vec<Modifier> {
    box_model(ctx, "padding")
}

pub fn space(ctx: &ThemeContext) -> Vec<Modifier> {
    let physical = [Side::new("x-", &["margin-left"]), Side::new("y-", &["margin-top"])];
    let logical = [
        Side::new("inline-", &["margin-inline-start"]),
        Side::new("block-", &["margin-block-start"]),
    ];
    let mut out = spacing(ctx, &physical);
    out.extend(directs(&physical));
    out.extend(spacing(ctx, &logical));
    out.extend(directs(&logical));
    out
}

// ── Width, height, size ──────────────────────────────────────────────

/// Sizing keywords along one axis; `unit` is the viewport unit suffix.
fn extents(unit: &str) -> Vec<(String, String)> {
    let mut values = vec![
        ("0".to_string(), "0".to_string()),
        ("full".to_string(), "100%".to_string()),
        ("screen".to_string(), format!("100v{unit}")),
    ];
    for dynamic in ["s", "l", "d"] {
        values.push((format!("{dynamic}v{unit}"), format!("100{dynamic}v{unit}")));
    }
    for keyword in ["min", "max", "fit"] {
        values.push((keyword.to_string(), format!("{keyword}-content")));
    }
    values.push(("[]".to_string(), String::new()));
    values
}

/// Max extents: no `0`, plus `none`.
fn max_extents(unit: &str) -> Vec<(String, String)> {
    let mut values: Vec<_> = extents(unit).into_iter().filter(|(k, _)| k != "0").collect();
    values.push(("none".to_string(), "none".to_string()));
    values
}

fn sized(out: &mut Vec<Modifier>, prefix: &str, property: &str, values: &[(String, String)]) {
    for (key, value) in values {
        out.push(Modifier::keyed(format!("{prefix}{key}"), property, value));
    }
}

fn contents_max(ctx: &ThemeContext, out: &mut Vec<Modifier>, prefix: &str, property: &str) {
    for (alias, value) in aliased(ctx, "contents") {
        out.push(Modifier::keyed(format!("{prefix}{alias}"), property, &value));
    }
}

pub fn width(ctx: &ThemeContext) -> Vec<Modifier> {
    let mut out = vec![Modifier::keyed("auto", "width", "auto")];
    sized(&mut out, "", "width", &extents("w"));
    sized(&mut out, "min-", "min-width", &extents("w"));
    sized(&mut out, "max-", "max-width", &max_extents("w"));
    contents_max(ctx, &mut out, "max-", "max-width");
    out
}

pub fn height(_: &ThemeContext) -> Vec<Modifier> {
    let mut out = vec![Modifier::keyed("auto", "height", "auto")];
    sized(&mut out, "", "height", &extents("h"));
    sized(&mut out, "min-", "min-height", &extents("h"));
    sized(&mut out, "max-", "max-height", &max_extents("h"));
    out
}

pub fn size(ctx: &ThemeContext) -> Vec<Modifier> {
    let mut out = vec![
        Modifier::keyed("inline-auto", "inline-size", "auto"),
        Modifier::keyed("block-auto", "block-size", "auto"),
    ];
    sized(&mut out, "inline-", "inline-size", &extents("i"));
    sized(&mut out, "block-", "block-size", &extents("b"));
    sized(&mut out, "min-inline-", "min-inline-size", &extents("i"));
    sized(&mut out, "min-block-", "min-block-size", &extents("b"));
    sized(&mut out, "max-inline-", "max-inline-size", &max_extents("i"));
    sized(&mut out, "max-block-", "max-block-size", &max_extents("b"));
    contents_max(ctx, &mut out, "max-inline-", "max-inline-size");
    out
}

// ── Aspect, display, position ────────────────────────────────────────

fn listed(property: &str, values: &[(&str, &str)]) -> Vec<Modifier> {
    values
        .iter()
        .map(|(key, value)| Modifier::keyed(*key, property, value))
        .collect()
}

pub fn aspect(_: &ThemeContext) -> Vec<Modifier> {
    listed(
        "aspect-ratio",
        &[
            ("video", "16 / 9"),
            ("square", "1 / 1"),
            ("v-golden", "1.618 / 1"),
            ("h-golden", "1 / 1.618"),
            ("v-silver", "1.414 / 1"),
            ("h-silver", "1 / 1.414"),
            ("v-platinum", "1.732 / 1"),
            ("h-platinum", "1 / 1.732"),
            ("[]", ""),
        ],
    )
}

pub fn display(_: &ThemeContext) -> Vec<Modifier> {
    listed(
        "display",
        &[
            ("block", "block flow"),
            ("flow-root", "block flow-root"),
            ("inline", "inline flow"),
            ("inline-block", "inline flow-root"),
            ("flex", "block flex"),
            ("inline-flex", "inline flex"),
            ("grid", "block grid"),
            ("inline-grid", "inline grid"),
            ("contents", "contents"),
            ("none", "none"),
            ("[]", ""),
        ],
    )
}

pub fn position(_: &ThemeContext) -> Vec<Modifier> {
    ["static", "relative", "absolute", "fixed", "sticky"]
        .into_iter()
        .map(|key| Modifier::keyed(key, "position", key))
        .collect()
}

pub fn inset(ctx: &ThemeContext) -> Vec<Modifier> {
    let groups = [
        vec![Side::new("", &["inset"])],
        vec![Side::new("x-", &["left", "right"]), Side::new("y-", &["top", "bottom"])],
        vec![
            Side::new("top-", &["top"]),
            Side::new("right-", &["right"]),
            Side::new("bottom-", &["bottom"]),
            Side::new("left-", &["left"]),
        ],
        vec![Side::new("inline-", &["inset-inline"]), Side::new("block-", &["inset-block"])],
        vec![
            Side::new("inline-start-", &["inset-inline-start"]),
            Side::new("inline-end-", &["inset-inline-end"]),
            Side::new("block-start-", &["inset-block-start"]),
            Side::new("block-end-", &["inset-block-end"]),
        ],
    ];
    let mut out = Vec::new();
    for group in &groups {
        out.extend(spacing(ctx, group));
        out.extend(directs(group));
    }
    out
}

pub fn z_index(_: &ThemeContext) -> Vec<Modifier> {
    let mut out = vec![
        Modifier::keyed("0", "z-index", "0"),
        Modifier::keyed("1", "z-index", "1"),
        Modifier::keyed("-1", "z-index", "-1"),
    ];
    for step in (10..=50).step_by(10) {
        out.push(Modifier::keyed(step.to_string(), "z-index", &step.to_string()));
        out.push(Modifier::keyed(format!("-{step}"), "z-index", &format!("-{step}")));
    }
    out.push(Modifier::keyed("auto", "z-index", "auto"));
    out.push(Modifier::keyed("[]", "z-index", ""));
    out
}

pub fn overflow(_: &ThemeContext) -> Vec<Modifier> {
    const VALUES: [&str; 5] = ["auto", "visible", "hidden", "clip", "scroll"];
    let mut out: Vec<Modifier> = VALUES
        .into_iter()
        .map(|key| Modifier::keyed(key, "overflow", key))
        .collect();
    for key in VALUES {
        out.push(Modifier::keyed(format!("x-{key}"), "overflow-x", key));
        out.push(Modifier::keyed(format!("y-{key}"), "overflow-y", key));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::families::scale::{space_step, SPACE_STEPS};
    use crate::style::DeclValue;
    use pretty_assertions::assert_eq;

    fn values(modifiers: &[Modifier]) -> Vec<&str> {
        modifiers.iter().map(|m| m.value.as_str()).collect()
    }

    #[test]
    fn margin_steps_ascend_within_each_side() {
        let ctx = ThemeContext::new();
        let modifiers = margin(&ctx);
        let all: Vec<u32> = modifiers
            .iter()
            .filter_map(|m| m.value.parse().ok())
            .collect();
        assert_eq!(all, SPACE_STEPS.collect::<Vec<_>>());

        let top: Vec<&str> = values(&modifiers)
            .into_iter()
            .filter(|v| v.starts_with("top-"))
            .collect();
        assert_eq!(top.first(), Some(&"top-0"));
        assert_eq!(top[20], "top-20");
        assert_eq!(top.last(), Some(&"top-[]"));
    }

    #[test]
    fn margin_value_formula() {
        let ctx = ThemeContext::new();
        let four = margin(&ctx).into_iter().find(|m| m.value == "4").unwrap();
        assert_eq!(
            four.properties,
            vec![Property::literal("margin", space_step(&ctx, 4))]
        );
    }

    #[test]
    fn named_spacing_precedes_steps() {
        let ctx = ThemeContext::new()
            .with_token("space", "base", "8")
            .with_token("space", "md", "1.5rem");
        let modifiers = padding(&ctx);
        assert_eq!(modifiers[0].value, "medium");
        assert_eq!(
            modifiers[0].properties,
            vec![Property::literal("padding", "var(--space-md)")]
        );
        assert_eq!(modifiers[1].value, "0");
    }

    #[test]
    fn direct_modifiers_use_placeholders() {
        let modifiers = margin(&ThemeContext::new());
        let x = modifiers.iter().find(|m| m.value == "x-[]").unwrap();
        assert!(x.properties.iter().all(|p| p.value == DeclValue::Direct));
        assert_eq!(x.properties.len(), 2);
        assert!(modifiers.iter().any(|m| m.value == "inline-[]"));
    }

    #[test]
    fn container_sizes_follow_offset_aliases() {
        let ctx = ThemeContext::new().with_token("offset", "sm", "1rem");
        let modifiers = container(&ctx);
        let first: Vec<_> = values(&modifiers).into_iter().take(3).collect();
        assert_eq!(first, vec!["none", "small", "[]"]);
        assert_eq!(
            modifiers[1].properties[0],
            Property::literal("--container-offset-start", "var(--offset-sm)")
        );
    }

    #[test]
    fn grid_columns_ascend() {
        let modifiers = grid(&ThemeContext::new());
        let cols: Vec<&str> = values(&modifiers)
            .into_iter()
            .filter(|v| v.starts_with("cols-") && v[5..].parse::<u32>().is_ok())
            .collect();
        assert_eq!(cols.len(), 13);
        assert_eq!(cols[0], "cols-0");
        assert_eq!(cols[12], "cols-12");
    }

    #[test]
    fn grid_style_modifiers_are_fixed() {
        let ctx = ThemeContext::new().with_prefix("hl");
        let modifiers = grid(&ctx);
        let styled: Vec<_> = modifiers.iter().filter(|m| m.selector.is_some()).collect();
        assert_eq!(styled.len(), 2);
        assert!(styled.iter().all(|m| !m.responsive));
        assert_eq!(styled[0].selector.as_deref(), Some(r#"[style~="--hl-cols:"]"#));
    }

    #[test]
    fn flex_direction_lives_on_flex() {
        let modifiers = flex(&ThemeContext::new());
        let col = modifiers.iter().find(|m| m.value == "col").unwrap();
        assert_eq!(col.properties, vec![Property::literal("flex-direction", "column")]);
    }

    #[test]
    fn sizing_keywords() {
        let modifiers = width(&ThemeContext::new());
        let fit = modifiers.iter().find(|m| m.value == "fit").unwrap();
        assert_eq!(fit.properties, vec![Property::literal("width", "fit-content")]);
        assert!(modifiers.iter().any(|m| m.value == "max-none"));
        assert!(!modifiers.iter().any(|m| m.value == "max-0"));

        let heights = height(&ThemeContext::new());
        let svh = heights.iter().find(|m| m.value == "svh").unwrap();
        assert_eq!(svh.properties, vec![Property::literal("height", "100svh")]);
    }

    #[test]
    fn z_index_scale() {
        assert_eq!(
            values(&z_index(&ThemeContext::new())),
            vec!["0", "1", "-1", "10", "-10", "20", "-20", "30", "-30", "40", "-40", "50", "-50", "auto", "[]"]
        );
    }
}
