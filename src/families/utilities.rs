//! Utility families: color, borders, typography, object fit.

use crate::families::scale::{color_values, keyed, size_alias};
use crate::families::Modifier;
use crate::style::Property;
use crate::theme::ThemeContext;

/// Border sides: value prefix and property infix.
const BORDER_SIDES: &[(&str, &str)] = &[
    ("", ""),
    ("top-", "-top"),
    ("right-", "-right"),
    ("bottom-", "-bottom"),
    ("left-", "-left"),
    ("block-", "-block"),
    ("inline-", "-inline"),
    ("block-start-", "-block-start"),
    ("block-end-", "-block-end"),
    ("inline-start-", "-inline-start"),
    ("inline-end-", "-inline-end"),
];

const RADIUS_CORNERS: &[(&str, &str)] = &[
    ("", "border-radius"),
    ("top-left-", "border-top-left-radius"),
    ("top-right-", "border-top-right-radius"),
    ("bottom-left-", "border-bottom-left-radius"),
    ("bottom-right-", "border-bottom-right-radius"),
    ("start-end-", "border-start-end-radius"),
    ("start-start-", "border-start-start-radius"),
];

fn listed(property: &str, values: &[(&str, &str)]) -> Vec<Modifier> {
    values
        .iter()
        .map(|(key, value)| Modifier::keyed(*key, property, value))
        .collect()
}

fn colored(ctx: &ThemeContext, property: &str) -> Vec<Modifier> {
    let mut out: Vec<Modifier> = color_values(ctx)
        .into_iter()
        .map(|(key, value)| Modifier::keyed(key, property, &value))
        .collect();
    out.push(Modifier::keyed("[]", property, ""));
    out
}

pub fn color(ctx: &ThemeContext) -> Vec<Modifier> {
    colored(ctx, "color")
}

pub fn background(ctx: &ThemeContext) -> Vec<Modifier> {
    colored(ctx, "background-color")
}

pub fn blend_mode(_: &ThemeContext) -> Vec<Modifier> {
    [
        "normal",
        "multiply",
        "screen",
        "overlay",
        "darken",
        "lighten",
        "hard-light",
        "soft-light",
        "difference",
        "exclusion",
        "saturation",
    ]
    .into_iter()
    .map(|key| Modifier::keyed(key, "mix-blend-mode", key))
    .collect()
}

// ── Border ───────────────────────────────────────────────────────────

pub fn border(ctx: &ThemeContext) -> Vec<Modifier> {
    let mut out = Vec::new();
    let mut across = |key: &str, aspect: &str, value: &str| {
        for (prefix, infix) in BORDER_SIDES {
            out.push(Modifier::keyed(
                format!("{prefix}{key}"),
                &format!("border{infix}-{aspect}"),
                value,
            ));
        }
    };

    for width in 0..=8 {
        across(&width.to_string(), "width", &format!("{width}px"));
    }
    for keyword in ["thin", "medium", "thick"] {
        across(keyword, "width", keyword);
    }
    for style in ["none", "solid", "dotted", "dashed"] {
        across(style, "style", style);
    }
    for (key, value) in color_values(ctx) {
        across(&key, "color", &value);
    }

    for (prefix, infix) in BORDER_SIDES {
        out.push(Modifier::keyed(format!("{prefix}[]"), &format!("border{infix}"), ""));
    }
    out
}

pub fn radius(ctx: &ThemeContext) -> Vec<Modifier> {
    let mut out = Vec::new();
    for (key, value) in keyed(ctx, "radius") {
        for (prefix, property) in RADIUS_CORNERS {
            out.push(Modifier::keyed(format!("{prefix}{key}"), property, &value));
        }
    }
    for (prefix, property) in RADIUS_CORNERS {
        out.push(Modifier::keyed(format!("{prefix}[]"), property, ""));
    }
    out
}

// ── Text ─────────────────────────────────────────────────────────────

pub fn text(ctx: &ThemeContext) -> Vec<Modifier> {
    let mut out = listed(
        "text-align",
        &[
            ("start", "start"),
            ("end", "end"),
            ("center", "center"),
            ("left", "left"),
            ("right", "right"),
            ("justify", "justify"),
            ("align-[]", ""),
        ],
    );
    out.extend(listed(
        "text-wrap",
        &[
            ("wrap", "wrap"),
            ("nowrap", "nowrap"),
            ("balance", "balance"),
            ("pretty", "pretty"),
            ("stable", "stable"),
        ],
    ));
    out.extend(listed(
        "text-transform",
        &[
            ("capitalize", "capitalize"),
            ("uppercase", "uppercase"),
            ("lowercase", "lowercase"),
            ("normalcase", "none"),
            ("transform-[]", ""),
        ],
    ));
    for (key, word, wrap) in [
        ("keep", "keep-all", "anywhere"),
        ("phrase", "auto-phrase", "anywhere"),
        ("normalbreak", "normal", "normal"),
    ] {
        out.push(Modifier::new(
            key,
            vec![
                Property::literal("word-break", word),
                Property::literal("overflow-wrap", wrap),
            ],
        ));
    }
    out.extend(listed(
        "writing-mode",
        &[("tb", "horizontal-tb"), ("rl", "vertical-rl"), ("lr", "vertical-lr")],
    ));

    // `base` seeds the root line height and gets no modifier.
    out.push(Modifier::keyed("line-normal", "line-height", "normal"));
    for (key, value) in keyed(ctx, "leading") {
        if key != "base" {
            out.push(Modifier::keyed(format!("line-{key}"), "line-height", &value));
        }
    }
    out.push(Modifier::keyed("line-[]", "line-height", ""));

    for (key, value) in keyed(ctx, "tracking") {
        out.push(Modifier::keyed(format!("letter-{key}"), "letter-spacing", &value));
    }
    out.push(Modifier::keyed("letter-[]", "letter-spacing", ""));
    out
}

// ── Font ─────────────────────────────────────────────────────────────

pub fn font(ctx: &ThemeContext) -> Vec<Modifier> {
    let mut out = listed(
        "font-feature-settings",
        &[
            ("palt", "\"palt\""),
            ("pkna", "\"pkna\""),
            ("setting-normal", "normal"),
            ("setting-[]", ""),
        ],
    );

    // `font` keys with a size alias are sizes; the rest are families.
    let mut sizes = Vec::new();
    let mut families = Vec::new();
    for key in ctx.table("font").into_iter().flat_map(|t| t.keys()) {
        let value = ctx.var("font", key);
        match size_alias(key) {
            Some(alias) => sizes.push((alias.to_string(), value)),
            None => families.push((key.to_string(), value)),
        }
    }
    for key in ctx.table("font-fluid").into_iter().flat_map(|t| t.keys()) {
        if let Some(alias) = size_alias(key) {
            sizes.push((format!("fluid-{alias}"), ctx.var("font-fluid", key)));
        }
    }

    for (key, value) in &sizes {
        out.push(Modifier::keyed(key.clone(), "font-size", value));
    }
    out.push(Modifier::keyed("[]", "font-size", ""));
    for (key, value) in &families {
        out.push(Modifier::keyed(key.clone(), "font-family", value));
    }
    out.push(Modifier::keyed("family-[]", "font-family", ""));

    out.extend(listed(
        "font-weight",
        &[
            ("weight-normal", "normal"),
            ("bold", "bold"),
            ("lighter", "lighter"),
            ("weight-[]", ""),
        ],
    ));
    for weight in (100..=900).step_by(100) {
        out.push(Modifier::keyed(weight.to_string(), "font-weight", &weight.to_string()));
    }
    out.extend(listed(
        "font-style",
        &[
            ("style-normal", "normal"),
            ("italic", "italic"),
            ("oblique", "oblique"),
            ("style-[]", ""),
        ],
    ));
    out
}

pub fn object(_: &ThemeContext) -> Vec<Modifier> {
    ["cover", "contain", "fill", "scale-down", "none", "[]"]
        .into_iter()
        .map(|key| {
            let fit = if key == "[]" {
                Property::direct("object-fit")
            } else {
                Property::literal("object-fit", key)
            };
            Modifier::new(
                key,
                vec![
                    fit,
                    Property::literal("width", "100%"),
                    Property::literal("height", "100%"),
                ],
            )
        })
        .collect()
}

pub fn visually_hidden_base(_: &ThemeContext) -> Vec<Property> {
    [
        ("position", "absolute"),
        ("width", "1px"),
        ("height", "1px"),
        ("margin", "-1px"),
        ("padding", "0"),
        ("overflow", "hidden"),
        ("clip", "rect(0 0 0 0)"),
        ("border", "0"),
        ("white-space", "nowrap"),
        ("clip-path", "inset(50%)"),
    ]
    .into_iter()
    .map(|(name, value)| Property::literal(name, value))
    .collect()
}
