//! Fluid sizes: viewport-interpolated `clamp()` expressions.
//!
//! Everything is emitted as textual `calc()`-compatible arithmetic. Nothing
//! is pre-evaluated, because the rem scale (`--to-rem`) and the default
//! viewport bounds are custom properties resolved by the browser.

use std::fmt;

/// A viewport bound: a literal number or a custom-property reference.
#[derive(Debug, Clone, PartialEq)]
pub enum Bound {
    Value(f64),
    /// Custom property name without the leading `--`.
    Var(String),
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Value(n) => write!(f, "{n}"),
            Bound::Var(name) => write!(f, "var(--{name})"),
        }
    }
}

/// `fluid(min, max, min_viewport?, max_viewport?)` with no token prefix.
///
/// Omitted bounds default to `var(--default-fluid-viewport-min)` and
/// `var(--default-fluid-viewport-max)`.
pub fn compute_fluid(min: f64, max: f64, min_viewport: Option<Bound>, max_viewport: Option<Bound>) -> String {
    fluid_with_prefix("", min, max, min_viewport, max_viewport)
}

/// Build the clamp expression, prefixing the custom properties it names.
///
/// ```text
/// slope     = (max - min) / (max_vp - min_vp)
/// intercept = min - slope * min_vp
/// clamp(min * unit, intercept * unit + slope * 100vi, max * unit)
/// ```
pub fn fluid_with_prefix(
    prefix: &str,
    min: f64,
    max: f64,
    min_viewport: Option<Bound>,
    max_viewport: Option<Bound>,
) -> String {
    let unit = format!("var(--{prefix}to-rem)");
    let min_vp = min_viewport.unwrap_or_else(|| Bound::Var(format!("{prefix}default-fluid-viewport-min")));
    let max_vp = max_viewport.unwrap_or_else(|| Bound::Var(format!("{prefix}default-fluid-viewport-max")));

    let slope = format!("(({max} - {min}) / ({max_vp} - {min_vp}))");
    let intercept = format!("({min} - {slope} * {min_vp})");
    let preferred = format!("(({intercept} * {unit}) + ({slope} * 100vi))");

    format!("clamp(({min} * {unit}), {preferred}, ({max} * {unit}))")
}

/// Parse a fluid payload `min,max[,min_vp,max_vp]` into a clamp expression.
///
/// Returns `None` when either size is missing or any part is not a number.
pub fn fluid_from_payload(prefix: &str, payload: &str) -> Option<String> {
    let mut parts = payload.split(',').map(str::trim);
    let min: f64 = parts.next().filter(|p| !p.is_empty())?.parse().ok()?;
    let max: f64 = parts.next().filter(|p| !p.is_empty())?.parse().ok()?;
    let min_vp = optional_bound(parts.next())?;
    let max_vp = optional_bound(parts.next())?;
    if parts.next().is_some() {
        return None;
    }
    Some(fluid_with_prefix(prefix, min, max, min_vp, max_vp))
}

/// `Some(None)` for an absent part, `None` for an unparsable one.
fn optional_bound(part: Option<&str>) -> Option<Option<Bound>> {
    match part {
        None | Some("") => Some(None),
        Some(text) => text.parse().ok().map(|n| Some(Bound::Value(n))),
    }
}
