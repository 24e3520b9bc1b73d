//! Direct-value expansion: one concrete rule per observed bracket value.

use tracing::trace;

use crate::css::Rule;
use crate::fluid::fluid_from_payload;
use crate::selector::{bracket_payload, is_fluid_value, substitute_direct};
use crate::style::declaration::{build_rule, Property};

/// Expand `selector` (carrying a `[]` placeholder) once per direct value.
///
/// The payload inside the value's brackets replaces every
/// [`DeclValue::Direct`](crate::style::DeclValue::Direct) property. A
/// `fluid-[min,max(,min_vp,max_vp)]` value is first turned into a `clamp()`
/// expression; a malformed fluid payload drops that rule. Values resolving
/// to an already-produced selector are skipped.
pub fn expand_direct(
    selector: &str,
    properties: &[Property],
    direct_values: &[String],
    prefix: &str,
) -> Vec<Rule> {
    let mut rules: Vec<Rule> = Vec::new();

    for direct_value in direct_values {
        let (Some(payload), Some(target)) = (
            bracket_payload(direct_value),
            substitute_direct(selector, direct_value),
        ) else {
            continue;
        };

        if rules.iter().any(|rule| rule.selector == target) {
            continue;
        }

        let resolved = if is_fluid_value(direct_value) {
            match fluid_from_payload(prefix, payload) {
                Some(clamp) => clamp,
                None => {
                    trace!(value = %direct_value, "malformed fluid payload, rule dropped");
                    continue;
                }
            }
        } else {
            payload.to_string()
        };

        if let Some(rule) = build_rule(&target, properties, Some(&resolved)) {
            rules.push(rule);
        }
    }

    rules
}
