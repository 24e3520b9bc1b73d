//! Utility declarations: a selector template plus ordered properties whose
//! values may be the direct-value placeholder.

use crate::css::{Declaration, Node, Rule};

/// A property value: literal text, or "substitute the matched direct value".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclValue {
    Literal(String),
    Direct,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: DeclValue,
}

impl Property {
    pub fn literal(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: DeclValue::Literal(value.into()),
        }
    }

    pub fn direct(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: DeclValue::Direct,
        }
    }
}

/// One declared utility: `selector { properties }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UtilityDeclaration {
    pub selector: String,
    pub properties: Vec<Property>,
}

impl UtilityDeclaration {
    pub fn new(selector: impl Into<String>, properties: Vec<Property>) -> Self {
        Self {
            selector: selector.into(),
            properties,
        }
    }

    /// Returns `true` when any property waits on a direct value.
    pub fn has_direct(&self) -> bool {
        self.properties.iter().any(|p| p.value == DeclValue::Direct)
    }

    /// The rule with every value literal, or `None` when a direct value is
    /// still unresolved.
    pub fn resolve_literal(&self) -> Option<Rule> {
        build_rule(&self.selector, &self.properties, None)
    }
}

/// Build `selector { properties }`, substituting `direct` for every
/// [`DeclValue::Direct`]. Returns `None` if a placeholder has no substitute.
pub fn build_rule(selector: &str, properties: &[Property], direct: Option<&str>) -> Option<Rule> {
    let mut rule = Rule::new(selector);
    for property in properties {
        let value = match &property.value {
            DeclValue::Literal(value) => value.as_str(),
            DeclValue::Direct => direct?,
        };
        rule.nodes
            .push(Node::Declaration(Declaration::new(property.name.clone(), value)));
    }
    Some(rule)
}
