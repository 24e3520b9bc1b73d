//! Stylesheet AST: Stylesheet, Node, Rule, AtRule, Declaration, Comment.

/// A node in the stylesheet tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Qualified rule: `selector { ... }`.
    Rule(Rule),
    /// At-rule, with or without a block: `@media (...) { ... }`, `@import "x";`.
    AtRule(AtRule),
    /// Declaration: `property: value`.
    Declaration(Declaration),
    /// Block comment, text between the delimiters.
    Comment(Comment),
}

/// A qualified rule. Children may be declarations or nested rules.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub selector: String,
    pub nodes: Vec<Node>,
}

impl Rule {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            nodes: Vec::new(),
        }
    }

    /// Builder: append a declaration.
    pub fn with_declaration(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.nodes
            .push(Node::Declaration(Declaration::new(property, value)));
        self
    }

    /// Iterate the direct declarations of this rule.
    pub fn declarations(&self) -> impl Iterator<Item = &Declaration> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Declaration(d) => Some(d),
            _ => None,
        })
    }
}

/// An at-rule. `nodes` is `None` for statement at-rules ending in `;`.
#[derive(Debug, Clone, PartialEq)]
pub struct AtRule {
    /// Name without the leading `@`.
    pub name: String,
    pub params: String,
    pub nodes: Option<Vec<Node>>,
}

impl AtRule {
    /// A statement at-rule: `@name params;`.
    pub fn statement(name: impl Into<String>, params: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: params.into(),
            nodes: None,
        }
    }

    /// A block at-rule: `@name params { nodes }`.
    pub fn block(name: impl Into<String>, params: impl Into<String>, nodes: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            params: params.into(),
            nodes: Some(nodes),
        }
    }

    pub fn is(&self, name: &str, params: &str) -> bool {
        self.name == name && self.params == params
    }
}

/// A single declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
    pub important: bool,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            important: false,
        }
    }
}

/// A block comment. `text` excludes the `/*` and `*/` delimiters.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub text: String,
}

impl Comment {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A parsed stylesheet: the root container.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stylesheet {
    pub nodes: Vec<Node>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if any at-rule anywhere in the tree satisfies `pred`.
    pub fn any_at_rule(&self, pred: impl Fn(&AtRule) -> bool) -> bool {
        fn visit(nodes: &[Node], pred: &dyn Fn(&AtRule) -> bool) -> bool {
            nodes.iter().any(|node| match node {
                Node::AtRule(at) => pred(at) || at.nodes.as_deref().is_some_and(|n| visit(n, pred)),
                Node::Rule(rule) => visit(&rule.nodes, pred),
                _ => false,
            })
        }
        visit(&self.nodes, &pred)
    }

    /// Visit every at-rule in document order, depth first.
    pub fn walk_at_rules_mut(&mut self, f: &mut dyn FnMut(&mut AtRule)) {
        fn visit(nodes: &mut [Node], f: &mut dyn FnMut(&mut AtRule)) {
            for node in nodes {
                match node {
                    Node::AtRule(at) => {
                        f(at);
                        if let Some(children) = at.nodes.as_mut() {
                            visit(children, f);
                        }
                    }
                    Node::Rule(rule) => visit(&mut rule.nodes, f),
                    _ => {}
                }
            }
        }
        visit(&mut self.nodes, f);
    }

    /// Remove every at-rule matching `pred`, anywhere in the tree, returning
    /// the removed nodes in document order.
    pub fn remove_at_rules(&mut self, pred: impl Fn(&AtRule) -> bool) -> Vec<AtRule> {
        fn visit(nodes: &mut Vec<Node>, pred: &dyn Fn(&AtRule) -> bool, out: &mut Vec<AtRule>) {
            let mut kept = Vec::with_capacity(nodes.len());
            for node in nodes.drain(..) {
                match node {
                    Node::AtRule(at) if pred(&at) => out.push(at),
                    Node::AtRule(mut at) => {
                        if let Some(children) = at.nodes.as_mut() {
                            visit(children, pred, out);
                        }
                        kept.push(Node::AtRule(at));
                    }
                    Node::Rule(mut rule) => {
                        visit(&mut rule.nodes, pred, out);
                        kept.push(Node::Rule(rule));
                    }
                    other => kept.push(other),
                }
            }
            *nodes = kept;
        }
        let mut removed = Vec::new();
        visit(&mut self.nodes, &pred, &mut removed);
        removed
    }

    /// Replace the first at-rule matching `name`/`params` with `replacement`,
    /// in place. Returns `false` when no such marker exists.
    pub fn splice_at_marker(&mut self, name: &str, params: &str, replacement: Vec<Node>) -> bool {
        fn visit(nodes: &mut Vec<Node>, name: &str, params: &str, replacement: &mut Option<Vec<Node>>) -> bool {
            if let Some(index) = nodes
                .iter()
                .position(|n| matches!(n, Node::AtRule(at) if at.is(name, params)))
            {
                let fill = replacement.take().unwrap_or_default();
                nodes.splice(index..=index, fill);
                return true;
            }
            nodes.iter_mut().any(|node| match node {
                Node::AtRule(at) => at
                    .nodes
                    .as_mut()
                    .is_some_and(|children| visit(children, name, params, replacement)),
                Node::Rule(rule) => visit(&mut rule.nodes, name, params, replacement),
                _ => false,
            })
        }
        let mut replacement = Some(replacement);
        visit(&mut self.nodes, name, params, &mut replacement)
    }

    /// Prepend nodes into the block of the first at-rule matching
    /// `name`/`params`. Returns `false` when none exists.
    pub fn prepend_into(&mut self, name: &str, params: &str, nodes: Vec<Node>) -> bool {
        let mut pending = Some(nodes);
        self.walk_at_rules_mut(&mut |at| {
            if !at.is(name, params) {
                return;
            }
            if let Some(children) = at.nodes.as_mut() {
                if let Some(mut merged) = pending.take() {
                    merged.append(children);
                    *children = merged;
                }
            }
        });
        pending.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Stylesheet {
        Stylesheet {
            nodes: vec![
                Node::AtRule(AtRule::statement("import", "\"olex\"")),
                Node::AtRule(AtRule::block(
                    "layer",
                    "base",
                    vec![Node::AtRule(AtRule::statement("olex", "layouts"))],
                )),
                Node::Rule(Rule::new("a").with_declaration("color", "red")),
                Node::AtRule(AtRule::statement("olex", "utilities")),
            ],
        }
    }

    #[test]
    fn any_at_rule_descends_into_blocks() {
        let sheet = sample();
        assert!(sheet.any_at_rule(|at| at.is("olex", "layouts")));
        assert!(!sheet.any_at_rule(|at| at.name == "theme"));
    }

    #[test]
    fn remove_at_rules_collects_in_order() {
        let mut sheet = sample();
        let removed = sheet.remove_at_rules(|at| at.name == "olex");
        assert_eq!(removed.len(), 2);
        assert_eq!(removed[0].params, "layouts");
        assert_eq!(removed[1].params, "utilities");
        assert!(!sheet.any_at_rule(|at| at.name == "olex"));
        assert_eq!(sheet.nodes.len(), 3);
    }

    #[test]
    fn splice_replaces_marker_in_place() {
        let mut sheet = sample();
        let generated = vec![
            Node::Rule(Rule::new("[data-m]")),
            Node::Rule(Rule::new("[data-p]")),
        ];
        assert!(sheet.splice_at_marker("olex", "layouts", generated));
        let Node::AtRule(layer) = &sheet.nodes[1] else {
            panic!("expected layer at-rule");
        };
        let children = layer.nodes.as_ref().unwrap();
        assert_eq!(children.len(), 2);
        assert!(matches!(&children[0], Node::Rule(r) if r.selector == "[data-m]"));
    }

    #[test]
    fn splice_missing_marker() {
        let mut sheet = sample();
        assert!(!sheet.splice_at_marker("olex", "components", vec![]));
    }

    #[test]
    fn prepend_into_block() {
        let mut sheet = sample();
        let ok = sheet.prepend_into("layer", "base", vec![Node::Comment(Comment::new(" first "))]);
        assert!(ok);
        let Node::AtRule(layer) = &sheet.nodes[1] else {
            panic!("expected layer at-rule");
        };
        let children = layer.nodes.as_ref().unwrap();
        assert!(matches!(&children[0], Node::Comment(_)));
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn rule_declarations_iterator() {
        let rule = Rule::new("a")
            .with_declaration("color", "red")
            .with_declaration("margin", "0");
        let props: Vec<&str> = rule.declarations().map(|d| d.property.as_str()).collect();
        assert_eq!(props, vec!["color", "margin"]);
    }
}
