//! Deterministic stylesheet printer.
//!
//! Output uses two-space indentation, one declaration per line, and a blank
//! line between adjacent top-level nodes when either of them is a block.

use std::fmt;

use crate::css::model::*;

const INDENT: &str = "  ";

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_nodes(f, &self.nodes, 0)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self, 0)
    }
}

fn is_block(node: &Node) -> bool {
    match node {
        Node::Rule(_) => true,
        Node::AtRule(at) => at.nodes.is_some(),
        Node::Declaration(_) | Node::Comment(_) => false,
    }
}

fn write_nodes(f: &mut fmt::Formatter<'_>, nodes: &[Node], depth: usize) -> fmt::Result {
    for (i, node) in nodes.iter().enumerate() {
        if depth == 0 && i > 0 && (is_block(node) || is_block(&nodes[i - 1])) {
            writeln!(f)?;
        }
        write_node(f, node, depth)?;
    }
    Ok(())
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, depth: usize) -> fmt::Result {
    let indent = INDENT.repeat(depth);
    match node {
        Node::Rule(rule) => {
            writeln!(f, "{indent}{} {{", rule.selector)?;
            write_nodes(f, &rule.nodes, depth + 1)?;
            writeln!(f, "{indent}}}")
        }
        Node::AtRule(at) => {
            let header = if at.params.is_empty() {
                format!("@{}", at.name)
            } else {
                format!("@{} {}", at.name, at.params)
            };
            match &at.nodes {
                Some(children) => {
                    writeln!(f, "{indent}{header} {{")?;
                    write_nodes(f, children, depth + 1)?;
                    writeln!(f, "{indent}}}")
                }
                None => writeln!(f, "{indent}{header};"),
            }
        }
        Node::Declaration(decl) => {
            let important = if decl.important { " !important" } else { "" };
            writeln!(f, "{indent}{}: {}{important};", decl.property, decl.value)
        }
        Node::Comment(comment) => writeln!(f, "{indent}/*{}*/", comment.text),
    }
}
