//! Arena copy of a parsed HTML document.

use crate::domain::extractor::DocumentTree;
use scraper::{Html, Node};
use std::collections::HashMap;

#[derive(Debug)]
enum NodeKind {
    Element(String),
    Text(String),
    Other,
}

#[derive(Debug)]
struct MarkupNode {
    parent: Option<usize>,
    kind: NodeKind,
    children: Vec<usize>,
}

/// A parsed HTML document stored as a flat arena in document order.
///
/// `scraper::Html` is `!Send`; copying the parts the extractor needs into an
/// arena lets the tree cross `.await` points and keeps the extractor free of
/// parser types.
#[derive(Debug)]
pub struct MarkupTree {
    nodes: Vec<MarkupNode>,
}

impl MarkupTree {
    /// Parses a full HTML document.
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);

        let mut index = HashMap::new();
        let mut nodes: Vec<MarkupNode> = Vec::new();

        // descendants() is a pre-order walk, so arena order is document order
        // and every parent is indexed before its children.
        for node in document.tree.root().descendants() {
            let id = nodes.len();
            index.insert(node.id(), id);

            let parent = node.parent().and_then(|p| index.get(&p.id()).copied());

            let kind = match node.value() {
                Node::Element(element) => NodeKind::Element(element.name().to_string()),
                Node::Text(text) => {
                    let text: &str = text;
                    NodeKind::Text(text.to_string())
                }
                _ => NodeKind::Other,
            };

            if let Some(p) = parent {
                nodes[p].children.push(id);
            }

            nodes.push(MarkupNode {
                parent,
                kind,
                children: Vec::new(),
            });
        }

        Self { nodes }
    }

    fn is_element(&self, id: usize) -> bool {
        matches!(self.nodes[id].kind, NodeKind::Element(_))
    }
}

impl DocumentTree for MarkupTree {
    type Node = usize;

    fn first_heading(&self) -> Option<usize> {
        self.nodes
            .iter()
            .position(|n| matches!(&n.kind, NodeKind::Element(name) if name == "h1"))
    }

    fn find_text_node(&self, text: &str) -> Option<usize> {
        self.nodes
            .iter()
            .position(|n| matches!(&n.kind, NodeKind::Text(t) if t.trim() == text))
    }

    fn parent(&self, node: usize) -> Option<usize> {
        self.nodes.get(node)?.parent
    }

    fn next_element_sibling(&self, node: usize) -> Option<usize> {
        let parent = self.parent(node)?;
        let siblings = &self.nodes[parent].children;
        let position = siblings.iter().position(|&s| s == node)?;

        siblings[position + 1..]
            .iter()
            .copied()
            .find(|&s| self.is_element(s))
    }

    fn stripped_text(&self, node: usize) -> String {
        let mut out = String::new();
        let mut stack = vec![node];

        while let Some(id) = stack.pop() {
            let Some(current) = self.nodes.get(id) else {
                continue;
            };
            if let NodeKind::Text(text) = &current.kind {
                out.push_str(text.trim());
            }
            stack.extend(current.children.iter().rev());
        }

        out
    }
}
