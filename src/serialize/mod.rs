// Node tree → HTML string serializer.
//
// A pure fold over the tree. Text, comment and CDATA bytes come out
// verbatim (the parser captured them that way); elements re-emit their tag
// and attributes, then stop at void/self-closing elements and close
// everything else explicitly — which is how end tags omitted in the source
// reappear in the output.

mod attrs;

use crate::node::{ElementKind, Node};

/// Serializer configuration.
#[derive(Debug, Clone, Default)]
pub struct SerializeOptions {
    /// Drop comment nodes from the output.
    pub remove_comments: bool,
}

impl SerializeOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether comment nodes are dropped from the output.
    pub fn with_remove_comments(mut self, remove_comments: bool) -> Self {
        self.remove_comments = remove_comments;
        self
    }
}

/// Serialize a single node.
pub(crate) fn serialize(node: &Node, options: &SerializeOptions) -> String {
    let mut out = String::new();
    write_node(&mut out, node, options);
    out
}

/// Serialize a node list by concatenation.
pub(crate) fn serialize_all(nodes: &[Node], options: &SerializeOptions) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node, options);
    }
    out
}

fn write_node(out: &mut String, node: &Node, options: &SerializeOptions) {
    match node {
        Node::Text(text) => out.push_str(&text.value),
        Node::Comment(comment) => {
            if !options.remove_comments {
                out.push_str("<!--");
                out.push_str(&comment.value);
                out.push_str("-->");
            }
        }
        Node::Cdata(cdata) => {
            out.push_str("<![CDATA[");
            out.push_str(&cdata.value);
            out.push_str("]]>");
        }
        Node::Element(element) => {
            out.push('<');
            out.push_str(&element.tag_name);
            for attribute in &element.attributes {
                attrs::write_attribute(out, attribute);
            }
            out.push('>');
            // Self-closing and void elements end here; the self-closing
            // slash is never re-emitted.
            if element.self_closing || element.kind == ElementKind::Void {
                debug_assert!(
                    element.children.is_empty(),
                    "void/self-closing elements have no children"
                );
                return;
            }
            for child in &element.children {
                write_node(out, child, options);
            }
            out.push_str("</");
            out.push_str(&element.tag_name);
            out.push('>');
        }
    }
}
