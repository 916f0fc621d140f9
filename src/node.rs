// HTML node types — the parse tree produced by this crate.
//
// Four node variants share the `Node` enum. Parent nodes own their children;
// there is no materialized upward link (callers that need one keep a stack
// while walking). Leaf nodes hold a `value: String` captured verbatim from
// the input — character references are never decoded.

/// How an element's content is lexed and what children it may have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// No content ever: `area`, `base`, `br`, `col`, `embed`, `hr`, `img`,
    /// `input`, `link`, `meta`, `source`, `track`, `wbr`.
    Void,
    /// `<template>`; children are parsed normally.
    Template,
    /// Content is a single raw text run: `script`, `style`.
    RawText,
    /// Like `RawText` but character references would be honored by a
    /// browser: `textarea`, `title`. (This crate keeps the bytes verbatim
    /// either way.)
    EscapableRawText,
    /// Inside an `svg` or `math` subtree: casing preserved, CDATA allowed,
    /// self-closing allowed on any tag.
    Foreign,
    Normal,
}

// ---------------------------------------------------------------------------
// Node structs
// ---------------------------------------------------------------------------

/// Plain text. Never contains `<` except as the sole child of a raw-text
/// element, whose content is captured wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub value: String,
}

/// An HTML comment. `value` is the exact characters between `<!--` and
/// `-->`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub value: String,
}

/// A CDATA section. Only valid under a foreign (svg/math) subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cdata {
    pub value: String,
}

/// A single attribute. Order and duplicates are preserved on the element;
/// a bare attribute (`<input checked>`) carries the value `""`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An element node.
///
/// `tag_name` is lowercased for HTML-namespace elements and preserved
/// verbatim inside foreign content. Void and self-closing elements never
/// have children; raw-text elements have at most one `Text` child.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag_name: String,
    pub kind: ElementKind,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
    pub self_closing: bool,
}

impl Element {
    /// Value of the first attribute with the given name, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }
}

// ---------------------------------------------------------------------------
// Node enum
// ---------------------------------------------------------------------------

/// A node in the HTML parse tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text(Text),
    Comment(Comment),
    Cdata(Cdata),
    Element(Element),
}

impl Node {
    /// Convenience constructor for a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text {
            value: value.into(),
        })
    }

    /// Convenience constructor for a comment node.
    pub fn comment(value: impl Into<String>) -> Self {
        Node::Comment(Comment {
            value: value.into(),
        })
    }

    /// Whether this node is a text node.
    pub fn is_text_node(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Whether this node is a comment node.
    pub fn is_comment_node(&self) -> bool {
        matches!(self, Node::Comment(_))
    }

    /// Whether this node is a CDATA section.
    pub fn is_cdata_node(&self) -> bool {
        matches!(self, Node::Cdata(_))
    }

    /// Whether this node is an element node.
    pub fn is_element_node(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Returns the element data if this node is an element.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Returns a reference to this node's children, if it can have any.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Element(e) => Some(&e.children),
            _ => None,
        }
    }

    /// Returns a mutable reference to this node's children, if it can have
    /// any.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Element(e) => Some(&mut e.children),
            _ => None,
        }
    }
}
