// htmltree — HTML parser and serializer producing a typed node tree.
//
// Architecture:
//   HTML string → recursive-descent parse → Node tree → serialize → HTML string
//
// The parser covers normal, void, raw-text, template and foreign (SVG /
// MathML) elements, HTML's end-tag-omission rules, and CDATA sections in
// foreign content. Character references are preserved verbatim in both
// directions; for valid inputs the serializer restores the original bytes
// modulo three normalizations (doctype canonicalization, removal of the
// self-closing slash, and explicit end tags for elements whose end tags
// were omitted).

mod error;
pub mod node;
mod parse;
mod serialize;

pub use error::ParseError;
pub use node::{Attribute, Cdata, Comment, Element, ElementKind, Node, Text};
pub use serialize::SerializeOptions;

use parse::scan::Cursor;
use parse::Parser;

/// Parse a single element spanning the whole input (trailing whitespace
/// allowed).
///
/// # Examples
///
/// ```
/// let ul = htmltree::parse_element("<ul><li>A<li>B</ul>").unwrap();
/// assert_eq!(ul.tag_name, "ul");
/// assert_eq!(ul.children.len(), 2);
/// ```
pub fn parse_element(input: &str) -> Result<Element, ParseError> {
    #[cfg(feature = "tracing")]
    tracing::trace!(len = input.len(), "parse_element");
    let (element, _) = Parser::new().single_element(Cursor::new(input))?;
    Ok(element)
}

/// Parse a list of sibling nodes spanning the whole input.
///
/// # Examples
///
/// ```
/// let nodes = htmltree::parse_fragments("a<br>b").unwrap();
/// assert_eq!(nodes.len(), 3);
/// assert!(htmltree::parse_fragments("").unwrap().is_empty());
/// ```
pub fn parse_fragments(input: &str) -> Result<Vec<Node>, ParseError> {
    #[cfg(feature = "tracing")]
    tracing::trace!(len = input.len(), "parse_fragments");
    let (nodes, _) = Parser::new().fragments(Cursor::new(input))?;
    Ok(nodes)
}

/// Parse a full HTML document: optional BOM, a required doctype, exactly
/// one root element, and surrounding whitespace/comments — all returned as
/// a flat node list whose serialization restores the input.
///
/// # Examples
///
/// ```
/// let nodes = htmltree::parse_html("<!DOCTYPE html><html><body></body></html>").unwrap();
/// assert!(nodes[0].is_text_node()); // the canonical doctype
/// ```
pub fn parse_html(input: &str) -> Result<Vec<Node>, ParseError> {
    #[cfg(feature = "tracing")]
    tracing::trace!(len = input.len(), "parse_html");
    let (nodes, _) = Parser::new().document(Cursor::new(input))?;
    Ok(nodes)
}

/// Parse a declarative shadow root: a fragment whose last element is a
/// `<template shadowrootmode="open">`.
pub fn parse_shadow_root(input: &str) -> Result<Vec<Node>, ParseError> {
    #[cfg(feature = "tracing")]
    tracing::trace!(len = input.len(), "parse_shadow_root");
    let (nodes, _) = Parser::new().shadow_root(Cursor::new(input))?;
    Ok(nodes)
}

/// Serialize a node with default options.
///
/// # Examples
///
/// ```
/// use htmltree::Node;
///
/// let ul = htmltree::parse_element("<ul><li>A<li>B</ul>").unwrap();
/// let html = htmltree::serialize_node(&Node::Element(ul));
/// assert_eq!(html, "<ul><li>A</li><li>B</li></ul>");
/// ```
pub fn serialize_node(node: &Node) -> String {
    serialize_node_with(node, &SerializeOptions::default())
}

/// Serialize a node with custom options.
///
/// # Examples
///
/// ```
/// use htmltree::{Node, SerializeOptions};
///
/// let options = SerializeOptions::new().with_remove_comments(true);
/// let html = htmltree::serialize_node_with(&Node::comment("gone"), &options);
/// assert_eq!(html, "");
/// ```
pub fn serialize_node_with(node: &Node, options: &SerializeOptions) -> String {
    serialize::serialize(node, options)
}

/// Serialize a node list by concatenation, with default options.
pub fn serialize_fragments(nodes: &[Node]) -> String {
    serialize_fragments_with(nodes, &SerializeOptions::default())
}

/// Serialize a node list by concatenation, with custom options.
pub fn serialize_fragments_with(nodes: &[Node], options: &SerializeOptions) -> String {
    serialize::serialize_all(nodes, options)
}
