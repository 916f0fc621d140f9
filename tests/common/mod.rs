// Shared test helpers for htmltree.

use htmltree::Element;

/// Parse a single element, panicking with context on failure.
pub fn element(input: &str) -> Element {
    htmltree::parse_element(input)
        .unwrap_or_else(|e| panic!("parse failed for {input:?}: {e}"))
}

/// Parse a single element and serialize it back with default options.
pub fn reserialized(input: &str) -> String {
    htmltree::serialize_node(&htmltree::Node::Element(element(input)))
}
