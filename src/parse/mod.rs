// HTML text → node tree.
//
// Recursive descent over the grammar: a start tag, then children chosen by
// the element's kind, then the closure of the element. The grammar is
// context-sensitive in three ways, all handled here: raw-text elements
// swallow their content up to a matching end tag, CDATA sections are only
// recognized under an svg/math subtree, and HTML's end-tag-omission rules
// end an element's children on one-token lookahead instead of an explicit
// end tag.
//
// All state is confined to the `Parser` value: the foreign-namespace stack
// is pushed when an svg/math root opens and popped on every exit path, so
// a failed parse never leaks state into the next call.

pub(crate) mod elements;
pub(crate) mod lexer;
pub(crate) mod scan;

use crate::error::ParseError;
use crate::node::{Cdata, Element, ElementKind, Node};
use elements::Omission;
use scan::{is_whitespace, many, Cursor, Scanned};

/// One parse invocation's worth of state.
#[derive(Default)]
pub(crate) struct Parser {
    /// Open foreign roots (`svg`/`math`), innermost last.
    foreign: Vec<String>,
}

impl Parser {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn in_foreign(&self) -> bool {
        !self.foreign.is_empty()
    }

    // -----------------------------------------------------------------------
    // Entry points
    // -----------------------------------------------------------------------

    /// A single element spanning the whole input (trailing whitespace
    /// allowed).
    pub(crate) fn single_element<'a>(&mut self, at: Cursor<'a>) -> Scanned<'a, Element> {
        let (element, after) = self.element(at)?;
        let after = after.whitespace();
        after.expect_end()?;
        Ok((element, after))
    }

    /// A list of sibling nodes spanning the whole input.
    pub(crate) fn fragments<'a>(&mut self, at: Cursor<'a>) -> Scanned<'a, Vec<Node>> {
        let (nodes, after, stopped) = many(at, |c| self.node(c));
        match after.expect_end() {
            Ok(()) => Ok((nodes, after)),
            // The node that refused to parse explains the leftover better
            // than "expected end of input" does.
            Err(end) => Err(stopped.furthest(end)),
        }
    }

    /// A full document: optional BOM, trivia, doctype, trivia, exactly one
    /// root element, trivia. The BOM, whitespace runs and the (normalized)
    /// doctype are all preserved as text nodes so serialization restores
    /// the input.
    pub(crate) fn document<'a>(&mut self, at: Cursor<'a>) -> Scanned<'a, Vec<Node>> {
        let mut nodes = Vec::new();
        let mut at = at;
        if let Some(after) = at.eat("\u{FEFF}") {
            nodes.push(Node::text("\u{FEFF}"));
            at = after;
        }
        at = self.trivia(at, &mut nodes)?;
        let ((), after) = lexer::doctype(at)?;
        nodes.push(Node::text(lexer::CANONICAL_DOCTYPE));
        at = self.trivia(after, &mut nodes)?;
        let (root, after) = self.element(at)?;
        nodes.push(Node::Element(root));
        at = self.trivia(after, &mut nodes)?;
        at.expect_end()?;
        Ok((nodes, at))
    }

    /// A fragment whose last element must be a declarative shadow-root
    /// template: `<template shadowrootmode="open">`.
    pub(crate) fn shadow_root<'a>(&mut self, at: Cursor<'a>) -> Scanned<'a, Vec<Node>> {
        let mut nodes = Vec::new();
        let mut last_element: Option<(usize, usize)> = None;
        let mut at = at;
        loop {
            let start = at.pos();
            match self.node(at) {
                Ok((node, after)) => {
                    if node.is_element_node() {
                        last_element = Some((nodes.len(), start));
                    }
                    nodes.push(node);
                    at = after;
                }
                Err(stopped) => {
                    at.expect_end().map_err(|end| stopped.furthest(end))?;
                    break;
                }
            }
        }
        let (index, start) = last_element
            .ok_or_else(|| ParseError::new("Expected a template element", at.pos()))?;
        let element = nodes[index].as_element().expect("tracked as an element");
        if element.tag_name != "template" {
            return Err(ParseError::new("Expected a template element", start));
        }
        if element.attribute("shadowrootmode") != Some("open") {
            return Err(ParseError::new("Expected a declarative shadow root", start));
        }
        Ok((nodes, at))
    }

    // -----------------------------------------------------------------------
    // Nodes
    // -----------------------------------------------------------------------

    /// One node: text, comment, CDATA (foreign content only) or element.
    /// All branches are tried from the same position; the deepest failure
    /// is the one reported.
    fn node<'a>(&mut self, at: Cursor<'a>) -> Scanned<'a, Node> {
        let mut deepest = match lexer::text_run(at) {
            Ok((text, after)) => return Ok((Node::text(text), after)),
            Err(e) => e,
        };
        match lexer::comment(at) {
            Ok((body, after)) => return Ok((Node::comment(body), after)),
            Err(e) => deepest = deepest.furthest(e),
        }
        if self.in_foreign() {
            match lexer::cdata(at) {
                Ok((body, after)) => {
                    let node = Node::Cdata(Cdata { value: body.into() });
                    return Ok((node, after));
                }
                Err(e) => deepest = deepest.furthest(e),
            }
        }
        match self.element(at) {
            Ok((element, after)) => Ok((Node::Element(element), after)),
            Err(e) => Err(deepest.furthest(e)),
        }
    }

    /// Whitespace runs and comments, appended to `nodes` as they appear.
    fn trivia<'a>(
        &self,
        mut at: Cursor<'a>,
        nodes: &mut Vec<Node>,
    ) -> Result<Cursor<'a>, ParseError> {
        loop {
            if let Some((ws, after)) = at.take_while1(is_whitespace) {
                nodes.push(Node::text(ws));
                at = after;
                continue;
            }
            if at.starts_with("<!--") {
                let (body, after) = lexer::comment(at)?;
                nodes.push(Node::comment(body));
                at = after;
                continue;
            }
            return Ok(at);
        }
    }

    // -----------------------------------------------------------------------
    // Elements
    // -----------------------------------------------------------------------

    fn element<'a>(&mut self, at: Cursor<'a>) -> Scanned<'a, Element> {
        let at = at.eat("<").ok_or_else(|| at.fail("Invalid start tag"))?;
        let (tag_name, at) = lexer::tag_name(at, self.in_foreign())?;

        // Attributes need at least one whitespace after the tag name.
        let (attributes, at, attribute_stop) = match at.whitespace1() {
            Some(after) => {
                let (attrs, after, stopped) = many(after, lexer::attribute);
                (attrs, after, Some(stopped))
            }
            None => (Vec::new(), at, None),
        };

        let slash_at = at.pos();
        let (saw_slash, at) = if let Some(after) = at.eat("/>") {
            (true, after)
        } else if let Some(after) = at.eat(">") {
            (false, after)
        } else {
            // An attribute that failed mid-way (e.g. `a=` without a value)
            // is the more precise explanation when it got further.
            let invalid = at.fail("Invalid start tag");
            return Err(match attribute_stop {
                Some(stopped) => stopped.furthest(invalid),
                None => invalid,
            });
        };

        let kind = elements::classify(&tag_name, self.in_foreign());
        if saw_slash && !matches!(kind, ElementKind::Void | ElementKind::Foreign) {
            return Err(ParseError::new(
                "Unexpected self-closing tag on a non-void element",
                slash_at,
            ));
        }

        let self_closing = saw_slash || kind == ElementKind::Void;
        if self_closing {
            // Pure lookahead: the whitespace belongs to the parent when no
            // stray end tag follows.
            let ahead = at.whitespace();
            if end_tag(ahead, &tag_name).is_some() {
                return Err(ahead.fail("Unexpected end tag on a void element"));
            }
            return Ok((
                Element {
                    tag_name,
                    kind,
                    attributes,
                    children: Vec::new(),
                    self_closing,
                },
                at,
            ));
        }

        let pushed = kind == ElementKind::Foreign && elements::is_foreign_root(&tag_name);
        if pushed {
            self.foreign.push(tag_name.clone());
        }
        let body = self.element_body(at, &tag_name, kind);
        if pushed {
            self.foreign.pop();
        }
        let (children, at) = body?;

        debug_assert!(
            !matches!(kind, ElementKind::RawText | ElementKind::EscapableRawText)
                || children.len() <= 1,
            "raw-text elements have at most one text child"
        );

        Ok((
            Element {
                tag_name,
                kind,
                attributes,
                children,
                self_closing,
            },
            at,
        ))
    }

    /// Children plus the element's closure.
    fn element_body<'a>(
        &mut self,
        at: Cursor<'a>,
        tag_name: &str,
        kind: ElementKind,
    ) -> Scanned<'a, Vec<Node>> {
        let (children, at) = match kind {
            ElementKind::RawText | ElementKind::EscapableRawText => {
                let (body, after) = lexer::raw_text_body(at, tag_name);
                let children = if body.is_empty() {
                    Vec::new()
                } else {
                    vec![Node::text(body)]
                };
                (children, after)
            }
            _ => self.children(at, tag_name)?,
        };
        let ((), at) = self.close_element(at, tag_name)?;
        Ok((children, at))
    }

    /// The children list; stops (without consuming) at end of input, ahead
    /// of any end tag, or ahead of a start tag that implicitly closes this
    /// element.
    fn children<'a>(&mut self, mut at: Cursor<'a>, tag_name: &str) -> Scanned<'a, Vec<Node>> {
        let omission = elements::omission(tag_name);
        let mut children = Vec::new();
        loop {
            if at.at_end() || at.starts_with("</") {
                break;
            }
            if let Some(entry) = omission {
                if open_set_ahead(at, entry.open) {
                    break;
                }
            }
            let (child, after) = self.node(at)?;
            children.push(child);
            at = after;
        }
        Ok((children, at))
    }

    /// Accept the element's closure: an implicit close from its omission
    /// entry (not consumed), or the literal end tag (consumed).
    fn close_element<'a>(&self, at: Cursor<'a>, tag_name: &str) -> Scanned<'a, ()> {
        if let Some(entry) = elements::omission(tag_name) {
            if implicit_close_ahead(at, entry) {
                return Ok(((), at));
            }
        }
        match end_tag(at, tag_name) {
            Some(after) => Ok(((), after)),
            None => Err(at.fail(format!("Expected a '</{tag_name}>' end tag"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Lookaheads
// ---------------------------------------------------------------------------

/// Match `</tag\s*>` ASCII case-insensitively, returning the cursor after
/// the `>`.
fn end_tag<'a>(at: Cursor<'a>, tag_name: &str) -> Option<Cursor<'a>> {
    at.eat("</")?
        .eat_ci(tag_name)
        .map(|after| after.whitespace())?
        .eat(">")
}

/// Whether a start tag named in `open` begins here. The candidate name must
/// be complete — `<li>` closes an open `li`, `<link>` does not.
fn open_set_ahead(at: Cursor<'_>, open: &[&str]) -> bool {
    let Some(after_lt) = at.eat("<") else {
        return false;
    };
    open.iter().any(|name| {
        after_lt.eat_ci(name).is_some_and(|after| match after.peek() {
            None => true,
            Some(c) => is_whitespace(c) || c == '/' || c == '>',
        })
    })
}

/// Whether any of this element's implicit-close conditions holds here.
fn implicit_close_ahead(at: Cursor<'_>, entry: &Omission) -> bool {
    open_set_ahead(at, entry.open)
        || entry.closed.iter().any(|name| end_tag(at, name).is_some())
        || (entry.closes_at_eof && at.at_end())
}
