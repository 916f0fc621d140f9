// Element classification — per-tag static data driving the parser.
//
// Three concerns live here: the content-kind classifier (void, raw text,
// template, foreign, normal), the reserved names that may not be used as
// custom elements, and the end-tag-omission table describing which follow
// tokens implicitly close an element.

use crate::node::ElementKind;

/// Elements that never have content and never take an end tag.
pub(crate) const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Elements whose content is raw text up to the matching end tag.
pub(crate) const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Raw-text elements in which a browser would decode character references.
pub(crate) const ESCAPABLE_RAW_TEXT_ELEMENTS: &[&str] = &["textarea", "title"];

/// Hyphenated names reserved by SVG and MathML; not valid custom elements.
pub(crate) const FORBIDDEN_CUSTOM_ELEMENT_NAMES: &[&str] = &[
    "annotation-xml",
    "color-profile",
    "font-face",
    "font-face-src",
    "font-face-uri",
    "font-face-format",
    "font-face-name",
    "missing-glyph",
];

/// Compute an element's kind from its emitted tag name.
///
/// `in_foreign` is whether a `svg`/`math` ancestor is open. The caller
/// pushes the foreign stack when this returns `Foreign` for a `svg`/`math`
/// root itself. Comparisons use the emitted name: HTML-namespace names are
/// already lowercased, foreign names keep their casing (so `<INPUT>` inside
/// `<svg>` is foreign, not void).
pub(crate) fn classify(tag_name: &str, in_foreign: bool) -> ElementKind {
    if tag_name == "template" {
        ElementKind::Template
    } else if VOID_ELEMENTS.contains(&tag_name) {
        ElementKind::Void
    } else if RAW_TEXT_ELEMENTS.contains(&tag_name) {
        ElementKind::RawText
    } else if ESCAPABLE_RAW_TEXT_ELEMENTS.contains(&tag_name) {
        ElementKind::EscapableRawText
    } else if tag_name == "svg" || tag_name == "math" || in_foreign {
        ElementKind::Foreign
    } else {
        ElementKind::Normal
    }
}

/// Whether this start tag opens a foreign (svg/math) subtree.
pub(crate) fn is_foreign_root(tag_name: &str) -> bool {
    tag_name == "svg" || tag_name == "math"
}

// ---------------------------------------------------------------------------
// End-tag omission
// ---------------------------------------------------------------------------

/// Follow sets that implicitly close an element whose end tag was omitted.
///
/// While parsing the children of an element with an entry here:
/// - a start tag named in `open` ends the children list without being
///   consumed;
/// - an end tag named in `closed` ends the children list without being
///   consumed (the enclosing element consumes it);
/// - `closes_at_eof` lets the element close at end of input (`body`,
///   `html`).
///
/// The element's own literal end tag is always accepted too.
pub(crate) struct Omission {
    pub(crate) open: &'static [&'static str],
    pub(crate) closed: &'static [&'static str],
    pub(crate) closes_at_eof: bool,
}

/// Start tags that implicitly close an open `p` element.
const P_OPEN: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "div",
    "dl",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hgroup",
    "hr",
    "main",
    "menu",
    "nav",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "ul",
];

/// End tags that implicitly close an open `p` element.
const P_CLOSED: &[&str] = &[
    "address",
    "article",
    "aside",
    "body",
    "blockquote",
    "caption",
    "details",
    "dialog",
    "div",
    "dd",
    "dt",
    "fieldset",
    "figure",
    "figcaption",
    "footer",
    "form",
    "header",
    "hgroup",
    "li",
    "main",
    "nav",
    "object",
    "search",
    "section",
    "td",
    "th",
    "template",
];

macro_rules! omission {
    (open: $open:expr, closed: $closed:expr, eof: $eof:expr) => {
        Omission {
            open: $open,
            closed: $closed,
            closes_at_eof: $eof,
        }
    };
}

/// The end-tag-omission entry for a tag, if it has one.
pub(crate) fn omission(tag_name: &str) -> Option<&'static Omission> {
    static BODY: Omission = omission!(open: &[], closed: &["html"], eof: true);
    static CAPTION: Omission = omission!(
        open: &["colgroup", "col", "thead", "tbody", "tfoot", "tr", "th", "td"],
        closed: &[],
        eof: false
    );
    static COLGROUP: Omission =
        omission!(open: &["thead", "tbody", "tfoot", "tr"], closed: &[], eof: false);
    static HEAD: Omission = omission!(open: &["body"], closed: &[], eof: false);
    static HTML: Omission = omission!(open: &[], closed: &[], eof: true);
    static LI: Omission = omission!(open: &["li"], closed: &["ul", "ol", "menu"], eof: false);
    static DD: Omission = omission!(open: &["dd", "dt"], closed: &["dl", "div"], eof: false);
    static DT: Omission = omission!(open: &["dd", "dt"], closed: &[], eof: false);
    static OPTION: Omission = omission!(
        open: &["option", "optgroup", "hr"],
        closed: &["select", "datalist", "optgroup"],
        eof: false
    );
    static OPTGROUP: Omission =
        omission!(open: &["optgroup", "hr"], closed: &["select"], eof: false);
    static P: Omission = omission!(open: P_OPEN, closed: P_CLOSED, eof: false);
    static RT: Omission = omission!(open: &["rt", "rp"], closed: &["ruby"], eof: false);
    static THEAD: Omission = omission!(open: &["tbody", "tfoot"], closed: &[], eof: false);
    static TBODY: Omission = omission!(open: &["tbody", "tfoot"], closed: &["table"], eof: false);
    static TFOOT: Omission = omission!(open: &[], closed: &["table"], eof: false);
    static TD: Omission = omission!(open: &["td", "th", "tr"], closed: &["tr", "table"], eof: false);
    static TH: Omission =
        omission!(open: &["td", "th", "tbody"], closed: &["tr", "thead"], eof: false);
    static TR: Omission = omission!(open: &["tr", "tbody"], closed: &["table", "thead"], eof: false);

    match tag_name {
        "body" => Some(&BODY),
        "caption" => Some(&CAPTION),
        "colgroup" => Some(&COLGROUP),
        "head" => Some(&HEAD),
        "html" => Some(&HTML),
        "li" => Some(&LI),
        "dd" => Some(&DD),
        "dt" => Some(&DT),
        "option" => Some(&OPTION),
        "optgroup" => Some(&OPTGROUP),
        "p" => Some(&P),
        "rt" | "rp" => Some(&RT),
        "thead" => Some(&THEAD),
        "tbody" => Some(&TBODY),
        "tfoot" => Some(&TFOOT),
        "td" => Some(&TD),
        "th" => Some(&TH),
        "tr" => Some(&TR),
        _ => None,
    }
}
