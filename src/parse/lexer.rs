// Token-level lexers — text runs, comments, doctype, CDATA, tag names and
// attributes.
//
// Every rule is anchored at the cursor and captures bytes verbatim; no
// character-reference decoding happens anywhere in this crate. Lexical
// classes that go beyond a simple scan are `LazyLock` regex statics.

use std::sync::LazyLock;

use regex::Regex;

use crate::node::Attribute;
use crate::parse::elements::FORBIDDEN_CUSTOM_ELEMENT_NAMES;
use crate::parse::scan::{is_whitespace, Cursor, Scanned};

/// The only doctype this crate accepts, and the form it normalizes to.
pub(crate) const CANONICAL_DOCTYPE: &str = "<!DOCTYPE html>";

// ---------------------------------------------------------------------------
// Text, comments, doctype, CDATA
// ---------------------------------------------------------------------------

/// Longest non-empty run of characters up to the next `<`.
pub(crate) fn text_run(at: Cursor<'_>) -> Scanned<'_, &str> {
    at.take_while1(|c| c != '<')
        .ok_or_else(|| at.fail("Expected text"))
}

/// `<!--` body `-->`. Returns the body verbatim.
///
/// The body must not start with `>` or `->`, must not contain `<!--`,
/// `-->` or `--!>`, and must not end with `<!-` (ending with `<!` is
/// fine). Violations and unterminated comments fail with
/// `InvalidComment`, positioned at the body.
pub(crate) fn comment(at: Cursor<'_>) -> Scanned<'_, &str> {
    let body_start = at
        .eat("<!--")
        .ok_or_else(|| at.fail("InvalidComment"))?;
    let rest = body_start.rest();
    let close = rest
        .find("-->")
        .ok_or_else(|| body_start.fail("InvalidComment"))?;
    let body = &rest[..close];
    let malformed = body.starts_with('>')
        || body.starts_with("->")
        || body.contains("<!--")
        || body.contains("--!>")
        || body.ends_with("<!-");
    if malformed {
        return Err(body_start.fail("InvalidComment"));
    }
    let after = body_start
        .eat(body)
        .and_then(|c| c.eat("-->"))
        .expect("comment body and closer were just matched");
    Ok((body, after))
}

static DOCTYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)<!DOCTYPE[\t\n\x0C\r ]+html[\t\n\x0C\r ]*>").unwrap()
});

/// Case-insensitive `<!DOCTYPE html>` (arbitrary internal whitespace).
///
/// The match is discarded; callers emit [`CANONICAL_DOCTYPE`].
pub(crate) fn doctype(at: Cursor<'_>) -> Scanned<'_, ()> {
    match at.regex(&DOCTYPE) {
        Some((_, after)) => Ok(((), after)),
        None => Err(at.fail("Expected a valid doctype")),
    }
}

/// `<![CDATA[` body `]]>`. The body is everything up to the first `]]>`.
pub(crate) fn cdata(at: Cursor<'_>) -> Scanned<'_, &str> {
    let body_start = at
        .eat("<![CDATA[")
        .ok_or_else(|| at.fail("Invalid CDATA section"))?;
    let rest = body_start.rest();
    let close = rest
        .find("]]>")
        .ok_or_else(|| body_start.fail("Invalid CDATA section"))?;
    let body = &rest[..close];
    let after = body_start
        .eat(body)
        .and_then(|c| c.eat("]]>"))
        .expect("CDATA body and closer were just matched");
    Ok((body, after))
}

// ---------------------------------------------------------------------------
// Tag names
// ---------------------------------------------------------------------------

// Potential-custom-element-name characters, widened to accept ASCII
// uppercase (names are lowercased on emission outside foreign content).
static PCEN_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "^[A-Za-z][\\-.0-9_A-Za-z\u{B7}\u{C0}-\u{D6}\u{D8}-\u{F6}\u{F8}-\u{37D}\
         \u{37F}-\u{1FFF}\u{200C}-\u{200D}\u{203F}-\u{2040}\u{2070}-\u{218F}\
         \u{2C00}-\u{2FEF}\u{3001}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFFD}\
         \u{10000}-\u{EFFFF}]*",
    )
    .unwrap()
});

/// A start-tag name: the custom-element form or the plain HTML form.
/// Lowercased on emission unless inside foreign content.
///
/// The longest PCEN run decides which form applies. A run containing a
/// dash is a custom-element name and commits to that form's checks — a
/// plain-HTML reading of its `[A-Za-z0-9]` prefix would silently hide the
/// custom-element rejections. Custom element names are lowercase-only:
/// uppercase is rescued by lowercasing on emission, except in foreign
/// content where casing is preserved and the name is simply invalid.
/// A run that stays within `[A-Za-z][A-Za-z0-9]*` is a plain HTML name;
/// anything in between (PCEN extras but no dash) needs the dash.
pub(crate) fn tag_name(at: Cursor<'_>, in_foreign: bool) -> Scanned<'_, String> {
    let (name, after) = at
        .regex(&PCEN_NAME)
        .ok_or_else(|| at.fail("Invalid html tag name"))?;
    if name.contains('-') {
        let lowered = name.to_ascii_lowercase();
        if in_foreign && name != lowered {
            return Err(after.fail("Invalid custom element name"));
        }
        if FORBIDDEN_CUSTOM_ELEMENT_NAMES.contains(&lowered.as_str()) {
            return Err(after.fail("Forbidden custom element name"));
        }
        return Ok((if in_foreign { name.to_string() } else { lowered }, after));
    }
    if !name.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return Err(after.fail("Invalid custom element name (should include a dash)"));
    }
    let name = if in_foreign {
        name.to_string()
    } else {
        name.to_ascii_lowercase()
    };
    Ok((name, after))
}

// ---------------------------------------------------------------------------
// Attributes
// ---------------------------------------------------------------------------

fn is_noncharacter(c: char) -> bool {
    let cp = c as u32;
    (0xFDD0..=0xFDEF).contains(&cp) || (cp & 0xFFFE) == 0xFFFE
}

fn is_attribute_name_char(c: char) -> bool {
    !(is_whitespace(c)
        || ('\u{7F}'..='\u{9F}').contains(&c)
        || matches!(c, '"' | '\'' | '>' | '/' | '=')
        || is_noncharacter(c))
}

static SINGLE_QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new("^'[^']*'").unwrap());
static DOUBLE_QUOTED: LazyLock<Regex> = LazyLock::new(|| Regex::new("^\"[^\"]*\"").unwrap());
// The unquoted form has no terminator, so it swallows a trailing `/`:
// `<input type=text/>` carries the value `text/` and no self-closing slash.
static UNQUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[^ \\t\\n\\x0C\\r\\x0B='\"<>`]+").unwrap());

fn attribute_value(at: Cursor<'_>) -> Scanned<'_, &str> {
    if let Some((quoted, after)) = at.regex(&SINGLE_QUOTED) {
        return Ok((&quoted[1..quoted.len() - 1], after));
    }
    if let Some((quoted, after)) = at.regex(&DOUBLE_QUOTED) {
        return Ok((&quoted[1..quoted.len() - 1], after));
    }
    if let Some((value, after)) = at.regex(&UNQUOTED) {
        return Ok((value, after));
    }
    Err(at.fail("Expected a valid attribute value"))
}

/// One attribute: `name`, `name=value` (single-, double- or unquoted), with
/// any trailing whitespace consumed. A bare name carries the value `""`.
pub(crate) fn attribute(at: Cursor<'_>) -> Scanned<'_, Attribute> {
    let (name, after_name) = at
        .take_while1(is_attribute_name_char)
        .ok_or_else(|| at.fail("Expected a valid attribute name"))?;
    let after_name = after_name.whitespace();
    let (value, after_value) = match after_name.eat("=") {
        Some(after_eq) => attribute_value(after_eq.whitespace())?,
        None => ("", after_name),
    };
    Ok((Attribute::new(name, value), after_value.whitespace()))
}

// ---------------------------------------------------------------------------
// Raw text
// ---------------------------------------------------------------------------

/// The content of a raw-text element: everything up to (not including) the
/// first `</tag` that is followed by whitespace, `/` or `>`, compared ASCII
/// case-insensitively. Runs to end of input when no such terminator exists.
///
/// The scan is byte-wise. Indexing is sound because a candidate only ever
/// starts at an ASCII `<`, and ASCII bytes never occur inside a multi-byte
/// UTF-8 sequence.
pub(crate) fn raw_text_body<'a>(at: Cursor<'a>, tag: &str) -> (&'a str, Cursor<'a>) {
    let rest = at.rest();
    let bytes = rest.as_bytes();
    let name = tag.as_bytes();
    let mut end = bytes.len();
    let mut i = 0;
    while i + 2 + name.len() < bytes.len() {
        let delimiter = bytes[i + 2 + name.len()];
        if bytes[i] == b'<'
            && bytes[i + 1] == b'/'
            && bytes[i + 2..i + 2 + name.len()].eq_ignore_ascii_case(name)
            && matches!(delimiter, b' ' | b'\t' | b'\n' | b'\x0C' | b'\r' | b'/' | b'>')
        {
            end = i;
            break;
        }
        i += 1;
    }
    let body = &rest[..end];
    let after = at.eat(body).expect("body is a prefix of the input");
    (body, after)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cur(input: &str) -> Cursor<'_> {
        Cursor::new(input)
    }

    #[test]
    fn test_text_run_stops_at_angle_bracket() {
        let (text, after) = text_run(cur("a&amp;b<div>")).unwrap();
        assert_eq!(text, "a&amp;b");
        assert_eq!(after.rest(), "<div>");
        assert!(text_run(cur("<div>")).is_err());
    }

    #[test]
    fn test_comment_plain() {
        let (body, after) = comment(cur("<!-- hi -->rest")).unwrap();
        assert_eq!(body, " hi ");
        assert_eq!(after.rest(), "rest");
    }

    #[test]
    fn test_comment_may_end_with_bang() {
        // The body " <!" is legal: a comment MAY end in `<!`.
        let (body, _) = comment(cur("<!-- <!-->")).unwrap();
        assert_eq!(body, " <!");
    }

    #[test]
    fn test_comment_rejections() {
        for bad in [
            "<!-->-->",      // starts with >
            "<!--->x-->",    // starts with ->
            "<!--a<!--b-->", // contains <!--
            "<!--a--!>b-->", // contains --!>
            "<!--a<!--->",   // ends with <!-
            "<!--never closed",
        ] {
            let err = comment(cur(bad)).unwrap_err();
            assert_eq!(err.message, "InvalidComment", "input: {bad}");
            assert_eq!(err.position, 4, "input: {bad}");
        }
    }

    #[test]
    fn test_comment_empty_body() {
        let (body, _) = comment(cur("<!---->")).unwrap();
        assert_eq!(body, "");
    }

    #[test]
    fn test_doctype_case_and_whitespace() {
        for ok in ["<!DOCTYPE html>", "<!doctype HTML>", "<!DocType\thtml >"] {
            assert!(doctype(cur(ok)).is_ok(), "input: {ok}");
        }
        let err = doctype(cur("<!DOCTYPE htmlx>")).unwrap_err();
        assert_eq!(err.message, "Expected a valid doctype");
        assert!(doctype(cur("<!DOCTYPE html PUBLIC \"x\">")).is_err());
    }

    #[test]
    fn test_cdata_body_to_first_close() {
        let (body, after) = cdata(cur("<![CDATA[x<y]]>z")).unwrap();
        assert_eq!(body, "x<y");
        assert_eq!(after.rest(), "z");
        assert!(cdata(cur("<![CDATA[unclosed")).is_err());
    }

    #[test]
    fn test_tag_name_lowercases_html_names() {
        let (name, _) = tag_name(cur("DIV>"), false).unwrap();
        assert_eq!(name, "div");
        let (name, _) = tag_name(cur("DIV>"), true).unwrap();
        assert_eq!(name, "DIV");
    }

    #[test]
    fn test_tag_name_custom_elements() {
        let (name, after) = tag_name(cur("my-widget>"), false).unwrap();
        assert_eq!(name, "my-widget");
        assert_eq!(after.rest(), ">");
        // Uppercase is accepted and lowercased outside foreign content.
        let (name, _) = tag_name(cur("My-Widget>"), false).unwrap();
        assert_eq!(name, "my-widget");
    }

    #[test]
    fn test_custom_element_casing_not_rescued_in_foreign_content() {
        // Lowercase dash names pass through foreign content verbatim.
        let (name, _) = tag_name(cur("my-widget>"), true).unwrap();
        assert_eq!(name, "my-widget");
        // Uppercase cannot be lowercased there, so the name is invalid.
        let err = tag_name(cur("My-Widget>"), true).unwrap_err();
        assert_eq!(err.message, "Invalid custom element name");
        assert_eq!(err.position, 9);
    }

    #[test]
    fn test_tag_name_requires_dash_for_pcen_extras() {
        // `x.y` can only be a custom-element name, and those need a dash.
        let err = tag_name(cur("x.y>"), false).unwrap_err();
        assert_eq!(
            err.message,
            "Invalid custom element name (should include a dash)"
        );
        assert_eq!(err.position, 3);
    }

    #[test]
    fn test_tag_name_forbidden_list() {
        let err = tag_name(cur("annotation-xml>"), false).unwrap_err();
        assert_eq!(err.message, "Forbidden custom element name");
        let err = tag_name(cur("font-face-src>"), false).unwrap_err();
        assert_eq!(err.message, "Forbidden custom element name");
    }

    #[test]
    fn test_tag_name_rejects_non_letter_start() {
        assert!(tag_name(cur("1abc>"), false).is_err());
        assert!(tag_name(cur(">"), false).is_err());
    }

    #[test]
    fn test_attribute_forms() {
        let (attr, _) = attribute(cur("class='a b' ")).unwrap();
        assert_eq!((attr.name.as_str(), attr.value.as_str()), ("class", "a b"));

        let (attr, _) = attribute(cur("class=\"a'b\">")).unwrap();
        assert_eq!(attr.value, "a'b");

        let (attr, after) = attribute(cur("type=text>")).unwrap();
        assert_eq!(attr.value, "text");
        assert_eq!(after.rest(), ">");

        let (attr, _) = attribute(cur("checked>")).unwrap();
        assert_eq!((attr.name.as_str(), attr.value.as_str()), ("checked", ""));
    }

    #[test]
    fn test_attribute_unquoted_swallows_trailing_slash() {
        let (attr, after) = attribute(cur("type=text/>")).unwrap();
        assert_eq!(attr.value, "text/");
        assert_eq!(after.rest(), ">");
    }

    #[test]
    fn test_attribute_spaced_equals() {
        let (attr, after) = attribute(cur("a = b c")).unwrap();
        assert_eq!((attr.name.as_str(), attr.value.as_str()), ("a", "b"));
        assert_eq!(after.rest(), "c");
    }

    #[test]
    fn test_attribute_name_casing_and_colons_kept() {
        let (attr, _) = attribute(cur("on:click=\"h\"")).unwrap();
        assert_eq!(attr.name, "on:click");
        let (attr, _) = attribute(cur("prop:ariaChecked=\"x\"")).unwrap();
        assert_eq!(attr.name, "prop:ariaChecked");
    }

    #[test]
    fn test_attribute_missing_value_after_equals() {
        let err = attribute(cur("a=>")).unwrap_err();
        assert_eq!(err.message, "Expected a valid attribute value");
        assert_eq!(err.position, 2);
    }

    #[test]
    fn test_attribute_name_rejections() {
        assert!(attribute(cur("=x")).is_err());
        assert!(attribute(cur(">")).is_err());
        assert!(attribute(cur("/")).is_err());
    }

    #[test]
    fn test_raw_text_body_terminators() {
        let (body, after) = raw_text_body(cur("a</s a</script>"), "script");
        assert_eq!(body, "a</s a");
        assert_eq!(after.rest(), "</script>");

        // Case-insensitive, and `/` or whitespace after the name counts.
        let (body, _) = raw_text_body(cur("x</SCRIPT >"), "script");
        assert_eq!(body, "x");
        let (body, _) = raw_text_body(cur("x</script/>"), "script");
        assert_eq!(body, "x");

        // `</scriptx` does not terminate.
        let (body, _) = raw_text_body(cur("x</scriptx</script>"), "script");
        assert_eq!(body, "x</scriptx");
    }

    #[test]
    fn test_raw_text_body_runs_to_eof_without_terminator() {
        let (body, after) = raw_text_body(cur("var x = 1;"), "script");
        assert_eq!(body, "var x = 1;");
        assert!(after.at_end());
    }
}
