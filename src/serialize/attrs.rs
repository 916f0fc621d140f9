// Attribute rendering.
//
// Values were captured verbatim by the parser, so no escaping happens here;
// quoting just picks whichever quote character the value does not contain.

use crate::node::Attribute;

/// Attributes whose presence alone carries the meaning. They collapse to
/// the bare name on output (`checked="checked"` serializes as `checked`).
pub(crate) const BOOLEAN_ATTRIBUTES: &[&str] = &[
    "allowfullscreen",
    "async",
    "autofocus",
    "autoplay",
    "checked",
    "controls",
    "default",
    "defer",
    "disabled",
    "formnovalidate",
    "hidden",
    "inert",
    "ismap",
    "itemscope",
    "loop",
    "multiple",
    "muted",
    "nomodule",
    "novalidate",
    "open",
    "readonly",
    "required",
    "reversed",
    "selected",
];

fn is_boolean(name: &str) -> bool {
    BOOLEAN_ATTRIBUTES
        .iter()
        .any(|b| b.eq_ignore_ascii_case(name))
}

/// Append ` name`, ` name="value"` or ` name='value'` to `out`.
pub(crate) fn write_attribute(out: &mut String, attribute: &Attribute) {
    out.push(' ');
    out.push_str(&attribute.name);
    if is_boolean(&attribute.name) {
        return;
    }
    // Double quotes unless the value itself contains one.
    let quote = if attribute.value.contains('"') { '\'' } else { '"' };
    out.push('=');
    out.push(quote);
    out.push_str(&attribute.value);
    out.push(quote);
}
