// End-tag-omission scenarios: one per row of the follow-set table.
//
// Each case parses source with omitted end tags and checks both the tree
// shape and the expanded serialization.

use pretty_assertions::assert_eq;

mod common;
use common::{element, reserialized};

/// Tag names of an element's direct element children.
fn child_tags(input: &str) -> Vec<String> {
    element(input)
        .children
        .iter()
        .filter_map(|n| n.as_element().map(|e| e.tag_name.clone()))
        .collect()
}

#[test]
fn li_closed_by_li_and_list_end() {
    assert_eq!(child_tags("<ul><li>A<li>B</ul>"), ["li", "li"]);
    assert_eq!(
        reserialized("<ul><li>A<li>B</ul>"),
        "<ul><li>A</li><li>B</li></ul>"
    );
    assert_eq!(reserialized("<ol><li>A</ol>"), "<ol><li>A</li></ol>");
    assert_eq!(reserialized("<menu><li>A</menu>"), "<menu><li>A</li></menu>");
}

#[test]
fn li_not_closed_by_link() {
    // `<link>` must not trigger the `li` follow set by name prefix.
    assert_eq!(child_tags("<li><link></li>"), ["link"]);
}

#[test]
fn explicit_end_tags_still_accepted() {
    assert_eq!(
        reserialized("<ul><li>A</li><li>B</li></ul>"),
        "<ul><li>A</li><li>B</li></ul>"
    );
}

#[test]
fn dt_closed_by_dd_and_dd_by_list_end() {
    assert_eq!(child_tags("<dl><dt>T<dd>D</dl>"), ["dt", "dd"]);
    assert_eq!(
        reserialized("<dl><dt>T<dd>D</dl>"),
        "<dl><dt>T</dt><dd>D</dd></dl>"
    );
    // dd also closes before </div>.
    assert_eq!(
        reserialized("<div><dd>D</div>"),
        "<div><dd>D</dd></div>"
    );
}

#[test]
fn p_closed_by_block_start_and_block_end() {
    assert_eq!(child_tags("<div><p>a<p>b</div>"), ["p", "p"]);
    assert_eq!(
        reserialized("<div><p>a<p>b</div>"),
        "<div><p>a</p><p>b</p></div>"
    );
    // A block start tag from the open set closes the paragraph.
    assert_eq!(child_tags("<section><p>a<table></table></section>"), ["p", "table"]);
    assert_eq!(child_tags("<section><p>a<h2>t</h2></section>"), ["p", "h2"]);
    // A phrasing element does not.
    assert_eq!(child_tags("<div><p>a<span>b</span></div>"), ["p"]);
}

#[test]
fn head_closed_by_body() {
    let html = element("<html><head><title>t</title><body>x</body></html>");
    assert_eq!(
        reserialized("<html><head><title>t</title><body>x</body></html>"),
        "<html><head><title>t</title></head><body>x</body></html>"
    );
    let head = html.children[0].as_element().unwrap();
    assert_eq!(head.tag_name, "head");
    assert_eq!(head.children.len(), 1);
}

#[test]
fn body_closed_by_html_end_or_eof() {
    assert_eq!(
        reserialized("<html><body>x</html>"),
        "<html><body>x</body></html>"
    );
    assert_eq!(reserialized("<body>x"), "<body>x</body>");
}

#[test]
fn html_closed_at_eof() {
    assert_eq!(
        reserialized("<html><body></body>"),
        "<html><body></body></html>"
    );
    assert_eq!(reserialized("<html><body>x"), "<html><body>x</body></html>");
}

#[test]
fn caption_closed_by_table_structure() {
    assert_eq!(
        reserialized("<table><caption>t<tr><td>x</table>"),
        "<table><caption>t</caption><tr><td>x</td></tr></table>"
    );
}

#[test]
fn colgroup_closed_by_row_content() {
    assert_eq!(
        reserialized("<table><colgroup><col><tr><td>x</table>"),
        "<table><colgroup><col></colgroup><tr><td>x</td></tr></table>"
    );
}

#[test]
fn options_closed_by_next_option_or_select_end() {
    assert_eq!(
        reserialized("<select><option>A<option>B</select>"),
        "<select><option>A</option><option>B</option></select>"
    );
    // hr is in the option follow set.
    assert_eq!(
        reserialized("<select><option>A<hr><option>B</select>"),
        "<select><option>A</option><hr><option>B</option></select>"
    );
}

#[test]
fn optgroup_closed_by_next_optgroup_or_select_end() {
    assert_eq!(
        reserialized("<select><optgroup><option>A<optgroup><option>B</select>"),
        "<select><optgroup><option>A</option></optgroup>\
         <optgroup><option>B</option></optgroup></select>"
    );
}

#[test]
fn ruby_annotations() {
    assert_eq!(
        reserialized("<ruby>kanji<rt>reading<rp>(</rp></ruby>"),
        "<ruby>kanji<rt>reading</rt><rp>(</rp></ruby>"
    );
    assert_eq!(
        reserialized("<ruby>k<rp>(<rt>r</ruby>"),
        "<ruby>k<rp>(</rp><rt>r</rt></ruby>"
    );
}

#[test]
fn table_sections() {
    assert_eq!(
        reserialized("<table><thead><tr><th>H<tbody><tr><td>a<td>b</table>"),
        "<table><thead><tr><th>H</th></tr></thead>\
         <tbody><tr><td>a</td><td>b</td></tr></tbody></table>"
    );
    // tfoot closes at </table>.
    assert_eq!(
        reserialized("<table><tfoot><tr><td>x</table>"),
        "<table><tfoot><tr><td>x</td></tr></tfoot></table>"
    );
    // tbody closed by a tfoot start (the row before it closed explicitly).
    assert_eq!(
        reserialized("<table><tbody><tr><td>a</td></tr><tfoot><tr><td>b</table>"),
        "<table><tbody><tr><td>a</td></tr></tbody>\
         <tfoot><tr><td>b</td></tr></tfoot></table>"
    );
}

#[test]
fn rows_and_cells() {
    assert_eq!(
        reserialized("<table><tr><td>a<td>b<tr><td>c</table>"),
        "<table><tr><td>a</td><td>b</td></tr><tr><td>c</td></tr></table>"
    );
    // th closed by a td start.
    assert_eq!(
        reserialized("<table><tr><th>H<td>d</table>"),
        "<table><tr><th>H</th><td>d</td></tr></table>"
    );
}

#[test]
fn unclosed_element_without_eof_rule_still_fails() {
    // li has follow sets but no end-of-input closure.
    let err = htmltree::parse_element("<li>A").unwrap_err();
    assert_eq!(err.message, "Expected a '</li>' end tag");
    assert_eq!(err.position, 5);
}
