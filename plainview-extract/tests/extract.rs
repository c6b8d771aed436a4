use plainview_extract::{EXCLUDED_TAGS, TextNode, extract, text_nodes, visible_text};

fn node(parent: &str, text: &str) -> TextNode {
    TextNode {
        text: text.into(),
        parent_tag: parent.into(),
    }
}

#[test]
fn empty_input_yields_empty_string() {
    assert_eq!(extract(&[]), "");
}

#[test]
fn script_text_is_dropped() {
    let nodes = [node("script", "X"), node("p", "Y")];
    assert_eq!(extract(&nodes), "Y ");
}

#[test]
fn every_excluded_tag_is_dropped() {
    for tag in EXCLUDED_TAGS {
        let nodes = [node(tag, "hidden")];
        assert_eq!(extract(&nodes), "", "tag {tag} should be excluded");
    }
}

#[test]
fn lone_newline_is_dropped() {
    assert_eq!(extract(&[node("p", "\n")]), "");
}

#[test]
fn longer_whitespace_is_not_special() {
    // only the exact single-character "\n" is filtered
    assert_eq!(extract(&[node("p", "\n\n")]), "\n\n ");
    assert_eq!(extract(&[node("p", " ")]), "  ");
}

#[test]
fn text_is_followed_by_single_space() {
    let out = extract(&[node("p", "Hello")]);
    assert_eq!(out, "Hello ");
    assert!(out.contains("Hello "));
}

#[test]
fn order_is_preserved() {
    let nodes = [node("p", "A"), node("p", "B"), node("p", "C")];
    assert_eq!(extract(&nodes), "A B C ");
}

#[test]
fn internal_whitespace_is_untouched() {
    assert_eq!(extract(&[node("p", "A  B")]), "A  B ");
}

#[test]
fn document_root_sentinel_is_excluded() {
    assert_eq!(extract(&[node("[document]", "stray")]), "");
}

#[test]
fn harvest_reports_parent_tags() {
    let html = "<html><head><script>var x;</script></head><body><p>Hello</p></body></html>";
    let nodes = text_nodes(html);

    let script = nodes.iter().find(|n| n.text == "var x;").unwrap();
    assert_eq!(script.parent_tag, "script");

    let para = nodes.iter().find(|n| n.text == "Hello").unwrap();
    assert_eq!(para.parent_tag, "p");
}

#[test]
fn harvest_walks_in_document_order() {
    let nodes = text_nodes("<p>A<b>B</b>C</p>");
    let texts: Vec<&str> = nodes
        .iter()
        .filter(|n| !n.text.trim().is_empty())
        .map(|n| n.text.as_str())
        .collect();
    assert_eq!(texts, ["A", "B", "C"]);
}

#[test]
fn harvest_keeps_nested_parent_not_ancestor() {
    // only the immediate parent decides exclusion
    let nodes = text_nodes("<p>A<b>B</b>C</p>");
    let bold = nodes.iter().find(|n| n.text == "B").unwrap();
    assert_eq!(bold.parent_tag, "b");
}

#[test]
fn harvest_preserves_whitespace_only_nodes() {
    // the two spaces between the paragraphs land in body, untouched
    let nodes = text_nodes("<p>A</p>  <p>B</p>");
    let ws = nodes.iter().find(|n| n.text == "  ").unwrap();
    assert_eq!(ws.parent_tag, "body");
    assert_eq!(extract(&nodes), "A    B ");
}

#[test]
fn harvest_lowercases_parent_tags() {
    let nodes = text_nodes("<P>Hello</P>");
    let hello = nodes.iter().find(|n| n.text == "Hello").unwrap();
    assert_eq!(hello.parent_tag, "p");

    // svg element names keep their case in the tree; harvesting folds them
    let nodes = text_nodes("<svg><clipPath>t</clipPath></svg>");
    let t = nodes.iter().find(|n| n.text == "t").unwrap();
    assert_eq!(t.parent_tag, "clippath");
}

#[test]
fn end_to_end_visible_text() {
    let html = concat!(
        "<html><head><meta charset=\"utf-8\"><title>T</title>",
        "<script>var x;</script></head>",
        "<body><header>site nav</header><noscript>enable js</noscript>",
        "<p>First.</p><p>Second.</p></body></html>",
    );
    // title is not in the exclusion set, so "T" survives
    assert_eq!(visible_text(html), "T First. Second. ");
}
