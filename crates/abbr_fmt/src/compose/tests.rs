#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use super::*;
use crate::decision::compute_formats;
use abbr_ir::{FieldStyle, NodeSpec, Profile, ProfileOptions};
use pretty_assertions::assert_eq;

/// Bare-bones tag writer: `<name>text</name>`, text nodes as-is.
struct Tags {
    skip: Option<&'static str>,
    visited: Vec<String>,
}

impl Tags {
    fn new() -> Self {
        Tags {
            skip: None,
            visited: Vec::new(),
        }
    }
}

impl Visitor for Tags {
    fn visit(
        &mut self,
        node: Node<'_>,
        format: Format,
        fields: &mut FieldRenderer<'_>,
    ) -> Option<OutputNode> {
        let name = node.name().unwrap_or_default();
        self.visited.push(name.to_string());
        if self.skip == Some(name) {
            return None;
        }

        let mut out = OutputNode::new(format);
        if out.fill_pseudo_snippet(node, fields) {
            return Some(out);
        }

        if node.is_text_only() {
            out.text = Some(fields.render(node.value()));
        } else {
            out.open = Some(format!("<{name}>"));
            out.close = Some(format!("</{name}>"));
            if node.value().is_some() {
                out.text = Some(fields.render(node.value()));
            }
        }
        Some(out)
    }
}

fn run(tree: &AbbrTree, profile: &Profile, visitor: &mut Tags) -> String {
    let formats = compute_formats(tree, profile);
    let mut fields = FieldRenderer::new(profile);
    compose(tree, &formats, &mut fields, visitor)
}

fn el(name: &str) -> NodeSpec {
    NodeSpec::element(name)
}

#[test]
fn nested_blocks() {
    let tree = AbbrTree::from_specs([el("div").children(el("p").repeat(2))]);
    let out = run(&tree, &Profile::default(), &mut Tags::new());
    assert_eq!(out, "<div>\n\t<p></p>\n\t<p></p>\n</div>");
}

#[test]
fn groups_are_not_visited() {
    let tree = AbbrTree::from_specs([el("div").child(NodeSpec::group().children(el("p").repeat(2)))]);
    let mut tags = Tags::new();
    let out = run(&tree, &Profile::default(), &mut tags);

    assert_eq!(out, "<div>\n\t<p></p>\n\t<p></p>\n</div>");
    assert_eq!(tags.visited, vec!["div", "p", "p"]);
}

#[test]
fn omitted_node_drops_subtree() {
    let tree = AbbrTree::from_specs([
        el("div").child(el("ul").child(el("li"))),
        el("p"),
    ]);
    let mut tags = Tags::new();
    tags.skip = Some("ul");
    let out = run(&tree, &Profile::default(), &mut tags);

    assert_eq!(out, "<div>\n</div>\n<p></p>");
    assert_eq!(tags.visited, vec!["div", "ul", "p"]);
}

#[test]
fn pseudo_snippet_wraps_children() {
    let tree = AbbrTree::from_specs([NodeSpec::text("[${0}]").child(el("i"))]);
    let profile = Profile::new(ProfileOptions::default().with_format(false));
    let out = run(&tree, &profile, &mut Tags::new());
    assert_eq!(out, "[<i></i>]");
}

#[test]
fn fields_are_numbered_in_document_order() {
    let tree = AbbrTree::from_specs([el("p").value("${1:a}").child(el("i").value("${1:b}"))]);
    let profile = Profile::new(
        ProfileOptions::default()
            .with_format(false)
            .with_field_style(FieldStyle::Tabstop),
    );
    let out = run(&tree, &profile, &mut Tags::new());
    // the parent advances the counter to 3, so local `${1}` in the child is 4
    assert_eq!(out, "<p>${2:a}<i>${4:b}</i></p>");
}

#[test]
fn missing_formats_compose_unformatted() {
    let tree = AbbrTree::from_specs([el("div").child(el("p"))]);
    let formats = FormatMap::default();
    let mut fields = FieldRenderer::new(&FieldStyle::Plain);
    let out = compose(&tree, &formats, &mut fields, &mut Tags::new());
    assert_eq!(out, "<div><p></p></div>");
}

#[test]
fn empty_tree_composes_to_empty_string() {
    let tree = AbbrTree::new();
    let out = run(&tree, &Profile::default(), &mut Tags::new());
    assert_eq!(out, "");
}
