use super::*;
use abbr_ir::{NodeSpec, ProfileOptions};
use pretty_assertions::assert_eq;

fn slim(tree: &AbbrTree, profile: &Profile, options: &RenderOptions<'_>) -> String {
    render(tree, profile, options)
}

#[test]
fn nesting() {
    let tree = AbbrTree::from_specs([NodeSpec::element("a").child(NodeSpec::element("b"))]);
    assert_eq!(slim(&tree, &Profile::default(), &RenderOptions::default()), "a\n\tb");
}

#[test]
fn bare_attributes_by_default() {
    let tree = AbbrTree::from_specs([NodeSpec::element("div")
        .attr("class", "row")
        .attr("title", "x")
        .boolean_attr("hidden")]);
    assert_eq!(
        slim(&tree, &Profile::default(), &RenderOptions::default()),
        ".row title=\"x\" hidden=true"
    );
}

#[test]
fn wrapped_attributes() {
    let tree = AbbrTree::from_specs([NodeSpec::element("a").attr("href", "/").boolean_attr("download")]);
    let cases = [
        (AttributeWrap::Round, "a(href=\"/\" download)"),
        (AttributeWrap::Curly, "a{href=\"/\" download}"),
        (AttributeWrap::Square, "a[href=\"/\" download]"),
    ];
    for (wrap, expected) in cases {
        let options = RenderOptions::default().with_attribute_wrap(wrap);
        assert_eq!(slim(&tree, &Profile::default(), &options), expected);
    }
}

#[test]
fn multiline_text_starts_with_pipe() {
    let tree = AbbrTree::from_specs([NodeSpec::element("p").value("a\nb")]);
    assert_eq!(
        slim(&tree, &Profile::default(), &RenderOptions::default()),
        "p\n\t| a\n\t  b"
    );
}

#[test]
fn single_inline_child_nests_without_break_threshold() {
    let tree = AbbrTree::from_specs([NodeSpec::element("ul")
        .child(NodeSpec::element("li").child(NodeSpec::element("a")))]);
    let no_break = Profile::new(ProfileOptions::default().with_inline_break(0));

    assert_eq!(
        slim(&tree, &no_break, &RenderOptions::default()),
        "ul\n\tli: a"
    );
    assert_eq!(
        slim(&tree, &Profile::default(), &RenderOptions::default()),
        "ul\n\tli\n\t\ta"
    );
}

#[test]
fn text_only_nodes_are_piped() {
    let tree = AbbrTree::from_specs([NodeSpec::element("p").child(NodeSpec::text("hi"))]);
    assert_eq!(
        slim(&tree, &Profile::default(), &RenderOptions::default()),
        "p\n\t| hi"
    );
}

#[test]
fn self_closing_marker() {
    let tree = AbbrTree::from_specs([NodeSpec::element("br").self_closing()]);
    assert_eq!(slim(&tree, &Profile::default(), &RenderOptions::default()), "br/");
}
