//! Golden tests for Pug output.

use abbr_ir::{AbbrTree, FieldStyle, NodeSpec, Profile, ProfileOptions};
use abbr_syntax::{init_tracing, render, RenderOptions, Syntax};
use pretty_assertions::assert_eq;

fn el(name: &str) -> NodeSpec {
    NodeSpec::element(name)
}

fn pug_with(specs: impl IntoIterator<Item = NodeSpec>, profile: &Profile) -> String {
    init_tracing();
    let tree = AbbrTree::from_specs(specs);
    render(&tree, Syntax::Pug, profile, &RenderOptions::default())
}

fn pug(specs: impl IntoIterator<Item = NodeSpec>) -> String {
    pug_with(specs, &Profile::default())
}

fn tabstops() -> Profile {
    Profile::new(ProfileOptions::default().with_field_style(FieldStyle::Tabstop))
}

#[test]
fn nested_navigation() {
    // div#header>ul.nav>li[title=test].nav-item*2
    let li = el("li").attr("title", "test").attr("class", "nav-item");
    let tree = el("div")
        .attr("id", "header")
        .child(el("ul").attr("class", "nav").children(li.repeat(2)));
    assert_eq!(
        pug([tree]),
        "#header\n\tul.nav\n\t\tli.nav-item(title=\"test\")\n\t\tli.nav-item(title=\"test\")"
    );
}

#[test]
fn primary_and_secondary_attributes() {
    let div = el("div")
        .attr("data-n1", "v1")
        .attr("id", "foo")
        .attr("title", "test")
        .attr("class", "bar")
        .attr("data-n2", "v2");
    assert_eq!(
        pug([div]),
        "#foo.bar(data-n1=\"v1\", title=\"test\", data-n2=\"v2\")"
    );
}

#[test]
fn boolean_and_empty_attributes() {
    // input[disabled. foo title=test]
    let input = el("input")
        .boolean_attr("disabled")
        .empty_attr("foo")
        .attr("title", "test");
    assert_eq!(pug([input]), "input(disabled, foo=\"\", title=\"test\")");
}

#[test]
fn text() {
    assert_eq!(pug([NodeSpec::text("Text 1")]), "Text 1");
    assert_eq!(pug([el("span").value("Text 1")]), "span Text 1");
    assert_eq!(
        pug([el("span").value("Text 1").child(el("b").value("Text 2"))]),
        "span Text 1\n\tb Text 2"
    );
}

#[test]
fn multiline_text() {
    let span = el("span")
        .value("Text 1\nText 2")
        .child(el("b").value("Text 3"));
    assert_eq!(
        pug([span.clone()]),
        "span\n\t| Text 1\n\t| Text 2\n\tb Text 3"
    );
    assert_eq!(
        pug([el("div").child(span)]),
        "div\n\tspan\n\t\t| Text 1\n\t\t| Text 2\n\t\tb Text 3"
    );
}

#[test]
fn tabstops_in_pug() {
    assert_eq!(
        pug_with([el("a").empty_attr("href")], &tabstops()),
        "a(href=\"${1}\")${2}"
    );
    assert_eq!(
        pug_with([el("ul").children(el("li").repeat(2))], &tabstops()),
        "ul\n\tli${1}\n\tli${2}"
    );
    assert_eq!(
        pug_with([el("div").child(el("img").empty_attr("src").self_closing())], &tabstops()),
        "div\n\timg(src=\"${1}\")"
    );
}

#[test]
fn profile_formatting_switches_are_ignored() {
    let profile = Profile::new(ProfileOptions::default().with_format(false));
    assert_eq!(
        pug_with([el("ul").children(el("li").repeat(2))], &profile),
        "ul\n\tli\n\tli"
    );
}
