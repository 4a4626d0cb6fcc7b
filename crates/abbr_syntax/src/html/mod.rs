//! HTML output.


use abbr_fmt::{compose, compute_formats, FieldRenderer, Format, OutputNode, Visitor};
use abbr_ir::{AbbrTree, Node, Profile};

use crate::RenderOptions;

/// Render `tree` as HTML.
#[tracing::instrument(level = "debug", skip_all, fields(nodes = tree.len()))]
pub fn render(tree: &AbbrTree, profile: &Profile, options: &RenderOptions<'_>) -> String {
    let formats = compute_formats(tree, profile);
    let mut fields = options.field_renderer(profile);
    compose(tree, &formats, &mut fields, &mut HtmlVisitor { profile })
}

struct HtmlVisitor<'p> {
    profile: &'p Profile,
}

impl Visitor for HtmlVisitor<'_> {
    fn visit(
        &mut self,
        node: Node<'_>,
        format: Format,
        fields: &mut FieldRenderer<'_>,
    ) -> Option<OutputNode> {
        let mut out = OutputNode::new(format);
        if out.fill_pseudo_snippet(node, fields) {
            return Some(out);
        }

        if let Some(name) = node.name() {
            let name = self.profile.name(name);
            let attrs: Vec<String> = node
                .attributes()
                .iter()
                .filter_map(|attr| self.profile.attribute(attr, |value| fields.render(value)))
                .collect();

            let mut open = format!("<{name}");
            for attr in &attrs {
                open.push(' ');
                open.push_str(attr);
            }
            if node.is_self_closing() {
                open.push_str(self.profile.self_close());
            }
            open.push('>');
            out.open = Some(open);

            if !node.is_self_closing() {
                out.close = Some(format!("</{name}>"));
            }
        }

        // no caret field inside containers or void elements
        if node.value().is_some() || !(node.has_children() || node.is_self_closing()) {
            out.text = Some(fields.render(node.value()));
        }

        Some(out)
    }
}
