//! Haml output.
//!
//! ```text
//! #header
//! 	%ul.nav
//! 		%li.nav-item(title="test" hidden) Item
//! ```


use abbr_fmt::{
    compose, compute_indented_formats, is_multiline, split_lines, FieldRenderer, Format,
    OutputNode, Visitor,
};
use abbr_ir::{AbbrTree, Node, Profile};

use crate::indented::{has_text, map_lines, place_text, tag_name, Attributes};
use crate::{AttributeWrap, RenderOptions};

/// Render `tree` as Haml.
#[tracing::instrument(level = "debug", skip_all, fields(nodes = tree.len()))]
pub fn render(tree: &AbbrTree, profile: &Profile, options: &RenderOptions<'_>) -> String {
    let formats = compute_indented_formats(tree, profile);
    let mut fields = options.field_renderer(profile);
    let mut visitor = HamlVisitor {
        profile,
        wrap: options.attribute_wrap.unwrap_or(AttributeWrap::Round),
    };
    compose(tree, &formats, &mut fields, &mut visitor)
}

struct HamlVisitor<'p> {
    profile: &'p Profile,
    wrap: AttributeWrap,
}

impl Visitor for HamlVisitor<'_> {
    fn visit(
        &mut self,
        node: Node<'_>,
        mut format: Format,
        fields: &mut FieldRenderer<'_>,
    ) -> Option<OutputNode> {
        place_text(&mut format, node, self.profile);
        let mut out = OutputNode::new(format);
        if out.fill_pseudo_snippet(node, fields) {
            return Some(out);
        }

        if node.is_text_only() {
            out.text = Some(fields.render(node.value()));
            return Some(out);
        }

        if node.name().is_some() {
            let attrs = Attributes::collect(node, self.profile, fields);
            let secondary = if self.wrap == AttributeWrap::Bare {
                attrs.join_secondary(self.profile, " ", |name| format!("{name}=true"))
            } else {
                attrs.join_secondary(self.profile, " ", str::to_string)
            };

            let mut open = tag_name(node, self.profile, &attrs)
                .map(|name| format!("%{name}"))
                .unwrap_or_default();
            open.push_str(&attrs.primary);
            if !secondary.is_empty() {
                open.push_str(&self.wrap.apply(&secondary));
            }
            if node.is_self_closing() {
                open.push('/');
            }
            out.open = Some(open);
        }

        if has_text(node) {
            let text = fields.render(Some(node.value().unwrap_or_default()));
            out.text = Some(if is_multiline(&text) {
                multiline_value(&text, self.profile)
            } else {
                text
            });
        }

        Some(out)
    }
}

/// Multi-line text: every line padded to the longest one and terminated
/// with ` |`. Takes text with fields already rendered.
fn multiline_value(value: &str, profile: &Profile) -> String {
    let width = split_lines(value)
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or_default();
    map_lines(value, profile, |_, line| format!("{line:<width$} |"))
}
