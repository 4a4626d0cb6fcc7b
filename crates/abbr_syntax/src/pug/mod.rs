//! Pug output.
//!
//! ```text
//! #header
//! 	ul.nav
//! 		li.nav-item(title="test", hidden) Item
//! 		| some text
//! ```


use abbr_fmt::{
    compose, compute_indented_formats, is_multiline, split_lines, FieldRenderer, Format,
    OutputNode, Visitor,
};
use abbr_ir::{AbbrTree, Node, Profile};

use crate::indented::{has_text, map_lines, place_text, tag_name, Attributes};
use crate::RenderOptions;

/// Render `tree` as Pug.
#[tracing::instrument(level = "debug", skip_all, fields(nodes = tree.len()))]
pub fn render(tree: &AbbrTree, profile: &Profile, options: &RenderOptions<'_>) -> String {
    let formats = compute_indented_formats(tree, profile);
    let mut fields = options.field_renderer(profile);
    compose(tree, &formats, &mut fields, &mut PugVisitor { profile })
}

struct PugVisitor<'p> {
    profile: &'p Profile,
}

impl Visitor for PugVisitor<'_> {
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
            let value = node.value().unwrap_or_default();
            let piped = !out.format.before_text.is_empty();
            let text = text_lines(value, piped);
            out.text = Some(fields.render(Some(&text)));
            return Some(out);
        }

        if node.name().is_some() {
            let attrs = Attributes::collect(node, self.profile, fields);
            let secondary = attrs.join_secondary(self.profile, ", ", str::to_string);

            let mut open = tag_name(node, self.profile, &attrs).unwrap_or_default();
            open.push_str(&attrs.primary);
            if !secondary.is_empty() {
                open.push('(');
                open.push_str(&secondary);
                open.push(')');
            }
            out.open = Some(open);
        }

        if has_text(node) {
            let text = match node.value() {
                Some(value) if is_multiline(value) => {
                    map_lines(value, self.profile, |_, line| format!("| {line}"))
                }
                value => value.unwrap_or_default().to_string(),
            };
            out.text = Some(fields.render(Some(&text)));
        }

        Some(out)
    }
}

/// Text-only node lines, each piped except a leading line that opens the
/// output.
fn text_lines(value: &str, piped: bool) -> String {
    split_lines(value)
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if piped || i > 0 {
                format!("| {line}")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
