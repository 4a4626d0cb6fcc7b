//! Slim output.
//!
//! ```text
//! #header
//! 	ul.nav
//! 		li.nav-item title="test" hidden=true Item
//! ```

#[cfg(test)]
mod tests;

use abbr_fmt::{
    compose, compute_indented_formats, is_multiline, split_lines, FieldRenderer, Format,
    OutputNode, Visitor,
};
use abbr_ir::{AbbrTree, Node, Profile};

use crate::indented::{has_text, map_lines, place_text, tag_name, Attributes};
use crate::{AttributeWrap, RenderOptions};

/// Render `tree` as Slim.
#[tracing::instrument(level = "debug", skip_all, fields(nodes = tree.len()))]
pub fn render(tree: &AbbrTree, profile: &Profile, options: &RenderOptions<'_>) -> String {
    let formats = compute_indented_formats(tree, profile);
    let mut fields = options.field_renderer(profile);
    let mut visitor = SlimVisitor {
        profile,
        wrap: options.attribute_wrap.unwrap_or(AttributeWrap::Bare),
    };
    compose(tree, &formats, &mut fields, &mut visitor)
}

struct SlimVisitor<'p> {
    profile: &'p Profile,
    wrap: AttributeWrap,
}

impl SlimVisitor<'_> {
    /// `ul>li>a` with `inline_break = 0` nests the single inline child on
    /// its parent's line: `li: a`.
    fn nests_inline(&self, node: Node<'_>) -> bool {
        if self.profile.inline_break() != 0 {
            return false;
        }
        if !node.is_text_only() && !self.profile.is_inline(node) {
            return false;
        }
        node.parent().is_some_and(|parent| {
            !parent.is_root() && parent.value().is_none() && parent.child_count() == 1
        })
    }
}

impl Visitor for SlimVisitor<'_> {
    fn visit(
        &mut self,
        node: Node<'_>,
        mut format: Format,
        fields: &mut FieldRenderer<'_>,
    ) -> Option<OutputNode> {
        let nested = self.nests_inline(node);
        if nested {
            tracing::trace!(id = %node.id(), "nested inline");
            format.before_open = ": ".to_string();
            if node.is_text_only() {
                format.before_text.clone_from(&format.before_open);
            }
        }
        place_text(&mut format, node, self.profile);

        let mut out = OutputNode::new(format);
        if out.fill_pseudo_snippet(node, fields) {
            return Some(out);
        }

        if node.is_text_only() {
            let value = node.value().unwrap_or_default();
            let text = if nested || out.format.before_text.is_empty() {
                value.to_string()
            } else {
                text_lines(value)
            };
            out.text = Some(fields.render(Some(&text)));
            return Some(out);
        }

        if node.name().is_some() {
            let attrs = Attributes::collect(node, self.profile, fields);
            let secondary = if self.wrap == AttributeWrap::Bare {
                attrs.join_secondary(self.profile, " ", |name| format!("{name}=true"))
            } else {
                attrs.join_secondary(self.profile, " ", str::to_string)
            };

            let mut open = tag_name(node, self.profile, &attrs).unwrap_or_default();
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
            let text = match node.value() {
                Some(value) if is_multiline(value) => map_lines(value, self.profile, |i, line| {
                    let marker = if i == 0 { '|' } else { ' ' };
                    format!("{marker} {line}")
                }),
                value => value.unwrap_or_default().to_string(),
            };
            out.text = Some(fields.render(Some(&text)));
        }

        Some(out)
    }
}

/// Text-only node on its own line: `| text`, continuation lines aligned
/// under the first.
fn text_lines(value: &str) -> String {
    split_lines(value)
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let marker = if i == 0 { '|' } else { ' ' };
            format!("{marker} {line}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
