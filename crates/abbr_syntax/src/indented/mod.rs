//! Shared rules for indent-based syntaxes (Haml, Pug, Slim).
//!
//! `id` and `class` become primary attributes (`#id.a.b`) written right after
//! the tag name; everything else is secondary and each syntax decides how to
//! wrap it. Element text follows the tag on the same line, or moves one
//! level deeper when it spans several lines.


use abbr_fmt::{is_multiline, split_lines, FieldRenderer, Format};
use abbr_ir::{Node, Profile};

/// Non-`id`/`class` attribute, value already rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SecondaryAttribute {
    pub name: String,
    pub value: String,
    pub boolean: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct Attributes {
    /// `#id.class` run.
    pub primary: String,
    pub secondary: Vec<SecondaryAttribute>,
}

impl Attributes {
    /// Split and render the attributes of `node`.
    ///
    /// Values go through the field renderer in attribute order; boolean
    /// attributes without a value do not consume a field.
    pub fn collect(node: Node<'_>, profile: &Profile, fields: &mut FieldRenderer<'_>) -> Self {
        let mut attrs = Attributes::default();

        for attr in node.attributes() {
            if attr.is_implied() && attr.value.is_none() {
                continue;
            }

            let name = profile.attribute_name(&attr.name);
            if name.eq_ignore_ascii_case("id") {
                attrs.primary.push('#');
                attrs.primary.push_str(&fields.render(attr.value.as_deref()));
            } else if name.eq_ignore_ascii_case("class") {
                let value = fields.render(attr.value.as_deref());
                for class in value.split_whitespace() {
                    attrs.primary.push('.');
                    attrs.primary.push_str(class);
                }
                if value.trim().is_empty() {
                    attrs.primary.push('.');
                }
            } else if attr.value.is_none() && profile.is_boolean_attribute(attr) {
                attrs.secondary.push(SecondaryAttribute {
                    name,
                    value: String::new(),
                    boolean: true,
                });
            } else {
                attrs.secondary.push(SecondaryAttribute {
                    name,
                    value: fields.render(attr.value.as_deref()),
                    boolean: false,
                });
            }
        }

        attrs
    }

    /// Secondary attributes as `name="value"` (or bare `name` for booleans)
    /// joined by `separator`.
    pub fn join_secondary(
        &self,
        profile: &Profile,
        separator: &str,
        boolean: impl Fn(&str) -> String,
    ) -> String {
        self.secondary
            .iter()
            .map(|attr| {
                if attr.boolean {
                    boolean(&attr.name)
                } else {
                    format!("{}={}", attr.name, profile.quote(&attr.value))
                }
            })
            .collect::<Vec<_>>()
            .join(separator)
    }
}

/// Tag name as written, or `None` when an implicit `div` can be dropped in
/// favour of its primary attributes.
pub(crate) fn tag_name(node: Node<'_>, profile: &Profile, attrs: &Attributes) -> Option<String> {
    let name = profile.name(node.name()?);
    if !attrs.primary.is_empty() && name.eq_ignore_ascii_case("div") {
        return None;
    }
    Some(name)
}

/// Put element text on the tag line, or one level deeper when multi-line.
pub(crate) fn place_text(format: &mut Format, node: Node<'_>, profile: &Profile) {
    if node.is_text_only() {
        return;
    }
    match node.value() {
        Some(value) if is_multiline(value) => {
            format.before_text = format!("{}{}", format.line_prefix(), profile.indent(1));
        }
        Some(value) if !value.is_empty() => format.before_text = " ".to_string(),
        _ => {}
    }
}

/// Elements emit text when they have a value, or are empty leaves (so the
/// caret has somewhere to go).
pub(crate) fn has_text(node: Node<'_>) -> bool {
    node.value().is_some_and(|v| !v.is_empty())
        || (!node.has_children() && !node.is_self_closing())
}

/// Rewrite multi-line text line by line; every line is prefixed with one
/// indentation unit.
pub(crate) fn map_lines(
    value: &str,
    profile: &Profile,
    mut line: impl FnMut(usize, &str) -> String,
) -> String {
    let unit = profile.indent(1);
    split_lines(value)
        .into_iter()
        .enumerate()
        .map(|(i, text)| format!("{unit}{}", line(i, text)))
        .collect::<Vec<_>>()
        .join("\n")
}
