//! Output profile.
//!
//! A read-only bundle of user preferences consulted by the output engine
//! and the syntax renderers: indentation, casing, quoting, which elements
//! are inline-level, and the formatting thresholds.


use crate::{Attribute, Node};

/// Inline-level HTML elements.
pub const DEFAULT_INLINE_ELEMENTS: &[&str] = &[
    "a", "abbr", "acronym", "applet", "b", "basefont", "bdo", "big", "br", "button", "cite",
    "code", "del", "dfn", "em", "font", "i", "iframe", "img", "input", "ins", "kbd", "label",
    "map", "object", "q", "s", "samp", "select", "small", "span", "strike", "strong", "sub",
    "sup", "textarea", "tt", "u", "var",
];

/// Attributes treated as boolean when they have no value.
pub const DEFAULT_BOOLEAN_ATTRIBUTES: &[&str] = &[
    "contenteditable",
    "seamless",
    "async",
    "autofocus",
    "autoplay",
    "checked",
    "controls",
    "defer",
    "disabled",
    "formnovalidate",
    "hidden",
    "ismap",
    "loop",
    "multiple",
    "muted",
    "novalidate",
    "readonly",
    "required",
    "reversed",
    "selected",
    "typemustmatch",
];

/// Formatting hook for fields (tabstops) in output.
///
/// Closures `Fn(usize, Option<&str>) -> String` implement it directly.
pub trait FieldFormat {
    fn field(&self, index: usize, placeholder: Option<&str>) -> String;
}

impl<F> FieldFormat for F
where
    F: Fn(usize, Option<&str>) -> String,
{
    fn field(&self, index: usize, placeholder: Option<&str>) -> String {
        self(index, placeholder)
    }
}

/// Letter case applied to tag or attribute names.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Case {
    #[default]
    AsIs,
    Lower,
    Upper,
}

impl Case {
    pub fn apply(self, s: &str) -> String {
        match self {
            Case::AsIs => s.to_string(),
            Case::Lower => s.to_lowercase(),
            Case::Upper => s.to_uppercase(),
        }
    }
}

/// Attribute value quotes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Quotes {
    Single,
    #[default]
    Double,
}

/// Style of self-closing tags.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SelfClosingStyle {
    /// `<br>`
    #[default]
    Html,
    /// `<br/>`
    Xml,
    /// `<br />`
    Xhtml,
}

/// How fields are written into the output.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum FieldStyle {
    /// Placeholder text only; bare fields vanish.
    #[default]
    Plain,
    /// `${1}` / `${1:placeholder}`, understood by most editors.
    Tabstop,
}

impl FieldFormat for FieldStyle {
    fn field(&self, index: usize, placeholder: Option<&str>) -> String {
        match (self, placeholder) {
            (FieldStyle::Plain, p) => p.unwrap_or_default().to_string(),
            (FieldStyle::Tabstop, Some(p)) if !p.is_empty() => format!("${{{index}:{p}}}"),
            (FieldStyle::Tabstop, _) => format!("${{{index}}}"),
        }
    }
}

/// User-facing profile options.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ProfileOptions {
    /// One indentation unit.
    pub indent: String,
    pub tag_case: Case,
    pub attribute_case: Case,
    pub attribute_quotes: Quotes,
    /// Enable output formatting (indentation and line breaks).
    pub format: bool,
    /// Elements whose children are not indented (compared case-insensitively).
    pub format_skip: Vec<String>,
    /// Elements that always get inner line breaks.
    pub format_force: Vec<String>,
    /// Number of adjacent inline siblings that forces line breaks; 0 disables.
    pub inline_break: usize,
    /// Output `<input disabled>` instead of `<input disabled="disabled">`.
    pub compact_boolean_attributes: bool,
    pub self_closing_style: SelfClosingStyle,
    pub field_style: FieldStyle,
    pub inline_elements: Vec<String>,
    pub boolean_attributes: Vec<String>,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            tag_case: Case::AsIs,
            attribute_case: Case::AsIs,
            attribute_quotes: Quotes::Double,
            format: true,
            format_skip: vec!["html".to_string()],
            format_force: vec!["body".to_string()],
            inline_break: 3,
            compact_boolean_attributes: false,
            self_closing_style: SelfClosingStyle::Html,
            field_style: FieldStyle::Plain,
            inline_elements: to_strings(DEFAULT_INLINE_ELEMENTS),
            boolean_attributes: to_strings(DEFAULT_BOOLEAN_ATTRIBUTES),
        }
    }
}

impl ProfileOptions {
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: bool) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_inline_break(mut self, inline_break: usize) -> Self {
        self.inline_break = inline_break;
        self
    }

    #[must_use]
    pub fn with_field_style(mut self, field_style: FieldStyle) -> Self {
        self.field_style = field_style;
        self
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn contains_ignore_case(list: &[String], name: &str) -> bool {
    list.iter().any(|item| item.eq_ignore_ascii_case(name))
}

/// Output profile built from [`ProfileOptions`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    options: ProfileOptions,
}

impl From<ProfileOptions> for Profile {
    fn from(options: ProfileOptions) -> Self {
        Profile { options }
    }
}

impl Profile {
    pub fn new(options: ProfileOptions) -> Self {
        Profile { options }
    }

    pub fn options(&self) -> &ProfileOptions {
        &self.options
    }

    /// Indentation string for the given nesting level.
    pub fn indent(&self, level: usize) -> String {
        self.options.indent.repeat(level)
    }

    pub fn quote(&self, s: &str) -> String {
        let q = match self.options.attribute_quotes {
            Quotes::Single => '\'',
            Quotes::Double => '"',
        };
        format!("{q}{s}{q}")
    }

    /// Tag name in the configured case.
    pub fn name(&self, name: &str) -> String {
        self.options.tag_case.apply(name)
    }

    /// Attribute name in the configured case.
    pub fn attribute_name(&self, name: &str) -> String {
        self.options.attribute_case.apply(name)
    }

    /// Full `name="value"` token for an attribute.
    ///
    /// `render_value` produces the output text of the attribute value and is
    /// called only when the value actually appears in the token, so no field
    /// is consumed for omitted or compact boolean attributes. Returns `None`
    /// for implied attributes without a value.
    pub fn attribute(
        &self,
        attr: &Attribute,
        render_value: impl FnOnce(Option<&str>) -> String,
    ) -> Option<String> {
        if attr.is_implied() && attr.value.is_none() {
            return None;
        }

        let name = self.attribute_name(&attr.name);
        if attr.value.is_none() && self.is_boolean_attribute(attr) {
            return Some(if self.options.compact_boolean_attributes {
                name
            } else {
                let quoted = self.quote(&name);
                format!("{name}={quoted}")
            });
        }

        let value = render_value(attr.value.as_deref());
        Some(format!("{name}={}", self.quote(&value)))
    }

    /// Whether `node` is an inline-level element. Text-only and nameless
    /// nodes are never inline elements.
    pub fn is_inline(&self, node: Node<'_>) -> bool {
        node.name()
            .is_some_and(|name| contains_ignore_case(&self.options.inline_elements, name))
    }

    pub fn is_boolean_attribute(&self, attr: &Attribute) -> bool {
        attr.is_boolean() || contains_ignore_case(&self.options.boolean_attributes, &attr.name)
    }

    /// Closing marker for self-closing tags.
    pub fn self_close(&self) -> &'static str {
        match self.options.self_closing_style {
            SelfClosingStyle::Html => "",
            SelfClosingStyle::Xml => "/",
            SelfClosingStyle::Xhtml => " /",
        }
    }

    /// Output formatting enabled.
    pub fn format(&self) -> bool {
        self.options.format
    }

    pub fn is_format_skip(&self, name: &str) -> bool {
        contains_ignore_case(&self.options.format_skip, name)
    }

    pub fn is_format_force(&self, name: &str) -> bool {
        contains_ignore_case(&self.options.format_force, name)
    }

    pub fn inline_break(&self) -> usize {
        self.options.inline_break
    }

    pub fn compact_boolean_attributes(&self) -> bool {
        self.options.compact_boolean_attributes
    }
}

impl FieldFormat for Profile {
    fn field(&self, index: usize, placeholder: Option<&str>) -> String {
        self.options.field_style.field(index, placeholder)
    }
}
