//! Abbreviation Syntax Renderers
//!
//! Serializes abbreviation trees as markup through the `abbr_fmt` engine.
//!
//! # Syntaxes
//!
//! - [`html`]: Tag-based HTML/XML output, honouring every profile formatting option
//! - [`haml`]: `%tag#id.class(attr="value")`
//! - [`pug`]: `tag#id.class(attr="value", flag)`
//! - [`slim`]: `tag#id.class attr="value"`
//!
//! The indent-based syntaxes (Haml, Pug, Slim) express nesting with
//! indentation, so they ignore the profile's `format`, `format_skip` and
//! `format_force` options.
//!
//! # Example
//!
//! ```
//! use abbr_ir::{AbbrTree, NodeSpec, Profile};
//! use abbr_syntax::{render, RenderOptions, Syntax};
//!
//! let tree = AbbrTree::from_specs([NodeSpec::element("ul").children(NodeSpec::element("li").repeat(2))]);
//! let html = render(&tree, Syntax::Html, &Profile::default(), &RenderOptions::default());
//! assert_eq!(html, "<ul>\n\t<li></li>\n\t<li></li>\n</ul>");
//!
//! let pug = render(&tree, "pug".parse().unwrap_or_default(), &Profile::default(), &RenderOptions::default());
//! assert_eq!(pug, "ul\n\tli\n\tli");
//! ```

pub mod haml;
pub mod html;
mod indented;
pub mod pug;
pub mod slim;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::Once;

use abbr_fmt::FieldRenderer;
use abbr_ir::{AbbrTree, FieldFormat, Profile};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=abbr_fmt=debug` or `RUST_LOG=abbr_fmt=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Output syntax.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Syntax {
    #[default]
    Html,
    Haml,
    Pug,
    Slim,
}

impl Syntax {
    pub fn name(self) -> &'static str {
        match self {
            Syntax::Html => "html",
            Syntax::Haml => "haml",
            Syntax::Pug => "pug",
            Syntax::Slim => "slim",
        }
    }

    /// Whether nesting is expressed by indentation alone.
    pub fn is_indent_based(self) -> bool {
        !matches!(self, Syntax::Html)
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive; unknown names select HTML.
impl FromStr for Syntax {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let syntax = match s.to_ascii_lowercase().as_str() {
            "haml" => Syntax::Haml,
            "pug" | "jade" => Syntax::Pug,
            "slim" => Syntax::Slim,
            _ => Syntax::Html,
        };
        Ok(syntax)
    }
}

/// Wrapper around secondary attributes in Haml and Slim output.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AttributeWrap {
    /// ` a="b" c=true`
    Bare,
    /// `(a="b" c)`
    Round,
    /// `{a="b" c}`
    Curly,
    /// `[a="b" c]`
    Square,
}

impl AttributeWrap {
    pub(crate) fn apply(self, attrs: &str) -> String {
        match self {
            AttributeWrap::Bare => format!(" {attrs}"),
            AttributeWrap::Round => format!("({attrs})"),
            AttributeWrap::Curly => format!("{{{attrs}}}"),
            AttributeWrap::Square => format!("[{attrs}]"),
        }
    }
}

/// Case-insensitive `none`/`round`/`curly`/`square`; unknown names select
/// [`AttributeWrap::Bare`].
impl FromStr for AttributeWrap {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wrap = match s.to_ascii_lowercase().as_str() {
            "round" => AttributeWrap::Round,
            "curly" => AttributeWrap::Curly,
            "square" => AttributeWrap::Square,
            _ => AttributeWrap::Bare,
        };
        Ok(wrap)
    }
}

/// Per-call rendering options.
#[derive(Copy, Clone, Default)]
pub struct RenderOptions<'a> {
    /// Field output override; the profile's field style is used otherwise.
    pub field: Option<&'a dyn FieldFormat>,
    /// Secondary attribute wrapper for Haml and Slim; each syntax has its
    /// own default.
    pub attribute_wrap: Option<AttributeWrap>,
}

impl fmt::Debug for RenderOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderOptions")
            .field("field", &self.field.map(|_| ".."))
            .field("attribute_wrap", &self.attribute_wrap)
            .finish()
    }
}

impl<'a> RenderOptions<'a> {
    #[must_use]
    pub fn with_field(mut self, field: &'a dyn FieldFormat) -> Self {
        self.field = Some(field);
        self
    }

    #[must_use]
    pub fn with_attribute_wrap(mut self, wrap: AttributeWrap) -> Self {
        self.attribute_wrap = Some(wrap);
        self
    }

    /// Fresh field renderer for one render call.
    pub(crate) fn field_renderer<'p>(&self, profile: &'p Profile) -> FieldRenderer<'p>
    where
        'a: 'p,
    {
        match self.field {
            Some(field) => FieldRenderer::new(field),
            None => FieldRenderer::new(profile),
        }
    }
}

/// Render `tree` in the given syntax.
pub fn render(
    tree: &AbbrTree,
    syntax: Syntax,
    profile: &Profile,
    options: &RenderOptions<'_>,
) -> String {
    match syntax {
        Syntax::Html => html::render(tree, profile, options),
        Syntax::Haml => haml::render(tree, profile, options),
        Syntax::Pug => pug::render(tree, profile, options),
        Syntax::Slim => slim::render(tree, profile, options),
    }
}
