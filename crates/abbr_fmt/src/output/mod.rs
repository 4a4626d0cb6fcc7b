//! Output nodes.
//!
//! An [`OutputNode`] collects the three fragments a syntax visitor produces
//! for one tree node and serializes them, with the node's [`Format`], around
//! the already-composed output of its children.


use crate::emitter::Emitter;
use crate::field::{FieldRenderer, SnippetParts};
use crate::format::Format;
use abbr_ir::Node;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputNode {
    pub format: Format,
    pub open: Option<String>,
    pub text: Option<String>,
    pub close: Option<String>,
}

impl OutputNode {
    pub fn new(format: Format) -> Self {
        OutputNode {
            format,
            ..Default::default()
        }
    }

    /// Serialize around the children's output.
    pub fn render(&self, children: &str) -> String {
        let mut out = String::new();
        self.emit_head(&mut out);
        out.emit(children);
        self.emit_tail(&mut out);
        out
    }

    /// Emit the wrapped open and text fragments.
    pub fn emit_head<E: Emitter + ?Sized>(&self, out: &mut E) {
        out.emit(&self.format.open(self.open.as_deref()));
        out.emit(&self.format.text(self.text.as_deref()));
    }

    /// Emit the wrapped close fragment.
    pub fn emit_tail<E: Emitter + ?Sized>(&self, out: &mut E) {
        out.emit(&self.format.close(self.close.as_deref()));
    }

    /// Fill fragments for a pseudo-snippet: a text-only node with children.
    ///
    /// The value is split at its lowest-index field so the children render
    /// in that field's place. Returns `false` (and leaves the node untouched)
    /// when `node` is not a pseudo-snippet.
    pub fn fill_pseudo_snippet(&mut self, node: Node<'_>, fields: &mut FieldRenderer<'_>) -> bool {
        if !node.is_text_only() || !node.has_children() {
            return false;
        }

        match fields.split_snippet(node.value().unwrap_or_default()) {
            SnippetParts::Split { open, close } => {
                self.open = Some(open);
                self.close = Some(close);
            }
            SnippetParts::Whole(text) => self.text = Some(text),
        }
        true
    }
}
