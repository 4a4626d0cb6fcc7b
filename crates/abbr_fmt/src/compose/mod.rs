//! Composition pass.
//!
//! Walks the tree once more, after the decision pass, and asks a syntax
//! [`Visitor`] for the fragments of each node. Fragments are streamed into an
//! [`Emitter`]: a node's open and text, then its children, then its close.
//!
//! Group nodes are never shown to the visitor; their children are composed
//! in place.

#[cfg(test)]
mod tests;

use crate::decision::FormatMap;
use crate::emitter::{Emitter, StringEmitter};
use crate::field::FieldRenderer;
use crate::format::Format;
use crate::output::OutputNode;
use abbr_ir::{AbbrTree, Node};

/// Syntax-specific fragment producer.
///
/// Called in pre-order, so fields rendered by a parent are numbered before
/// the fields of its children.
pub trait Visitor {
    /// Produce the fragments of `node`, or `None` to drop the node together
    /// with its subtree.
    fn visit(
        &mut self,
        node: Node<'_>,
        format: Format,
        fields: &mut FieldRenderer<'_>,
    ) -> Option<OutputNode>;
}

/// Compose the whole tree into a string.
///
/// Nodes missing from `formats` get an empty [`Format`].
#[tracing::instrument(level = "debug", skip_all, fields(nodes = tree.len()))]
pub fn compose<V: Visitor + ?Sized>(
    tree: &AbbrTree,
    formats: &FormatMap,
    fields: &mut FieldRenderer<'_>,
    visitor: &mut V,
) -> String {
    let mut out = StringEmitter::with_capacity(tree.len() * 16);
    let mut composer = Composer {
        formats,
        fields,
        visitor,
    };
    composer.children(tree.root(), &mut out);

    tracing::debug!(bytes = out.len(), "composed");
    out.output()
}

struct Composer<'f, 'r, 'a, V: ?Sized> {
    formats: &'f FormatMap,
    fields: &'r mut FieldRenderer<'a>,
    visitor: &'r mut V,
}

impl<V: Visitor + ?Sized> Composer<'_, '_, '_, V> {
    fn children<E: Emitter + ?Sized>(&mut self, node: Node<'_>, out: &mut E) {
        for child in node.children() {
            self.node(child, out);
        }
    }

    fn node<E: Emitter + ?Sized>(&mut self, node: Node<'_>, out: &mut E) {
        if node.is_group() {
            self.children(node, out);
            return;
        }

        let format = self.formats.get(&node.id()).cloned().unwrap_or_default();
        let Some(output) = self.visitor.visit(node, format, self.fields) else {
            tracing::trace!(id = %node.id(), "omitted");
            return;
        };

        output.emit_head(out);
        self.children(node, out);
        output.emit_tail(out);
    }
}
