//! Abbreviation Output Engine
//!
//! Syntax-agnostic serialization of abbreviation trees.
//!
//! # Architecture
//!
//! Output is produced in two passes over an immutable tree:
//!
//! 1. **Decision Pass**: Pre-order walk assigning a [`Format`] (indent, line
//!    breaks around each fragment) to every node
//! 2. **Composition Pass**: Pre-order walk asking a syntax [`Visitor`] for
//!    each node's open/text/close fragments and streaming them, wrapped by
//!    their format, into an [`Emitter`]
//!
//! Field indices (`${1}`) are renumbered tree-wide during composition so
//! that fields from different nodes never collide.
//!
//! # Modules
//!
//! - [`decision`]: Format decisions for tag-based and indent-based syntaxes
//! - [`compose`]: Composition pass and the [`Visitor`] trait
//! - [`format`]: Per-node format descriptors and text wrapping
//! - [`output`]: Output node fragments
//! - [`field`]: Tree-wide field numbering
//! - [`emitter`]: Output abstraction

pub mod compose;
pub mod decision;
pub mod emitter;
pub mod field;
pub mod format;
pub mod output;

pub use compose::{compose, Visitor};
pub use decision::{compute_formats, compute_indented_formats, indented_level, FormatMap};
pub use emitter::{Emitter, StringEmitter};
pub use field::{FieldRenderer, FieldState, SnippetParts};
pub use format::{is_multiline, split_lines, Format, NEWLINE};
pub use output::OutputNode;
