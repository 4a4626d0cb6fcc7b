//! Field rendering with tree-wide numbering.
//!
//! Editors link every field that shares an index, so field indices written
//! in different nodes must never collide. Each node's fields are local
//! (`${1}` in two sibling nodes means two different fields); the renderer
//! offsets them by a counter shared across the whole render call.


use abbr_ir::{parse_fields, FieldFormat, FieldsModel};

/// Tree-wide field counter.
///
/// Starts at 1 and only moves forward within one render call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldState {
    index: usize,
}

impl Default for FieldState {
    fn default() -> Self {
        FieldState { index: 1 }
    }
}

impl FieldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next free field index.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Take the next free index.
    fn next(&mut self) -> usize {
        let index = self.index;
        self.index = self.index.saturating_add(1);
        index
    }

    /// Rebase the model's node-local indices onto the tree-wide counter and
    /// advance past the largest one.
    fn offset(&mut self, model: &mut FieldsModel) {
        let base = self.index;
        let mut largest = None;

        for field in &mut model.fields {
            field.index = field.index.saturating_add(base);
            largest = largest.max(Some(field.index));
        }

        if let Some(largest) = largest {
            self.index = self.index.max(largest.saturating_add(1));
        }
    }
}

/// A text-only node value split around its lowest-index field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SnippetParts {
    /// Text before and after the field; children go in between.
    Split { open: String, close: String },
    /// No field to split at: the whole rendered value.
    Whole(String),
}

/// Renders text with fields for one render call.
pub struct FieldRenderer<'a> {
    state: FieldState,
    format: &'a dyn FieldFormat,
}

impl<'a> FieldRenderer<'a> {
    pub fn new(format: &'a dyn FieldFormat) -> Self {
        FieldRenderer {
            state: FieldState::new(),
            format,
        }
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    /// Render `text`, replacing its fields with tree-wide numbered output.
    ///
    /// Absent or empty text produces one blank field.
    pub fn render(&mut self, text: Option<&str>) -> String {
        match text {
            Some(text) if !text.is_empty() => {
                let mut model = parse_fields(text);
                self.state.offset(&mut model);
                self.mark(&model)
            }
            _ => {
                let index = self.state.next();
                self.format.field(index, None)
            }
        }
    }

    /// Split a pseudo-snippet value at its lowest-index field.
    ///
    /// Indices of the whole value are rebased once, before the split, so
    /// fields on either side keep distinct tree-wide indices.
    pub fn split_snippet(&mut self, value: &str) -> SnippetParts {
        let mut model = parse_fields(value);
        self.state.offset(&mut model);

        match model.lowest_index_field() {
            Some(position) => {
                let (left, right) = model.split_at(position);
                SnippetParts::Split {
                    open: self.mark(&left),
                    close: self.mark(&right),
                }
            }
            None => SnippetParts::Whole(self.mark(&model)),
        }
    }

    fn mark(&self, model: &FieldsModel) -> String {
        let format = self.format;
        model.mark(|index, placeholder| format.field(index, placeholder))
    }
}
