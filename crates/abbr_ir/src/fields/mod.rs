//! Field (tabstop) syntax parser.
//!
//! Text values of abbreviation nodes may embed editor fields:
//!
//! | Syntax | Meaning |
//! |--------|---------|
//! | `$1` | field 1, no placeholder |
//! | `${1}` | field 1, no placeholder |
//! | `${1:text}` | field 1 with placeholder `text` (balanced braces allowed) |
//! | `\$` `\{` `\}` `\\` | literal character |
//!
//! Anything that does not form a complete marker is kept as literal text,
//! including markers whose index exceeds [`MAX_FIELD_INDEX`].
//!
//! The parsed [`FieldsModel`] holds the text with every marker replaced by
//! its placeholder, plus the span of each placeholder in that text. Indices
//! are node-local; renumbering them into tree-wide indices is the job of
//! the output engine.


use smallvec::SmallVec;

/// Largest node-local field index; tree-wide renumbering adds a counter on
/// top of it.
pub const MAX_FIELD_INDEX: usize = u32::MAX as usize;

/// A single field found in a text value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Field {
    pub index: usize,
    pub placeholder: Option<String>,
    /// Byte offset of the placeholder in [`FieldsModel::string`].
    pub location: usize,
    /// Byte length of the placeholder (0 when there is none).
    pub length: usize,
}

/// Text with its fields extracted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldsModel {
    pub string: String,
    /// Fields in order of appearance.
    pub fields: SmallVec<[Field; 4]>,
}

impl FieldsModel {
    /// Rebuild the text, replacing each placeholder span with `mark(index, placeholder)`.
    pub fn mark(&self, mut mark: impl FnMut(usize, Option<&str>) -> String) -> String {
        let mut out = String::with_capacity(self.string.len());
        let mut offset = 0;

        for field in &self.fields {
            out.push_str(self.string.get(offset..field.location).unwrap_or_default());
            out.push_str(&mark(field.index, field.placeholder.as_deref()));
            offset = field.location + field.length;
        }

        out.push_str(self.string.get(offset..).unwrap_or_default());
        out
    }

    /// Position (in `fields`) of the field with the lowest index.
    ///
    /// Ties resolve to the earliest field.
    pub fn lowest_index_field(&self) -> Option<usize> {
        self.fields
            .iter()
            .enumerate()
            .min_by_key(|&(position, field)| (field.index, position))
            .map(|(position, _)| position)
    }

    /// Split around the field at `position`, dropping the field itself.
    ///
    /// Field locations in the right half are rebased onto its own string.
    pub fn split_at(&self, position: usize) -> (FieldsModel, FieldsModel) {
        let Some(field) = self.fields.get(position) else {
            return (self.clone(), FieldsModel::default());
        };
        let cut = field.location + field.length;

        let left = FieldsModel {
            string: self
                .string
                .get(..field.location)
                .unwrap_or_default()
                .to_string(),
            fields: self.fields[..position].iter().cloned().collect(),
        };
        let right = FieldsModel {
            string: self.string.get(cut..).unwrap_or_default().to_string(),
            fields: self.fields[position + 1..]
                .iter()
                .map(|f| Field {
                    location: f.location - cut,
                    ..f.clone()
                })
                .collect(),
        };

        (left, right)
    }
}

/// Parse field markers out of `text`.
pub fn parse_fields(text: &str) -> FieldsModel {
    let mut model = FieldsModel {
        string: String::with_capacity(text.len()),
        fields: SmallVec::new(),
    };
    let mut rest = text;

    while let Some(c) = rest.chars().next() {
        match c {
            '\\' => {
                let escaped = rest[1..].chars().next().filter(|e| is_escapable(*e));
                if let Some(e) = escaped {
                    model.string.push(e);
                    rest = &rest[1 + e.len_utf8()..];
                } else {
                    model.string.push('\\');
                    rest = &rest[1..];
                }
            }
            '$' => match consume_field(rest) {
                Some((index, placeholder, consumed)) => {
                    let location = model.string.len();
                    let length = placeholder.as_ref().map_or(0, String::len);
                    if let Some(p) = &placeholder {
                        model.string.push_str(p);
                    }
                    model.fields.push(Field {
                        index,
                        placeholder,
                        location,
                        length,
                    });
                    rest = &rest[consumed..];
                }
                None => {
                    model.string.push('$');
                    rest = &rest[1..];
                }
            },
            _ => {
                model.string.push(c);
                rest = &rest[c.len_utf8()..];
            }
        }
    }

    model
}

fn is_escapable(c: char) -> bool {
    matches!(c, '$' | '{' | '}' | '\\')
}

/// Try to read a field marker at the start of `input` (which begins with `$`).
///
/// Returns the index, placeholder and number of bytes consumed.
fn consume_field(input: &str) -> Option<(usize, Option<String>, usize)> {
    let after_dollar = &input[1..];

    if after_dollar.starts_with(|c: char| c.is_ascii_digit()) {
        let (index, digits) = read_index(after_dollar)?;
        return Some((index, None, 1 + digits));
    }

    let body = after_dollar.strip_prefix('{')?;
    let (index, digits) = read_index(body)?;
    let tail = &body[digits..];
    // `$` + `{` + digits
    let head = 2 + digits;

    if tail.starts_with('}') {
        return Some((index, None, head + 1));
    }

    let placeholder_src = tail.strip_prefix(':')?;
    let (placeholder, consumed) = read_placeholder(placeholder_src)?;
    Some((index, Some(placeholder), head + 1 + consumed))
}

fn read_index(input: &str) -> Option<(usize, usize)> {
    let digits = input.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let index: usize = input[..digits].parse().ok()?;
    (index <= MAX_FIELD_INDEX).then_some((index, digits))
}

/// Read a placeholder up to its matching `}`; returns text and bytes consumed
/// including the closing brace.
fn read_placeholder(input: &str) -> Option<(String, usize)> {
    let mut depth = 0usize;
    let mut out = String::new();
    let mut chars = input.char_indices();

    while let Some((pos, c)) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some((_, e)) if is_escapable(e) => out.push(e),
                Some((_, e)) => {
                    out.push('\\');
                    out.push(e);
                }
                None => out.push('\\'),
            },
            '{' => {
                depth += 1;
                out.push(c);
            }
            '}' if depth == 0 => return Some((out, pos + 1)),
            '}' => {
                depth -= 1;
                out.push(c);
            }
            _ => out.push(c),
        }
    }

    None
}
