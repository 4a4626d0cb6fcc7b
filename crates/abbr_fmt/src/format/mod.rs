//! Format descriptors.
//!
//! A [`Format`] holds the whitespace decided for one node: its indentation,
//! its newline string, and the strings placed before and after each of the
//! node's three output fragments (open, text, close).


/// Newline used by formatted output.
pub const NEWLINE: &str = "\n";

/// Per-node formatting decisions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Format {
    pub indent: String,
    pub newline: String,
    pub before_open: String,
    pub after_open: String,
    pub before_close: String,
    pub after_close: String,
    pub before_text: String,
    pub after_text: String,
}

impl Format {
    /// Descriptor with the given indent and the standard newline.
    pub fn indented(indent: impl Into<String>) -> Self {
        Format {
            indent: indent.into(),
            newline: NEWLINE.to_string(),
            ..Default::default()
        }
    }

    /// `newline + indent`: the prefix that puts a fragment on its own line.
    pub fn line_prefix(&self) -> String {
        format!("{}{}", self.newline, self.indent)
    }

    pub fn open(&self, s: Option<&str>) -> String {
        self.wrap(s, &self.before_open, &self.after_open)
    }

    pub fn text(&self, s: Option<&str>) -> String {
        self.wrap(s, &self.before_text, &self.after_text)
    }

    pub fn close(&self, s: Option<&str>) -> String {
        self.wrap(s, &self.before_close, &self.after_close)
    }

    /// Surround `s` with `before` and `after`.
    ///
    /// Absent `s` yields an empty string. Leading whitespace of `s` is
    /// trimmed only when `before` is non-empty, trailing whitespace only when
    /// `after` is non-empty. Line breaks inside `s` are re-indented with
    /// [`indent_text`](Self::indent_text).
    pub fn wrap(&self, s: Option<&str>, before: &str, after: &str) -> String {
        let Some(mut s) = s else {
            return String::new();
        };

        if !before.is_empty() {
            s = s.trim_start();
        }
        if !after.is_empty() {
            s = s.trim_end();
        }

        let body = self.indent_text(s);
        let mut out = String::with_capacity(before.len() + body.len() + after.len());
        out.push_str(before);
        out.push_str(&body);
        out.push_str(after);
        out
    }

    /// Re-indent multi-line text: every line but the first is prefixed with
    /// `indent`, lines are joined with `newline`.
    ///
    /// With neither newline nor indent set (formatting disabled), line
    /// breaks collapse to single spaces.
    pub fn indent_text(&self, text: &str) -> String {
        let lines = split_lines(text);
        if lines.len() == 1 {
            return text.to_string();
        }

        let separator = if self.newline.is_empty() && self.indent.is_empty() {
            " "
        } else {
            self.newline.as_str()
        };

        let mut out = String::with_capacity(text.len() + lines.len() * self.indent.len());
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                out.push_str(separator);
                out.push_str(&self.indent);
            }
            out.push_str(line);
        }
        out
    }
}

/// Split text on `\r\n`, `\r` and `\n`.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            _ => i += 1,
        }
    }

    lines.push(&text[start..]);
    lines
}

/// Whether `text` contains a line break.
pub fn is_multiline(text: &str) -> bool {
    text.contains(['\r', '\n'])
}
