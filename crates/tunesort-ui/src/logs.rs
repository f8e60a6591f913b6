//! Log sequences shown in the output region after each operation.

use crate::error::ControllerError;

/// Ordered, non-empty list of lines rendered after an operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogSequence {
    lines: Vec<String>,
}

impl LogSequence {
    /// Sequence holding one line.
    #[must_use]
    pub fn single(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
        }
    }

    /// Lines reported by the server, or `fallback` when there are none.
    ///
    /// An empty `logs` array also falls back, so the rendered region is never
    /// blank after a successful submission.
    #[must_use]
    pub fn from_server(lines: Option<Vec<String>>, fallback: &str) -> Self {
        match lines {
            Some(lines) if !lines.is_empty() => Self { lines },
            _ => Self::single(fallback),
        }
    }

    /// Single `Error: ...` line describing a failed operation.
    #[must_use]
    pub fn from_error(err: &ControllerError) -> Self {
        Self::single(format!("Error: {}", err.user_message()))
    }

    /// Lines in display order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Text content of the output region for this sequence.
    #[must_use]
    pub fn render(&self) -> String {
        render_logs(&self.lines)
    }
}

/// Concatenate lines, each followed by a newline.
///
/// Content is plain text; nothing is escaped or truncated.
#[must_use]
pub fn render_logs(lines: &[String]) -> String {
    let capacity = lines.iter().map(|line| line.len() + 1).sum();
    lines
        .iter()
        .fold(String::with_capacity(capacity), |mut out, line| {
            out.push_str(line);
            out.push('\n');
            out
        })
}
