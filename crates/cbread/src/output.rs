//! Output formatting.

use crate::cli::OutputFormat;
use input_buffer::SliceView;
use serde::Serialize;
use source_pos::Position;

/// JSON document for a canonical buffer.
#[derive(Debug, Serialize)]
struct JsonBuffer<'a> {
    /// The canonical text.
    text: String,
    /// Position of every character in `text`, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    positions: Option<&'a SliceView<Position>>,
}

/// Formats a canonical buffer for output.
pub struct Formatter {
    format: OutputFormat,
    positions: bool,
}

impl Formatter {
    /// Creates a new formatter.
    pub fn new(format: OutputFormat, positions: bool) -> Self {
        Self { format, positions }
    }

    /// Formats `chars` alongside their `positions`.
    ///
    /// Both views must have the same length.
    pub fn format(
        &self,
        chars: &SliceView<char>,
        positions: &SliceView<Position>,
    ) -> Result<String, serde_json::Error> {
        debug_assert_eq!(chars.len(), positions.len());

        Ok(match self.format {
            OutputFormat::Human if self.positions => self.format_rows(chars, positions),
            OutputFormat::Human => chars.iter().collect(),
            OutputFormat::Json => self.format_json(chars, positions)?,
            OutputFormat::Machine => self.format_machine(chars, positions),
        })
    }

    /// Formats one `line:column char` row per character.
    fn format_rows(&self, chars: &SliceView<char>, positions: &SliceView<Position>) -> String {
        let mut output = String::new();

        for (pos, c) in positions.iter().zip(chars) {
            output.push_str(&format!("{} {:?}\n", pos, c));
        }

        output
    }

    /// Formats as JSON output.
    fn format_json(
        &self,
        chars: &SliceView<char>,
        positions: &SliceView<Position>,
    ) -> Result<String, serde_json::Error> {
        let buffer = JsonBuffer {
            text: chars.iter().collect(),
            positions: self.positions.then_some(positions),
        };
        let mut json = serde_json::to_string_pretty(&buffer)?;
        json.push('\n');
        Ok(json)
    }

    /// Formats as machine-readable output.
    fn format_machine(&self, chars: &SliceView<char>, positions: &SliceView<Position>) -> String {
        let mut output = String::new();

        for (pos, c) in positions.iter().zip(chars) {
            output.push_str(&format!(
                "{}:{}:U+{:04X}\n",
                pos.line, pos.column, c as u32
            ));
        }

        output
    }
}
