use std::io::Write;

use crate::alignment::Document;
use crate::errors::RenderError;
use crate::markup::{self, Span};
use crate::renderer::DocumentRenderer;

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

/// Plain-text preview of an aligned document.
///
/// Tone digits become Unicode superscripts and emphasised initials are
/// wrapped in underscores. Columns are centered by character count, which
/// is close enough for a monospace terminal.
#[derive(Debug, Clone, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }

    fn span_text(span: &Span) -> String {
        let text: String = if span.superscript {
            span.text
                .chars()
                .map(|c| c.to_digit(10).map_or(c, |d| SUPERSCRIPT_DIGITS[d as usize]))
                .collect()
        } else {
            span.text.clone()
        };

        if span.is_emphasis() {
            format!("_{}_", text)
        } else {
            text
        }
    }

    /// Flatten one cell's markup into preview text
    pub fn cell_text(cell: &str) -> String {
        markup::parse(cell).iter().map(Self::span_text).collect()
    }
}

impl DocumentRenderer for TextRenderer {
    fn extension(&self) -> &str {
        "txt"
    }

    fn render(&self, document: &Document, out: &mut dyn Write) -> Result<(), RenderError> {
        writeln!(out, "{}", document.title())?;
        writeln!(out)?;

        let rows: Vec<Vec<String>> = document
            .padded_rows()
            .into_iter()
            .map(|row| row.into_iter().map(Self::cell_text).collect())
            .collect();

        let width = rows
            .iter()
            .flatten()
            .map(|cell| cell.chars().count())
            .max()
            .unwrap_or(0)
            + 2;

        for row in &rows {
            let line: String = row.iter().map(|cell| format!("{:^width$}", cell)).collect();
            writeln!(out, "{}", line.trim_end())?;
        }

        out.flush()?;
        Ok(())
    }
}
