/*!
 * Document renderers.
 *
 * A renderer turns an aligned `Document` into bytes. The controller owns
 * the output file; renderers only write to the stream they are given:
 * - `pdf`: paginated PDF via genpdf (default)
 * - `text`: plain-text preview grid
 */

use std::fmt::Debug;
use std::io::Write;

use crate::alignment::Document;
use crate::app_config::{Config, OutputFormat};
use crate::errors::RenderError;

pub mod pdf;
pub mod text;

pub use pdf::PdfRenderer;
pub use text::TextRenderer;

/// Common trait for all output formats
///
/// Implementations must not keep state between documents: one renderer
/// instance serves the whole batch.
pub trait DocumentRenderer: Debug {
    /// File extension of the produced documents, without a dot
    fn extension(&self) -> &str;

    /// Render `document` into `out`
    fn render(&self, document: &Document, out: &mut dyn Write) -> Result<(), RenderError>;
}

/// Build the renderer selected by the configuration
pub fn from_config(config: &Config) -> Box<dyn DocumentRenderer> {
    match config.output_format {
        OutputFormat::Pdf => Box::new(PdfRenderer::new(config.font.clone(), config.layout.clone())),
        OutputFormat::Text => Box::new(TextRenderer::new()),
    }
}
