use genpdf::{elements, fonts, style, Alignment, Element, SimplePageDecorator};
use log::debug;
use printpdf::BuiltinFont;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::alignment::Document;
use crate::app_config::{FontConfig, LayoutConfig, PaperSize};
use crate::errors::RenderError;
use crate::markup::{self, Span};
use crate::renderer::DocumentRenderer;

/// Color of emphasised initials when no bold face is configured
pub const EMPHASIS_COLOR: style::Color = style::Color::Rgb(0xC0, 0x1C, 0x28);

// @struct: PDF output through genpdf
#[derive(Debug, Clone)]
pub struct PdfRenderer {
    // @field: Regular face and optional bold face
    font: FontConfig,
    // @field: Page and table layout
    layout: LayoutConfig,
}

impl PdfRenderer {
    pub fn new(font: FontConfig, layout: LayoutConfig) -> Self {
        Self { font, layout }
    }

    fn has_bold_face(&self) -> bool {
        self.font.bold_path.is_some()
    }

    // @loads: Font family with only the faces in use embedded.
    //
    // Slots that are never selected point at builtin PDF fonts, which are
    // referenced by name and not written into the file.
    fn load_font_family(&self) -> Result<fonts::FontFamily<fonts::FontData>, RenderError> {
        let data = read_font_file(&self.font.path)?;
        let face = |builtin: Option<BuiltinFont>| font_data(&self.font.path, data.clone(), builtin);

        let bold = match &self.font.bold_path {
            Some(bold_path) => font_data(bold_path, read_font_file(bold_path)?, None)?,
            None => face(Some(BuiltinFont::HelveticaBold))?,
        };

        Ok(fonts::FontFamily {
            regular: face(None)?,
            bold,
            italic: face(Some(BuiltinFont::HelveticaOblique))?,
            bold_italic: face(Some(BuiltinFont::HelveticaBoldOblique))?,
        })
    }

    fn paper_size(&self) -> genpdf::PaperSize {
        match self.layout.paper_size {
            PaperSize::A4 => genpdf::PaperSize::A4,
            PaperSize::Letter => genpdf::PaperSize::Letter,
            PaperSize::Legal => genpdf::PaperSize::Legal,
        }
    }

    /// Style of one markup span inside a table cell.
    ///
    /// genpdf has no underline: emphasis uses the bold face when one is
    /// configured, and `EMPHASIS_COLOR` otherwise.
    pub fn span_style(&self, span: &Span) -> style::Style {
        let mut span_style = style::Style::new();
        if span.is_emphasis() {
            if self.has_bold_face() {
                span_style.set_bold();
            } else {
                span_style.set_color(EMPHASIS_COLOR);
            }
        }
        if span.superscript {
            span_style.set_font_size(self.layout.superscript_font_size);
        }
        span_style
    }

    /// Style of the document title
    pub fn title_style(&self) -> style::Style {
        let title_style = style::Style::new().with_font_size(self.layout.title_font_size);
        if self.has_bold_face() {
            title_style.bold()
        } else {
            title_style
        }
    }

    // @creates: Centered paragraph for one table cell
    fn cell_paragraph(&self, cell: &str) -> elements::Paragraph {
        let mut paragraph = elements::Paragraph::default();

        for span in markup::parse(cell) {
            let span_style = self.span_style(&span);
            paragraph.push_styled(span.text, span_style);
        }

        paragraph.aligned(Alignment::Center)
    }

    fn table(&self, document: &Document) -> Result<elements::TableLayout, RenderError> {
        let mut table = elements::TableLayout::new(vec![1; document.max_cols()]);
        if self.layout.cell_borders {
            table.set_cell_decorator(elements::FrameCellDecorator::new(true, true, false));
        }

        for row in document.padded_rows() {
            row.iter()
                .fold(table.row(), |table_row, cell| table_row.element(self.cell_paragraph(cell)))
                .push()
                .map_err(|e| RenderError::Layout(e.to_string()))?;
        }

        Ok(table)
    }
}

fn font_error(path: &Path, message: String) -> RenderError {
    RenderError::Font {
        path: path.to_path_buf(),
        message,
    }
}

fn read_font_file(path: &Path) -> Result<Vec<u8>, RenderError> {
    fs::read(path).map_err(|e| font_error(path, e.to_string()))
}

fn font_data(path: &Path, data: Vec<u8>, builtin: Option<BuiltinFont>) -> Result<fonts::FontData, RenderError> {
    fonts::FontData::new(data, builtin).map_err(|e| font_error(path, e.to_string()))
}

impl DocumentRenderer for PdfRenderer {
    fn extension(&self) -> &str {
        "pdf"
    }

    fn render(&self, document: &Document, out: &mut dyn Write) -> Result<(), RenderError> {
        let font_family = self.load_font_family()?;

        let mut pdf = genpdf::Document::new(font_family);
        pdf.set_title(document.title());
        pdf.set_paper_size(self.paper_size());
        pdf.set_font_size(self.layout.cell_font_size);

        let mut decorator = SimplePageDecorator::new();
        decorator.set_margins(i32::from(self.layout.margins_mm));
        pdf.set_page_decorator(decorator);

        pdf.push(
            elements::Paragraph::new(document.title())
                .aligned(Alignment::Center)
                .styled(self.title_style()),
        );

        if !document.is_empty() {
            pdf.push(elements::Break::new(1));
            pdf.push(self.table(document)?);
        }

        debug!(
            "Rendering '{}' as PDF: {} rows x {} columns",
            document.title(),
            document.pairs().len() * 2,
            document.max_cols()
        );

        pdf.render(out).map_err(|e| RenderError::Layout(e.to_string()))
    }
}
