//! PDF exporter.
//!
//! Renders a fixed header line followed by the displayed text, verbatim and
//! line by line, onto A4 pages using the built-in Helvetica fonts. A single
//! report always fits on one page; longer text such as a full history
//! listing continues onto further pages.

use std::path::{Path, PathBuf};

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use reportcard_core::PdfOptions;

use crate::error::ExportError;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const PT_TO_MM: f32 = 0.352_778;
const LINE_SPACING: f32 = 1.4;
/// Average Helvetica glyph width as a fraction of the font size.
const AVG_GLYPH_WIDTH: f32 = 0.5;
const HEADER_GROWTH_PT: f32 = 4.0;
const LAYER_NAME: &str = "Layer 1";

/// Append `.pdf` when the destination has no extension.
pub fn with_pdf_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension("pdf")
    }
}

/// Render `content` into PDF bytes.
///
/// Fails with [`ExportError::NothingToExport`] when `content` is empty.
/// Whitespace-only text is still rendered.
pub fn render_pdf(content: &str, options: &PdfOptions) -> Result<Vec<u8>, ExportError> {
    if content.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let (doc, page, layer) = PdfDocument::new(
        options.title.as_str(),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        LAYER_NAME,
    );
    let body_font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Document(e.to_string()))?;
    let header_font = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Document(e.to_string()))?;

    let body_size = options.font_size;
    let header_size = body_size + HEADER_GROWTH_PT;
    let line_height = body_size * PT_TO_MM * LINE_SPACING;
    let max_chars = wrap_width(body_size);

    let mut cursor = PageCursor {
        layer: doc.get_page(page).get_layer(layer),
        y: PAGE_HEIGHT_MM - MARGIN_MM,
    };

    cursor.layer.use_text(
        options.header.as_str(),
        header_size,
        Mm(MARGIN_MM),
        Mm(cursor.y),
        &header_font,
    );
    // Header paragraph is followed by a blank line.
    cursor.y -= header_size * PT_TO_MM * LINE_SPACING + line_height;

    let mut pages = 1;
    for line in content.lines().flat_map(|l| wrap_line(l, max_chars)) {
        if cursor.y < MARGIN_MM {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);
            cursor = PageCursor {
                layer: doc.get_page(page).get_layer(layer),
                y: PAGE_HEIGHT_MM - MARGIN_MM,
            };
            pages += 1;
        }
        cursor.write(&line, body_size, &body_font);
        cursor.y -= line_height;
    }

    tracing::debug!(pages, "rendered PDF");
    doc.save_to_bytes()
        .map_err(|e| ExportError::Document(e.to_string()))
}

/// Render `content` and write it to `path`.
///
/// Nothing is created on disk unless rendering succeeds. Returns the path
/// actually written, which gains a `.pdf` extension if it had none.
pub fn export_pdf(
    content: &str,
    path: &Path,
    options: &PdfOptions,
) -> Result<PathBuf, ExportError> {
    let bytes = render_pdf(content, options)?;
    let path = with_pdf_extension(path);
    std::fs::write(&path, bytes).map_err(|error| ExportError::Io {
        path: path.clone(),
        error,
    })?;
    tracing::info!(path = %path.display(), "exported PDF");
    Ok(path)
}

struct PageCursor {
    layer: PdfLayerReference,
    y: f32,
}

impl PageCursor {
    fn write(&self, text: &str, size: f32, font: &IndirectFontRef) {
        if !text.is_empty() {
            self.layer
                .use_text(text, size, Mm(MARGIN_MM), Mm(self.y), font);
        }
    }
}

/// Approximate characters per line for the body font.
fn wrap_width(font_size: f32) -> usize {
    let usable = PAGE_WIDTH_MM - 2.0 * MARGIN_MM;
    let glyph = font_size * PT_TO_MM * AVG_GLYPH_WIDTH;
    ((usable / glyph) as usize).max(1)
}

/// Expand tabs and split an over-long line at character boundaries.
fn wrap_line(line: &str, max_chars: usize) -> Vec<String> {
    let line = line.replace('\t', "    ");
    let chars: Vec<char> = line.trim_end().chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars
        .chunks(max_chars)
        .map(|chunk| chunk.iter().collect())
        .collect()
}
