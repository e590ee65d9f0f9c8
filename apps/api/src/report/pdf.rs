//! Serializes a `ReportDocument` to PDF bytes with `lopdf`.
//!
//! Uses the standard Type1 Helvetica faces (no embedding) with WinAnsiEncoding, so
//! text is encoded to single bytes: Latin-1 passes through, common typographic
//! punctuation maps to its WinAnsi slot, anything else becomes `?`.

use anyhow::{anyhow, Result};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream, StringFormat};

use crate::layout::font_metrics::ReportFont;
use crate::report::document::{DrawOp, ReportDocument};

impl ReportDocument {
    pub fn to_pdf_bytes(&self) -> Result<Vec<u8>> {
        let mut pdf = Document::with_version("1.5");
        let pages_id = pdf.new_object_id();

        let mut fonts = Dictionary::new();
        for font in ReportFont::ALL {
            let font_id = pdf.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => font.base_font_name(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(font.resource_name(), font_id);
        }
        let resources_id = pdf.add_object(dictionary! {
            "Font" => fonts,
        });

        let mut kids: Vec<Object> = Vec::with_capacity(self.pages.len());
        for page in &self.pages {
            let operations: Vec<_> = page.ops.iter().flat_map(text_operations).collect();
            let content = Content { operations }
                .encode()
                .map_err(|e| anyhow!("failed to encode page content: {e}"))?;
            let content_id = pdf.add_object(Stream::new(dictionary! {}, content));
            let page_id = pdf.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "Contents" => content_id,
            });
            kids.push(page_id.into());
        }

        let page_count = kids.len() as i64;
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(self.page_width),
                Object::Real(self.page_height),
            ],
        };
        pdf.objects.insert(pages_id, Object::Dictionary(pages));

        let catalog_id = pdf.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        pdf.trailer.set("Root", catalog_id);
        pdf.compress();

        let mut bytes = Vec::new();
        pdf.save_to(&mut bytes)
            .map_err(|e| anyhow!("failed to write PDF: {e}"))?;
        Ok(bytes)
    }
}

fn text_operations(op: &DrawOp) -> Vec<Operation> {
    match op {
        DrawOp::Text {
            x,
            y,
            font,
            size,
            text,
        } => vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![font.resource_name().into(), Object::Real(*size)]),
            Operation::new("Td", vec![Object::Real(*x), Object::Real(*y)]),
            Operation::new(
                "Tj",
                vec![Object::String(encode_win_ansi(text), StringFormat::Literal)],
            ),
            Operation::new("ET", vec![]),
        ],
    }
}

fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20AC}' => 0x80,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2026}' => 0x85,
            c if c.is_control() => b' ',
            c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}
