//! Device-independent page description produced by the renderer.
//!
//! Coordinates follow PDF conventions: points, origin at the bottom-left corner,
//! `y` is the text baseline.

use crate::layout::font_metrics::ReportFont;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        x: f32,
        y: f32,
        font: ReportFont,
        size: f32,
        text: String,
    },
}

impl DrawOp {
    #[cfg(test)]
    pub fn text(&self) -> &str {
        match self {
            DrawOp::Text { text, .. } => text,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub page_width: f32,
    pub page_height: f32,
    pub pages: Vec<Page>,
}

impl ReportDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every text run in drawing order, across all pages.
    #[cfg(test)]
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().flat_map(|p| p.ops.iter().map(DrawOp::text))
    }
}
