//! Vertical layout cursor with page-break handling.
//!
//! The cursor tracks the baseline of the next line on the current page. Callers ask for
//! the space a block needs before drawing it (`ensure_space`); when less than that
//! remains above the bottom margin, drawing continues at the top of a fresh page.
//! Text is never placed below the bottom margin.

use crate::layout::font_metrics::{get_metrics, PageConfig, ReportFont};
use crate::report::document::{DrawOp, Page, ReportDocument};

pub struct LayoutCursor {
    config: PageConfig,
    y: f32,
    current: Page,
    finished: Vec<Page>,
}

impl LayoutCursor {
    pub fn new(config: PageConfig) -> Self {
        let y = config.top();
        Self {
            config,
            y,
            current: Page::default(),
            finished: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Distance from the cursor down to the bottom margin.
    pub fn remaining(&self) -> f32 {
        self.y - self.config.margin_pt
    }

    /// Starts a new page if fewer than `min_space` points remain. Returns whether a
    /// break happened.
    pub fn ensure_space(&mut self, min_space: f32) -> bool {
        if self.remaining() < min_space {
            self.new_page();
            true
        } else {
            false
        }
    }

    /// Moves to the top of a fresh page. A page with nothing drawn on it is reused.
    pub fn new_page(&mut self) {
        if !self.current.is_empty() {
            self.finished.push(std::mem::take(&mut self.current));
        }
        self.y = self.config.top();
    }

    pub fn advance(&mut self, dy: f32) {
        self.y -= dy;
    }

    /// Draws one line at the cursor, `indent_pt` right of the left margin. Does not move
    /// the cursor.
    pub fn draw_text(&mut self, indent_pt: f32, font: ReportFont, size: f32, text: impl Into<String>) {
        self.current.ops.push(DrawOp::Text {
            x: self.config.margin_pt + indent_pt,
            y: self.y,
            font,
            size,
            text: text.into(),
        });
    }

    /// Draws `text` word-wrapped to the available width, one line per `leading` points,
    /// breaking pages between lines as needed. Returns the height consumed.
    #[must_use]
    pub fn draw_wrapped(
        &mut self,
        indent_pt: f32,
        font: ReportFont,
        size: f32,
        leading: f32,
        text: &str,
    ) -> f32 {
        let lines = get_metrics(font).wrap(text, size, self.config.text_width(indent_pt));
        for line in &lines {
            self.ensure_space(leading);
            self.draw_text(indent_pt, font, size, line.as_str());
            self.advance(leading);
        }
        lines.len() as f32 * leading
    }

    pub fn finish(mut self) -> ReportDocument {
        if !self.current.is_empty() || self.finished.is_empty() {
            self.finished.push(self.current);
        }
        ReportDocument {
            page_width: self.config.page_width_pt,
            page_height: self.config.page_height_pt,
            pages: self.finished,
        }
    }
}
