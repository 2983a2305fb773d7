//! Paginated drawing model.
//!
//! Layout code appends drawing operations at a running vertical cursor, in
//! millimetres from the top-left corner of an A4 page. The renderer turns
//! pages into PDF content streams afterwards.

use super::metrics::{text_width, wrap};

pub type Rgb = (u8, u8, u8);

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;
pub const MARGIN: f32 = 20.0;
pub const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;

/// Vertical advance per wrapped line, in mm per point of font size.
const LINE_HEIGHT_FACTOR: f32 = 0.4;

pub fn line_height(size: f32) -> f32 {
    size * LINE_HEIGHT_FACTOR
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Regular,
    Bold,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    FillRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
    },
    /// `y` is the text baseline.
    Text {
        x: f32,
        y: f32,
        size: f32,
        font: Font,
        color: Rgb,
        text: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<Op>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pages: Vec<Page>,
    y: f32,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// One empty page, cursor at the top margin.
    pub fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            y: MARGIN,
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    #[cfg(test)]
    pub fn cursor(&self) -> f32 {
        self.y
    }

    pub fn set_cursor(&mut self, y: f32) {
        self.y = y;
    }

    pub fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    /// Start a new page unless `required` mm still fit above the bottom
    /// margin. Returns whether a page was added.
    pub fn ensure_space(&mut self, required: f32) -> bool {
        if self.y + required > PAGE_HEIGHT - MARGIN {
            self.pages.push(Page::default());
            self.y = MARGIN;
            true
        } else {
            false
        }
    }

    fn push(&mut self, op: Op) {
        // `pages` is never empty
        if let Some(page) = self.pages.last_mut() {
            page.ops.push(op);
        }
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgb) {
        self.push(Op::FillRect {
            x,
            y,
            width,
            height,
            color,
        });
    }

    /// Text at an absolute position, cursor untouched.
    pub fn text_at(&mut self, x: f32, y: f32, size: f32, font: Font, color: Rgb, text: &str) {
        self.push(Op::Text {
            x,
            y,
            size,
            font,
            color,
            text: text.to_owned(),
        });
    }

    /// Text on the cursor line.
    pub fn text(&mut self, x: f32, size: f32, font: Font, color: Rgb, text: &str) {
        self.text_at(x, self.y, size, font, color, text);
    }

    /// Text on the cursor line, right edge at `right`.
    pub fn text_right(&mut self, right: f32, size: f32, color: Rgb, text: &str) {
        let x = right - text_width(text, size);
        self.text(x, size, Font::Regular, color, text);
    }

    /// Word-wrapped text starting on the cursor line.
    ///
    /// Lines that would cross the bottom margin continue on a new page. The
    /// cursor stays on the first line of the block (on whichever page that
    /// ends up); the returned value is the height to advance past it.
    pub fn wrapped(&mut self, text: &str, max_width: f32, size: f32, color: Rgb) -> f32 {
        let step = line_height(size);
        let mut offset = 0.0;

        for line in wrap(text, max_width, size) {
            let y = self.y + offset;
            if y + step > PAGE_HEIGHT - MARGIN && y > MARGIN {
                self.pages.push(Page::default());
                self.y = MARGIN;
                offset = 0.0;
            }
            self.text_at(MARGIN, self.y + offset, size, Font::Regular, color, &line);
            offset += step;
        }

        offset
    }
}
