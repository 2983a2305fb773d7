//! PDF serialization of a laid-out [`Document`].
//!
//! Uses the two standard Helvetica faces, so no font program is embedded.
//! Text is encoded as WinAnsi; characters outside it print as `?`.

use super::{
    document::{Document, Font, Op, PAGE_HEIGHT, PAGE_WIDTH, Rgb},
    metrics::PT_PER_MM,
};
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};

const REGULAR: Name<'static> = Name(b"F1");
const BOLD: Name<'static> = Name(b"F2");

/// Serialize every page of `doc` into a PDF file.
pub fn render(doc: &Document) -> Vec<u8> {
    let mut alloc = Ref::new(1);
    let catalog_id = alloc.bump();
    let page_tree_id = alloc.bump();
    let regular_id = alloc.bump();
    let bold_id = alloc.bump();

    let page_ids: Vec<(Ref, Ref)> = doc
        .pages()
        .iter()
        .map(|_| (alloc.bump(), alloc.bump()))
        .collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_ids.iter().map(|(page_id, _)| *page_id))
        .count(page_ids.len() as i32);

    let media_box = Rect::new(0.0, 0.0, PAGE_WIDTH * PT_PER_MM, PAGE_HEIGHT * PT_PER_MM);

    for (page, (page_id, content_id)) in doc.pages().iter().zip(&page_ids) {
        let mut writer = pdf.page(*page_id);
        writer.media_box(media_box);
        writer.parent(page_tree_id);
        writer.contents(*content_id);
        writer
            .resources()
            .fonts()
            .pair(REGULAR, regular_id)
            .pair(BOLD, bold_id);
        writer.finish();

        let mut content = Content::new();
        for op in &page.ops {
            draw(&mut content, op);
        }
        pdf.stream(*content_id, &content.finish());
    }

    pdf.type1_font(regular_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    pdf.type1_font(bold_id)
        .base_font(Name(b"Helvetica-Bold"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    pdf.finish()
}

/// Top-left millimetres to bottom-left points.
fn to_pt(x: f32, y: f32) -> (f32, f32) {
    (x * PT_PER_MM, (PAGE_HEIGHT - y) * PT_PER_MM)
}

fn set_fill(content: &mut Content, (r, g, b): Rgb) {
    content.set_fill_rgb(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
    );
}

fn draw(content: &mut Content, op: &Op) {
    match op {
        Op::FillRect {
            x,
            y,
            width,
            height,
            color,
        } => {
            set_fill(content, *color);
            let (left, bottom) = to_pt(*x, y + height);
            content.rect(left, bottom, width * PT_PER_MM, height * PT_PER_MM);
            content.fill_nonzero();
        }
        Op::Text {
            x,
            y,
            size,
            font,
            color,
            text,
        } => {
            let name = match font {
                Font::Regular => REGULAR,
                Font::Bold => BOLD,
            };
            let (left, baseline) = to_pt(*x, *y);
            let encoded = encode_win_ansi(text);

            set_fill(content, *color);
            content.begin_text();
            content.set_font(name, *size);
            content.next_line(left, baseline);
            content.show(Str(&encoded));
            content.end_text();
        }
    }
}

/// Map text onto WinAnsiEncoding (CP1252).
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => c as u8,
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            _ => b'?',
        })
        .collect()
}
