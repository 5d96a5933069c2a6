// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::layout::{Align, Color, Document, Op, Page, PAGE_H, PAGE_W};

const PT_PER_MM: f64 = 72.0 / 25.4;

fn color_component(c: u8) -> String {
    format!("{:.3}", f64::from(c) / 255.0)
}

fn fill_color(c: Color) -> String {
    format!(
        "{} {} {} rg",
        color_component(c.0),
        color_component(c.1),
        color_component(c.2)
    )
}

fn stroke_color(c: Color) -> String {
    format!(
        "{} {} {} RG",
        color_component(c.0),
        color_component(c.1),
        color_component(c.2)
    )
}

// Coarse Helvetica advance widths in thousandths of the font size; close
// enough for centering and right-aligning table cells.
fn char_width_milli(c: char) -> f64 {
    match c {
        'i' | 'j' | 'l' | '\'' | '|' => 222.0,
        'f' | 't' | 'I' | '.' | ',' | ':' | ';' | '!' | '(' | ')' | '[' | ']' | '/' | ' ' => 278.0,
        'r' | '-' => 333.0,
        'm' | 'M' | 'W' => 889.0,
        'w' => 722.0,
        '0'..='9' | '_' | '$' | '#' => 556.0,
        '&' | '%' => 722.0,
        '@' => 1015.0,
        'A'..='Z' => 689.0,
        _ => 556.0,
    }
}

fn text_width_pt(s: &str, size: f64) -> f64 {
    s.chars().map(char_width_milli).sum::<f64>() * size / 1000.0
}

/// Reduce text to WinAnsi-representable characters. The Taka sign has no
/// WinAnsi code point, so the base-14 fonts show `Tk` instead.
fn transliterate(text: &str) -> String {
    let mut out = String::new();
    for c in text.chars() {
        match c {
            '\u{09f3}' => out.push_str("Tk "),
            '\u{2013}' | '\u{2014}' => out.push('-'),
            '\u{2018}' | '\u{2019}' => out.push('\''),
            '\u{201c}' | '\u{201d}' => out.push('"'),
            c if (c as u32) < 0x80 => out.push(c),
            c if (0xa0..=0xff).contains(&(c as u32)) => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

fn escape_literal(s: &str) -> String {
    let mut out = String::new();
    for c in s.chars() {
        let code = c as u32;
        match c {
            '(' | ')' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            _ if (0x20..0x7f).contains(&code) => out.push(c),
            // transliterate() only leaves Latin-1 here; emit as octal
            _ => out.push_str(&format!("\\{:03o}", code & 0xff)),
        }
    }
    out
}

fn page_content(page: &Page) -> String {
    let mut s = String::new();
    for op in &page.ops {
        match op {
            Op::Rect {
                x,
                y,
                w,
                h,
                fill,
                stroke,
            } => {
                if fill.is_none() && stroke.is_none() {
                    continue;
                }
                if let Some(c) = fill {
                    s.push_str(&fill_color(*c));
                    s.push('\n');
                }
                if let Some(c) = stroke {
                    s.push_str(&stroke_color(*c));
                    s.push_str("\n0.25 w\n");
                }
                let llx = x * PT_PER_MM;
                let lly = (PAGE_H - (y + h)) * PT_PER_MM;
                s.push_str(&format!(
                    "{:.2} {:.2} {:.2} {:.2} re ",
                    llx,
                    lly,
                    w * PT_PER_MM,
                    h * PT_PER_MM
                ));
                s.push_str(match (fill, stroke) {
                    (Some(_), Some(_)) => "B\n",
                    (Some(_), None) => "f\n",
                    _ => "S\n",
                });
            }
            Op::Text {
                x,
                y,
                text,
                size,
                bold,
                color,
                align,
            } => {
                let shown = transliterate(text);
                if shown.is_empty() {
                    continue;
                }
                let width = text_width_pt(&shown, *size);
                let anchor = x * PT_PER_MM;
                let tx = match align {
                    Align::Left => anchor,
                    Align::Center => anchor - width / 2.0,
                    Align::Right => anchor - width,
                };
                let ty = (PAGE_H - y) * PT_PER_MM;
                let font = if *bold { "/F2" } else { "/F1" };
                s.push_str(&format!(
                    "BT {} {:.1} Tf {} {:.2} {:.2} Td ({}) Tj ET\n",
                    font,
                    size,
                    fill_color(*color),
                    tx,
                    ty,
                    escape_literal(&shown)
                ));
            }
        }
    }
    s
}

fn push_obj(out: &mut Vec<u8>, offsets: &mut Vec<usize>, body: &str) {
    offsets.push(out.len());
    let num = offsets.len();
    out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", num, body).as_bytes());
}

/// Serialize the laid-out document into a single PDF file image. Pages carry
/// only the two base-14 Helvetica faces, so the output is self-contained.
pub(crate) fn serialize(doc: &Document) -> Vec<u8> {
    let contents: Vec<String> = doc.pages.iter().map(page_content).collect();
    let page_count = contents.len();

    let mut out: Vec<u8> = Vec::new();
    out.extend_from_slice(b"%PDF-1.4\n");
    // binary marker comment
    out.extend_from_slice(&[b'%', 0xe2, 0xe3, 0xcf, 0xd3, b'\n']);

    let mut offsets: Vec<usize> = Vec::new();
    let kids: Vec<String> = (0..page_count)
        .map(|i| format!("{} 0 R", 5 + 2 * i))
        .collect();

    push_obj(&mut out, &mut offsets, "<< /Type /Catalog /Pages 2 0 R >>");
    push_obj(
        &mut out,
        &mut offsets,
        &format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kids.join(" "),
            page_count
        ),
    );
    push_obj(
        &mut out,
        &mut offsets,
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
    );
    push_obj(
        &mut out,
        &mut offsets,
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>",
    );

    for content in &contents {
        let stream_num = offsets.len() + 2;
        push_obj(
            &mut out,
            &mut offsets,
            &format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {:.2} {:.2}] \
                 /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {} 0 R >>",
                PAGE_W * PT_PER_MM,
                PAGE_H * PT_PER_MM,
                stream_num
            ),
        );
        push_obj(
            &mut out,
            &mut offsets,
            &format!(
                "<< /Length {} >>\nstream\n{}\nendstream",
                content.len(),
                content
            ),
        );
    }

    let xref_pos = out.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", offsets.len() + 1);
    for off in &offsets {
        xref.push_str(&format!("{:010} 00000 n \n", off));
    }
    out.extend_from_slice(xref.as_bytes());
    out.extend_from_slice(
        format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            offsets.len() + 1,
            xref_pos
        )
        .as_bytes(),
    );
    out
}
