// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{BillConfig, BillTotals, VouchingBill, WithdrawKind, SHORT_FORM_CODES};
use crate::utils::fmt_money;
use crate::words::convert_to_words;

// All geometry is in millimetres from the top-left corner of an A4 page, the
// convention of the printed form this reproduces; the writer converts to PDF
// user space.
pub(crate) const PAGE_W: f64 = 210.0;
pub(crate) const PAGE_H: f64 = 297.0;
const MARGIN: f64 = 20.0;
const CONTENT_W: f64 = 170.0;
const CONTINUATION_TOP: f64 = 20.0;
const BOTTOM_LIMIT: f64 = 277.0;
const ROW_H: f64 = 8.0;
const TABLE_GAP: f64 = 10.0;
const CELL_PAD: f64 = 2.0;
const BASELINE_DROP: f64 = 5.5;

// Letterhead palette: golden/brown theme.
const PRIMARY: Color = Color(139, 115, 85);
const SECONDARY: Color = Color(218, 165, 32);
const GOLD: Color = Color(255, 193, 7);
const WHITE: Color = Color(255, 255, 255);
const BLACK: Color = Color(0, 0, 0);
const REFERENCE_BG: Color = Color(240, 248, 255);
const WITHDRAW_ALT: Color = Color(245, 245, 245);
const COST_ALT: Color = Color(248, 249, 250);
const TOTALS_ALT: Color = Color(255, 248, 225);
const GRID: Color = Color(189, 195, 199);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// One draw instruction on a page. `Text` anchors at `x` according to its
/// alignment; `y` is the baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        fill: Option<Color>,
        stroke: Option<Color>,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
        size: f64,
        bold: bool,
        color: Color,
        align: Align,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub ops: Vec<Op>,
}

/// The paginated bill, ready for serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub pages: Vec<Page>,
}

impl Document {
    pub fn to_pdf_bytes(&self) -> Vec<u8> {
        super::writer::serialize(self)
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.pages
            .iter()
            .flat_map(|p| p.ops.iter())
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
    }
}

struct TableColumn {
    header: String,
    width: f64,
    align: Align,
}

struct PageBuilder {
    pages: Vec<Page>,
    ops: Vec<Op>,
    y: f64,
}

impl PageBuilder {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            ops: Vec::new(),
            y: CONTINUATION_TOP,
        }
    }

    fn finish_page(&mut self) {
        self.pages.push(Page {
            ops: std::mem::take(&mut self.ops),
        });
    }

    fn break_page(&mut self) {
        self.finish_page();
        self.y = CONTINUATION_TOP;
    }

    fn ensure_room(&mut self, height: f64) {
        if self.y + height > BOTTOM_LIMIT {
            self.break_page();
        }
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: Option<Color>, stroke: Option<Color>) {
        self.ops.push(Op::Rect {
            x,
            y,
            w,
            h,
            fill,
            stroke,
        });
    }

    fn text(&mut self, x: f64, y: f64, text: &str, size: f64, bold: bool, color: Color, align: Align) {
        self.ops.push(Op::Text {
            x,
            y,
            text: text.to_string(),
            size,
            bold,
            color,
            align,
        });
    }

    fn cell_anchor(x: f64, col: &TableColumn) -> f64 {
        match col.align {
            Align::Left => x + CELL_PAD,
            Align::Center => x + col.width / 2.0,
            Align::Right => x + col.width - CELL_PAD,
        }
    }

    fn table_header_row(&mut self, columns: &[TableColumn], fill: Color) {
        let mut x = MARGIN;
        for col in columns {
            self.rect(x, self.y, col.width, ROW_H, Some(fill), Some(GRID));
            let anchor = Self::cell_anchor(x, col);
            self.text(anchor, self.y + BASELINE_DROP, &col.header, 10.0, true, WHITE, col.align);
            x += col.width;
        }
        self.y += ROW_H;
    }

    fn table_row(
        &mut self,
        columns: &[TableColumn],
        cells: &[String],
        fill: Option<Color>,
        size: f64,
        bold: bool,
    ) {
        let mut x = MARGIN;
        for (col, cell) in columns.iter().zip(cells) {
            self.rect(x, self.y, col.width, ROW_H, fill, Some(GRID));
            let anchor = Self::cell_anchor(x, col);
            self.text(anchor, self.y + BASELINE_DROP, cell, size, bold, BLACK, col.align);
            x += col.width;
        }
        self.y += ROW_H;
    }

    /// Grid table with alternating row shading. Breaks row-wise across pages
    /// and repeats the header row on each continuation page.
    fn table(
        &mut self,
        columns: &[TableColumn],
        rows: &[Vec<String>],
        head_fill: Color,
        alt_fill: Color,
    ) {
        // never strand a lone header at the bottom of a page
        self.ensure_room(ROW_H * 2.0);
        self.table_header_row(columns, head_fill);
        for (i, row) in rows.iter().enumerate() {
            if self.y + ROW_H > BOTTOM_LIMIT {
                self.break_page();
                self.table_header_row(columns, head_fill);
            }
            let fill = if i % 2 == 1 { Some(alt_fill) } else { None };
            self.table_row(columns, row, fill, 10.0, false);
        }
    }
}

/// Lay the bill out into pages of draw instructions. Pure: the only failure
/// mode in the pipeline, an unrepresentable amount-in-words, degrades to its
/// sentinel string and never aborts the render.
pub fn render_document(bill: &VouchingBill, totals: &BillTotals, config: &BillConfig) -> Document {
    let sym = config.currency_symbol.as_str();
    let mut pb = PageBuilder::new();

    // letterhead band
    pb.rect(0.0, 0.0, PAGE_W, 40.0, Some(PRIMARY), None);
    pb.text(105.0, 20.0, &config.org_name, 18.0, true, WHITE, Align::Center);
    pb.text(105.0, 28.0, &config.org_subtitle, 12.0, false, WHITE, Align::Center);
    pb.y = 50.0;

    // title band
    pb.rect(MARGIN, pb.y - 5.0, CONTENT_W, 15.0, Some(SECONDARY), Some(GRID));
    pb.text(
        105.0,
        pb.y + 5.0,
        "Vouching & Non-Vouching Bill",
        14.0,
        true,
        WHITE,
        Align::Center,
    );
    pb.y += 25.0;

    // name and date line
    pb.text(MARGIN, pb.y, &format!("Name: {}", bill.name), 11.0, false, BLACK, Align::Left);
    pb.text(
        140.0,
        pb.y,
        &format!("Date: {}", bill.date),
        11.0,
        false,
        BLACK,
        Align::Left,
    );
    pb.y += 15.0;

    // short-form reference box, three codes per row
    let code_rows = (SHORT_FORM_CODES.len() + 2) / 3;
    let box_h = 19.0 + 8.0 * code_rows as f64;
    pb.ensure_room(box_h + 5.0);
    pb.rect(MARGIN, pb.y - 5.0, CONTENT_W, box_h, Some(REFERENCE_BG), Some(GRID));
    pb.text(
        25.0,
        pb.y + 5.0,
        "Short Form Reference:",
        11.0,
        true,
        PRIMARY,
        Align::Left,
    );
    let mut row_y = pb.y + 12.0;
    let mut col_x = 25.0;
    for (i, (code, meaning)) in SHORT_FORM_CODES.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            row_y += 8.0;
            col_x = 25.0;
        }
        pb.text(col_x, row_y, &format!("{}:", code), 9.0, true, BLACK, Align::Left);
        pb.text(col_x + 15.0, row_y, meaning, 9.0, false, BLACK, Align::Left);
        col_x += 55.0;
    }
    pb.y += box_h + 10.0;

    // withdrawal tables, one per non-empty category
    pb.ensure_room(10.0 + ROW_H * 2.0);
    pb.text(MARGIN, pb.y, "Withdraw From:", 11.0, true, PRIMARY, Align::Left);
    pb.y += 10.0;

    for kind in WithdrawKind::ALL {
        let entries = bill.withdrawals(kind);
        if entries.is_empty() {
            continue;
        }
        let columns = [
            TableColumn {
                header: kind.table_header().to_string(),
                width: 120.0,
                align: Align::Left,
            },
            TableColumn {
                header: "Amount".to_string(),
                width: 50.0,
                align: Align::Right,
            },
        ];
        let rows: Vec<Vec<String>> = entries
            .iter()
            .map(|e| vec![e.name.clone(), fmt_money(&e.amount, sym)])
            .collect();
        pb.table(&columns, &rows, PRIMARY, WITHDRAW_ALT);
        pb.y += TABLE_GAP;
    }

    // cost entry table with zero-padded sequence numbers
    if !bill.cost_entries.is_empty() {
        let columns = [
            TableColumn {
                header: "Sl No".to_string(),
                width: 15.0,
                align: Align::Center,
            },
            TableColumn {
                header: "Cost Head".to_string(),
                width: 25.0,
                align: Align::Left,
            },
            TableColumn {
                header: "Description".to_string(),
                width: 60.0,
                align: Align::Left,
            },
            TableColumn {
                header: "Amount".to_string(),
                width: 30.0,
                align: Align::Right,
            },
            TableColumn {
                header: "Remarks".to_string(),
                width: 40.0,
                align: Align::Left,
            },
        ];
        let rows: Vec<Vec<String>> = bill
            .cost_entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                vec![
                    format!("{:02}", i + 1),
                    e.cost_head.clone(),
                    e.description.clone(),
                    fmt_money(&e.amount, sym),
                    e.remarks.clone(),
                ]
            })
            .collect();
        pb.table(&columns, &rows, SECONDARY, COST_ALT);
        pb.y += TABLE_GAP;
    }

    // totals block
    let totals_columns = [
        TableColumn {
            header: String::new(),
            width: 45.0,
            align: Align::Left,
        },
        TableColumn {
            header: String::new(),
            width: 25.0,
            align: Align::Right,
        },
    ];
    let totals_rows = [
        ("Total Received", &totals.total_received),
        ("Total Cost", &totals.total_cost),
        ("Cash in Hand", &totals.cash_in_hand),
        ("Cash in Bkash/Nagad", &totals.cash_in_bkash_nagad),
    ];
    pb.ensure_room(ROW_H * totals_rows.len() as f64);
    for (i, (label, value)) in totals_rows.iter().enumerate() {
        let fill = if i % 2 == 1 { Some(TOTALS_ALT) } else { None };
        let cells = vec![label.to_string(), fmt_money(value, sym)];
        pb.table_row(&totals_columns, &cells, fill, 11.0, true);
    }
    pb.y += 15.0;

    // amount in words banner
    pb.ensure_room(40.0);
    pb.rect(MARGIN, pb.y - 5.0, CONTENT_W, 15.0, Some(GOLD), Some(GRID));
    pb.text(25.0, pb.y + 5.0, "Amount in Words:", 11.0, true, BLACK, Align::Left);
    pb.y += 20.0;
    pb.text(
        25.0,
        pb.y,
        &convert_to_words(totals.total_received),
        11.0,
        false,
        BLACK,
        Align::Left,
    );
    pb.y += 20.0;

    // additional summary, sized to exactly the present fields
    let mut lines = Vec::new();
    if !bill.due_from.trim().is_empty() {
        lines.push(format!("Due From: {}", bill.due_from));
    }
    if !bill.payable_to.trim().is_empty() {
        lines.push(format!("Payable To: {}", bill.payable_to));
    }
    if !bill.charity.trim().is_empty() {
        lines.push(format!("Charity: {}", bill.charity));
    }
    if !lines.is_empty() {
        pb.ensure_room(10.0 + 8.0 * lines.len() as f64);
        pb.text(MARGIN, pb.y, "Summary:", 11.0, true, BLACK, Align::Left);
        pb.y += 10.0;
        for line in &lines {
            pb.text(25.0, pb.y, line, 11.0, false, BLACK, Align::Left);
            pb.y += 8.0;
        }
    }

    // signature block
    pb.y += 20.0;
    pb.ensure_room(16.0);
    pb.text(30.0, pb.y, "_________________", 11.0, false, BLACK, Align::Left);
    pb.text(130.0, pb.y, "_________________", 11.0, false, BLACK, Align::Left);
    pb.text(30.0, pb.y + 8.0, "Checked by ACT", 11.0, false, BLACK, Align::Left);
    pb.text(130.0, pb.y + 8.0, "Sign by CEO", 11.0, false, BLACK, Align::Left);

    pb.finish_page();
    Document { pages: pb.pages }
}
