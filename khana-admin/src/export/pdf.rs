//! Paginated PDF exporter (A4 portrait)
//!
//! Page 1 carries the header and a two-column summary; the order table runs
//! across as many pages as needed, repeating its header row on each page.
//! Every page ends with a `Page n of m` footer.

use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Polygon,
    Rgb,
};
use shared::models::Order;
use std::io::BufWriter;
use tracing::debug;

use khana_printer::truncate_width;

use crate::core::{AdminError, AdminResult};
use crate::report::context::order_time;
use crate::report::{ReportContext, ReportView, build_view, label_for};
use crate::utils::money::format_money;

const PAGE_W: f32 = 210.0;
const PAGE_H: f32 = 297.0;
const MARGIN: f32 = 15.0;
const TOP_Y: f32 = 282.0;
/// Lowest baseline a table row may use; the footer sits below
const BOTTOM_Y: f32 = 22.0;
const FOOTER_Y: f32 = 10.0;
const ROW_H: f32 = 6.0;
const SUMMARY_ROW_H: f32 = 5.5;
const TABLE_FONT: f32 = 8.0;

/// Order table columns: title, x (mm), max chars
const COLUMNS: [(&str, f32, usize); 9] = [
    ("Invoice", 15.0, 14),
    ("Time", 42.0, 5),
    ("Type", 55.0, 11),
    ("Table/Provider", 76.0, 14),
    ("Items", 104.0, 5),
    ("Discount", 117.0, 11),
    ("VAT", 139.0, 11),
    ("Total", 159.0, 12),
    ("Payment", 182.0, 8),
];

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

fn pdf_err(e: impl std::fmt::Display) -> AdminError {
    AdminError::Export(format!("pdf: {}", e))
}

/// Table rows that fit between `top_y` and the footer, header row included
pub fn rows_fitting(top_y: f32) -> usize {
    let usable = top_y - ROW_H - BOTTOM_Y;
    if usable < 0.0 {
        0
    } else {
        (usable / ROW_H) as usize + 1
    }
}

/// Pages needed for `rows` table rows when page 1 holds `first` of them
pub fn page_count(rows: usize, first: usize, per_page: usize) -> usize {
    if rows <= first || per_page == 0 {
        1
    } else {
        1 + (rows - first).div_ceil(per_page)
    }
}

fn text(layer: &PdfLayerReference, font: &IndirectFontRef, s: &str, size: f32, x: f32, y: f32) {
    layer.use_text(s, size, Mm(x), Mm(y), font);
}

fn hline(layer: &PdfLayerReference, y: f32) {
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(MARGIN), Mm(y)), false),
            (Point::new(Mm(PAGE_W - MARGIN), Mm(y)), false),
        ],
        is_closed: false,
    });
}

fn stripe(layer: &PdfLayerReference, baseline: f32) {
    let (lo, hi) = (baseline - 2.0, baseline - 2.0 + ROW_H);
    layer.set_fill_color(Color::Rgb(Rgb::new(0.93, 0.93, 0.93, None)));
    layer.add_polygon(Polygon {
        rings: vec![vec![
            (Point::new(Mm(MARGIN), Mm(lo)), false),
            (Point::new(Mm(PAGE_W - MARGIN), Mm(lo)), false),
            (Point::new(Mm(PAGE_W - MARGIN), Mm(hi)), false),
            (Point::new(Mm(MARGIN), Mm(hi)), false),
        ]],
        mode: PaintMode::Fill,
        winding_order: WindingOrder::NonZero,
    });
    layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
}

/// Company block, title and date; returns the next free baseline
fn draw_header(layer: &PdfLayerReference, fonts: &Fonts, ctx: &ReportContext) -> f32 {
    let mut y = TOP_Y;
    text(layer, &fonts.bold, ctx.company_name(), 16.0, MARGIN, y);
    y -= 6.5;
    for line in ctx.company.contact_lines() {
        text(layer, &fonts.regular, &line, 9.0, MARGIN, y);
        y -= 4.5;
    }
    text(layer, &fonts.bold, "Daily Sales Report", 13.0, 140.0, TOP_Y);
    text(layer, &fonts.regular, &format!("Date: {}", ctx.date_label()), 10.0, 140.0, TOP_Y - 6.5);

    y -= 2.0;
    hline(layer, y);
    y - 8.0
}

/// Label/value text of the summary block, in drawing order
pub fn pdf_summary_lines(view: &ReportView) -> Vec<(String, String)> {
    view.sections()
        .into_iter()
        .flat_map(|s| s.rows)
        .map(|row| (row.label, row.value.display()))
        .collect()
}

/// Summary rows in two columns, left column filled first
fn draw_summary(layer: &PdfLayerReference, fonts: &Fonts, view: &ReportView, top: f32) -> f32 {
    let rows = pdf_summary_lines(view);
    let half = rows.len().div_ceil(2);

    text(layer, &fonts.bold, "Summary", 11.0, MARGIN, top);
    let start = top - 6.5;
    for (i, (label, value)) in rows.iter().enumerate() {
        let (col, idx) = if i < half { (0, i) } else { (1, i - half) };
        let x = MARGIN + col as f32 * 95.0;
        let y = start - idx as f32 * SUMMARY_ROW_H;
        let font = if label == "Net Sales" { &fonts.bold } else { &fonts.regular };
        text(layer, font, label, 9.0, x, y);
        text(layer, font, value, 9.0, x + 55.0, y);
    }
    start - half as f32 * SUMMARY_ROW_H - 4.0
}

/// Header row of the order table; returns the first row baseline
fn draw_table_header(layer: &PdfLayerReference, fonts: &Fonts, top: f32) -> f32 {
    for (title, x, _) in COLUMNS {
        text(layer, &fonts.bold, title, TABLE_FONT, x, top);
    }
    hline(layer, top - 2.0);
    top - ROW_H
}

fn draw_order_row(layer: &PdfLayerReference, fonts: &Fonts, order: &Order, y: f32) {
    let cells = [
        order.invoice_serial.clone(),
        order_time(&order.date_time),
        label_for(&order.order_type),
        order.reference().to_string(),
        order.item_qty().to_string(),
        format_money(order.discount),
        format_money(order.vat),
        format_money(order.total_amount),
        label_for(&order.payment_method),
    ];
    for (cell, (_, x, max)) in cells.iter().zip(COLUMNS) {
        text(layer, &fonts.regular, &truncate_width(cell, max), TABLE_FONT, x, y);
    }
}

fn draw_footer(layer: &PdfLayerReference, fonts: &Fonts, page: usize, total: usize) {
    text(
        layer,
        &fonts.regular,
        &format!("Page {} of {}", page, total),
        8.0,
        PAGE_W / 2.0 - 10.0,
        FOOTER_Y,
    );
}

/// Render the report to PDF bytes
pub fn render_pdf(ctx: &ReportContext) -> AdminResult<Vec<u8>> {
    let view = build_view(&ctx.summary, &ctx.orders);
    let (doc, page1, layer1) = PdfDocument::new(
        format!("{} {}", ctx.company_name(), ctx.file_stem()),
        Mm(PAGE_W),
        Mm(PAGE_H),
        "Layer 1",
    );
    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_err)?,
    };

    let mut layer = doc.get_page(page1).get_layer(layer1);
    let y = draw_header(&layer, &fonts, ctx);
    let table_top = draw_summary(&layer, &fonts, &view, y);

    let first_rows = rows_fitting(table_top);
    let per_page = rows_fitting(TOP_Y);
    let total_pages = page_count(ctx.orders.len(), first_rows, per_page);

    let mut page_no = 1;
    let mut capacity = first_rows;
    let mut on_page = 0;
    let mut y = draw_table_header(&layer, &fonts, table_top);
    if ctx.orders.is_empty() {
        text(&layer, &fonts.regular, "No orders for this day", 9.0, MARGIN, y);
    }

    for order in &ctx.orders {
        if on_page == capacity {
            draw_footer(&layer, &fonts, page_no, total_pages);
            let (page, l) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
            layer = doc.get_page(page).get_layer(l);
            page_no += 1;
            capacity = per_page;
            on_page = 0;
            y = draw_table_header(&layer, &fonts, TOP_Y);
        }
        if on_page % 2 == 1 {
            stripe(&layer, y);
        }
        draw_order_row(&layer, &fonts, order, y);
        y -= ROW_H;
        on_page += 1;
    }
    draw_footer(&layer, &fonts, page_no, total_pages);
    debug!(pages = page_no, orders = ctx.orders.len(), "PDF laid out");

    let mut writer = BufWriter::new(Vec::<u8>::new());
    doc.save(&mut writer).map_err(pdf_err)?;
    writer.into_inner().map_err(pdf_err)
}
