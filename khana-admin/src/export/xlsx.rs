//! Spreadsheet exporter
//!
//! Three sheets: `Summary` (key/value), `Orders` (one row per order) and
//! `Items` (one row per line item). Unlike the receipt and the on-screen grid,
//! the summary sheet lists every breakdown entry, zero amounts included.

use rust_decimal::Decimal;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use shared::models::{Order, OrderLineItem};
use tracing::debug;

use crate::core::{AdminError, AdminResult};
use crate::report::{Figure, ReportContext, build_view, label_for};
use crate::utils::money::to_f64;

const MONEY_FORMAT: &str = "#,##0.00";

/// One spreadsheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Money(Decimal),
    Count(u64),
}

impl From<Figure> for Cell {
    fn from(f: Figure) -> Self {
        match f {
            Figure::Money(v) => Cell::Money(v),
            Figure::Count(n) => Cell::Count(n),
        }
    }
}

/// Types that can be written as a spreadsheet row
pub trait SheetRow {
    /// Column headers
    fn headers() -> &'static [&'static str];

    /// Cells in header order
    fn cells(&self) -> Vec<Cell>;
}

struct OrderRow<'a>(&'a Order);

impl SheetRow for OrderRow<'_> {
    fn headers() -> &'static [&'static str] {
        &[
            "Invoice",
            "Date/Time",
            "Order Type",
            "Table/Provider",
            "Customer",
            "Items",
            "Discount",
            "VAT",
            "SD",
            "Total",
            "Payment",
        ]
    }

    fn cells(&self) -> Vec<Cell> {
        let o = self.0;
        vec![
            Cell::Text(o.invoice_serial.clone()),
            Cell::Text(o.date_time.clone()),
            Cell::Text(label_for(&o.order_type)),
            Cell::Text(o.reference().to_string()),
            Cell::Text(o.customer_name.clone().unwrap_or_default()),
            Cell::Count(o.item_qty()),
            Cell::Money(o.discount),
            Cell::Money(o.vat),
            Cell::Money(o.sd),
            Cell::Money(o.total_amount),
            Cell::Text(label_for(&o.payment_method)),
        ]
    }
}

struct ItemRow<'a> {
    order: &'a Order,
    item: &'a OrderLineItem,
}

impl SheetRow for ItemRow<'_> {
    fn headers() -> &'static [&'static str] {
        &["Invoice", "Product", "Qty", "Rate", "Subtotal", "Complimentary"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.order.invoice_serial.clone()),
            Cell::Text(self.item.product_name.clone()),
            Cell::Count(self.item.qty as u64),
            Cell::Money(self.item.rate),
            Cell::Money(self.item.billed_subtotal()),
            Cell::Text(if self.item.is_complimentary { "Yes" } else { "No" }.to_string()),
        ]
    }
}

/// Key/value rows of the `Summary` sheet
pub fn summary_pairs(ctx: &ReportContext) -> Vec<(String, Cell)> {
    let view = build_view(&ctx.summary, &ctx.orders);
    let mut rows = vec![
        ("Company".to_string(), Cell::Text(ctx.company_name().to_string())),
        ("Date".to_string(), Cell::Text(ctx.date_label())),
    ];
    for section in view.sections() {
        // Breakdown sections are rebuilt below from the unfiltered maps
        if matches!(section.title, "Sales by Order Type" | "Delivery Providers") {
            continue;
        }
        for row in section.rows {
            if row.label == "Unreconciled" {
                continue;
            }
            rows.push((row.label, row.value.into()));
        }
    }
    rows.push(("Unreconciled".to_string(), Cell::Money(view.unreconciled)));

    for (key, amount) in ctx.summary.sales_by_order_type.iter() {
        rows.push((format!("Order Type: {}", label_for(key)), Cell::Money(amount)));
    }
    for (key, amount) in ctx.summary.sales_by_delivery_provider.iter() {
        rows.push((format!("Delivery: {}", label_for(key)), Cell::Money(amount)));
    }
    rows
}

fn write_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    money: &Format,
) -> Result<(), XlsxError> {
    match cell {
        Cell::Text(s) => sheet.write_string(row, col, s.as_str())?,
        Cell::Money(v) => sheet.write_number_with_format(row, col, to_f64(*v), money)?,
        Cell::Count(n) => sheet.write_number(row, col, *n as f64)?,
    };
    Ok(())
}

fn write_summary(
    sheet: &mut Worksheet,
    ctx: &ReportContext,
    header: &Format,
    money: &Format,
) -> Result<(), XlsxError> {
    sheet.set_name("Summary")?;
    sheet.write_string_with_format(0, 0, "Item", header)?;
    sheet.write_string_with_format(0, 1, "Value", header)?;
    for (i, (key, value)) in summary_pairs(ctx).iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, key.as_str())?;
        write_cell(sheet, row, 1, value, money)?;
    }
    sheet.set_column_width(0, 28)?;
    sheet.set_column_width(1, 18)?;
    Ok(())
}

fn write_table<R: SheetRow>(
    sheet: &mut Worksheet,
    name: &str,
    rows: &[R],
    header: &Format,
    money: &Format,
) -> Result<(), XlsxError> {
    sheet.set_name(name)?;
    for (col, title) in R::headers().iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, header)?;
        sheet.set_column_width(col as u16, 14)?;
    }
    for (i, row) in rows.iter().enumerate() {
        for (col, cell) in row.cells().iter().enumerate() {
            write_cell(sheet, i as u32 + 1, col as u16, cell, money)?;
        }
    }
    sheet.set_freeze_panes(1, 0)?;
    Ok(())
}

fn build_workbook(ctx: &ReportContext) -> Result<Vec<u8>, XlsxError> {
    let header = Format::new().set_bold();
    let money = Format::new().set_num_format(MONEY_FORMAT);
    let mut workbook = Workbook::new();

    write_summary(workbook.add_worksheet(), ctx, &header, &money)?;

    let orders: Vec<OrderRow> = ctx.orders.iter().map(OrderRow).collect();
    write_table(workbook.add_worksheet(), "Orders", &orders, &header, &money)?;

    let items: Vec<ItemRow> = ctx
        .orders
        .iter()
        .flat_map(|order| order.products.iter().map(move |item| ItemRow { order, item }))
        .collect();
    write_table(workbook.add_worksheet(), "Items", &items, &header, &money)?;

    debug!(orders = orders.len(), items = items.len(), "Workbook built");
    workbook.save_to_buffer()
}

/// Render the workbook to `.xlsx` bytes
pub fn render_xlsx(ctx: &ReportContext) -> AdminResult<Vec<u8>> {
    build_workbook(ctx).map_err(|e| AdminError::Export(format!("xlsx: {}", e)))
}
