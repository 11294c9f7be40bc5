//! On-screen summary grid

use khana_printer::{pad_width, text_width};
use shared::models::Order;

use super::aggregate::ReportView;
use super::context::order_time;
use crate::utils::money::format_money;

const LABEL_WIDTH: usize = 22;
const VALUE_WIDTH: usize = 16;

/// Two-column grid of the view model, one block per section
pub fn render_summary_grid(view: &ReportView) -> String {
    let rule = "-".repeat(LABEL_WIDTH + VALUE_WIDTH + 3);
    let mut out = String::new();
    for section in view.sections() {
        out.push_str(section.title);
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
        for row in &section.rows {
            out.push_str(&format!(
                "{} | {}\n",
                pad_width(&row.label, LABEL_WIDTH, false),
                pad_width(&row.value.display(), VALUE_WIDTH, true)
            ));
        }
        out.push('\n');
    }
    out
}

const ORDER_COLUMNS: [(&str, usize, bool); 6] = [
    ("Invoice", 12, false),
    ("Time", 5, false),
    ("Type", 10, false),
    ("Ref", 12, false),
    ("Items", 5, true),
    ("Total", 12, true),
];

/// Compact order list under the grid
pub fn render_order_table(orders: &[Order]) -> String {
    let mut out = String::new();
    let header: Vec<String> = ORDER_COLUMNS
        .iter()
        .map(|(name, w, right)| pad_width(name, *w, *right))
        .collect();
    let header = header.join("  ");
    out.push_str(header.trim_end());
    out.push('\n');
    out.push_str(&"-".repeat(text_width(&header)));
    out.push('\n');

    if orders.is_empty() {
        out.push_str("No orders for this day\n");
        return out;
    }

    for order in orders {
        let cells = [
            order.invoice_serial.clone(),
            order_time(&order.date_time),
            order.order_type.clone(),
            order.reference().to_string(),
            order.item_qty().to_string(),
            format_money(order.total_amount),
        ];
        let row: Vec<String> = cells
            .iter()
            .zip(ORDER_COLUMNS.iter())
            .map(|(cell, (_, w, right))| pad_width(cell, *w, *right))
            .collect();
        out.push_str(row.join("  ").trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::aggregate::build_view;
    use rust_decimal::Decimal;
    use shared::models::OrderSummary;

    #[test]
    fn test_grid_rows() {
        let summary = OrderSummary {
            total_amount: Decimal::from(1000),
            total_discount: Decimal::from(100),
            total_guest_count: 5,
            sales_by_order_type: [("dine-in", Decimal::from(1000)), ("delivery", Decimal::ZERO)]
                .into_iter()
                .collect(),
            ..Default::default()
        };
        let grid = render_summary_grid(&build_view(&summary, &[]));

        let gross = grid.lines().find(|l| l.starts_with("Gross Sales")).unwrap();
        assert!(gross.ends_with("1,100.00"));
        let avg = grid.lines().find(|l| l.starts_with("Avg per Person")).unwrap();
        assert!(avg.ends_with("200.00"));
        assert!(grid.contains("Dine In"));
        assert!(!grid.contains("Delivery"));
        // no payments recorded, so the whole net sales is unreconciled
        assert!(grid.lines().any(|l| l.starts_with("Unreconciled") && l.ends_with("1,000.00")));
    }

    #[test]
    fn test_empty_order_table() {
        let table = render_order_table(&[]);
        assert!(table.starts_with("Invoice"));
        assert!(table.ends_with("No orders for this day\n"));
    }
}
