//! Report aggregator
//!
//! Pure transform from the server's per-day summary into the view model all
//! renderers consume. The server already computed every total; only gross
//! sales and the per-guest average are derived here, in [`derive_totals`].

use rust_decimal::Decimal;
use shared::models::{Breakdown, Order, OrderSummary};

use super::labels::label_for;
use crate::utils::money::{format_money, round_money};

/// Fields computed client-side from the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedTotals {
    /// Net sales plus discount
    pub gross_sales: Decimal,
    /// Net sales per guest; zero without guests
    pub avg_per_person: Decimal,
}

/// The one place gross sales and the per-guest average are computed
pub fn derive_totals(summary: &OrderSummary) -> DerivedTotals {
    let net = summary.net_sales();
    let avg_per_person = if summary.total_guest_count > 0 {
        round_money(net / Decimal::from(summary.total_guest_count))
    } else {
        Decimal::ZERO
    };
    DerivedTotals {
        gross_sales: round_money(net + summary.total_discount),
        avg_per_person,
    }
}

/// A value in a summary row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Figure {
    Money(Decimal),
    Count(u64),
}

impl Figure {
    pub fn display(&self) -> String {
        match self {
            Figure::Money(v) => format_money(*v),
            Figure::Count(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: String,
    pub value: Figure,
}

impl SummaryRow {
    fn money(label: impl Into<String>, value: Decimal) -> Self {
        Self {
            label: label.into(),
            value: Figure::Money(value),
        }
    }

    fn count(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value: Figure::Count(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySection {
    pub title: &'static str,
    pub rows: Vec<SummaryRow>,
}

/// Normalized daily summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportView {
    pub order_count: u64,
    pub total_qty: u64,
    pub guest_count: u32,
    pub net_sales: Decimal,
    pub gross_sales: Decimal,
    pub avg_per_person: Decimal,
    pub total_discount: Decimal,
    pub total_table_discount: Decimal,
    pub total_complimentary: Decimal,
    pub total_vat: Decimal,
    pub total_sd: Decimal,
    /// Cash, card, mobile, bank; always all four
    pub payments: Vec<(String, Decimal)>,
    /// Non-zero entries only, server order
    pub by_order_type: Vec<(String, Decimal)>,
    /// Non-zero entries only, server order
    pub by_delivery_provider: Vec<(String, Decimal)>,
    /// Net sales minus the payment channels, reported as-is
    pub unreconciled: Decimal,
}

fn non_zero_rows(map: &Breakdown) -> Vec<(String, Decimal)> {
    map.non_zero().map(|(k, v)| (k.to_string(), v)).collect()
}

/// Build the view model; missing figures are already zero
pub fn build_view(summary: &OrderSummary, orders: &[Order]) -> ReportView {
    let derived = derive_totals(summary);
    ReportView {
        order_count: orders.len() as u64,
        total_qty: orders.iter().map(Order::item_qty).sum(),
        guest_count: summary.total_guest_count,
        net_sales: summary.net_sales(),
        gross_sales: derived.gross_sales,
        avg_per_person: derived.avg_per_person,
        total_discount: summary.total_discount,
        total_table_discount: summary.total_table_discount,
        total_complimentary: summary.total_complimentary_amount,
        total_vat: summary.total_vat,
        total_sd: summary.total_sd,
        payments: vec![
            ("cash".to_string(), summary.cash_payments),
            ("card".to_string(), summary.card_payments),
            ("mobile".to_string(), summary.mobile_payments),
            ("bank".to_string(), summary.bank_payments),
        ],
        by_order_type: non_zero_rows(&summary.sales_by_order_type),
        by_delivery_provider: non_zero_rows(&summary.sales_by_delivery_provider),
        unreconciled: summary.unreconciled_payments(),
    }
}

impl ReportView {
    /// Labeled rows shared by the on-screen grid, the receipt and the PDF
    pub fn sections(&self) -> Vec<SummarySection> {
        let mut sections = vec![
            SummarySection {
                title: "Sales",
                rows: vec![
                    SummaryRow::count("Orders", self.order_count),
                    SummaryRow::count("Items Sold", self.total_qty),
                    SummaryRow::money("Gross Sales", self.gross_sales),
                    SummaryRow::money("Discount", self.total_discount),
                    SummaryRow::money("Table Discount", self.total_table_discount),
                    SummaryRow::money("Complimentary", self.total_complimentary),
                    SummaryRow::money("VAT", self.total_vat),
                    SummaryRow::money("SD", self.total_sd),
                    SummaryRow::money("Net Sales", self.net_sales),
                ],
            },
            SummarySection {
                title: "Guests",
                rows: vec![
                    SummaryRow::count("Guests", self.guest_count as u64),
                    SummaryRow::money("Avg per Person", self.avg_per_person),
                ],
            },
        ];

        let mut payments: Vec<SummaryRow> = self
            .payments
            .iter()
            .map(|(k, v)| SummaryRow::money(label_for(k), *v))
            .collect();
        if !self.unreconciled.is_zero() {
            payments.push(SummaryRow::money("Unreconciled", self.unreconciled));
        }
        sections.push(SummarySection {
            title: "Payments",
            rows: payments,
        });

        for (title, entries) in [
            ("Sales by Order Type", &self.by_order_type),
            ("Delivery Providers", &self.by_delivery_provider),
        ] {
            if entries.is_empty() {
                continue;
            }
            sections.push(SummarySection {
                title,
                rows: entries
                    .iter()
                    .map(|(k, v)| SummaryRow::money(label_for(k), *v))
                    .collect(),
            });
        }

        sections
    }
}
