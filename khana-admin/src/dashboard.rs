//! Sales dashboard
//!
//! View model over [`DashboardSummary`] plus a plain-text rendering with a
//! bar-chart style daily series.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use shared::models::DashboardSummary;

use khana_printer::pad_width;

use crate::report::label_for;
use crate::utils::money::{format_money, round_money};

const BAR_WIDTH: usize = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: &'static str,
    pub value: String,
}

/// Order type with its share of the non-zero total
#[derive(Debug, Clone, PartialEq)]
pub struct Share {
    pub label: String,
    pub amount: Decimal,
    pub percent: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub date: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub cards: Vec<Card>,
    pub shares: Vec<Share>,
    pub series: Vec<SeriesPoint>,
    pub top_products: Vec<(String, u64)>,
}

pub fn build_dashboard(d: &DashboardSummary) -> DashboardView {
    let cards = vec![
        Card {
            title: "Total Sales",
            value: format_money(d.total_sales),
        },
        Card {
            title: "Total Orders",
            value: d.total_orders.to_string(),
        },
        Card {
            title: "Today's Sales",
            value: format_money(d.today_sales),
        },
        Card {
            title: "Today's Orders",
            value: d.today_orders.to_string(),
        },
        Card {
            title: "Guests",
            value: d.total_guests.to_string(),
        },
    ];

    let non_zero: Vec<(&str, Decimal)> = d
        .sales_by_order_type
        .iter()
        .filter(|(_, v)| !v.is_zero())
        .collect();
    let total: Decimal = non_zero.iter().map(|(_, v)| *v).sum();
    let shares = non_zero
        .into_iter()
        .map(|(key, amount)| Share {
            label: label_for(key),
            amount,
            percent: if total.is_zero() {
                Decimal::ZERO
            } else {
                round_money(amount * Decimal::ONE_HUNDRED / total)
            },
        })
        .collect();

    DashboardView {
        cards,
        shares,
        series: d
            .daily_sales
            .iter()
            .map(|p| SeriesPoint {
                date: p.date.clone(),
                total: p.total,
            })
            .collect(),
        top_products: d
            .top_products
            .iter()
            .map(|p| (p.product_name.clone(), p.qty))
            .collect(),
    }
}

/// Bar length for `value` scaled against `max`
pub fn bar_len(value: Decimal, max: Decimal, width: usize) -> usize {
    if max <= Decimal::ZERO || value <= Decimal::ZERO {
        return 0;
    }
    let ratio = (value / max).min(Decimal::ONE);
    (ratio * Decimal::from(width as u64))
        .round()
        .to_usize()
        .unwrap_or(0)
}

pub fn render_dashboard(view: &DashboardView) -> String {
    let mut out = String::new();
    for card in &view.cards {
        out.push_str(&format!("{} {}\n", pad_width(card.title, 16, false), card.value));
    }

    if !view.shares.is_empty() {
        out.push_str("\nSales by Order Type\n");
        for share in &view.shares {
            out.push_str(&format!(
                "  {} {} {:>6}%\n",
                pad_width(&share.label, 14, false),
                pad_width(&format_money(share.amount), 14, true),
                share.percent
            ));
        }
    }

    if !view.series.is_empty() {
        out.push_str("\nDaily Sales\n");
        let max = view.series.iter().map(|p| p.total).max().unwrap_or_default();
        for point in &view.series {
            out.push_str(&format!(
                "  {} {} {}\n",
                pad_width(&point.date, 10, false),
                pad_width(&"#".repeat(bar_len(point.total, max, BAR_WIDTH)), BAR_WIDTH, false),
                format_money(point.total)
            ));
        }
    }

    if !view.top_products.is_empty() {
        out.push_str("\nTop Products\n");
        for (i, (name, qty)) in view.top_products.iter().enumerate() {
            out.push_str(&format!("  {}. {} {}\n", i + 1, pad_width(name, 24, false), qty));
        }
    }
    out
}
