//! Demo data for running the mock by hand

use rust_decimal::Decimal;
use shared::models::{
    Breakdown, DailyInvoiceReport, DailySales, DashboardSummary, Order, OrderLineItem,
    OrderSummary, TopProduct, User, UserRole,
};

use crate::state::MockState;

pub const DEMO_BRANCH: &str = "gulshan";
pub const ADMIN_TOKEN: &str = "admin-token";
pub const MANAGER_TOKEN: &str = "manager-token";
pub const USER_TOKEN: &str = "user-token";

fn user(id: &str, name: &str, email: &str, role: UserRole) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        branch: DEMO_BRANCH.to_string(),
        status: Some("active".to_string()),
    }
}

fn line(name: &str, qty: u32, rate: i64, complimentary: bool) -> OrderLineItem {
    let rate = Decimal::from(rate);
    OrderLineItem {
        product_name: name.to_string(),
        qty,
        rate,
        subtotal: rate * Decimal::from(qty),
        is_complimentary: complimentary,
    }
}

/// One day of orders with a summary that reconciles
pub fn demo_report() -> DailyInvoiceReport {
    let orders = vec![
        Order {
            id: Some("o1".to_string()),
            invoice_serial: "INV-0001".to_string(),
            date_time: "2024-03-09T12:30:00Z".to_string(),
            order_type: "dine-in".to_string(),
            table_name: Some("T1".to_string()),
            customer_name: Some("Rahim".to_string()),
            products: vec![
                line("Kacchi Biryani", 2, 350, false),
                line("Borhani", 2, 80, true),
            ],
            discount: Decimal::from(50),
            vat: Decimal::from(33),
            sd: Decimal::ZERO,
            total_amount: Decimal::from(683),
            payment_method: "cash".to_string(),
            ..Default::default()
        },
        Order {
            id: Some("o2".to_string()),
            invoice_serial: "INV-0002".to_string(),
            date_time: "2024-03-09T19:05:00Z".to_string(),
            order_type: "delivery".to_string(),
            delivery_provider: Some("foodpanda".to_string()),
            products: vec![line("Beef Tehari", 3, 220, false)],
            vat: Decimal::from(33),
            total_amount: Decimal::from(693),
            payment_method: "mobile".to_string(),
            ..Default::default()
        },
    ];

    let total_qty = orders.iter().map(Order::item_qty).sum();
    DailyInvoiceReport {
        total_orders: orders.len() as u64,
        total_qty,
        orders,
        summary: OrderSummary {
            total_amount: Decimal::from(1376),
            total_discount: Decimal::from(50),
            total_complimentary_amount: Decimal::from(160),
            total_vat: Decimal::from(66),
            cash_payments: Decimal::from(683),
            mobile_payments: Decimal::from(693),
            total_guest_count: 3,
            sales_by_order_type: [
                ("dine-in", Decimal::from(683)),
                ("takeaway", Decimal::ZERO),
                ("delivery", Decimal::from(693)),
            ]
            .into_iter()
            .collect(),
            sales_by_delivery_provider: [
                ("foodpanda", Decimal::from(693)),
                ("pathao_food", Decimal::ZERO),
            ]
            .into_iter()
            .collect(),
            ..Default::default()
        },
    }
}

pub fn demo_dashboard() -> DashboardSummary {
    let mut by_type = Breakdown::new();
    by_type.insert("dine-in", Decimal::from(18250));
    by_type.insert("takeaway", Decimal::from(4200));
    by_type.insert("delivery", Decimal::from(9550));

    DashboardSummary {
        total_sales: Decimal::from(32000),
        total_orders: 96,
        today_sales: Decimal::from(1376),
        today_orders: 2,
        total_guests: 210,
        sales_by_order_type: by_type,
        daily_sales: vec![
            DailySales { date: "2024-03-07".to_string(), total: Decimal::from(10400) },
            DailySales { date: "2024-03-08".to_string(), total: Decimal::from(20224) },
            DailySales { date: "2024-03-09".to_string(), total: Decimal::from(1376) },
        ],
        top_products: vec![
            TopProduct { product_name: "Kacchi Biryani".to_string(), qty: 140 },
            TopProduct { product_name: "Beef Tehari".to_string(), qty: 95 },
            TopProduct { product_name: "Borhani".to_string(), qty: 60 },
        ],
    }
}

/// State with one user per built-in role plus a day of invoices
pub async fn demo_state() -> MockState {
    MockState::new()
        .with_user(user("admin", "Ayesha Admin", "admin@khana.test", UserRole::Admin), ADMIN_TOKEN)
        .await
        .with_user(
            user("manager", "Monir Manager", "manager@khana.test", UserRole::Manager),
            MANAGER_TOKEN,
        )
        .await
        .with_user(user("cashier", "Sadia Cashier", "cashier@khana.test", UserRole::User), USER_TOKEN)
        .await
        .with_invoices(DEMO_BRANCH, "2024-03-09", demo_report())
        .await
        .with_dashboard(DEMO_BRANCH, demo_dashboard())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_report_reconciles() {
        let report = demo_report();
        assert!(report.summary.unreconciled_payments().is_zero());
        assert_eq!(report.total_qty, 7);
        assert_eq!(report.summary.sales_by_order_type.total(), report.summary.total_amount);
    }
}
