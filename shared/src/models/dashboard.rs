//! Dashboard Model
//!
//! Response of `GET /invoice/{branch}/dashboard`.

use super::report::Breakdown;
use crate::util::null_as_default;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One point of the daily sales series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySales {
    #[serde(default)]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: Decimal,
}

/// Best-selling product by quantity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    #[serde(default)]
    pub product_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub qty: u64,
}

/// Sales dashboard summary; every field defaults to zero/empty
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_sales: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_orders: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub today_sales: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub today_orders: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_guests: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sales_by_order_type: Breakdown,
    #[serde(default, deserialize_with = "null_as_default")]
    pub daily_sales: Vec<DailySales>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub top_products: Vec<TopProduct>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_defaults() {
        let d: DashboardSummary = serde_json::from_str(r#"{"totalSales":1500.5,"topProducts":null}"#).unwrap();
        assert_eq!(d.total_sales, Decimal::new(15005, 1));
        assert_eq!(d.total_orders, 0);
        assert!(d.top_products.is_empty());
        assert!(d.daily_sales.is_empty());
    }
}
