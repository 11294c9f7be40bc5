//! Daily Invoice Report Model
//!
//! Wire shape of `GET /invoice/{branch}/date/{YYYY-MM-DD}`: the order list for
//! one business day plus the server-computed summary fields, flattened into
//! the same object.

use crate::util::null_as_default;
use rust_decimal::Decimal;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Ordered label → amount map (order-type / delivery-provider breakdowns)
///
/// Keeps the key order the server sent so every renderer lists the rows
/// identically. A `null` amount reads as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breakdown(Vec<(String, Decimal)>);

impl Breakdown {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert or replace an entry, keeping the original position on replace
    pub fn insert(&mut self, key: impl Into<String>, amount: Decimal) {
        let key = key.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = amount,
            None => self.0.push((key, amount)),
        }
    }

    /// Add to an entry, creating it at the end if missing
    pub fn add(&mut self, key: impl Into<String>, amount: Decimal) {
        let key = key.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 += amount,
            None => self.0.push((key, amount)),
        }
    }

    pub fn get(&self, key: &str) -> Option<Decimal> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Entries whose amount is not zero, in server order
    pub fn non_zero(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.iter().filter(|(_, v)| !v.is_zero())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total(&self) -> Decimal {
        self.0.iter().map(|(_, v)| *v).sum()
    }
}

impl<K: Into<String>> FromIterator<(K, Decimal)> for Breakdown {
    fn from_iter<I: IntoIterator<Item = (K, Decimal)>>(iter: I) -> Self {
        let mut map = Breakdown::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl Serialize for Breakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Breakdown {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BreakdownVisitor;

        impl<'de> Visitor<'de> for BreakdownVisitor {
            type Value = Breakdown;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of label to amount")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Breakdown, A::Error> {
                let mut map = Breakdown(Vec::with_capacity(access.size_hint().unwrap_or(0)));
                while let Some((key, value)) = access.next_entry::<String, Option<Decimal>>()? {
                    map.insert(key, value.unwrap_or_default());
                }
                Ok(map)
            }

            fn visit_unit<E: serde::de::Error>(self) -> Result<Breakdown, E> {
                Ok(Breakdown::new())
            }
        }

        deserializer.deserialize_any(BreakdownVisitor)
    }
}

/// Server-computed totals for one business day
///
/// Consumed verbatim; net sales is `total_amount`. The four payment channels
/// partition net sales (modulo rounding).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_amount: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_discount: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_table_discount: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_complimentary_amount: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_vat: Decimal,
    /// Supplementary duty
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_sd: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cash_payments: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub card_payments: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mobile_payments: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bank_payments: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_guest_count: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sales_by_order_type: Breakdown,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sales_by_delivery_provider: Breakdown,
}

impl OrderSummary {
    /// Net sales (the server's `totalAmount`)
    #[inline]
    pub fn net_sales(&self) -> Decimal {
        self.total_amount
    }

    /// Sum of the four payment channels
    pub fn payments_total(&self) -> Decimal {
        self.cash_payments + self.card_payments + self.mobile_payments + self.bank_payments
    }

    /// Net sales minus the payment channels; zero when reconciled
    pub fn unreconciled_payments(&self) -> Decimal {
        self.net_sales() - self.payments_total()
    }
}

/// One line item of an order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub product_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub qty: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rate: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subtotal: Decimal,
    /// Complimentary items are billed at zero but their quantity counts
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_complimentary: bool,
}

impl OrderLineItem {
    /// Subtotal as billed (zero for complimentary items)
    pub fn billed_subtotal(&self) -> Decimal {
        if self.is_complimentary {
            Decimal::ZERO
        } else {
            self.subtotal
        }
    }
}

/// One transaction in the day's order list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub invoice_serial: String,
    /// Server timestamp, passed through as sent
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_provider: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub products: Vec<OrderLineItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub discount: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vat: Decimal,
    /// Supplementary duty
    #[serde(default, deserialize_with = "null_as_default")]
    pub sd: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_amount: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment_method: String,
}

impl Order {
    /// Table for dine-in, provider for delivery, whichever is present
    pub fn reference(&self) -> &str {
        self.table_name
            .as_deref()
            .or(self.delivery_provider.as_deref())
            .unwrap_or("")
    }

    /// Total quantity including complimentary items
    pub fn item_qty(&self) -> u64 {
        self.products.iter().map(|p| p.qty as u64).sum()
    }

    /// Sum of billed line subtotals
    pub fn items_subtotal(&self) -> Decimal {
        self.products.iter().map(OrderLineItem::billed_subtotal).sum()
    }
}

/// Response of the per-day invoice endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyInvoiceReport {
    #[serde(default, deserialize_with = "null_as_default")]
    pub orders: Vec<Order>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_orders: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_qty: u64,
    #[serde(flatten)]
    pub summary: OrderSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_keeps_server_order() {
        let json = r#"{"takeaway":50,"dine-in":0,"delivery":25.5}"#;
        let map: Breakdown = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["takeaway", "dine-in", "delivery"]);

        let non_zero: Vec<&str> = map.non_zero().map(|(k, _)| k).collect();
        assert_eq!(non_zero, vec!["takeaway", "delivery"]);
        assert_eq!(map.total(), Decimal::new(755, 1));

        assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"takeaway":50.0,"dine-in":0.0,"delivery":25.5}"#);
    }

    #[test]
    fn test_breakdown_null_amount_is_zero() {
        let map: Breakdown = serde_json::from_str(r#"{"pathao":null}"#).unwrap();
        assert_eq!(map.get("pathao"), Some(Decimal::ZERO));
    }

    #[test]
    fn test_breakdown_insert_and_add() {
        let mut map = Breakdown::new();
        map.add("dine-in", Decimal::from(10));
        map.add("takeaway", Decimal::from(5));
        map.add("dine-in", Decimal::from(2));
        assert_eq!(map.get("dine-in"), Some(Decimal::from(12)));
        map.insert("takeaway", Decimal::ZERO);
        assert_eq!(map.len(), 2);
        assert_eq!(map.iter().next().unwrap().0, "dine-in");
    }

    #[test]
    fn test_summary_defaults_missing_fields() {
        let summary: OrderSummary =
            serde_json::from_str(r#"{"totalAmount":1000,"totalVat":null}"#).unwrap();
        assert_eq!(summary.total_amount, Decimal::from(1000));
        assert_eq!(summary.total_vat, Decimal::ZERO);
        assert_eq!(summary.total_guest_count, 0);
        assert!(summary.sales_by_order_type.is_empty());
    }

    #[test]
    fn test_unreconciled_payments() {
        let summary = OrderSummary {
            total_amount: Decimal::from(1000),
            cash_payments: Decimal::from(600),
            card_payments: Decimal::from(350),
            ..Default::default()
        };
        assert_eq!(summary.unreconciled_payments(), Decimal::from(50));
    }

    #[test]
    fn test_daily_report_flattens_summary() {
        let json = r#"{
            "orders": [{
                "invoiceSerial": "INV-001",
                "dateTime": "2024-03-09T12:30:00Z",
                "orderType": "dine-in",
                "tableName": "T1",
                "products": [
                    {"productName": "Biryani", "qty": 2, "rate": 250, "subtotal": 500},
                    {"productName": "Borhani", "qty": 1, "rate": 80, "subtotal": 80, "isComplimentary": true}
                ],
                "totalAmount": 500,
                "paymentMethod": "cash"
            }],
            "totalOrders": 1,
            "totalQty": 3,
            "totalAmount": 500,
            "totalGuestCount": 2,
            "salesByOrderType": {"dine-in": 500}
        }"#;
        let report: DailyInvoiceReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.total_orders, 1);
        assert_eq!(report.summary.total_amount, Decimal::from(500));
        assert_eq!(report.summary.total_guest_count, 2);

        let order = &report.orders[0];
        assert_eq!(order.reference(), "T1");
        assert_eq!(order.item_qty(), 3);
        assert_eq!(order.items_subtotal(), Decimal::from(500));
    }
}
