use chrono::{DateTime, NaiveDate};
use shared::models::{CompanyInfo, DailyInvoiceReport, Order, OrderSummary};
use shared::util::format_report_date;

/// Everything a renderer needs for one business day
#[derive(Debug, Clone, PartialEq)]
pub struct ReportContext {
    pub orders: Vec<Order>,
    pub summary: OrderSummary,
    pub company: CompanyInfo,
    pub date: NaiveDate,
}

impl ReportContext {
    pub fn new(report: DailyInvoiceReport, company: CompanyInfo, date: NaiveDate) -> Self {
        Self {
            orders: report.orders,
            summary: report.summary,
            company,
            date,
        }
    }

    /// `YYYY-MM-DD`
    pub fn date_label(&self) -> String {
        format_report_date(self.date)
    }

    /// File stem shared by both exporters: `SalesReport_YYYY-MM-DD`
    pub fn file_stem(&self) -> String {
        format!("SalesReport_{}", self.date_label())
    }

    /// Company name, or a generic title when none is configured
    pub fn company_name(&self) -> &str {
        let name = self.company.name.trim();
        if name.is_empty() { "Sales Report" } else { name }
    }
}

/// `HH:MM` of an RFC 3339 order timestamp; other formats pass through
pub fn order_time(date_time: &str) -> String {
    match DateTime::parse_from_rfc3339(date_time) {
        Ok(dt) => dt.format("%H:%M").to_string(),
        Err(_) => date_time.to_string(),
    }
}
