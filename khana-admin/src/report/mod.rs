//! 日结报表
//!
//! ```text
//! DailyInvoiceReport ─┐
//!                     ├─▶ ReportContext ─▶ build_view ─┬─▶ screen  (终端表格)
//! CompanyInfo + date ─┘                                ├─▶ print   (小票)
//!                                                      └─▶ export  (xlsx / pdf)
//! ```

pub mod aggregate;
pub mod context;
pub mod labels;
pub mod print;
pub mod screen;

pub use aggregate::{DerivedTotals, Figure, ReportView, SummaryRow, SummarySection, build_view, derive_totals};
pub use context::ReportContext;
pub use labels::label_for;
pub use print::{ReportPrintRenderer, print_report};
pub use screen::{render_order_table, render_summary_grid};
