//! Daily sales receipt renderer
//!
//! Lays the view model out as a fixed-width [`PrintDocument`] and hands it to
//! a [`PrintService`]. Formatting never touches a printer, so the receipt can
//! be checked as plain text.

use khana_printer::{PrintDocument, PrintService, RECEIPT_WIDTH};
use tracing::{info, instrument};

use super::aggregate::{ReportView, build_view};
use super::context::ReportContext;
use crate::core::AdminResult;

pub const RECEIPT_TITLE: &str = "DAILY SALES SUMMARY";

/// Receipt renderer
pub struct ReportPrintRenderer {
    width: usize,
}

impl Default for ReportPrintRenderer {
    fn default() -> Self {
        Self::new(RECEIPT_WIDTH)
    }
}

impl ReportPrintRenderer {
    /// Common widths:
    /// - 58mm paper: 32 characters
    /// - 80mm paper: 48 characters
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn render(&self, ctx: &ReportContext) -> PrintDocument {
        let view = build_view(&ctx.summary, &ctx.orders);
        let mut doc = PrintDocument::new(format!("{} {}", ctx.file_stem(), RECEIPT_TITLE), self.width);

        self.render_header(&mut doc, ctx);
        self.render_sections(&mut doc, &view);
        self.render_footer(&mut doc);
        doc
    }

    fn render_header(&self, doc: &mut PrintDocument, ctx: &ReportContext) {
        doc.heading(ctx.company_name());
        for line in ctx.company.contact_lines() {
            doc.centered(line);
        }
        doc.sep('=');
        doc.push_text(RECEIPT_TITLE, khana_printer::Align::Center, true, false);
        doc.centered(format!("Date: {}", ctx.date_label()));
        doc.sep('=');
    }

    fn render_sections(&self, doc: &mut PrintDocument, view: &ReportView) {
        for section in view.sections() {
            doc.bold_text(section.title);
            for row in &section.rows {
                if row.label == "Net Sales" {
                    doc.pair_bold(row.label.as_str(), row.value.display());
                } else {
                    doc.pair(row.label.as_str(), row.value.display());
                }
            }
            doc.sep('-');
        }
    }

    fn render_footer(&self, doc: &mut PrintDocument) {
        doc.centered("*** End of Report ***");
    }
}

/// Render the day's summary and submit it to `service`
#[instrument(skip_all, fields(service = service.name(), date = %ctx.date_label()))]
pub async fn print_report(service: &dyn PrintService, ctx: &ReportContext) -> AdminResult<()> {
    let doc = ReportPrintRenderer::default().render(ctx);
    service.submit(&doc).await?;
    info!(lines = doc.lines().len(), "Report printed");
    Ok(())
}
