use chrono::NaiveDate;
use khana_client::{AdminApi, HttpClient};
use shared::util::format_report_date;
use std::path::Path;

use crate::core::{AdminConfig, AdminResult};
use crate::export::{ExportFormat, export_to_dir};
use crate::report::{ReportContext, build_view, print_report, render_order_table, render_summary_grid};

/// Fetch one business day and wrap it for the renderers
pub async fn load_report<C: HttpClient>(
    api: &AdminApi<C>,
    config: &AdminConfig,
    date: NaiveDate,
) -> AdminResult<ReportContext> {
    let branch = config.require_branch()?;
    let report = api.daily_invoices(branch, &format_report_date(date)).await?;
    Ok(ReportContext::new(report, config.company.clone(), date))
}

pub fn show(ctx: &ReportContext) -> String {
    let view = build_view(&ctx.summary, &ctx.orders);
    format!(
        "{}  {}\n\n{}{}",
        ctx.company_name(),
        ctx.date_label(),
        render_summary_grid(&view),
        render_order_table(&ctx.orders)
    )
}

pub async fn print(ctx: &ReportContext, config: &AdminConfig) -> AdminResult<String> {
    let service = config.print_service()?;
    print_report(service.as_ref(), ctx).await?;
    Ok(format!("Report for {} sent to {} printer", ctx.date_label(), service.name()))
}

pub fn export(ctx: &ReportContext, dir: &Path, formats: &[ExportFormat]) -> AdminResult<String> {
    let mut lines = Vec::with_capacity(formats.len());
    for format in formats {
        let path = export_to_dir(ctx, dir, *format)?;
        lines.push(format!("Exported {}", path.display()));
    }
    Ok(lines.join("\n"))
}
