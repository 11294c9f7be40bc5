//! Invoice API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{DailyInvoiceReport, DashboardSummary};
use shared::util::parse_report_date;
use shared::{AppError, AppResult, ErrorCode};

use crate::state::MockState;

/// Orders and summary for one business day (empty report when nothing sold)
pub async fn daily(
    State(state): State<MockState>,
    Path((branch, date)): Path<(String, String)>,
) -> AppResult<Json<DailyInvoiceReport>> {
    if parse_report_date(&date).is_none() {
        return Err(AppError::new(ErrorCode::ReportDateInvalid).with_detail("date", date));
    }
    let store = state.store().read().await;
    let report = store
        .invoices
        .get(&(branch, date))
        .cloned()
        .unwrap_or_default();
    Ok(Json(report))
}

/// Dashboard summary of a branch
pub async fn dashboard(
    State(state): State<MockState>,
    Path(branch): Path<String>,
) -> AppResult<Json<DashboardSummary>> {
    let store = state.store().read().await;
    Ok(Json(store.dashboards.get(&branch).cloned().unwrap_or_default()))
}
