//! 报表导出 (xlsx / pdf)
//!
//! Both exporters are synchronous pure functions of a [`ReportContext`]
//! returning bytes. [`export_to_dir`] renders first and only then writes, so a
//! failed render leaves nothing on disk.

pub mod pdf;
pub mod xlsx;

use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::core::{AdminError, AdminResult};
use crate::report::ReportContext;

pub use pdf::{pdf_summary_lines, render_pdf};
pub use xlsx::{Cell, SheetRow, render_xlsx, summary_pairs};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Xlsx, ExportFormat::Pdf];

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn render(&self, ctx: &ReportContext) -> AdminResult<Vec<u8>> {
        match self {
            ExportFormat::Xlsx => render_xlsx(ctx),
            ExportFormat::Pdf => render_pdf(ctx),
        }
    }
}

/// `SalesReport_{YYYY-MM-DD}.{ext}`
pub fn export_file_name(ctx: &ReportContext, format: ExportFormat) -> String {
    format!("{}.{}", ctx.file_stem(), format.extension())
}

/// Render and write one export into `dir`, returning the written path
#[instrument(skip(ctx), fields(date = %ctx.date_label()))]
pub fn export_to_dir(ctx: &ReportContext, dir: &Path, format: ExportFormat) -> AdminResult<PathBuf> {
    let bytes = format.render(ctx)?;

    let write_err = |path: &Path, source: std::io::Error| AdminError::ExportWrite {
        path: path.to_path_buf(),
        source,
    };
    std::fs::create_dir_all(dir).map_err(|e| write_err(dir, e))?;
    let path = dir.join(export_file_name(ctx, format));
    std::fs::write(&path, &bytes).map_err(|e| write_err(&path, e))?;

    info!(path = %path.display(), bytes = bytes.len(), "Report exported");
    Ok(path)
}
