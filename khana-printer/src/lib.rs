//! # khana-printer
//!
//! Receipt printing library - low-level printing capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - ESC/POS command building
//! - Windows-1252 code page conversion and column width helpers
//! - A line-based [`PrintDocument`] with ESC/POS, HTML and plain-text output
//! - Print services: network (TCP port 9100), spool directory, memory
//!
//! Business logic (WHAT to print) stays in application code: the daily
//! sales summary is rendered by `khana-admin`.
//!
//! ## Example
//!
//! ```ignore
//! use khana_printer::{NetworkPrinter, PrintDocument, PrintService, RECEIPT_WIDTH};
//!
//! let mut doc = PrintDocument::new("Daily Sales Summary", RECEIPT_WIDTH);
//! doc.heading("Khana Kitchen");
//! doc.sep('=');
//! doc.pair("Net Sales", "1,000.00");
//!
//! let printer = NetworkPrinter::from_addr("192.168.1.100:9100")?;
//! printer.submit(&doc).await?;
//! ```

mod document;
mod encoding;
mod error;
mod escpos;
mod printer;

/// Characters per line on a 72mm printable area (80mm paper)
pub const RECEIPT_WIDTH: usize = 48;

// Re-exports
pub use document::{Align, PrintDocument, PrintLine, layout_pair};
pub use encoding::{convert_to_codepage, pad_width, text_width, truncate_width, wrap_width};
pub use error::{PrintError, PrintResult};
pub use escpos::EscPosBuilder;
pub use printer::{DEFAULT_TEARDOWN_DELAY, MemoryPrinter, NetworkPrinter, PrintService, SpoolPrinter};
