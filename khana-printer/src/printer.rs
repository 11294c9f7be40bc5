//! Print services
//!
//! Printing is "render a [`PrintDocument`], submit it to a [`PrintService`]".
//! Supports:
//! - Network printers (raw ESC/POS over TCP port 9100)
//! - Spool directory (HTML page handed to a system print command)
//! - In-memory capture (tests, dry runs)

use crate::document::PrintDocument;
use crate::error::{PrintError, PrintResult};
use async_trait::async_trait;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

/// Default delay before a spooled page is torn down
pub const DEFAULT_TEARDOWN_DELAY: Duration = Duration::from_secs(1);

/// A destination for rendered documents
#[async_trait]
pub trait PrintService: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Submit a document; errors are always surfaced to the caller
    async fn submit(&self, doc: &PrintDocument) -> PrintResult<()>;

    /// Check if the destination is reachable
    async fn is_online(&self) -> bool;
}

// ============================================================================
// Network printer
// ============================================================================

/// Network printer (TCP port 9100)
///
/// Most thermal printers support raw TCP printing on port 9100.
#[derive(Debug, Clone)]
pub struct NetworkPrinter {
    addr: SocketAddr,
    timeout: Duration,
}

impl NetworkPrinter {
    /// Create a new network printer
    pub fn new(host: &str, port: u16) -> PrintResult<Self> {
        Self::from_addr(&format!("{}:{}", host, port))
    }

    /// Create from a socket address string (e.g., "192.168.1.100:9100")
    ///
    /// Port 9100 is assumed when the string has no port.
    pub fn from_addr(addr: &str) -> PrintResult<Self> {
        let addr_str = if addr.contains(':') {
            addr.to_string()
        } else {
            format!("{}:9100", addr)
        };
        let addr: SocketAddr = addr_str
            .parse()
            .map_err(|_| PrintError::InvalidConfig(format!("Invalid address: {}", addr_str)))?;

        Ok(Self {
            addr,
            timeout: Duration::from_secs(5),
        })
    }

    /// Set connection timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the printer address
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Send raw ESC/POS data to the printer
    #[instrument(skip(data), fields(addr = %self.addr, data_len = data.len()))]
    pub async fn print_raw(&self, data: &[u8]) -> PrintResult<()> {
        info!("Connecting to printer");

        let mut stream = tokio::time::timeout(self.timeout, TcpStream::connect(self.addr))
            .await
            .map_err(|_| PrintError::Timeout(format!("Connection timeout: {}", self.addr)))?
            .map_err(|e| PrintError::Connection(format!("{}: {}", self.addr, e)))?;

        debug!("Connected, sending {} bytes", data.len());

        stream.write_all(data).await.map_err(|e| {
            PrintError::Io(std::io::Error::new(
                e.kind(),
                format!("Write failed: {}", e),
            ))
        })?;
        stream.flush().await?;

        info!("Print job sent successfully");
        Ok(())
    }
}

#[async_trait]
impl PrintService for NetworkPrinter {
    fn name(&self) -> &str {
        "network"
    }

    async fn submit(&self, doc: &PrintDocument) -> PrintResult<()> {
        self.print_raw(&doc.to_escpos()).await
    }

    #[instrument(fields(addr = %self.addr))]
    async fn is_online(&self) -> bool {
        let check_timeout = Duration::from_millis(500);

        match tokio::time::timeout(check_timeout, TcpStream::connect(self.addr)).await {
            Ok(Ok(_)) => {
                info!("Printer online");
                true
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Printer offline");
                false
            }
            Err(_) => {
                warn!("Printer check timeout");
                false
            }
        }
    }
}

// ============================================================================
// Spool printer
// ============================================================================

/// Spool printer
///
/// Writes the HTML rendition of a document into a spool directory, hands the
/// file to an optional system print command (e.g. `lp -d receipt`), and
/// removes the file after a fixed delay. `submit` returns only once the file
/// is gone.
#[derive(Debug, Clone)]
pub struct SpoolPrinter {
    dir: PathBuf,
    command: Option<Vec<String>>,
    teardown_delay: Duration,
}

impl SpoolPrinter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            command: None,
            teardown_delay: DEFAULT_TEARDOWN_DELAY,
        }
    }

    /// Set the print command; the spool file path is appended as last argument
    pub fn with_command(mut self, command: &str) -> PrintResult<Self> {
        let parts: Vec<String> = command.split_whitespace().map(str::to_string).collect();
        if parts.is_empty() {
            return Err(PrintError::InvalidConfig("Print command is empty".into()));
        }
        self.command = Some(parts);
        Ok(self)
    }

    pub fn with_teardown_delay(mut self, delay: Duration) -> Self {
        self.teardown_delay = delay;
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the off-screen surface: a fresh HTML file in the spool dir
    async fn create_surface(&self, doc: &PrintDocument) -> PrintResult<PathBuf> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            PrintError::SurfaceUnavailable(format!("{}: {}", self.dir.display(), e))
        })?;

        let path = self.dir.join(format!("print_{}.html", uuid::Uuid::new_v4()));
        tokio::fs::write(&path, doc.to_html())
            .await
            .map_err(|e| PrintError::SurfaceUnavailable(format!("{}: {}", path.display(), e)))?;
        Ok(path)
    }

    async fn run_command(&self, parts: &[String], path: &Path) -> PrintResult<()> {
        let (program, args) = parts
            .split_first()
            .ok_or_else(|| PrintError::InvalidConfig("Print command is empty".into()))?;

        let output = tokio::process::Command::new(program)
            .args(args)
            .arg(path)
            .output()
            .await
            .map_err(|e| PrintError::CommandFailed(format!("{}: {}", program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PrintError::CommandFailed(format!(
                "{} exited with {}: {}",
                program,
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }

    /// Remove the spool file once the teardown delay has passed
    async fn teardown(&self, path: &Path) {
        tokio::time::sleep(self.teardown_delay).await;
        match tokio::fs::remove_file(path).await {
            Ok(()) => debug!(path = %path.display(), "Spool file removed"),
            Err(e) => warn!(path = %path.display(), error = %e, "Failed to remove spool file"),
        }
    }
}

#[async_trait]
impl PrintService for SpoolPrinter {
    fn name(&self) -> &str {
        "spool"
    }

    #[instrument(skip(self, doc), fields(dir = %self.dir.display(), title = doc.title()))]
    async fn submit(&self, doc: &PrintDocument) -> PrintResult<()> {
        let path = self.create_surface(doc).await?;
        info!(path = %path.display(), "Document spooled");

        let result = match &self.command {
            Some(parts) => self.run_command(parts, &path).await,
            None => Ok(()),
        };

        // 无论命令成功与否都要清理; 在 submit 内等待, 进程退出前完成
        self.teardown(&path).await;
        result
    }

    async fn is_online(&self) -> bool {
        tokio::fs::create_dir_all(&self.dir).await.is_ok()
    }
}

// ============================================================================
// Memory printer
// ============================================================================

/// Records submitted documents instead of printing them
#[derive(Debug, Clone, Default)]
pub struct MemoryPrinter {
    jobs: Arc<Mutex<Vec<PrintDocument>>>,
}

impl MemoryPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents submitted so far, oldest first
    pub async fn jobs(&self) -> Vec<PrintDocument> {
        self.jobs.lock().await.clone()
    }
}

#[async_trait]
impl PrintService for MemoryPrinter {
    fn name(&self) -> &str {
        "memory"
    }

    async fn submit(&self, doc: &PrintDocument) -> PrintResult<()> {
        self.jobs.lock().await.push(doc.clone());
        Ok(())
    }

    async fn is_online(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_printer_address() {
        let p = NetworkPrinter::from_addr("192.168.1.50").unwrap();
        assert_eq!(p.addr().port(), 9100);
        let p = NetworkPrinter::new("10.0.0.2", 9101).unwrap();
        assert_eq!(p.addr().port(), 9101);
        assert!(matches!(
            NetworkPrinter::from_addr("not an address"),
            Err(PrintError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_spool_command_parsing() {
        let p = SpoolPrinter::new("/tmp/spool").with_command("lp -d receipt").unwrap();
        assert_eq!(
            p.command,
            Some(vec!["lp".to_string(), "-d".to_string(), "receipt".to_string()])
        );
        assert!(SpoolPrinter::new("/tmp/spool").with_command("  ").is_err());
    }

    #[tokio::test]
    async fn test_memory_printer_records_jobs() {
        let printer = MemoryPrinter::new();
        let mut doc = PrintDocument::new("Test", 48);
        doc.text("hello");
        printer.submit(&doc).await.unwrap();
        let jobs = printer.jobs().await;
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title(), "Test");
    }
}
