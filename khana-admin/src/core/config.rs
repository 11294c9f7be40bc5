use khana_client::ClientConfig;
use khana_printer::{NetworkPrinter, PrintService, SpoolPrinter};
use shared::models::{CompanyInfo, UserRole};
use std::path::PathBuf;

use super::error::{AdminError, AdminResult};

/// Admin console configuration
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | KHANA_API_URL | http://localhost:5000/api | 远程 API 地址 |
/// | KHANA_BRANCH | (empty) | 当前门店 |
/// | KHANA_TOKEN | - | Bearer token |
/// | KHANA_USER_ID / KHANA_USER_NAME / KHANA_USER_EMAIL | (empty) | 登录用户 |
/// | KHANA_USER_ROLE | user | 登录用户角色 |
/// | KHANA_COMPANY_NAME / _ADDRESS / _PHONE / _VAT_REG | (empty) | 报表抬头 |
/// | KHANA_EXPORT_DIR | ./exports | 导出目录 |
/// | KHANA_SPOOL_DIR | $TMPDIR/khana-spool | 打印缓冲目录 |
/// | KHANA_PRINT_COMMAND | - | 系统打印命令 (e.g. `lp -d receipt`) |
/// | KHANA_PRINTER_ADDR | - | 网络打印机 host:port |
/// | KHANA_REQUEST_TIMEOUT_SECS | 30 | 请求超时(秒) |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | JSON 日志 |
/// | LOG_DIR | - | 日志文件目录 (按天滚动) |
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub api_url: String,
    pub branch: String,
    pub token: Option<String>,
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub user_role: UserRole,
    /// Header of printed and exported reports
    pub company: CompanyInfo,
    pub export_dir: PathBuf,
    pub spool_dir: PathBuf,
    pub print_command: Option<String>,
    /// Network printer `host:port`; takes precedence over the spool printer
    pub printer_addr: Option<String>,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
}

fn env_opt(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.trim().is_empty())
}

fn env_or(name: &str, default: &str) -> String {
    env_opt(name).unwrap_or_else(|| default.to_string())
}

impl AdminConfig {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            api_url: env_or("KHANA_API_URL", "http://localhost:5000/api"),
            branch: env_or("KHANA_BRANCH", ""),
            token: env_opt("KHANA_TOKEN"),
            user_id: env_or("KHANA_USER_ID", ""),
            user_name: env_or("KHANA_USER_NAME", ""),
            user_email: env_or("KHANA_USER_EMAIL", ""),
            user_role: UserRole::parse(&env_or("KHANA_USER_ROLE", "user")),
            company: CompanyInfo {
                name: env_or("KHANA_COMPANY_NAME", ""),
                address: env_or("KHANA_COMPANY_ADDRESS", ""),
                phone: env_or("KHANA_COMPANY_PHONE", ""),
                email: env_opt("KHANA_COMPANY_EMAIL"),
                vat_reg_no: env_or("KHANA_COMPANY_VAT_REG", ""),
            },
            export_dir: env_opt("KHANA_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./exports")),
            spool_dir: env_opt("KHANA_SPOOL_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join("khana-spool")),
            print_command: env_opt("KHANA_PRINT_COMMAND"),
            printer_addr: env_opt("KHANA_PRINTER_ADDR"),
            request_timeout_secs: env_opt("KHANA_REQUEST_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            log_level: env_or("LOG_LEVEL", "info"),
            log_json: env_opt("LOG_JSON").is_some_and(|s| parse_bool(&s)),
            log_dir: env_opt("LOG_DIR"),
        }
    }

    /// HTTP client settings for the remote API
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.api_url.clone()).with_timeout(self.request_timeout_secs);
        match &self.token {
            Some(token) => config.with_token(token.clone()),
            None => config,
        }
    }

    /// Network printer when an address is configured, spool printer otherwise
    pub fn print_service(&self) -> AdminResult<Box<dyn PrintService>> {
        if let Some(addr) = &self.printer_addr {
            return Ok(Box::new(NetworkPrinter::from_addr(addr)?));
        }
        let spool = SpoolPrinter::new(self.spool_dir.clone());
        match &self.print_command {
            Some(cmd) => Ok(Box::new(spool.with_command(cmd)?)),
            None => Ok(Box::new(spool)),
        }
    }

    /// Branch every report and user call is scoped to
    pub fn require_branch(&self) -> AdminResult<&str> {
        if self.branch.trim().is_empty() {
            return Err(AdminError::Config(
                "No branch configured (set KHANA_BRANCH or --branch)".into(),
            ));
        }
        Ok(self.branch.trim())
    }
}

fn parse_bool(s: &str) -> bool {
    matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AdminConfig {
        AdminConfig {
            api_url: "http://localhost:5000/api".into(),
            branch: " gulshan ".into(),
            token: Some("t0ken".into()),
            user_id: "u1".into(),
            user_name: "Ayesha".into(),
            user_email: "a@khana.test".into(),
            user_role: UserRole::Admin,
            company: CompanyInfo::default(),
            export_dir: PathBuf::from("./exports"),
            spool_dir: std::env::temp_dir().join("khana-spool-test"),
            print_command: None,
            printer_addr: None,
            request_timeout_secs: 7,
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
        }
    }

    #[test]
    fn test_client_config_carries_token_and_timeout() {
        let cc = config().client_config();
        assert_eq!(cc.token.as_deref(), Some("t0ken"));
        assert_eq!(cc.timeout, 7);
    }

    #[test]
    fn test_require_branch() {
        assert_eq!(config().require_branch().unwrap(), "gulshan");
        let mut c = config();
        c.branch = "  ".into();
        assert!(matches!(c.require_branch(), Err(AdminError::Config(_))));
    }

    #[test]
    fn test_print_service_selection() {
        let mut c = config();
        assert_eq!(c.print_service().unwrap().name(), "spool");
        c.printer_addr = Some("127.0.0.1:9100".into());
        assert_eq!(c.print_service().unwrap().name(), "network");
        c.printer_addr = Some("not an address".into());
        assert!(c.print_service().is_err());
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("TRUE"));
        assert!(parse_bool("1"));
        assert!(!parse_bool("no"));
    }
}
