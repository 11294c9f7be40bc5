use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::AdminConfig;
use crate::export::ExportFormat;

#[derive(Parser, Debug, Clone)]
#[command(name = "khana-admin")]
#[command(about = "Restaurant branch admin console: sales reports, dashboard, users, branch setup")]
#[command(version)]
pub struct Cli {
    /// Base URL of the restaurant API
    #[arg(long, global = true, env = "KHANA_API_URL")]
    pub api_url: Option<String>,

    /// Branch to operate on
    #[arg(long, short = 'b', global = true, env = "KHANA_BRANCH")]
    pub branch: Option<String>,

    /// Bearer token
    #[arg(long, global = true, env = "KHANA_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Daily sales report
    #[command(subcommand)]
    Report(ReportCommand),

    /// Sales dashboard
    Dashboard,

    /// User management
    #[command(subcommand)]
    Users(UsersCommand),

    /// Branch setup wizard
    #[command(subcommand)]
    Wizard(WizardCommand),
}

#[derive(Subcommand, Debug, Clone)]
pub enum ReportCommand {
    /// Print the summary grid and order list
    Show {
        /// Business day (YYYY-MM-DD), defaults to today
        #[arg(long, short = 'd')]
        date: Option<NaiveDate>,
    },
    /// Send the summary to the configured printer
    Print {
        #[arg(long, short = 'd')]
        date: Option<NaiveDate>,
    },
    /// Write SalesReport_{date}.xlsx / .pdf
    Export {
        #[arg(long, short = 'd')]
        date: Option<NaiveDate>,
        #[arg(long, short = 'f', value_enum, default_value_t = FormatArg::Both)]
        format: FormatArg,
        /// Output directory (defaults to KHANA_EXPORT_DIR)
        #[arg(long, short = 'o', value_name = "DIR")]
        out: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Xlsx,
    Pdf,
    Both,
}

impl FormatArg {
    pub fn formats(&self) -> Vec<ExportFormat> {
        match self {
            FormatArg::Xlsx => vec![ExportFormat::Xlsx],
            FormatArg::Pdf => vec![ExportFormat::Pdf],
            FormatArg::Both => ExportFormat::ALL.to_vec(),
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum UsersCommand {
    /// List users of the branch
    List {
        #[arg(long, default_value = "1")]
        page: u32,
        #[arg(long, default_value = "10")]
        limit: u32,
        #[arg(long, short = 's')]
        search: Option<String>,
    },
    /// Show one user
    Get { id: String },
    /// Create a user
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "user")]
        role: String,
        /// Defaults to the current branch
        #[arg(long = "user-branch")]
        user_branch: Option<String>,
    },
    /// Update fields of a user
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete a user
    Delete { id: String },
}

#[derive(Subcommand, Debug, Clone)]
pub enum WizardCommand {
    /// Validate a setup payload step by step and submit it
    Submit {
        #[arg(value_name = "PAYLOAD_JSON")]
        payload: PathBuf,
    },
}

impl Cli {
    /// Flags win over the environment-loaded config
    pub fn apply_to(&self, config: &mut AdminConfig) {
        if let Some(url) = &self.api_url {
            config.api_url = url.clone();
        }
        if let Some(branch) = &self.branch {
            config.branch = branch.trim().to_string();
        }
        if let Some(token) = &self.token {
            config.token = Some(token.clone());
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
    }
}
