//! Subcommand handlers
//!
//! Each handler returns the text to print on success.

pub mod report;
pub mod users;
pub mod wizard;

use chrono::Local;
use khana_client::{AdminApi, HttpClient};

use crate::cli::{Command, ReportCommand, WizardCommand};
use crate::core::{AdminConfig, AdminResult, SessionContext};
use crate::dashboard::{build_dashboard, render_dashboard};
use crate::users::UserService;

/// Build the network client from `config` and run `command`
pub async fn run(command: Command, config: &AdminConfig) -> AdminResult<String> {
    let http = config.client_config().build_http_client()?;
    let api = AdminApi::new(http);
    execute(&api, command, config).await
}

/// Run `command` against any client
pub async fn execute<C: HttpClient>(
    api: &AdminApi<C>,
    command: Command,
    config: &AdminConfig,
) -> AdminResult<String> {
    let session = SessionContext::from_config(config);
    tracing::debug!(user = %session.user_id, role = %session.role, "Running command");

    match command {
        Command::Report(cmd) => {
            let date = match &cmd {
                ReportCommand::Show { date }
                | ReportCommand::Print { date }
                | ReportCommand::Export { date, .. } => {
                    date.unwrap_or_else(|| Local::now().date_naive())
                }
            };
            let ctx = report::load_report(api, config, date).await?;
            match cmd {
                ReportCommand::Show { .. } => Ok(report::show(&ctx)),
                ReportCommand::Print { .. } => report::print(&ctx, config).await,
                ReportCommand::Export { format, out, .. } => {
                    let dir = out.unwrap_or_else(|| config.export_dir.clone());
                    report::export(&ctx, &dir, &format.formats())
                }
            }
        }
        Command::Dashboard => {
            let summary = api.dashboard(config.require_branch()?).await?;
            Ok(render_dashboard(&build_dashboard(&summary)))
        }
        Command::Users(cmd) => {
            let service = UserService::new(api, &session);
            users::run(&service, cmd).await
        }
        Command::Wizard(WizardCommand::Submit { payload }) => {
            let payload = wizard::read_payload(&payload)?;
            wizard::submit(api, config, payload).await
        }
    }
}
