use clap::Parser;
use khana_admin::{AdminConfig, Cli, commands, init_logger_with_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = AdminConfig::from_env();
    cli.apply_to(&mut config);

    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;
    tracing::debug!(api = %config.api_url, branch = %config.branch, "Configuration loaded");

    let output = commands::run(cli.command, &config).await?;
    println!("{}", output);
    Ok(())
}
