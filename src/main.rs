use clap::Parser;
use portfolio_data::utils::logger;
use portfolio_data::{CliConfig, Portfolio, SheetsClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting portfolio-data CLI");

    let config = match cli.into_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    if !config.has_credentials() {
        tracing::warn!("No Sheets credentials configured, serving placeholder content");
    }

    let client = SheetsClient::new(config.clone());
    let portfolio = Portfolio::new(client, &config);

    let data = portfolio.fetch_all().await;
    println!("{}", serde_json::to_string_pretty(&data)?);

    for (category, origin) in portfolio.status() {
        tracing::info!("{:?} served from {:?}", category, origin);
    }

    Ok(())
}
