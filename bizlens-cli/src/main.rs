mod cli;
mod config;
mod console;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use bizlens_gateway::csv::CsvClient;
use bizlens_gateway::research::{OpportunityOptions, ResearchClient, ResearchOptions};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Commands::Console { csv: false, .. } => console::run_research_console(&config).await,
        Commands::Console { csv: true, file } => console::run_csv_console(&config, file).await,

        Commands::Research { business_type, location, raw_data, no_cache } => {
            let client = ResearchClient::new(config.research)?;
            let options = ResearchOptions { include_raw_data: raw_data, use_cache: !no_cache };
            let report = client.comprehensive_research(&business_type, &location, &options).await?;
            render::research_report(&report);
            Ok(())
        }

        Commands::Opportunities { city, max, no_analysis } => {
            let client = ResearchClient::new(config.research)?;
            let options =
                OpportunityOptions { include_analysis: !no_analysis, max_opportunities: max };
            let report = client.city_opportunities(&city, &options).await?;
            render::opportunities(&report);
            Ok(())
        }

        Commands::Scraped { business_type, location } => {
            let client = ResearchClient::new(config.research)?;
            let data = client.raw_scraped_data(&business_type, &location).await?;
            render::json(&data);
            Ok(())
        }

        Commands::Upload { file } => {
            let client = CsvClient::new(config.csv)?;
            let file_name =
                file.file_name().and_then(|n| n.to_str()).unwrap_or("upload.csv").to_string();
            let bytes = std::fs::read(&file)?;
            let analysis = client.upload_csv(&file_name, bytes).await?;
            render::csv_analysis(&analysis);
            if let Some(session) = analysis.get("session_id").and_then(|s| s.as_str()) {
                println!("Session: {session}");
            }
            Ok(())
        }

        Commands::Health => {
            let research = ResearchClient::new(config.research)?;
            let csv = CsvClient::new(config.csv)?;

            match research.health().await {
                Ok(_) => println!("research backend ok ({})", research.base_url()),
                Err(e) => println!("research backend DOWN: {e}"),
            }
            match csv.health().await {
                Ok(_) => println!("CSV backend ok ({})", csv.base_url()),
                Err(e) => println!("CSV backend DOWN: {e}"),
            }
            Ok(())
        }
    }
}
