use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bizlens")]
#[command(about = "Business-intelligence chat over the research and CSV-analysis agents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive chat console
    Console {
        /// Chat against the CSV-analysis backend instead of the research backend
        #[arg(long)]
        csv: bool,

        /// CSV file to upload when starting in CSV mode
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// One-shot comprehensive research for a business in a location
    Research {
        /// Type of business, e.g. "coffee shop"
        business_type: String,

        /// City or location, e.g. "Mumbai"
        location: String,

        /// Include the backend's raw scraped data in the response
        #[arg(long)]
        raw_data: bool,

        /// Ask the backend to skip its result cache
        #[arg(long)]
        no_cache: bool,
    },

    /// Ranked business opportunities for a city
    Opportunities {
        /// City to analyze
        city: String,

        /// Maximum number of opportunities to return
        #[arg(long, default_value_t = 5)]
        max: u32,

        /// Skip the per-opportunity detailed analysis
        #[arg(long)]
        no_analysis: bool,
    },

    /// Raw scraped market data for a business in a location
    Scraped {
        business_type: String,
        location: String,
    },

    /// Upload a CSV and print the initial analysis
    Upload {
        /// Path to the CSV file
        file: PathBuf,
    },

    /// Check that both backends are reachable
    Health,
}
