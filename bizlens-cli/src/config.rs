use bizlens_gateway::{CsvConfig, ResearchConfig};

/// Backend addresses for one CLI invocation.
///
/// Read once from the environment (`BIZLENS_RESEARCH_URL`,
/// `BIZLENS_CSV_URL`), falling back to the localhost defaults.
pub struct Config {
    pub research: ResearchConfig,
    pub csv: CsvConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self { research: ResearchConfig::from_env(), csv: CsvConfig::from_env() }
    }
}
