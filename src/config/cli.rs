use crate::config::toml_config::TomlConfig;
use crate::domain::model::OutputFormat;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "part-compare")]
#[command(about = "Compare part prices across data providers and build a cart")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Pricing service endpoint (overrides the config file)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds (overrides the config file)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Part number to search for
    #[arg(short, long)]
    pub part_number: Option<String>,

    /// Quantity to price the part at
    #[arg(short = 'n', long)]
    pub volume: Option<String>,

    /// Add this result row (1-based) to the cart after searching
    #[arg(long)]
    pub add: Option<usize>,

    /// Read commands from stdin after the initial search
    #[arg(short, long)]
    pub interactive: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 載入配置檔 (若有指定) 並套用命令列覆蓋設定
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            config.service.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.service.timeout_seconds = Some(timeout);
        }
        if let Some(format) = self.format {
            config.display.format = Some(format);
        }
        if self.log_json {
            config.logging.json = Some(true);
        }

        Ok(config)
    }
}
