use crate::core::render::{OutputFormat, RenderOptions, DEFAULT_DATE_FORMAT};
use crate::core::report::DEFAULT_TOP_LIMIT;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_date_format, validate_inventory_path, validate_top_count, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "pallet-report")]
#[command(about = "Reports warehouse pallets by expiration date and volume")]
pub struct CliConfig {
    /// TOML inventory file; the built-in sample inventory is used when omitted
    #[arg(long)]
    pub inventory: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Number of latest-expiring pallets in the second report
    #[arg(long, default_value_t = DEFAULT_TOP_LIMIT)]
    pub top: usize,

    /// strftime format for dates in text output
    #[arg(long, default_value = DEFAULT_DATE_FORMAT)]
    pub date_format: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            format: self.format,
            date_format: self.date_format.clone(),
            top_limit: self.top,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_top_count(self.top)?;
        validate_date_format(&self.date_format)?;
        if let Some(path) = &self.inventory {
            validate_inventory_path(path)?;
        }
        Ok(())
    }
}
