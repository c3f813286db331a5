use crate::core::report::{PalletSummary, ReportSet};
use crate::utils::error::{Result, WarehouseError};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Write;

pub const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub date_format: String,
    /// Only used for the text heading of the top section.
    pub top_limit: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            top_limit: crate::core::report::DEFAULT_TOP_LIMIT,
        }
    }
}

pub fn render(reports: &ReportSet, options: &RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::Text => render_text(reports, options),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
        OutputFormat::Csv => render_csv(reports),
    }
}

fn format_date(date: NaiveDate, date_format: &str) -> Result<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(date_format)).map_err(|_| WarehouseError::DateFormatError {
        format: date_format.to_string(),
    })?;
    Ok(out)
}

fn render_text(reports: &ReportSet, options: &RenderOptions) -> Result<String> {
    let mut out = String::new();

    out.push_str("Pallets grouped by expiration date:\n");
    for group in &reports.grouped {
        out.push_str(&format!(
            "Expiration date: {}\n",
            format_date(group.expiration_date, &options.date_format)?
        ));
        for pallet in &group.pallets {
            out.push_str(&format!(
                "  Pallet ID: {}, Weight: {} kg, Volume: {} m³\n",
                pallet.id, pallet.weight, pallet.volume
            ));
        }
    }

    out.push_str(&format!(
        "\nTop {} pallets with the latest expiration date, sorted by volume:\n",
        options.top_limit
    ));
    for pallet in &reports.top {
        out.push_str(&format!(
            "Pallet ID: {}, Expiration date: {}, Volume: {} m³\n",
            pallet.id,
            format_date(pallet.expiration_date, &options.date_format)?,
            pallet.volume
        ));
    }

    Ok(out)
}

#[derive(Serialize)]
struct CsvRow<'a> {
    section: &'static str,
    expiration_date: NaiveDate,
    pallet_id: &'a str,
    weight: f64,
    volume: f64,
}

impl<'a> CsvRow<'a> {
    fn new(section: &'static str, pallet: &'a PalletSummary) -> Self {
        Self {
            section,
            expiration_date: pallet.expiration_date,
            pallet_id: &pallet.id,
            weight: pallet.weight,
            volume: pallet.volume,
        }
    }
}

fn render_csv(reports: &ReportSet) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let grouped = reports.grouped.iter().flat_map(|group| group.pallets.iter());
    for pallet in grouped {
        writer.serialize(CsvRow::new("grouped", pallet))?;
    }
    for pallet in &reports.top {
        writer.serialize(CsvRow::new("top", pallet))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| WarehouseError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| WarehouseError::ConfigError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}
