use crate::core::render::{render, RenderOptions};
use crate::core::report::ReportSet;
use crate::domain::ports::InventorySource;
use crate::utils::error::Result;

pub struct ReportEngine<S: InventorySource> {
    source: S,
    options: RenderOptions,
}

impl<S: InventorySource> ReportEngine<S> {
    pub fn new(source: S, options: RenderOptions) -> Self {
        Self { source, options }
    }

    /// Loads the inventory and builds both reports without rendering them.
    pub fn build_reports(&self) -> Result<ReportSet> {
        let pallets = self.source.load()?;
        let box_count: usize = pallets.iter().map(|p| p.boxes().len()).sum();
        tracing::info!("Loaded {} pallets holding {} boxes", pallets.len(), box_count);

        let reports = ReportSet::build(&pallets, self.options.top_limit);
        tracing::info!(
            "Built {} expiration groups and a top list of {} pallets",
            reports.grouped.len(),
            reports.top.len()
        );

        let undated = pallets.iter().filter(|p| p.expiration_date().is_none()).count();
        if undated > 0 {
            tracing::debug!("{} pallets have no expiration date and are left out", undated);
        }

        Ok(reports)
    }

    pub fn run(&self) -> Result<String> {
        let reports = self.build_reports()?;
        tracing::debug!("Rendering reports as {:?}", self.options.format);
        render(&reports, &self.options)
    }
}
