//! The one command: run the full load → clean → aggregate pipeline and
//! hand the reduced results to a writer.

use crate::analysis::{
    revenue_by_month, revenue_factors, top_directors, yearly_trends, DEFAULT_TOP_DIRECTORS,
    DEFAULT_TREND_YEARS,
};
use crate::cleaning::clean;
use crate::core::AnalysisResults;
use crate::io::loader::load_movies;
use crate::io::output::{create_file_writer, create_writer, OutputFormat};
use anyhow::Context;
use chrono::Utc;
use std::path::{Path, PathBuf};

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

/// Run the analysis and write the report per the config.
pub fn analyze_dataset(config: AnalyzeConfig) -> anyhow::Result<()> {
    let results = run_analysis(&config.path)
        .with_context(|| format!("Analysis of {} failed", config.path.display()))?;

    let mut writer = match &config.output {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            create_file_writer(config.format, file)
        }
        None => create_writer(config.format),
    };
    writer.write_results(&results)?;

    Ok(())
}

/// The pipeline proper, pure apart from the file read and the timestamp.
/// Load completes before cleaning starts; cleaning completes before any
/// query runs; the four queries each read the same immutable table.
pub fn run_analysis(path: &Path) -> crate::errors::Result<AnalysisResults> {
    log::info!("Analyzing {}", path.display());

    let raw = load_movies(path)?;
    let (table, cleaning) = clean(raw)?;

    let top_directors = top_directors(&table, DEFAULT_TOP_DIRECTORS)?;
    let yearly_trends = yearly_trends(&table, DEFAULT_TREND_YEARS)?;
    let revenue_by_month = revenue_by_month(&table)?;
    let revenue_factors = revenue_factors(&table)?;

    Ok(AnalysisResults {
        dataset: path.to_path_buf(),
        timestamp: Utc::now(),
        cleaning,
        top_directors,
        yearly_trends,
        revenue_by_month,
        revenue_factors,
    })
}
