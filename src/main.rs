use anyhow::Result;
use cinemetrics::cli::Cli;
use cinemetrics::commands::analyze::{analyze_dataset, AnalyzeConfig};
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = AnalyzeConfig {
        path: cli.dataset,
        format: cli.format,
        output: cli.output,
    };

    analyze_dataset(config)
}
