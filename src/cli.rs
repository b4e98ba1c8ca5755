use crate::io::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cinemetrics")]
#[command(about = "Descriptive analyzer for the TMDB movie-metadata dataset", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TMDB movies CSV export
    #[arg(default_value = "tmdb-movies.csv")]
    pub dataset: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "terminal")]
    pub format: OutputFormat,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_conventional_dataset_name() {
        let cli = Cli::parse_from(["cinemetrics"]);
        assert_eq!(cli.dataset, PathBuf::from("tmdb-movies.csv"));
        assert_eq!(cli.format, OutputFormat::Terminal);
        assert!(cli.output.is_none());
    }

    #[test]
    fn accepts_dataset_path_and_format() {
        let cli = Cli::parse_from(["cinemetrics", "data/movies.csv", "--format", "json"]);
        assert_eq!(cli.dataset, PathBuf::from("data/movies.csv"));
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
