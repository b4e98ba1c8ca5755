use crate::core::{AnalysisResults, FactorAssociation};
use clap::ValueEnum;
use colored::*;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &AnalysisResults) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(results)?;
        self.writer.write_all(json.as_bytes())?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_results(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        self.write_header(results)?;
        self.write_cleaning_summary(results)?;
        self.write_top_directors(results)?;
        self.write_yearly_trends(results)?;
        self.write_revenue_by_month(results)?;
        self.write_revenue_factors(results)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        writeln!(self.writer, "# TMDB Movie Analysis Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            results.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Dataset: {}", results.dataset.display())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_cleaning_summary(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        let stats = &results.cleaning;
        writeln!(self.writer, "## Cleaning Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Raw rows | {} |", stats.raw_rows)?;
        writeln!(
            self.writer,
            "| Duplicates removed | {} |",
            stats.duplicates_removed
        )?;
        writeln!(
            self.writer,
            "| Missing imdb_id removed | {} |",
            stats.missing_imdb_removed
        )?;
        writeln!(self.writer, "| Clean rows | {} |", stats.clean_rows)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_top_directors(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        if results.top_directors.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Most Frequent Directors")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Rank | Director | Movies |")?;
        writeln!(self.writer, "|------|----------|--------|")?;
        for (rank, entry) in results.top_directors.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                rank + 1,
                entry.director,
                entry.movies
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_yearly_trends(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        if results.yearly_trends.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Yearly Trends")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Year | Avg Popularity | Avg Rating | Avg Runtime | Total Revenue | Movies |"
        )?;
        writeln!(
            self.writer,
            "|------|----------------|------------|-------------|---------------|--------|"
        )?;
        for trend in &results.yearly_trends {
            writeln!(
                self.writer,
                "| {} | {:.3} | {:.2} | {:.1} | {} | {} |",
                trend.year,
                trend.avg_popularity,
                trend.avg_vote_average,
                trend.avg_runtime,
                format_amount(trend.total_revenue),
                trend.movie_count
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_revenue_by_month(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        if results.revenue_by_month.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Revenue by Release Month")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Month | Total Revenue |")?;
        writeln!(self.writer, "|-------|---------------|")?;
        for entry in &results.revenue_by_month {
            writeln!(
                self.writer,
                "| {} | {} |",
                entry.month,
                format_amount(entry.revenue)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_revenue_factors(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        if results.revenue_factors.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Revenue Associations")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "| Factor | Slope | Intercept | Pearson r | Samples |"
        )?;
        writeln!(
            self.writer,
            "|--------|-------|-----------|-----------|---------|"
        )?;
        for association in &results.revenue_factors {
            let fit = &association.fit;
            writeln!(
                self.writer,
                "| {} | {:.4} | {:.1} | {:.3} | {} |",
                association.factor, fit.slope, fit.intercept, fit.r, fit.samples
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_results(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        print_header(results);
        print_cleaning_summary(results);
        print_top_directors(results);
        print_yearly_trends(results);
        print_revenue_by_month(results);
        print_revenue_factors(results);
        Ok(())
    }
}

fn print_header(results: &AnalysisResults) {
    println!("{}", "TMDB Movie Analysis Report".bold().blue());
    println!("{}", "==========================".blue());
    println!("Dataset: {}", results.dataset.display());
    println!();
}

fn print_cleaning_summary(results: &AnalysisResults) {
    let stats = &results.cleaning;
    println!("{}", "Cleaning summary:".bold());
    println!("  Raw rows: {}", stats.raw_rows);
    println!("  Duplicates removed: {}", stats.duplicates_removed);
    println!("  Missing imdb_id removed: {}", stats.missing_imdb_removed);
    println!("  Clean rows: {}", stats.clean_rows);
    println!();
}

fn print_top_directors(results: &AnalysisResults) {
    if results.top_directors.is_empty() {
        return;
    }

    println!(
        "{}",
        format!("Most frequent directors (top {}):", results.top_directors.len()).bold()
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Rank", "Director", "Movies"]);
    for (rank, entry) in results.top_directors.iter().enumerate() {
        table.add_row(vec![
            (rank + 1).to_string(),
            entry.director.clone(),
            entry.movies.to_string(),
        ]);
    }
    println!("{table}");

    if let Some(top) = results.top_directors.first() {
        println!(
            "  Most prolific: {} with {} movies",
            top.director.green().bold(),
            top.movies
        );
    }
    println!();
}

fn print_yearly_trends(results: &AnalysisResults) {
    if results.yearly_trends.is_empty() {
        return;
    }

    let first = results.yearly_trends.first().map(|t| t.year).unwrap_or(0);
    let last = results.yearly_trends.last().map(|t| t.year).unwrap_or(0);
    println!("{}", format!("Yearly trends ({first}-{last}):").bold());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Year",
            "Avg popularity",
            "Avg rating",
            "Avg runtime",
            "Total revenue",
            "Movies",
        ]);
    for trend in &results.yearly_trends {
        table.add_row(vec![
            trend.year.to_string(),
            format!("{:.3}", trend.avg_popularity),
            format!("{:.2}", trend.avg_vote_average),
            format!("{:.1} min", trend.avg_runtime),
            format_amount(trend.total_revenue),
            trend.movie_count.to_string(),
        ]);
    }
    println!("{table}");
    println!();
}

fn print_revenue_by_month(results: &AnalysisResults) {
    if results.revenue_by_month.is_empty() {
        return;
    }

    println!("{}", "Revenue by release month:".bold());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Month", "Total revenue"]);
    for entry in &results.revenue_by_month {
        table.add_row(vec![
            entry.month.to_string(),
            format_amount(entry.revenue),
        ]);
    }
    println!("{table}");

    if let Some(best) = results.revenue_by_month.first() {
        println!(
            "  Peak month: {} with {}",
            best.month.to_string().green().bold(),
            format_amount(best.revenue)
        );
    }
    println!();
}

fn print_revenue_factors(results: &AnalysisResults) {
    if results.revenue_factors.is_empty() {
        return;
    }

    println!("{}", "Revenue associations (vs adjusted revenue):".bold());
    for association in &results.revenue_factors {
        println!("  {}", describe_association(association));
    }
    println!();
}

fn describe_association(association: &FactorAssociation) -> String {
    let fit = &association.fit;
    let r_display = match correlation_strength(fit.r) {
        "strong" => format!("{:.3}", fit.r).green().to_string(),
        "moderate" => format!("{:.3}", fit.r).yellow().to_string(),
        _ => format!("{:.3}", fit.r),
    };
    format!(
        "{}: r = {} ({}), slope {:.4} over {} movies",
        association.factor,
        r_display,
        correlation_strength(fit.r),
        fit.slope,
        fit.samples
    )
}

fn correlation_strength(r: f64) -> &'static str {
    match r.abs() {
        x if x >= 0.7 => "strong",
        x if x >= 0.4 => "moderate",
        x if x >= 0.2 => "weak",
        _ => "negligible",
    }
}

/// Thousands-separated dollar amount for revenue columns.
fn format_amount(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    }
}

/// Writer for `--output`. Terminal output is ANSI-styled and meant for a
/// tty, so file destinations get the markdown rendering instead.
pub fn create_file_writer(format: OutputFormat, file: std::fs::File) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(file)),
        OutputFormat::Markdown | OutputFormat::Terminal => Box::new(MarkdownWriter::new(file)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        CleaningStats, DirectorCount, LinearFit, Month, MonthRevenue, RevenueFactor, YearlyTrend,
    };
    use chrono::Utc;
    use std::path::PathBuf;

    fn sample_results() -> AnalysisResults {
        AnalysisResults {
            dataset: PathBuf::from("tmdb-movies.csv"),
            timestamp: Utc::now(),
            cleaning: CleaningStats {
                raw_rows: 5,
                duplicates_removed: 1,
                missing_imdb_removed: 1,
                clean_rows: 3,
            },
            top_directors: vec![DirectorCount {
                director: "Woody Allen".to_string(),
                movies: 2,
            }],
            yearly_trends: vec![YearlyTrend {
                year: 2010,
                avg_popularity: 0.75,
                avg_vote_average: 6.2,
                avg_runtime: 98.5,
                total_revenue: 1_000_000,
                movie_count: 3,
            }],
            revenue_by_month: vec![MonthRevenue {
                month: Month::Jun,
                revenue: 1_000_000,
            }],
            revenue_factors: vec![FactorAssociation {
                factor: RevenueFactor::Budget,
                pairs: vec![(1.0, 2.0), (2.0, 4.0)],
                fit: LinearFit {
                    slope: 2.0,
                    intercept: 0.0,
                    r: 1.0,
                    samples: 2,
                },
            }],
        }
    }

    #[test]
    fn json_writer_round_trips_results() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_results(&sample_results())
            .unwrap();

        let parsed: AnalysisResults = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.cleaning.clean_rows, 3);
        assert_eq!(parsed.top_directors[0].director, "Woody Allen");
    }

    #[test]
    fn markdown_writer_emits_all_sections() {
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_results(&sample_results())
            .unwrap();

        let report = String::from_utf8(buffer).unwrap();
        assert!(report.contains("## Cleaning Summary"));
        assert!(report.contains("## Most Frequent Directors"));
        assert!(report.contains("## Yearly Trends"));
        assert!(report.contains("## Revenue by Release Month"));
        assert!(report.contains("## Revenue Associations"));
        assert!(report.contains("Woody Allen"));
        assert!(report.contains("$1,000,000"));
    }

    #[test]
    fn amount_formatting_groups_thousands() {
        assert_eq!(format_amount(0), "$0");
        assert_eq!(format_amount(999), "$999");
        assert_eq!(format_amount(61_660_590_000), "$61,660,590,000");
        assert_eq!(format_amount(-1234), "-$1,234");
    }

    #[test]
    fn correlation_strength_buckets() {
        assert_eq!(correlation_strength(0.9), "strong");
        assert_eq!(correlation_strength(-0.5), "moderate");
        assert_eq!(correlation_strength(0.25), "weak");
        assert_eq!(correlation_strength(0.05), "negligible");
    }
}
