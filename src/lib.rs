// Export modules for library usage
pub mod analysis;
pub mod cleaning;
pub mod cli;
pub mod commands;
pub mod core;
pub mod errors;
pub mod io;
pub mod testkit;

// Re-export commonly used types
pub use crate::core::{
    AnalysisResults, CleaningStats, DirectorCount, FactorAssociation, LinearFit, Month,
    MonthRevenue, MovieRecord, MovieTable, RawMovieRecord, RevenueFactor, YearlyTrend,
};

pub use crate::analysis::{
    revenue_by_month, revenue_factors, top_directors, yearly_trends, DEFAULT_TOP_DIRECTORS,
    DEFAULT_TREND_YEARS,
};

pub use crate::cleaning::clean;
pub use crate::errors::{Error, Result};
pub use crate::io::loader::load_movies;
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
