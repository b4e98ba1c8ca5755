//! Aggregation queries over the clean movie table.
//!
//! Each query takes the table by shared reference and is deterministic:
//! identical input and parameters always produce identical output. Group
//! keys with zero matching rows are absent from results rather than
//! zero-filled, and a query whose entire filtered input is empty fails with
//! `EmptyGroup`.

pub mod directors;
pub mod factors;
pub mod months;
pub mod trends;

pub use directors::{top_directors, DEFAULT_TOP_DIRECTORS};
pub use factors::revenue_factors;
pub use months::revenue_by_month;
pub use trends::{yearly_trends, DEFAULT_TREND_YEARS};
