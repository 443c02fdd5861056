pub mod csv;
pub mod table;

pub use self::csv::CsvRenderer;
pub use table::TableRenderer;

use crate::error::Result;
use crate::models::Report;

/// A report output sink. The variant is decided once at startup from the
/// CLI flags and driven exactly once with the finalized report.
pub trait Renderer {
    fn render(&mut self, report: &Report) -> Result<()>;
}
