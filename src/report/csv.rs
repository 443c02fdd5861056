use std::fs::File;
use std::path::Path;

use crate::error::Result;
use crate::models::{Report, COLUMN_HEADERS};
use crate::report::Renderer;

/// Writes the report to a file. The header row goes out as soon as the
/// renderer is constructed; entry rows follow on the final render.
pub struct CsvRenderer {
    writer: csv::Writer<File>,
}

impl CsvRenderer {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(COLUMN_HEADERS)?;
        writer.flush()?;
        Ok(Self { writer })
    }
}

impl Renderer for CsvRenderer {
    fn render(&mut self, report: &Report) -> Result<()> {
        for entry in report.entries() {
            self.writer.write_record(entry.fields())?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
