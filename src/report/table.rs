use std::io::{stdout, IsTerminal, Write};

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::error::Result;
use crate::models::{Report, COLUMN_HEADERS};
use crate::report::Renderer;

const DEFAULT_TERMINAL_WIDTH: usize = 120;
const COLUMN_GAP: usize = 2;
const MIN_COLUMN_WIDTH: usize = 10;

/// Renders the report as a color-coded table sized to the terminal, falling
/// back to a fixed width when output is redirected.
pub struct TableRenderer {
    width: usize,
    colored: bool,
}

#[derive(Copy, Clone)]
enum CellStyle {
    Header,
    Identity,
    Languages,
}

impl TableRenderer {
    pub fn new() -> Self {
        let tty = stdout().is_terminal();
        Self {
            width: if tty {
                detect_terminal_width()
            } else {
                DEFAULT_TERMINAL_WIDTH
            },
            colored: tty,
        }
    }

    fn write_row(
        &self,
        out: &mut impl Write,
        fields: [&str; 6],
        styles: [CellStyle; 6],
        widths: &[usize; 6],
    ) -> Result<()> {
        for (index, (field, style)) in fields.iter().zip(styles).enumerate() {
            let last = index == fields.len() - 1;
            let cell = truncate(field, widths[index]);
            let padded = if last {
                cell
            } else {
                format!("{:<width$}", cell, width = widths[index])
            };

            if self.colored {
                match style {
                    CellStyle::Header => write!(out, "{}", padded.bold())?,
                    CellStyle::Identity => write!(out, "{}", padded.green())?,
                    CellStyle::Languages => write!(out, "{}", padded.yellow())?,
                }
            } else {
                write!(out, "{}", padded)?;
            }

            if !last {
                write!(out, "{:gap$}", "", gap = COLUMN_GAP)?;
            }
        }
        writeln!(out)?;
        Ok(())
    }
}

impl Renderer for TableRenderer {
    fn render(&mut self, report: &Report) -> Result<()> {
        let widths = fit_widths(column_widths(report), self.width);

        let out = stdout();
        let mut out = out.lock();

        self.write_row(&mut out, COLUMN_HEADERS, [CellStyle::Header; 6], &widths)?;
        for entry in report.entries() {
            self.write_row(
                &mut out,
                entry.fields(),
                [
                    CellStyle::Identity,
                    CellStyle::Identity,
                    CellStyle::Identity,
                    CellStyle::Languages,
                    CellStyle::Languages,
                    CellStyle::Languages,
                ],
                &widths,
            )?;
        }
        out.flush()?;
        Ok(())
    }
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Natural width of each column: the widest of the header and every cell.
fn column_widths(report: &Report) -> [usize; 6] {
    let mut widths = [0usize; 6];
    for (index, header) in COLUMN_HEADERS.iter().enumerate() {
        widths[index] = header.chars().count();
    }
    for entry in report.entries() {
        for (index, field) in entry.fields().iter().enumerate() {
            widths[index] = widths[index].max(field.chars().count());
        }
    }
    widths
}

/// Shrinks the widest column until the row fits the target width. Columns
/// never drop below MIN_COLUMN_WIDTH, so a very narrow terminal still gets
/// a readable table that happens to wrap.
fn fit_widths(mut widths: [usize; 6], target: usize) -> [usize; 6] {
    let gaps = COLUMN_GAP * (widths.len() - 1);
    loop {
        let total: usize = widths.iter().sum::<usize>() + gaps;
        if total <= target {
            return widths;
        }
        let Some(widest) = widths
            .iter()
            .enumerate()
            .filter(|(_, w)| **w > MIN_COLUMN_WIDTH)
            .max_by_key(|(_, w)| **w)
            .map(|(index, _)| index)
        else {
            return widths;
        };
        widths[widest] = widths[widest]
            .saturating_sub(total - target)
            .max(MIN_COLUMN_WIDTH);
    }
}

fn truncate(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }

    let truncated: String = text.chars().take(max_width.saturating_sub(1)).collect();
    format!("{}…", truncated)
}

fn detect_terminal_width() -> usize {
    terminal_size().map_or(DEFAULT_TERMINAL_WIDTH, |(Width(w), _)| usize::from(w))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReportEntry;

    fn sample_report(languages: &str) -> Report {
        let mut report = Report::default();
        report.push(ReportEntry {
            organization: "acme".to_string(),
            repository: "widgets".to_string(),
            default_setup: "Enabled".to_string(),
            languages_in_repo: languages.to_string(),
            configured_languages: String::new(),
            unconfigured_languages: languages.to_string(),
        });
        report
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("python", 10), "python");
        assert_eq!(truncate("python", 6), "python");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("go, python, ruby", 8), "go, pyt…");
    }

    #[test]
    fn test_column_widths_cover_headers_and_cells() {
        let widths = column_widths(&sample_report("python"));
        assert_eq!(widths[0], "Organization".len());
        // The last header is longer than any cell in it.
        assert_eq!(widths[5], "Not configured (supported languages)".len());
    }

    #[test]
    fn test_fit_widths_leaves_fitting_rows_alone() {
        let widths = column_widths(&sample_report("python"));
        assert_eq!(fit_widths(widths, 500), widths);
    }

    #[test]
    fn test_fit_widths_shrinks_to_target() {
        let long = "go, python, ruby, swift, c-cpp, csharp, java-kotlin, javascript-typescript";
        let fitted = fit_widths(column_widths(&sample_report(long)), 120);
        let total: usize = fitted.iter().sum::<usize>() + COLUMN_GAP * 5;
        assert!(total <= 120);
        for width in fitted {
            assert!(width >= MIN_COLUMN_WIDTH);
        }
    }
}
