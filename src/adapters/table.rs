use crate::adapters::report::{self, ReportTable};
use crate::core::{CostBreakdown, Presenter};
use crate::utils::error::Result;
use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Color, ContentArrangement, Table};

/// Terminal tables, one per balance-sheet section.
#[derive(Debug, Clone, Default)]
pub struct TablePresenter;

impl TablePresenter {
    pub fn new() -> Self {
        Self
    }

    fn build(section: &ReportTable) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        table.set_header(
            section
                .headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        );

        for row in &section.rows {
            // first column is a label, the rest are numbers
            table.add_row(row.iter().enumerate().map(|(i, value)| {
                let cell = Cell::new(value);
                if i == 0 {
                    cell
                } else {
                    cell.set_alignment(CellAlignment::Right)
                }
            }));
        }

        table
    }
}

impl Presenter for TablePresenter {
    fn render(&self, breakdown: &CostBreakdown) -> Result<String> {
        let mut out = String::new();
        out.push_str(&report::heading(breakdown));
        out.push_str("\n\n");

        for section in report::tables(breakdown) {
            out.push_str(&section.title);
            out.push('\n');
            out.push_str(&Self::build(&section).to_string());
            out.push_str("\n\n");
        }

        out.push_str("---\n");
        out.push_str(report::FOOTER);
        out.push('\n');
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pricing::compute;
    use crate::domain::model::{AlaCarteInput, PlanInput};

    #[test]
    fn test_render_contains_all_sections() {
        let breakdown = compute(&PlanInput::default(), &AlaCarteInput::default());
        let out = TablePresenter::new().render(&breakdown).unwrap();

        assert!(out.starts_with("Half-Yearly Plan Summary - Balance Sheet"));
        assert!(out.contains("A La Carte Services"));
        assert!(out.contains("Half-Yearly Subscription Plan"));
        assert!(out.contains("Final Balance with GST"));
        assert!(out.contains("44100.00"));
        assert!(out.trim_end().ends_with(report::FOOTER));
    }
}
