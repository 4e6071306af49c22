use crate::adapters::report;
use crate::core::{CostBreakdown, Presenter};
use crate::utils::error::{CalcError, Result};

/// CSV export. Every record starts with the name of the table it belongs to,
/// and each table is preceded by its own header record.
#[derive(Debug, Clone)]
pub struct CsvPresenter {
    delimiter: u8,
}

impl CsvPresenter {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn tsv() -> Self {
        Self { delimiter: b'\t' }
    }
}

impl Default for CsvPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Presenter for CsvPresenter {
    fn render(&self, breakdown: &CostBreakdown) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .flexible(true)
            .from_writer(Vec::new());

        for section in report::tables(breakdown) {
            let mut header = vec!["table".to_string()];
            header.extend(section.headers.iter().cloned());
            writer.write_record(&header)?;

            for row in &section.rows {
                let mut record = vec![section.title.clone()];
                record.extend(row.iter().cloned());
                writer.write_record(&record)?;
            }
        }

        let bytes = writer.into_inner().map_err(|e| CalcError::RenderError {
            message: format!("Failed to flush CSV writer: {}", e),
        })?;
        String::from_utf8(bytes).map_err(|e| CalcError::RenderError {
            message: format!("CSV output is not UTF-8: {}", e),
        })
    }
}
