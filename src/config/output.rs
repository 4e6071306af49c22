use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Where a rendered report ends up.
#[derive(Debug, Clone)]
pub enum ReportSink {
    Stdout,
    File(PathBuf),
}

impl ReportSink {
    pub fn from_option(path: Option<&str>) -> Self {
        match path {
            Some(p) => ReportSink::File(PathBuf::from(p)),
            None => ReportSink::Stdout,
        }
    }

    pub fn write(&self, report: &str) -> Result<()> {
        match self {
            ReportSink::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(report.as_bytes())?;
                if !report.ends_with('\n') {
                    stdout.write_all(b"\n")?;
                }
                stdout.flush()?;
            }
            ReportSink::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)?;
                }
                fs::write(path, report)?;
                tracing::info!("📁 Report saved to: {}", path.display());
            }
        }
        Ok(())
    }

    pub fn describe(&self) -> String {
        match self {
            ReportSink::Stdout => "stdout".to_string(),
            ReportSink::File(path) => path.display().to_string(),
        }
    }
}
