use crate::utils::fs::atomic_write;
use anyhow::Result;
use std::path::Path;

/// Write the rendered report to disk. The write is atomic so a crash never
/// leaves a truncated report behind.
pub fn write_report(report: &str, path: &Path) -> Result<()> {
    atomic_write(path, report.as_bytes())?;
    tracing::info!("Report written to {}", path.display());
    Ok(())
}
