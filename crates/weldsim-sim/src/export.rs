//! ---
//! wms_section: "02-simulation"
//! wms_subsection: "module"
//! wms_type: "source"
//! wms_scope: "code"
//! wms_description: "CSV and JSON exporters for generated records."
//! wms_version: "v0.1.0"
//! wms_owner: "tbd"
//! ---
use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::record::SimulationRecord;

/// UTF-8 byte-order marker. Spreadsheet tools use it to pick the right
/// encoding when opening the CSV.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Write records as CSV with a header row, BOM first.
pub fn write_csv<W: Write>(mut writer: W, records: &[SimulationRecord]) -> Result<()> {
    writer.write_all(UTF8_BOM)?;
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in records {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write records as a pretty-printed JSON array.
pub fn write_json<W: Write>(mut writer: W, records: &[SimulationRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.write_all(b"\n")?;
    Ok(())
}

/// Default export file name, derived from the run's start date.
pub fn default_file_name(records: &[SimulationRecord]) -> String {
    match records.first() {
        Some(first) => format!(
            "{}-welding_machine_records.csv",
            first.timestamp.format("%Y-%m-%d")
        ),
        None => "welding_machine_records.csv".to_owned(),
    }
}

/// Export records to a CSV file at `path`.
pub fn export_csv_file(path: &Path, records: &[SimulationRecord]) -> Result<()> {
    let file = File::create(path)?;
    write_csv(file, records)?;
    info!(records = records.len(), path = %path.display(), "exported records");
    Ok(())
}
