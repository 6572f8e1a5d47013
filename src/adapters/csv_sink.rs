use crate::domain::model::CarrierRecord;
use crate::domain::ports::ResultSink;
use crate::utils::error::Result;
use std::fs::{File, OpenOptions};
use std::path::Path;

/// Append-only CSV destinations: the output table and the inactive list.
/// The output header is written exactly once, when the file is empty at open
/// time. Every row is flushed before the write call returns.
pub struct CsvResultSink {
    output: csv::Writer<File>,
    inactive: csv::Writer<File>,
}

impl CsvResultSink {
    pub fn open(output_path: impl AsRef<Path>, inactive_path: impl AsRef<Path>) -> Result<Self> {
        let (file, empty) = open_append(output_path.as_ref())?;
        let mut output = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if empty {
            output.write_record(CarrierRecord::HEADERS)?;
            output.flush()?;
        }

        let (file, _) = open_append(inactive_path.as_ref())?;
        let inactive = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        Ok(Self { output, inactive })
    }
}

fn open_append(path: &Path) -> Result<(File, bool)> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let empty = file.metadata()?.len() == 0;
    Ok((file, empty))
}

impl ResultSink for CsvResultSink {
    fn write_record(&mut self, record: &CarrierRecord) -> Result<()> {
        self.output.serialize(record)?;
        self.output.flush()?;
        Ok(())
    }

    fn write_inactive(&mut self, usdot_number: &str) -> Result<()> {
        self.inactive.write_record([usdot_number])?;
        self.inactive.flush()?;
        Ok(())
    }
}
