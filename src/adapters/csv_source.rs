use crate::domain::model::WorkItem;
use crate::domain::ports::RecordSource;
use crate::utils::error::Result;
use std::fs::File;
use std::path::Path;

/// Streams work items out of the input CSV in file order. Rows with an empty
/// `usdot_number` are dropped here; they are not valid work.
pub struct CsvRecordSource {
    rows: csv::DeserializeRecordsIntoIter<File, WorkItem>,
}

impl CsvRecordSource {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)?;
        Ok(Self {
            rows: reader.into_deserialize(),
        })
    }
}

impl RecordSource for CsvRecordSource {
    fn next_item(&mut self) -> Result<Option<WorkItem>> {
        for row in self.rows.by_ref() {
            let item: WorkItem = row?;
            if item.usdot_number.is_empty() {
                continue;
            }
            return Ok(Some(item));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_input(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("Carriers.csv");
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    fn drain(mut source: CsvRecordSource) -> Vec<WorkItem> {
        let mut items = Vec::new();
        while let Some(item) = source.next_item().unwrap() {
            items.push(item);
        }
        items
    }

    #[test]
    fn test_reads_rows_in_file_order() {
        let dir = TempDir::new().unwrap();
        let path = write_input(
            &dir,
            "usdot_number,prefix,docket_number,legal_name,dba_name,city,state\n\
             111,MC,123,Acme Inc,Acme,Springfield,IL\n\
             222,,,,,,\n",
        );

        let items = drain(CsvRecordSource::open(&path).unwrap());

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].usdot_number, "111");
        assert_eq!(items[0].prefix.as_deref(), Some("MC"));
        assert_eq!(items[0].legal_name.as_deref(), Some("Acme Inc"));
        assert_eq!(items[1].usdot_number, "222");
        assert_eq!(items[1].prefix, None);
    }

    #[test]
    fn test_skips_rows_with_empty_identifier() {
        let dir = TempDir::new().unwrap();
        let path = write_input(
            &dir,
            "usdot_number,prefix,docket_number,legal_name,dba_name,city,state\n\
             111,,,,,,\n\
             ,,,,,,\n\
             333,,,,,,\n",
        );

        let items = drain(CsvRecordSource::open(&path).unwrap());

        let ids: Vec<&str> = items.iter().map(|i| i.usdot_number.as_str()).collect();
        assert_eq!(ids, vec!["111", "333"]);
    }

    #[test]
    fn test_tolerates_missing_optional_columns() {
        let dir = TempDir::new().unwrap();
        let path = write_input(&dir, "usdot_number\n444\n");

        let items = drain(CsvRecordSource::open(&path).unwrap());

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].usdot_number, "444");
        assert_eq!(items[0].city, None);
    }

    #[test]
    fn test_missing_input_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(CsvRecordSource::open(dir.path().join("nope.csv")).is_err());
    }
}
