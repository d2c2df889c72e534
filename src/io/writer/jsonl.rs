/*! JSON lines writer for a given split.

Each record is serialized on its own line, into `<dst>/<split>.jsonl`.
!*/
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Split;
use crate::error::Error;

pub struct JsonlWriter {
    path: PathBuf,
    handle: BufWriter<File>,
    nb_records: usize,
}

impl JsonlWriter {
    /// Create (or truncate) the split file.
    pub fn new(dst: &Path, split: Split) -> Result<Self, Error> {
        let path = dst.join(format!("{}.jsonl", split));
        let handle = BufWriter::new(File::create(&path)?);
        Ok(Self {
            path,
            handle,
            nb_records: 0,
        })
    }

    pub fn write_single<T: Serialize>(&mut self, record: &T) -> Result<(), Error> {
        serde_json::to_writer(&mut self.handle, record)?;
        self.handle.write_all(b"\n")?;
        self.nb_records += 1;
        Ok(())
    }

    /// Flush and return the number of written records.
    pub fn finish(mut self) -> Result<usize, Error> {
        self.handle.flush()?;
        Ok(self.nb_records)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn write() {
        let dst = tempfile::tempdir().unwrap();
        let mut w = JsonlWriter::new(dst.path(), Split::Validation).unwrap();
        let path = w.path().to_path_buf();
        for id in ["0", "1", "2"] {
            w.write_single(&json!({ "id": id })).unwrap();
        }
        assert_eq!(w.finish().unwrap(), 3);

        assert_eq!(path, dst.path().join("validation.jsonl"));
        let content = std::fs::read_to_string(path).unwrap();
        let ids: Vec<String> = content
            .lines()
            .map(|l| serde_json::from_str::<serde_json::Value>(l).unwrap()["id"].to_string())
            .collect();
        assert_eq!(ids, vec!["\"0\"", "\"1\"", "\"2\""]);
    }
}
