/*! Positional lookup table.

A side table is a header-less, two-column tab-separated file (`caption<TAB>image url`).
Rows are addressed by their 1-based line number, which is how the translation corpora
reference them.
!*/
use std::{fs::File, io::Read, path::Path};

use log::debug;
use serde::Deserialize;

use crate::error::Error;

/// One side table line.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LookupRow {
    pub caption: String,
    pub img_url: String,
}

#[derive(Debug, Default, Clone)]
pub struct SideTable {
    rows: Vec<LookupRow>,
}

impl SideTable {
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let table = Self::from_reader(File::open(path)?)?;
        debug!("loaded {} side table rows from {:?}", table.len(), path);
        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quoting(false)
            .from_reader(reader);

        let rows = rdr
            .deserialize()
            .collect::<Result<Vec<LookupRow>, csv::Error>>()?;

        Ok(Self { rows })
    }

    /// Get the row at 1-based `position`.
    pub fn get(&self, position: u64) -> Option<&LookupRow> {
        let idx = usize::try_from(position.checked_sub(1)?).ok()?;
        self.rows.get(idx)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<LookupRow> for SideTable {
    fn from_iter<T: IntoIterator<Item = LookupRow>>(iter: T) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
