/*! Header-bearing delimited files.

Two dialects are in use:

- [Dialect::tsv]: tab separated, no quoting, fields trimmed.
- [Dialect::pipe]: `|` separated, `"` quoting.
!*/
use std::io::Read;

use csv::{StringRecord, Trim};
use serde::de::DeserializeOwned;

use crate::error::Error;

#[derive(Debug, Clone, Copy)]
pub struct Dialect {
    delimiter: u8,
    quoting: bool,
    trim: Trim,
}

impl Dialect {
    pub fn tsv() -> Self {
        Self {
            delimiter: b'\t',
            quoting: false,
            trim: Trim::All,
        }
    }

    pub fn pipe() -> Self {
        Self {
            delimiter: b'|',
            quoting: true,
            trim: Trim::None,
        }
    }

    fn reader<R: Read>(&self, reader: R) -> csv::Reader<R> {
        csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .quoting(self.quoting)
            .trim(self.trim)
            .has_headers(true)
            .from_reader(reader)
    }
}

/// Deserialize every row into `T`, matching columns by header name.
pub fn read_records<T, R>(reader: R, dialect: Dialect) -> Result<Vec<T>, Error>
where
    T: DeserializeOwned,
    R: Read,
{
    let rows = dialect
        .reader(reader)
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()?;
    Ok(rows)
}

/// Read the header and raw rows, for files whose column count depends on the subset.
pub fn read_raw<R: Read>(
    reader: R,
    dialect: Dialect,
) -> Result<(StringRecord, Vec<StringRecord>), Error> {
    let mut rdr = dialect.reader(reader);
    let headers = rdr.headers()?.clone();
    let rows = rdr
        .records()
        .collect::<Result<Vec<StringRecord>, csv::Error>>()?;
    Ok((headers, rows))
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Pair {
        #[serde(rename = "Word1")]
        word_1: String,
        #[serde(rename = "Word2")]
        word_2: String,
    }

    #[test]
    fn tsv_by_header() {
        let data = "Word2\tWord1\ncold \thot\nbig\tsmall\n";
        let rows: Vec<Pair> = read_records(data.as_bytes(), Dialect::tsv()).unwrap();
        assert_eq!(
            rows,
            vec![
                Pair {
                    word_1: "hot".to_string(),
                    word_2: "cold".to_string()
                },
                Pair {
                    word_1: "small".to_string(),
                    word_2: "big".to_string()
                },
            ]
        );
    }

    #[test]
    fn tsv_wrong_column_count() {
        let data = "Word1\tWord2\nhot\n";
        let rows: Result<Vec<Pair>, _> = read_records(data.as_bytes(), Dialect::tsv());
        assert!(rows.is_err());
    }

    #[test]
    fn pipe_raw() {
        let data = "id|question|answer_1|answer_2\n1|What?|\"a|b\"|\n";
        let (headers, rows) = read_raw(data.as_bytes(), Dialect::pipe()).unwrap();
        assert_eq!(headers.len(), 4);
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][2], "a|b");
        assert_eq!(&rows[0][3], "");
    }
}
