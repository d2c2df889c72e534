//! Line-oriented text files.
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::Error;

/// Read every line of `path`, without line terminators.
pub fn read_lines(path: &Path) -> Result<Vec<String>, Error> {
    let f = BufReader::new(File::open(path)?);
    f.lines()
        .map(|line| line.map(|l| l.trim_end_matches('\r').to_string()))
        .collect::<Result<Vec<String>, std::io::Error>>()
        .map_err(Error::Io)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_terminators() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("train.en.txt");
        std::fs::write(&path, "first line\r\nsecond line\n").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["first line", "second line"]);
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            read_lines(Path::new("definitely/not/here.txt")),
            Err(Error::Io(_))
        ));
    }
}
