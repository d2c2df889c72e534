/*! Archive extraction.

Compressed files are extracted next to the archive, and extraction is skipped when the target already exists:

- `name.ext.bz2` → `name.ext`
- `name.ext.gz` → `name.ext`
- `name.zip` → `name/` (directory)
!*/
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read};
use std::path::{Path, PathBuf};

use bzip2::read::MultiBzDecoder;
use flate2::read::MultiGzDecoder;
use log::debug;
use zip::ZipArchive;

use crate::error::Error;

/// Extract `file` if its extension is a known archive format, returning the extracted path.
///
/// Other files are returned as is.
pub fn extract(file: &Path) -> Result<PathBuf, Error> {
    let ext = file.extension().and_then(|e| e.to_str());
    match ext {
        Some("bz2") => {
            let src = BufReader::new(File::open(file)?);
            decompress_stream(file, MultiBzDecoder::new(src))
        }
        Some("gz") => {
            let src = BufReader::new(File::open(file)?);
            decompress_stream(file, MultiGzDecoder::new(src))
        }
        Some("zip") => unzip(file),
        _ => Ok(file.to_path_buf()),
    }
}

/// Target of an extraction: the archive path minus its last extension.
fn stripped(file: &Path) -> Result<PathBuf, Error> {
    let stem = file
        .file_stem()
        .ok_or_else(|| Error::Custom(format!("{:?} has no file name", file)))?;
    Ok(file.with_file_name(stem))
}

/// Scratch path an extraction is written to before being renamed to `dst`.
fn part_path(dst: &Path) -> PathBuf {
    let mut name = dst.as_os_str().to_os_string();
    name.push(".part");
    PathBuf::from(name)
}

fn decompress_stream<R: Read>(file: &Path, mut decoder: R) -> Result<PathBuf, Error> {
    let dst = stripped(file)?;
    if dst.exists() {
        debug!("{:?} already extracted", file);
        return Ok(dst);
    }

    debug!("decompressing {:?} into {:?}", file, dst);
    let part = part_path(&dst);
    {
        let mut out = BufWriter::new(File::create(&part)?);
        std::io::copy(&mut decoder, &mut out)?;
    }
    fs::rename(&part, &dst)?;
    Ok(dst)
}

fn unzip(file: &Path) -> Result<PathBuf, Error> {
    let dst = stripped(file)?;
    if dst.is_dir() {
        debug!("{:?} already extracted", file);
        return Ok(dst);
    }

    debug!("unzipping {:?} into {:?}", file, dst);
    let part = part_path(&dst);
    if part.exists() {
        debug!("removing leftover {:?}", part);
        fs::remove_dir_all(&part)?;
    }
    let mut archive = ZipArchive::new(BufReader::new(File::open(file)?))?;
    archive.extract(&part)?;
    fs::rename(&part, &dst)?;
    Ok(dst)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use bzip2::write::BzEncoder;
    use flate2::write::GzEncoder;
    use zip::write::FileOptions;

    use super::*;

    #[test]
    fn passthrough() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.tsv");
        fs::write(&path, "a\tb\n").unwrap();
        assert_eq!(extract(&path).unwrap(), path);
    }

    #[test]
    fn bz2() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.jsonl.bz2");
        let mut enc = BzEncoder::new(File::create(&path).unwrap(), bzip2::Compression::best());
        enc.write_all(b"{\"a\":1}\n").unwrap();
        enc.finish().unwrap();

        let out = extract(&path).unwrap();
        assert_eq!(out, dir.path().join("data.jsonl"));
        assert_eq!(fs::read_to_string(&out).unwrap(), "{\"a\":1}\n");

        // second call reuses the extracted file
        fs::write(&out, "changed").unwrap();
        assert_eq!(fs::read_to_string(extract(&path).unwrap()).unwrap(), "changed");
    }

    #[test]
    fn gz() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lines.txt.gz");
        let mut enc = GzEncoder::new(File::create(&path).unwrap(), flate2::Compression::fast());
        enc.write_all(b"hello\nworld\n").unwrap();
        enc.finish().unwrap();

        let out = extract(&path).unwrap();
        assert_eq!(out, dir.path().join("lines.txt"));
        assert_eq!(fs::read_to_string(out).unwrap(), "hello\nworld\n");
    }

    fn vidata_zip(path: &Path) {
        let mut zip = zip::ZipWriter::new(File::create(path).unwrap());
        zip.start_file("ViData/ViCon/400_noun_pairs.txt", FileOptions::default())
            .unwrap();
        zip.write_all(b"Word1\tWord2\tRelation\n").unwrap();
        zip.finish().unwrap();
    }

    #[test]
    fn zip_leftover_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ViData.zip");
        vidata_zip(&path);
        // an interrupted extraction leaves its scratch directory behind
        let part = dir.path().join("ViData.part");
        fs::create_dir_all(part.join("ViData")).unwrap();
        fs::write(part.join("ViData/half_written.txt"), "Word1").unwrap();

        let out = extract(&path).unwrap();
        assert_eq!(out, dir.path().join("ViData"));
        assert!(out.join("ViData/ViCon/400_noun_pairs.txt").is_file());
        assert!(!out.join("ViData/half_written.txt").exists());
        assert!(!part.exists());
    }

    #[test]
    fn zip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ViData.zip");
        vidata_zip(&path);

        let out = extract(&path).unwrap();
        assert!(out.is_dir());
        let content = fs::read_to_string(out.join("ViData/ViCon/400_noun_pairs.txt")).unwrap();
        assert_eq!(content, "Word1\tWord2\tRelation\n");
    }
}
