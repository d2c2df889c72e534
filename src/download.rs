//! Remote file retrieval.
//!
//! Loaders only see the [Fetch] trait, so that tests (and offline runs)
//! can plug in local files instead of the network.
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use log::{debug, info};
use reqwest::Url;
use sha2::{Digest, Sha256};

use crate::decompress;
use crate::error::Error;

/// Something that is able to make a remote resource available locally.
pub trait Fetch {
    fn fetch(&self, url: &Url) -> Result<PathBuf, Error>;
}

/// Fetch `url` then extract it if it is an archive.
/// See [decompress::extract] for the supported formats.
pub fn download_and_extract(fetcher: &dyn Fetch, url: &str) -> Result<PathBuf, Error> {
    let url = Url::parse(url)?;
    let path = fetcher.fetch(&url)?;
    decompress::extract(&path)
}

/// Holds the http client and the directory where downloads are kept.
///
/// Files already present in the cache are not downloaded again.
pub struct Downloader {
    cache_dir: PathBuf,
    client: reqwest::blocking::Client,
}

impl Downloader {
    pub fn new(cache_dir: &Path) -> Result<Self, Error> {
        fs::create_dir_all(cache_dir)?;
        Ok(Self {
            cache_dir: cache_dir.to_path_buf(),
            client: reqwest::blocking::Client::new(),
        })
    }

    /// Location of `url` in the cache.
    ///
    /// The file name keeps the last path segment (and so the extension) of the url,
    /// prefixed by a hash of the whole url to avoid collisions.
    pub fn cache_path(&self, url: &Url) -> PathBuf {
        let hash = format!("{:x}", Sha256::digest(url.as_str().as_bytes()));
        let name = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|segment| !segment.is_empty())
            .unwrap_or("download");
        self.cache_dir.join(format!("{}_{}", &hash[..16], name))
    }
}

impl Fetch for Downloader {
    fn fetch(&self, url: &Url) -> Result<PathBuf, Error> {
        let dst = self.cache_path(url);
        if dst.exists() {
            debug!("cache hit for {} ({:?})", url, dst);
            return Ok(dst);
        }

        info!("downloading {}", url);
        let mut response = self.client.get(url.clone()).send()?.error_for_status()?;

        // write into a temporary file so that an interrupted download is never seen as cached.
        let part = dst.with_extension("part");
        {
            let mut out = BufWriter::new(File::create(&part)?);
            std::io::copy(&mut response, &mut out)?;
        }
        fs::rename(&part, &dst)?;
        debug!("stored {} into {:?}", url, dst);

        Ok(dst)
    }
}

/// Serves urls from a fixed url → local path map.
///
/// Unknown urls fail like a download would.
#[derive(Debug, Default, Clone)]
pub struct LocalFetcher {
    files: HashMap<String, PathBuf>,
}

impl LocalFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, path: impl Into<PathBuf>) -> Self {
        self.files.insert(url.to_string(), path.into());
        self
    }
}

impl Fetch for LocalFetcher {
    fn fetch(&self, url: &Url) -> Result<PathBuf, Error> {
        self.files
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| Error::Custom(format!("{} is not available locally", url)))
    }
}
