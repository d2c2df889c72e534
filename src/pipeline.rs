/*! Generation pipeline.

Resolves a configuration, then writes each of its splits as a JSON lines file:

```text
dst/
├── dataset_info.json
├── train.jsonl
├── validation.jsonl
└── test.jsonl
```
!*/
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::Serialize;

use crate::config::{Context, LoaderConfig, Split};
use crate::datasets::{self, SplitGenerator};
use crate::error::Error;
use crate::io::writer::JsonlWriter;
use crate::metadata::DatasetInfo;

#[derive(Serialize)]
struct InfoFile<'a> {
    #[serde(flatten)]
    info: DatasetInfo,
    config: &'a LoaderConfig,
}

/// Outcome of one generated split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
    pub split: Split,
    pub nb_records: usize,
    /// Side table positions whose image could not be downloaded.
    pub failed_images: Vec<u64>,
}

pub struct Generation {
    config_name: String,
    dst: PathBuf,
    ctx: Context,
}

impl Generation {
    pub fn new(config_name: impl Into<String>, dst: &Path, ctx: Context) -> Self {
        Self {
            config_name: config_name.into(),
            dst: dst.to_path_buf(),
            ctx,
        }
    }

    /// Run the generation, returning a report for each split.
    ///
    /// The first error aborts the run. Files of already generated splits are left in place.
    pub fn run(&self) -> Result<Vec<SplitReport>, Error> {
        let (loader, config) = datasets::find(&self.config_name)?;
        info!("generating {} into {:?}", config.name, self.dst);

        fs::create_dir_all(&self.dst)?;
        let info_file = InfoFile {
            info: loader.info(),
            config: &config,
        };
        let info_path = self.dst.join("dataset_info.json");
        let mut info_writer = BufWriter::new(File::create(&info_path)?);
        serde_json::to_writer_pretty(&mut info_writer, &info_file)?;
        info_writer.flush()?;
        debug!("wrote {:?}", info_path);

        let splits = loader.splits(&config, &self.ctx)?;
        splits
            .into_iter()
            .map(|split| self.write_split(&config, split))
            .collect()
    }

    fn write_split(
        &self,
        config: &LoaderConfig,
        generator: SplitGenerator,
    ) -> Result<SplitReport, Error> {
        let SplitGenerator {
            split,
            examples,
            failed_images,
        } = generator;
        info!("[{}] {}: starting", config.name, split);

        let mut writer = JsonlWriter::new(&self.dst, split)?;
        debug!("[{}] {}: writing to {:?}", config.name, split, writer.path());
        for example in examples {
            writer.write_single(&example?)?;
        }
        let nb_records = writer.finish()?;

        let failed_images = failed_images.map(|f| f.to_vec()).unwrap_or_default();
        if !failed_images.is_empty() {
            warn!(
                "[{}] {}: {} images could not be downloaded",
                config.name,
                split,
                failed_images.len()
            );
        }

        info!("[{}] {}: {} records", config.name, split, nb_records);
        Ok(SplitReport {
            split,
            nb_records,
            failed_images,
        })
    }
}
