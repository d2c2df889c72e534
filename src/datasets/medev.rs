//! MedEV: Vietnamese-English parallel sentences of the medical domain.
//!
//! Each split comes as two aligned line files, one per language.
use std::path::Path;

use log::warn;
use schemars::{schema::RootSchema, schema_for, JsonSchema};
use serde::Serialize;

use crate::config::{Context, LoaderConfig, Schema, Split};
use crate::datasets::{ensure_schema, unsupported_schema, Loader, SourceRecord, SplitGenerator};
use crate::download::download_and_extract;
use crate::error::Error;
use crate::io::reader::lines::read_lines;
use crate::metadata::{DatasetInfo, License, Task};
use crate::schemas::{Example, Text2Text};

const DATASETNAME: &str = "medev";

const CITATION: &str = r#"@inproceedings{medev,
    title     = {{Improving Vietnamese-English Medical Machine Translation}},
    author    = {Nhu Vo and Dat Quoc Nguyen and Dung D. Le and Massimo Piccardi and Wray Buntine},
    booktitle = {Proceedings of the 2024 Joint International Conference on Computational Linguistics, Language Resources and Evaluation (LREC-COLING)},
    year      = {2024}
}"#;

const BASE_URL: &str = "https://huggingface.co/datasets/nhuvo/MedEV/resolve/main";

/// (split, english file, vietnamese file), in generation order.
const FILES: [(Split, &str, &str); 3] = [
    (Split::Train, "train.en.txt", "train.vi.txt"),
    (Split::Test, "test.en.new.txt", "test.vi.new.txt"),
    (Split::Validation, "val.en.new.txt", "val.vi.new.txt"),
];

const SCHEMAS: [Schema; 2] = [Schema::Source, Schema::Text2Text];
const SOURCE_VERSION: &str = "1.0.0";
const SEACROWD_VERSION: &str = "1.0.0";

#[derive(Serialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub id: String,
    pub text: String,
}

pub struct Medev;

fn url(file: &str) -> String {
    format!("{}/{}?download=true", BASE_URL, file)
}

impl Loader for Medev {
    fn info(&self) -> DatasetInfo {
        DatasetInfo {
            name: DATASETNAME,
            description: "A high-quality Vietnamese-English parallel dataset constructed specifically for the medical domain, comprising approximately 360K sentence pairs",
            homepage: "https://huggingface.co/datasets/nhuvo/MedEV",
            license: License::Unknown,
            citation: CITATION,
            languages: &["vie"],
            tasks: &[Task::MachineTranslation],
            local: false,
            source_version: SOURCE_VERSION,
            seacrowd_version: SEACROWD_VERSION,
        }
    }

    fn configs(&self) -> Vec<LoaderConfig> {
        SCHEMAS
            .into_iter()
            .map(|schema| {
                LoaderConfig::new(DATASETNAME, schema, SOURCE_VERSION, SEACROWD_VERSION, DATASETNAME)
            })
            .collect()
    }

    fn source_schema(&self) -> RootSchema {
        schema_for!(Source)
    }

    fn splits(&self, config: &LoaderConfig, ctx: &Context) -> Result<Vec<SplitGenerator>, Error> {
        ensure_schema(config, &SCHEMAS)?;

        FILES
            .iter()
            .map(|(split, en, vie)| {
                let en_path = download_and_extract(ctx.fetcher.as_ref(), &url(en))?;
                let vie_path = download_and_extract(ctx.fetcher.as_ref(), &url(vie))?;
                let examples = generate(&en_path, &vie_path, config.schema)?;
                Ok(SplitGenerator::from_vec(*split, examples))
            })
            .collect()
    }
}

/// Build the records of one split.
///
/// Source records list every english line, then every vietnamese one.
/// Text-to-text records pair lines by position, the shortest file bounding the output.
pub fn generate(en_path: &Path, vie_path: &Path, schema: Schema) -> Result<Vec<Example>, Error> {
    if !SCHEMAS.contains(&schema) {
        return Err(unsupported_schema(DATASETNAME, schema));
    }
    let en_lines = read_lines(en_path)?;
    let vie_lines = read_lines(vie_path)?;

    let examples = match schema {
        Schema::Text2Text => {
            if en_lines.len() != vie_lines.len() {
                warn!(
                    "{:?} and {:?} are not aligned ({} vs {} lines), extra lines are dropped",
                    en_path,
                    vie_path,
                    en_lines.len(),
                    vie_lines.len()
                );
            }
            en_lines
                .into_iter()
                .zip(vie_lines)
                .enumerate()
                .map(|(i, (en, vie))| {
                    Example::Text2Text(Text2Text {
                        id: i.to_string(),
                        text_1: en,
                        text_2: vie,
                        text_1_name: "en".to_string(),
                        text_2_name: "vie".to_string(),
                    })
                })
                .collect()
        }
        Schema::Source => en_lines
            .into_iter()
            .chain(vie_lines)
            .enumerate()
            .map(|(i, text)| {
                Example::Source(SourceRecord::Medev(Source {
                    id: i.to_string(),
                    text,
                }))
            })
            .collect(),
        other => return Err(unsupported_schema(DATASETNAME, other)),
    };

    Ok(examples)
}
