//! ViSim-400: Vietnamese word pairs rated on the similarity/relatedness continuum.
//!
//! Ships in the same archive as [super::vicon].
use std::fs::File;
use std::io::Read;

use schemars::{schema::RootSchema, schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use crate::config::{Context, LoaderConfig, Schema, Split};
use crate::datasets::vicon::{VIDATA_CITATION, VIDATA_HOMEPAGE, VIDATA_URL};
use crate::datasets::{ensure_schema, unsupported_schema, Loader, SourceRecord, SplitGenerator};
use crate::download::download_and_extract;
use crate::error::Error;
use crate::io::reader::{delimited, Dialect};
use crate::metadata::{DatasetInfo, License, Task};
use crate::schemas::{Example, Text2Text};

const DATASETNAME: &str = "visim400";
const FILE: &str = "ViData/ViSim-400/Visim-400.txt";

const SCHEMAS: [Schema; 2] = [Schema::Source, Schema::Text2Text];
const SOURCE_VERSION: &str = "1.0.0";
const SEACROWD_VERSION: &str = "1.0.0";

#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
pub struct Source {
    #[serde(rename = "Word1")]
    pub word_1: String,
    #[serde(rename = "Word2")]
    pub word_2: String,
    #[serde(rename = "POS")]
    pub pos: String,
    #[serde(rename = "Sim1")]
    pub sim_1: String,
    #[serde(rename = "Sim2")]
    pub sim_2: String,
    #[serde(rename = "STD")]
    pub std: String,
}

pub struct Visim400;

impl Loader for Visim400 {
    fn info(&self) -> DatasetInfo {
        DatasetInfo {
            name: DATASETNAME,
            description: "ViSim-400 is a Vietnamese dataset of semantic relation pairs for evaluation of models that reflect the continuum between similarity and relatedness.",
            homepage: VIDATA_HOMEPAGE,
            license: License::CcByNcSa2,
            citation: VIDATA_CITATION,
            languages: &["vie"],
            tasks: &[Task::SemanticSimilarity],
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
        let data_dir = download_and_extract(ctx.fetcher.as_ref(), VIDATA_URL)?;
        let examples = generate(File::open(data_dir.join(FILE))?, config.schema)?;
        Ok(vec![SplitGenerator::from_vec(Split::Train, examples)])
    }
}

/// Parse the ratings file. Text-to-text records carry the two similarity ratings as text names.
pub fn generate<R: Read>(reader: R, schema: Schema) -> Result<Vec<Example>, Error> {
    if !SCHEMAS.contains(&schema) {
        return Err(unsupported_schema(DATASETNAME, schema));
    }
    let rows: Vec<Source> = delimited::read_records(reader, Dialect::tsv())?;

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| match schema {
            Schema::Text2Text => Ok(Example::Text2Text(Text2Text {
                id: index.to_string(),
                text_1: row.word_1,
                text_2: row.word_2,
                text_1_name: row.sim_1,
                text_2_name: row.sim_2,
            })),
            Schema::Source => Ok(Example::Source(SourceRecord::Visim400(row))),
            other => Err(unsupported_schema(DATASETNAME, other)),
        })
        .collect()
}
