/*! ViCon

Vietnamese synonym and antonym pairs across nouns, verbs and adjectives.
The word class is selected by the configuration (`vicon_noun`, `vicon_adj`, `vicon_verb`).

Pairs files are tab separated, with a `Word1 Word2 Relation` header.
!*/
use std::fs::File;
use std::io::Read;

use itertools::iproduct;
use schemars::{schema::RootSchema, schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use crate::config::{Context, LoaderConfig, Schema, Split};
use crate::datasets::{ensure_schema, unsupported_schema, Loader, SourceRecord, SplitGenerator};
use crate::download::download_and_extract;
use crate::error::Error;
use crate::io::reader::{delimited, Dialect};
use crate::metadata::{DatasetInfo, License, Task};
use crate::schemas::{Example, Pairs};

const DATASETNAME: &str = "vicon";

pub(crate) const VIDATA_CITATION: &str = r#"@inproceedings{nguyen-etal-2018-introducing,
    title = "Introducing Two {V}ietnamese Datasets for Evaluating Semantic Models of (Dis-)Similarity and Relatedness",
    author = "Nguyen, Kim Anh  and
      Schulte im Walde, Sabine  and
      Vu, Ngoc Thang",
    editor = "Walker, Marilyn  and
      Ji, Heng  and
      Stent, Amanda",
    booktitle = "Proceedings of the 2018 Conference of the North {A}merican Chapter of the Association for Computational Linguistics: Human Language Technologies, Volume 2 (Short Papers)",
    month = jun,
    year = "2018",
    address = "New Orleans, Louisiana",
    publisher = "Association for Computational Linguistics",
    url = "https://aclanthology.org/N18-2032",
    doi = "10.18653/v1/N18-2032",
    pages = "199--205",
}"#;

pub(crate) const VIDATA_HOMEPAGE: &str =
    "https://www.ims.uni-stuttgart.de/forschung/ressourcen/experiment-daten/vnese-sem-datasets/";

/// Archive holding both ViCon and ViSim-400.
pub(crate) const VIDATA_URL: &str =
    "https://www.ims.uni-stuttgart.de/documents/ressourcen/experiment-daten/ViData.zip";

/// Word classes and their number of pairs.
const SCHEMAS: [Schema; 2] = [Schema::Source, Schema::Pairs];
const TYPES: [(&str, u32); 3] = [("noun", 400), ("adj", 600), ("verb", 400)];

const SOURCE_VERSION: &str = "1.0.0";
const SEACROWD_VERSION: &str = "1.0.0";

/// A pairs file row, serialized back as is for the source schema.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
pub struct Source {
    #[serde(rename = "Word1")]
    pub word_1: String,
    #[serde(rename = "Word2")]
    pub word_2: String,
    #[serde(rename = "Relation")]
    pub relation: String,
}

pub struct Vicon;

impl Vicon {
    /// Path of the pairs file of `config` inside the extracted archive.
    fn pairs_file(config: &LoaderConfig) -> Result<String, Error> {
        let kind = config
            .subset_id
            .strip_prefix(DATASETNAME)
            .and_then(|s| s.strip_prefix('_'))
            .ok_or_else(|| Error::UnknownConfig(config.name.clone()))?;
        let (kind, number) = TYPES
            .iter()
            .find(|(t, _)| *t == kind)
            .ok_or_else(|| Error::UnknownConfig(config.name.clone()))?;
        Ok(format!("ViData/ViCon/{}_{}_pairs.txt", number, kind))
    }
}

impl Loader for Vicon {
    fn info(&self) -> DatasetInfo {
        DatasetInfo {
            name: DATASETNAME,
            description: "ViCon, comprises pairs of synonyms and antonymys across noun, verb, and adjective classes, offerring data to distinguish between similarity and dissimilarity.",
            homepage: VIDATA_HOMEPAGE,
            license: License::CcByNcSa2,
            citation: VIDATA_CITATION,
            languages: &["vie"],
            tasks: &[Task::WordAnalogy],
            local: false,
            source_version: SOURCE_VERSION,
            seacrowd_version: SEACROWD_VERSION,
        }
    }

    fn configs(&self) -> Vec<LoaderConfig> {
        iproduct!(TYPES, SCHEMAS)
            .map(|((kind, _), schema)| {
                let subset = format!("{}_{}", DATASETNAME, kind);
                LoaderConfig::new(&subset, schema, SOURCE_VERSION, SEACROWD_VERSION, &*subset)
            })
            .collect()
    }

    fn source_schema(&self) -> RootSchema {
        schema_for!(Source)
    }

    fn splits(&self, config: &LoaderConfig, ctx: &Context) -> Result<Vec<SplitGenerator>, Error> {
        ensure_schema(config, &SCHEMAS)?;
        let pairs_file = Self::pairs_file(config)?;

        let data_dir = download_and_extract(ctx.fetcher.as_ref(), VIDATA_URL)?;
        let examples = generate(File::open(data_dir.join(pairs_file))?, config.schema)?;

        Ok(vec![SplitGenerator::from_vec(Split::Train, examples)])
    }
}

/// Parse a pairs file.
///
/// Under the pairs schema, relations outside the label set fail the whole file.
/// Schemas other than `source` and `seacrowd_pairs` fail before reading.
pub fn generate<R: Read>(reader: R, schema: Schema) -> Result<Vec<Example>, Error> {
    if !SCHEMAS.contains(&schema) {
        return Err(unsupported_schema(DATASETNAME, schema));
    }
    let rows: Vec<Source> = delimited::read_records(reader, Dialect::tsv())?;

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            let example = match schema {
                Schema::Pairs => Example::Pairs(Pairs {
                    id: index.to_string(),
                    label: row.relation.parse()?,
                    text_1: row.word_1,
                    text_2: row.word_2,
                }),
                Schema::Source => Example::Source(SourceRecord::Vicon(row)),
                other => return Err(unsupported_schema(DATASETNAME, other)),
            };
            Ok(example)
        })
        .collect()
}
