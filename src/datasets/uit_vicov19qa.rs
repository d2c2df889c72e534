/*! UIT-ViCoV19QA

Vietnamese community-based question answering about COVID-19.
Subsets `1_ans` to `4_ans` hold questions with up to that many paraphrased answers.

Files are `|` separated with a header: question id, question, then one column per answer.
!*/
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;

use itertools::iproduct;
use schemars::{schema::RootSchema, schema_for, JsonSchema};
use serde::Serialize;

use crate::config::{Context, LoaderConfig, Schema, Split};
use crate::datasets::{ensure_schema, unsupported_schema, Loader, SourceRecord, SplitGenerator};
use crate::download::download_and_extract;
use crate::error::Error;
use crate::io::reader::{delimited, Dialect};
use crate::metadata::{DatasetInfo, License, Task};
use crate::schemas::{Example, QuestionAnswering};

const DATASETNAME: &str = "uit_vicov19qa";

const CITATION: &str = r#"@inproceedings{thai-etal-2022-uit,
title = "{UIT}-{V}i{C}o{V}19{QA}: A Dataset for {COVID}-19 Community-based Question Answering on {V}ietnamese Language",
author = "Thai, Triet and Thao-Ha, Ngan Chu and Vo, Anh  and Luu, Son",
editor = "Dita, Shirley and Trillanes, Arlene and Lucas, Rochelle Irene",
booktitle = "Proceedings of the 36th Pacific Asia Conference on Language, Information and Computation",
month = oct,
year = "2022",
address = "Manila, Philippines",
publisher = "Association for Computational Linguistics",
url = "https://aclanthology.org/2022.paclic-1.88",
pages = "801--810",
}"#;

const BASE_URL: &str = "https://raw.githubusercontent.com/triet2397/UIT-ViCoV19QA/main/dataset";

const SUBSETS: [&str; 4] = ["1_ans", "2_ans", "3_ans", "4_ans"];

/// (split, file suffix), in generation order.
const FILES: [(Split, &str); 3] = [
    (Split::Train, "train"),
    (Split::Validation, "val"),
    (Split::Test, "test"),
];

const SCHEMAS: [Schema; 2] = [Schema::Source, Schema::QuestionAnswering];
const SOURCE_VERSION: &str = "1.0.0";
const SEACROWD_VERSION: &str = "1.0.0";

#[derive(Serialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub id: String,
    pub question: String,
    pub answers: Vec<String>,
}

pub struct UitVicov19qa;

fn url(subset: &str, file: &str) -> String {
    format!("{}/{}/UIT-ViCoV19QA_{}.csv", BASE_URL, subset, file)
}

impl Loader for UitVicov19qa {
    fn info(&self) -> DatasetInfo {
        DatasetInfo {
            name: DATASETNAME,
            description: "UIT-ViCoV19QA is the first Vietnamese community-based question answering dataset for developing question answering systems for COVID-19. The dataset comprises 4,500 question-answer pairs collected from trusted medical sources, with at least one answer and at most four unique paraphrased answers per question.",
            homepage: "https://github.com/triet2397/UIT-ViCoV19QA",
            license: License::Unknown,
            citation: CITATION,
            languages: &["vie"],
            tasks: &[Task::QuestionAnswering],
            local: false,
            source_version: SOURCE_VERSION,
            seacrowd_version: SEACROWD_VERSION,
        }
    }

    fn configs(&self) -> Vec<LoaderConfig> {
        iproduct!(SUBSETS, SCHEMAS)
            .map(|(subset, schema)| {
                LoaderConfig::new(
                    &format!("{}_{}", DATASETNAME, subset),
                    schema,
                    SOURCE_VERSION,
                    SEACROWD_VERSION,
                    subset,
                )
            })
            .collect()
    }

    fn source_schema(&self) -> RootSchema {
        schema_for!(Source)
    }

    fn splits(&self, config: &LoaderConfig, ctx: &Context) -> Result<Vec<SplitGenerator>, Error> {
        ensure_schema(config, &SCHEMAS)?;
        if !SUBSETS.contains(&config.subset_id.as_str()) {
            return Err(Error::UnknownConfig(config.name.clone()));
        }

        FILES
            .iter()
            .map(|(split, file)| {
                let path = download_and_extract(ctx.fetcher.as_ref(), &url(&config.subset_id, file))?;
                let examples = generate(File::open(path)?, config.schema)?;
                Ok(SplitGenerator::from_vec(*split, examples))
            })
            .collect()
    }
}

/// Parse one split file. Empty cells are kept as empty strings.
pub fn generate<R: Read>(reader: R, schema: Schema) -> Result<Vec<Example>, Error> {
    if !SCHEMAS.contains(&schema) {
        return Err(unsupported_schema(DATASETNAME, schema));
    }
    let (_, rows) = delimited::read_raw(reader, Dialect::pipe())?;

    rows.iter()
        .enumerate()
        .map(|(eid, row)| {
            let (question_id, question) = match (row.get(0), row.get(1)) {
                (Some(id), Some(question)) => (id.to_string(), question.to_string()),
                _ => {
                    return Err(Error::MalformedRow(format!(
                        "row {} has less than two columns",
                        eid
                    )))
                }
            };
            let answers: Vec<String> = row.iter().skip(2).map(String::from).collect();

            let example = match schema {
                Schema::QuestionAnswering => Example::QuestionAnswering(QuestionAnswering {
                    id: eid.to_string(),
                    question_id,
                    document_id: eid.to_string(),
                    question,
                    kind: None,
                    choices: Vec::new(),
                    context: None,
                    answer: answers,
                    meta: BTreeMap::new(),
                }),
                Schema::Source => Example::Source(SourceRecord::UitVicov19qa(Source {
                    id: question_id,
                    question,
                    answers,
                })),
                other => return Err(unsupported_schema(DATASETNAME, other)),
            };
            Ok(example)
        })
        .collect()
}
