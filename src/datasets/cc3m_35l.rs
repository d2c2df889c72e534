/*! CC3M-35L

Conceptual Captions 3M machine translated into 34 languages.

The translations are public, but the image urls live in the Conceptual Captions
tsv files, which have to be downloaded manually (Google account) into the data directory:

- `Train_GCC-training.tsv`
- `Validation_GCC-1.1.0-Validation.tsv`

Translations reference their caption by line number in those files, see [crate::join].
!*/
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use itertools::iproduct;
use log::info;
use schemars::{schema::RootSchema, schema_for, JsonSchema};
use serde::Serialize;

use crate::config::{Context, LoaderConfig, Schema, Split};
use crate::datasets::{ensure_schema, unsupported_schema, Loader, SourceRecord, SplitGenerator};
use crate::download::download_and_extract;
use crate::error::Error;
use crate::io::reader::SideTable;
use crate::join::{ImageFetch, Joined, StreamJoin};
use crate::lang;
use crate::metadata::{DatasetInfo, License, Task};
use crate::schemas::{Example, ImageText, ImageTextMetadata};

const DATASETNAME: &str = "cc3m_35l";

const CITATION: &str = r#"@inproceedings{thapliyal-etal-2022-crossmodal,
    title = "Crossmodal-3600: A Massively Multilingual Multimodal Evaluation Dataset",
    author = "Thapliyal, Ashish V.  and
      Pont Tuset, Jordi  and
      Chen, Xi  and
      Soricut, Radu",
    booktitle = "Proceedings of the 2022 Conference on Empirical Methods in Natural Language Processing",
    month = dec,
    year = "2022",
    address = "Abu Dhabi, United Arab Emirates",
    publisher = "Association for Computational Linguistics",
    url = "https://aclanthology.org/2022.emnlp-main.45",
    doi = "10.18653/v1/2022.emnlp-main.45",
    pages = "715--729",
}"#;

const URL_TRANS_TRAIN: &str =
    "https://storage.googleapis.com/crossmodal-3600/cc3m_mt_train.jsonl.bz2";
const URL_TRANS_DEV: &str = "https://storage.googleapis.com/crossmodal-3600/cc3m_mt_dev.jsonl.bz2";

pub const TRAIN_TSV: &str = "Train_GCC-training.tsv";
pub const VALIDATION_TSV: &str = "Validation_GCC-1.1.0-Validation.tsv";

const LANGUAGES: [&str; 4] = ["fil", "ind", "tha", "vie"];
const SCHEMAS: [Schema; 2] = [Schema::Source, Schema::ImageText];
const SOURCE_VERSION: &str = "1.0.0";
const SEACROWD_VERSION: &str = "2024.06.20";

#[derive(Serialize, JsonSchema, Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub id: String,
    pub image_paths: String,
    pub src_lang: String,
    pub caption_tokenized: String,
    /// ISO 639-3 code of the configuration.
    pub trg_lang: String,
    pub translation_tokenized: String,
    pub backtranslation_tokenized: String,
}

pub struct Cc3m35l;

impl Cc3m35l {
    /// ISO 639-3 code of a `cc3m_35l_<lang>` subset.
    fn subset_lang(config: &LoaderConfig) -> Result<&str, Error> {
        config
            .subset_id
            .strip_prefix(DATASETNAME)
            .and_then(|s| s.strip_prefix('_'))
            .filter(|lang| LANGUAGES.contains(lang))
            .ok_or_else(|| Error::UnknownConfig(config.name.clone()))
    }

    fn local_file(data_dir: &Path, name: &str) -> Result<PathBuf, Error> {
        let path = data_dir.join(name);
        if path.is_file() {
            Ok(path)
        } else {
            Err(Error::MissingLocalResource(format!(
                "{:?} not found. Download it from https://ai.google.com/research/ConceptualCaptions/download into the data directory.",
                path
            )))
        }
    }
}

impl Loader for Cc3m35l {
    fn info(&self) -> DatasetInfo {
        DatasetInfo {
            name: DATASETNAME,
            description: "CC3M-35L is created by translating Conceptual Captions 3M (Sharma et al., 2018), originally in English, to the other 34 languages using Google's machine translation API.",
            homepage: "https://google.github.io/crossmodal-3600/",
            license: License::CcBy4,
            citation: CITATION,
            languages: &LANGUAGES,
            tasks: &[Task::ImageCaptioning],
            local: true,
            source_version: SOURCE_VERSION,
            seacrowd_version: SEACROWD_VERSION,
        }
    }

    fn configs(&self) -> Vec<LoaderConfig> {
        iproduct!(LANGUAGES, SCHEMAS)
            .map(|(lang, schema)| {
                let subset = format!("{}_{}", DATASETNAME, lang);
                LoaderConfig::new(&subset, schema, SOURCE_VERSION, SEACROWD_VERSION, &*subset)
            })
            .collect()
    }

    fn source_schema(&self) -> RootSchema {
        schema_for!(Source)
    }

    fn splits(&self, config: &LoaderConfig, ctx: &Context) -> Result<Vec<SplitGenerator>, Error> {
        ensure_schema(config, &SCHEMAS)?;
        let lang_code = Self::subset_lang(config)?;
        let trg_lang = lang::to_bcp47(lang_code)?;

        // manual files are checked before anything gets downloaded.
        let data_dir = ctx.require_data_dir()?;
        let train_tsv = Self::local_file(data_dir, TRAIN_TSV)?;
        let validation_tsv = Self::local_file(data_dir, VALIDATION_TSV)?;

        let dev_path = download_and_extract(ctx.fetcher.as_ref(), URL_TRANS_DEV)?;
        let train_path = download_and_extract(ctx.fetcher.as_ref(), URL_TRANS_TRAIN)?;

        let splits = [
            (Split::Train, train_path, train_tsv),
            (Split::Validation, dev_path, validation_tsv),
        ];

        splits
            .into_iter()
            .map(|(split, stream_path, tsv_path)| {
                let table = Rc::new(SideTable::from_path(&tsv_path)?);
                info!(
                    "[{}] {}: {} side table rows, joining on language {}",
                    config.name,
                    split,
                    table.len(),
                    trg_lang
                );
                let reader = BufReader::new(File::open(&stream_path)?);
                let join = StreamJoin::new(reader, table, trg_lang.as_str());

                let mut failed_images = None;
                let joined: Box<dyn Iterator<Item = Result<Joined, Error>>> =
                    if ctx.fetch_images && config.schema == Schema::ImageText {
                        let fetch = ImageFetch::new(join, ctx.fetcher.clone());
                        failed_images = Some(fetch.failed());
                        Box::new(fetch)
                    } else {
                        Box::new(join)
                    };

                let schema = config.schema;
                let lang_code = lang_code.to_string();
                let examples =
                    joined.map(move |j| j.and_then(|j| to_example(j, schema, &lang_code)));
                let generator = SplitGenerator::new(split, Box::new(examples));
                Ok(match failed_images {
                    Some(failed) => generator.with_failed_images(failed),
                    None => generator,
                })
            })
            .collect()
    }
}

/// Shape a joined record. `lang_code` is the ISO 639-3 code of the configuration.
pub fn to_example(joined: Joined, schema: Schema, lang_code: &str) -> Result<Example, Error> {
    let Joined {
        id,
        record,
        row,
        local_image,
    } = joined;

    match schema {
        Schema::ImageText => {
            let image = local_image
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or(row.img_url);
            Ok(Example::ImageText(ImageText {
                id: id.to_string(),
                image_paths: vec![image],
                texts: record.translation_tokenized,
                metadata: ImageTextMetadata::default(),
            }))
        }
        Schema::Source => Ok(Example::Source(SourceRecord::Cc3m35l(Source {
            id: id.to_string(),
            image_paths: row.img_url,
            src_lang: "en".to_string(),
            caption_tokenized: record.caption_tokenized,
            trg_lang: lang_code.to_string(),
            translation_tokenized: record.translation_tokenized,
            backtranslation_tokenized: record.backtranslation_tokenized,
        }))),
        other => Err(unsupported_schema(DATASETNAME, other)),
    }
}

#[cfg(test)]
mod tests {
    use crate::download::LocalFetcher;
    use crate::io::reader::LookupRow;
    use crate::join::StreamRecord;

    use super::*;

    fn joined() -> Joined {
        Joined {
            id: 0,
            record: StreamRecord {
                trg_lang: "vi".to_string(),
                rec_num: 2,
                caption_tokenized: "dog on rug".to_string(),
                translation_tokenized: "con chó trên tấm thảm".to_string(),
                backtranslation_tokenized: "dog on the rug".to_string(),
            },
            row: LookupRow {
                caption: "dog on rug".to_string(),
                img_url: "http://x/2".to_string(),
            },
            local_image: None,
        }
    }

    #[test]
    fn configs() {
        let configs = Cc3m35l.configs();
        assert_eq!(configs.len(), 8);
        assert!(configs
            .iter()
            .any(|c| c.name == "cc3m_35l_vie_seacrowd_imtext" && c.version == SEACROWD_VERSION));
        assert!(configs.iter().any(|c| c.name == "cc3m_35l_fil_source"));
    }

    #[test]
    fn source_example() {
        let e = to_example(joined(), Schema::Source, "vie").unwrap();
        match e {
            Example::Source(SourceRecord::Cc3m35l(s)) => {
                assert_eq!(s.id, "0");
                assert_eq!(s.image_paths, "http://x/2");
                assert_eq!(s.src_lang, "en");
                assert_eq!(s.trg_lang, "vie");
                assert_eq!(s.caption_tokenized, "dog on rug");
                assert_eq!(s.backtranslation_tokenized, "dog on the rug");
            }
            other => panic!("unexpected example {:?}", other),
        }
    }

    #[test]
    fn imtext_example() {
        let e = to_example(joined(), Schema::ImageText, "vie").unwrap();
        assert_eq!(
            e,
            Example::ImageText(ImageText {
                id: "0".to_string(),
                image_paths: vec!["http://x/2".to_string()],
                texts: "con chó trên tấm thảm".to_string(),
                metadata: ImageTextMetadata {
                    context: None,
                    labels: None
                },
            })
        );

        let mut downloaded = joined();
        downloaded.local_image = Some(PathBuf::from("/cache/2.jpg"));
        let e = to_example(downloaded, Schema::ImageText, "vie").unwrap();
        match e {
            Example::ImageText(i) => assert_eq!(i.image_paths, vec!["/cache/2.jpg"]),
            other => panic!("unexpected example {:?}", other),
        }
    }

    #[test]
    fn other_schemas_are_rejected() {
        for schema in [Schema::Pairs, Schema::Text2Text, Schema::QuestionAnswering] {
            assert!(matches!(
                to_example(joined(), schema, "vie"),
                Err(Error::UnknownSchema(_))
            ));
        }
    }

    #[test]
    fn requires_data_dir() {
        let (_, config) = crate::datasets::find("cc3m_35l_vie_source").unwrap();
        let ctx = Context::new(Rc::new(LocalFetcher::new()));
        assert!(matches!(
            Cc3m35l.splits(&config, &ctx),
            Err(Error::MissingLocalResource(_))
        ));
    }

    #[test]
    fn requires_tsv_files() {
        let dir = tempfile::tempdir().unwrap();
        let (_, config) = crate::datasets::find("cc3m_35l_tha_seacrowd_imtext").unwrap();
        let ctx = Context::new(Rc::new(LocalFetcher::new()))
            .with_data_dir(Some(dir.path().to_path_buf()));
        match Cc3m35l.splits(&config, &ctx) {
            Err(Error::MissingLocalResource(msg)) => assert!(msg.contains(TRAIN_TSV)),
            Err(e) => panic!("unexpected error {:?}", e),
            Ok(_) => panic!("splits built without local files"),
        }
    }
}
