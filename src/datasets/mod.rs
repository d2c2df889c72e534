/*! Dataset loaders.

Each loader declares its metadata and named configurations, and turns the fetched files
into one lazily consumed sequence of [Example] per split.

| loader | content | standardized schema |
|---|---|---|
| [cc3m_35l] | machine translated image captions | `seacrowd_imtext` |
| [medev] | English-Vietnamese medical sentence pairs | `seacrowd_t2t` |
| [uit_vicov19qa] | Vietnamese community QA about COVID-19 | `seacrowd_qa` |
| [vicon] | Vietnamese synonym/antonym pairs | `seacrowd_pairs` |
| [visim400] | Vietnamese word similarity ratings | `seacrowd_t2t` |
!*/
pub mod cc3m_35l;
pub mod medev;
pub mod uit_vicov19qa;
pub mod vicon;
pub mod visim400;

use schemars::schema::RootSchema;
use serde::Serialize;

use crate::config::{Context, LoaderConfig, Schema, Split};
use crate::error::Error;
use crate::join::FailedRows;
use crate::metadata::DatasetInfo;
use crate::schemas::{self, Example};

pub type Examples = Box<dyn Iterator<Item = Result<Example, Error>>>;

/// A split and the records it yields.
pub struct SplitGenerator {
    pub split: Split,
    pub examples: Examples,
    /// Filled while `examples` is consumed, when images are downloaded.
    pub failed_images: Option<FailedRows>,
}

impl SplitGenerator {
    pub fn new(split: Split, examples: Examples) -> Self {
        Self {
            split,
            examples,
            failed_images: None,
        }
    }

    pub fn with_failed_images(mut self, failed: FailedRows) -> Self {
        self.failed_images = Some(failed);
        self
    }

    /// Build a split from already parsed records.
    pub fn from_vec(split: Split, examples: Vec<Example>) -> Self {
        Self::new(split, Box::new(examples.into_iter().map(Ok)))
    }
}

pub trait Loader {
    fn info(&self) -> DatasetInfo;

    /// Every configuration this loader accepts.
    fn configs(&self) -> Vec<LoaderConfig>;

    /// JSON schema of the `source` records.
    fn source_schema(&self) -> RootSchema;

    /// Fetch what is needed and prepare the splits of `config`.
    fn splits(&self, config: &LoaderConfig, ctx: &Context) -> Result<Vec<SplitGenerator>, Error>;

    /// JSON schema of the records emitted under `config`.
    fn json_schema(&self, config: &LoaderConfig) -> RootSchema {
        schemas::standard_json_schema(config.schema).unwrap_or_else(|| self.source_schema())
    }
}

/// Source records, one shape per loader.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum SourceRecord {
    Cc3m35l(cc3m_35l::Source),
    Medev(medev::Source),
    UitVicov19qa(uit_vicov19qa::Source),
    Vicon(vicon::Source),
    Visim400(visim400::Source),
}

impl SourceRecord {
    pub fn id(&self) -> Option<&str> {
        match self {
            SourceRecord::Cc3m35l(s) => Some(&s.id),
            SourceRecord::Medev(s) => Some(&s.id),
            SourceRecord::UitVicov19qa(s) => Some(&s.id),
            SourceRecord::Vicon(_) | SourceRecord::Visim400(_) => None,
        }
    }
}

/// Every available loader.
pub fn loaders() -> Vec<Box<dyn Loader>> {
    vec![
        Box::new(cc3m_35l::Cc3m35l),
        Box::new(medev::Medev),
        Box::new(uit_vicov19qa::UitVicov19qa),
        Box::new(vicon::Vicon),
        Box::new(visim400::Visim400),
    ]
}

/// Find the loader declaring the configuration `name`.
pub fn find(name: &str) -> Result<(Box<dyn Loader>, LoaderConfig), Error> {
    loaders()
        .into_iter()
        .find_map(|loader| {
            let config = loader.configs().into_iter().find(|c| c.name == name)?;
            Some((loader, config))
        })
        .ok_or_else(|| Error::UnknownConfig(name.to_string()))
}

/// Error for a schema `dataset` has no records for.
pub(crate) fn unsupported_schema(dataset: &str, schema: Schema) -> Error {
    Error::UnknownSchema(format!("{} (dataset {})", schema, dataset))
}

/// Fail on schemas a loader does not emit.
pub(crate) fn ensure_schema(config: &LoaderConfig, supported: &[Schema]) -> Result<(), Error> {
    if supported.contains(&config.schema) {
        Ok(())
    } else {
        Err(Error::UnknownSchema(format!(
            "{} (configuration {})",
            config.schema, config.name
        )))
    }
}
