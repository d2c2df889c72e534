//! Named loader configurations.
//!
//! A configuration fixes the subset (language, answer count, word class...) and
//! the output [Schema] for a whole generation run.
use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;
use std::str::FromStr;

use serde::Serialize;

use crate::download::Fetch;
use crate::error::Error;

/// Output shape of the emitted records.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Schema {
    #[serde(rename = "source")]
    Source,
    #[serde(rename = "seacrowd_imtext")]
    ImageText,
    #[serde(rename = "seacrowd_t2t")]
    Text2Text,
    #[serde(rename = "seacrowd_qa")]
    QuestionAnswering,
    #[serde(rename = "seacrowd_pairs")]
    Pairs,
}

impl Schema {
    pub fn as_str(&self) -> &'static str {
        match self {
            Schema::Source => "source",
            Schema::ImageText => "seacrowd_imtext",
            Schema::Text2Text => "seacrowd_t2t",
            Schema::QuestionAnswering => "seacrowd_qa",
            Schema::Pairs => "seacrowd_pairs",
        }
    }
}

impl FromStr for Schema {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "source" => Ok(Schema::Source),
            "seacrowd_imtext" => Ok(Schema::ImageText),
            "seacrowd_t2t" => Ok(Schema::Text2Text),
            "seacrowd_qa" => Ok(Schema::QuestionAnswering),
            "seacrowd_pairs" => Ok(Schema::Pairs),
            other => Err(Error::UnknownSchema(other.to_string())),
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Validation,
    Test,
}

impl Split {
    pub fn as_str(&self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Validation => "validation",
            Split::Test => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub name: String,
    pub version: &'static str,
    pub description: String,
    pub schema: Schema,
    pub subset_id: String,
}

impl LoaderConfig {
    /// Build the `{subset}_{schema}` configuration, with the version matching the schema kind.
    pub fn new(
        subset: &str,
        schema: Schema,
        source_version: &'static str,
        seacrowd_version: &'static str,
        subset_id: impl Into<String>,
    ) -> Self {
        let (version, description) = match schema {
            Schema::Source => (source_version, format!("{} source schema", subset)),
            _ => (seacrowd_version, format!("{} SEACrowd schema", subset)),
        };
        Self {
            name: format!("{}_{}", subset, schema),
            version,
            description,
            schema,
            subset_id: subset_id.into(),
        }
    }
}

/// What a loader may need from the outside while building its splits.
#[derive(Clone)]
pub struct Context {
    pub fetcher: Rc<dyn Fetch>,
    /// Directory holding manually obtained files, for local datasets.
    pub data_dir: Option<PathBuf>,
    /// Download the images referenced by image-text records.
    pub fetch_images: bool,
}

impl Context {
    pub fn new(fetcher: Rc<dyn Fetch>) -> Self {
        Self {
            fetcher,
            data_dir: None,
            fetch_images: false,
        }
    }

    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        self.data_dir = data_dir;
        self
    }

    pub fn with_fetch_images(mut self, fetch_images: bool) -> Self {
        self.fetch_images = fetch_images;
        self
    }

    /// Get the data dir, failing when the dataset has to be supplied manually and none was given.
    pub fn require_data_dir(&self) -> Result<&PathBuf, Error> {
        self.data_dir.as_ref().ok_or_else(|| {
            Error::MissingLocalResource(
                "This is a local dataset. Please pass a data directory (--data-dir).".to_string(),
            )
        })
    }
}
