//! Static dataset descriptions.
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum License {
    #[serde(rename = "CC BY 4.0")]
    CcBy4,
    #[serde(rename = "CC BY-NC-SA 2.0")]
    CcByNcSa2,
    #[serde(rename = "Unknown")]
    Unknown,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Task {
    ImageCaptioning,
    MachineTranslation,
    QuestionAnswering,
    WordAnalogy,
    SemanticSimilarity,
}

/// Holds what is known about a dataset, independently of the selected configuration.
#[derive(Serialize, Debug, Clone)]
pub struct DatasetInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub homepage: &'static str,
    pub license: License,
    pub citation: &'static str,
    /// ISO 639-3 codes.
    pub languages: &'static [&'static str],
    pub tasks: &'static [Task],
    /// Whether part of the data has to be supplied manually.
    pub local: bool,
    pub source_version: &'static str,
    pub seacrowd_version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize() {
        let info = DatasetInfo {
            name: "dummy",
            description: "a dummy dataset",
            homepage: "https://example.org",
            license: License::CcBy4,
            citation: "",
            languages: &["vie"],
            tasks: &[Task::WordAnalogy],
            local: false,
            source_version: "1.0.0",
            seacrowd_version: "1.0.0",
        };

        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value["license"], "CC BY 4.0");
        assert_eq!(value["tasks"][0], "WORD_ANALOGY");
        assert_eq!(value["languages"][0], "vie");
    }
}
