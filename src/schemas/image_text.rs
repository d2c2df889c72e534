//! Image-text records.
use schemars::JsonSchema;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default, JsonSchema)]
pub struct ImageTextMetadata {
    pub context: Option<String>,
    pub labels: Option<Vec<String>>,
}

/// One or more images tied to a text.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct ImageText {
    pub id: String,
    /// Image locators: remote urls, or local paths once downloaded.
    pub image_paths: Vec<String>,
    pub texts: String,
    pub metadata: ImageTextMetadata,
}
