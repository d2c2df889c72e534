/*! Output record shapes.

Besides the per-dataset source records (see [crate::datasets::SourceRecord]),
every loader can emit one of the standardized shapes below.
!*/
mod image_text;
mod pairs;
mod qa;
mod text2text;

use schemars::{schema::RootSchema, schema_for};
use serde::Serialize;

pub use image_text::{ImageText, ImageTextMetadata};
pub use pairs::{Pairs, Relation};
pub use qa::QuestionAnswering;
pub use text2text::Text2Text;

use crate::config::Schema;
use crate::datasets::SourceRecord;

/// A generated record.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Example {
    Source(SourceRecord),
    ImageText(ImageText),
    Text2Text(Text2Text),
    QuestionAnswering(QuestionAnswering),
    Pairs(Pairs),
}

impl Example {
    /// Get the record id, if the shape has one.
    pub fn id(&self) -> Option<&str> {
        match self {
            Example::Source(s) => s.id(),
            Example::ImageText(e) => Some(&e.id),
            Example::Text2Text(e) => Some(&e.id),
            Example::QuestionAnswering(e) => Some(&e.id),
            Example::Pairs(e) => Some(&e.id),
        }
    }
}

/// JSON schema of a standardized shape. Source shapes are described by their loader.
pub fn standard_json_schema(schema: Schema) -> Option<RootSchema> {
    match schema {
        Schema::Source => None,
        Schema::ImageText => Some(schema_for!(ImageText)),
        Schema::Text2Text => Some(schema_for!(Text2Text)),
        Schema::QuestionAnswering => Some(schema_for!(QuestionAnswering)),
        Schema::Pairs => Some(schema_for!(Pairs)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_serialization() {
        let e = Example::Text2Text(Text2Text {
            id: "3".to_string(),
            text_1: "hello".to_string(),
            text_2: "xin chào".to_string(),
            text_1_name: "en".to_string(),
            text_2_name: "vie".to_string(),
        });
        assert_eq!(e.id(), Some("3"));

        let v = serde_json::to_value(&e).unwrap();
        assert_eq!(v["text_2"], "xin chào");
        assert!(v.get("Text2Text").is_none());
    }

    #[test]
    fn schemas() {
        assert!(standard_json_schema(Schema::Source).is_none());
        let qa = serde_json::to_value(standard_json_schema(Schema::QuestionAnswering).unwrap())
            .unwrap();
        assert!(qa["properties"]["type"].is_object());
        assert!(qa["properties"]["answer"].is_object());
    }
}
