//! Text-to-text records (translation, paraphrase...).
use schemars::JsonSchema;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct Text2Text {
    pub id: String,
    pub text_1: String,
    pub text_2: String,
    /// Usually the language of `text_1`.
    pub text_1_name: String,
    pub text_2_name: String,
}
