//! Question answering records.
use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct QuestionAnswering {
    pub id: String,
    pub question_id: String,
    pub document_id: String,
    pub question: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub choices: Vec<String>,
    pub context: Option<String>,
    pub answer: Vec<String>,
    pub meta: BTreeMap<String, String>,
}
