//! Labeled word or sentence pairs.
use std::str::FromStr;

use schemars::JsonSchema;
use serde::Serialize;

use crate::error::Error;

/// Label set of the pairs records.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
pub enum Relation {
    #[serde(rename = "ANT")]
    Antonym,
    #[serde(rename = "SYN")]
    Synonym,
}

impl FromStr for Relation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ANT" => Ok(Relation::Antonym),
            "SYN" => Ok(Relation::Synonym),
            other => Err(Error::UnknownLabel(other.to_string())),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct Pairs {
    pub id: String,
    pub text_1: String,
    pub text_2: String,
    pub label: Relation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!("ANT".parse::<Relation>().unwrap(), Relation::Antonym);
        assert_eq!("SYN".parse::<Relation>().unwrap(), Relation::Synonym);
        assert!(matches!(
            "HYP".parse::<Relation>(),
            Err(Error::UnknownLabel(l)) if l == "HYP"
        ));
    }

    #[test]
    fn serialize() {
        let p = Pairs {
            id: "0".to_string(),
            text_1: "nóng".to_string(),
            text_2: "lạnh".to_string(),
            label: Relation::Antonym,
        };
        let v = serde_json::to_value(p).unwrap();
        assert_eq!(v["label"], "ANT");
    }
}
