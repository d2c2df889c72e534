//! Language code handling.
//!
//! Configurations are named after ISO 639-3 codes (`vie`, `ind`...) while the
//! translation corpora tag their records with the shortest BCP47 tag (`vi`, `id`...).
use std::collections::HashMap;

use lazy_static::lazy_static;
use oxilangtag::LanguageTag;

use crate::error::Error;

lazy_static! {
    /// ISO 639-3 codes of the languages covered by the loaders, with their BCP47 counterpart.
    pub static ref ISO639_3_TO_BCP47: HashMap<&'static str, &'static str> = [
        ("eng", "en"),
        ("fil", "fil"),
        ("ind", "id"),
        ("jav", "jv"),
        ("khm", "km"),
        ("lao", "lo"),
        ("mya", "my"),
        ("sun", "su"),
        ("tgl", "tl"),
        ("tha", "th"),
        ("vie", "vi"),
        ("zsm", "ms"),
    ]
    .iter()
    .copied()
    .collect();
}

/// Convert an ISO 639-3 code into a validated BCP47 tag.
pub fn to_bcp47(code: &str) -> Result<LanguageTag<String>, Error> {
    let tag = ISO639_3_TO_BCP47
        .get(code)
        .ok_or_else(|| Error::UnknownLang(code.to_string()))?;
    Ok(LanguageTag::parse(tag.to_string())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes() {
        assert_eq!(to_bcp47("vie").unwrap().as_str(), "vi");
        assert_eq!(to_bcp47("ind").unwrap().as_str(), "id");
        assert_eq!(to_bcp47("fil").unwrap().as_str(), "fil");
        assert_eq!(to_bcp47("tha").unwrap().primary_language(), "th");
    }

    #[test]
    fn unknown_code() {
        assert!(matches!(to_bcp47("xyz"), Err(Error::UnknownLang(_))));
    }
}
