//! Error enum
use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Csv(csv::Error),
    Reqwest(reqwest::Error),
    Zip(zip::result::ZipError),
    Url(url::ParseError),
    LangTag(oxilangtag::LanguageTagParseError),
    /// No loader declares a configuration with this name.
    UnknownConfig(String),
    UnknownSchema(String),
    UnknownLabel(String),
    UnknownLang(String),
    /// A manually supplied file or directory is absent.
    MissingLocalResource(String),
    /// A stream record points to a side table position that does not exist.
    MissingSideRow {
        rec_num: u64,
        line: usize,
    },
    MalformedRecord {
        line: usize,
        source: serde_json::Error,
    },
    MalformedRow(String),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serde(e) => write!(f, "json error: {}", e),
            Error::Csv(e) => write!(f, "csv error: {}", e),
            Error::Reqwest(e) => write!(f, "download error: {}", e),
            Error::Zip(e) => write!(f, "zip error: {}", e),
            Error::Url(e) => write!(f, "invalid url: {}", e),
            Error::LangTag(e) => write!(f, "invalid language tag: {}", e),
            Error::UnknownConfig(name) => write!(f, "no configuration named {:?}", name),
            Error::UnknownSchema(name) => write!(f, "unsupported schema {:?}", name),
            Error::UnknownLabel(label) => write!(f, "label {:?} is not in the label set", label),
            Error::UnknownLang(lang) => write!(f, "unknown language code {:?}", lang),
            Error::MissingLocalResource(msg) => write!(f, "{}", msg),
            Error::MissingSideRow { rec_num, line } => write!(
                f,
                "line {}: rec_num {} has no matching row in the side table",
                line, rec_num
            ),
            Error::MalformedRecord { line, source } => {
                write!(f, "line {}: malformed record: {}", line, source)
            }
            Error::MalformedRow(msg) => write!(f, "malformed row: {}", msg),
            Error::Custom(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Serde(e) => Some(e),
            Error::Csv(e) => Some(e),
            Error::Reqwest(e) => Some(e),
            Error::Zip(e) => Some(e),
            Error::Url(e) => Some(e),
            Error::MalformedRecord { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::Reqwest(e)
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(e: zip::result::ZipError) -> Error {
        Error::Zip(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Error {
        Error::Url(e)
    }
}

impl From<oxilangtag::LanguageTagParseError> for Error {
    fn from(e: oxilangtag::LanguageTagParseError) -> Error {
        Error::LangTag(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}
