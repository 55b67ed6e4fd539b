use crate::client;

#[derive(Debug, PartialEq)]
pub enum FindError {
    NotFound,
    Unknown,
}

#[derive(Debug, PartialEq)]
pub enum FindAllError {
    Unknown,
}

#[derive(Debug, PartialEq)]
pub enum InsertError {
    Unknown,
}

#[derive(Debug, PartialEq)]
pub enum UpdateError {
    Unknown,
}

#[derive(Debug, PartialEq)]
pub enum DeleteError {
    NotFound,
    Unknown,
}

/// Covers both unreachable sources and malformed payloads; either way the
/// caller substitutes the embedded fallback data.
#[derive(Debug, PartialEq)]
pub enum FetchError {
    Unknown,
}

impl From<client::Error> for FetchError {
    fn from(value: client::Error) -> Self {
        log::error!(
            "occurred an error querying the remote source: {}",
            value.message
        );
        Self::Unknown
    }
}
