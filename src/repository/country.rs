use async_trait::async_trait;

use crate::client::{find_countries, get_countries};

use super::errors::FetchError;

/// A country record as returned by the remote metadata source, before the
/// directory derives its display shape from it.
#[derive(Clone, Debug, PartialEq)]
pub struct RawCountry {
    pub name: String,
    pub code: String,
    pub timezones: Vec<String>,
    pub capitals: Vec<String>,
}

/// Remote country metadata. Calls carry no retry and no caching contract;
/// a failed call is reported once and the caller falls back.
#[async_trait]
pub trait Source: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<RawCountry>, FetchError>;
    async fn fetch_by_name(&self, query: String) -> Result<Vec<RawCountry>, FetchError>;
}

pub struct HttpSource {
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: String) -> HttpSource {
        HttpSource { base_url }
    }
}

#[async_trait]
impl Source for HttpSource {
    async fn fetch_all(&self) -> Result<Vec<RawCountry>, FetchError> {
        let countries = get_countries::new(self.base_url.clone()).execute().await?;
        Ok(countries.into_iter().map(RawCountry::from).collect())
    }

    async fn fetch_by_name(&self, query: String) -> Result<Vec<RawCountry>, FetchError> {
        let countries = find_countries::new(self.base_url.clone(), query)
            .execute()
            .await?;
        Ok(countries.into_iter().map(RawCountry::from).collect())
    }
}

impl From<get_countries::ClientCountry> for RawCountry {
    fn from(value: get_countries::ClientCountry) -> Self {
        Self {
            name: value.name.common,
            code: value.cca2,
            timezones: value.timezones,
            capitals: value.capital,
        }
    }
}
