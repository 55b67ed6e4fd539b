use async_trait::async_trait;

use crate::repository::country::{RawCountry, Source};
use crate::repository::errors::FetchError;
use crate::repository::worldtime::{RawTime, TimeSource};

pub struct StaticSource {
    countries: Vec<RawCountry>,
}

impl StaticSource {
    pub fn new(countries: Vec<RawCountry>) -> StaticSource {
        StaticSource { countries }
    }
}

#[async_trait]
impl Source for StaticSource {
    async fn fetch_all(&self) -> Result<Vec<RawCountry>, FetchError> {
        Ok(self.countries.clone())
    }

    async fn fetch_by_name(&self, query: String) -> Result<Vec<RawCountry>, FetchError> {
        let query = query.to_lowercase();
        Ok(self
            .countries
            .iter()
            .filter(|country| country.name.to_lowercase().contains(&query))
            .cloned()
            .collect())
    }
}

pub struct FailingSource {}

#[async_trait]
impl Source for FailingSource {
    async fn fetch_all(&self) -> Result<Vec<RawCountry>, FetchError> {
        Err(FetchError::Unknown)
    }

    async fn fetch_by_name(&self, _query: String) -> Result<Vec<RawCountry>, FetchError> {
        Err(FetchError::Unknown)
    }
}

pub struct StaticTimeSource {
    time: RawTime,
}

impl StaticTimeSource {
    pub fn new(time: RawTime) -> StaticTimeSource {
        StaticTimeSource { time }
    }
}

#[async_trait]
impl TimeSource for StaticTimeSource {
    async fn fetch_current(&self, _timezone: String) -> Result<RawTime, FetchError> {
        Ok(self.time.clone())
    }

    async fn fetch_timezones(&self) -> Result<Vec<String>, FetchError> {
        Ok(vec![self.time.timezone.clone()])
    }
}

pub struct FailingTimeSource {}

#[async_trait]
impl TimeSource for FailingTimeSource {
    async fn fetch_current(&self, _timezone: String) -> Result<RawTime, FetchError> {
        Err(FetchError::Unknown)
    }

    async fn fetch_timezones(&self) -> Result<Vec<String>, FetchError> {
        Err(FetchError::Unknown)
    }
}
