use async_trait::async_trait;

use crate::client::{get_time, get_timezones};

use super::errors::FetchError;

#[derive(Clone, Debug, PartialEq)]
pub struct RawTime {
    pub timezone: String,
    pub utc_offset_hours: Option<i32>,
    pub datetime: String,
}

/// Remote wall-clock lookup, used opportunistically: the embedded offset
/// table covers the same ground when this source is unreachable.
#[async_trait]
pub trait TimeSource: Send + Sync {
    async fn fetch_current(&self, timezone: String) -> Result<RawTime, FetchError>;
    async fn fetch_timezones(&self) -> Result<Vec<String>, FetchError>;
}

pub struct HttpTimeSource {
    base_url: String,
}

impl HttpTimeSource {
    pub fn new(base_url: String) -> HttpTimeSource {
        HttpTimeSource { base_url }
    }
}

#[async_trait]
impl TimeSource for HttpTimeSource {
    async fn fetch_current(&self, timezone: String) -> Result<RawTime, FetchError> {
        let time = get_time::new(self.base_url.clone(), timezone.clone())
            .execute()
            .await?;
        Ok(RawTime {
            timezone: if time.timezone.is_empty() {
                timezone
            } else {
                time.timezone
            },
            utc_offset_hours: time.utc_offset_hours,
            datetime: time.datetime,
        })
    }

    async fn fetch_timezones(&self) -> Result<Vec<String>, FetchError> {
        Ok(get_timezones::new(self.base_url.clone()).execute().await?)
    }
}
