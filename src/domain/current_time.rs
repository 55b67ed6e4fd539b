use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_trim::string_trim;

use crate::domain::timezone;
use crate::repository::worldtime::TimeSource;

#[derive(Deserialize, Clone, Debug)]
pub struct Request {
    #[serde(deserialize_with = "string_trim")]
    pub timezone: String,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct Response {
    pub timezone: String,
    pub country: String,
    pub city: String,
    pub offset: i32,
    pub current_time: String,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    Unavailable,
}

/// Live wall-clock lookup for a timezone label via the world time source.
/// Purely opportunistic: when the source is down the caller simply shows
/// nothing, the offset table keeps the rest of the system working.
pub async fn execute(source: Arc<dyn TimeSource>, req: Request) -> Result<Response, Error> {
    let time = match source.fetch_current(req.timezone.clone()).await {
        Ok(time) => time,
        Err(..) => return Err(Error::Unavailable),
    };

    Ok(Response {
        country: timezone::region_of(&time.timezone),
        city: timezone::city_of(&time.timezone),
        offset: time.utc_offset_hours.unwrap_or(0),
        current_time: time.datetime,
        timezone: time.timezone,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mocks;
    use crate::repository::worldtime::RawTime;

    #[tokio::test]
    async fn it_should_project_the_label_into_country_and_city() {
        let source = Arc::new(mocks::StaticTimeSource::new(RawTime {
            timezone: "America/New_York".to_string(),
            utc_offset_hours: Some(-5),
            datetime: "2024-06-01T04:00:00-05:00".to_string(),
        }));
        let req = Request {
            timezone: "America/New_York".to_string(),
        };

        let result = execute(source, req).await;

        match result {
            Ok(response) => {
                assert_eq!(response.country, "America");
                assert_eq!(response.city, "New York");
                assert_eq!(response.offset, -5);
            }
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn it_should_default_a_missing_offset_to_zero() {
        let source = Arc::new(mocks::StaticTimeSource::new(RawTime {
            timezone: "Asia/Tokyo".to_string(),
            utc_offset_hours: None,
            datetime: "2024-06-01T18:00:00+09:00".to_string(),
        }));
        let req = Request {
            timezone: "Asia/Tokyo".to_string(),
        };

        let result = execute(source, req).await;

        match result {
            Ok(response) => assert_eq!(response.offset, 0),
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn it_should_report_the_source_as_unavailable_on_failure() {
        let source = Arc::new(mocks::FailingTimeSource {});
        let req = Request {
            timezone: "Asia/Tokyo".to_string(),
        };

        let result = execute(source, req).await;

        match result {
            Err(err) => assert_eq!(err, Error::Unavailable),
            _ => unreachable!(),
        }
    }
}
