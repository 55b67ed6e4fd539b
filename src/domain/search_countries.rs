use std::sync::Arc;

use serde::Deserialize;
use serde_trim::string_trim;

use crate::domain::dtos::ListResponse;
use crate::domain::entities::Country;
use crate::repository::country::Source;

const MAX_RESULTS: usize = 10;

#[derive(Deserialize, Clone, Debug)]
pub struct Request {
    #[serde(deserialize_with = "string_trim")]
    pub query: String,
}

/// By-name directory search. Unlike the full listing this degrades to an
/// empty result set when the source fails, it has no fallback of its own.
pub async fn execute(source: Arc<dyn Source>, req: Request) -> ListResponse<Country> {
    let raw_countries = match source.fetch_by_name(req.query).await {
        Ok(raw_countries) => raw_countries,
        Err(..) => return ListResponse::new(vec![]),
    };

    ListResponse::new(
        raw_countries
            .into_iter()
            .take(MAX_RESULTS)
            .map(Country::from)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mocks;
    use crate::repository::country::RawCountry;

    #[tokio::test]
    async fn it_should_map_the_matching_countries() {
        let source = Arc::new(mocks::StaticSource::new(vec![mocks::mock_raw_country()]));
        let req = Request {
            query: "jap".to_string(),
        };

        let result = execute(source, req).await;

        assert_eq!(result.data.len(), 1);
        assert_eq!(result.data[0].code, "JP");
        assert_eq!(result.data[0].offset, 9);
    }

    #[tokio::test]
    async fn it_should_truncate_the_result_set() {
        let raw_countries: Vec<RawCountry> = (0..15)
            .map(|index| RawCountry {
                name: format!("Pays {}", index),
                code: format!("P{}", index),
                timezones: vec![],
                capitals: vec![],
            })
            .collect();
        let source = Arc::new(mocks::StaticSource::new(raw_countries));
        let req = Request {
            query: "pays".to_string(),
        };

        let result = execute(source, req).await;

        assert_eq!(result.data.len(), MAX_RESULTS);
    }

    #[tokio::test]
    async fn it_should_return_an_empty_list_when_the_source_fails() {
        let source = Arc::new(mocks::FailingSource {});
        let req = Request {
            query: "jap".to_string(),
        };

        let result = execute(source, req).await;

        assert!(result.data.is_empty());
    }
}
