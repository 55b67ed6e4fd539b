use std::sync::Arc;

use itertools::Itertools;

use crate::domain::dtos::ListResponse;
use crate::domain::entities::Country;
use crate::domain::timezone;
use crate::repository::country::{RawCountry, Source};

/// Full country directory: the remote snapshot mapped and sorted by name,
/// or the embedded fallback table (fixed order) when the source fails.
/// This operation never fails.
pub async fn execute(source: Arc<dyn Source>) -> ListResponse<Country> {
    let raw_countries = match source.fetch_all().await {
        Ok(raw_countries) => raw_countries,
        Err(..) => {
            log::warn!("country source unavailable, serving the embedded directory");
            return ListResponse::new(timezone::fallback_countries());
        }
    };

    let mut countries: Vec<Country> = raw_countries
        .into_iter()
        .map(Country::from)
        .unique_by(|country| country.code.clone())
        .collect();
    countries.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    ListResponse::new(countries)
}

impl From<RawCountry> for Country {
    fn from(value: RawCountry) -> Self {
        let timezone = value
            .timezones
            .first()
            .cloned()
            .unwrap_or_else(|| "UTC".to_string());
        let capital = value
            .capitals
            .first()
            .cloned()
            .unwrap_or_else(|| value.name.clone());
        Self {
            offset: timezone::resolve_offset(&timezone),
            name: value.name,
            code: value.code,
            timezone,
            capital,
        }
    }
}
