use std::sync::Arc;

use crate::domain::dtos::ListResponse;
use crate::domain::timezone;
use crate::repository::worldtime::TimeSource;

/// Every timezone label the world time source knows, or the embedded list
/// when the source is unreachable. This operation never fails.
pub async fn execute(source: Arc<dyn TimeSource>) -> ListResponse<String> {
    match source.fetch_timezones().await {
        Ok(timezones) => ListResponse::new(timezones),
        Err(..) => {
            log::warn!("world time source unavailable, serving the embedded timezone list");
            ListResponse::new(
                timezone::known_timezones()
                    .into_iter()
                    .map(String::from)
                    .collect(),
            )
        }
    }
}
