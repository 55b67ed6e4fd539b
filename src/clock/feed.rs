use std::time::Duration;

use chrono::{NaiveDateTime, Utc};
use tokio::sync::{watch, Mutex};

use crate::domain::entities::Country;

use super::entities::WorldClockEntry;

const TICK: Duration = Duration::from_secs(1);

/// Live world clocks over a directory snapshot. The snapshot is loaded
/// once per session and treated as immutable; only the clock readings are
/// recomputed, on a one second cadence.
pub struct Feed {
    countries: Mutex<Vec<Country>>,
    tx: watch::Sender<Vec<WorldClockEntry>>,
}

impl Feed {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(vec![]);
        Self {
            countries: Mutex::new(vec![]),
            tx,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<WorldClockEntry>> {
        self.tx.subscribe()
    }

    pub async fn load(&self, countries: Vec<Country>, limit: usize) {
        let mut lock = self.countries.lock().await;
        *lock = countries.into_iter().take(limit).collect();
        log::debug!("loaded {} entries into the world clock feed", lock.len());
    }

    pub async fn snapshot(&self) -> Vec<WorldClockEntry> {
        let lock = self.countries.lock().await;
        entries_at(&lock, Utc::now().naive_utc())
    }

    /// Publishes a fresh snapshot every second. Stops as soon as the last
    /// subscriber is gone, so an abandoned feed does not keep ticking.
    pub async fn start(&self) {
        let mut interval = tokio::time::interval(TICK);
        loop {
            interval.tick().await;
            let entries = self.snapshot().await;
            if let Err(..) = self.tx.send(entries) {
                log::trace!("no world clock subscribers left, stopping the feed");
                break;
            }
        }
    }
}

pub fn entries_at(countries: &[Country], now_utc: NaiveDateTime) -> Vec<WorldClockEntry> {
    countries
        .iter()
        .map(|country| WorldClockEntry {
            timezone: country.timezone.clone(),
            country: country.name.clone(),
            city: country.capital.clone(),
            offset: country.offset,
            current_time: (now_utc + chrono::Duration::hours(country.offset as i64))
                .format("%H:%M:%S")
                .to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::mocks;
    use crate::domain::timezone;

    fn mock_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(9, 0, 30)
            .unwrap()
    }

    #[test]
    fn it_should_project_each_country_with_its_shifted_clock() {
        let entries = entries_at(&[mocks::mock_country()], mock_now());

        assert_eq!(
            entries,
            vec![WorldClockEntry {
                timezone: "Asia/Tokyo".to_string(),
                country: "Japon".to_string(),
                city: "Tokyo".to_string(),
                offset: 9,
                current_time: "18:00:30".to_string(),
            }]
        );
    }

    #[test]
    fn it_should_cover_the_whole_fallback_directory() {
        let entries = entries_at(&timezone::fallback_countries(), mock_now());

        assert_eq!(entries.len(), 12);
        assert_eq!(entries.last().unwrap().current_time, "21:00:30");
    }

    #[test]
    fn it_should_wrap_clock_readings_around_midnight() {
        let late = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(23, 0, 30)
            .unwrap();

        let entries = entries_at(&[mocks::mock_country()], late);

        assert_eq!(entries[0].current_time, "08:00:30");
    }

    #[tokio::test]
    async fn it_should_cap_the_snapshot_at_the_configured_limit() {
        let feed = Feed::new();
        feed.load(timezone::fallback_countries(), 5).await;

        let entries = feed.snapshot().await;

        assert_eq!(entries.len(), 5);
    }
}
