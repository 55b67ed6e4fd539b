use std::sync::Arc;

use crate::domain::add_participant;
use crate::domain::entities::{Country, DraftUpdate, Participant, ParticipantCreation};
use crate::repository::country::RawCountry;
use crate::repository::session::{InMemoryRepository, Repository};

pub fn mock_country() -> Country {
    Country {
        name: "Japon".to_string(),
        code: "JP".to_string(),
        timezone: "Asia/Tokyo".to_string(),
        offset: 9,
        capital: "Tokyo".to_string(),
    }
}

pub fn mock_raw_country() -> RawCountry {
    RawCountry {
        name: "Japon".to_string(),
        code: "JP".to_string(),
        timezones: vec!["Asia/Tokyo".to_string(), "UTC".to_string()],
        capitals: vec!["Tokyo".to_string()],
    }
}

/// Unsorted on purpose, with one sparse entry missing both its timezones
/// and its capitals.
pub fn mock_raw_countries() -> Vec<RawCountry> {
    vec![
        mock_raw_country(),
        RawCountry {
            name: "France".to_string(),
            code: "FR".to_string(),
            timezones: vec!["Europe/Paris".to_string()],
            capitals: vec!["Paris".to_string()],
        },
        RawCountry {
            name: "Île Mystérieuse".to_string(),
            code: "IM".to_string(),
            timezones: vec![],
            capitals: vec![],
        },
    ]
}

pub fn mock_participant_creation() -> ParticipantCreation {
    ParticipantCreation {
        name: "João".to_string(),
        email: "joao@example.com".to_string(),
        country: mock_country(),
        local_time: None,
    }
}

pub fn mock_add_participant_request() -> add_participant::Request {
    add_participant::Request {
        name: "João".to_string(),
        email: "joao@example.com".to_string(),
        country_code: "JP".to_string(),
    }
}

/// A complete draft: 2024-06-01 09:00 read on a UTC creator clock.
pub fn mock_draft_update() -> DraftUpdate {
    DraftUpdate {
        title: Some("Sync".to_string()),
        description: Some("Réunion équipe internationale".to_string()),
        date: Some("2024-06-01".to_string()),
        time: Some("09:00".to_string()),
        creator_offset: Some(0),
    }
}

pub async fn insert_mock_participant(repo: Arc<InMemoryRepository>) -> Participant {
    match repo.insert_participant(mock_participant_creation()).await {
        Ok(participant) => participant,
        _ => unreachable!("participant must be created for this test"),
    }
}
