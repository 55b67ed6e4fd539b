use serde::{Deserialize, Serialize};

use crate::helpers::date::AppointmentTime;

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Country {
    pub name: String,
    pub code: String,
    pub timezone: String,
    pub offset: i32,
    pub capital: String,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Participant {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub country: Country,
    pub local_time: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ParticipantCreation {
    pub name: String,
    pub email: String,
    pub country: Country,
    pub local_time: Option<String>,
}

/// The appointment being composed. Date and time keep the raw form values
/// (`YYYY-MM-DD` and `HH:MM`); the draft is incomplete until both are set.
/// `creator_offset` is the UTC offset of the clock the date and time were
/// typed against, carried explicitly instead of read from the host.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct AppointmentDraft {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub creator_offset: i32,
}

impl AppointmentDraft {
    pub fn empty() -> Self {
        return Self {
            title: String::new(),
            description: String::new(),
            date: String::new(),
            time: String::new(),
            creator_offset: 0,
        };
    }

    pub fn instant(self: &Self) -> Option<AppointmentTime> {
        if self.date.is_empty() || self.time.is_empty() {
            return None;
        }
        return AppointmentTime::parse(&self.date, &self.time, self.creator_offset);
    }
}

#[derive(Clone, Debug, Default)]
pub struct DraftUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub creator_offset: Option<i32>,
}
