use chrono::{Duration, NaiveDateTime};

/// A naive appointment instant together with the UTC offset of the clock it
/// was read from. Offsets are whole hours and constant year-round; no
/// timezone database is consulted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppointmentTime {
    naive: NaiveDateTime,
    creator_offset: i32,
}

impl AppointmentTime {
    pub fn new(naive: NaiveDateTime, creator_offset: i32) -> Self {
        return Self {
            naive,
            creator_offset,
        };
    }

    /// Combines a `YYYY-MM-DD` date and a `HH:MM` wall-clock time, the way
    /// the scheduling form submits them. Seconds are tolerated.
    pub fn parse(date: &str, time: &str, creator_offset: i32) -> Option<Self> {
        let raw = format!("{}T{}", date, time);
        let naive = NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M")
            .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S"))
            .ok()?;
        return Some(Self::new(naive, creator_offset));
    }

    /// The wall-clock reading of this instant at the target offset: back out
    /// the creator's offset to reach UTC, then add the target's.
    pub fn at_offset(self: &Self, offset: i32) -> NaiveDateTime {
        return self.naive + Duration::hours((offset - self.creator_offset) as i64);
    }

    /// Display string for the target offset, day/month/year hour:minute.
    pub fn format_at(self: &Self, offset: i32) -> String {
        return self.at_offset(offset).format("%d/%m/%Y %H:%M").to_string();
    }
}
