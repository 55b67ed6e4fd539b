pub mod add_participant;
pub mod current_time;
pub mod find_appointment;
pub mod find_country;
pub mod list_countries;
pub mod list_timezones;
pub mod remove_participant;
pub mod restamp_participants;
pub mod search_countries;
pub mod submit_appointment;
pub mod update_draft;
pub mod entities;
pub mod dtos;
pub mod timezone;

#[cfg(test)]
pub mod mocks;
