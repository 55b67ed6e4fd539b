mod core;

pub mod find_countries;
pub mod get_countries;
pub mod get_time;
pub mod get_timezones;

pub use self::core::*;
