use serde::Serialize;

/// Read-only projection of a directory entry plus its live wall-clock
/// reading; recomputed on every tick, never stored.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WorldClockEntry {
    pub timezone: String,
    pub country: String,
    pub city: String,
    pub offset: i32,
    pub current_time: String,
}
