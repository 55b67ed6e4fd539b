use super::entities::WorldClockEntry;

/// Case-insensitive filter over city and country names; an empty term keeps
/// every entry.
pub fn search(entries: Vec<WorldClockEntry>, term: &str) -> Vec<WorldClockEntry> {
    let term = term.to_lowercase();
    if term.is_empty() {
        return entries;
    }
    return entries
        .into_iter()
        .filter(|entry| {
            entry.city.to_lowercase().contains(&term)
                || entry.country.to_lowercase().contains(&term)
        })
        .collect();
}
