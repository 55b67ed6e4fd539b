use crate::domain::entities::Country;

/// Fixed UTC offset, in whole hours, for a known timezone label. The lookup
/// is an exact match over the table below; every other label, the empty
/// string included, resolves to 0. Offsets are constant year-round.
pub fn resolve_offset(label: &str) -> i32 {
    match label {
        "Europe/London" => 1,
        "Europe/Paris" => 2,
        "Europe/Berlin" => 2,
        "Africa/Cairo" => 3,
        "Europe/Moscow" => 4,
        "Asia/Dubai" => 5,
        "Asia/Karachi" => 6,
        "Asia/Bangkok" => 7,
        "Asia/Shanghai" => 8,
        "Asia/Tokyo" => 9,
        "Australia/Sydney" => 10,
        "Pacific/Auckland" => 12,
        _ => 0,
    }
}

pub fn known_timezones() -> [&'static str; 12] {
    [
        "Europe/London",
        "Europe/Paris",
        "Europe/Berlin",
        "Africa/Cairo",
        "Europe/Moscow",
        "Asia/Dubai",
        "Asia/Karachi",
        "Asia/Bangkok",
        "Asia/Shanghai",
        "Asia/Tokyo",
        "Australia/Sydney",
        "Pacific/Auckland",
    ]
}

/// The region half of a timezone label, with underscores spelled out.
pub fn region_of(label: &str) -> String {
    return label.split('/').next().unwrap_or(label).replace('_', " ");
}

/// The city half of a timezone label, with underscores spelled out.
pub fn city_of(label: &str) -> String {
    return label.split('/').last().unwrap_or(label).replace('_', " ");
}

/// Embedded directory used whenever the remote country source is
/// unreachable. Fixed order, never empty.
pub fn fallback_countries() -> Vec<Country> {
    let entries = [
        ("Royaume-Uni", "GB", "Europe/London", 1, "Londres"),
        ("France", "FR", "Europe/Paris", 2, "Paris"),
        ("Allemagne", "DE", "Europe/Berlin", 2, "Berlin"),
        ("Égypte", "EG", "Africa/Cairo", 3, "Le Caire"),
        ("Russie", "RU", "Europe/Moscow", 4, "Moscou"),
        ("Émirats Arabes Unis", "AE", "Asia/Dubai", 5, "Dubaï"),
        ("Pakistan", "PK", "Asia/Karachi", 6, "Karachi"),
        ("Thaïlande", "TH", "Asia/Bangkok", 7, "Bangkok"),
        ("Chine", "CN", "Asia/Shanghai", 8, "Pékin"),
        ("Japon", "JP", "Asia/Tokyo", 9, "Tokyo"),
        ("Australie", "AU", "Australia/Sydney", 10, "Sydney"),
        ("Nouvelle-Zélande", "NZ", "Pacific/Auckland", 12, "Auckland"),
    ];
    return entries
        .into_iter()
        .map(|(name, code, timezone, offset, capital)| Country {
            name: name.to_string(),
            code: code.to_string(),
            timezone: timezone.to_string(),
            offset,
            capital: capital.to_string(),
        })
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_should_resolve_every_known_label_to_its_tabulated_offset() {
        let expected = [1, 2, 2, 3, 4, 5, 6, 7, 8, 9, 10, 12];

        for (label, offset) in known_timezones().into_iter().zip(expected) {
            assert_eq!(resolve_offset(label), offset);
        }
    }

    #[test]
    fn it_should_resolve_unknown_labels_to_zero() {
        assert_eq!(resolve_offset(""), 0);
        assert_eq!(resolve_offset("UTC"), 0);
        assert_eq!(resolve_offset("Mars/Olympus_Mons"), 0);
        assert_eq!(resolve_offset("europe/paris"), 0);
        assert_eq!(resolve_offset("日本/東京"), 0);
    }

    #[test]
    fn it_should_split_labels_into_region_and_city() {
        assert_eq!(region_of("America/New_York"), "America");
        assert_eq!(city_of("America/New_York"), "New York");
        assert_eq!(city_of("UTC"), "UTC");
    }

    #[test]
    fn it_should_embed_a_twelve_entry_fallback_directory() {
        let countries = fallback_countries();

        assert_eq!(countries.len(), 12);
        for country in countries.iter() {
            assert!(!country.name.is_empty());
            assert_eq!(country.code.chars().count(), 2);
            assert!(country.offset >= -12 && country.offset <= 14);
            assert_eq!(resolve_offset(&country.timezone), country.offset);
        }
    }
}
