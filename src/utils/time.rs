use chrono::{DateTime, SecondsFormat, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Fixed-width UTC text, so stored timestamps sort lexicographically.
pub fn to_storage(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn from_rfc3339(s: &str) -> anyhow::Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn storage_format_is_fixed_width() {
        let whole = Utc.with_ymd_and_hms(2026, 10, 19, 8, 15, 30).unwrap();
        assert_eq!(to_storage(whole), "2026-10-19T08:15:30.000000Z");
        assert_eq!(to_storage(whole).len(), to_storage(now()).len());
    }

    #[test]
    fn parses_offsets_into_utc() {
        let parsed = from_rfc3339("2026-10-19T10:15:30+02:00").unwrap();
        assert_eq!(to_storage(parsed), "2026-10-19T08:15:30.000000Z");
        assert!(from_rfc3339("yesterday").is_err());
    }
}
