use chrono::{DateTime, SecondsFormat, Utc};

/// Format a UTC instant as ISO-8601 with microseconds and an explicit `+00:00` offset.
#[must_use]
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Current wall-clock time, ISO-8601 encoded.
#[must_use]
pub fn now_iso() -> String {
    iso_timestamp(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_with_offset_and_micros() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(iso_timestamp(at), "2024-01-01T00:00:00.000000+00:00");
    }

    #[test]
    fn now_parses_back() {
        let stamp = now_iso();
        let parsed = DateTime::parse_from_rfc3339(&stamp).unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 0);
    }
}
