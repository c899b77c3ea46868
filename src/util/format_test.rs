use super::*;

#[test]
fn formats_sqlite_timestamp() {
    assert_eq!(
        format_registration_date(Some("2024-03-05 14:30:00")),
        "5 March 2024, 14:30"
    );
}

#[test]
fn formats_iso_t_separator() {
    assert_eq!(
        format_registration_date(Some("2023-12-31T09:05:59")),
        "31 December 2023, 09:05"
    );
}

#[test]
fn missing_value_reads_not_specified() {
    assert_eq!(format_registration_date(None), "Not specified");
}

#[test]
fn unparseable_value_is_shown_raw() {
    assert_eq!(format_registration_date(Some("yesterday")), "yesterday");
    assert_eq!(format_registration_date(Some("2024-13-01 00:00:00")), "2024-13-01 00:00:00");
}

#[test]
fn parse_timestamp_rejects_out_of_range_time() {
    assert_eq!(parse_timestamp("2024-03-05 24:00:00"), None);
    assert_eq!(parse_timestamp("2024-03-05 10:60:00"), None);
}

#[test]
fn parse_timestamp_reads_components() {
    assert_eq!(parse_timestamp("2024-03-05 14:30:00"), Some((2024, 3, 5, 14, 30)));
}
