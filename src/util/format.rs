//! Display formatting for profile fields.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// Human-readable registration date, e.g. `5 March 2024, 14:30`.
///
/// Accepts both `YYYY-MM-DD HH:MM:SS` (SQLite) and the `T`-separated ISO
/// form. Unparseable values are shown as-is; a missing value reads as
/// "Not specified".
pub fn format_registration_date(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return "Not specified".to_owned();
    };
    match parse_timestamp(raw) {
        Some((year, month, day, hour, minute)) => {
            let month_name = MONTHS[month as usize - 1];
            format!("{day} {month_name} {year}, {hour:02}:{minute:02}")
        }
        None => raw.to_owned(),
    }
}

fn parse_timestamp(raw: &str) -> Option<(u32, u32, u32, u32, u32)> {
    let (date, time) = raw.split_once(['T', ' '])?;
    let mut date_parts = date.splitn(3, '-');
    let year: u32 = date_parts.next()?.parse().ok()?;
    let month: u32 = date_parts.next()?.parse().ok()?;
    let day: u32 = date_parts.next()?.parse().ok()?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    let mut time_parts = time.splitn(3, ':');
    let hour: u32 = time_parts.next()?.parse().ok()?;
    let minute: u32 = time_parts.next()?.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((year, month, day, hour, minute))
}
