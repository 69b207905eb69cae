//! Shared formatting utilities for the UI layer.

use chrono::{Datelike, Local, NaiveDate};

/// Age in full calendar years at `today`: year subtraction with a
/// correction when today's month/day precedes the birth month/day.
pub fn age_from_dob(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}

/// Age derived from an ISO-8601 date-of-birth string, against the local
/// calendar date. `None` when the string does not start with a date.
pub fn age_today(dob: &str) -> Option<i32> {
    let date = parse_iso_date(dob)?;
    Some(age_from_dob(date, Local::now().date_naive()))
}

/// Format an ISO date or datetime string as `dd/mm/yyyy`, the display
/// format used for appointment dates. Falls back to the input when it
/// does not start with a date.
pub fn format_date_uk(iso: &str) -> String {
    match parse_iso_date(iso) {
        Some(date) => format!("{:02}/{:02}/{}", date.day(), date.month(), date.year()),
        None => iso.to_string(),
    }
}

/// Turn transmitted diagnosis markup back into plain text for display:
/// each `<br/>` token becomes a newline.
pub fn diagnosis_display(message: &str) -> String {
    message.replace("<br/>", "\n")
}

fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let prefix = s.get(..10)?;
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn age_on_the_birthday_counts_the_year() {
        let today = date(2026, 8, 30);
        assert_eq!(age_from_dob(date(1996, 8, 30), today), 30);
    }

    #[test]
    fn age_one_day_before_the_birthday_does_not() {
        let today = date(2026, 8, 30);
        assert_eq!(age_from_dob(date(1996, 8, 31), today), 29);
        assert_eq!(age_from_dob(date(1996, 9, 1), today), 29);
    }

    #[test]
    fn age_one_day_after_the_birthday_counts_it() {
        let today = date(2026, 8, 30);
        assert_eq!(age_from_dob(date(1996, 8, 29), today), 30);
    }

    #[test]
    fn age_across_a_year_boundary() {
        let today = date(2026, 1, 1);
        assert_eq!(age_from_dob(date(2000, 12, 31), today), 25);
    }

    #[test]
    fn uk_date_from_iso_datetime() {
        assert_eq!(format_date_uk("2026-09-02T00:00:00Z"), "02/09/2026");
        assert_eq!(format_date_uk("2026-09-02"), "02/09/2026");
    }

    #[test]
    fn unparseable_date_falls_through() {
        assert_eq!(format_date_uk("soon"), "soon");
        assert!(age_today("not-a-date").is_none());
    }

    #[test]
    fn diagnosis_markup_round_trips_to_text() {
        assert_eq!(diagnosis_display("line1<br/>line2"), "line1\nline2");
        assert_eq!(diagnosis_display("no breaks"), "no breaks");
    }
}
