//! Experience tenure aggregation.

use chrono::{Datelike, Utc};

use super::fields::ExperienceRecord;

/// Calendar year in UTC at the time of the call
pub fn current_utc_year() -> i32 {
    Utc::now().year()
}

/// Parse a year value: a non-empty run of ASCII digits that fits in `u32`
pub fn parse_year(value: &str) -> Option<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Total whole years of experience across encoded experience records,
/// evaluated against the current UTC year.
pub fn total_experience_years<I, S>(records: I) -> u32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    total_experience_years_at(records, current_utc_year())
}

/// Total whole years of experience, with ongoing roles measured up to
/// `current_year`.
///
/// Per record: `end - start` when both are numeric, `current_year - start`
/// when only `start` is (an `end` such as `present` counts as ongoing), and
/// nothing when `start` is missing or not numeric. Each record contributes
/// at least 0.
pub fn total_experience_years_at<I, S>(records: I, current_year: i32) -> u32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    records
        .into_iter()
        .map(|encoded| record_years(&ExperienceRecord::parse(encoded.as_ref()), current_year))
        .fold(0u32, u32::saturating_add)
}

fn record_years(record: &ExperienceRecord, current_year: i32) -> u32 {
    let Some(start) = record.start().and_then(parse_year) else {
        return 0;
    };
    let end = record
        .end()
        .and_then(parse_year)
        .map(i64::from)
        .unwrap_or(i64::from(current_year));

    let span = (end - i64::from(start)).max(0);
    u32::try_from(span).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection_is_zero() {
        assert_eq!(total_experience_years(Vec::<String>::new()), 0);
    }

    #[test]
    fn test_closed_role() {
        assert_eq!(total_experience_years(["yrs_5::start_2015::end_2020"]), 5);
    }

    #[test]
    fn test_ongoing_role_uses_current_year() {
        let expected = (current_utc_year() - 2018).max(0) as u32;
        assert_eq!(total_experience_years(["yrs_5::start_2018"]), expected);
        assert_eq!(total_experience_years_at(["yrs_5::start_2018"], 2030), 12);
    }

    #[test]
    fn test_end_before_start_contributes_zero() {
        assert_eq!(total_experience_years_at(["start_2020::end_2015"], 2025), 0);
        assert_eq!(
            total_experience_years_at(["start_2020::end_2015", "start_2010::end_2012"], 2025),
            2
        );
    }

    #[test]
    fn test_start_in_future_contributes_zero() {
        assert_eq!(total_experience_years_at(["start_2040"], 2025), 0);
    }

    #[test]
    fn test_records_without_numeric_start_are_skipped() {
        let records = [
            "title_Intern::end_2019",
            "start_unknown::end_2019",
            "start_-2015::end_2019",
            "start_2016::end_2019",
        ];
        assert_eq!(total_experience_years_at(records, 2025), 3);
    }

    #[test]
    fn test_non_numeric_end_counts_as_ongoing() {
        assert_eq!(total_experience_years_at(["start_2020::end_present"], 2025), 5);
    }

    #[test]
    fn test_sums_across_records() {
        let records = vec![
            "yrs_2::title_Associate::start_2012::end_2014".to_string(),
            "yrs_4::title_Counsel::start_2014::end_2018".to_string(),
            "yrs_7::title_Partner::start_2018".to_string(),
        ];
        assert_eq!(total_experience_years_at(&records, 2025), 2 + 4 + 7);
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2015"), Some(2015));
        assert_eq!(parse_year("0"), Some(0));
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("+2015"), None);
        assert_eq!(parse_year("20 15"), None);
        assert_eq!(parse_year("99999999999999"), None);
    }
}
