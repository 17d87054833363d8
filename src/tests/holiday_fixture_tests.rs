//! Holidays of 5784 checked against a published calendar.

use crate::JewishCalendar;
use chrono::NaiveDate;
use std::format;
use std::string::String;

const HOLIDAYS_5784: &str = include_str!("../../test_data/holidays_5784.csv");

#[derive(Debug, serde::Deserialize)]
struct HolidayRow {
    date: String,
    in_israel: bool,
    modern: bool,
    holiday: Option<String>,
}

#[test]
fn holidays_match_published_calendar() {
    let mut rdr = csv::Reader::from_reader(HOLIDAYS_5784.as_bytes());
    let mut rows = 0;

    for (row_num, result) in rdr.deserialize().enumerate() {
        let record: HolidayRow = result.unwrap_or_else(|e| std::panic!("Failed to parse CSV row {}: {}", row_num + 2, e));
        let date: NaiveDate = record.date.parse().unwrap_or_else(|e| std::panic!("Bad date {}: {}", record.date, e));
        let calendar = JewishCalendar::from_gregorian(date)
            .unwrap()
            .with_in_israel(record.in_israel)
            .with_modern_holidays(record.modern);

        let actual = calendar.holiday().map(|holiday| format!("{holiday:?}"));
        assert_eq!(actual, record.holiday, "{date} in_israel={} modern={}", record.in_israel, record.modern);
        rows += 1;
    }

    assert!(rows > 30, "only {rows} rows read");
}
