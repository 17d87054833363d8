use chrono::{Datelike, NaiveDate, NaiveTime};
#[allow(unused_imports)]
use core_maths::CoreFloat;

use crate::math::floored_mod;

pub(crate) const MINUTE_MILLIS: i64 = 60 * 1000;
pub(crate) const HOUR_MILLIS: i64 = MINUTE_MILLIS * 60;

/// Julian Day for 2000-01-01 12:00 TT (J2000.0).
pub(crate) const JULIAN_DAY_JAN_1_2000: f64 = 2_451_545.0;
/// Julian days per Julian century.
pub(crate) const JULIAN_DAYS_PER_CENTURY: f64 = 36_525.0;

/// Compute the astronomical Julian Day at 00:00 UT of a civil date.
///
/// The proleptic Julian calendar is used before 1582-10-15 and the Gregorian
/// correction afterwards, matching the NOAA spreadsheet.
pub(crate) fn julian_day(date: NaiveDate) -> f64 {
    let mut year = date.year();
    let mut month = date.month();
    let day = f64::from(date.day());

    // January and February count as months 13 and 14 of the previous year.
    if month < 3 {
        month += 12;
        year -= 1;
    }

    let mut julian_day =
        (365.25 * (f64::from(year) + 4716.0)).floor() + (30.6001 * f64::from(month + 1)).floor() + day - 1524.5;
    if julian_day > 2_299_160.0 {
        let a = (f64::from(year) / 100.0).floor();
        julian_day += 2.0 - a + (a / 4.0).floor();
    }
    julian_day
}

/// Julian century (T) from the given Julian Day (JD),
/// measured in Julian centuries since the J2000.0 epoch.
pub(crate) fn julian_century_from_julian_day(julian_day: f64) -> f64 {
    (julian_day - JULIAN_DAY_JAN_1_2000) / JULIAN_DAYS_PER_CENTURY
}

/// Inverse of [`julian_century_from_julian_day`].
pub(crate) fn julian_day_from_julian_century(julian_century: f64) -> f64 {
    julian_century * JULIAN_DAYS_PER_CENTURY + JULIAN_DAY_JAN_1_2000
}

/// Split a UTC hour of the day into a wall-clock time.
///
/// The hour is first folded into [0, 24) with `(hours + 240) mod 24`; the
/// large bias absorbs the small negative values the solar formulas can
/// produce. Each component is truncated, so the result is exact to the
/// millisecond below the input.
pub(crate) fn fractional_hours_to_time(hours: f64) -> Option<NaiveTime> {
    if !hours.is_finite() {
        return None;
    }
    let mut remainder = floored_mod(hours + 240.0, 24.0);
    let h = remainder as u32;
    remainder -= f64::from(h);
    remainder *= 60.0;
    let m = remainder as u32;
    remainder -= f64::from(m);
    remainder *= 60.0;
    let s = remainder as u32;
    remainder -= f64::from(s);
    let ms = (remainder * 1000.0) as u32;
    NaiveTime::from_hms_milli_opt(h, m, s, ms)
}
