//! Continuity tests for sunrise, sunset and solar transit.
//!
//! Day to day these times drift by minutes at most. A sudden jump of hours
//! means a date transition or sunset rollover went the wrong way.

use crate::{AstronomicalCalendar, Calculator, GeoLocation};
use chrono::{DateTime, Days, NaiveDate};
use chrono_tz::Tz;
#[allow(unused_imports)]
use core_maths::CoreFloat;
use proptest::prelude::*;
use std::format;

fn jump_seconds(previous: Option<DateTime<Tz>>, current: Option<DateTime<Tz>>) -> Option<f64> {
    let expected = previous?.checked_add_days(Days::new(1))?;
    Some((current? - expected).as_seconds_f64().abs())
}

proptest! {
    #[test]
    fn sunrise_and_sunset_change_smoothly_over_consecutive_days(
        start in 693_596i32..=767_000i32,
        longitude in -180.0_f64..=180.0_f64,
        latitude in -64.0_f64..=64.0_f64,
        elevation in 0.0_f64..=2000.0_f64,
        calculator in prop_oneof![Just(Calculator::Noaa), Just(Calculator::SunTimes), Just(Calculator::Legacy)],
    ) {
        let start_date = NaiveDate::from_num_days_from_ce_opt(start).unwrap();
        let location = GeoLocation::new("anywhere", latitude, longitude, elevation, chrono_tz::UTC).unwrap();
        let mut calendar = AstronomicalCalendar::new(start_date, location, calculator);

        // Near the polar circles day length changes much faster.
        let max_jump_seconds = if latitude.abs() > 60.0 { 3.0 * 60.0 * 60.0 } else { 60.0 * 60.0 };

        let mut prev_transit = None;
        let mut prev_sunrise = None;
        let mut prev_sunset = None;

        for day_offset in 0..10 {
            let current_date = start_date.checked_add_days(Days::new(day_offset)).unwrap();
            calendar.set_date(current_date);

            let transit = calendar.sun_transit();
            let sunrise = calendar.sunrise();
            let sunset = calendar.sunset();

            if let Some(jump) = jump_seconds(prev_transit, transit) {
                prop_assert!(jump < max_jump_seconds, "transit jumped {jump} s on {current_date}");
            }
            if let Some(jump) = jump_seconds(prev_sunrise, sunrise) {
                prop_assert!(jump < max_jump_seconds, "sunrise jumped {jump} s on {current_date}");
            }
            if let Some(jump) = jump_seconds(prev_sunset, sunset) {
                prop_assert!(jump < max_jump_seconds, "sunset jumped {jump} s on {current_date}");
            }

            prev_transit = transit;
            prev_sunrise = sunrise;
            prev_sunset = sunset;
        }
    }
}
