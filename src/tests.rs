#![allow(clippy::unwrap_used, clippy::panic)]
use chrono::{Datelike, Days, NaiveDate, TimeDelta, Timelike, Weekday};
#[allow(unused_imports)]
use core_maths::CoreFloat;
use proptest::prelude::*;
use std::format;

use crate::{
    AstronomicalCalendar, Calculator, Event, Formula, GeoLocation, Holiday, JewishCalendar, JewishDate, JewishMonth,
    SolarEvent, ZmanimCalendar, ZmanimConfig, CATALOG,
};

mod continuity_tests;
mod holiday_fixture_tests;

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 1900-01-01 ..= 2100-12-31
    (693_596_i32..=767_009_i32).prop_map(|days| NaiveDate::from_num_days_from_ce_opt(days).unwrap())
}

fn any_calculator() -> impl Strategy<Value = Calculator> {
    prop_oneof![Just(Calculator::Noaa), Just(Calculator::SunTimes), Just(Calculator::Legacy)]
}

fn mid_latitude_location() -> impl Strategy<Value = GeoLocation> {
    (-59.9_f64..=59.9_f64, -180.0_f64..=180.0_f64, 0.0_f64..=2000.0_f64)
        .prop_map(|(latitude, longitude, elevation)| {
            GeoLocation::new("anywhere", latitude, longitude, elevation, chrono_tz::UTC).unwrap()
        })
}

/// Does the formula need sea-level sunrise or sunset (directly or through a Gra shaah zmanis)?
fn needs_sea_level_day(formula: Formula) -> bool {
    match formula {
        Formula::At(event) | Formula::Minutes(event, _) => matches!(
            event,
            Event::Sunrise
                | Event::Sunset
                | Event::SeaLevelSunrise
                | Event::SeaLevelSunset
                | Event::Chatzos
                | Event::AteretTorahTzais
                | Event::CandleLighting
        ),
        Formula::Zmanis(..) => true,
        Formula::Proportional(day, _) => {
            let (start, end) = day.bounds();
            needs_sea_level_day(start) || needs_sea_level_day(end)
        }
    }
}

// =============================================================================
// 1. LOCALIZING UTC HOURS
// =============================================================================

proptest! {
    /// The wall clock in UTC is the folded hour, truncated to the millisecond
    #[test]
    fn localized_time_matches_fractional_hour(
        date in any_date(),
        hours in -2.0_f64..26.0_f64,
        longitude in -180.0_f64..=180.0_f64,
    ) {
        let location = GeoLocation::new("anywhere", 0.0, longitude, 0.0, chrono_tz::UTC).unwrap();
        let calendar = AstronomicalCalendar::new(date, location, Calculator::Noaa);
        let day_millis = 86_400_000_i64;
        let expected = ((hours + 24.0).rem_euclid(24.0) * 3_600_000.0).floor() as i64;

        for event in [SolarEvent::Sunrise, SolarEvent::Sunset] {
            let localized = calendar.date_from_time(hours, event).unwrap().naive_utc();
            let actual = i64::from(localized.num_seconds_from_midnight()) * 1000
                + i64::from(localized.nanosecond() / 1_000_000);
            let diff = (expected - actual).rem_euclid(day_millis);
            prop_assert!(diff.min(day_millis - diff) <= 2, "{hours} h localized to {localized}");
        }
    }

    /// Sunrise can only move to the previous date and sunset only to the next
    #[test]
    fn date_transition_direction(
        date in any_date(),
        hours in 0.0_f64..24.0_f64,
        longitude in -180.0_f64..=180.0_f64,
    ) {
        let location = GeoLocation::new("anywhere", 0.0, longitude, 0.0, chrono_tz::UTC).unwrap();
        let calendar = AstronomicalCalendar::new(date, location, Calculator::Noaa);

        let sunrise = calendar.date_from_time(hours, SolarEvent::Sunrise).unwrap().date_naive();
        prop_assert!(sunrise == date || Some(sunrise) == date.pred_opt());
        let sunset = calendar.date_from_time(hours, SolarEvent::Sunset).unwrap().date_naive();
        prop_assert!(sunset == date || Some(sunset) == date.succ_opt());
    }

    /// Queries do not depend on what was asked before
    #[test]
    fn calendar_queries_are_repeatable(
        date in any_date(),
        location in mid_latitude_location(),
        calculator in any_calculator(),
    ) {
        let mut calendar = AstronomicalCalendar::new(date, location, calculator);
        let sunrise = calendar.sunrise();
        let sunset = calendar.sunset();
        prop_assert_eq!(calendar.sunrise(), sunrise);

        calendar.set_date(date.succ_opt().unwrap());
        calendar.set_date(date);
        prop_assert_eq!(calendar.sunrise(), sunrise);
        prop_assert_eq!(calendar.sunset(), sunset);
    }

    #[test]
    fn non_finite_hours_are_undefined(date in any_date()) {
        let calendar = AstronomicalCalendar::new(date, GeoLocation::greenwich(), Calculator::Noaa);
        prop_assert!(calendar.date_from_time(f64::NAN, SolarEvent::Sunrise).is_none());
        prop_assert!(calendar.date_from_time(f64::INFINITY, SolarEvent::Sunset).is_none());
    }
}

// =============================================================================
// 2. MID-LATITUDE DAYS
// =============================================================================

proptest! {
    #[test]
    fn sunrise_precedes_sunset(
        date in any_date(),
        location in mid_latitude_location(),
        calculator in any_calculator(),
    ) {
        let calendar = AstronomicalCalendar::new(date, location, calculator);
        let sunrise = calendar.sunrise();
        let sunset = calendar.sunset();
        prop_assert!(sunrise.is_some() && sunset.is_some(), "{date} {:?}", calendar.location());
        let (sunrise, sunset) = (sunrise.unwrap(), sunset.unwrap());
        prop_assert!(sunrise < sunset, "sunrise {sunrise} sunset {sunset}");
        prop_assert!(sunset - sunrise < TimeDelta::hours(24));

        let sea_level_sunrise = calendar.sea_level_sunrise().unwrap();
        let sea_level_sunset = calendar.sea_level_sunset().unwrap();
        prop_assert!(sea_level_sunrise < sea_level_sunset);
        // elevation widens the day
        prop_assert!(sunrise <= sea_level_sunrise + TimeDelta::milliseconds(1));
    }

    #[test]
    fn temporal_hour_is_a_twelfth_of_the_day(
        date in any_date(),
        location in mid_latitude_location(),
        calculator in any_calculator(),
    ) {
        let calendar = AstronomicalCalendar::new(date, location, calculator);
        let day = calendar.sea_level_sunset().unwrap() - calendar.sea_level_sunrise().unwrap();
        let hour = calendar.temporal_hour().unwrap();
        let remainder = (day - hour * 12).num_milliseconds();
        prop_assert!((0..12).contains(&remainder), "remainder {remainder} ms");

        let transit = calendar.sun_transit().unwrap();
        prop_assert!(calendar.sea_level_sunrise().unwrap() < transit);
        prop_assert!(transit < calendar.sea_level_sunset().unwrap());
    }

    #[test]
    fn twilight_brackets_the_day(
        date in any_date(),
        latitude in -45.0_f64..=45.0_f64,
        longitude in -180.0_f64..=180.0_f64,
    ) {
        let location = GeoLocation::new("anywhere", latitude, longitude, 0.0, chrono_tz::UTC).unwrap();
        let calendar = AstronomicalCalendar::new(date, location, Calculator::Noaa);
        let astronomical = calendar.begin_astronomical_twilight().unwrap();
        let nautical = calendar.begin_nautical_twilight().unwrap();
        let civil = calendar.begin_civil_twilight().unwrap();
        let sunrise = calendar.sea_level_sunrise().unwrap();
        prop_assert!(astronomical < nautical && nautical < civil && civil < sunrise);

        let sunset = calendar.sea_level_sunset().unwrap();
        prop_assert!(sunset < calendar.end_civil_twilight().unwrap());
        prop_assert!(calendar.end_civil_twilight() < calendar.end_nautical_twilight());
        prop_assert!(calendar.end_nautical_twilight() < calendar.end_astronomical_twilight());
    }
}

// =============================================================================
// 3. POLAR DAYS
// =============================================================================

proptest! {
    /// Around the December solstice the sun neither rises in the far north nor sets in the far south
    #[test]
    fn undefined_sunrise_propagates_through_catalog(
        year in 1950i32..=2050i32,
        day in 0u64..30u64,
        latitude in 78.0_f64..=85.0_f64,
        north in any::<bool>(),
        longitude in -180.0_f64..=180.0_f64,
        calculator in any_calculator(),
    ) {
        let date = NaiveDate::from_ymd_opt(year, 12, 5).unwrap().checked_add_days(Days::new(day)).unwrap();
        let latitude = if north { latitude } else { -latitude };
        let location = GeoLocation::new("polar", latitude, longitude, 0.0, chrono_tz::UTC).unwrap();
        let config = ZmanimConfig::default().with_calculator(calculator);
        let zmanim = ZmanimCalendar::new(date, location, config).unwrap();

        prop_assert!(zmanim.astronomical().sea_level_sunrise().is_none());
        prop_assert!(zmanim.astronomical().sea_level_sunset().is_none());
        for (name, formula) in CATALOG {
            if needs_sea_level_day(*formula) {
                prop_assert!(zmanim.zman(*formula).is_none(), "{name} defined at {latitude} on {date}");
            }
        }
        prop_assert!(zmanim.shaah_zmanis_gra().is_none());
        prop_assert!(zmanim.mincha_gedola_greater_than_30().is_none());
        prop_assert!(zmanim.bain_hasmashos_rt_2_stars().is_none());
        prop_assert!(zmanim.fixed_local_chatzos().is_some());
    }
}

#[test]
fn gateshead_has_no_16_point_1_degree_dawn_in_summer() {
    let gateshead = GeoLocation::new("Gateshead", 54.9593729, -1.6018252, 0.0, chrono_tz::Europe::London).unwrap();
    let dates = [NaiveDate::from_ymd_opt(2010, 5, 27).unwrap(), NaiveDate::from_ymd_opt(2024, 6, 21).unwrap()];
    for (date, calculator) in dates.into_iter().flat_map(|date| {
        [Calculator::Noaa, Calculator::SunTimes, Calculator::Legacy].map(|calculator| (date, calculator))
    }) {
        let config = ZmanimConfig::default().with_calculator(calculator);
        let zmanim = ZmanimCalendar::new(date, gateshead.clone(), config).unwrap();
        assert!(zmanim.alos_hashachar().is_none(), "{date} {calculator:?}");
        assert!(zmanim.shaah_zmanis_16_point_1_degrees().is_none());
        assert!(zmanim.sof_zman_shma_mga_16_point_1_degrees().is_none());
        assert!(zmanim.astronomical().sunrise().is_some());
        assert!(zmanim.sof_zman_shma_gra().is_some());
    }
}

// =============================================================================
// 4. JEWISH CALENDAR
// =============================================================================

proptest! {
    #[test]
    fn jewish_date_round_trip(date in any_date()) {
        let jewish = JewishDate::from_gregorian(date).unwrap();
        prop_assert_eq!(jewish.gregorian(), date);
        let rebuilt = JewishDate::new(jewish.year(), jewish.month(), jewish.day()).unwrap();
        prop_assert_eq!(rebuilt, jewish);
        prop_assert_eq!(jewish.succ().unwrap().gregorian(), date.succ_opt().unwrap());
        prop_assert!(jewish.day() <= jewish.days_in_month());
    }

    /// Lo ADU Rosh, lo BaDU Pesach
    #[test]
    fn postponements_hold(year in 5660i32..=5860i32) {
        let rosh_hashana = JewishDate::new(year, JewishMonth::Tishrei, 1).unwrap().day_of_week();
        prop_assert!(!matches!(rosh_hashana, Weekday::Sun | Weekday::Wed | Weekday::Fri));
        let yom_kippur = JewishDate::new(year, JewishMonth::Tishrei, 10).unwrap().day_of_week();
        prop_assert!(!matches!(yom_kippur, Weekday::Sun | Weekday::Fri));
        let pesach = JewishDate::new(year, JewishMonth::Nissan, 15).unwrap().day_of_week();
        prop_assert!(!matches!(pesach, Weekday::Mon | Weekday::Wed | Weekday::Fri));
        prop_assert!(matches!(JewishDate::new(year, JewishMonth::Tishrei, 1).unwrap().days_in_year(), 353..=355 | 383..=385));
    }

    #[test]
    fn holiday_predicates_agree(date in any_date(), in_israel in any::<bool>(), modern in any::<bool>()) {
        let calendar = JewishCalendar::from_gregorian(date).unwrap().with_in_israel(in_israel).with_modern_holidays(modern);
        if calendar.is_yom_tov_assur_bemelacha() {
            prop_assert!(calendar.is_yom_tov() && calendar.is_assur_bemelacha());
        }
        if calendar.is_taanis() && !calendar.is_yom_kippur() {
            prop_assert!(!calendar.is_yom_tov());
        }
        if in_israel {
            prop_assert_ne!(calendar.holiday(), Some(Holiday::SimchasTorah));
        }
        if !modern {
            prop_assert!(!matches!(
                calendar.holiday(),
                Some(Holiday::YomHashoah | Holiday::YomHazikaron | Holiday::YomHaatzmaut | Holiday::YomYerushalayim)
            ));
        }
        prop_assert_eq!(calendar.is_chanukah(), calendar.day_of_chanukah().is_some());
        if let Some(day) = calendar.day_of_chanukah() {
            prop_assert!((1..=8).contains(&day));
        }
        if let Some(day) = calendar.day_of_omer() {
            prop_assert!((1..=49).contains(&day));
        }
        if date.weekday() == Weekday::Fri {
            prop_assert!(calendar.has_candle_lighting());
        }
    }

    /// Every molad falls within a day of the first of its month
    #[test]
    fn molad_is_near_rosh_chodesh(date in any_date()) {
        let calendar = JewishCalendar::from_gregorian(date).unwrap();
        let molad = calendar.molad_as_date().unwrap().date_naive();
        let first = calendar.date().gregorian() - TimeDelta::days(i64::from(calendar.date().day()) - 1);
        let gap = (first - molad).num_days();
        prop_assert!((0..=3).contains(&gap), "molad {molad} month starts {first}");
        prop_assert!(calendar.tchilas_zman_kidush_levana_3_days() < calendar.sof_zman_kidush_levana_between_moldos());
    }
}

#[test]
fn chametz_zmanim_follow_erev_pesach() {
    let lakewood = GeoLocation::new("Lakewood, NJ", 40.09596, -74.22213, 0.0, chrono_tz::America::New_York).unwrap();
    for (day, holiday) in [(22, Holiday::ErevPesach), (23, Holiday::Pesach)] {
        let date = NaiveDate::from_ymd_opt(2024, 4, day).unwrap();
        let zmanim = ZmanimCalendar::new(date, lakewood.clone(), ZmanimConfig::default()).unwrap();
        assert_eq!(JewishCalendar::from_gregorian(date).unwrap().holiday(), Some(holiday));
        let erev_pesach = holiday == Holiday::ErevPesach;
        assert_eq!(zmanim.sof_zman_achilas_chametz_gra().is_some(), erev_pesach);
        assert_eq!(zmanim.sof_zman_biur_chametz_mga_72_minutes().is_some(), erev_pesach);
    }
    let date = NaiveDate::from_ymd_opt(2024, 4, 22).unwrap();
    let zmanim = ZmanimCalendar::new(date, lakewood, ZmanimConfig::default()).unwrap();
    assert_eq!(zmanim.sof_zman_achilas_chametz_gra(), zmanim.sof_zman_tfila_gra());
    assert!(zmanim.sof_zman_achilas_chametz_gra() < zmanim.sof_zman_biur_chametz_gra());
}
