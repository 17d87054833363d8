//! # Zmanim
//!
//! Sunrise, sunset, twilight and halachic times (zmanim) for any location and
//! date, plus the rules of the Jewish calendar.
//!
//! The library is layered:
//!
//! - [`GeoLocation`] holds coordinates, elevation and a time zone.
//! - An [`AstronomicalCalculator`] (NOAA, US Naval Almanac, or the legacy
//!   single pass NOAA port) turns a date, location and zenith into UTC hours.
//! - [`AstronomicalCalendar`] turns those hours into zoned date-times and adds
//!   twilight, solar transit and temporal hours.
//! - [`ZmanimCalendar`] evaluates the catalog of zmanim, each one a
//!   [`Formula`] over solar [`Event`]s.
//! - [`JewishDate`] and [`JewishCalendar`] convert dates and classify
//!   holidays, fasts and molad-based times.
//!
//! A time that does not occur (polar day or night, a depression the sun never
//! reaches) is `None`, and anything computed from it is `None` too.
//!
//! ## Basic Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use zmanim::{Calculator, GeoLocation, ZmanimCalendar, ZmanimConfig};
//!
//! let lakewood = GeoLocation::from_tz_name("Lakewood, NJ", 40.09596, -74.22213, 0.0, "America/New_York").unwrap();
//! let date = NaiveDate::from_ymd_opt(2010, 4, 2).unwrap();
//! let config = ZmanimConfig::default().with_calculator(Calculator::SunTimes);
//! let calendar = ZmanimCalendar::new(date, lakewood, config).unwrap();
//!
//! let shma = calendar.sof_zman_shma_gra().unwrap();
//! assert_eq!(shma.format("%H:%M:%S").to_string(), "09:50:17");
//!
//! // Every named zman is also listed in a table.
//! for (name, formula) in zmanim::CATALOG.iter().take(3) {
//!     println!("{name}: {:?}", calendar.zman(*formula));
//! }
//! ```
#![no_std]

extern crate alloc;
#[cfg(test)]
extern crate std;

mod astronomical;
mod calculator;
mod config;
mod geo;
mod jewish_calendar;
mod jewish_date;
mod legacy;
mod math;
mod noaa;
mod sun_times;
mod time;
mod types;
pub mod zenith;
mod zmanim;

#[cfg(test)]
mod tests;

pub use astronomical::{
    minutes_delta, sun_transit_between, temporal_hour_between, time_offset, AstronomicalCalendar, MAX_SOLAR_DIP,
};
pub use calculator::{
    adjust_zenith, elevation_adjustment, AstronomicalCalculator, Calculator, EARTH_RADIUS, REFRACTION, SOLAR_RADIUS,
};
pub use config::ZmanimConfig;
pub use geo::{GeoLocation, Hemisphere};
pub use jewish_calendar::{Holiday, JewishCalendar};
pub use jewish_date::{
    days_in_month, days_in_year, is_cheshvan_long, is_kislev_short, is_leap_year, JewishDate, JewishMonth, Molad,
    YearType,
};
pub use legacy::LegacyCalculator;
pub use noaa::NoaaCalculator;
pub use sun_times::SunTimesCalculator;
pub use types::{SolarEvent, ZmanimError};
pub use zmanim::{Day, Event, Formula, ZmanimCalendar, CATALOG};
