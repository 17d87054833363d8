//! Superseded single pass port of the NOAA JavaScript calculator.
//!
//! Uses the same solar equations as [`NoaaCalculator`](crate::NoaaCalculator)
//! but evaluates them once, at 12:00 UT of the date, with no solar noon step
//! and no refinement. The sun's declination is therefore taken hours away
//! from the event, which costs up to about a minute near the equinoxes.

use chrono::NaiveDate;
use tracing::trace;

use crate::calculator::{adjust_zenith, effective_elevation, AstronomicalCalculator};
use crate::geo::GeoLocation;
use crate::math::wrap_hours;
use crate::noaa::event_utc_minutes;
use crate::time::{julian_century_from_julian_day, julian_day};
use crate::types::SolarEvent;

/// Legacy single pass calculator. Kept so old tables can be reproduced.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct LegacyCalculator;

impl AstronomicalCalculator for LegacyCalculator {
    fn name(&self) -> &'static str {
        "NOAA Algorithm (legacy single pass port)"
    }

    fn utc_sunrise(&self, date: NaiveDate, location: &GeoLocation, zenith: f64, adjust_for_elevation: bool) -> Option<f64> {
        let zenith = adjust_zenith(zenith, effective_elevation(location, adjust_for_elevation));
        single_pass(date, location, zenith, SolarEvent::Sunrise)
    }

    fn utc_sunset(&self, date: NaiveDate, location: &GeoLocation, zenith: f64, adjust_for_elevation: bool) -> Option<f64> {
        let zenith = adjust_zenith(zenith, effective_elevation(location, adjust_for_elevation));
        single_pass(date, location, zenith, SolarEvent::Sunset)
    }
}

fn single_pass(date: NaiveDate, location: &GeoLocation, zenith: f64, event: SolarEvent) -> Option<f64> {
    let midday_century = julian_century_from_julian_day(julian_day(date) + 0.5);
    let minutes = event_utc_minutes(midday_century, location.latitude(), -location.longitude(), zenith, event)?;
    trace!(%date, minutes, ?event, "legacy solar event");
    Some(wrap_hours(minutes / 60.0))
}
