//! US Naval Almanac sunrise/sunset algorithm.
//!
//! The single pass "Almanac for Computers" (1990) method: the sun's position
//! is evaluated once at an approximate event time (06:00 or 18:00 local mean
//! time) and the hour angle for the zenith is converted straight to UTC.

use chrono::{Datelike, NaiveDate};
#[allow(unused_imports)]
use core_maths::CoreFloat;
use tracing::trace;

use crate::calculator::{adjust_zenith, effective_elevation, AstronomicalCalculator};
use crate::geo::GeoLocation;
use crate::math::{acos_deg, asin_deg, cos_deg, sin_deg, tan_deg, wrap_hours};
use crate::types::SolarEvent;

/// Degrees of longitude per hour
const DEG_PER_HOUR: f64 = 360.0 / 24.0;

/// US Naval Almanac algorithm. See the [module docs](self).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SunTimesCalculator;

impl AstronomicalCalculator for SunTimesCalculator {
    fn name(&self) -> &'static str {
        "US Naval Almanac Algorithm"
    }

    fn utc_sunrise(&self, date: NaiveDate, location: &GeoLocation, zenith: f64, adjust_for_elevation: bool) -> Option<f64> {
        let zenith = adjust_zenith(zenith, effective_elevation(location, adjust_for_elevation));
        almanac_event(date.ordinal(), location.latitude(), location.longitude(), zenith, SolarEvent::Sunrise)
    }

    fn utc_sunset(&self, date: NaiveDate, location: &GeoLocation, zenith: f64, adjust_for_elevation: bool) -> Option<f64> {
        let zenith = adjust_zenith(zenith, effective_elevation(location, adjust_for_elevation));
        almanac_event(date.ordinal(), location.latitude(), location.longitude(), zenith, SolarEvent::Sunset)
    }
}

/// UTC hour of `event` by the almanac method.
fn almanac_event(day_of_year: u32, latitude: f64, longitude: f64, zenith: f64, event: SolarEvent) -> Option<f64> {
    let longitude_hour = longitude / DEG_PER_HOUR;
    let approximate_local_hour = match event {
        SolarEvent::Sunrise => 6.0,
        SolarEvent::Sunset => 18.0,
    };
    let t = f64::from(day_of_year) + (approximate_local_hour - longitude_hour) / 24.0;

    let mean_anomaly = 0.9856 * t - 3.289;
    let mut true_longitude =
        mean_anomaly + 1.916 * sin_deg(mean_anomaly) + 0.020 * sin_deg(2.0 * mean_anomaly) + 282.634;
    if true_longitude >= 360.0 {
        true_longitude -= 360.0;
    }
    if true_longitude < 0.0 {
        true_longitude += 360.0;
    }

    let mut right_ascension = (0.91764 * tan_deg(true_longitude)).atan().to_degrees();
    // same quadrant as the true longitude
    let l_quadrant = (true_longitude / 90.0).floor() * 90.0;
    let ra_quadrant = (right_ascension / 90.0).floor() * 90.0;
    right_ascension = (right_ascension + l_quadrant - ra_quadrant) / DEG_PER_HOUR;

    let sin_declination = 0.39782 * sin_deg(true_longitude);
    let cos_declination = cos_deg(asin_deg(sin_declination));

    let cos_hour_angle =
        (cos_deg(zenith) - sin_declination * sin_deg(latitude)) / (cos_declination * cos_deg(latitude));
    let hour_angle = acos_deg(cos_hour_angle);
    if !hour_angle.is_finite() {
        trace!(day_of_year, latitude, zenith, cos_hour_angle, "sun never reaches zenith");
        return None;
    }
    let local_hour_angle = match event {
        SolarEvent::Sunrise => 360.0 - hour_angle,
        SolarEvent::Sunset => hour_angle,
    } / DEG_PER_HOUR;

    let local_mean_time = local_hour_angle + right_ascension - 0.06571 * t - 6.622;
    Some(wrap_hours(local_mean_time - longitude_hour))
}
