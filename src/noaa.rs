//! NOAA solar calculator.
//!
//! Implements the equations of the NOAA Solar Calculator spreadsheet
//! (Meeus, *Astronomical Algorithms*): solar noon is found first, then the
//! hour angle of the requested zenith is evaluated at noon and refined once at
//! the estimated event time.

use chrono::NaiveDate;
#[allow(unused_imports)]
use core_maths::CoreFloat;
use tracing::trace;

use crate::calculator::{adjust_zenith, effective_elevation, AstronomicalCalculator};
use crate::geo::GeoLocation;
use crate::math::{acos_deg, asin_deg, cos_deg, sin_deg, wrap_hours};
use crate::time::{julian_century_from_julian_day, julian_day, julian_day_from_julian_century};
use crate::types::SolarEvent;

/// NOAA algorithm. See the [module docs](self).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NoaaCalculator;

impl AstronomicalCalculator for NoaaCalculator {
    fn name(&self) -> &'static str {
        "US National Oceanic and Atmospheric Administration Algorithm"
    }

    fn utc_sunrise(&self, date: NaiveDate, location: &GeoLocation, zenith: f64, adjust_for_elevation: bool) -> Option<f64> {
        let zenith = adjust_zenith(zenith, effective_elevation(location, adjust_for_elevation));
        utc_event(julian_day(date), location.latitude(), -location.longitude(), zenith, SolarEvent::Sunrise)
    }

    fn utc_sunset(&self, date: NaiveDate, location: &GeoLocation, zenith: f64, adjust_for_elevation: bool) -> Option<f64> {
        let zenith = adjust_zenith(zenith, effective_elevation(location, adjust_for_elevation));
        utc_event(julian_day(date), location.latitude(), -location.longitude(), zenith, SolarEvent::Sunset)
    }
}

/// UTC hour of a solar event. `longitude` is positive to the west here.
fn utc_event(julian_day: f64, latitude: f64, longitude: f64, zenith: f64, event: SolarEvent) -> Option<f64> {
    let julian_century = julian_century_from_julian_day(julian_day);

    let noon_minutes = solar_noon_utc_minutes(julian_century, longitude);
    let noon_century = julian_century_from_julian_day(julian_day + noon_minutes / 1440.0);

    // First pass at solar noon.
    let first = event_utc_minutes(noon_century, latitude, longitude, zenith, event)?;

    // Refine at the estimated event time.
    let refined_century = julian_century_from_julian_day(julian_day_from_julian_century(julian_century) + first / 1440.0);
    let minutes = event_utc_minutes(refined_century, latitude, longitude, zenith, event)?;

    trace!(julian_day, noon_minutes, first, minutes, ?event, "noaa solar event");
    Some(wrap_hours(minutes / 60.0))
}

/// Minutes after UTC midnight of the event for the sun's position at `julian_century`.
///
/// `longitude` is positive to the west.
pub(crate) fn event_utc_minutes(julian_century: f64, latitude: f64, longitude: f64, zenith: f64, event: SolarEvent) -> Option<f64> {
    let equation_of_time = equation_of_time(julian_century);
    let declination = sun_declination(julian_century);
    let mut hour_angle = sun_hour_angle(latitude, declination, zenith)?;
    if event == SolarEvent::Sunset {
        hour_angle = -hour_angle;
    }
    let delta = longitude - hour_angle.to_degrees();
    Some(720.0 + 4.0 * delta - equation_of_time)
}

/// Minutes after UTC midnight of local solar noon.
fn solar_noon_utc_minutes(julian_century: f64, longitude: f64) -> f64 {
    let noon_century =
        julian_century_from_julian_day(julian_day_from_julian_century(julian_century) + longitude / 360.0);
    let estimate = 720.0 + longitude * 4.0 - equation_of_time(noon_century);
    let refined_century =
        julian_century_from_julian_day(julian_day_from_julian_century(julian_century) - 0.5 + estimate / 1440.0);
    720.0 + longitude * 4.0 - equation_of_time(refined_century)
}

/// Geometric mean longitude of the sun in degrees, within [0, 360].
fn sun_geometric_mean_longitude(julian_century: f64) -> f64 {
    let mut longitude = 280.46646 + julian_century * (36000.76983 + 0.0003032 * julian_century);
    while longitude > 360.0 {
        longitude -= 360.0;
    }
    while longitude < 0.0 {
        longitude += 360.0;
    }
    longitude
}

fn sun_geometric_mean_anomaly(julian_century: f64) -> f64 {
    357.52911 + julian_century * (35999.05029 - 0.0001537 * julian_century)
}

fn earth_orbit_eccentricity(julian_century: f64) -> f64 {
    0.016708634 - julian_century * (0.000042037 + 0.0000001267 * julian_century)
}

fn sun_equation_of_center(julian_century: f64) -> f64 {
    let m = sun_geometric_mean_anomaly(julian_century);
    sin_deg(m) * (1.914602 - julian_century * (0.004817 + 0.000014 * julian_century))
        + sin_deg(2.0 * m) * (0.019993 - 0.000101 * julian_century)
        + sin_deg(3.0 * m) * 0.000289
}

fn sun_true_longitude(julian_century: f64) -> f64 {
    sun_geometric_mean_longitude(julian_century) + sun_equation_of_center(julian_century)
}

fn sun_apparent_longitude(julian_century: f64) -> f64 {
    let omega = 125.04 - 1934.136 * julian_century;
    sun_true_longitude(julian_century) - 0.00569 - 0.00478 * sin_deg(omega)
}

fn mean_obliquity_of_ecliptic(julian_century: f64) -> f64 {
    let seconds = 21.448 - julian_century * (46.8150 + julian_century * (0.00059 - julian_century * 0.001813));
    23.0 + (26.0 + seconds / 60.0) / 60.0
}

fn obliquity_correction(julian_century: f64) -> f64 {
    let omega = 125.04 - 1934.136 * julian_century;
    mean_obliquity_of_ecliptic(julian_century) + 0.00256 * cos_deg(omega)
}

/// Declination of the sun in degrees.
fn sun_declination(julian_century: f64) -> f64 {
    let sin_t = sin_deg(obliquity_correction(julian_century)) * sin_deg(sun_apparent_longitude(julian_century));
    asin_deg(sin_t)
}

/// Difference between true and mean solar time, in minutes.
fn equation_of_time(julian_century: f64) -> f64 {
    let epsilon = obliquity_correction(julian_century);
    let l0 = sun_geometric_mean_longitude(julian_century).to_radians();
    let e = earth_orbit_eccentricity(julian_century);
    let m = sun_geometric_mean_anomaly(julian_century).to_radians();

    let mut y = (epsilon.to_radians() / 2.0).tan();
    y *= y;

    let equation = y * (2.0 * l0).sin() - 2.0 * e * m.sin() + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
        - 0.5 * y * y * (4.0 * l0).sin()
        - 1.25 * e * e * (2.0 * m).sin();
    equation.to_degrees() * 4.0
}

/// Hour angle of the sun at `zenith`, in radians. `None` when the sun never gets there.
fn sun_hour_angle(latitude: f64, declination: f64, zenith: f64) -> Option<f64> {
    let lat = latitude.to_radians();
    let dec = declination.to_radians();
    let ratio = cos_deg(zenith) / (lat.cos() * dec.cos()) - lat.tan() * dec.tan();
    let angle = acos_deg(ratio);
    angle.is_finite().then(|| angle.to_radians())
}
